//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스 이름, 서버 바인딩, 실행 환경 및 보안 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그대로 사용하고,
    /// 그렇지 않으면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// 논리 데이터베이스 이름 설정
///
/// 운영 데이터베이스와 테스트 격리용 데이터베이스는 같은 클라이언트와
/// 같은 스키마를 공유하며 이름만 다릅니다.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// 운영 데이터베이스 이름
    pub production_name: String,
    /// `X-Test-Database: true` 요청이 사용하는 데이터베이스 이름
    pub test_name: String,
    /// MongoDB 서버 로그에 표시될 애플리케이션 이름
    pub app_name: String,
}

impl DatabaseConfig {
    pub const DEFAULT_PRODUCTION_NAME: &'static str = "filmotheque";
    pub const DEFAULT_TEST_NAME: &'static str = "filmotheque_test";
    pub const DEFAULT_APP_NAME: &'static str = "filmotheque";

    /// 환경 변수에서 데이터베이스 설정을 읽습니다.
    ///
    /// ## 환경 변수
    /// - `DATABASE_NAME`: 운영 데이터베이스 이름 (기본값: "filmotheque")
    /// - `TEST_DATABASE_NAME`: 테스트 데이터베이스 이름 (기본값: "filmotheque_test")
    /// - `MONGODB_APP_NAME`: 애플리케이션 이름 (기본값: "filmotheque")
    pub fn from_env() -> Self {
        Self {
            production_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| Self::DEFAULT_PRODUCTION_NAME.to_string()),
            test_name: env::var("TEST_DATABASE_NAME")
                .unwrap_or_else(|_| Self::DEFAULT_TEST_NAME.to_string()),
            app_name: env::var("MONGODB_APP_NAME")
                .unwrap_or_else(|_| Self::DEFAULT_APP_NAME.to_string()),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            production_name: Self::DEFAULT_PRODUCTION_NAME.to_string(),
            test_name: Self::DEFAULT_TEST_NAME.to_string(),
            app_name: Self::DEFAULT_APP_NAME.to_string(),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(|| {
                log::debug!("RATE_LIMIT_PER_SECOND 미설정 또는 파싱 실패. 기본값 100 사용");
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or_else(|| {
                log::debug!("RATE_LIMIT_BURST_SIZE 미설정 또는 파싱 실패. 기본값 200 사용");
                200
            });

        Self { per_second, burst_size }
    }
}

//! 필모테크 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 공유 상태를 초기화합니다.
//! MongoDB 클라이언트는 첫 요청 시점에 지연 생성되며, 서버가 멈추면 닫힙니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use filmotheque_backend::config::{CredentialResolver, DatabaseConfig, RateLimitConfig, ServerConfig};
use filmotheque_backend::core::AppState;
use filmotheque_backend::db::{ConnectionManager, EnvironmentRouter};
use filmotheque_backend::middlewares::TestEnvironment;
use filmotheque_backend::repositories::{films::FilmRepository, users::UserRepository};
use filmotheque_backend::routes::configure_all_routes;
use filmotheque_backend::services::auth::{BcryptPasswordHasher, PasswordHasher};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 필모테크 백엔드 시작중...");

    let connections = Arc::new(ConnectionManager::new(
        CredentialResolver::from_env(),
        DatabaseConfig::from_env(),
    ));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptPasswordHasher::from_config());

    initialize_data_store(&connections).await;

    let state = web::Data::new(AppState::new(connections.clone(), hasher));

    // HTTP 서버 시작
    let result = start_http_server(state).await;

    connections.close().await;
    info!("👋 MongoDB 연결 종료");

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화, 테스트 데이터베이스 선택
/// 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Rate Limiting 설정이 올바르지 않습니다 (0은 허용되지 않음)",
        ))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .app_data(state.clone())

            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 요청별 운영/테스트 데이터베이스 선택
            .wrap(TestEnvironment::new())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=filmotheque_backend::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 시작 시점 연결 확인 및 인덱스 생성
///
/// MongoDB에 닿지 못해도 서버는 시작합니다. 클라이언트는 요청 시점에
/// 다시 사용되며, 실패는 `/health`로 드러납니다.
async fn initialize_data_store(connections: &ConnectionManager) {
    info!("📡 데이터베이스 연결 확인 중...");

    let router = EnvironmentRouter::production();

    if let Err(e) = connections.ping(&router).await {
        warn!("MongoDB 연결 확인 실패: {}. 요청 시점에 다시 시도합니다", e);
        return;
    }

    info!("✅ MongoDB 연결 성공");

    for router in [EnvironmentRouter::production(), EnvironmentRouter::test()] {
        let database = match connections.get_database(&router).await {
            Ok(database) => database,
            Err(e) => {
                warn!("데이터베이스 핸들 생성 실패: {}", e);
                continue;
            }
        };

        if let Err(e) = FilmRepository::new(&database).create_indexes().await {
            warn!("films 인덱스 생성 실패 ({}): {}", database.name(), e);
        }
        if let Err(e) = UserRepository::new(&database).create_indexes().await {
            warn!("users 인덱스 생성 실패 ({}): {}", database.name(), e);
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬호스트 간 통신을 허용하며, 테스트 데이터베이스
/// 선택 헤더도 허용 목록에 포함합니다.
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-test-database"),
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

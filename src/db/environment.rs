//! 요청 단위 데이터베이스 라우팅
//!
//! 하나의 작업 단위(HTTP 요청 하나)가 운영 데이터베이스와 테스트 격리
//! 데이터베이스 중 어느 쪽을 사용할지 나타내는 값입니다.
//! 전역 상태가 아니며, 요청마다 새로 만들어져 호출 체인을 따라 전달됩니다.
//!
//! HTTP 계층에서는 [`TestEnvironment`](crate::middlewares::TestEnvironment)
//! 미들웨어가 `X-Test-Database` 헤더로 값을 설정하고, 요청이 끝나면
//! (에러 경로 포함) 정리합니다.

use std::future::{ready, Ready};
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use crate::config::DatabaseConfig;

/// 테스트 데이터베이스 선택 헤더
pub const TEST_DATABASE_HEADER: &str = "X-Test-Database";

/// 작업 단위별 환경 선택 값
///
/// 설정되지 않았거나 정리된 상태는 운영 데이터베이스를 의미합니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentRouter {
    test_mode: Option<bool>,
}

impl EnvironmentRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 운영 데이터베이스로 고정된 라우터
    pub fn production() -> Self {
        Self { test_mode: Some(false) }
    }

    /// 테스트 데이터베이스로 고정된 라우터
    pub fn test() -> Self {
        Self { test_mode: Some(true) }
    }

    /// `X-Test-Database` 헤더 값으로부터 라우터를 만듭니다.
    ///
    /// 대소문자 구분 없이 `"true"`인 경우에만 테스트 모드입니다.
    pub fn from_header_value(value: Option<&str>) -> Self {
        let mut router = Self::new();
        router.set_test_mode(value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true")));
        router
    }

    pub fn set_test_mode(&mut self, test_mode: bool) {
        self.test_mode = Some(test_mode);
    }

    pub fn clear(&mut self) {
        self.test_mode = None;
    }

    pub fn is_test_mode(&self) -> bool {
        self.test_mode.unwrap_or(false)
    }

    /// 현재 모드에 해당하는 데이터베이스 이름
    pub fn database_name<'a>(&self, config: &'a DatabaseConfig) -> &'a str {
        if self.is_test_mode() {
            &config.test_name
        } else {
            &config.production_name
        }
    }
}

/// 핸들러에서 `router: EnvironmentRouter` 인자로 추출합니다.
///
/// 미들웨어가 설정하지 않은 요청은 운영 모드로 추출됩니다.
impl FromRequest for EnvironmentRouter {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let router = req
            .extensions()
            .get::<EnvironmentRouter>()
            .copied()
            .unwrap_or_default();
        ready(Ok(router))
    }
}

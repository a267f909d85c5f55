//! 테스트 데이터베이스 선택 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 `X-Test-Database` 헤더를 읽어 요청별
//! [`EnvironmentRouter`](crate::db::EnvironmentRouter)를 설정합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::test_environment_inner::TestEnvironmentService;

/// 테스트 데이터베이스 선택 미들웨어
///
/// 헤더 값이 대소문자 구분 없이 `true`이면 테스트 데이터베이스, 그 외(헤더 없음 포함)는
/// 운영 데이터베이스를 사용합니다. 라우터는 요청이 끝나면 성공/실패와 무관하게 제거됩니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestEnvironment;

impl TestEnvironment {
    pub fn new() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for TestEnvironment
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = TestEnvironmentService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TestEnvironmentService {
            service: Rc::new(service),
        }))
    }
}

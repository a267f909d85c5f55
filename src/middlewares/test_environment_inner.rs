//! TestEnvironment 미들웨어의 요청 처리 로직
use std::rc::Rc;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::db::{EnvironmentRouter, TEST_DATABASE_HEADER};

/// 요청마다 라우터를 설정하고 정리하는 서비스
pub struct TestEnvironmentService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TestEnvironmentService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let header = req
                .headers()
                .get(TEST_DATABASE_HEADER)
                .and_then(|h| h.to_str().ok());
            let router = EnvironmentRouter::from_header_value(header);

            if router.is_test_mode() {
                log::debug!("테스트 데이터베이스 요청: {} {}", req.method(), req.path());
            }

            req.extensions_mut().insert(router);

            // 내부 서비스가 요청을 소비하므로 정리용 핸들을 먼저 확보
            let http_req = req.request().clone();

            let result = service.call(req).await;

            // 성공/실패와 무관하게 정리
            http_req.extensions_mut().remove::<EnvironmentRouter>();

            result
        })
    }
}

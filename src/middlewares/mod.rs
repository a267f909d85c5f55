//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 테스트 데이터베이스 선택 (TestEnvironment)
//! - `X-Test-Database: true` 헤더가 있으면 테스트 데이터베이스로 라우팅
//! - 요청별 `EnvironmentRouter`를 request extension에 저장
//! - 요청 종료 시 (에러 포함) 라우터 제거
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::TestEnvironment;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(TestEnvironment::new())
//!         .service(/* 라우트들 */)
//! })
//! ```

pub mod test_environment;
mod test_environment_inner;

// 미들웨어 재export
pub use test_environment::TestEnvironment;

//! # Core Module
//!
//! 계층 전반에서 공유하는 기반 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현
//! - **ErrorContext**: 외부 에러에 문맥을 붙여 `InternalError`로 변환
//!
//! ### [`app_state`] - 공유 상태
//! - **AppState**: 연결 관리자와 비밀번호 해셔를 담는 컴포지션 루트
//! - 핸들러는 `web::Data<AppState>`로 받아 요청별 서비스를 생성
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use crate::core::{AppError, AppState};
//! use crate::db::EnvironmentRouter;
//!
//! async fn get_user(
//!     state: web::Data<AppState>,
//!     router: EnvironmentRouter,
//!     user_id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let service = state.user_service(&router).await?;
//!     Ok(HttpResponse::Ok().json(service.get_user_by_id(&user_id).await?))
//! }
//! ```

pub mod app_state;
pub mod errors;

pub use app_state::AppState;
pub use errors::*;

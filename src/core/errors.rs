//! # Application Error Handling System
//!
//! 필모테크 백엔드 전역에서 사용하는 통합 에러 타입입니다.
//! 데이터 액세스 계층의 실패를 구조적으로 구분하여, 상위 계층이
//! 에러 문자열을 파싱하지 않고도 분기할 수 있도록 합니다.
//!
//! ## 에러 분류
//!
//! | 상황 | 표현 방식 |
//! |------|-----------|
//! | 설정 조회 실패 | 에러 아님 - 경고 로그 후 기본값 사용 |
//! | 엔티티 없음 (리포지토리) | `Ok(None)` |
//! | 엔티티 없음 (서비스) | `AppError::NotFound` |
//! | 저장소 연결/작업 실패 | `AppError::DatabaseError` |
//! | 문서 → 엔티티 변환 실패 | `AppError::MappingError` |
//! | 연쇄 쓰기 중간 실패 | 실패한 단계의 `DatabaseError` (이미 저장된 자식 문서는 남음) |
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | `DatabaseError` / `MappingError` / `InternalError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let user = user_repo
//!     .get_by_id(id)
//!     .await?
//!     .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연결 또는 쿼리 실패
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 저장된 문서를 엔티티로 변환할 수 없음
    #[error("Mapping error: {0}")]
    MappingError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict error: {0}")]
    ConflictError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 저장소 계층 에러를 `DatabaseError`로 감쌉니다.
    pub fn database(err: impl std::fmt::Display) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("Email already used".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid credentials".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_store_errors_are_internal() {
        for error in [
            AppError::DatabaseError("connection refused".to_string()),
            AppError::MappingError("missing film_id".to_string()),
            AppError::InternalError("boom".to_string()),
        ] {
            assert_eq!(
                error.error_response().status(),
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn test_database_helper_keeps_message() {
        let error = AppError::database("server selection timeout");
        assert!(matches!(error, AppError::DatabaseError(ref msg) if msg == "server selection timeout"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}

//! # 사용자 등록 요청 DTO
//!
//! 회원가입 요청 본문을 표현합니다. 필드 형식 검증은 `validator`로
//! 수행하고, 이메일 중복 여부는 서비스 계층에서 확인합니다.
//!
//! ## 검증 규칙
//!
//! - `lastname`, `firstname`, `password`: 공백만으로 이루어질 수 없음
//! - `email`: 이메일 형식
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use validator::Validate;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! async fn register(req: web::Json<CreateUserRequest>) -> Result<HttpResponse, AppError> {
//!     req.validate()?;
//!     let created = service.register(req.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(created))
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "lastname": "Varda",
///   "firstname": "Agnès",
///   "email": "agnes@example.com",
///   "password": "cleo5a7"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(custom(function = "validate_not_blank", message = "성을 입력해주세요"))]
    pub lastname: String,

    #[validate(custom(function = "validate_not_blank", message = "이름을 입력해주세요"))]
    pub firstname: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 평문 비밀번호 (저장 전 해싱됨)
    #[validate(custom(function = "validate_not_blank", message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateUserRequest {
        CreateUserRequest {
            lastname: "Varda".to_string(),
            firstname: "Agnès".to_string(),
            email: "agnes@example.com".to_string(),
            password: "cleo5a7".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let req = CreateUserRequest {
            lastname: "   ".to_string(),
            password: String::new(),
            ..request()
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("lastname"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("firstname"));
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let req = CreateUserRequest {
            email: "not-an-email".to_string(),
            ..request()
        };

        assert!(req.validate().unwrap_err().field_errors().contains_key("email"));
    }
}

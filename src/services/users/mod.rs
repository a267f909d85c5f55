//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록, 인증, 조회, 삭제 등의 핵심 기능을 구현합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 ([`PasswordHasher`](crate::services::auth::PasswordHasher))
//! - 이메일 중복 방지
//! - 입력값 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(&db, hasher);
//! let response = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;

//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! 모든 사용자는 생성 시점부터 자신의 라이브러리를 하나 소유합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{NewUser, PasswordInput, User};
//!
//! // 평문 비밀번호 - 생성 시 해싱
//! let user = User::new(
//!     NewUser::new("Varda", "Agnès", "agnes@example.com", PasswordInput::Raw(password)),
//!     &hasher,
//! )?;
//!
//! // 이미 해싱된 비밀번호
//! let user = User::new(
//!     NewUser::new("Varda", "Agnès", "agnes@example.com", PasswordInput::Digest(digest)),
//!     &hasher,
//! )?;
//! assert_eq!(user.library.id, user.id);
//! ```

pub mod user;

pub use user::{NewUser, PasswordInput, User};

//! 인증 관련 서비스 모듈
//!
//! 비밀번호 해싱 기능을 제공합니다. 도메인 계층은 [`PasswordHasher`] 트레이트만
//! 알고 있으며, 실제 알고리즘은 애플리케이션 시작 시 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::auth::{BcryptPasswordHasher, PasswordHasher};
//!
//! let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptPasswordHasher::from_config());
//! let digest = hasher.hash("cleo5a7")?;
//! assert!(hasher.verify("cleo5a7", &digest)?);
//! ```

pub mod password_hasher;

pub use password_hasher::*;

//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 요청마다 라우팅된 데이터베이스 핸들로 생성되며, 리포지토리를
//! 조합하여 도메인 규칙(중복 확인, 인증, 연쇄 삭제 등)을 적용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{libraries::LibraryService, users::UserService};
//!
//! let db = state.connections.get_database(&router).await?;
//! let user_service = UserService::new(&db, state.hasher.clone());
//! let library_service = LibraryService::new(&db);
//! ```

pub mod auth;
pub mod libraries;
pub mod users;

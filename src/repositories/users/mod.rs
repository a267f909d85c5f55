//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)는 사용자 레코드와 함께
//! 소유 라이브러리의 생성/조회를 연쇄적으로 처리합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let user_repo = UserRepository::new(&db);
//! let user = user_repo.get_by_email("user@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::*;

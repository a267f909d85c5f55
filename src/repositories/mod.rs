//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 라우팅된 `mongodb::Database` 핸들 위에 생성되며
//! `Collection<Document>`와 [`codec`]의 변환 전략으로 동작합니다.
//!
//! # 소유 관계와 연쇄
//!
//! ```text
//! UserRepository ──▶ LibraryRepository ──▶ FilmRepository
//!   (users)            (libraries)           (films)
//! ```
//!
//! 상위 리포지토리는 하위 리포지토리를 직접 소유하며, 트랜잭션 없이
//! 순서대로 호출합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let db = manager.get_database(&router).await?;
//! let user_repo = UserRepository::new(&db);
//! let user = user_repo.get_by_email("user@example.com").await?;
//! ```

pub mod codec;
pub mod films;
pub mod libraries;
pub mod users;

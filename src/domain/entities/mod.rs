//! # Domain Entities
//!
//! 메모리에서 생성되어 리포지토리로 저장되고, 저장된 문서로부터 다시
//! 복원되는 값 객체들입니다. 캐시나 identity map은 없으며 모든 조회는
//! 문서를 새로 읽어 변환합니다.
//!
//! ```text
//! User ──owns──▶ Library ──owns──▶ Film ──embeds──▶ Person (director, actors)
//! ```

pub mod films;
pub mod libraries;
pub mod users;

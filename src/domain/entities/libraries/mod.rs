//! Libraries Entity Module
//!
//! 사용자가 소유한 필름 라이브러리 엔티티입니다.

pub mod library;

pub use library::Library;

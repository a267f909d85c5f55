//! 도메인 계층
//!
//! - [`entities`] - 저장 대상 값 객체 (User, Library, Film, Person)
//! - [`dto`] - HTTP 계층과 주고받는 요청/응답 객체

pub mod entities;
pub mod dto;

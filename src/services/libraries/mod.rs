//! 라이브러리 서비스 모듈
//!
//! 사용자가 소유한 필름 라이브러리를 다루는 비즈니스 로직을 제공합니다.

pub mod library_service;

pub use library_service::LibraryService;

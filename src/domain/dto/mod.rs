//! 요청/응답 데이터 전송 객체
//!
//! - [`users`] - 회원가입, 로그인, 사용자 요약 응답
//! - [`films`] - 필름 추가 요청, 라이브러리 검색 쿼리

pub mod films;
pub mod users;

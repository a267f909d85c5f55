//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에 전달하는 응답 객체들입니다.
//! 비밀번호 다이제스트는 어떤 응답에도 포함되지 않습니다.
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "0b6c7d1e-4f0a-4c2e-9d55-3a1f3b8a2c10",
//!   "lastname": "Varda",
//!   "firstname": "Agnès",
//!   "email": "agnes@example.com",
//!   "library_id": "0b6c7d1e-4f0a-4c2e-9d55-3a1f3b8a2c10",
//!   "film_count": 3
//! }
//! ```

pub mod user_response;

pub use user_response::{CreateUserResponse, LoginResponse, UserResponse};

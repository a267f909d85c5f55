//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   TestEnvironment 미들웨어 - EnvironmentRouter 설정
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 모든 핸들러는 `web::Data<AppState>`와 요청별 `EnvironmentRouter`를 받아
//! 라우팅된 데이터베이스 위에 서비스를 만들고, 결과를 JSON으로 돌려줍니다.
//! 에러는 `AppError`의 `ResponseError` 구현이 상태 코드로 변환합니다.
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 로컬 로그인 (`POST /auth/login`)
//! - **`users`**: 사용자 생성/조회/삭제 (`/users`)
//! - **`library`**: 사용자 라이브러리 필름 목록/추가/제거 (`/users/{id}/library`)

pub mod auth;
pub mod library;
pub mod users;

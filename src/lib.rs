//! 필모테크 백엔드
//!
//! 사용자가 필름 라이브러리를 소유하는 카탈로그 서비스의 데이터 액세스 계층과
//! 이를 노출하는 얇은 JSON HTTP API입니다.
//!
//! # Features
//!
//! - **연결 관리**: 지연 생성되는 단일 MongoDB 클라이언트, 멱등 종료
//! - **접속 정보 해석**: URL/사용자/비밀번호 우선순위와 안전한 기본값
//! - **환경 라우팅**: `X-Test-Database` 헤더로 요청별 운영/테스트 데이터베이스 선택
//! - **연쇄 쓰기**: 사용자 → 라이브러리 → 필름 순서의 소유 관계 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + TestEnvironment 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 엔티티 ↔ 문서 변환, 연쇄 쓰기
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ConnectionManager│ ← MongoDB 클라이언트
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use filmotheque_backend::config::{CredentialResolver, DatabaseConfig};
//! use filmotheque_backend::db::{ConnectionManager, EnvironmentRouter};
//! use filmotheque_backend::repositories::users::UserRepository;
//!
//! let manager = ConnectionManager::new(CredentialResolver::from_env(), DatabaseConfig::from_env());
//! let db = manager.get_database(&EnvironmentRouter::test()).await?;
//! let user = UserRepository::new(&db).get_by_email("agnes@example.com").await?;
//! manager.close().await;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;

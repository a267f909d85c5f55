//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수(및 `.env` 프로필 파일) 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스 이름, 서버, 환경, 비밀번호 해싱 설정
//! - [`credentials`] - MongoDB 접속 정보 해석 (URL/사용자/비밀번호 우선순위)
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # MongoDB 접속 정보 (모두 선택)
//! export MONGODB_URL="mongodb://db.internal:27017"
//! export MONGODB_USER="films"
//! export MONGODB_PASSWORD="secret"
//!
//! # 논리 데이터베이스 이름
//! export DATABASE_NAME="filmotheque"
//! export TEST_DATABASE_NAME="filmotheque_test"
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod credentials;

pub use data_config::*;
pub use credentials::{ConnectionParams, CredentialResolver, CredentialSource, EnvNamingContext, NamingContext, StaticNamingContext};

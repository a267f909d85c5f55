//! 비밀번호 해싱 기능
//!
//! 데이터 계층은 해싱 알고리즘을 알지 못하며, `hash`/`verify` 두 연산만
//! 사용합니다. 운영 구현은 bcrypt이며 cost는 [`PasswordConfig`]를 따릅니다.

use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// 비밀번호 다이제스트 생성/검증
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> AppResult<String>;

    fn verify(&self, password: &str, digest: &str) -> AppResult<bool>;
}

/// bcrypt 기반 구현
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경 설정의 cost를 사용합니다.
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> AppResult<String> {
        let start = std::time::Instant::now();
        let digest = bcrypt::hash(password, self.cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", start.elapsed());
        Ok(digest)
    }

    fn verify(&self, password: &str, digest: &str) -> AppResult<bool> {
        bcrypt::verify(password, digest).context("비밀번호 검증 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = BcryptPasswordHasher::new(4);
        let digest = hasher.hash("correct horse").unwrap();

        assert_ne!(digest, "correct horse");
        assert!(hasher.verify("correct horse", &digest).unwrap());
        assert!(!hasher.verify("wrong horse", &digest).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_digest() {
        let hasher = BcryptPasswordHasher::new(4);

        assert!(hasher.verify("anything", "not-a-bcrypt-digest").is_err());
    }
}

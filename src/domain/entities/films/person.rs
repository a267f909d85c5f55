//! 인물 값 객체

use serde::{Deserialize, Serialize};

/// 감독/배우를 나타내는 이름뿐인 값 객체
///
/// 독립적인 식별자가 없으며 필름 문서 안에 내장되어서만 저장됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 비밀번호는 항상 다이제스트로 보관되며, 평문 여부는 생성 시점에
//! [`PasswordInput`]으로 명시적으로 구분합니다.

use uuid::Uuid;
use crate::core::errors::AppResult;
use crate::domain::entities::libraries::Library;
use crate::services::auth::PasswordHasher;

/// 생성자에 전달되는 비밀번호의 형태
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordInput {
    /// 평문 - 생성 시 해싱됩니다
    Raw(String),
    /// 이미 해싱된 다이제스트 - 그대로 보관됩니다
    Digest(String),
}

/// 사용자 생성 요청
///
/// `id`가 없으면 UUID v4가 생성되고, `library`가 없으면 사용자 ID를
/// 식별자로 하는 빈 라이브러리가 만들어집니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub lastname: String,
    pub firstname: String,
    pub email: String,
    pub password: PasswordInput,
    pub id: Option<String>,
    pub library: Option<Library>,
}

impl NewUser {
    pub fn new(
        lastname: impl Into<String>,
        firstname: impl Into<String>,
        email: impl Into<String>,
        password: PasswordInput,
    ) -> Self {
        Self {
            lastname: lastname.into(),
            firstname: firstname.into(),
            email: email.into(),
            password,
            id: None,
            library: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_library(mut self, library: Library) -> Self {
        self.library = Some(library);
        self
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub lastname: String,
    pub firstname: String,
    /// 이메일 (유일해야 하지만 데이터 계층에서 강제하지 않음)
    pub email: String,
    /// 비밀번호 다이제스트
    pub password: String,
    /// 사용자가 소유한 라이브러리 (항상 존재)
    pub library: Library,
}

impl User {
    /// 새 사용자를 생성합니다.
    ///
    /// `PasswordInput::Raw`이면 `hasher`로 해싱하고, `Digest`이면 그대로 사용합니다.
    pub fn new(new_user: NewUser, hasher: &dyn PasswordHasher) -> AppResult<Self> {
        let NewUser {
            lastname,
            firstname,
            email,
            password,
            id,
            library,
        } = new_user;

        let password = match password {
            PasswordInput::Raw(raw) => hasher.hash(&raw)?,
            PasswordInput::Digest(digest) => digest,
        };

        let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let library = library.unwrap_or_else(|| Library::for_owner(id.clone()));

        Ok(Self {
            id,
            lastname,
            firstname,
            email,
            password,
            library,
        })
    }

    /// 저장된 레코드로부터 사용자를 복원합니다. 해싱은 수행하지 않습니다.
    pub fn from_record(
        id: String,
        lastname: String,
        firstname: String,
        email: String,
        password_digest: String,
        library: Library,
    ) -> Self {
        Self {
            id,
            lastname,
            firstname,
            email,
            password: password_digest,
            library,
        }
    }

    /// 표시용 전체 이름
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

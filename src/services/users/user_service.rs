//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기(등록, 인증, 조회, 삭제)를 담당하는 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UserService                        │
//! │  • 입력 검증        • 이메일 중복 확인                   │
//! │  • 비밀번호 해싱    • 비밀번호 검증                      │
//! │  • 엔티티 → DTO     • 삭제 시 라이브러리/필름 정리       │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │ UserRepository ──▶ LibraryRepository ──▶ FilmRepository │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! 서비스는 요청마다 라우팅된 데이터베이스 핸들로 생성됩니다. 따라서
//! 같은 요청 안의 모든 리포지토리는 같은 환경(운영/테스트)을 바라봅니다.

use std::sync::Arc;
use mongodb::Database;
use validator::Validate;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{
            request::{CreateUserRequest, LoginRequest},
            response::{CreateUserResponse, UserResponse},
        },
        entities::users::{NewUser, PasswordInput, User},
    },
    repositories::{
        films::FilmRepository,
        libraries::LibraryRepository,
        users::UserRepository,
    },
    services::auth::PasswordHasher,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// ## 에러 처리 전략
///
/// - **ValidationError**: 입력값 검증 실패
/// - **ConflictError**: 이미 사용 중인 이메일
/// - **AuthenticationError**: 이메일 또는 비밀번호 불일치
/// - **NotFound**: 사용자 없음
/// - **DatabaseError**: 저장소 오류 (리포지토리에서 그대로 전파)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let db = state.connections.get_database(&router).await?;
/// let service = UserService::new(&db, state.hasher.clone());
///
/// let created = service.create_user(request).await?;
/// let user = service.verify_password("agnes@example.com", "cleo5a7").await?;
/// ```
pub struct UserService {
    user_repo: UserRepository,
    library_repo: LibraryRepository,
    film_repo: FilmRepository,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(db: &Database, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_repo: UserRepository::new(db),
            library_repo: LibraryRepository::new(db),
            film_repo: FilmRepository::new(db),
            hasher,
        }
    }

    /// 사용자 등록
    ///
    /// 입력을 검증하고 이메일 중복을 확인한 뒤, 평문 비밀번호를 해싱하여
    /// 사용자와 빈 라이브러리를 함께 저장합니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<CreateUserResponse> {
        let start_time = std::time::Instant::now();

        request.validate()?;

        if self.user_repo.get_by_email(&request.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let CreateUserRequest {
            lastname,
            firstname,
            email,
            password,
        } = request;

        let user = User::new(
            NewUser::new(lastname, firstname, email, PasswordInput::Raw(password)),
            self.hasher.as_ref(),
        )?;

        let created_user = self.user_repo.create(&user).await?;

        log::info!("Total user creation took: {:?}", start_time.elapsed());

        Ok(CreateUserResponse {
            user: UserResponse::from(created_user),
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// 로그인 요청 검증 후 인증
    pub async fn login(&self, request: LoginRequest) -> AppResult<User> {
        request.validate()?;
        self.verify_password(&request.email, &request.password).await
    }

    /// 이메일과 비밀번호로 사용자를 인증합니다.
    ///
    /// 사용자가 없는 경우와 비밀번호가 틀린 경우를 구분하지 않고 같은
    /// `AuthenticationError`를 반환합니다.
    pub async fn verify_password(&self, email: &str, password: &str) -> AppResult<User> {
        let invalid = || AppError::AuthenticationError("이메일 또는 비밀번호가 올바르지 않습니다".to_string());

        let user = match self.user_repo.get_by_email(email).await? {
            Some(user) => user,
            None => {
                log::warn!("존재하지 않는 이메일로 로그인 시도: {}", email);
                return Err(invalid());
            }
        };

        let matches = match self.hasher.verify(password, &user.password) {
            Ok(matches) => matches,
            Err(e) => {
                log::warn!("저장된 비밀번호 다이제스트를 검증할 수 없음 (user_id={}): {}", user.id, e);
                false
            }
        };

        if !matches {
            log::warn!("비밀번호 불일치: user_id={}", user.id);
            return Err(invalid());
        }

        Ok(user)
    }

    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user = self.user_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 삭제
    ///
    /// 필름, 라이브러리, 사용자 레코드 순으로 삭제합니다.
    /// 중간에 실패하면 그 이전 단계의 삭제는 되돌리지 않습니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let user = self.user_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let removed_films = self.film_repo.delete_by_library_id(&user.library.id).await?;
        self.library_repo.delete_by_owner_id(&user.id).await?;

        if !self.user_repo.delete_by_id(&user.id).await? {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        log::info!("사용자 삭제: user_id={}, films={}", user.id, removed_films);

        Ok(())
    }
}

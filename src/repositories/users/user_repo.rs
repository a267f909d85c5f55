//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! `users` 컬렉션에는 사용자 레코드만 저장되고, 라이브러리는
//! `library_id`로 참조됩니다.
//!
//! ## 특징
//!
//! - **연쇄 생성**: 사용자 생성 시 소유 라이브러리(및 필름)를 먼저 저장
//! - **파생 조회**: 조회 시 라이브러리와 필름을 다시 읽어 사용자에 채움
//! - **비연쇄 수정**: `update`는 사용자 레코드만 교체

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::libraries::Library;
use crate::domain::entities::users::User;
use crate::repositories::codec::{fields, DocumentCodec, UserCodec};
use crate::repositories::films::FilmRepository;
use crate::repositories::libraries::LibraryRepository;

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// 사용자 데이터 액세스 리포지토리
///
/// 이 리포지토리는 사용자 엔티티의 CRUD 연산을 담당하며,
/// 라이브러리 리포지토리를 통해 소유 라이브러리까지 함께 다룹니다.
///
/// ## 연쇄 규칙
///
/// | 연산 | 라이브러리 처리 |
/// |------|-----------------|
/// | `create` | `LibraryRepository::create` 후 사용자 레코드 삽입 |
/// | `update` | 없음 - 사용자 레코드만 교체 |
/// | `get_*` | `LibraryRepository::get_by_id(library_id)`로 복원 (레코드가 없으면 필름만 조회) |
/// | `delete_*` | 없음 - 사용자 레코드만 삭제 |
///
/// 라이브러리 변경은 [`LibraryRepository::update`]를 직접 호출해야 합니다.
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **MappingError**: 저장된 문서의 식별자 필드 누락/타입 불일치
///
/// 찾는 사용자가 없는 것은 에러가 아니며 `Ok(None)` / `Ok(false)`로 표현됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let db = manager.get_database(&router).await?;
/// let repo = UserRepository::new(&db);
///
/// // 사용자 + 빈 라이브러리 생성
/// let user = User::new(NewUser::new("Varda", "Agnès", "agnes@example.com", password), &hasher)?;
/// repo.create(&user).await?;
///
/// // 이메일로 조회 (라이브러리 포함)
/// let found = repo.get_by_email("agnes@example.com").await?;
///
/// // 삭제
/// let deleted = repo.delete_by_id(&user.id).await?;
/// ```
#[derive(Clone, Debug)]
pub struct UserRepository {
    collection: Collection<Document>,
    libraries: LibraryRepository,
    films: FilmRepository,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Document>(USERS_COLLECTION),
            libraries: LibraryRepository::new(db),
            films: FilmRepository::new(db),
        }
    }

    /// 새 사용자 생성
    ///
    /// 소유 라이브러리를 먼저 저장하고(필름 포함) 사용자 레코드를 삽입합니다.
    /// 이메일 중복 확인은 서비스 계층의 책임입니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 입력과 동일한 사용자
    /// * `Err(AppError::DatabaseError)` - 어느 단계든 저장 실패.
    ///   앞서 저장된 라이브러리/필름 문서는 남습니다.
    pub async fn create(&self, user: &User) -> AppResult<User> {
        self.libraries.create(&user.library).await?;

        self.collection
            .insert_one(UserCodec.encode(user))
            .await
            .map_err(AppError::database)?;

        log::info!("사용자 생성: user_id={}, library_id={}", user.id, user.library.id);

        Ok(user.clone())
    }

    /// 전체 사용자 조회 (저장소 순서)
    pub async fn get_all(&self) -> AppResult<Vec<User>> {
        let mut cursor = self
            .collection
            .find(Document::new())
            .await
            .map_err(AppError::database)?;

        let mut users = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(AppError::database)? {
            users.push(self.with_library(UserCodec.decode(&document)?).await?);
        }

        Ok(users)
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우 (라이브러리 포함)
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError)` - 데이터베이스 또는 매핑 오류
    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.find_one(doc! { fields::USER_ID: id }).await
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// 이메일은 데이터 계층에서 유일성이 강제되지 않으므로, 중복이 있다면
    /// 저장소가 먼저 돌려주는 하나를 반환합니다.
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one(doc! { fields::EMAIL: email }).await
    }

    /// 사용자 레코드를 `user_id` 기준으로 교체합니다.
    ///
    /// 라이브러리와 필름은 건드리지 않습니다.
    pub async fn update(&self, user: &User) -> AppResult<()> {
        let result = self
            .collection
            .replace_one(doc! { fields::USER_ID: user.id.as_str() }, UserCodec.encode(user))
            .await
            .map_err(AppError::database)?;

        if result.matched_count == 0 {
            log::debug!("교체할 사용자 없음: user_id={}", user.id);
        }

        Ok(())
    }

    /// ID로 사용자 레코드를 삭제합니다. 없으면 `Ok(false)`.
    pub async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        self.delete_one(doc! { fields::USER_ID: id }).await
    }

    /// 이메일로 사용자 레코드를 삭제합니다. 없으면 `Ok(false)`.
    pub async fn delete_by_email(&self, email: &str) -> AppResult<bool> {
        self.delete_one(doc! { fields::EMAIL: email }).await
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 1. **이메일 인덱스** - 로그인/중복 확인 조회
    /// 2. **사용자 ID 인덱스** - 단건 조회/교체
    ///
    /// 이메일 유일성은 서비스 계층에서 확인하므로 유니크 인덱스가 아닙니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { fields::EMAIL: 1 })
            .options(IndexOptions::builder()
                .name("email_asc".to_string())
                .build())
            .build();

        let user_id_index = IndexModel::builder()
            .keys(doc! { fields::USER_ID: 1 })
            .options(IndexOptions::builder()
                .name("user_id_asc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, user_id_index])
            .await
            .map_err(AppError::database)?;

        Ok(())
    }

    async fn find_one(&self, filter: Document) -> AppResult<Option<User>> {
        let document = self
            .collection
            .find_one(filter)
            .await
            .map_err(AppError::database)?;

        match document {
            Some(document) => {
                let user = UserCodec.decode(&document)?;
                Ok(Some(self.with_library(user).await?))
            }
            None => Ok(None),
        }
    }

    async fn delete_one(&self, filter: Document) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(filter)
            .await
            .map_err(AppError::database)?;

        Ok(result.deleted_count > 0)
    }

    /// 레코드의 `library_id`로 라이브러리를 다시 읽어 채웁니다.
    ///
    /// 참조된 라이브러리 레코드가 없으면 사용자 소유의 라이브러리를 새로 만들고,
    /// 필름은 여전히 `library_id`로 조회해 채웁니다.
    async fn with_library(&self, mut user: User) -> AppResult<User> {
        let library_id = user.library.id.clone();

        user.library = match self.libraries.get_by_id(&library_id).await? {
            Some(library) => library,
            None => {
                log::warn!(
                    "사용자 {}의 라이브러리 {} 레코드가 존재하지 않아 필름만으로 복원합니다",
                    user.id,
                    library_id
                );
                let films = self.films.get_by_library_id(&library_id).await?;
                Library::new(library_id, user.id.clone(), films)
            }
        };

        Ok(user)
    }
}

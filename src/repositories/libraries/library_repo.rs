//! # 라이브러리 리포지토리 구현
//!
//! `libraries` 컬렉션에는 `{ library_id, owner_id }`만 저장됩니다.
//! 필름 목록은 저장하지 않고 조회할 때마다 [`FilmRepository`]에서 다시 구성합니다.
//!
//! ## 연쇄 쓰기
//!
//! | 연산 | 자식 필름 처리 |
//! |------|----------------|
//! | `create` | 모든 필름 `FilmRepository::create` 후 레코드 삽입 |
//! | `update` | 모든 필름 `FilmRepository::save` (upsert) 후 레코드 교체 (없으면 삽입) |
//! | `delete_by_owner_id` | 레코드만 삭제 (필름 정리는 호출자 몫) |
//!
//! 연쇄 쓰기는 원자적이지 않습니다. 중간 단계가 실패하면 그 단계의
//! `DatabaseError`가 반환되고, 앞서 저장된 필름 문서는 그대로 남습니다.

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::ReplaceOptions,
    Collection, Database,
};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::libraries::Library;
use crate::repositories::codec::{fields, DocumentCodec, LibraryCodec};
use crate::repositories::films::FilmRepository;

/// 라이브러리 컬렉션 이름
pub const LIBRARIES_COLLECTION: &str = "libraries";

/// 라이브러리 데이터 액세스 리포지토리
#[derive(Clone, Debug)]
pub struct LibraryRepository {
    collection: Collection<Document>,
    films: FilmRepository,
}

impl LibraryRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Document>(LIBRARIES_COLLECTION),
            films: FilmRepository::new(db),
        }
    }

    /// 소유한 필름을 먼저 저장한 뒤 라이브러리 레코드를 삽입합니다.
    ///
    /// 반환값은 입력과 같습니다.
    pub async fn create(&self, library: &Library) -> AppResult<Library> {
        for film in &library.films {
            self.films.create(film).await?;
        }

        self.collection
            .insert_one(LibraryCodec.encode(library))
            .await
            .map_err(AppError::database)?;

        log::debug!(
            "라이브러리 생성: library_id={}, owner_id={}, films={}",
            library.id,
            library.owner_id,
            library.films.len()
        );

        Ok(library.clone())
    }

    /// 전체 라이브러리 조회 (필름 포함)
    pub async fn get_all(&self) -> AppResult<Vec<Library>> {
        let mut cursor = self
            .collection
            .find(Document::new())
            .await
            .map_err(AppError::database)?;

        let mut libraries = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(AppError::database)? {
            libraries.push(self.with_films(LibraryCodec.decode(&document)?).await?);
        }

        Ok(libraries)
    }

    /// `library_id`로 라이브러리 조회
    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<Library>> {
        self.find_one(doc! { fields::LIBRARY_ID: id }).await
    }

    /// 소유 사용자 ID로 라이브러리 조회
    pub async fn get_by_owner_id(&self, owner_id: &str) -> AppResult<Option<Library>> {
        self.find_one(doc! { fields::OWNER_ID: owner_id }).await
    }

    /// 필름을 upsert한 뒤 `owner_id`로 찾은 레코드를 교체합니다.
    ///
    /// 레코드가 없으면 새로 삽입하므로, 레코드를 잃은 라이브러리도 이
    /// 호출로 다시 조회 가능해집니다. 라이브러리에서 빠진 필름의 문서는
    /// 삭제하지 않습니다. 필름 제거는 [`FilmRepository::delete_in_library`]로
    /// 별도로 수행해야 합니다.
    pub async fn update(&self, library: &Library) -> AppResult<()> {
        for film in &library.films {
            self.films.save(film).await?;
        }

        let options = ReplaceOptions::builder().upsert(true).build();
        let result = self
            .collection
            .replace_one(doc! { fields::OWNER_ID: library.owner_id.as_str() }, LibraryCodec.encode(library))
            .with_options(options)
            .await
            .map_err(AppError::database)?;

        if result.upserted_id.is_some() {
            log::warn!(
                "라이브러리 레코드 재생성: library_id={}, owner_id={}",
                library.id,
                library.owner_id
            );
        }

        Ok(())
    }

    /// 소유 사용자 ID로 라이브러리 레코드를 삭제합니다. 없으면 `Ok(false)`.
    pub async fn delete_by_owner_id(&self, owner_id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { fields::OWNER_ID: owner_id })
            .await
            .map_err(AppError::database)?;

        Ok(result.deleted_count > 0)
    }

    async fn find_one(&self, filter: Document) -> AppResult<Option<Library>> {
        let document = self
            .collection
            .find_one(filter)
            .await
            .map_err(AppError::database)?;

        match document {
            Some(document) => {
                let library = LibraryCodec.decode(&document)?;
                Ok(Some(self.with_films(library).await?))
            }
            None => Ok(None),
        }
    }

    async fn with_films(&self, mut library: Library) -> AppResult<Library> {
        library.films = self.films.get_by_library_id(&library.id).await?;
        Ok(library)
    }
}

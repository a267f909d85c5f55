//! # 필름 리포지토리 구현
//!
//! `films` 컬렉션에 대한 데이터 액세스 계층입니다.
//! 필름은 `library_id`로 소속 라이브러리를 참조하며, 라이브러리의 필름 목록은
//! 항상 이 컬렉션을 `library_id`로 필터링하여 다시 구성됩니다.
//!
//! ## 식별자
//!
//! `film_id`는 호출자가 지정하는 정수입니다. 저장소는 유일성을 강제하지
//! 않으므로 같은 `film_id`를 두 번 `create`하면 문서가 두 개 생깁니다.
//! 반복 저장이 필요한 경로에서는 [`FilmRepository::save`]를 사용합니다.
//! `save`와 [`FilmRepository::delete_in_library`]는 `(film_id, library_id)`
//! 쌍으로 문서를 찾으므로, 다른 라이브러리가 같은 `film_id`를 쓰고 있어도
//! 그 라이브러리의 필름은 바뀌지 않습니다.

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{IndexOptions, ReplaceOptions},
    Collection, Database, IndexModel,
};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::films::Film;
use crate::repositories::codec::{fields, DocumentCodec, FilmCodec};

/// 필름 컬렉션 이름
pub const FILMS_COLLECTION: &str = "films";

/// 필름 데이터 액세스 리포지토리
///
/// 라우팅된 `mongodb::Database` 핸들 위에 생성됩니다. 핸들은 가볍게 복제되는
/// 값이므로 요청마다 새 리포지토리를 만들어도 됩니다.
///
/// ```rust,ignore
/// let db = manager.get_database(&router).await?;
/// let films = FilmRepository::new(&db);
///
/// films.create(&film).await?;
/// let owned = films.get_by_library_id(&film.library_id).await?;
/// ```
#[derive(Clone, Debug)]
pub struct FilmRepository {
    collection: Collection<Document>,
}

impl FilmRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Document>(FILMS_COLLECTION),
        }
    }

    /// 필름 문서를 삽입하고 입력을 그대로 반환합니다.
    pub async fn create(&self, film: &Film) -> AppResult<Film> {
        self.collection
            .insert_one(FilmCodec.encode(film))
            .await
            .map_err(AppError::database)?;

        log::debug!("필름 생성: film_id={}, library_id={}", film.id, film.library_id);

        Ok(film.clone())
    }

    /// 전체 필름 조회 (저장소 순서)
    pub async fn get_all(&self) -> AppResult<Vec<Film>> {
        self.find_many(Document::new()).await
    }

    /// 특정 라이브러리에 속한 필름 조회
    pub async fn get_by_library_id(&self, library_id: &str) -> AppResult<Vec<Film>> {
        self.find_many(doc! { fields::LIBRARY_ID: library_id }).await
    }

    /// `film_id`로 필름 조회
    ///
    /// 같은 `film_id`의 문서가 여러 개라면 저장소가 먼저 돌려주는 하나를 반환합니다.
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Film>> {
        let document = self
            .collection
            .find_one(doc! { fields::FILM_ID: id })
            .await
            .map_err(AppError::database)?;

        document.map(|d| FilmCodec.decode(&d)).transpose()
    }

    /// `film_id`로 찾은 문서 하나를 통째로 교체합니다.
    ///
    /// 일치하는 문서가 없으면 아무 일도 일어나지 않습니다.
    pub async fn update(&self, film: &Film) -> AppResult<()> {
        let result = self
            .collection
            .replace_one(doc! { fields::FILM_ID: film.id }, FilmCodec.encode(film))
            .await
            .map_err(AppError::database)?;

        if result.matched_count == 0 {
            log::debug!("교체할 필름 없음: film_id={}", film.id);
        }

        Ok(())
    }

    /// `(film_id, library_id)` 기준 교체, 없으면 삽입
    pub async fn save(&self, film: &Film) -> AppResult<()> {
        let options = ReplaceOptions::builder().upsert(true).build();
        let filter = doc! {
            fields::FILM_ID: film.id,
            fields::LIBRARY_ID: film.library_id.as_str(),
        };

        self.collection
            .replace_one(filter, FilmCodec.encode(film))
            .with_options(options)
            .await
            .map_err(AppError::database)?;

        Ok(())
    }

    /// `film_id`로 문서 하나를 삭제합니다. 없으면 `Ok(false)`.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { fields::FILM_ID: id })
            .await
            .map_err(AppError::database)?;

        Ok(result.deleted_count > 0)
    }

    /// 해당 라이브러리의 `film_id` 문서 하나를 삭제합니다. 없으면 `Ok(false)`.
    pub async fn delete_in_library(&self, library_id: &str, id: i32) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! {
                fields::FILM_ID: id,
                fields::LIBRARY_ID: library_id,
            })
            .await
            .map_err(AppError::database)?;

        Ok(result.deleted_count > 0)
    }

    /// 라이브러리에 속한 모든 필름을 삭제하고 삭제된 개수를 반환합니다.
    pub async fn delete_by_library_id(&self, library_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { fields::LIBRARY_ID: library_id })
            .await
            .map_err(AppError::database)?;

        Ok(result.deleted_count)
    }

    /// 조회용 인덱스 생성
    ///
    /// 1. `library_id` (오름차순) - 라이브러리별 필름 조회
    /// 2. `film_id` (오름차순) - 단건 조회/교체
    ///
    /// 두 인덱스 모두 유니크가 아닙니다. `film_id` 유일성은 호출자 책임입니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let library_index = IndexModel::builder()
            .keys(doc! { fields::LIBRARY_ID: 1 })
            .options(IndexOptions::builder()
                .name("library_id_asc".to_string())
                .build())
            .build();

        let film_index = IndexModel::builder()
            .keys(doc! { fields::FILM_ID: 1 })
            .options(IndexOptions::builder()
                .name("film_id_asc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([library_index, film_index])
            .await
            .map_err(AppError::database)?;

        Ok(())
    }

    async fn find_many(&self, filter: Document) -> AppResult<Vec<Film>> {
        let mut cursor = self
            .collection
            .find(filter)
            .await
            .map_err(AppError::database)?;

        let mut films = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(AppError::database)? {
            films.push(FilmCodec.decode(&document)?);
        }

        Ok(films)
    }
}

//! # 라이브러리 서비스 구현
//!
//! 사용자 라이브러리의 필름 목록 조회, 추가, 제거를 담당합니다.
//! 라이브러리는 항상 소유 사용자를 통해 찾습니다.

use mongodb::Database;
use validator::Validate;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::films::AddFilmRequest,
        entities::{films::Film, users::User},
    },
    repositories::{
        films::FilmRepository,
        libraries::LibraryRepository,
        users::UserRepository,
    },
};

/// 라이브러리 비즈니스 로직 서비스
///
/// ```rust,ignore
/// let service = LibraryService::new(&db);
///
/// let films = service.list_films(&user_id, Some("stalker")).await?;
/// let added = service.add_film(&user_id, request).await?;
/// service.remove_film(&user_id, added.id).await?;
/// ```
pub struct LibraryService {
    user_repo: UserRepository,
    library_repo: LibraryRepository,
    film_repo: FilmRepository,
}

impl LibraryService {
    pub fn new(db: &Database) -> Self {
        Self {
            user_repo: UserRepository::new(db),
            library_repo: LibraryRepository::new(db),
            film_repo: FilmRepository::new(db),
        }
    }

    /// 사용자 라이브러리의 필름 목록
    ///
    /// `search`가 없거나 비어 있거나 `all`이면 전체, 그 외에는 제목에
    /// 검색어가 포함된 필름만 반환합니다 (대소문자 무시).
    pub async fn list_films(&self, user_id: &str, search: Option<&str>) -> AppResult<Vec<Film>> {
        let user = self.find_user(user_id).await?;
        Ok(user.library.search(search))
    }

    /// 사용자 라이브러리에 필름을 추가합니다.
    ///
    /// 같은 라이브러리에 같은 ID의 필름이 이미 있으면 새 내용으로 교체합니다.
    /// 다른 라이브러리가 같은 ID를 쓰고 있으면 `ConflictError`입니다. 이 확인을
    /// 동시 요청이 함께 통과하더라도 저장은 라이브러리 단위이므로 다른
    /// 라이브러리의 필름은 바뀌지 않습니다.
    pub async fn add_film(&self, user_id: &str, request: AddFilmRequest) -> AppResult<Film> {
        request.validate()?;

        let mut library = self.find_user(user_id).await?.library;

        if let Some(existing) = self.film_repo.get_by_id(request.id).await? {
            if existing.library_id != library.id {
                return Err(AppError::ConflictError(format!(
                    "필름 ID {}는 다른 라이브러리에서 사용 중입니다",
                    request.id
                )));
            }
        }

        let film = request.into_film(library.id.as_str());
        library.remove_film(film.id);
        library.add_film(film.clone());

        self.library_repo.update(&library).await?;

        log::info!("필름 추가: library_id={}, film_id={}", library.id, film.id);

        Ok(film)
    }

    /// 사용자 라이브러리에서 필름을 제거합니다.
    pub async fn remove_film(&self, user_id: &str, film_id: i32) -> AppResult<()> {
        let mut library = self.find_user(user_id).await?.library;

        if library.remove_film(film_id).is_none() {
            return Err(AppError::NotFound(format!("라이브러리에 필름 {}가 없습니다", film_id)));
        }

        self.film_repo.delete_in_library(&library.id, film_id).await?;

        log::info!("필름 제거: library_id={}, film_id={}", library.id, film_id);

        Ok(())
    }

    async fn find_user(&self, user_id: &str) -> AppResult<User> {
        self.user_repo
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}

//! Library Entity Implementation

use crate::domain::entities::films::Film;

/// 라이브러리 엔티티
///
/// 사용자 한 명당 정확히 하나의 라이브러리가 존재합니다.
/// 저장되는 레코드에는 식별자와 소유자만 있으며, `films`는 조회 시
/// `films` 컬렉션을 `library_id`로 필터링하여 다시 구성됩니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    pub id: String,
    /// 소유 사용자 ID
    pub owner_id: String,
    pub films: Vec<Film>,
}

impl Library {
    pub fn new(id: impl Into<String>, owner_id: impl Into<String>, films: Vec<Film>) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            films,
        }
    }

    /// 사용자 생성 시 암묵적으로 만들어지는 빈 라이브러리
    ///
    /// 라이브러리 ID는 소유자 ID와 같습니다.
    pub fn for_owner(owner_id: impl Into<String>) -> Self {
        let owner_id = owner_id.into();
        Self::new(owner_id.clone(), owner_id, Vec::new())
    }

    /// 필름을 이 라이브러리에 추가합니다. 필름의 `library_id`는 이 라이브러리로 맞춰집니다.
    pub fn add_film(&mut self, mut film: Film) {
        film.library_id = self.id.clone();
        self.films.push(film);
    }

    /// ID로 필름을 제거하고, 제거된 필름을 반환합니다.
    pub fn remove_film(&mut self, film_id: i32) -> Option<Film> {
        let index = self.films.iter().position(|film| film.id == film_id)?;
        Some(self.films.remove(index))
    }

    /// 검색어로 필름을 필터링합니다.
    ///
    /// 검색어가 없거나 비어 있거나 `all`(대소문자 무시)이면 전체 목록을,
    /// 그 외에는 제목에 검색어가 포함된 필름만 반환합니다.
    pub fn search(&self, query: Option<&str>) -> Vec<Film> {
        match query.map(str::trim) {
            None | Some("") => self.films.clone(),
            Some(q) if q.eq_ignore_ascii_case("all") => self.films.clone(),
            Some(q) => self
                .films
                .iter()
                .filter(|film| film.title_contains(q))
                .cloned()
                .collect(),
        }
    }
}

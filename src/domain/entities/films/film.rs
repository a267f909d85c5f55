//! Film Entity Implementation

use serde::{Deserialize, Serialize};
use super::person::Person;

/// 필름 엔티티
///
/// `id`는 호출자가 지정하는 정수이며 저장소가 생성하지 않습니다.
/// `films` 컬렉션 안에서의 유일성은 호출자가 보장해야 합니다.
/// 모든 필름은 `library_id`를 통해 정확히 하나의 라이브러리에 속합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: i32,
    /// 소유 라이브러리 ID
    pub library_id: String,
    /// 포스터 이미지 URL
    pub poster: String,
    pub lang: String,
    /// 매체 (DVD, Blu-ray 등)
    pub support: String,
    pub title: String,
    pub description: String,
    pub release_date: String,
    pub year: String,
    /// 평점 (저장 시 double, 조회 시 f32로 축소)
    pub rate: f32,
    /// 사용자 감상평
    pub opinion: String,
    pub director: Person,
    pub actors: Vec<Person>,
}

impl Film {
    /// 필수 식별 정보만으로 필름을 생성합니다. 나머지 필드는 빈 값입니다.
    pub fn new(id: i32, library_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            library_id: library_id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// 제목에 검색어가 포함되어 있는지 (대소문자 무시)
    pub fn title_contains(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_film_has_identity_and_empty_metadata() {
        let film = Film::new(7, "lib-1", "Stalker");

        assert_eq!(film.id, 7);
        assert_eq!(film.library_id, "lib-1");
        assert_eq!(film.title, "Stalker");
        assert!(film.actors.is_empty());
        assert_eq!(film.director, Person::default());
    }

    #[test]
    fn test_title_contains_ignores_case() {
        let film = Film::new(1, "lib", "The Mirror");

        assert!(film.title_contains("mirror"));
        assert!(film.title_contains("THE"));
        assert!(!film.title_contains("solaris"));
    }
}

use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::films::{Film, Person};

/// 라이브러리에 필름을 추가하는 요청 DTO
///
/// `library_id`는 요청에 포함되지 않으며, 경로의 사용자 라이브러리로 정해집니다.
/// 설명용 필드는 생략하면 빈 값이 됩니다.
///
/// ```json
/// {
///   "id": 1398,
///   "title": "Stalker",
///   "releaseDate": "1979-05-25",
///   "rate": 4.5,
///   "director": { "name": "Andrei Tarkovsky" },
///   "actors": [{ "name": "Alisa Freyndlikh" }]
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddFilmRequest {
    pub id: i32,

    #[validate(length(min = 1, message = "제목을 입력해주세요"))]
    pub title: String,

    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub support: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub year: String,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "평점은 음수일 수 없습니다"))]
    pub rate: f32,

    #[serde(default)]
    pub opinion: String,
    #[serde(default)]
    pub director: Person,
    #[serde(default)]
    pub actors: Vec<Person>,
}

impl AddFilmRequest {
    pub fn into_film(self, library_id: impl Into<String>) -> Film {
        Film {
            id: self.id,
            library_id: library_id.into(),
            poster: self.poster,
            lang: self.lang,
            support: self.support,
            title: self.title,
            description: self.description,
            release_date: self.release_date,
            year: self.year,
            rate: self.rate,
            opinion: self.opinion,
            director: self.director,
            actors: self.actors,
        }
    }
}

/// 라이브러리 조회 쿼리 파라미터
#[derive(Debug, Default, Deserialize)]
pub struct LibraryQuery {
    /// 제목 검색어. 없거나 비어 있거나 `all`이면 전체 목록
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_request_fills_defaults() {
        let req: AddFilmRequest = serde_json::from_str(r#"{ "id": 3, "title": "Mirror" }"#).unwrap();

        assert!(req.validate().is_ok());

        let film = req.into_film("lib-1");
        assert_eq!(film.id, 3);
        assert_eq!(film.library_id, "lib-1");
        assert_eq!(film.director, Person::default());
        assert!(film.actors.is_empty());
    }

    #[test]
    fn test_camel_case_fields() {
        let req: AddFilmRequest = serde_json::from_str(
            r#"{ "id": 1, "title": "Stalker", "releaseDate": "1979-05-25",
                 "director": { "name": "Andrei Tarkovsky" }, "actors": [{ "name": "Alisa Freyndlikh" }] }"#,
        )
        .unwrap();

        assert_eq!(req.release_date, "1979-05-25");
        assert_eq!(req.director.name, "Andrei Tarkovsky");
        assert_eq!(req.actors.len(), 1);
    }

    #[test]
    fn test_empty_title_and_negative_rate_are_rejected() {
        let req: AddFilmRequest = serde_json::from_str(r#"{ "id": 1, "title": "", "rate": -1.0 }"#).unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(errors.field_errors().contains_key("rate"));
    }
}

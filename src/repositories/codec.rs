//! # 엔티티 ↔ BSON 문서 변환
//!
//! 각 컬렉션의 필드 키는 고정되어 있으며, `encode`로 기록한 모든 필드는
//! `decode`로 손실 없이 다시 읽혀야 합니다. 유일한 예외는 평점으로,
//! double로 저장되고 조회 시 `f32`로 축소됩니다.
//!
//! 리포지토리는 `Collection<Document>`를 사용하며 변환은 모두 이 모듈의
//! 코덱을 거칩니다.
//!
//! ## 문서 형태
//!
//! ```text
//! users     { user_id, library_id, lastname, firstname, email, password }
//! libraries { library_id, owner_id }
//! films     { film_id, library_id, poster, lang, support, title, description,
//!             releaseDate, year, rate, opinion,
//!             director: { name }, actors: [ { name } ] }
//! ```
//!
//! ## 디코딩 정책
//!
//! - 식별자/외래 키(`film_id`, `library_id`, `owner_id`, `user_id`)가 없거나
//!   타입이 다르면 `AppError::MappingError`
//! - 설명용 텍스트 필드가 없거나 `null`이면 빈 문자열
//! - `film_id`는 Int32와 Int64 모두 허용 (Int32 범위 내)

use mongodb::bson::{Bson, Document};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::films::{Film, Person};
use crate::domain::entities::libraries::Library;
use crate::domain::entities::users::User;

/// 컬렉션별 필드 키
pub mod fields {
    pub const USER_ID: &str = "user_id";
    pub const LIBRARY_ID: &str = "library_id";
    pub const OWNER_ID: &str = "owner_id";
    pub const FILM_ID: &str = "film_id";

    pub const LASTNAME: &str = "lastname";
    pub const FIRSTNAME: &str = "firstname";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";

    pub const POSTER: &str = "poster";
    pub const LANG: &str = "lang";
    pub const SUPPORT: &str = "support";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const RELEASE_DATE: &str = "releaseDate";
    pub const YEAR: &str = "year";
    pub const RATE: &str = "rate";
    pub const OPINION: &str = "opinion";
    pub const DIRECTOR: &str = "director";
    pub const ACTORS: &str = "actors";

    pub const PERSON_NAME: &str = "name";
}

use fields::*;

/// 엔티티 하나의 문서 변환 전략
pub trait DocumentCodec {
    type Entity;

    fn encode(&self, entity: &Self::Entity) -> Document;

    fn decode(&self, document: &Document) -> AppResult<Self::Entity>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PersonCodec;

impl DocumentCodec for PersonCodec {
    type Entity = Person;

    fn encode(&self, person: &Person) -> Document {
        let mut document = Document::new();
        document.insert(PERSON_NAME, person.name.as_str());
        document
    }

    fn decode(&self, document: &Document) -> AppResult<Person> {
        Ok(Person::new(text(document, PERSON_NAME)?))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FilmCodec;

impl DocumentCodec for FilmCodec {
    type Entity = Film;

    fn encode(&self, film: &Film) -> Document {
        let actors: Vec<Bson> = film
            .actors
            .iter()
            .map(|actor| Bson::Document(PersonCodec.encode(actor)))
            .collect();

        let mut document = Document::new();
        document.insert(FILM_ID, film.id);
        document.insert(LIBRARY_ID, film.library_id.as_str());
        document.insert(POSTER, film.poster.as_str());
        document.insert(LANG, film.lang.as_str());
        document.insert(SUPPORT, film.support.as_str());
        document.insert(TITLE, film.title.as_str());
        document.insert(DESCRIPTION, film.description.as_str());
        document.insert(RELEASE_DATE, film.release_date.as_str());
        document.insert(YEAR, film.year.as_str());
        document.insert(RATE, f64::from(film.rate));
        document.insert(OPINION, film.opinion.as_str());
        document.insert(DIRECTOR, PersonCodec.encode(&film.director));
        document.insert(ACTORS, actors);
        document
    }

    fn decode(&self, document: &Document) -> AppResult<Film> {
        Ok(Film {
            id: film_id(document)?,
            library_id: identifier(document, LIBRARY_ID)?,
            poster: text(document, POSTER)?,
            lang: text(document, LANG)?,
            support: text(document, SUPPORT)?,
            title: text(document, TITLE)?,
            description: text(document, DESCRIPTION)?,
            release_date: text(document, RELEASE_DATE)?,
            year: text(document, YEAR)?,
            rate: rate(document)?,
            opinion: text(document, OPINION)?,
            director: director(document)?,
            actors: actors(document)?,
        })
    }
}

/// 라이브러리 레코드 코덱
///
/// 식별자와 소유자만 다룹니다. 디코딩 결과의 `films`는 비어 있으며
/// 리포지토리가 `films` 컬렉션에서 채웁니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibraryCodec;

impl DocumentCodec for LibraryCodec {
    type Entity = Library;

    fn encode(&self, library: &Library) -> Document {
        let mut document = Document::new();
        document.insert(LIBRARY_ID, library.id.as_str());
        document.insert(OWNER_ID, library.owner_id.as_str());
        document
    }

    fn decode(&self, document: &Document) -> AppResult<Library> {
        Ok(Library::new(
            identifier(document, LIBRARY_ID)?,
            identifier(document, OWNER_ID)?,
            Vec::new(),
        ))
    }
}

/// 사용자 레코드 코덱
///
/// 라이브러리는 `library_id`로만 참조됩니다. 디코딩 결과의 라이브러리는
/// 식별자만 채워진 빈 라이브러리이며 리포지토리가 실제 내용으로 교체합니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserCodec;

impl DocumentCodec for UserCodec {
    type Entity = User;

    fn encode(&self, user: &User) -> Document {
        let mut document = Document::new();
        document.insert(USER_ID, user.id.as_str());
        document.insert(LIBRARY_ID, user.library.id.as_str());
        document.insert(LASTNAME, user.lastname.as_str());
        document.insert(FIRSTNAME, user.firstname.as_str());
        document.insert(EMAIL, user.email.as_str());
        document.insert(PASSWORD, user.password.as_str());
        document
    }

    fn decode(&self, document: &Document) -> AppResult<User> {
        let id = identifier(document, USER_ID)?;
        let library = Library::new(identifier(document, LIBRARY_ID)?, id.clone(), Vec::new());

        Ok(User::from_record(
            id,
            text(document, LASTNAME)?,
            text(document, FIRSTNAME)?,
            text(document, EMAIL)?,
            text(document, PASSWORD)?,
            library,
        ))
    }
}

fn mapping_error(key: &str, found: &Bson) -> AppError {
    AppError::MappingError(format!(
        "field '{}' has unexpected type {:?}",
        key,
        found.element_type()
    ))
}

fn identifier(document: &Document, key: &str) -> AppResult<String> {
    match document.get(key) {
        Some(Bson::String(value)) => Ok(value.clone()),
        Some(other) => Err(mapping_error(key, other)),
        None => Err(AppError::MappingError(format!("missing field '{}'", key))),
    }
}

fn text(document: &Document, key: &str) -> AppResult<String> {
    match document.get(key) {
        Some(Bson::String(value)) => Ok(value.clone()),
        Some(Bson::Int32(value)) => Ok(value.to_string()),
        Some(Bson::Int64(value)) => Ok(value.to_string()),
        Some(Bson::Null) | None => Ok(String::new()),
        Some(other) => Err(mapping_error(key, other)),
    }
}

fn film_id(document: &Document) -> AppResult<i32> {
    match document.get(FILM_ID) {
        Some(Bson::Int32(value)) => Ok(*value),
        Some(Bson::Int64(value)) => i32::try_from(*value)
            .map_err(|_| AppError::MappingError(format!("field '{}' out of range: {}", FILM_ID, value))),
        Some(other) => Err(mapping_error(FILM_ID, other)),
        None => Err(AppError::MappingError(format!("missing field '{}'", FILM_ID))),
    }
}

fn rate(document: &Document) -> AppResult<f32> {
    match document.get(RATE) {
        Some(Bson::Double(value)) => Ok(*value as f32),
        Some(Bson::Int32(value)) => Ok(*value as f32),
        Some(Bson::Int64(value)) => Ok(*value as f32),
        Some(Bson::Null) | None => Ok(0.0),
        Some(other) => Err(mapping_error(RATE, other)),
    }
}

fn director(document: &Document) -> AppResult<Person> {
    match document.get(DIRECTOR) {
        Some(Bson::Document(person)) => PersonCodec.decode(person),
        Some(Bson::Null) | None => Ok(Person::default()),
        Some(other) => Err(mapping_error(DIRECTOR, other)),
    }
}

fn actors(document: &Document) -> AppResult<Vec<Person>> {
    match document.get(ACTORS) {
        Some(Bson::Array(items)) => items
            .iter()
            .map(|item| match item {
                Bson::Document(person) => PersonCodec.decode(person),
                other => Err(mapping_error(ACTORS, other)),
            })
            .collect(),
        Some(Bson::Null) | None => Ok(Vec::new()),
        Some(other) => Err(mapping_error(ACTORS, other)),
    }
}

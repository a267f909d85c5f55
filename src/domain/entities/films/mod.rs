//! Films Entity Module
//!
//! 필름 엔티티와 필름 문서 안에 내장되는 인물 값 객체를 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::films::{Film, Person};
//!
//! let mut film = Film::new(42, library.id.clone(), "Solaris");
//! film.director = Person::new("Andrei Tarkovsky");
//! film.actors = vec![Person::new("Natalya Bondarchuk"), Person::new("Donatas Banionis")];
//! ```

pub mod film;
pub mod person;

pub use film::Film;
pub use person::Person;

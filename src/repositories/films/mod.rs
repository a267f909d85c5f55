pub mod film_repo;

pub use film_repo::*;

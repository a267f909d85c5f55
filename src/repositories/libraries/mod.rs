pub mod library_repo;

pub use library_repo::*;

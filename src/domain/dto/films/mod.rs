pub mod request;

pub use request::{AddFilmRequest, LibraryQuery};

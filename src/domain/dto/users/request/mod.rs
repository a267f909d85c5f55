pub mod auth_request;
pub mod create_user;

pub use auth_request::LoginRequest;
pub use create_user::CreateUserRequest;

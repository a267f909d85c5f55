use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 사용자 요약 응답
///
/// 비밀번호 다이제스트와 필름 목록은 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub lastname: String,
    pub firstname: String,
    pub email: String,
    pub library_id: String,
    /// 라이브러리에 담긴 필름 수
    pub film_count: usize,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            lastname,
            firstname,
            email,
            library,
            ..
        } = user;

        Self {
            id,
            lastname,
            firstname,
            email,
            library_id: library.id,
            film_count: library.films.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub message: String,
}

impl LoginResponse {
    pub fn new(user: User) -> Self {
        Self {
            user: UserResponse::from(user),
            message: "로그인에 성공했습니다".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::films::Film;
    use crate::domain::entities::libraries::Library;

    #[test]
    fn test_user_response_hides_password() {
        let mut library = Library::for_owner("user-1");
        library.add_film(Film::new(1, "", "Cléo de 5 à 7"));

        let user = User::from_record(
            "user-1".to_string(),
            "Varda".to_string(),
            "Agnès".to_string(),
            "agnes@example.com".to_string(),
            "$2b$04$digest".to_string(),
            library,
        );

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(response.library_id, "user-1");
        assert_eq!(response.film_count, 1);
        assert!(json.get("password").is_none());
    }
}

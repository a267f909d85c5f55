//! 애플리케이션 공유 상태
//!
//! `main`에서 한 번 만들어 `web::Data<AppState>`로 모든 워커에 공유합니다.
//! 전역 싱글톤 대신 이 값이 의존성의 출발점입니다.

use std::sync::Arc;
use crate::db::{ConnectionManager, EnvironmentRouter};
use crate::core::errors::AppResult;
use crate::services::auth::PasswordHasher;
use crate::services::libraries::LibraryService;
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppState {
    pub connections: Arc<ConnectionManager>,
    pub hasher: Arc<dyn PasswordHasher>,
}

impl AppState {
    pub fn new(connections: Arc<ConnectionManager>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { connections, hasher }
    }

    /// 요청 환경에 맞는 데이터베이스로 사용자 서비스를 생성합니다.
    pub async fn user_service(&self, router: &EnvironmentRouter) -> AppResult<UserService> {
        let db = self.connections.get_database(router).await?;
        Ok(UserService::new(&db, self.hasher.clone()))
    }

    /// 요청 환경에 맞는 데이터베이스로 라이브러리 서비스를 생성합니다.
    pub async fn library_service(&self, router: &EnvironmentRouter) -> AppResult<LibraryService> {
        let db = self.connections.get_database(router).await?;
        Ok(LibraryService::new(&db))
    }
}

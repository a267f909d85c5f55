//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 모든 라우트는 `X-Test-Database` 헤더에 따라 운영/테스트 데이터베이스를 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(state.clone())
//!     .wrap(TestEnvironment::new())
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;
use crate::core::AppState;
use crate::db::EnvironmentRouter;
use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_auth_routes(cfg);
}

/// 사용자 및 라이브러리 관련 라우트를 설정합니다
///
/// - `POST /api/v1/users` - 사용자 생성 (회원가입)
/// - `GET /api/v1/users/{user_id}` - 사용자 조회
/// - `DELETE /api/v1/users/{user_id}` - 사용자 삭제
/// - `GET /api/v1/users/{user_id}/library?search=` - 필름 목록
/// - `POST /api/v1/users/{user_id}/library/films` - 필름 추가
/// - `DELETE /api/v1/users/{user_id}/library/films/{film_id}` - 필름 제거
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -H "X-Test-Database: true" \
///   -d '{"lastname":"Varda","firstname":"Agnès","email":"agnes@example.com","password":"cleo5a7"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::library::list_films)
            .service(handlers::library::add_film)
            .service(handlers::library::remove_film)
            .service(handlers::users::get_user)
            .service(handlers::users::delete_user)
    );
}

/// 인증 관련 라우트를 설정합니다
///
/// - `POST /api/v1/auth/login` - 이메일/비밀번호 로그인
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::local_login)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 요청 환경의 데이터베이스에 `ping`을 보내 결과를 함께 반환합니다.
/// 데이터베이스에 닿지 못하면 503입니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "filmotheque_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "database": { "name": "filmotheque", "status": "up" }
/// }
/// ```
#[get("/health")]
async fn health_check(
    state: web::Data<AppState>,
    router: EnvironmentRouter,
) -> HttpResponse {
    let database_name = router.database_name(state.connections.config()).to_string();

    match state.connections.ping(&router).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "database": { "name": database_name, "status": "up" }
        })),
        Err(e) => {
            log::error!("헬스체크 실패 ({}): {}", database_name, e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "unhealthy",
                "service": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "database": { "name": database_name, "status": "down" }
            }))
        }
    }
}

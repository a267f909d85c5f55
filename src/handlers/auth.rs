//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 로그인 엔드포인트입니다. 세션이나 토큰은 발급하지 않고
//! 인증된 사용자의 요약 정보만 돌려줍니다.
use actix_web::{post, web, HttpResponse};
use crate::core::{AppError, AppState};
use crate::db::EnvironmentRouter;
use crate::domain::dto::users::{request::LoginRequest, response::LoginResponse};

/// 로컬 로그인
///
/// 이메일이 없거나 비밀번호가 틀리면 401을 반환합니다.
#[post("/login")]
pub async fn local_login(
    state: web::Data<AppState>,
    router: EnvironmentRouter,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let service = state.user_service(&router).await?;
    let user = service.login(payload.into_inner()).await?;

    log::info!("로컬 로그인 성공 - 사용자 ID: {}", user.id);

    Ok(HttpResponse::Ok().json(LoginResponse::new(user)))
}

//! 사용자 HTTP 핸들러
//!
//! - `POST /api/v1/users` - 회원가입 (중복 이메일 409)
//! - `GET /api/v1/users/{user_id}` - 사용자 요약 조회
//! - `DELETE /api/v1/users/{user_id}` - 사용자와 라이브러리, 필름 삭제
use actix_web::{web, HttpResponse, get, post, delete};
use crate::core::{AppError, AppState};
use crate::db::EnvironmentRouter;
use crate::domain::dto::users::request::CreateUserRequest;

#[post("")]
pub async fn create_user(
    state: web::Data<AppState>,
    router: EnvironmentRouter,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let service = state.user_service(&router).await?;
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("/{user_id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    router: EnvironmentRouter,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = state.user_service(&router).await?;
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    router: EnvironmentRouter,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = state.user_service(&router).await?;
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

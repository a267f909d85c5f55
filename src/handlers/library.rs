//! 라이브러리 HTTP 핸들러
//!
//! 경로의 `user_id`가 소유한 라이브러리를 다룹니다.
use actix_web::{delete, get, post, web, HttpResponse};
use crate::core::{AppError, AppState};
use crate::db::EnvironmentRouter;
use crate::domain::dto::films::{AddFilmRequest, LibraryQuery};

/// `GET /api/v1/users/{user_id}/library?search=`
#[get("/{user_id}/library")]
pub async fn list_films(
    state: web::Data<AppState>,
    router: EnvironmentRouter,
    user_id: web::Path<String>,
    query: web::Query<LibraryQuery>,
) -> Result<HttpResponse, AppError> {
    let service = state.library_service(&router).await?;
    let films = service.list_films(&user_id, query.search.as_deref()).await?;

    Ok(HttpResponse::Ok().json(films))
}

/// `POST /api/v1/users/{user_id}/library/films`
#[post("/{user_id}/library/films")]
pub async fn add_film(
    state: web::Data<AppState>,
    router: EnvironmentRouter,
    user_id: web::Path<String>,
    payload: web::Json<AddFilmRequest>,
) -> Result<HttpResponse, AppError> {
    let service = state.library_service(&router).await?;
    let film = service.add_film(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(film))
}

/// `DELETE /api/v1/users/{user_id}/library/films/{film_id}`
#[delete("/{user_id}/library/films/{film_id}")]
pub async fn remove_film(
    state: web::Data<AppState>,
    router: EnvironmentRouter,
    path: web::Path<(String, i32)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, film_id) = path.into_inner();

    let service = state.library_service(&router).await?;
    service.remove_film(&user_id, film_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

//! # Juz Handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    api::extractors::{JsonBody, PathParam, QueryParams},
    error::Result,
    models::{DeleteScope, EmptyResponse, Juz, JuzPage, JuzPayload, PageRequest},
    services::AppState,
};

#[utoipa::path(
    post,
    path = "/juz",
    tag = "juz",
    request_body = JuzPayload,
    responses(
        (status = 201, body = Juz),
        (status = 400, description = "Invalid number or span", body = ErrorResponse),
        (status = 500, body = ErrorResponse)
    )
)]
pub async fn create_juz(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<JuzPayload>,
) -> Result<impl IntoResponse> {
    let juz = state.juz.save(&payload).await?;
    Ok((StatusCode::CREATED, Json(juz)))
}

#[utoipa::path(
    get,
    path = "/juz",
    tag = "juz",
    params(PageRequest),
    responses((status = 200, body = JuzPage), (status = 400, body = ErrorResponse))
)]
pub async fn list_juz(
    State(state): State<AppState>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<JuzPage>> {
    Ok(Json(state.juz.find_all(&request).await?))
}

#[utoipa::path(
    get,
    path = "/juz/{id}",
    tag = "juz",
    params(("id" = i64, Path, description = "Record id")),
    responses((status = 200, body = Juz), (status = 404, body = ErrorResponse))
)]
pub async fn get_juz(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Juz>> {
    Ok(Json(state.juz.find_by_id(id).await?))
}

/// جزء‌هایی که سوره با این نام داخل بازه‌شون هست
///
/// # Endpoint
/// `GET /juz/surah/:name`
#[utoipa::path(
    get,
    path = "/juz/surah/{name}",
    tag = "juz",
    params(("name" = String, Path, description = "Case-insensitive surah name"), PageRequest),
    responses((status = 200, body = JuzPage))
)]
pub async fn list_juz_by_surah_name(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<JuzPage>> {
    Ok(Json(state.juz.find_by_surah_name(&name, &request).await?))
}

#[utoipa::path(
    put,
    path = "/juz/{id}",
    tag = "juz",
    params(("id" = i64, Path, description = "Record id")),
    request_body = JuzPayload,
    responses(
        (status = 200, body = Juz),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn update_juz(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<JuzPayload>,
) -> Result<Json<Juz>> {
    Ok(Json(state.juz.update_by_id(id, &payload).await?))
}

#[utoipa::path(
    delete,
    path = "/juz/{id}",
    tag = "juz",
    params(("id" = i64, Path, description = "Record id")),
    responses((status = 200, body = EmptyResponse), (status = 404, body = ErrorResponse))
)]
pub async fn delete_juz(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<EmptyResponse>> {
    state.juz.delete_by_id(id, DeleteScope::Soft).await?;
    Ok(Json(EmptyResponse::ok("juz deleted")))
}

#[utoipa::path(
    delete,
    path = "/juz/{id}/{scoped}",
    tag = "juz",
    params(("id" = i64, Path, description = "Record id"), ("scoped" = String, Path, description = "`hard` deletes the row, anything else soft-deletes")),
    responses((status = 200, body = EmptyResponse), (status = 404, body = ErrorResponse))
)]
pub async fn delete_juz_scoped(
    State(state): State<AppState>,
    PathParam((id, scoped)): PathParam<(i64, String)>,
) -> Result<Json<EmptyResponse>> {
    state
        .juz
        .delete_by_id(id, DeleteScope::from_path(Some(&scoped)))
        .await?;
    Ok(Json(EmptyResponse::ok("juz deleted")))
}

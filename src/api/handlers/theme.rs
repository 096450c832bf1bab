//! # Theme Handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    api::extractors::{JsonBody, PathParam, QueryParams},
    error::Result,
    models::{DeleteScope, EmptyResponse, PageRequest, Theme, ThemePage, ThemePayload},
    services::AppState,
};

#[utoipa::path(
    post,
    path = "/themes",
    tag = "themes",
    request_body = ThemePayload,
    responses((status = 201, body = Theme), (status = 400, body = ErrorResponse))
)]
pub async fn create_theme(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ThemePayload>,
) -> Result<impl IntoResponse> {
    let theme = state.themes.save(&payload).await?;
    Ok((StatusCode::CREATED, Json(theme)))
}

#[utoipa::path(
    get,
    path = "/themes",
    tag = "themes",
    params(PageRequest),
    responses((status = 200, body = ThemePage), (status = 400, body = ErrorResponse))
)]
pub async fn list_themes(
    State(state): State<AppState>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<ThemePage>> {
    Ok(Json(state.themes.find_all(&request).await?))
}

#[utoipa::path(
    get,
    path = "/themes/{id}",
    tag = "themes",
    params(("id" = i64, Path, description = "Record id")),
    responses((status = 200, body = Theme), (status = 404, body = ErrorResponse))
)]
pub async fn get_theme(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Theme>> {
    Ok(Json(state.themes.find_by_id(id).await?))
}

/// theme‌هایی که در `book_themes` به این کتاب وصل شدن
#[utoipa::path(
    get,
    path = "/themes/book/{slug}",
    tag = "themes",
    params(("slug" = String, Path, description = "Book slug"), PageRequest),
    responses((status = 200, body = ThemePage))
)]
pub async fn list_themes_by_book_slug(
    State(state): State<AppState>,
    PathParam(slug): PathParam<String>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<ThemePage>> {
    Ok(Json(state.themes.find_by_book_slug(&slug, &request).await?))
}

#[utoipa::path(
    put,
    path = "/themes/{id}",
    tag = "themes",
    params(("id" = i64, Path, description = "Record id")),
    request_body = ThemePayload,
    responses(
        (status = 200, body = Theme),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn update_theme(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<ThemePayload>,
) -> Result<Json<Theme>> {
    Ok(Json(state.themes.update_by_id(id, &payload).await?))
}

#[utoipa::path(
    delete,
    path = "/themes/{id}",
    tag = "themes",
    params(("id" = i64, Path, description = "Record id")),
    responses((status = 200, body = EmptyResponse), (status = 404, body = ErrorResponse))
)]
pub async fn delete_theme(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<EmptyResponse>> {
    state.themes.delete_by_id(id, DeleteScope::Soft).await?;
    Ok(Json(EmptyResponse::ok("theme deleted")))
}

#[utoipa::path(
    delete,
    path = "/themes/{id}/{scoped}",
    tag = "themes",
    params(("id" = i64, Path, description = "Record id"), ("scoped" = String, Path, description = "`hard` deletes the row, anything else soft-deletes")),
    responses((status = 200, body = EmptyResponse), (status = 404, body = ErrorResponse))
)]
pub async fn delete_theme_scoped(
    State(state): State<AppState>,
    PathParam((id, scoped)): PathParam<(i64, String)>,
) -> Result<Json<EmptyResponse>> {
    state
        .themes
        .delete_by_id(id, DeleteScope::from_path(Some(&scoped)))
        .await?;
    Ok(Json(EmptyResponse::ok("theme deleted")))
}

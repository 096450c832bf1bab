//! # Chapter Handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    api::extractors::{JsonBody, PathParam, QueryParams},
    error::Result,
    models::{Chapter, ChapterPage, ChapterPayload, DeleteScope, EmptyResponse, PageRequest},
    services::AppState,
};

#[utoipa::path(
    post,
    path = "/chapters",
    tag = "chapters",
    request_body = ChapterPayload,
    responses(
        (status = 201, body = Chapter),
        (status = 400, body = ErrorResponse),
        (status = 500, description = "Missing theme", body = ErrorResponse)
    )
)]
pub async fn create_chapter(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ChapterPayload>,
) -> Result<impl IntoResponse> {
    let chapter = state.chapters.save(&payload).await?;
    Ok((StatusCode::CREATED, Json(chapter)))
}

#[utoipa::path(
    get,
    path = "/chapters",
    tag = "chapters",
    params(PageRequest),
    responses((status = 200, body = ChapterPage), (status = 400, body = ErrorResponse))
)]
pub async fn list_chapters(
    State(state): State<AppState>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<ChapterPage>> {
    Ok(Json(state.chapters.find_all(&request).await?))
}

#[utoipa::path(
    get,
    path = "/chapters/{id}",
    tag = "chapters",
    params(("id" = i64, Path, description = "Record id")),
    responses((status = 200, body = Chapter), (status = 404, body = ErrorResponse))
)]
pub async fn get_chapter(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Chapter>> {
    Ok(Json(state.chapters.find_by_id(id).await?))
}

#[utoipa::path(
    get,
    path = "/chapters/theme/{id}",
    tag = "chapters",
    params(("id" = i64, Path, description = "Theme id"), PageRequest),
    responses((status = 200, body = ChapterPage))
)]
pub async fn list_chapters_by_theme(
    State(state): State<AppState>,
    PathParam(theme_id): PathParam<i64>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<ChapterPage>> {
    Ok(Json(state.chapters.find_by_theme_id(theme_id, &request).await?))
}

/// باب‌های یک theme که حدیثی از این کتاب دارن
///
/// # Endpoint
/// `GET /chapters/book/:slug/theme/:theme_id`
#[utoipa::path(
    get,
    path = "/chapters/book/{slug}/theme/{theme_id}",
    tag = "chapters",
    params(("slug" = String, Path, description = "Book slug"), ("theme_id" = i64, Path, description = "Theme id"), PageRequest),
    responses((status = 200, body = ChapterPage))
)]
pub async fn list_chapters_by_book_theme(
    State(state): State<AppState>,
    PathParam((slug, theme_id)): PathParam<(String, i64)>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<ChapterPage>> {
    Ok(Json(
        state
            .chapters
            .find_by_book_slug_theme_id(&slug, theme_id, &request)
            .await?,
    ))
}

#[utoipa::path(
    put,
    path = "/chapters/{id}",
    tag = "chapters",
    params(("id" = i64, Path, description = "Record id")),
    request_body = ChapterPayload,
    responses(
        (status = 200, body = Chapter),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn update_chapter(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<ChapterPayload>,
) -> Result<Json<Chapter>> {
    Ok(Json(state.chapters.update_by_id(id, &payload).await?))
}

#[utoipa::path(
    delete,
    path = "/chapters/{id}",
    tag = "chapters",
    params(("id" = i64, Path, description = "Record id")),
    responses((status = 200, body = EmptyResponse), (status = 404, body = ErrorResponse))
)]
pub async fn delete_chapter(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<EmptyResponse>> {
    state.chapters.delete_by_id(id, DeleteScope::Soft).await?;
    Ok(Json(EmptyResponse::ok("chapter deleted")))
}

#[utoipa::path(
    delete,
    path = "/chapters/{id}/{scoped}",
    tag = "chapters",
    params(("id" = i64, Path, description = "Record id"), ("scoped" = String, Path, description = "`hard` deletes the row, anything else soft-deletes")),
    responses((status = 200, body = EmptyResponse), (status = 404, body = ErrorResponse))
)]
pub async fn delete_chapter_scoped(
    State(state): State<AppState>,
    PathParam((id, scoped)): PathParam<(i64, String)>,
) -> Result<Json<EmptyResponse>> {
    state
        .chapters
        .delete_by_id(id, DeleteScope::from_path(Some(&scoped)))
        .await?;
    Ok(Json(EmptyResponse::ok("chapter deleted")))
}

//! # Hadith Handlers
//!
//! CRUD حدیث‌ها و finder‌های رابطه‌ای. همه لیست‌ها به ترتیب `number` هستن.
//!
//! ## Endpoints:
//! - `GET /hadiths/book/:slug`
//! - `GET /hadiths/theme/:id`, `GET /hadiths/theme/name/:name`
//! - `GET /hadiths/chapter/:id`
//! - ترکیب‌ها: `book + theme`, `book + chapter`, `theme + chapter`, `book + theme + chapter`

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    api::extractors::{JsonBody, PathParam, QueryParams},
    error::Result,
    models::{DeleteScope, EmptyResponse, Hadith, HadithPage, HadithPayload, PageRequest},
    services::AppState,
};

// =====================================
// CRUD
// =====================================
/// ساخت حدیث جدید
///
/// # Request Body
/// ```json
/// { "book_id": 1, "theme_id": 5, "chapter_id": null, "number": 1, "translation": { "ar": "..." } }
/// ```
#[utoipa::path(
    post,
    path = "/hadiths",
    tag = "hadiths",
    request_body = HadithPayload,
    responses(
        (status = 201, body = Hadith),
        (status = 400, body = ErrorResponse),
        (status = 500, description = "Duplicate number or missing parent", body = ErrorResponse)
    )
)]
pub async fn create_hadith(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<HadithPayload>,
) -> Result<impl IntoResponse> {
    let hadith = state.hadiths.save(&payload).await?;
    Ok((StatusCode::CREATED, Json(hadith)))
}

#[utoipa::path(
    get,
    path = "/hadiths",
    tag = "hadiths",
    params(PageRequest),
    responses((status = 200, body = HadithPage), (status = 400, body = ErrorResponse))
)]
pub async fn list_hadiths(
    State(state): State<AppState>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<HadithPage>> {
    Ok(Json(state.hadiths.find_all(&request).await?))
}

#[utoipa::path(
    get,
    path = "/hadiths/{id}",
    tag = "hadiths",
    params(("id" = i64, Path, description = "Record id")),
    responses((status = 200, body = Hadith), (status = 404, body = ErrorResponse))
)]
pub async fn get_hadith(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Hadith>> {
    Ok(Json(state.hadiths.find_by_id(id).await?))
}

#[utoipa::path(
    put,
    path = "/hadiths/{id}",
    tag = "hadiths",
    params(("id" = i64, Path, description = "Record id")),
    request_body = HadithPayload,
    responses(
        (status = 200, body = Hadith),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn update_hadith(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<HadithPayload>,
) -> Result<Json<Hadith>> {
    Ok(Json(state.hadiths.update_by_id(id, &payload).await?))
}

#[utoipa::path(
    delete,
    path = "/hadiths/{id}",
    tag = "hadiths",
    params(("id" = i64, Path, description = "Record id")),
    responses((status = 200, body = EmptyResponse), (status = 404, body = ErrorResponse))
)]
pub async fn delete_hadith(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<EmptyResponse>> {
    state.hadiths.delete_by_id(id, DeleteScope::Soft).await?;
    Ok(Json(EmptyResponse::ok("hadith deleted")))
}

#[utoipa::path(
    delete,
    path = "/hadiths/{id}/{scoped}",
    tag = "hadiths",
    params(("id" = i64, Path, description = "Record id"), ("scoped" = String, Path, description = "`hard` deletes the row, anything else soft-deletes")),
    responses((status = 200, body = EmptyResponse), (status = 404, body = ErrorResponse))
)]
pub async fn delete_hadith_scoped(
    State(state): State<AppState>,
    PathParam((id, scoped)): PathParam<(i64, String)>,
) -> Result<Json<EmptyResponse>> {
    state
        .hadiths
        .delete_by_id(id, DeleteScope::from_path(Some(&scoped)))
        .await?;
    Ok(Json(EmptyResponse::ok("hadith deleted")))
}

// =====================================
// Relation Finders
// =====================================
#[utoipa::path(
    get,
    path = "/hadiths/book/{slug}",
    tag = "hadiths",
    params(("slug" = String, Path, description = "Book slug"), PageRequest),
    responses((status = 200, body = HadithPage))
)]
pub async fn list_hadiths_by_book(
    State(state): State<AppState>,
    PathParam(slug): PathParam<String>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<HadithPage>> {
    Ok(Json(state.hadiths.find_by_book_slug(&slug, &request).await?))
}

#[utoipa::path(
    get,
    path = "/hadiths/theme/{id}",
    tag = "hadiths",
    params(("id" = i64, Path, description = "Theme id"), PageRequest),
    responses((status = 200, body = HadithPage))
)]
pub async fn list_hadiths_by_theme(
    State(state): State<AppState>,
    PathParam(theme_id): PathParam<i64>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<HadithPage>> {
    Ok(Json(state.hadiths.find_by_theme_id(theme_id, &request).await?))
}

/// حدیث‌های theme با این نام (انگلیسی یا اندونزیایی)
#[utoipa::path(
    get,
    path = "/hadiths/theme/name/{name}",
    tag = "hadiths",
    params(("name" = String, Path, description = "Theme name, case-insensitive"), PageRequest),
    responses((status = 200, body = HadithPage))
)]
pub async fn list_hadiths_by_theme_name(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<HadithPage>> {
    Ok(Json(state.hadiths.find_by_theme_name(&name, &request).await?))
}

#[utoipa::path(
    get,
    path = "/hadiths/book/{slug}/theme/{theme_id}",
    tag = "hadiths",
    params(("slug" = String, Path, description = "Book slug"), ("theme_id" = i64, Path, description = "Theme id"), PageRequest),
    responses((status = 200, body = HadithPage))
)]
pub async fn list_hadiths_by_book_theme(
    State(state): State<AppState>,
    PathParam((slug, theme_id)): PathParam<(String, i64)>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<HadithPage>> {
    Ok(Json(
        state
            .hadiths
            .find_by_book_slug_theme_id(&slug, theme_id, &request)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/hadiths/chapter/{id}",
    tag = "hadiths",
    params(("id" = i64, Path, description = "Chapter id"), PageRequest),
    responses((status = 200, body = HadithPage))
)]
pub async fn list_hadiths_by_chapter(
    State(state): State<AppState>,
    PathParam(chapter_id): PathParam<i64>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<HadithPage>> {
    Ok(Json(state.hadiths.find_by_chapter_id(chapter_id, &request).await?))
}

#[utoipa::path(
    get,
    path = "/hadiths/book/{slug}/chapter/{chapter_id}",
    tag = "hadiths",
    params(("slug" = String, Path, description = "Book slug"), ("chapter_id" = i64, Path, description = "Chapter id"), PageRequest),
    responses((status = 200, body = HadithPage))
)]
pub async fn list_hadiths_by_book_chapter(
    State(state): State<AppState>,
    PathParam((slug, chapter_id)): PathParam<(String, i64)>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<HadithPage>> {
    Ok(Json(
        state
            .hadiths
            .find_by_book_slug_chapter_id(&slug, chapter_id, &request)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/hadiths/theme/{id}/chapter/{chapter_id}",
    tag = "hadiths",
    params(("id" = i64, Path, description = "Theme id"), ("chapter_id" = i64, Path, description = "Chapter id"), PageRequest),
    responses((status = 200, body = HadithPage))
)]
pub async fn list_hadiths_by_theme_chapter(
    State(state): State<AppState>,
    PathParam((theme_id, chapter_id)): PathParam<(i64, i64)>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<HadithPage>> {
    Ok(Json(
        state
            .hadiths
            .find_by_theme_id_chapter_id(theme_id, chapter_id, &request)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/hadiths/book/{slug}/theme/{theme_id}/chapter/{chapter_id}",
    tag = "hadiths",
    params(
        ("slug" = String, Path, description = "Book slug"),
        ("theme_id" = i64, Path, description = "Theme id"),
        ("chapter_id" = i64, Path, description = "Chapter id"),
        PageRequest
    ),
    responses((status = 200, body = HadithPage))
)]
pub async fn list_hadiths_by_book_theme_chapter(
    State(state): State<AppState>,
    PathParam((slug, theme_id, chapter_id)): PathParam<(String, i64, i64)>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<HadithPage>> {
    Ok(Json(
        state
            .hadiths
            .find_by_book_slug_theme_id_chapter_id(&slug, theme_id, chapter_id, &request)
            .await?,
    ))
}

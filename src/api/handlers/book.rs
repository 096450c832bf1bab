//! # Book Handlers
//!
//! `/books`: کتاب‌های حدیث با media و theme‌هاشون

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    api::extractors::{JsonBody, PathParam, QueryParams},
    error::Result,
    models::{Book, BookPage, BookPayload, DeleteScope, EmptyResponse, PageRequest},
    services::AppState,
};

/// ساخت کتاب جدید
///
/// # Endpoint
/// `POST /books`
///
/// # Request Body
/// ```json
/// {
///   "slug": "sahih-bukhari",
///   "translation": { "en": "Sahih al-Bukhari" },
///   "media": [{ "name": "cover", "url": "https://...", "kind": "image" }],
///   "theme_ids": [1, 2]
/// }
/// ```
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, body = Book),
        (status = 400, description = "Invalid slug or payload", body = ErrorResponse),
        (status = 500, description = "Duplicate slug or missing theme", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<BookPayload>,
) -> Result<impl IntoResponse> {
    let book = state.books.save(&payload).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// لیست کتاب‌ها؛ هر آیتم `count` (تعداد حدیث‌ها) داره
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(PageRequest),
    responses((status = 200, body = BookPage), (status = 400, body = ErrorResponse))
)]
pub async fn list_books(
    State(state): State<AppState>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<BookPage>> {
    Ok(Json(state.books.find_all(&request).await?))
}

#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Record id")),
    responses((status = 200, body = Book), (status = 404, body = ErrorResponse))
)]
pub async fn get_book(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Book>> {
    Ok(Json(state.books.find_by_id(id).await?))
}

/// کتاب با slug؛ theme‌ها به ترتیب اولین حدیث هر کدوم
#[utoipa::path(
    get,
    path = "/books/slug/{slug}",
    tag = "books",
    params(("slug" = String, Path, description = "Book slug, e.g. sahih-bukhari")),
    responses((status = 200, body = Book), (status = 404, body = ErrorResponse))
)]
pub async fn get_book_by_slug(
    State(state): State<AppState>,
    PathParam(slug): PathParam<String>,
) -> Result<Json<Book>> {
    Ok(Json(state.books.find_by_slug(&slug).await?))
}

/// بازنویسی کامل؛ media و `theme_ids` جایگزین میشن
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Record id")),
    request_body = BookPayload,
    responses(
        (status = 200, body = Book),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, description = "Duplicate slug", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<BookPayload>,
) -> Result<Json<Book>> {
    Ok(Json(state.books.update_by_id(id, &payload).await?))
}

#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Record id")),
    responses((status = 200, body = EmptyResponse), (status = 404, body = ErrorResponse))
)]
pub async fn delete_book(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<EmptyResponse>> {
    state.books.delete_by_id(id, DeleteScope::Soft).await?;
    Ok(Json(EmptyResponse::ok("book deleted")))
}

/// حذف کتاب؛ `hard` حدیث‌ها و media‌ش رو هم پاک میکنه
#[utoipa::path(
    delete,
    path = "/books/{id}/{scoped}",
    tag = "books",
    params(("id" = i64, Path, description = "Record id"), ("scoped" = String, Path, description = "`hard` deletes the row, anything else soft-deletes")),
    responses((status = 200, body = EmptyResponse), (status = 404, body = ErrorResponse))
)]
pub async fn delete_book_scoped(
    State(state): State<AppState>,
    PathParam((id, scoped)): PathParam<(i64, String)>,
) -> Result<Json<EmptyResponse>> {
    state
        .books
        .delete_by_id(id, DeleteScope::from_path(Some(&scoped)))
        .await?;
    Ok(Json(EmptyResponse::ok("book deleted")))
}

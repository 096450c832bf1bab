//! # Surah Handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    api::extractors::{JsonBody, PathParam, QueryParams},
    error::Result,
    models::{DeleteScope, EmptyResponse, PageRequest, Surah, SurahPage, SurahPayload},
    services::AppState,
};

/// ساخت سوره جدید
///
/// # Endpoint
/// `POST /surah`
///
/// # Request Body
/// ```json
/// { "number": 1, "name": "Al-Fatihah", "translation": { "en": "The Opening" } }
/// ```
#[utoipa::path(
    post,
    path = "/surah",
    tag = "surah",
    request_body = SurahPayload,
    responses(
        (status = 201, body = Surah),
        (status = 400, body = ErrorResponse),
        (status = 500, description = "Duplicate number", body = ErrorResponse)
    )
)]
pub async fn create_surah(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SurahPayload>,
) -> Result<impl IntoResponse> {
    let surah = state.surah.save(&payload).await?;
    Ok((StatusCode::CREATED, Json(surah)))
}

#[utoipa::path(
    get,
    path = "/surah",
    tag = "surah",
    params(PageRequest),
    responses((status = 200, body = SurahPage), (status = 400, body = ErrorResponse))
)]
pub async fn list_surah(
    State(state): State<AppState>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<SurahPage>> {
    Ok(Json(state.surah.find_all(&request).await?))
}

#[utoipa::path(
    get,
    path = "/surah/{id}",
    tag = "surah",
    params(("id" = i64, Path, description = "Record id")),
    responses((status = 200, body = Surah), (status = 404, body = ErrorResponse))
)]
pub async fn get_surah(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Surah>> {
    Ok(Json(state.surah.find_by_id(id).await?))
}

/// سوره با شماره (1 تا 114)
#[utoipa::path(
    get,
    path = "/surah/number/{number}",
    tag = "surah",
    params(("number" = i64, Path, description = "Number")),
    responses((status = 200, body = Surah), (status = 404, body = ErrorResponse))
)]
pub async fn get_surah_by_number(
    State(state): State<AppState>,
    PathParam(number): PathParam<i64>,
) -> Result<Json<Surah>> {
    Ok(Json(state.surah.find_by_number(number).await?))
}

/// سوره با نام، مثلا `/surah/name/al-fatihah`
#[utoipa::path(
    get,
    path = "/surah/name/{name}",
    tag = "surah",
    params(("name" = String, Path, description = "Case-insensitive surah name")),
    responses((status = 200, body = Surah), (status = 404, body = ErrorResponse))
)]
pub async fn get_surah_by_name(
    State(state): State<AppState>,
    PathParam(name): PathParam<String>,
) -> Result<Json<Surah>> {
    Ok(Json(state.surah.find_by_name(&name).await?))
}

#[utoipa::path(
    put,
    path = "/surah/{id}",
    tag = "surah",
    params(("id" = i64, Path, description = "Record id")),
    request_body = SurahPayload,
    responses(
        (status = 200, body = Surah),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn update_surah(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<SurahPayload>,
) -> Result<Json<Surah>> {
    Ok(Json(state.surah.update_by_id(id, &payload).await?))
}

#[utoipa::path(
    delete,
    path = "/surah/{id}",
    tag = "surah",
    params(("id" = i64, Path, description = "Record id")),
    responses((status = 200, body = EmptyResponse), (status = 404, body = ErrorResponse))
)]
pub async fn delete_surah(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<EmptyResponse>> {
    state.surah.delete_by_id(id, DeleteScope::Soft).await?;
    Ok(Json(EmptyResponse::ok("surah deleted")))
}

/// حذف سوره؛ `hard` آیه‌هاش رو هم پاک میکنه
#[utoipa::path(
    delete,
    path = "/surah/{id}/{scoped}",
    tag = "surah",
    params(("id" = i64, Path, description = "Record id"), ("scoped" = String, Path, description = "`hard` deletes the row, anything else soft-deletes")),
    responses((status = 200, body = EmptyResponse), (status = 404, body = ErrorResponse))
)]
pub async fn delete_surah_scoped(
    State(state): State<AppState>,
    PathParam((id, scoped)): PathParam<(i64, String)>,
) -> Result<Json<EmptyResponse>> {
    state
        .surah
        .delete_by_id(id, DeleteScope::from_path(Some(&scoped)))
        .await?;
    Ok(Json(EmptyResponse::ok("surah deleted")))
}

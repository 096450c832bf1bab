//! # Ayah Handlers
//!
//! `/ayah`: CRUD آیه‌ها و جستجو با شماره آیه یا شماره سوره

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    api::extractors::{JsonBody, PathParam, QueryParams},
    error::Result,
    models::{Ayah, AyahPage, AyahPayload, DeleteScope, EmptyResponse, PageRequest},
    services::AppState,
};

/// ساخت آیه جدید
///
/// # Endpoint
/// `POST /ayah`
#[utoipa::path(
    post,
    path = "/ayah",
    tag = "ayah",
    request_body = AyahPayload,
    responses(
        (status = 201, description = "Ayah created", body = Ayah),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Duplicate number or missing surah", body = ErrorResponse)
    )
)]
pub async fn create_ayah(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AyahPayload>,
) -> Result<impl IntoResponse> {
    let ayah = state.ayah.save(&payload).await?;
    Ok((StatusCode::CREATED, Json(ayah)))
}

/// لیست صفحه‌بندی شده آیه‌ها
#[utoipa::path(
    get,
    path = "/ayah",
    tag = "ayah",
    params(PageRequest),
    responses(
        (status = 200, body = AyahPage),
        (status = 400, description = "Unknown sort field", body = ErrorResponse)
    )
)]
pub async fn list_ayah(
    State(state): State<AppState>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<AyahPage>> {
    Ok(Json(state.ayah.find_all(&request).await?))
}

#[utoipa::path(
    get,
    path = "/ayah/{id}",
    tag = "ayah",
    params(("id" = i64, Path, description = "Ayah id")),
    responses(
        (status = 200, body = Ayah),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn get_ayah(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Ayah>> {
    Ok(Json(state.ayah.find_by_id(id).await?))
}

/// اولین آیه با این شماره
///
/// # Endpoint
/// `GET /ayah/number/:number`
#[utoipa::path(
    get,
    path = "/ayah/number/{number}",
    tag = "ayah",
    params(("number" = i64, Path, description = "Verse number")),
    responses(
        (status = 200, body = Ayah),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn get_ayah_by_number(
    State(state): State<AppState>,
    PathParam(number): PathParam<i64>,
) -> Result<Json<Ayah>> {
    Ok(Json(state.ayah.find_by_number(number).await?))
}

/// آیه‌های یک سوره به ترتیب شماره آیه
///
/// # Endpoint
/// `GET /ayah/surah/number/:number`
#[utoipa::path(
    get,
    path = "/ayah/surah/number/{number}",
    tag = "ayah",
    params(("number" = i64, Path, description = "Surah number"), PageRequest),
    responses((status = 200, body = AyahPage))
)]
pub async fn list_ayah_by_surah_number(
    State(state): State<AppState>,
    PathParam(number): PathParam<i64>,
    QueryParams(request): QueryParams<PageRequest>,
) -> Result<Json<AyahPage>> {
    Ok(Json(state.ayah.find_by_surah_number(number, &request).await?))
}

/// بازنویسی کامل آیه
#[utoipa::path(
    put,
    path = "/ayah/{id}",
    tag = "ayah",
    params(("id" = i64, Path, description = "Record id")),
    request_body = AyahPayload,
    responses(
        (status = 200, body = Ayah),
        (status = 400, body = ErrorResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn update_ayah(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<AyahPayload>,
) -> Result<Json<Ayah>> {
    Ok(Json(state.ayah.update_by_id(id, &payload).await?))
}

/// حذف soft
#[utoipa::path(
    delete,
    path = "/ayah/{id}",
    tag = "ayah",
    params(("id" = i64, Path, description = "Record id")),
    responses(
        (status = 200, body = EmptyResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn delete_ayah(
    State(state): State<AppState>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<EmptyResponse>> {
    state.ayah.delete_by_id(id, DeleteScope::Soft).await?;
    Ok(Json(EmptyResponse::ok("ayah deleted")))
}

/// حذف با scope؛ فقط `hard` ردیف رو واقعا پاک میکنه
#[utoipa::path(
    delete,
    path = "/ayah/{id}/{scoped}",
    tag = "ayah",
    params(("id" = i64, Path, description = "Record id"), ("scoped" = String, Path, description = "`hard` for physical delete")),
    responses(
        (status = 200, body = EmptyResponse),
        (status = 404, body = ErrorResponse)
    )
)]
pub async fn delete_ayah_scoped(
    State(state): State<AppState>,
    PathParam((id, scoped)): PathParam<(i64, String)>,
) -> Result<Json<EmptyResponse>> {
    state
        .ayah
        .delete_by_id(id, DeleteScope::from_path(Some(&scoped)))
        .await?;
    Ok(Json(EmptyResponse::ok("ayah deleted")))
}

//! # Custom Extractors
//!
//! wrapper‌های نازک دور extractor‌های axum که rejection رو به `AppError`
//! تبدیل میکنن تا پارامتر خراب (مثلا `/books/abc`) همون پاسخ JSON
//! خطای بقیه API رو برگردونه (400).
//!
//! ## استفاده در handler:
//! ```rust,ignore
//! async fn handler(PathParam(id): PathParam<i64>, QueryParams(page): QueryParams<PageRequest>) -> ... {
//! }
//! ```

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

// =====================================
// Path Extractor
// =====================================
/// پارامترهای مسیر (`:id`, `:slug`, ...)
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(PathParam(value))
    }
}

// =====================================
// Query Extractor
// =====================================
/// پارامترهای query string (صفحه‌بندی)
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(value))
    }
}

// =====================================
// JSON Body Extractor
// =====================================
/// بدنه JSON
///
/// اعتبارسنجی فیلدها در لایه service انجام میشه؛ اینجا فقط parse.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

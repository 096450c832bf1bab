//! # ماژول مدیریت خطاها (Error Handling)
//!
//! این ماژول سیستم مدیریت خطای برنامه رو تعریف میکنه.
//!
//! ## دسته‌بندی خطاها
//! - `NotFound`: ردیف (غیر حذف‌شده) پیدا نشد - 404
//! - `BadRequest` / `Validation`: پارامتر یا بدنه نامعتبر - 400
//! - `Persistence`: نقض constraint یا قطع اتصال دیتابیس - 500
//! - بقیه (`Server`, `Database`, ...): خطای داخلی - 500
//!
//! لایه repository و service خطا رو بدون تغییر برمیگردونن؛
//! تبدیل به status code فقط اینجا و در `IntoResponse` انجام میشه.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::error::ErrorKind;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

// =====================================
// Result Type Alias
// =====================================
/// نوع Result سفارشی برنامه
pub type Result<T, E = AppError> = std::result::Result<T, E>;

// =====================================
// Custom Error Enum
// =====================================
/// خطای اصلی برنامه
#[derive(Debug, Error)]
pub enum AppError {
    // ----------------------------------------
    // خطاهای کاربر (4xx)
    // ----------------------------------------

    /// درخواست نامعتبر - 400
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// پیدا نشد - 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// خطای اعتبارسنجی payload - 400
    #[error("Validation error: {0}")]
    Validation(String),

    // ----------------------------------------
    // خطاهای سرور (5xx)
    // ----------------------------------------

    /// نقض constraint (slug/number تکراری، foreign key نامعتبر) یا قطع اتصال
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// خطای سرور
    #[error("Server error: {0}")]
    Server(String),

    /// خطای تنظیمات
    #[error("Configuration error: {0}")]
    Config(String),

    // ----------------------------------------
    // خطاهای تبدیل شده از کتابخانه‌ها
    // ----------------------------------------

    /// خطای دیتابیس که در دسته‌های بالا جا نمیگیره
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// خطای migration
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// خطای IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// گرفتن HTTP status code متناسب با خطا
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,

            Self::Persistence(_)
            | Self::Server(_)
            | Self::Config(_)
            | Self::Database(_)
            | Self::Migrate(_)
            | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// آیا این یه خطای سرور هست؟
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// ساخت خطای Not Found برای یک منبع با شناسه
    #[must_use]
    pub fn not_found(resource: &str, key: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{} '{}' not found", resource, key))
    }
}

// =====================================
// sqlx::Error -> AppError
// =====================================
/// تبدیل خطای sqlx
///
/// نقض constraint‌ها و مشکلات اتصال `Persistence` میشن،
/// `RowNotFound` میشه `NotFound` و بقیه `Database`.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if matches!(
                db_err.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            ) {
                return Self::Persistence(db_err.message().to_string());
            }
        }

        if matches!(err, sqlx::Error::RowNotFound) {
            return Self::NotFound("record not found".to_string());
        }

        if matches!(
            err,
            sqlx::Error::Io(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed
        ) {
            return Self::Persistence(err.to_string());
        }

        Self::Database(err)
    }
}

// =====================================
// Extractor Rejections
// =====================================
// پارامترهای خراب مسیر/query/بدنه همه 400 میشن

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(format!("Invalid JSON: {}", rejection.body_text()))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

// =====================================
// Error Response DTO
// =====================================
/// ساختار پاسخ خطا در API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// عنوان وضعیت HTTP (مثلا "Not Found")
    pub error: String,

    /// توضیح خطا
    pub message: String,

    /// کد وضعیت HTTP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ErrorResponse {
    /// ساخت پاسخ خطای جدید
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: None,
        }
    }

    /// اضافه کردن کد وضعیت
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status_code = Some(status.as_u16());
        self
    }
}

// =====================================
// IntoResponse Implementation
// =====================================
/// تبدیل AppError به Response HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            error!(error = %self, "Server error occurred");
        }

        let status = self.status_code();
        let error_response = ErrorResponse::new(
            status.canonical_reason().unwrap_or("Error"),
            self.to_string(),
        )
        .with_status(status);

        (status, Json(error_response)).into_response()
    }
}

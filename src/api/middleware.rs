//! # Middleware
//!
//! Middleware‌های سفارشی برای پردازش request/response.
//! بقیه لایه‌ها (trace، CORS، catch-panic) از `tower-http` میان و در
//! `create_router` چیده میشن.

use std::any::Any;

use axum::{
    body::Body,
    http::{header::HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

// =====================================
// Security Headers Middleware
// =====================================
/// اضافه کردن header‌های امنیتی
///
/// # Headers:
/// - X-Content-Type-Options
/// - X-Frame-Options
/// - X-XSS-Protection
/// - Referrer-Policy
///
/// # استفاده:
/// ```rust,ignore
/// let app = Router::new()
///     .layer(axum::middleware::from_fn(security_headers));
/// ```
pub async fn security_headers(request: Request<Body>, next: Next) -> impl IntoResponse {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    // جلوگیری از MIME sniffing
    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));

    // جلوگیری از clickjacking
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));

    headers.insert("X-XSS-Protection", HeaderValue::from_static("1; mode=block"));

    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}

// =====================================
// Panic Recovery
// =====================================
/// تبدیل panic یک handler به پاسخ 500
///
/// با `CatchPanicLayer::custom(handle_panic)` استفاده میشه؛ پیام panic
/// موقع ساخت پاسخ لاگ میشه.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Server(format!("handler panicked: {}", details)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_panic_becomes_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

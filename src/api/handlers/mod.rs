//! # HTTP Handlers
//!
//! یک ماژول برای هر منبع؛ handler‌ها پارامترها رو میخونن، سرویس رو
//! صدا میزنن و نتیجه رو JSON برمیگردونن. خطاها از طریق `AppError`
//! به status code تبدیل میشن.
//!
//! handler‌های عمومی (فهرست، info، swagger) همینجا هستن.

pub mod ayah;
pub mod surah;
pub mod juz;
pub mod book;
pub mod theme;
pub mod chapter;
pub mod hadith;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use utoipa::{openapi::server::Server, OpenApi};

use crate::{
    api::docs::ApiDoc,
    error::Result,
    models::{ApiIndex, ApiInfo},
    services::AppState,
};

// =====================================
// Index / Info
// =====================================
/// فهرست منابع API
///
/// # Endpoint
/// `GET /`
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, body = ApiIndex))
)]
pub async fn index(State(state): State<AppState>) -> Json<ApiIndex> {
    Json(ApiIndex::new(&state.config.endpoint))
}

/// نام، نسخه و تعداد ردیف‌های هر منبع
///
/// # Endpoint
/// `GET /info`
///
/// # Response
/// ```json
/// {
///   "name": "islamic-explorer",
///   "version": "0.1.0",
///   "counts": { "ayah": 6236, "surah": 114, ... }
/// }
/// ```
#[utoipa::path(
    get,
    path = "/info",
    tag = "meta",
    responses((status = 200, body = ApiInfo), (status = 500, body = ErrorResponse))
)]
pub async fn info(State(state): State<AppState>) -> Result<Json<ApiInfo>> {
    let counts = state.resource_counts().await?;
    Ok(Json(ApiInfo::new(counts)))
}

// =====================================
// Swagger
// =====================================
/// سند OpenAPI با پیشوند فعلی به عنوان server
pub async fn swagger_json(State(state): State<AppState>) -> impl IntoResponse {
    let mut doc = ApiDoc::openapi();

    let server = if state.config.endpoint.is_empty() {
        "/"
    } else {
        state.config.endpoint.as_str()
    };
    doc.servers = Some(vec![Server::new(server)]);

    Json(doc)
}

/// صفحه Swagger UI که `swagger.json` رو لود میکنه
pub async fn swagger_ui(State(state): State<AppState>) -> Html<String> {
    Html(swagger_page(&format!("{}/swagger.json", state.config.endpoint)))
}

fn swagger_page(spec_url: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>islamic-explorer API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {{
      window.ui = SwaggerUIBundle({{ url: "{}", dom_id: "#swagger-ui" }});
    }};
  </script>
</body>
</html>"##,
        spec_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swagger_page_points_at_spec() {
        let page = swagger_page("/v1/swagger.json");
        assert!(page.contains(r#"url: "/v1/swagger.json""#));
        assert!(page.contains(r##"dom_id: "#swagger-ui""##));
        assert!(page.trim_end().ends_with("</html>"));
    }
}

//! # لایه API
//!
//! Router، middleware‌ها و handler‌های HTTP.
//!
//! ## ساختار URL‌ها (زیر پیشوند `ENDPOINT`، پیش‌فرض `/v1`):
//! - `GET /`, `GET /info`, `GET /swagger.json`, `GET /swagger/*`
//! - `/ayah`, `/surah`, `/juz`: قرآن
//! - `/books`, `/themes`, `/chapters`, `/hadiths`: حدیث
//!
//! هر منبع: `POST /`, `GET /`, `GET|PUT|DELETE /:id`, `DELETE /:id/:scoped`
//! به اضافه finder‌های مخصوص خودش.

mod handlers;
mod middleware;
mod extractors;
mod docs;

pub use handlers::*;
pub use middleware::*;
pub use extractors::*;
pub use docs::ApiDoc;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, database::Database, services::AppState};

// =====================================
// Router Builder
// =====================================
/// ساخت Router اصلی برنامه
///
/// ترتیب middleware‌ها از بیرون به داخل:
/// catch-panic، trace، security headers، CORS.
/// آخرین `.layer()` بیرونی‌ترین لایه هست.
///
/// # Arguments
/// * `db` - اتصال دیتابیس
/// * `config` - تنظیمات برنامه
pub fn create_router(db: Database, config: Config) -> Router {
    let prefix = config.endpoint.clone();
    let state = AppState::new(db, config);

    let api = api_routes().with_state(state);

    let router = if prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(&prefix, api)
    };

    router
        // CORS - اجازه دسترسی از دامنه‌های دیگه
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(axum_middleware::from_fn(security_headers))
        // Tracing - لاگ کردن request‌ها
        .layer(TraceLayer::new_for_http())
        // panic در handler -> 500
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// همه route‌ها بدون پیشوند
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/info", get(handlers::info))
        .route("/swagger.json", get(handlers::swagger_json))
        .route("/swagger", get(handlers::swagger_ui))
        .route("/swagger/*rest", get(handlers::swagger_ui))
        .nest("/ayah", ayah_routes())
        .nest("/surah", surah_routes())
        .nest("/juz", juz_routes())
        .nest("/books", book_routes())
        .nest("/themes", theme_routes())
        .nest("/chapters", chapter_routes())
        .nest("/hadiths", hadith_routes())
}

// =====================================
// Quran
// =====================================
fn ayah_routes() -> Router<AppState> {
    use handlers::ayah::*;

    Router::new()
        .route("/", get(list_ayah).post(create_ayah))
        .route("/:id", get(get_ayah).put(update_ayah).delete(delete_ayah))
        .route("/:id/:scoped", delete(delete_ayah_scoped))
        .route("/number/:number", get(get_ayah_by_number))
        .route("/surah/number/:number", get(list_ayah_by_surah_number))
}

fn surah_routes() -> Router<AppState> {
    use handlers::surah::*;

    Router::new()
        .route("/", get(list_surah).post(create_surah))
        .route("/:id", get(get_surah).put(update_surah).delete(delete_surah))
        .route("/:id/:scoped", delete(delete_surah_scoped))
        .route("/number/:number", get(get_surah_by_number))
        .route("/name/:name", get(get_surah_by_name))
}

fn juz_routes() -> Router<AppState> {
    use handlers::juz::*;

    Router::new()
        .route("/", get(list_juz).post(create_juz))
        .route("/:id", get(get_juz).put(update_juz).delete(delete_juz))
        .route("/:id/:scoped", delete(delete_juz_scoped))
        .route("/surah/:name", get(list_juz_by_surah_name))
}

// =====================================
// Hadith
// =====================================
fn book_routes() -> Router<AppState> {
    use handlers::book::*;

    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/:id", get(get_book).put(update_book).delete(delete_book))
        .route("/:id/:scoped", delete(delete_book_scoped))
        .route("/slug/:slug", get(get_book_by_slug))
}

fn theme_routes() -> Router<AppState> {
    use handlers::theme::*;

    Router::new()
        .route("/", get(list_themes).post(create_theme))
        .route("/:id", get(get_theme).put(update_theme).delete(delete_theme))
        .route("/:id/:scoped", delete(delete_theme_scoped))
        .route("/book/:slug", get(list_themes_by_book_slug))
}

fn chapter_routes() -> Router<AppState> {
    use handlers::chapter::*;

    Router::new()
        .route("/", get(list_chapters).post(create_chapter))
        .route(
            "/:id",
            get(get_chapter).put(update_chapter).delete(delete_chapter),
        )
        .route("/:id/:scoped", delete(delete_chapter_scoped))
        .route("/theme/:id", get(list_chapters_by_theme))
        .route("/book/:slug/theme/:theme_id", get(list_chapters_by_book_theme))
}

fn hadith_routes() -> Router<AppState> {
    use handlers::hadith::*;

    Router::new()
        .route("/", get(list_hadiths).post(create_hadith))
        .route("/:id", get(get_hadith).put(update_hadith).delete(delete_hadith))
        .route("/:id/:scoped", delete(delete_hadith_scoped))
        .route("/book/:slug", get(list_hadiths_by_book))
        .route("/book/:slug/theme/:theme_id", get(list_hadiths_by_book_theme))
        .route("/book/:slug/chapter/:chapter_id", get(list_hadiths_by_book_chapter))
        .route(
            "/book/:slug/theme/:theme_id/chapter/:chapter_id",
            get(list_hadiths_by_book_theme_chapter),
        )
        .route("/theme/:id", get(list_hadiths_by_theme))
        .route("/theme/name/:name", get(list_hadiths_by_theme_name))
        .route("/theme/:id/chapter/:chapter_id", get(list_hadiths_by_theme_chapter))
        .route("/chapter/:id", get(list_hadiths_by_chapter))
}

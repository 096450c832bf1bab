//! # Islamic Explorer - نقطه ورود برنامه
//!
//! تنظیمات، لاگینگ، دیتابیس و router رو راه میندازه و سرور رو اجرا میکنه.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use islamic_explorer::{
    api::create_router,
    config::{Config, Environment},
    database::Database,
    error::{AppError, Result},
};

/// نقطه ورود اصلی برنامه
///
/// # Errors
/// خطا برمیگردونه اگه:
/// - تنظیمات نامعتبر باشن
/// - دیتابیس متصل نشه یا migration fail بشه
/// - سرور استارت نشه
#[tokio::main]
async fn main() -> Result<()> {
    // فایل .env اختیاریه
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;

    init_tracing(config.environment);

    info!(
        environment = ?config.environment,
        endpoint = %config.endpoint,
        "Starting islamic-explorer"
    );

    let database = Database::connect(&config.database_url).await?;
    database.migrate().await?;
    database.health_check().await?;
    info!(url = %config.database_url, "Database ready");

    let addr = config.server_addr();
    let app = create_router(database, config);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}

/// راه‌اندازی tracing
///
/// `RUST_LOG` اگه ست باشه اولویت داره. در production خروجی JSON هست
/// و در بقیه محیط‌ها فرمت pretty.
fn init_tracing(environment: Environment) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("islamic_explorer=debug,tower_http=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if environment.is_production() {
        registry
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .init();
    }
}

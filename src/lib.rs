//! # Islamic Explorer Library
//!
//! REST API برای محتوای مرجع: آیه، سوره و جزء قرآن، و کتاب‌ها،
//! theme‌ها، باب‌ها و حدیث‌ها.
//!
//! ## ساختار پروژه
//!
//! ```text
//! src/
//! ├── lib.rs          # نقطه ورود کتابخانه
//! ├── main.rs         # نقطه ورود باینری
//! ├── config/         # تنظیمات از متغیرهای محیطی
//! ├── error/          # AppError و تبدیل به پاسخ HTTP
//! ├── database/       # Repository‌ها و SQL
//! ├── models/         # Entity‌ها، payload‌ها و صفحه‌بندی
//! ├── services/       # لایه سرویس و AppState
//! ├── api/            # Router، middleware و handler‌ها
//! └── utils/          # توابع کمکی
//! ```
//!
//! ## مثال استفاده
//!
//! ```rust,no_run
//! use islamic_explorer::{api::create_router, config::Config, database::Database};
//!
//! #[tokio::main]
//! async fn main() -> islamic_explorer::Result<()> {
//!     let config = Config::from_env()?;
//!     let db = Database::connect(&config.database_url).await?;
//!     db.migrate().await?;
//!     let _app = create_router(db, config);
//!     Ok(())
//! }
//! ```

// =====================================
// Module Declarations
// =====================================

/// ماژول مدیریت تنظیمات برنامه
pub mod config;

/// ماژول تعریف و مدیریت خطاها
pub mod error;

/// ماژول ارتباط با دیتابیس
pub mod database;

/// ماژول مدل‌های داده
pub mod models;

/// ماژول سرویس‌ها
pub mod services;

/// ماژول API و HTTP Handlers
pub mod api;

/// ماژول توابع کمکی
pub mod utils;

// =====================================
// Re-exports
// =====================================

/// نتیجه عملیات با خطای سفارشی ما
pub use error::Result;

/// خطای اصلی برنامه
pub use error::AppError;

// =====================================
// Prelude Module
// =====================================
/// ماژول prelude برای import راحت‌تر آیتم‌های پرکاربرد
///
/// کاربرد:
/// ```rust
/// use islamic_explorer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::database::{Database, Repository};
    pub use crate::error::{AppError, Result};
    pub use crate::models::*;
    pub use crate::services::*;
}

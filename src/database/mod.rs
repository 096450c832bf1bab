//! # ماژول دیتابیس (Database Layer)
//!
//! این ماژول لایه ارتباط با دیتابیس رو مدیریت میکنه.
//!
//! ## الگوهای طراحی:
//! - Repository Pattern: یک repository برای هر entity، همه پشت trait `Repository`
//! - Connection Pool: تنها منبع مشترک بین request‌ها
//! - SQL صریح: لیست ستون‌ها و JOIN‌ها در هر repository نوشته شده

/// ستون‌های ترجمه با پیشوند `tr_` (جدول با alias `tr` join میشه)
macro_rules! translation_columns {
    () => {
        "tr.id AS tr_id, tr.ar AS tr_ar, tr.en AS tr_en, tr.idn AS tr_idn, \
         tr.latin_en AS tr_latin_en, tr.latin_idn AS tr_latin_idn"
    };
}

mod repository;
mod ayah;
mod surah;
mod juz;
mod book;
mod theme;
mod chapter;
mod hadith;

pub use repository::*;
pub use ayah::*;
pub use surah::*;
pub use juz::*;
pub use book::*;
pub use theme::*;
pub use chapter::*;
pub use hadith::*;

use std::{sync::Arc, time::Duration};

use sqlx::{
    migrate::Migrator,
    sqlite::{SqlitePool, SqlitePoolOptions},
};

use crate::error::Result;

// مسیر migration‌ها
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

// =====================================
// Database Connection
// =====================================
/// اتصال به دیتابیس با Connection Pool
///
/// `Arc` اجازه میده pool بین همه repository‌ها share بشه؛
/// هر clone فقط شمارنده رو زیاد میکنه.
#[derive(Debug, Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    /// اتصال به دیتابیس
    ///
    /// # Arguments
    /// * `database_url` - آدرس دیتابیس (مثلا `sqlite://data/islamic.db?mode=rwc`)
    ///
    /// # Errors
    /// خطا برمیگردونه اگه پوشه دیتابیس ساخته نشه یا اتصال موفق نباشه
    pub async fn connect(database_url: impl AsRef<str>) -> Result<Self> {
        let url = database_url.as_ref();

        // ساخت پوشه فایل sqlite اگه وجود نداره
        if let Some(path) = url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .connect(url)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// دیتابیس in-memory با migration‌های اجرا شده (برای تست)
    ///
    /// فقط یک اتصال داره و اون اتصال هیچوقت بسته نمیشه، چون با بسته
    /// شدنش کل داده‌ها از بین میره.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let db = Self {
            pool: Arc::new(pool),
        };

        db.migrate().await?;
        Ok(db)
    }

    /// اجرای migration‌ها
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&*self.pool).await?;
        Ok(())
    }

    /// دسترسی به pool
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// بررسی سلامت دیتابیس
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&*self.pool).await?;
        Ok(())
    }

    /// شروع یک تراکنش
    ///
    /// اگه commit نشه، موقع drop خودکار rollback میشه.
    pub async fn begin(&self) -> Result<sqlx::Transaction<'static, sqlx::Sqlite>> {
        Ok(self.pool.begin().await?)
    }
}

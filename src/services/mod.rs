//! # ماژول سرویس‌ها (Service Layer)
//!
//! سرویس‌ها روی repository‌ها سوار میشن: payload رو اعتبارسنجی میکنن،
//! عملیات‌های نوشتنی رو لاگ میکنن و بقیه رو بدون تغییر پاس میدن.
//!
//! ```text
//! ┌─────────────────┐
//! │    API Layer    │  <-- HTTP handlers (axum)
//! ├─────────────────┤
//! │  Service Layer  │  <-- اعتبارسنجی + لاگ
//! ├─────────────────┤
//! │ Repository Layer│  <-- SQL
//! ├─────────────────┤
//! │    Database     │  <-- SQLite
//! └─────────────────┘
//! ```

mod quran;
mod hadith;

use std::sync::Arc;

use tracing::{info, instrument};
use validator::Validate;

use crate::{
    config::Config,
    database::{
        AyahRepository, BookRepository, ChapterRepository, Database, HadithRepository,
        JuzRepository, Repository, SurahRepository, ThemeRepository,
    },
    error::Result,
    models::{DeleteScope, Page, PageRequest, Paginator, ResourceCounts},
};

// =====================================
// Resource Service
// =====================================
/// سرویس عمومی CRUD روی یک repository
///
/// finder‌های مخصوص هر entity به صورت `impl ResourceService<XRepository>`
/// در `quran.rs` و `hadith.rs` اضافه شدن.
#[derive(Debug, Clone)]
pub struct ResourceService<R> {
    repo: R,
    name: &'static str,
}

impl<R> ResourceService<R>
where
    R: Repository,
    R::Payload: Validate,
{
    #[must_use]
    pub fn new(repo: R, name: &'static str) -> Self {
        Self { repo, name }
    }

    /// ساخت رکورد جدید
    ///
    /// # Errors
    /// - `Validation`: payload نامعتبر
    /// - `Persistence`: نقض constraint یا parent ناموجود
    #[instrument(skip(self, payload), fields(resource = self.name))]
    pub async fn save(&self, payload: &R::Payload) -> Result<R::Entity> {
        payload.validate()?;

        let entity = self.repo.save(payload).await?;

        info!("Created {}", self.name);
        Ok(entity)
    }

    #[instrument(skip(self), fields(resource = self.name))]
    pub async fn find_all(&self, request: &PageRequest) -> Result<Page<R::Entity>> {
        self.repo.find_all(request).await
    }

    #[instrument(skip(self), fields(resource = self.name))]
    pub async fn find_by_id(&self, id: i64) -> Result<R::Entity> {
        self.repo.find_by_id(id).await
    }

    /// بازنویسی کامل رکورد
    #[instrument(skip(self, payload), fields(resource = self.name))]
    pub async fn update_by_id(&self, id: i64, payload: &R::Payload) -> Result<R::Entity> {
        payload.validate()?;

        let entity = self.repo.update_by_id(id, payload).await?;

        info!(id, "Updated {}", self.name);
        Ok(entity)
    }

    #[instrument(skip(self), fields(resource = self.name))]
    pub async fn delete_by_id(&self, id: i64, scope: DeleteScope) -> Result<()> {
        self.repo.delete_by_id(id, scope).await?;

        info!(id, hard = scope.is_hard(), "Deleted {}", self.name);
        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        self.repo.count().await
    }
}

pub type AyahService = ResourceService<AyahRepository>;
pub type SurahService = ResourceService<SurahRepository>;
pub type JuzService = ResourceService<JuzRepository>;
pub type BookService = ResourceService<BookRepository>;
pub type ThemeService = ResourceService<ThemeRepository>;
pub type ChapterService = ResourceService<ChapterRepository>;
pub type HadithService = ResourceService<HadithRepository>;

// =====================================
// Application State
// =====================================
/// وضعیت برنامه که بین همه handler‌ها share میشه
///
/// Clone کردنش فقط شمارنده‌های `Arc` رو زیاد میکنه.
#[derive(Clone)]
pub struct AppState {
    /// تنظیمات برنامه
    pub config: Arc<Config>,

    pub ayah: Arc<AyahService>,
    pub surah: Arc<SurahService>,
    pub juz: Arc<JuzService>,
    pub books: Arc<BookService>,
    pub themes: Arc<ThemeService>,
    pub chapters: Arc<ChapterService>,
    pub hadiths: Arc<HadithService>,
}

impl AppState {
    /// ساخت همه repository‌ها و سرویس‌ها روی یک pool مشترک
    #[must_use]
    pub fn new(db: Database, config: Config) -> Self {
        let paginator = Paginator::new(config.page_size, config.max_page_size);

        Self {
            ayah: Arc::new(ResourceService::new(
                AyahRepository::new(db.clone(), paginator),
                "ayah",
            )),
            surah: Arc::new(ResourceService::new(
                SurahRepository::new(db.clone(), paginator),
                "surah",
            )),
            juz: Arc::new(ResourceService::new(
                JuzRepository::new(db.clone(), paginator),
                "juz",
            )),
            books: Arc::new(ResourceService::new(
                BookRepository::new(db.clone(), paginator),
                "book",
            )),
            themes: Arc::new(ResourceService::new(
                ThemeRepository::new(db.clone(), paginator),
                "theme",
            )),
            chapters: Arc::new(ResourceService::new(
                ChapterRepository::new(db.clone(), paginator),
                "chapter",
            )),
            hadiths: Arc::new(ResourceService::new(
                HadithRepository::new(db, paginator),
                "hadith",
            )),
            config: Arc::new(config),
        }
    }

    /// دسترسی به config
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// تعداد ردیف‌های غیر حذف‌شده همه منابع (برای `/info`)
    pub async fn resource_counts(&self) -> Result<ResourceCounts> {
        Ok(ResourceCounts {
            ayah: self.ayah.count().await?,
            surah: self.surah.count().await?,
            juz: self.juz.count().await?,
            books: self.books.count().await?,
            themes: self.themes.count().await?,
            chapters: self.chapters.count().await?,
            hadiths: self.hadiths.count().await?,
        })
    }
}

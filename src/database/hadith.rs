//! Repository حدیث
//!
//! همه finder‌های رابطه‌ای (کتاب، theme، باب و ترکیب‌هاشون) روی یک
//! کوئری مشترک ساخته میشن و به ترتیب `number` برمیگردن.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::debug;

use super::{
    count_live, delete_row, ensure_exists, fetch_first, fetch_page, insert_translation,
    overwrite_translation, Database, Filter, Listing, Repository,
};
use crate::{
    error::{AppError, Result},
    models::{DeleteScope, Hadith, HadithPayload, Page, PageRequest, Paginator, Sortable},
};

/// فیلدهای قابل مرتب‌سازی `/hadiths`
pub const HADITH_SORTABLE: Sortable = &[
    ("id", "h.id"),
    ("number", "h.number"),
    ("book_id", "h.book_id"),
    ("theme_id", "h.theme_id"),
    ("chapter_id", "h.chapter_id"),
    ("created_at", "h.created_at"),
    ("updated_at", "h.updated_at"),
];

const SELECT: &str = concat!(
    "SELECT h.id, h.book_id, h.theme_id, h.chapter_id, h.number, \
     h.created_at, h.updated_at, h.deleted_at, ",
    translation_columns!()
);

const FROM: &str = "FROM hadith h JOIN translation tr ON tr.id = h.translation_id";

const FROM_BOOK: &str = "FROM hadith h \
    JOIN translation tr ON tr.id = h.translation_id \
    JOIN book b ON b.id = h.book_id AND b.deleted_at IS NULL";

const FROM_THEME_NAME: &str = "FROM hadith h \
    JOIN translation tr ON tr.id = h.translation_id \
    JOIN theme t ON t.id = h.theme_id AND t.deleted_at IS NULL \
    JOIN translation ttr ON ttr.id = t.translation_id";

const FROM_BOOK_THEME_NAME: &str = "FROM hadith h \
    JOIN translation tr ON tr.id = h.translation_id \
    JOIN book b ON b.id = h.book_id AND b.deleted_at IS NULL \
    JOIN theme t ON t.id = h.theme_id AND t.deleted_at IS NULL \
    JOIN translation ttr ON ttr.id = t.translation_id";

/// محدوده یک finder رابطه‌ای؛ فیلدهای ست شده با AND ترکیب میشن
#[derive(Debug, Clone, Default)]
pub struct HadithScope<'a> {
    pub book_slug: Option<&'a str>,
    pub theme_id: Option<i64>,
    pub theme_name: Option<&'a str>,
    pub chapter_id: Option<i64>,
}

impl HadithScope<'_> {
    fn listing(&self) -> Listing {
        let from = match (self.book_slug, self.theme_name) {
            (Some(_), Some(_)) => FROM_BOOK_THEME_NAME,
            (Some(_), None) => FROM_BOOK,
            (None, Some(_)) => FROM_THEME_NAME,
            (None, None) => FROM,
        };

        let mut listing = Listing {
            select: SELECT,
            from,
            alias: "h",
            filters: Vec::new(),
            sortable: HADITH_SORTABLE,
            default_order: "h.number ASC",
        };

        if let Some(slug) = self.book_slug {
            listing = listing.filter(Filter::new("b.slug = ", slug));
        }
        if let Some(theme_id) = self.theme_id {
            listing = listing.filter(Filter::new("h.theme_id = ", theme_id));
        }
        if let Some(name) = self.theme_name {
            listing = listing.filter(
                Filter::new("LOWER(", name).close(") IN (LOWER(ttr.en), LOWER(ttr.idn))"),
            );
        }
        if let Some(chapter_id) = self.chapter_id {
            listing = listing.filter(Filter::new("h.chapter_id = ", chapter_id));
        }

        listing
    }
}

/// Repository برای حدیث‌ها
#[derive(Debug, Clone)]
pub struct HadithRepository {
    db: Database,
    paginator: Paginator,
}

impl HadithRepository {
    #[must_use]
    pub fn new(db: Database, paginator: Paginator) -> Self {
        Self { db, paginator }
    }

    fn listing() -> Listing {
        HadithScope::default().listing().order("h.id ASC")
    }

    /// لیست حدیث‌های یک محدوده به ترتیب شماره
    pub async fn find_scoped(
        &self,
        scope: &HadithScope<'_>,
        request: &PageRequest,
    ) -> Result<Page<Hadith>> {
        fetch_page(self.db.pool(), &self.paginator, &scope.listing(), request).await
    }

    pub async fn find_by_book_slug(&self, slug: &str, request: &PageRequest) -> Result<Page<Hadith>> {
        let scope = HadithScope {
            book_slug: Some(slug),
            ..HadithScope::default()
        };
        self.find_scoped(&scope, request).await
    }

    pub async fn find_by_theme_id(&self, theme_id: i64, request: &PageRequest) -> Result<Page<Hadith>> {
        let scope = HadithScope {
            theme_id: Some(theme_id),
            ..HadithScope::default()
        };
        self.find_scoped(&scope, request).await
    }

    /// با نام theme (انگلیسی یا اندونزیایی، بدون حساسیت به حروف)
    pub async fn find_by_theme_name(&self, name: &str, request: &PageRequest) -> Result<Page<Hadith>> {
        let scope = HadithScope {
            theme_name: Some(name),
            ..HadithScope::default()
        };
        self.find_scoped(&scope, request).await
    }

    pub async fn find_by_book_slug_theme_id(
        &self,
        slug: &str,
        theme_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Hadith>> {
        let scope = HadithScope {
            book_slug: Some(slug),
            theme_id: Some(theme_id),
            ..HadithScope::default()
        };
        self.find_scoped(&scope, request).await
    }

    pub async fn find_by_chapter_id(
        &self,
        chapter_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Hadith>> {
        let scope = HadithScope {
            chapter_id: Some(chapter_id),
            ..HadithScope::default()
        };
        self.find_scoped(&scope, request).await
    }

    pub async fn find_by_book_slug_chapter_id(
        &self,
        slug: &str,
        chapter_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Hadith>> {
        let scope = HadithScope {
            book_slug: Some(slug),
            chapter_id: Some(chapter_id),
            ..HadithScope::default()
        };
        self.find_scoped(&scope, request).await
    }

    pub async fn find_by_theme_id_chapter_id(
        &self,
        theme_id: i64,
        chapter_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Hadith>> {
        let scope = HadithScope {
            theme_id: Some(theme_id),
            chapter_id: Some(chapter_id),
            ..HadithScope::default()
        };
        self.find_scoped(&scope, request).await
    }

    pub async fn find_by_book_slug_theme_id_chapter_id(
        &self,
        slug: &str,
        theme_id: i64,
        chapter_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Hadith>> {
        let scope = HadithScope {
            book_slug: Some(slug),
            theme_id: Some(theme_id),
            chapter_id: Some(chapter_id),
            ..HadithScope::default()
        };
        self.find_scoped(&scope, request).await
    }
}

/// چک کردن parent‌های حدیث (کتاب اجباری، theme و باب اختیاری)
async fn ensure_parents(conn: &mut SqliteConnection, payload: &HadithPayload) -> Result<()> {
    ensure_exists(&mut *conn, "book", payload.book_id).await?;

    if let Some(theme_id) = payload.theme_id {
        ensure_exists(&mut *conn, "theme", theme_id).await?;
    }
    if let Some(chapter_id) = payload.chapter_id {
        ensure_exists(&mut *conn, "chapter", chapter_id).await?;
    }
    Ok(())
}

#[async_trait]
impl Repository for HadithRepository {
    type Entity = Hadith;
    type Payload = HadithPayload;

    async fn save(&self, payload: &HadithPayload) -> Result<Hadith> {
        let mut tx = self.db.begin().await?;

        ensure_parents(&mut *tx, payload).await?;
        let translation_id = insert_translation(&mut *tx, &payload.translation).await?;
        let now = Utc::now();

        let id = sqlx::query(
            r#"
            INSERT INTO hadith (
                book_id, theme_id, chapter_id, number, translation_id,
                created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(payload.book_id)
        .bind(payload.theme_id)
        .bind(payload.chapter_id)
        .bind(payload.number)
        .bind(translation_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;
        debug!(id, book_id = payload.book_id, number = payload.number, "hadith saved");

        self.find_by_id(id).await
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Hadith>> {
        fetch_page(self.db.pool(), &self.paginator, &Self::listing(), request).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Hadith> {
        let listing = Self::listing().filter(Filter::new("h.id = ", id));

        fetch_first(self.db.pool(), &listing)
            .await?
            .ok_or_else(|| AppError::not_found("hadith", id))
    }

    async fn update_by_id(&self, id: i64, payload: &HadithPayload) -> Result<Hadith> {
        self.find_by_id(id).await?;

        let mut tx = self.db.begin().await?;

        ensure_parents(&mut *tx, payload).await?;
        overwrite_translation(&mut *tx, "hadith", id, &payload.translation).await?;

        sqlx::query(
            r#"
            UPDATE hadith
            SET book_id = ?, theme_id = ?, chapter_id = ?, number = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(payload.book_id)
        .bind(payload.theme_id)
        .bind(payload.chapter_id)
        .bind(payload.number)
        .bind(Utc::now())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: i64, scope: DeleteScope) -> Result<()> {
        self.find_by_id(id).await?;
        delete_row(self.db.pool(), "hadith", id, scope).await
    }

    async fn count(&self) -> Result<i64> {
        count_live(self.db.pool(), "hadith").await
    }
}

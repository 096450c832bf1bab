//! Repository موضوع (Theme)

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use super::{
    count_live, delete_row, fetch_all, fetch_first, fetch_page, insert_translation,
    overwrite_translation, Database, Filter, Listing, Repository,
};
use crate::{
    error::{AppError, Result},
    models::{DeleteScope, Page, PageRequest, Paginator, Sortable, Theme, ThemePayload},
};

/// فیلدهای قابل مرتب‌سازی `/themes`
pub const THEME_SORTABLE: Sortable = &[
    ("id", "t.id"),
    ("created_at", "t.created_at"),
    ("updated_at", "t.updated_at"),
];

const SELECT: &str = concat!(
    "SELECT t.id, t.created_at, t.updated_at, t.deleted_at, ",
    translation_columns!()
);

const FROM: &str = "FROM theme t JOIN translation tr ON tr.id = t.translation_id";

// theme‌های وصل شده به کتاب از طریق `book_themes`
const FROM_BOOK: &str = "FROM theme t \
    JOIN translation tr ON tr.id = t.translation_id \
    JOIN book_themes bt ON bt.theme_id = t.id \
    JOIN book b ON b.id = bt.book_id AND b.deleted_at IS NULL";

fn listing() -> Listing {
    Listing {
        select: SELECT,
        from: FROM,
        alias: "t",
        filters: Vec::new(),
        sortable: THEME_SORTABLE,
        default_order: "t.id ASC",
    }
}

/// یک theme غیر حذف‌شده با ترجمه‌اش
pub(crate) async fn load_theme(pool: &SqlitePool, id: i64) -> Result<Option<Theme>> {
    fetch_first(pool, &listing().filter(Filter::new("t.id = ", id))).await
}

/// theme‌های یک کتاب در جدول `book_themes`
pub(crate) async fn load_book_themes(pool: &SqlitePool, book_id: i64) -> Result<Vec<Theme>> {
    let listing = Listing {
        from: FROM_BOOK,
        ..listing()
    }
    .filter(Filter::new("bt.book_id = ", book_id));

    fetch_all(pool, &listing).await
}

/// Repository برای theme‌ها
#[derive(Debug, Clone)]
pub struct ThemeRepository {
    db: Database,
    paginator: Paginator,
}

impl ThemeRepository {
    #[must_use]
    pub fn new(db: Database, paginator: Paginator) -> Self {
        Self { db, paginator }
    }

    /// theme‌های وصل شده به کتاب با این slug
    pub async fn find_by_book_slug(&self, slug: &str, request: &PageRequest) -> Result<Page<Theme>> {
        let listing = Listing {
            from: FROM_BOOK,
            ..listing()
        }
        .filter(Filter::new("b.slug = ", slug));

        fetch_page(self.db.pool(), &self.paginator, &listing, request).await
    }
}

#[async_trait]
impl Repository for ThemeRepository {
    type Entity = Theme;
    type Payload = ThemePayload;

    async fn save(&self, payload: &ThemePayload) -> Result<Theme> {
        let mut tx = self.db.begin().await?;

        let translation_id = insert_translation(&mut *tx, &payload.translation).await?;
        let now = Utc::now();

        let id = sqlx::query(
            "INSERT INTO theme (translation_id, created_at, updated_at) VALUES (?, ?, ?)",
        )
        .bind(translation_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;
        debug!(id, "theme saved");

        self.find_by_id(id).await
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Theme>> {
        fetch_page(self.db.pool(), &self.paginator, &listing(), request).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Theme> {
        load_theme(self.db.pool(), id)
            .await?
            .ok_or_else(|| AppError::not_found("theme", id))
    }

    async fn update_by_id(&self, id: i64, payload: &ThemePayload) -> Result<Theme> {
        self.find_by_id(id).await?;

        let mut tx = self.db.begin().await?;

        overwrite_translation(&mut *tx, "theme", id, &payload.translation).await?;

        sqlx::query("UPDATE theme SET updated_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: i64, scope: DeleteScope) -> Result<()> {
        self.find_by_id(id).await?;
        delete_row(self.db.pool(), "theme", id, scope).await
    }

    async fn count(&self) -> Result<i64> {
        count_live(self.db.pool(), "theme").await
    }
}

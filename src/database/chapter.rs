//! Repository باب (Chapter)

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use super::{
    count_live, delete_row, ensure_exists, fetch_first, fetch_page, insert_translation,
    overwrite_translation, Database, Filter, Listing, Repository,
};
use crate::{
    error::{AppError, Result},
    models::{Chapter, ChapterPayload, DeleteScope, Page, PageRequest, Paginator, Sortable},
};

/// فیلدهای قابل مرتب‌سازی `/chapters`
pub const CHAPTER_SORTABLE: Sortable = &[
    ("id", "c.id"),
    ("theme_id", "c.theme_id"),
    ("created_at", "c.created_at"),
    ("updated_at", "c.updated_at"),
];

const SELECT: &str = concat!(
    "SELECT c.id, c.theme_id, c.created_at, c.updated_at, c.deleted_at, ",
    translation_columns!()
);

const FROM: &str = "FROM chapter c JOIN translation tr ON tr.id = c.translation_id";

/// Repository برای باب‌ها
#[derive(Debug, Clone)]
pub struct ChapterRepository {
    db: Database,
    paginator: Paginator,
}

impl ChapterRepository {
    #[must_use]
    pub fn new(db: Database, paginator: Paginator) -> Self {
        Self { db, paginator }
    }

    fn listing() -> Listing {
        Listing {
            select: SELECT,
            from: FROM,
            alias: "c",
            filters: Vec::new(),
            sortable: CHAPTER_SORTABLE,
            default_order: "c.id ASC",
        }
    }

    /// باب‌های یک theme
    pub async fn find_by_theme_id(&self, theme_id: i64, request: &PageRequest) -> Result<Page<Chapter>> {
        let listing = Self::listing().filter(Filter::new("c.theme_id = ", theme_id));

        fetch_page(self.db.pool(), &self.paginator, &listing, request).await
    }

    /// باب‌های یک theme که حداقل یک حدیث از این کتاب دارن
    pub async fn find_by_book_slug_theme_id(
        &self,
        slug: &str,
        theme_id: i64,
        request: &PageRequest,
    ) -> Result<Page<Chapter>> {
        let listing = Self::listing()
            .filter(Filter::new("c.theme_id = ", theme_id))
            .filter(
                Filter::new(
                    "EXISTS (SELECT 1 FROM hadith h JOIN book b ON b.id = h.book_id \
                     WHERE h.chapter_id = c.id AND h.deleted_at IS NULL \
                     AND b.deleted_at IS NULL AND b.slug = ",
                    slug,
                )
                .close(")"),
            );

        fetch_page(self.db.pool(), &self.paginator, &listing, request).await
    }
}

#[async_trait]
impl Repository for ChapterRepository {
    type Entity = Chapter;
    type Payload = ChapterPayload;

    async fn save(&self, payload: &ChapterPayload) -> Result<Chapter> {
        let mut tx = self.db.begin().await?;

        ensure_exists(&mut *tx, "theme", payload.theme_id).await?;
        let translation_id = insert_translation(&mut *tx, &payload.translation).await?;
        let now = Utc::now();

        let id = sqlx::query(
            r#"
            INSERT INTO chapter (theme_id, translation_id, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(payload.theme_id)
        .bind(translation_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;
        debug!(id, theme_id = payload.theme_id, "chapter saved");

        self.find_by_id(id).await
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Chapter>> {
        fetch_page(self.db.pool(), &self.paginator, &Self::listing(), request).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Chapter> {
        let listing = Self::listing().filter(Filter::new("c.id = ", id));

        fetch_first(self.db.pool(), &listing)
            .await?
            .ok_or_else(|| AppError::not_found("chapter", id))
    }

    async fn update_by_id(&self, id: i64, payload: &ChapterPayload) -> Result<Chapter> {
        self.find_by_id(id).await?;

        let mut tx = self.db.begin().await?;

        ensure_exists(&mut *tx, "theme", payload.theme_id).await?;
        overwrite_translation(&mut *tx, "chapter", id, &payload.translation).await?;

        sqlx::query("UPDATE chapter SET theme_id = ?, updated_at = ? WHERE id = ?")
            .bind(payload.theme_id)
            .bind(Utc::now())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: i64, scope: DeleteScope) -> Result<()> {
        self.find_by_id(id).await?;
        delete_row(self.db.pool(), "chapter", id, scope).await
    }

    async fn count(&self) -> Result<i64> {
        count_live(self.db.pool(), "chapter").await
    }
}

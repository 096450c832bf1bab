//! Repository سوره

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use super::{
    count_live, delete_row, fetch_first, fetch_page, insert_translation,
    overwrite_translation, Database, Filter, Listing, Repository,
};
use crate::{
    error::{AppError, Result},
    models::{DeleteScope, Page, PageRequest, Paginator, Sortable, Surah, SurahPayload},
};

/// فیلدهای قابل مرتب‌سازی `/surah`
pub const SURAH_SORTABLE: Sortable = &[
    ("id", "s.id"),
    ("number", "s.number"),
    ("name", "s.name"),
    ("created_at", "s.created_at"),
    ("updated_at", "s.updated_at"),
];

const SELECT: &str = concat!(
    "SELECT s.id, s.number, s.name, s.created_at, s.updated_at, s.deleted_at, ",
    translation_columns!()
);

const FROM: &str = "FROM surah s JOIN translation tr ON tr.id = s.translation_id";

/// Repository برای سوره‌ها
#[derive(Debug, Clone)]
pub struct SurahRepository {
    db: Database,
    paginator: Paginator,
}

impl SurahRepository {
    #[must_use]
    pub fn new(db: Database, paginator: Paginator) -> Self {
        Self { db, paginator }
    }

    fn listing() -> Listing {
        Listing {
            select: SELECT,
            from: FROM,
            alias: "s",
            filters: Vec::new(),
            sortable: SURAH_SORTABLE,
            default_order: "s.id ASC",
        }
    }

    /// پیدا کردن با شماره سوره
    pub async fn find_by_number(&self, number: i64) -> Result<Surah> {
        let listing = Self::listing().filter(Filter::new("s.number = ", number));

        fetch_first(self.db.pool(), &listing)
            .await?
            .ok_or_else(|| AppError::not_found("surah number", number))
    }

    /// پیدا کردن با نام (بدون حساسیت به حروف بزرگ و کوچک)
    pub async fn find_by_name(&self, name: &str) -> Result<Surah> {
        let listing = Self::listing()
            .filter(Filter::new("LOWER(s.name) = LOWER(", name).close(")"));

        fetch_first(self.db.pool(), &listing)
            .await?
            .ok_or_else(|| AppError::not_found("surah", name))
    }
}

#[async_trait]
impl Repository for SurahRepository {
    type Entity = Surah;
    type Payload = SurahPayload;

    async fn save(&self, payload: &SurahPayload) -> Result<Surah> {
        let mut tx = self.db.begin().await?;

        let translation_id = insert_translation(&mut *tx, &payload.translation).await?;
        let now = Utc::now();

        let id = sqlx::query(
            r#"
            INSERT INTO surah (number, name, translation_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(payload.number)
        .bind(&payload.name)
        .bind(translation_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;
        debug!(id, "surah saved");

        self.find_by_id(id).await
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Surah>> {
        fetch_page(self.db.pool(), &self.paginator, &Self::listing(), request).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Surah> {
        let listing = Self::listing().filter(Filter::new("s.id = ", id));

        fetch_first(self.db.pool(), &listing)
            .await?
            .ok_or_else(|| AppError::not_found("surah", id))
    }

    async fn update_by_id(&self, id: i64, payload: &SurahPayload) -> Result<Surah> {
        self.find_by_id(id).await?;

        let mut tx = self.db.begin().await?;

        overwrite_translation(&mut *tx, "surah", id, &payload.translation).await?;

        sqlx::query("UPDATE surah SET number = ?, name = ?, updated_at = ? WHERE id = ?")
            .bind(payload.number)
            .bind(&payload.name)
            .bind(Utc::now())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: i64, scope: DeleteScope) -> Result<()> {
        self.find_by_id(id).await?;
        delete_row(self.db.pool(), "surah", id, scope).await
    }

    async fn count(&self) -> Result<i64> {
        count_live(self.db.pool(), "surah").await
    }
}

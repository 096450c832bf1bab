//! Repository جزء

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use super::{
    count_live, delete_row, fetch_first, fetch_page, insert_translation, overwrite_translation,
    Database, Filter, Listing, Repository,
};
use crate::{
    error::{AppError, Result},
    models::{DeleteScope, Juz, JuzPayload, Page, PageRequest, Paginator, Sortable},
};

/// فیلدهای قابل مرتب‌سازی `/juz`
pub const JUZ_SORTABLE: Sortable = &[
    ("id", "j.id"),
    ("number", "j.number"),
    ("start_surah_number", "j.start_surah_number"),
    ("end_surah_number", "j.end_surah_number"),
    ("created_at", "j.created_at"),
    ("updated_at", "j.updated_at"),
];

const SELECT: &str = concat!(
    "SELECT j.id, j.number, j.start_surah_number, j.start_ayah_number, \
     j.end_surah_number, j.end_ayah_number, j.created_at, j.updated_at, j.deleted_at, ",
    translation_columns!()
);

const FROM: &str = "FROM juz j JOIN translation tr ON tr.id = j.translation_id";

/// Repository برای جزء‌ها
#[derive(Debug, Clone)]
pub struct JuzRepository {
    db: Database,
    paginator: Paginator,
}

impl JuzRepository {
    #[must_use]
    pub fn new(db: Database, paginator: Paginator) -> Self {
        Self { db, paginator }
    }

    fn listing() -> Listing {
        Listing {
            select: SELECT,
            from: FROM,
            alias: "j",
            filters: Vec::new(),
            sortable: JUZ_SORTABLE,
            default_order: "j.id ASC",
        }
    }

    /// جزء‌هایی که سوره با این نام داخلشون هست، به ترتیب شماره جزء
    pub async fn find_by_surah_name(&self, name: &str, request: &PageRequest) -> Result<Page<Juz>> {
        // هر جزء حداکثر یک بار، حتی با چند سوره هم‌نام
        let listing = Self::listing()
            .filter(
                Filter::new(
                    "EXISTS (SELECT 1 FROM surah s WHERE s.deleted_at IS NULL \
                     AND s.number BETWEEN j.start_surah_number AND j.end_surah_number \
                     AND LOWER(s.name) = LOWER(",
                    name,
                )
                .close("))"),
            )
            .order("j.number ASC");

        fetch_page(self.db.pool(), &self.paginator, &listing, request).await
    }
}

#[async_trait]
impl Repository for JuzRepository {
    type Entity = Juz;
    type Payload = JuzPayload;

    async fn save(&self, payload: &JuzPayload) -> Result<Juz> {
        let mut tx = self.db.begin().await?;

        let translation_id = insert_translation(&mut *tx, &payload.translation).await?;
        let now = Utc::now();

        let id = sqlx::query(
            r#"
            INSERT INTO juz (
                number, start_surah_number, start_ayah_number,
                end_surah_number, end_ayah_number, translation_id,
                created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(payload.number)
        .bind(payload.start_surah_number)
        .bind(payload.start_ayah_number)
        .bind(payload.end_surah_number)
        .bind(payload.end_ayah_number)
        .bind(translation_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;
        debug!(id, number = payload.number, "juz saved");

        self.find_by_id(id).await
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Juz>> {
        fetch_page(self.db.pool(), &self.paginator, &Self::listing(), request).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Juz> {
        let listing = Self::listing().filter(Filter::new("j.id = ", id));

        fetch_first(self.db.pool(), &listing)
            .await?
            .ok_or_else(|| AppError::not_found("juz", id))
    }

    async fn update_by_id(&self, id: i64, payload: &JuzPayload) -> Result<Juz> {
        self.find_by_id(id).await?;

        let mut tx = self.db.begin().await?;

        overwrite_translation(&mut *tx, "juz", id, &payload.translation).await?;

        sqlx::query(
            r#"
            UPDATE juz
            SET number = ?, start_surah_number = ?, start_ayah_number = ?,
                end_surah_number = ?, end_ayah_number = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(payload.number)
        .bind(payload.start_surah_number)
        .bind(payload.start_ayah_number)
        .bind(payload.end_surah_number)
        .bind(payload.end_ayah_number)
        .bind(Utc::now())
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: i64, scope: DeleteScope) -> Result<()> {
        self.find_by_id(id).await?;
        delete_row(self.db.pool(), "juz", id, scope).await
    }

    async fn count(&self) -> Result<i64> {
        count_live(self.db.pool(), "juz").await
    }
}

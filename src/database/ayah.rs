//! Repository آیه

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use super::{
    count_live, delete_row, ensure_exists, fetch_first, fetch_page, insert_translation,
    overwrite_translation, Database, Filter, Listing, Repository,
};
use crate::{
    error::{AppError, Result},
    models::{Ayah, AyahPayload, DeleteScope, Page, PageRequest, Paginator, Sortable},
};

/// فیلدهای قابل مرتب‌سازی `/ayah`
pub const AYAH_SORTABLE: Sortable = &[
    ("id", "a.id"),
    ("number", "a.number"),
    ("surah_id", "a.surah_id"),
    ("surah_number", "s.number"),
    ("created_at", "a.created_at"),
    ("updated_at", "a.updated_at"),
];

const SELECT: &str = concat!(
    "SELECT a.id, a.surah_id, s.number AS surah_number, a.number, \
     a.created_at, a.updated_at, a.deleted_at, ",
    translation_columns!()
);

const FROM: &str = "FROM ayah a \
    JOIN surah s ON s.id = a.surah_id \
    JOIN translation tr ON tr.id = a.translation_id";

/// Repository برای آیه‌ها
#[derive(Debug, Clone)]
pub struct AyahRepository {
    db: Database,
    paginator: Paginator,
}

impl AyahRepository {
    #[must_use]
    pub fn new(db: Database, paginator: Paginator) -> Self {
        Self { db, paginator }
    }

    fn listing() -> Listing {
        Listing {
            select: SELECT,
            from: FROM,
            alias: "a",
            filters: Vec::new(),
            sortable: AYAH_SORTABLE,
            default_order: "a.id ASC",
        }
    }

    /// اولین آیه با این شماره (در هر سوره‌ای)
    pub async fn find_by_number(&self, number: i64) -> Result<Ayah> {
        let listing = Self::listing()
            .filter(Filter::new("a.number = ", number))
            .order("s.number ASC, a.id ASC");

        fetch_first(self.db.pool(), &listing)
            .await?
            .ok_or_else(|| AppError::not_found("ayah number", number))
    }

    /// آیه‌های یک سوره به ترتیب شماره آیه
    pub async fn find_by_surah_number(
        &self,
        surah_number: i64,
        request: &PageRequest,
    ) -> Result<Page<Ayah>> {
        let listing = Self::listing()
            .filter(Filter::new("s.number = ", surah_number))
            .filter(Filter::raw("s.deleted_at IS NULL"))
            .order("a.number ASC");

        fetch_page(self.db.pool(), &self.paginator, &listing, request).await
    }
}

#[async_trait]
impl Repository for AyahRepository {
    type Entity = Ayah;
    type Payload = AyahPayload;

    async fn save(&self, payload: &AyahPayload) -> Result<Ayah> {
        let mut tx = self.db.begin().await?;

        ensure_exists(&mut *tx, "surah", payload.surah_id).await?;
        let translation_id = insert_translation(&mut *tx, &payload.translation).await?;
        let now = Utc::now();

        let id = sqlx::query(
            r#"
            INSERT INTO ayah (surah_id, number, translation_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(payload.surah_id)
        .bind(payload.number)
        .bind(translation_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;
        debug!(id, surah_id = payload.surah_id, "ayah saved");

        self.find_by_id(id).await
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Ayah>> {
        fetch_page(self.db.pool(), &self.paginator, &Self::listing(), request).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Ayah> {
        let listing = Self::listing().filter(Filter::new("a.id = ", id));

        fetch_first(self.db.pool(), &listing)
            .await?
            .ok_or_else(|| AppError::not_found("ayah", id))
    }

    async fn update_by_id(&self, id: i64, payload: &AyahPayload) -> Result<Ayah> {
        self.find_by_id(id).await?;

        let mut tx = self.db.begin().await?;

        ensure_exists(&mut *tx, "surah", payload.surah_id).await?;
        overwrite_translation(&mut *tx, "ayah", id, &payload.translation).await?;

        sqlx::query("UPDATE ayah SET surah_id = ?, number = ?, updated_at = ? WHERE id = ?")
            .bind(payload.surah_id)
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
        delete_row(self.db.pool(), "ayah", id, scope).await
    }

    async fn count(&self) -> Result<i64> {
        count_live(self.db.pool(), "ayah").await
    }
}

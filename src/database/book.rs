//! Repository کتاب حدیث
//!
//! علاوه بر ستون‌های خود کتاب، media‌ها همیشه preload میشن.
//! - `find_all`: تعداد حدیث هر کتاب با یک کوئری جدا برای هر آیتم
//! - `find_by_id`: theme‌ها از جدول `book_themes`
//! - `find_by_slug`: theme‌ها از روی حدیث‌های کتاب، به ترتیب اولین حدیث هر theme

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use super::{
    count_live, delete_row, ensure_exists, fetch_first, fetch_page, insert_translation,
    load_book_themes, load_theme, overwrite_translation, Database, Filter, Listing, Repository,
};
use crate::{
    error::{AppError, Result},
    models::{
        Book, BookPayload, DeleteScope, Media, MediaPayload, Page, PageRequest, Paginator, Sortable,
        Theme,
    },
};

/// فیلدهای قابل مرتب‌سازی `/books`
pub const BOOK_SORTABLE: Sortable = &[
    ("id", "b.id"),
    ("slug", "b.slug"),
    ("created_at", "b.created_at"),
    ("updated_at", "b.updated_at"),
];

const SELECT: &str = concat!(
    "SELECT b.id, b.slug, b.created_at, b.updated_at, b.deleted_at, ",
    translation_columns!()
);

const FROM: &str = "FROM book b JOIN translation tr ON tr.id = b.translation_id";

/// Repository برای کتاب‌ها
#[derive(Debug, Clone)]
pub struct BookRepository {
    db: Database,
    paginator: Paginator,
}

impl BookRepository {
    #[must_use]
    pub fn new(db: Database, paginator: Paginator) -> Self {
        Self { db, paginator }
    }

    fn listing() -> Listing {
        Listing {
            select: SELECT,
            from: FROM,
            alias: "b",
            filters: Vec::new(),
            sortable: BOOK_SORTABLE,
            default_order: "b.id ASC",
        }
    }

    /// پیدا کردن با slug
    ///
    /// theme‌ها از حدیث‌های غیر حذف‌شده کتاب ساخته میشن؛ هر theme یک بار،
    /// به ترتیب کمترین شماره حدیث داخلش. کوئری‌ها بدون تراکنش اجرا میشن.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Book> {
        let pool = self.db.pool();
        let listing = Self::listing().filter(Filter::new("b.slug = ", slug));

        let mut book: Book = fetch_first(pool, &listing)
            .await?
            .ok_or_else(|| AppError::not_found("book", slug))?;

        book.media = load_media(pool, book.id).await?;
        book.themes = themes_in_hadith_order(pool, book.id).await?;

        Ok(book)
    }

    async fn find_row(&self, id: i64) -> Result<Book> {
        let listing = Self::listing().filter(Filter::new("b.id = ", id));

        fetch_first(self.db.pool(), &listing)
            .await?
            .ok_or_else(|| AppError::not_found("book", id))
    }
}

#[async_trait]
impl Repository for BookRepository {
    type Entity = Book;
    type Payload = BookPayload;

    async fn save(&self, payload: &BookPayload) -> Result<Book> {
        let mut tx = self.db.begin().await?;

        let translation_id = insert_translation(&mut *tx, &payload.translation).await?;
        let now = Utc::now();

        let id = sqlx::query(
            r#"
            INSERT INTO book (slug, translation_id, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&payload.slug)
        .bind(translation_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        insert_media(&mut *tx, id, &payload.media).await?;
        link_themes(&mut *tx, id, &payload.theme_ids).await?;

        tx.commit().await?;
        debug!(id, slug = %payload.slug, "book saved");

        self.find_by_id(id).await
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Book>> {
        let pool = self.db.pool();
        let mut page: Page<Book> =
            fetch_page(pool, &self.paginator, &Self::listing(), request).await?;

        for book in &mut page.items {
            book.media = load_media(pool, book.id).await?;
            book.count = Some(count_hadiths(pool, book.id).await?);
        }

        Ok(page)
    }

    async fn find_by_id(&self, id: i64) -> Result<Book> {
        let pool = self.db.pool();
        let mut book = self.find_row(id).await?;

        book.media = load_media(pool, id).await?;
        book.themes = load_book_themes(pool, id).await?;

        Ok(book)
    }

    async fn update_by_id(&self, id: i64, payload: &BookPayload) -> Result<Book> {
        self.find_row(id).await?;

        let mut tx = self.db.begin().await?;

        overwrite_translation(&mut *tx, "book", id, &payload.translation).await?;

        sqlx::query("UPDATE book SET slug = ?, updated_at = ? WHERE id = ?")
            .bind(&payload.slug)
            .bind(Utc::now())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM media WHERE book_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        insert_media(&mut *tx, id, &payload.media).await?;

        sqlx::query("DELETE FROM book_themes WHERE book_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        link_themes(&mut *tx, id, &payload.theme_ids).await?;

        tx.commit().await?;

        self.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: i64, scope: DeleteScope) -> Result<()> {
        self.find_row(id).await?;
        delete_row(self.db.pool(), "book", id, scope).await
    }

    async fn count(&self) -> Result<i64> {
        count_live(self.db.pool(), "book").await
    }
}

// =====================================
// Preloads
// =====================================
async fn load_media(pool: &SqlitePool, book_id: i64) -> Result<Vec<Media>> {
    let media = sqlx::query_as::<_, Media>(
        "SELECT id, book_id, name, url, kind FROM media WHERE book_id = ? ORDER BY id",
    )
    .bind(book_id)
    .fetch_all(pool)
    .await?;

    Ok(media)
}

async fn count_hadiths(pool: &SqlitePool, book_id: i64) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM hadith WHERE book_id = ? AND deleted_at IS NULL",
    )
    .bind(book_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// theme‌های متمایز حدیث‌های کتاب، به ترتیب اولین حدیث
///
/// theme‌ای که در این فاصله حذف شده باشه رد میشه.
async fn themes_in_hadith_order(pool: &SqlitePool, book_id: i64) -> Result<Vec<Theme>> {
    let theme_ids = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT theme_id
        FROM hadith
        WHERE book_id = ? AND theme_id IS NOT NULL AND deleted_at IS NULL
        GROUP BY theme_id
        ORDER BY MIN(number), theme_id
        "#,
    )
    .bind(book_id)
    .fetch_all(pool)
    .await?;

    let mut themes = Vec::with_capacity(theme_ids.len());
    for theme_id in theme_ids {
        if let Some(theme) = load_theme(pool, theme_id).await? {
            themes.push(theme);
        }
    }

    Ok(themes)
}

// =====================================
// Owned rows
// =====================================
async fn insert_media(conn: &mut SqliteConnection, book_id: i64, media: &[MediaPayload]) -> Result<()> {
    for item in media {
        sqlx::query("INSERT INTO media (book_id, name, url, kind) VALUES (?, ?, ?, ?)")
            .bind(book_id)
            .bind(&item.name)
            .bind(&item.url)
            .bind(&item.kind)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

async fn link_themes(conn: &mut SqliteConnection, book_id: i64, theme_ids: &[i64]) -> Result<()> {
    for &theme_id in theme_ids {
        ensure_exists(&mut *conn, "theme", theme_id).await?;

        sqlx::query("INSERT OR IGNORE INTO book_themes (book_id, theme_id) VALUES (?, ?)")
            .bind(book_id)
            .bind(theme_id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

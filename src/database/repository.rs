//! # Repository Pattern
//!
//! قرارداد مشترک همه repository‌ها و helper‌های SQL که بینشون share میشه.
//!
//! هر entity (آیه، سوره، جزء، کتاب، theme، باب، حدیث) یک بار این trait رو
//! پیاده‌سازی میکنه؛ dispatch استاتیک هست و خبری از `dyn` نیست.
//!
//! ## قرارداد
//! - `save`: insert، نقض constraint -> `Persistence`
//! - `find_all`: لیست صفحه‌بندی شده
//! - `find_by_id`: ردیف غیر حذف‌شده یا `NotFound`
//! - `update_by_id`: اول `find_by_id`، بعد بازنویسی همه ستون‌ها
//! - `delete_by_id`: اول `find_by_id`، بعد soft یا hard delete
//! - `count`: تعداد ردیف‌های غیر حذف‌شده

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use crate::{
    error::{AppError, Result},
    models::{parse_sort, DeleteScope, Page, PageRequest, Paginator, Sortable, TranslationPayload},
};

// =====================================
// Base Repository Trait
// =====================================
/// Trait پایه برای همه Repository‌ها
#[async_trait]
pub trait Repository: Send + Sync {
    /// نوع Entity که این repository برمیگردونه
    type Entity: Send + Sync;

    /// بدنه POST/PUT
    type Payload: Send + Sync;

    /// ذخیره کردن (insert)
    async fn save(&self, payload: &Self::Payload) -> Result<Self::Entity>;

    /// لیست صفحه‌بندی شده
    async fn find_all(&self, request: &PageRequest) -> Result<Page<Self::Entity>>;

    /// پیدا کردن با ID
    async fn find_by_id(&self, id: i64) -> Result<Self::Entity>;

    /// بازنویسی کامل رکورد
    async fn update_by_id(&self, id: i64, payload: &Self::Payload) -> Result<Self::Entity>;

    /// حذف soft یا hard
    async fn delete_by_id(&self, id: i64, scope: DeleteScope) -> Result<()>;

    /// شمارش ردیف‌های غیر حذف‌شده
    async fn count(&self) -> Result<i64>;
}

// =====================================
// Query Filters
// =====================================
/// مقدار bind شده در یک فیلتر
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Bind {
    Int(i64),
    Text(String),
}

impl From<i64> for Bind {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Bind {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// یک شرط `AND` در WHERE: `clause ? close` (یا فقط `clause`)
///
/// `clause` و `close` همیشه رشته‌های ثابت داخل کد هستن؛ ورودی کاربر فقط
/// از طریق bind وارد کوئری میشه.
#[derive(Debug, Clone)]
pub(crate) struct Filter {
    clause: &'static str,
    value: Option<Bind>,
    close: &'static str,
}

impl Filter {
    /// شرط ساده، مثلا `Filter::new("b.slug = ", slug)`
    pub(crate) fn new(clause: &'static str, value: impl Into<Bind>) -> Self {
        Self {
            clause,
            value: Some(value.into()),
            close: "",
        }
    }

    /// شرط بدون مقدار، مثلا `Filter::raw("s.deleted_at IS NULL")`
    pub(crate) fn raw(clause: &'static str) -> Self {
        Self {
            clause,
            value: None,
            close: "",
        }
    }

    /// متن بعد از مقدار bind شده (مثلا پرانتز بسته)
    pub(crate) fn close(mut self, close: &'static str) -> Self {
        self.close = close;
        self
    }
}

/// تعریف یک کوئری لیست: ستون‌ها، FROM/JOIN‌ها و فیلترها
#[derive(Debug, Clone)]
pub(crate) struct Listing {
    /// `SELECT ...` بدون FROM
    pub select: &'static str,

    /// `FROM ... JOIN ...`
    pub from: &'static str,

    /// alias جدول اصلی؛ شرط `deleted_at IS NULL` روی این اعمال میشه
    pub alias: &'static str,

    pub filters: Vec<Filter>,

    pub sortable: Sortable,

    /// ترتیب وقتی `sort` خالیه
    pub default_order: &'static str,
}

impl Listing {
    pub(crate) fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub(crate) fn order(mut self, order: &'static str) -> Self {
        self.default_order = order;
        self
    }
}

fn push_where(query: &mut QueryBuilder<'_, Sqlite>, alias: &str, filters: &[Filter]) {
    query.push(format!(" WHERE {}.deleted_at IS NULL", alias));

    for filter in filters {
        query.push(" AND ").push(filter.clause);
        match &filter.value {
            Some(Bind::Int(value)) => {
                query.push_bind(*value);
            }
            Some(Bind::Text(value)) => {
                query.push_bind(value.clone());
            }
            None => {}
        }
        query.push(filter.close);
    }
}

// =====================================
// Read Helpers
// =====================================
/// اجرای کوئری لیست با صفحه‌بندی
///
/// دو کوئری: `COUNT(*)` برای تعداد کل و بعد خود صفحه با `LIMIT/OFFSET`.
/// بعد از ترتیب درخواستی، `id` هم به ORDER BY اضافه میشه تا مرز صفحه‌ها
/// ثابت بمونه.
pub(crate) async fn fetch_page<T>(
    pool: &SqlitePool,
    paginator: &Paginator,
    listing: &Listing,
    request: &PageRequest,
) -> Result<Page<T>>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let window = paginator.window(request);
    let sort = parse_sort(request.sort.as_deref(), listing.sortable)?;

    let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) ");
    count.push(listing.from);
    push_where(&mut count, listing.alias, &listing.filters);
    let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

    let mut query = QueryBuilder::<Sqlite>::new(listing.select);
    query.push(" ").push(listing.from);
    push_where(&mut query, listing.alias, &listing.filters);

    query.push(" ORDER BY ");
    if sort.is_empty() {
        query.push(listing.default_order);
    } else {
        let mut order = query.separated(", ");
        for (column, direction) in &sort {
            order.push(format!("{} {}", column, direction.as_sql()));
        }
    }
    query.push(format!(", {}.id ASC", listing.alias));

    query
        .push(" LIMIT ")
        .push_bind(window.limit())
        .push(" OFFSET ")
        .push_bind(window.offset());

    let items = query.build_query_as::<T>().fetch_all(pool).await?;

    Ok(Page::new(items, window, total))
}

/// اولین ردیف غیر حذف‌شده که با فیلترها match میشه
pub(crate) async fn fetch_first<T>(pool: &SqlitePool, listing: &Listing) -> Result<Option<T>>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let mut query = QueryBuilder::<Sqlite>::new(listing.select);
    query.push(" ").push(listing.from);
    push_where(&mut query, listing.alias, &listing.filters);
    query
        .push(" ORDER BY ")
        .push(listing.default_order)
        .push(" LIMIT 1");

    Ok(query.build_query_as::<T>().fetch_optional(pool).await?)
}

/// همه ردیف‌های match شده بدون صفحه‌بندی (برای preload)
pub(crate) async fn fetch_all<T>(pool: &SqlitePool, listing: &Listing) -> Result<Vec<T>>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let mut query = QueryBuilder::<Sqlite>::new(listing.select);
    query.push(" ").push(listing.from);
    push_where(&mut query, listing.alias, &listing.filters);
    query.push(" ORDER BY ").push(listing.default_order);

    Ok(query.build_query_as::<T>().fetch_all(pool).await?)
}

/// تعداد ردیف‌های غیر حذف‌شده یک جدول
pub(crate) async fn count_live(pool: &SqlitePool, table: &'static str) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {} WHERE deleted_at IS NULL", table);
    let count = sqlx::query_scalar::<_, i64>(&sql).fetch_one(pool).await?;
    Ok(count)
}

// =====================================
// Write Helpers
// =====================================
/// چک کردن اینکه parent وجود داره و حذف نشده
///
/// # Errors
/// `Persistence` اگه ردیف نباشه یا soft-delete شده باشه
pub(crate) async fn ensure_exists(
    conn: &mut SqliteConnection,
    table: &'static str,
    id: i64,
) -> Result<()> {
    let sql = format!("SELECT COUNT(*) FROM {} WHERE id = ? AND deleted_at IS NULL", table);
    let count = sqlx::query_scalar::<_, i64>(&sql)
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;

    if count == 0 {
        return Err(AppError::Persistence(format!(
            "{} {} does not exist",
            table, id
        )));
    }
    Ok(())
}

/// ساخت ردیف ترجمه و برگردوندن id‌اش
pub(crate) async fn insert_translation(
    conn: &mut SqliteConnection,
    translation: &TranslationPayload,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO translation (ar, en, idn, latin_en, latin_idn)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&translation.ar)
    .bind(&translation.en)
    .bind(&translation.idn)
    .bind(&translation.latin_en)
    .bind(&translation.latin_idn)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// بازنویسی ترجمه متعلق به یک ردیف از `table`
pub(crate) async fn overwrite_translation(
    conn: &mut SqliteConnection,
    table: &'static str,
    id: i64,
    translation: &TranslationPayload,
) -> Result<()> {
    let sql = format!(
        r#"
        UPDATE translation
        SET ar = ?, en = ?, idn = ?, latin_en = ?, latin_idn = ?
        WHERE id = (SELECT translation_id FROM {} WHERE id = ?)
        "#,
        table
    );

    sqlx::query(&sql)
        .bind(&translation.ar)
        .bind(&translation.en)
        .bind(&translation.idn)
        .bind(&translation.latin_en)
        .bind(&translation.latin_idn)
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

/// حذف یک ردیف: soft (ست کردن `deleted_at`) یا hard (DELETE واقعی)
///
/// وجود ردیف باید قبلا با `find_by_id` چک شده باشه.
pub(crate) async fn delete_row(
    pool: &SqlitePool,
    table: &'static str,
    id: i64,
    scope: DeleteScope,
) -> Result<()> {
    if scope.is_hard() {
        let sql = format!("DELETE FROM {} WHERE id = ?", table);
        sqlx::query(&sql).bind(id).execute(pool).await?;
    } else {
        let sql = format!("UPDATE {} SET deleted_at = ? WHERE id = ?", table);
        sqlx::query(&sql)
            .bind(Utc::now())
            .bind(id)
            .execute(pool)
            .await?;
    }
    Ok(())
}

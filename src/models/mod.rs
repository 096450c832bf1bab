//! # ماژول مدل‌ها (Domain Models)
//!
//! Entity‌ها (چیزی که از دیتابیس خونده میشه)، payload‌ها (چیزی که از
//! API میاد) و قرارداد صفحه‌بندی مشترک بین همه لیست‌ها.
//!
//! ## تفاوت انواع مدل:
//! - **Entity**: `Book`, `Hadith`, ... با `id` و timestamp‌های سرور
//! - **Payload**: `BookPayload`, ... بدنه POST/PUT با اعتبارسنجی
//! - **Page**: پاسخ صفحه‌بندی شده لیست‌ها

mod translation;
mod ayah;
mod surah;
mod juz;
mod book;
mod theme;
mod chapter;
mod hadith;
mod dto;

pub use translation::*;
pub use ayah::*;
pub use surah::*;
pub use juz::*;
pub use book::*;
pub use theme::*;
pub use chapter::*;
pub use hadith::*;
pub use dto::*;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, Result};

// =====================================
// Delete Scope
// =====================================
/// نوع حذف
///
/// حذف پیش‌فرض soft هست (`deleted_at` ست میشه)؛ فقط مقدار `"hard"`
/// در مسیر باعث حذف فیزیکی ردیف میشه.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteScope {
    #[default]
    Soft,
    Hard,
}

impl DeleteScope {
    /// تبدیل پارامتر `:scoped` مسیر
    #[must_use]
    pub fn from_path(scoped: Option<&str>) -> Self {
        match scoped {
            Some("hard") => Self::Hard,
            _ => Self::Soft,
        }
    }

    #[must_use]
    pub fn is_hard(&self) -> bool {
        matches!(self, Self::Hard)
    }
}

// =====================================
// Pagination
// =====================================
/// پارامترهای صفحه‌بندی از query string
///
/// - `page`: شماره صفحه، از صفر شروع میشه
/// - `size`: تعداد آیتم در صفحه
/// - `sort`: فیلدها با کاما، `-` یعنی نزولی (`sort=-number,id`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageRequest {
    /// شماره صفحه (از 0)
    pub page: Option<u32>,

    /// تعداد آیتم در صفحه
    pub size: Option<u32>,

    /// ترتیب، مثلا `-number,id`
    pub sort: Option<String>,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            sort: None,
        }
    }

    #[must_use]
    pub fn sorted(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

/// پنجره نهایی یک صفحه بعد از اعمال پیش‌فرض‌ها و سقف اندازه
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub size: u32,
}

impl PageWindow {
    /// محاسبه offset برای SQL
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

/// Helper صفحه‌بندی که به هر repository تزریق میشه
///
/// اندازه پیش‌فرض و حداکثر از `Config` میاد.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    default_size: u32,
    max_size: u32,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(10, 100)
    }
}

impl Paginator {
    #[must_use]
    pub fn new(default_size: u32, max_size: u32) -> Self {
        Self {
            default_size: default_size.max(1),
            max_size: max_size.max(1),
        }
    }

    /// `size` صفر یا خالی -> پیش‌فرض، بزرگ‌تر از سقف -> سقف
    #[must_use]
    pub fn window(&self, request: &PageRequest) -> PageWindow {
        let size = match request.size {
            Some(0) | None => self.default_size,
            Some(size) => size,
        };

        PageWindow {
            page: request.page.unwrap_or(0),
            size: size.min(self.max_size),
        }
    }
}

/// نتیجه صفحه‌بندی شده
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(
    AyahPage = Page<Ayah>,
    SurahPage = Page<Surah>,
    JuzPage = Page<Juz>,
    BookPage = Page<Book>,
    ThemePage = Page<Theme>,
    ChapterPage = Page<Chapter>,
    HadithPage = Page<Hadith>
)]
pub struct Page<T> {
    /// آیتم‌های این صفحه
    pub items: Vec<T>,

    /// شماره صفحه فعلی (از 0)
    pub page: u32,

    /// اندازه صفحه
    pub size: u32,

    /// بزرگترین شماره صفحه معتبر
    pub max_page: u32,

    pub total_pages: u32,

    /// تعداد کل ردیف‌های غیر حذف‌شده
    pub total: i64,

    pub first: bool,
    pub last: bool,

    /// تعداد آیتم‌های همین صفحه
    pub visible: u32,
}

impl<T> Page<T> {
    /// ساخت صفحه از آیتم‌ها و تعداد کل
    pub fn new(items: Vec<T>, window: PageWindow, total: i64) -> Self {
        let total_pages = total_pages(total, window.size);
        let max_page = total_pages.saturating_sub(1);

        Self {
            visible: items.len() as u32,
            items,
            page: window.page,
            size: window.size,
            max_page,
            total_pages,
            total,
            first: window.page == 0,
            last: window.page >= max_page,
        }
    }
}

/// ceil(total / size)
#[must_use]
pub fn total_pages(total: i64, size: u32) -> u32 {
    if total <= 0 || size == 0 {
        return 0;
    }
    let size = i64::from(size);
    ((total + size - 1) / size) as u32
}

// =====================================
// Sort Order
// =====================================
/// ترتیب مرتب‌سازی
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// تبدیل به SQL
    #[must_use]
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// فیلدهای قابل مرتب‌سازی یک منبع: (نام در API، ستون SQL)
pub type Sortable = &'static [(&'static str, &'static str)];

/// Parse کردن پارامتر `sort` به لیست (ستون، ترتیب)
///
/// فقط فیلدهایی که در `allowed` هستن قبول میشن؛ بقیه `BadRequest`.
///
/// # مثال
/// ```rust
/// use islamic_explorer::models::{parse_sort, SortOrder};
///
/// let allowed = &[("id", "h.id"), ("number", "h.number")];
/// let sort = parse_sort(Some("-number,id"), allowed).unwrap();
/// assert_eq!(sort, vec![("h.number", SortOrder::Desc), ("h.id", SortOrder::Asc)]);
/// ```
pub fn parse_sort(raw: Option<&str>, allowed: Sortable) -> Result<Vec<(&'static str, SortOrder)>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| {
            let (name, order) = match field.strip_prefix('-') {
                Some(name) => (name, SortOrder::Desc),
                None => (field.trim_start_matches('+'), SortOrder::Asc),
            };

            allowed
                .iter()
                .find(|(api, _)| *api == name)
                .map(|(_, column)| (*column, order))
                .ok_or_else(|| AppError::BadRequest(format!("cannot sort by '{}'", name)))
        })
        .collect()
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: Sortable = &[("id", "b.id"), ("slug", "b.slug")];

    #[test]
    fn test_delete_scope() {
        assert_eq!(DeleteScope::from_path(Some("hard")), DeleteScope::Hard);
        assert_eq!(DeleteScope::from_path(Some("soft")), DeleteScope::Soft);
        assert_eq!(DeleteScope::from_path(Some("HARD")), DeleteScope::Soft);
        assert_eq!(DeleteScope::from_path(None), DeleteScope::Soft);
    }

    #[test]
    fn test_window_defaults_and_cap() {
        let paginator = Paginator::new(10, 50);

        assert_eq!(
            paginator.window(&PageRequest::default()),
            PageWindow { page: 0, size: 10 }
        );
        assert_eq!(
            paginator.window(&PageRequest::new(2, 0)),
            PageWindow { page: 2, size: 10 }
        );
        assert_eq!(
            paginator.window(&PageRequest::new(1, 500)),
            PageWindow { page: 1, size: 50 }
        );
    }

    #[test]
    fn test_window_offset() {
        let window = PageWindow { page: 3, size: 20 };
        assert_eq!(window.offset(), 60);
        assert_eq!(window.limit(), 20);
    }

    #[test]
    fn test_page_metadata() {
        let page = Page::new(vec![1, 2, 3, 4, 5], PageWindow { page: 1, size: 5 }, 12);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.max_page, 2);
        assert!(!page.first);
        assert!(!page.last);
        assert_eq!(page.visible, 5);
    }

    #[test]
    fn test_empty_page() {
        let page: Page<i32> = Page::new(Vec::new(), PageWindow { page: 0, size: 10 }, 0);

        assert_eq!(page.total_pages, 0);
        assert!(page.first);
        assert!(page.last);
    }

    #[test]
    fn test_parse_sort() {
        assert!(parse_sort(None, ALLOWED).unwrap().is_empty());
        assert_eq!(
            parse_sort(Some("-slug, id"), ALLOWED).unwrap(),
            vec![("b.slug", SortOrder::Desc), ("b.id", SortOrder::Asc)]
        );
    }

    #[test]
    fn test_parse_sort_rejects_unknown_field() {
        let result = parse_sort(Some("id; DROP TABLE book"), ALLOWED);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}

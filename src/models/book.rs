//! # مدل کتاب حدیث
//!
//! کتاب صاحب media‌هاش هست و از طریق جدول `book_themes` به theme‌ها
//! وصل میشه. `count` (تعداد حدیث‌ها) موقع خوندن محاسبه میشه و
//! هیچوقت ذخیره نمیشه.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{Theme, Translation, TranslationPayload};

/// کتاب حدیث، مثلا `sahih-bukhari`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,

    /// شناسه یکتا در URL
    pub slug: String,

    #[sqlx(flatten)]
    pub translation: Translation,

    #[sqlx(skip)]
    #[serde(default)]
    pub media: Vec<Media>,

    #[sqlx(skip)]
    #[serde(default)]
    pub themes: Vec<Theme>,

    /// تعداد حدیث‌ها (فقط در لیست)
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// فایل/تصویر متعلق به یک کتاب
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Media {
    pub id: i64,
    pub book_id: i64,
    pub name: String,
    pub url: String,

    /// نوع فایل، مثلا `cover` یا `pdf`
    pub kind: Option<String>,
}

/// بدنه media داخل payload کتاب
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct MediaPayload {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 2048))]
    pub url: String,

    #[validate(length(max = 50))]
    pub kind: Option<String>,
}

/// بدنه ساخت/بروزرسانی کتاب
///
/// بروزرسانی کل رکورد رو بازنویسی میکنه: media و `theme_ids` که
/// فرستاده نشن خالی در نظر گرفته میشن.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    #[validate(
        length(min = 1, max = 100),
        custom(function = "crate::utils::validate_slug")
    )]
    pub slug: String,

    #[serde(default)]
    #[validate(nested)]
    pub translation: TranslationPayload,

    #[serde(default)]
    #[validate(nested)]
    pub media: Vec<MediaPayload>,

    /// theme‌هایی که در `book_themes` به کتاب وصل میشن
    #[serde(default)]
    pub theme_ids: Vec<i64>,
}

//! # مدل ترجمه
//!
//! هر entity یک ردیف در جدول `translation` داره که متن عربی و
//! ترجمه/آوانویسی انگلیسی و اندونزیایی رو نگه میداره.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// ترجمه یک entity
///
/// ستون‌ها در کوئری‌ها با پیشوند `tr_` انتخاب میشن تا با ستون‌های
/// entity اصلی (مثلا `id`) قاطی نشن.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Translation {
    #[sqlx(rename = "tr_id")]
    pub id: i64,

    /// متن عربی
    #[sqlx(rename = "tr_ar")]
    pub ar: Option<String>,

    #[sqlx(rename = "tr_en")]
    pub en: Option<String>,

    /// اندونزیایی
    #[sqlx(rename = "tr_idn")]
    pub idn: Option<String>,

    /// آوانویسی لاتین (انگلیسی)
    #[sqlx(rename = "tr_latin_en")]
    pub latin_en: Option<String>,

    /// آوانویسی لاتین (اندونزیایی)
    #[sqlx(rename = "tr_latin_idn")]
    pub latin_idn: Option<String>,
}

/// بدنه ترجمه در POST/PUT
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct TranslationPayload {
    #[validate(length(max = 65536))]
    pub ar: Option<String>,

    #[validate(length(max = 65536))]
    pub en: Option<String>,

    #[validate(length(max = 65536))]
    pub idn: Option<String>,

    #[validate(length(max = 1024))]
    pub latin_en: Option<String>,

    #[validate(length(max = 1024))]
    pub latin_idn: Option<String>,
}

impl TranslationPayload {
    /// فقط متن انگلیسی
    #[must_use]
    pub fn en(text: impl Into<String>) -> Self {
        Self {
            en: Some(text.into()),
            ..Self::default()
        }
    }

    /// آیا این payload با ترجمه ذخیره شده برابره؟ (بدون `id`)
    #[must_use]
    pub fn matches(&self, translation: &Translation) -> bool {
        self.ar == translation.ar
            && self.en == translation.en
            && self.idn == translation.idn
            && self.latin_en == translation.latin_en
            && self.latin_idn == translation.latin_idn
    }
}

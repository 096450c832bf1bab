//! # مدل حدیث

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{Translation, TranslationPayload};

/// حدیث: یک روایت در یک کتاب، با theme و باب اختیاری
///
/// متن روایت در `translation` هست؛ `number` ترتیب داخل کتاب رو مشخص میکنه.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Hadith {
    pub id: i64,
    pub book_id: i64,
    pub theme_id: Option<i64>,
    pub chapter_id: Option<i64>,
    pub number: i64,

    #[sqlx(flatten)]
    pub translation: Translation,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct HadithPayload {
    #[validate(range(min = 1))]
    pub book_id: i64,

    #[validate(range(min = 1))]
    pub theme_id: Option<i64>,

    #[validate(range(min = 1))]
    pub chapter_id: Option<i64>,

    #[validate(range(min = 1, message = "Hadith number must be positive"))]
    pub number: i64,

    #[serde(default)]
    #[validate(nested)]
    pub translation: TranslationPayload,
}

//! # مدل سوره

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{Translation, TranslationPayload};

/// سوره (فصل قرآن)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Surah {
    pub id: i64,

    /// شماره سوره (1 تا 114)
    pub number: i64,

    /// نام لاتین، مثلا `Al-Fatihah`
    pub name: String,

    #[sqlx(flatten)]
    pub translation: Translation,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// بدنه ساخت/بروزرسانی سوره
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SurahPayload {
    #[validate(range(min = 1, max = 114, message = "Surah number must be between 1 and 114"))]
    pub number: i64,

    #[validate(length(min = 1, max = 100, message = "Surah name must be 1-100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(nested)]
    pub translation: TranslationPayload,
}

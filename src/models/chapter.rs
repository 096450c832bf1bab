//! # مدل باب (Chapter)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{Translation, TranslationPayload};

/// باب: زیرمجموعه یک theme که حدیث‌ها داخلش قرار میگیرن
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Chapter {
    pub id: i64,
    pub theme_id: i64,

    #[sqlx(flatten)]
    pub translation: Translation,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChapterPayload {
    #[validate(range(min = 1))]
    pub theme_id: i64,

    #[serde(default)]
    #[validate(nested)]
    pub translation: TranslationPayload,
}

//! # مدل موضوع (Theme)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{Translation, TranslationPayload};

/// دسته‌بندی موضوعی برای کتاب‌ها، باب‌ها و حدیث‌ها
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Theme {
    pub id: i64,

    #[sqlx(flatten)]
    pub translation: Translation,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ThemePayload {
    #[serde(default)]
    #[validate(nested)]
    pub translation: TranslationPayload,
}

//! # مدل آیه

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{Translation, TranslationPayload};

/// آیه: یک آیه از یک سوره
///
/// متن عربی در `translation.ar` هست.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Ayah {
    pub id: i64,

    pub surah_id: i64,

    /// شماره سوره مالک (از join خونده میشه، ذخیره نمیشه)
    pub surah_number: i64,

    /// شماره آیه داخل سوره
    pub number: i64,

    #[sqlx(flatten)]
    pub translation: Translation,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// بدنه ساخت/بروزرسانی آیه
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AyahPayload {
    #[validate(range(min = 1))]
    pub surah_id: i64,

    #[validate(range(min = 1, max = 286, message = "Ayah number must be between 1 and 286"))]
    pub number: i64,

    #[serde(default)]
    #[validate(nested)]
    pub translation: TranslationPayload,
}

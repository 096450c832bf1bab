//! # مدل جزء

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::{Translation, TranslationPayload};

/// جزء: یکی از 30 بخش قرآن
///
/// بازه‌اش از (سوره، آیه) شروع تا (سوره، آیه) پایان مشخص میشه.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Juz {
    pub id: i64,
    pub number: i64,
    pub start_surah_number: i64,
    pub start_ayah_number: i64,
    pub end_surah_number: i64,
    pub end_ayah_number: i64,

    #[sqlx(flatten)]
    pub translation: Translation,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// بدنه ساخت/بروزرسانی جزء
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_juz_span"))]
pub struct JuzPayload {
    #[validate(range(min = 1, max = 30, message = "Juz number must be between 1 and 30"))]
    pub number: i64,

    #[validate(range(min = 1, max = 114))]
    pub start_surah_number: i64,

    #[validate(range(min = 1))]
    pub start_ayah_number: i64,

    #[validate(range(min = 1, max = 114))]
    pub end_surah_number: i64,

    #[validate(range(min = 1))]
    pub end_ayah_number: i64,

    #[serde(default)]
    #[validate(nested)]
    pub translation: TranslationPayload,
}

/// شروع جزء نباید بعد از پایانش باشه
fn validate_juz_span(payload: &JuzPayload) -> Result<(), ValidationError> {
    let start = (payload.start_surah_number, payload.start_ayah_number);
    let end = (payload.end_surah_number, payload.end_ayah_number);

    if start > end {
        return Err(ValidationError::new("juz_span"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(start: (i64, i64), end: (i64, i64)) -> JuzPayload {
        JuzPayload {
            number: 1,
            start_surah_number: start.0,
            start_ayah_number: start.1,
            end_surah_number: end.0,
            end_ayah_number: end.1,
            translation: TranslationPayload::default(),
        }
    }

    #[test]
    fn test_span_validation() {
        assert!(payload((1, 1), (2, 141)).validate().is_ok());
        assert!(payload((2, 142), (2, 252)).validate().is_ok());
        assert!(payload((2, 10), (2, 5)).validate().is_err());
        assert!(payload((3, 1), (2, 5)).validate().is_err());
    }
}

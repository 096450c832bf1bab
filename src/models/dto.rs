//! # Data Transfer Objects (DTOs)
//!
//! پاسخ‌های عمومی API که به یک entity خاص تعلق ندارن

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =====================================
// Generic Responses
// =====================================
/// پاسخ خالی برای عملیات‌هایی که داده برنمیگردونن (مثل حذف)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmptyResponse {
    pub success: bool,
    pub message: String,
}

impl EmptyResponse {
    /// ساخت پاسخ خالی موفق
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// =====================================
// API Index / Info
// =====================================
/// یک منبع در فهرست API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResourceLink {
    pub name: String,
    pub path: String,
}

/// پاسخ `GET /`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiIndex {
    pub name: String,
    pub version: String,
    pub documentation: String,
    pub resources: Vec<ResourceLink>,
}

impl ApiIndex {
    /// فهرست ثابت منابع زیر پیشوند داده شده
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        let resources = ["ayah", "surah", "juz", "books", "themes", "chapters", "hadiths"]
            .into_iter()
            .map(|name| ResourceLink {
                name: name.to_string(),
                path: format!("{}/{}", prefix, name),
            })
            .collect();

        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            documentation: format!("{}/swagger/index.html", prefix),
            resources,
        }
    }
}

/// تعداد ردیف‌های غیر حذف‌شده هر منبع
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResourceCounts {
    pub ayah: i64,
    pub surah: i64,
    pub juz: i64,
    pub books: i64,
    pub themes: i64,
    pub chapters: i64,
    pub hadiths: i64,
}

/// پاسخ `GET /info`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub counts: ResourceCounts,
}

impl ApiInfo {
    #[must_use]
    pub fn new(counts: ResourceCounts) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: env!("CARGO_PKG_DESCRIPTION").to_string(),
            counts,
        }
    }
}

//! # ماژول توابع کمکی (Utilities)

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

// =====================================
// Lazy Statics (Regex patterns)
// =====================================
/// الگوی slug معتبر: حروف کوچک و عدد، جدا شده با `-`
pub static VALID_SLUG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("Invalid regex pattern")
});

// =====================================
// Validation Functions
// =====================================
/// اعتبارسنجی slug
///
/// # مثال
/// ```rust
/// use islamic_explorer::utils::is_valid_slug;
///
/// assert!(is_valid_slug("sahih-bukhari"));
/// assert!(!is_valid_slug("Sahih Bukhari"));
/// ```
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    VALID_SLUG.is_match(slug)
}

/// Validator سفارشی برای فیلد `slug` در payload‌ها
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(ValidationError::new("slug"))
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slug() {
        assert!(is_valid_slug("sahih-bukhari"));
        assert!(is_valid_slug("muslim"));
        assert!(is_valid_slug("riyad-as-salihin-2"));
    }

    #[test]
    fn test_invalid_slug() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-bukhari"));
        assert!(!is_valid_slug("bukhari-"));
        assert!(!is_valid_slug("sahih--bukhari"));
        assert!(!is_valid_slug("Sahih_Bukhari"));
        assert!(!is_valid_slug("sahih bukhari"));
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("abu-dawud").is_ok());
        assert_eq!(validate_slug("Abu Dawud").unwrap_err().code, "slug");
    }
}

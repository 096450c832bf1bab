//! # ماژول تنظیمات (Configuration)
//!
//! تنظیمات برنامه یک بار موقع استارت ساخته میشه و به صورت صریح
//! به router و repository‌ها پاس داده میشه؛ هیچ state سراسری نداریم.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// پیشوند پیش‌فرض مسیرهای API
pub const DEFAULT_ENDPOINT: &str = "/v1";

/// تنظیمات اصلی برنامه
///
/// # مثال
/// ```rust
/// use islamic_explorer::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.endpoint, "/v1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// آدرس هاست سرور
    pub host: String,

    /// پورت سرور
    pub port: u16,

    /// پیشوند همه route‌ها (مثلا `/v1`)؛ رشته خالی یعنی ریشه
    pub endpoint: String,

    /// آدرس اتصال به دیتابیس
    pub database_url: String,

    /// اندازه پیش‌فرض صفحه در لیست‌ها
    pub page_size: u32,

    /// حداکثر اندازه صفحه که کلاینت میتونه بخواد
    pub max_page_size: u32,

    /// محیط اجرا (development, production)
    pub environment: Environment,
}

/// محیط اجرای برنامه
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// محیط توسعه
    #[default]
    Development,

    /// محیط تست
    Testing,

    /// محیط تولید
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            database_url: "sqlite://data/islamic.db?mode=rwc".to_string(),
            page_size: 10,
            max_page_size: 100,
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// ساخت تنظیمات از متغیرهای محیطی
    ///
    /// متغیرها: `HOST`, `PORT`, `ENDPOINT`, `DATABASE_URL`, `PAGE_SIZE`,
    /// `MAX_PAGE_SIZE`, `ENVIRONMENT`. هر کدوم نباشه مقدار پیش‌فرض میگیره.
    ///
    /// # Errors
    /// خطا برمیگردونه اگه یک مقدار عددی قابل parse نباشه
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let get_env = |key: &str, default: &str| -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Ok(Self {
            host: get_env("HOST", &defaults.host),
            port: parse_env("PORT", defaults.port)?,
            endpoint: normalize_endpoint(&get_env("ENDPOINT", &defaults.endpoint)),
            database_url: get_env("DATABASE_URL", &defaults.database_url),
            page_size: parse_env("PAGE_SIZE", defaults.page_size)?,
            max_page_size: parse_env("MAX_PAGE_SIZE", defaults.max_page_size)?,
            environment: get_env("ENVIRONMENT", "development").into(),
        })
    }

    /// اعتبارسنجی تنظیمات
    ///
    /// # Errors
    /// `AppError::Config` اگه یکی از مقادیر معتبر نباشه
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::Config("PORT cannot be 0".to_string()));
        }

        if !self.endpoint.is_empty()
            && (!self.endpoint.starts_with('/') || self.endpoint.ends_with('/'))
        {
            return Err(AppError::Config(format!(
                "ENDPOINT must start with '/' and not end with '/': '{}'",
                self.endpoint
            )));
        }

        if self.page_size == 0 || self.page_size > self.max_page_size {
            return Err(AppError::Config(format!(
                "PAGE_SIZE must be between 1 and MAX_PAGE_SIZE ({})",
                self.max_page_size
            )));
        }

        Ok(())
    }

    /// آدرس کامل سرور
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} has an invalid value: '{}'", key, value))),
        Err(_) => Ok(default),
    }
}

/// `v1` -> `/v1`، `/v1/` -> `/v1`، `/` -> ``
fn normalize_endpoint(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

// =====================================
// Builder Pattern
// =====================================
/// ساخت Config با Builder Pattern
///
/// # مثال
/// ```rust
/// use islamic_explorer::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .port(8080)
///     .endpoint("/api")
///     .build();
/// assert_eq!(config.endpoint, "/api");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// تنظیم پیشوند route‌ها
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl AsRef<str>) -> Self {
        self.config.endpoint = normalize_endpoint(endpoint.as_ref());
        self
    }

    #[must_use]
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    /// تنظیم اندازه پیش‌فرض و حداکثر صفحه
    #[must_use]
    pub fn page_size(mut self, default: u32, max: u32) -> Self {
        self.config.page_size = default;
        self.config.max_page_size = max;
        self
    }

    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.config.environment = env;
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }

    /// ساخت Config با اعتبارسنجی
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اعتبارسنجی fail بشه
    pub fn build_validated(self) -> Result<Config> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.endpoint, "/v1");
        assert_eq!(config.page_size, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .port(8080)
            .host("0.0.0.0")
            .endpoint("api/")
            .build();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.endpoint, "/api");
    }

    #[test]
    fn test_normalize_endpoint() {
        assert_eq!(normalize_endpoint("/v1"), "/v1");
        assert_eq!(normalize_endpoint("v2"), "/v2");
        assert_eq!(normalize_endpoint("/v1/"), "/v1");
        assert_eq!(normalize_endpoint("/"), "");
        assert_eq!(normalize_endpoint(""), "");
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from("production".to_string()), Environment::Production);
        assert_eq!(Environment::from("PROD".to_string()), Environment::Production);
        assert_eq!(Environment::from("test".to_string()), Environment::Testing);
        assert_eq!(Environment::from("unknown".to_string()), Environment::Development);
    }

    #[test]
    fn test_validation_rejects_bad_page_size() {
        let config = ConfigBuilder::new().page_size(200, 100).build();
        assert!(config.validate().is_err());

        let config = ConfigBuilder::new().page_size(0, 100).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_port() {
        let config = ConfigBuilder::new().port(0).build();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}

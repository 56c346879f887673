use chrono_tz::Tz;

/// Storefront configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | runtime environment |
/// | LOG_LEVEL | info | log filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | enables rolling file logs |
/// | TIMEZONE | America/Los_Angeles | business timezone used for "today" |
/// | WHATSAPP_NUMBER | +15551234567 | booking deep-link target |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout (ms) |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 TIMEZONE=Europe/Madrid cargo run -p storefront
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    /// Rolling file logs are written here when set
    pub log_dir: Option<String>,
    /// Business timezone; dates "before today" are judged in this zone
    pub timezone: Tz,
    /// WhatsApp number used for booking deep links
    pub whatsapp_number: String,
    /// Request timeout (ms)
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::America::Los_Angeles),
            whatsapp_number: std::env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "+15551234567".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override selected values
    ///
    /// Mostly used by tests.
    pub fn with_overrides(http_port: u16, timezone: Tz) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.timezone = timezone;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

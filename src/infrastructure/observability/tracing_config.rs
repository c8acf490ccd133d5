/// Log output settings, read from `APP_ENV` and `LOG_FORMAT`.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("APP_ENV").ok(),
            std::env::var("LOG_FORMAT").ok(),
        )
    }

    pub fn from_values(environment: Option<String>, log_format: Option<String>) -> Self {
        Self {
            environment: environment.unwrap_or_else(|| "development".to_string()),
            json_format: log_format
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

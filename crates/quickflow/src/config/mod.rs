use std::env;
use std::fmt;
use url::Url;

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8001";

/// Distinguishes runtime behavior for different stages of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration, read once at start-up.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub backend: BackendConfig,
    pub telemetry: TelemetryConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let backend_url =
            env::var("QUICKFLOW_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let backend = BackendConfig::parse(&backend_url)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let color = match env::var("QUICKFLOW_COLOR") {
            Ok(value) => ColorMode::parse(&value)?,
            Err(_) => ColorMode::Auto,
        };

        Ok(Self {
            environment,
            backend,
            telemetry: TelemetryConfig { log_level },
            display: DisplayConfig { color },
        })
    }
}

/// Location of the scoring service.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    /// Validate an endpoint base. Only absolute `http`/`https` URLs are accepted.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBackendUrl {
            value: trimmed.to_string(),
            source,
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
            });
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Terminal rendering controls.
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    pub color: ColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    Never,
    Auto,
}

impl ColorMode {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "always" | "on" => Ok(Self::Always),
            "never" | "off" => Ok(Self::Never),
            "auto" | "" => Ok(Self::Auto),
            other => Err(ConfigError::InvalidColorMode {
                value: other.to_string(),
            }),
        }
    }

    /// Decide whether ANSI styling is emitted. `Auto` colors only an interactive terminal and
    /// honours `NO_COLOR`.
    pub fn enabled(self, is_terminal: bool, no_color: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal && !no_color,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBackendUrl {
        value: String,
        source: url::ParseError,
    },
    UnsupportedScheme {
        scheme: String,
    },
    InvalidColorMode {
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBackendUrl { value, .. } => {
                write!(f, "QUICKFLOW_BACKEND_URL '{}' is not a valid URL", value)
            }
            ConfigError::UnsupportedScheme { scheme } => {
                write!(
                    f,
                    "QUICKFLOW_BACKEND_URL must use http or https, got '{}'",
                    scheme
                )
            }
            ConfigError::InvalidColorMode { value } => {
                write!(
                    f,
                    "QUICKFLOW_COLOR must be always, never or auto, got '{}'",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidBackendUrl { source, .. } => Some(source),
            ConfigError::UnsupportedScheme { .. } | ConfigError::InvalidColorMode { .. } => None,
        }
    }
}

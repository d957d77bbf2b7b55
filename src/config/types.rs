use serde::Deserialize;

/// Main configuration structure for pagestat
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// User-Agent header sent with the page request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("pagestat/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of words and tags listed in the report
    #[serde(rename = "top-n")]
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: crate::pipeline::DEFAULT_TOP_N,
        }
    }
}

/// Interactive prompt configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// How many times a prompt is repeated before giving up
    #[serde(rename = "max-attempts")]
    pub max_attempts: u32,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { max_attempts: 5 }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Extension appended to database names given without one
    #[serde(rename = "database-extension")]
    pub database_extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            database_extension: "db".to_string(),
        }
    }
}

use crate::config::types::{Config, FetchConfig, OutputConfig, PromptConfig, ReportConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_report_config(&config.report)?;
    validate_prompt_config(&config.prompt)?;
    validate_output_config(&config.output)?;
    Ok(())
}

fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect_timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs ({}) cannot exceed timeout_secs ({})",
            config.connect_timeout_secs, config.timeout_secs
        )));
    }

    Ok(())
}

fn validate_report_config(config: &ReportConfig) -> Result<(), ConfigError> {
    if config.top_n < 1 {
        return Err(ConfigError::Validation(format!(
            "top_n must be >= 1, got {}",
            config.top_n
        )));
    }
    Ok(())
}

fn validate_prompt_config(config: &PromptConfig) -> Result<(), ConfigError> {
    if config.max_attempts < 1 {
        return Err(ConfigError::Validation(format!(
            "max_attempts must be >= 1, got {}",
            config.max_attempts
        )));
    }
    Ok(())
}

/// Validates output configuration
///
/// The extension is appended after a dot, so it must not carry one itself.
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    let ext = &config.database_extension;

    if ext.is_empty() {
        return Err(ConfigError::Validation(
            "database_extension cannot be empty".to_string(),
        ));
    }

    if ext.contains('.') || ext.contains('/') || ext.contains('\\') {
        return Err(ConfigError::Validation(format!(
            "database_extension must be a bare extension without dots or separators, got '{}'",
            ext
        )));
    }

    Ok(())
}

pub mod error;

use crate::{
    error::{EduTrackError, Result},
    log_debug,
};

use super::AppConfig;
use error::ValidationError;

const MAX_TICK_FPS: f64 = 240.0;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Parse and validate a YAML config document
    pub fn validate(config_yaml: &str) -> Result<AppConfig> {
        // Empty documents deserialize as null, treat them as "all defaults"
        if config_yaml.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        let config: AppConfig = serde_yaml::from_str(config_yaml)?;
        log_debug!("Parsed config: {:?}", config);

        Self::validate_values(&config)
            .map_err(|e| EduTrackError::ConfigError(e.to_string()))?;

        Ok(config)
    }

    fn validate_values(config: &AppConfig) -> std::result::Result<(), ValidationError> {
        if !(config.tick_fps > 0.0 && config.tick_fps <= MAX_TICK_FPS) {
            return Err(ValidationError {
                field: "tick_fps".to_string(),
                error: format!("Must be in (0, {}], got {}", MAX_TICK_FPS, config.tick_fps),
            });
        }

        if config.log_dir.as_os_str().is_empty() {
            return Err(ValidationError {
                field: "log_dir".to_string(),
                error: "Must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let yaml = r#"
log_dir: "/tmp/edutrack-logs"
tick_fps: 60
login_delay_ms: 500
reply_delay_ms: 200
skip_login: false
"#;

        let config = ConfigValidator::validate(yaml).unwrap();
        assert_eq!(config.tick_fps, 60.0);
        assert_eq!(config.login_delay_ms, 500);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = ConfigValidator::validate("   \n").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_tick_fps_out_of_range() {
        assert!(ConfigValidator::validate("tick_fps: -1").is_err());
        assert!(ConfigValidator::validate("tick_fps: 1000").is_err());
    }

    #[test]
    fn test_empty_log_dir() {
        let result = ConfigValidator::validate("log_dir: \"\"");
        assert!(matches!(result, Err(EduTrackError::ConfigError(msg)) if msg.contains("log_dir")));
    }

    #[test]
    fn test_wrong_type_is_yaml_error() {
        let result = ConfigValidator::validate("reply_delay_ms: soon");
        assert!(matches!(result, Err(EduTrackError::YamlError(_))));
    }
}

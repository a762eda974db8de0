use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::error::Result;

use super::{validation::ConfigValidator, AppConfig};

pub const CONFIG_ENV_VAR: &str = "EDUTRACK_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./edutrack.yml";

impl AppConfig {
    /// Resolve the config path from `EDUTRACK_CONFIG`, falling back to `./edutrack.yml`.
    pub fn config_path() -> PathBuf {
        std::env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_path())
    }

    /// A missing file is not an error; it yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        ConfigValidator::validate(&content)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load_from_path(&temp_dir.path().join("nope.yml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("edutrack.yml");
        fs::write(&path, "reply_delay_ms: 250\nskip_login: true\n").unwrap();

        let config = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(config.reply_delay(), Duration::from_millis(250));
        assert!(config.skip_login);
        assert_eq!(config.login_delay_ms, 1500);
        assert_eq!(config.tick_fps, 30.0);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("edutrack.yml");
        fs::write(&path, "tick_fps: 0\n").unwrap();

        assert!(AppConfig::load_from_path(&path).is_err());
    }
}

use std::path::PathBuf;

use crate::util::log::DEFAULT_LOG_DIR;

use super::AppConfig;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            tick_fps: 30.0,
            login_delay_ms: 1500,
            reply_delay_ms: 1000,
            skip_login: false,
        }
    }
}

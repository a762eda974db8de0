mod load;
mod trait_default;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use load::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};

/// Runtime settings read from `edutrack.yml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_dir: PathBuf,
    pub tick_fps: f64,
    /// How long "Signing in..." shows before the dashboard opens.
    pub login_delay_ms: u64,
    /// Simulated thinking time before the assistant replies.
    pub reply_delay_ms: u64,
    /// Start authenticated with no role held, which lands on the role selector.
    pub skip_login: bool,
}

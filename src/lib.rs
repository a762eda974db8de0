pub mod app;
pub mod chat;
pub mod config;
pub mod data;
pub mod error;
pub mod event;
pub mod login;
pub mod navigation;
pub mod role;
pub mod router;
pub mod ui;
pub mod util;

pub use app::{App, Screen};
pub use config::AppConfig;
pub use error::{EduTrackError, Result};
pub use role::Role;

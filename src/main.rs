use edutrack::{log_info, util::log, App, AppConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;
    log::init(&config.log_dir);
    log::init_tracing(&config.log_dir)?;
    log_info!("Loaded config from {}", AppConfig::config_path().display());

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal).await;
    ratatui::restore();
    result
}

use determined::{log_info, util::log, App, AppConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;
    log::set_log_dir(config.log_dir.clone());
    log::init_tracing(&config.log_dir)?;
    log_info!("Starting with database at {}", config.database_path.display());

    let terminal = ratatui::init();
    let result = match App::new(config) {
        Ok(app) => app.run(terminal).await,
        Err(e) => Err(e),
    };
    ratatui::restore();
    result
}

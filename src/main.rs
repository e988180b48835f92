use clap::Parser;
use eframe::CreationContext;
use storefront_admin::{logging, AppError, Config, Storefront};
use tracing::info;

fn main() -> Result<(), AppError> {
    // A missing .env is fine; flags and the real environment still apply.
    let _ = dotenvy::dotenv();
    let config = Config::parse();
    logging::setup_tracing(&config.log_level);

    info!(api = %config.api_url, upload = %config.upload_url, "Starting storefront");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([640.0, 600.0])
            .with_min_inner_size([400.0, 500.0]),
        ..Default::default()
    };

    let app = Storefront::from_config(&config)?;
    eframe::run_native(
        "Coffee Storefront",
        options,
        Box::new(move |_cc: &CreationContext| Box::new(app)),
    )
    .map_err(|e| AppError::Ui(e.to_string()))
}

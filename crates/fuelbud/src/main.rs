//! FuelBud: fuel-efficiency predictions and model comparisons.

use fuelbud_core::constants::exit_codes;
use fuelbud_lib::{app, config};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = config::AppConfig::parse();

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = match app::run(&config) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            fuelbud_cli::ui::print_error(&format!("{err:#}"));
            exit_codes::ERROR_GENERIC
        }
    };
    std::process::exit(code);
}

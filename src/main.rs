use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use stress_detector::ApiEndpoint;
use stress_detector::core::config::{self, CliOverrides};
use stress_detector::tui;

#[derive(Parser)]
#[command(name = "stress-detector", about = "Detects stress in short messages via a prediction API")]
struct Args {
    /// Base URL of the prediction API
    #[arg(long)]
    api_url: Option<String>,

    /// Prediction path exposed by the API
    #[arg(short, long, value_enum)]
    endpoint: Option<ApiEndpoint>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to stress-detector.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("stress-detector.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        config::DetectorConfig::default()
    });
    let cli = CliOverrides {
        api_url: args.api_url,
        endpoint: args.endpoint,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Stress detector starting up (api={}, endpoint={:?})",
        resolved.api_base_url,
        resolved.endpoint
    );

    tui::run(resolved)
}

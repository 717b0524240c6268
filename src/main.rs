use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use statuscheck::core::config::{self, ResolvedConfig};
use std::fs::File;

#[derive(Parser)]
#[command(name = "statuscheck", about = "Report the HTTP status of a URL")]
struct Args {
    /// URL to send a single GET request to
    url: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let config = config::resolve(args.url);
    init_logging(&config);

    log::info!("statuscheck starting up for {}", config.url);

    if let Err(e) = statuscheck::tui::run(config).await {
        log::error!("Exiting after loop failure: {}", e);
        println!("Uh oh, there was an error: {e}");
        std::process::exit(1);
    }
}

/// File logger: stdout belongs to the terminal UI.
fn init_logging(config: &ResolvedConfig) {
    if config.log_level == LevelFilter::Off {
        return;
    }
    let Some(path) = &config.log_file else {
        return;
    };

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

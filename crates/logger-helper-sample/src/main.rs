//! # Logger Helper Sample
//!
//! Wraps the [`basic`](logger_helper_sample::basic) module and calls everything
//! in it, so the call log can be seen end to end.
//!
//! ```bash
//! RUST_LOG=info cargo run -p logger-helper-sample
//! RUST_LOG=debug cargo run -p logger-helper-sample -- --config logger.toml
//! RUST_LOG=info cargo run -p logger-helper-sample -- --only BasicClass
//! ```

use clap::Parser;
use logger_helper::tracing::setup_tracing;
use logger_helper::{Args, CallLogger, LoggerConfig, TracingSink};
use logger_helper_sample::basic::basic_module;
use std::path::PathBuf;
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML file with the log level and message formats.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only wrap these symbols of the module (repeatable).
    #[arg(long)]
    only: Vec<String>,
}

fn main() -> Result<(), String> {
    setup_tracing();
    let cli = Cli::parse();

    let logger = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "Loading logger configuration");
            let config = LoggerConfig::load(path).map_err(|e| e.to_string())?;
            CallLogger::from_config(TracingSink, &config).map_err(|e| e.to_string())?
        }
        None => CallLogger::new(TracingSink, Level::INFO),
    };

    let mut module = basic_module();
    if cli.only.is_empty() {
        logger.wrap_namespace(&mut module, None);
    } else {
        let only: Vec<&str> = cli.only.iter().map(String::as_str).collect();
        logger.wrap_namespace(&mut module, Some(&only));
    }

    module
        .call(
            "basic_function",
            &Args::new().arg(10).arg(20).kwarg("c", 40).kwarg("d", "Test"),
        )
        .map_err(|e| e.to_string())?;

    if let Err(e) = module.call("exception_function", &Args::new()) {
        warn!(error = %e, kind = e.kind(), "exception_function failed as expected");
    }

    let class = module
        .class("BasicClass")
        .ok_or_else(|| "BasicClass is missing from the module".to_string())?;
    let instance = class.instantiate(&Args::new()).map_err(|e| e.to_string())?;
    for method in ["method_1", "method_2"] {
        instance
            .call_method(method, &Args::new())
            .map_err(|e| e.to_string())?;
    }

    if let Some(property) = module.data("property") {
        info!(property = ?property, "Data bindings are left as they are");
    }

    info!("Sample completed successfully");
    Ok(())
}

//! PSD Exporter - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use psd_exporter::{
    backend::PsdBackend,
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    export::run_batch,
    output::{
        print_banner, print_batch_stats, print_config_summary, print_document_stats, print_error,
        print_info,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Document { .. } => ExitCode::from(exit_codes::DOCUMENT_ERROR as u8),
                Error::Composite { .. } | Error::Image(_) => {
                    ExitCode::from(exit_codes::EXPORT_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration if a config file is present; the tool runs with
    // fixed relative defaults otherwise
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Print configuration summary
    print_config_summary(
        &config.input_dir().display().to_string(),
        &config.output_dir().display().to_string(),
    );

    // Run the batch
    let backend = PsdBackend::new();
    let report = run_batch(&config, &backend).await?;

    // Print statistics
    for state in &report.documents {
        print_document_stats(state);
    }
    print_batch_stats(&report.stats);
    print_info(&format!(
        "Manifest written for {} document(s)",
        report.manifest.len()
    ));

    Ok(())
}

//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// PSD layer exporter CLI.
#[derive(Parser, Debug)]
#[command(
    name = "psd-exporter",
    version,
    about = "Export PSD layers as flattened PNG files with a JSON manifest",
    long_about = "A CLI tool that walks every PSD document in an input directory, exports each\n\
                  visible layer as an individual PNG, and writes a manifest describing the\n\
                  geometry and compositing metadata of every exported layer."
)]
pub struct Args {
    /// Directory containing source PSD documents.
    #[arg(short = 'i', long = "input", env = "PSD_EXPORTER_INPUT")]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving exported PNG files and the manifest.
    #[arg(short = 'o', long = "output", env = "PSD_EXPORTER_OUTPUT")]
    pub output_dir: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide per-layer export information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Show information about skipped layers.
    #[arg(long)]
    pub show_skipped: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(input_dir) = self.input_dir {
            config.paths.input_dir = input_dir;
        }

        if let Some(output_dir) = self.output_dir {
            config.paths.output_dir = output_dir;
        }

        // Boolean flags (only override if set to non-default)
        if self.quiet {
            config.options.show_exports = false;
            config.options.show_skipped_layers = false;
        }

        if self.show_skipped {
            config.options.show_skipped_layers = true;
        }
    }
}

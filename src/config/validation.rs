//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate a configuration before a batch run starts.
pub fn validate_config(config: &Config) -> Result<()> {
    let input = config.input_dir();
    let output = config.output_dir();

    if input == output {
        return Err(Error::ConfigValidation {
            field: "output_dir".to_string(),
            message: "output directory must differ from the input directory".to_string(),
        });
    }

    if input.exists() && !input.is_dir() {
        return Err(Error::ConfigValidation {
            field: "input_dir".to_string(),
            message: format!("{} is not a directory", input.display()),
        });
    }

    Ok(())
}

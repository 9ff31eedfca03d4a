//! Output artifact configuration.
//!
//! Every successful pipeline run writes its serialized result to one output
//! file. The destination is assembled from two environment variables (a `.env`
//! file is honored), falling back to `output/processed_data.csv`:
//!
//! - `CSV_OUTPUT_PATH` - directory prefix, default `output/`
//! - `CSV_OUTPUT_NAME` - file stem, default `processed_data`

use std::env;
use std::path::PathBuf;

/// Default directory prefix for the output artifact.
pub const DEFAULT_OUTPUT_DIR: &str = "output/";

/// Default file stem for the output artifact.
pub const DEFAULT_OUTPUT_NAME: &str = "processed_data";

/// Extension appended to the output file stem.
pub const OUTPUT_EXTENSION: &str = ".csv";

/// Where the serialized result is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory prefix, concatenated verbatim before the file stem.
    pub directory: String,
    /// File stem, without extension.
    pub file_stem: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_OUTPUT_DIR.to_string(),
            file_stem: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

impl OutputConfig {
    /// Build the configuration from the environment.
    ///
    /// Loads a `.env` file if present, then reads `CSV_OUTPUT_PATH` and
    /// `CSV_OUTPUT_NAME`, falling back to the defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            directory: env::var("CSV_OUTPUT_PATH")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string()),
            file_stem: env::var("CSV_OUTPUT_NAME")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_NAME.to_string()),
        }
    }

    /// Full path of the output artifact.
    ///
    /// The directory prefix is concatenated verbatim, so a prefix without a
    /// trailing separator becomes part of the file name.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!(
            "{}{}{}",
            self.directory, self.file_stem, OUTPUT_EXTENSION
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let config = OutputConfig::default();
        assert_eq!(
            config.output_path(),
            PathBuf::from("output/processed_data.csv")
        );
    }

    #[test]
    fn test_custom_output_path_concatenation() {
        let config = OutputConfig {
            directory: "/tmp/results/".to_string(),
            file_stem: "filtered".to_string(),
        };
        assert_eq!(
            config.output_path(),
            PathBuf::from("/tmp/results/filtered.csv")
        );
    }
}

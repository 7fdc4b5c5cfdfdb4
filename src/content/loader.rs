//! Loader for the runner configuration file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::RunnerConfig;

/// Error type for configuration loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse configuration text. JSON is accepted for `.json` files, RON otherwise.
pub fn parse_config(contents: &str, file_name: &str) -> Result<RunnerConfig, ConfigLoadError> {
    let is_json = Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(contents).map_err(|e| ConfigLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
    } else {
        ron_options()
            .from_str(contents)
            .map_err(|e| ConfigLoadError {
                file: file_name.to_string(),
                message: format!("Parse error: {}", e),
            })
    }
}

/// Load the runner configuration from disk.
pub fn load_config(path: &Path) -> Result<RunnerConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_config(&contents, &file_name)
}

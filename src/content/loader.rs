//! Loader for the locomotion RON config at startup.

use ron::Options;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::data::*;
use super::validation::{ValidationError, validate_config};
use crate::movement::{LocomotionTuning, SensorSettings};

/// File name suffix identifying a locomotion config.
pub const CONFIG_SUFFIX: &str = ".locomotion.ron";

/// Directory searched when no other is configured.
pub const DEFAULT_CONFIG_DIR: &str = "assets/data";

/// Error type for config loading failures. All of these are fatal to the
/// characters that would have used the config.
#[derive(Debug)]
pub enum ConfigError {
    /// No `*.locomotion.ron` file in the data directory.
    Missing { dir: String },
    /// More than one config file; none of them is picked.
    Ambiguous { files: Vec<String> },
    Io { file: String, message: String },
    Parse { file: String, message: String },
    SchemaVersion { file: String, found: u32 },
    Invalid {
        file: String,
        errors: Vec<ValidationError>,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing { dir } => {
                write!(f, "No '*{}' config found in {}", CONFIG_SUFFIX, dir)
            }
            ConfigError::Ambiguous { files } => write!(
                f,
                "Expected exactly one locomotion config, found {}: {}",
                files.len(),
                files.join(", ")
            ),
            ConfigError::Io { file, message } => {
                write!(f, "Failed to load {}: IO error: {}", file, message)
            }
            ConfigError::Parse { file, message } => {
                write!(f, "Failed to load {}: Parse error: {}", file, message)
            }
            ConfigError::SchemaVersion { file, found } => write!(
                f,
                "Failed to load {}: schema_version {} is not supported (expected {})",
                file, found, CURRENT_SCHEMA_VERSION
            ),
            ConfigError::Invalid { file, errors } => {
                write!(f, "Invalid config {}:", file)?;
                for error in errors {
                    write!(f, "\n  - {}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A validated config, ready to be handed to the app.
#[derive(Debug, Clone)]
pub struct LocomotionConfig {
    pub tuning: LocomotionTuning,
    pub sensor: SensorSettings,
    pub fixed_hz: f64,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Find the single config file in `dir`.
pub fn find_config_file(dir: &Path) -> Result<PathBuf, ConfigError> {
    let dir_name = dir.display().to_string();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::Missing { dir: dir_name });
        }
        Err(e) => {
            return Err(ConfigError::Io {
                file: dir_name,
                message: e.to_string(),
            });
        }
    };

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(CONFIG_SUFFIX))
        })
        .collect();
    candidates.sort();

    match candidates.len() {
        0 => Err(ConfigError::Missing { dir: dir_name }),
        1 => Ok(candidates.remove(0)),
        _ => Err(ConfigError::Ambiguous {
            files: candidates
                .iter()
                .map(|path| path.display().to_string())
                .collect(),
        }),
    }
}

/// Parse and validate config text. `file` is only used in diagnostics.
pub fn parse_config(file: &str, contents: &str) -> Result<LocomotionConfig, ConfigError> {
    let def: LocomotionConfigDef =
        ron_options()
            .from_str(contents)
            .map_err(|e| ConfigError::Parse {
                file: file.to_string(),
                message: e.to_string(),
            })?;

    if def.schema_version != CURRENT_SCHEMA_VERSION {
        return Err(ConfigError::SchemaVersion {
            file: file.to_string(),
            found: def.schema_version,
        });
    }

    let errors = validate_config(&def);
    if !errors.is_empty() {
        return Err(ConfigError::Invalid {
            file: file.to_string(),
            errors,
        });
    }

    let tuning = LocomotionTuning::try_from(def.tuning).map_err(|errors| ConfigError::Invalid {
        file: file.to_string(),
        errors,
    })?;

    Ok(LocomotionConfig {
        tuning,
        sensor: SensorSettings::from_def(&def.sensor),
        fixed_hz: def.simulation.fixed_hz,
    })
}

/// Load the one locomotion config found in `dir`.
pub fn load_config(dir: &Path) -> Result<LocomotionConfig, ConfigError> {
    let path = find_config_file(dir)?;
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
        file: file_name.clone(),
        message: e.to_string(),
    })?;

    parse_config(&file_name, &contents)
}

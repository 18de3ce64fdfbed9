//! Simulation config file loading
//!
//! The file is plain text with one `key = value` per line:
//!
//! ```text
//! age = 2000
//! health = 300
//! foods = 200
//! foodpower = 300
//! critters = 20
//! ```
//!
//! Every line is searched for every key, so order does not matter and the
//! last line setting a key wins. Unknown keys and garbage are ignored. A
//! missing or unreadable file means defaults; loading never fails startup.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crittevolution_core::SimConfig;
use thiserror::Error;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "conf";

/// Errors encountered while loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("value {value} for `{key}` on line {line} is out of range")]
    InvalidValue {
        key: &'static str,
        value: String,
        line: usize,
    },
}

/// Config keys in the order they are tested on each line
const KEYS: [&str; 5] = ["age", "health", "foods", "foodpower", "critters"];

fn field<'a>(config: &'a mut SimConfig, key: &str) -> Option<&'a mut u32> {
    match key {
        "age" => Some(&mut config.age_limit),
        "health" => Some(&mut config.mate_health),
        "foods" => Some(&mut config.foods),
        "foodpower" => Some(&mut config.food_power),
        "critters" => Some(&mut config.critters),
        _ => None,
    }
}

/// Apply every `key = digits` found in `text` on top of `base`.
///
/// Values too large for the field are skipped with a warning.
pub fn parse_config(text: &str, base: SimConfig) -> SimConfig {
    let mut config = base;

    for (line_index, line) in text.lines().enumerate() {
        for key in KEYS {
            let Some(value) = find_assignment(line, key) else {
                continue;
            };

            match value.parse::<u32>() {
                Ok(parsed) => {
                    if let Some(slot) = field(&mut config, key) {
                        *slot = parsed;
                    }
                }
                Err(_) => {
                    let err = ConfigError::InvalidValue {
                        key,
                        value: value.to_string(),
                        line: line_index + 1,
                    };
                    log::warn!("{}, ignoring it", err);
                }
            }
        }
    }

    config
}

/// Find the first `key <ws>* = <ws>* digits` anywhere in `line` and return the digits
fn find_assignment<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.match_indices(key).find_map(|(start, _)| {
        let rest = line[start + key.len()..].trim_start();
        let rest = rest.strip_prefix('=')?.trim_start();
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .map_or(rest, |end| &rest[..end]);
        (!digits.is_empty()).then_some(digits)
    })
}

/// Read the config file at `path` on top of the defaults
pub fn read_config(path: &Path) -> Result<SimConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_config(&text, SimConfig::default()))
}

/// Load the config file, falling back to defaults on any failure
pub fn load_config(path: &Path) -> SimConfig {
    match read_config(path) {
        Ok(config) => {
            log::info!("Loaded config from {:?}", path);
            config
        }
        Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            log::info!("No config file at {:?}, using defaults", path);
            SimConfig::default()
        }
        Err(err) => {
            log::warn!("{}: {}, using defaults", err, error_source(&err));
            SimConfig::default()
        }
    }
}

fn error_source(err: &ConfigError) -> String {
    std::error::Error::source(err)
        .map(ToString::to_string)
        .unwrap_or_default()
}

//! User-facing settings, loadable from TOML.
//!
//! ```toml
//! [sort]
//! size = 40
//! speed = 75
//! algorithm = "merge"
//! seed = 7
//!
//! [bst]
//! min_value = -999
//! max_value = 999
//! sample = false
//! ```

use std::path::Path;

use algoviz_sorting::Algorithm;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const MIN_SIZE: usize = 1;
pub const MAX_SIZE: usize = 200;
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 100;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sort: SortConfig,
    pub bst: BstConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    pub size: usize,
    pub speed: u32,
    pub algorithm: Algorithm,
    /// Fixed seed for reproducible arrays; random when absent.
    pub seed: Option<u64>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            size: 30,
            speed: 50,
            algorithm: Algorithm::Bubble,
            seed: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BstConfig {
    pub min_value: i64,
    pub max_value: i64,
    /// Start with the seven-node sample tree.
    pub sample: bool,
}

impl Default for BstConfig {
    fn default() -> Self {
        Self {
            min_value: -9999,
            max_value: 9999,
            sample: true,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        validate_size(self.sort.size)?;
        validate_speed(self.sort.speed)?;
        if self.bst.min_value > self.bst.max_value {
            return Err(Error::InvalidInput(format!(
                "bst.min_value {} exceeds bst.max_value {}",
                self.bst.min_value, self.bst.max_value
            )));
        }
        Ok(())
    }
}

pub fn validate_size(size: usize) -> Result<usize> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(Error::InvalidInput(format!(
            "array size must be between {MIN_SIZE} and {MAX_SIZE}, got {size}"
        )))
    }
}

pub fn validate_speed(speed: u32) -> Result<u32> {
    if (MIN_SPEED..=MAX_SPEED).contains(&speed) {
        Ok(speed)
    } else {
        Err(Error::InvalidInput(format!(
            "speed must be between {MIN_SPEED} and {MAX_SPEED}, got {speed}"
        )))
    }
}

/// Parses and range-checks an array size typed by the user.
pub fn parse_size(raw: &str) -> Result<usize> {
    let size = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::InvalidInput(format!("array size must be an integer, got {raw:?}")))?;
    validate_size(size)
}

/// Parses and range-checks a playback speed typed by the user.
pub fn parse_speed(raw: &str) -> Result<u32> {
    let speed = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::InvalidInput(format!("speed must be an integer, got {raw:?}")))?;
    validate_speed(speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn parse_size_rejects_bad_values() {
        assert_eq!(parse_size(" 25 ").unwrap(), 25);
        assert!(matches!(parse_size("0"), Err(Error::InvalidInput(_))));
        assert!(matches!(parse_size("201"), Err(Error::InvalidInput(_))));
        assert!(matches!(parse_size("2.5"), Err(Error::InvalidInput(_))));
        assert!(matches!(parse_size(""), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn parse_speed_rejects_bad_values() {
        assert_eq!(parse_speed("100").unwrap(), 100);
        assert!(matches!(parse_speed("0"), Err(Error::InvalidInput(_))));
        assert!(matches!(parse_speed("-3"), Err(Error::InvalidInput(_))));
        assert!(matches!(parse_speed("fast"), Err(Error::InvalidInput(_))));
    }
}

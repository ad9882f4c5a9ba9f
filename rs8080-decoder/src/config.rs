use crate::{ConfigError, LineFormat};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Settings read from a TOML file, every key is optional
///
/// ```toml
/// [decoder]
/// undocumented = true
/// origin = 0x0100
///
/// [output]
/// address = true
/// bytes = false
/// ```
#[derive(Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub decoder: DecoderConfig,
    pub output: OutputConfig,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DecoderConfig {
    pub undocumented: bool,
    pub origin: u16,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            undocumented: true,
            origin: 0,
        }
    }
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub address: bool,
    pub bytes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            address: true,
            bytes: true,
        }
    }
}

impl From<OutputConfig> for LineFormat {
    fn from(x: OutputConfig) -> Self {
        LineFormat {
            address: x.address,
            bytes: x.bytes,
        }
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

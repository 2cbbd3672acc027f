use serde::Deserialize;

use crate::engine::core::column::compression::CodecKind;
use crate::engine::core::column::compression::compression_codec::DEFAULT_ZSTD_LEVEL;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub format: FormatConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            stdout_level: "info".to_string(),
            file_level: "debug".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Block codec: "lz4" or "zstd". Readers must match the writer.
    pub compression: String,
    pub zstd_level: i32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            compression: "lz4".to_string(),
            zstd_level: DEFAULT_ZSTD_LEVEL,
        }
    }
}

impl FormatConfig {
    /// Unknown algorithm names fall back to LZ4.
    pub fn codec_kind(&self) -> CodecKind {
        CodecKind::from_parts(&self.compression, self.zstd_level).unwrap_or_else(|e| {
            tracing::warn!(
                target: "config::format",
                compression = %self.compression,
                error = %e,
                "Falling back to lz4"
            );
            CodecKind::Lz4
        })
    }
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("CESTUS_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Defaults, then the optional file at `config_path`, then `CESTUS__*` env vars.
pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(config::Environment::with_prefix("CESTUS").separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}

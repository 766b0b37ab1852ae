use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    #[serde(default = "default_checked_glyph")]
    pub checked_glyph: String,
    #[serde(default = "default_unchecked_glyph")]
    pub unchecked_glyph: String,
    /// `time` format description used for list names and the footer line
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            checked_glyph: default_checked_glyph(),
            unchecked_glyph: default_unchecked_glyph(),
            date_format: default_date_format(),
        }
    }
}

fn default_checked_glyph() -> String {
    grocery_shopping::render::DEFAULT_CHECKED_GLYPH.to_string()
}

fn default_unchecked_glyph() -> String {
    grocery_shopping::render::DEFAULT_UNCHECKED_GLYPH.to_string()
}

fn default_date_format() -> String {
    grocery_shopping::render::DEFAULT_DATE_FORMAT.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Directory receiving downloaded lists
    #[serde(default = "default_export_dir")]
    pub dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

fn default_export_dir() -> String {
    "exports".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (GROCERY__RENDER__DATE_FORMAT, etc.)
    /// 2. Config file specified by path, `CONFIG_PATH`, or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("render.checked_glyph", default_checked_glyph())?
            .set_default("render.unchecked_glyph", default_unchecked_glyph())?
            .set_default("render.date_format", default_date_format())?
            .set_default("export.dir", default_export_dir())?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.json", false)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional; defaults and environment still apply without it.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("GROCERY")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.render.checked_glyph.is_empty() || self.render.unchecked_glyph.is_empty() {
            return Err("Checkbox glyphs must not be empty".to_string());
        }
        if self.render.date_format.trim().is_empty() {
            return Err("Date format must not be empty".to_string());
        }
        if self.export.dir.trim().is_empty() {
            return Err("Export directory must not be empty".to_string());
        }
        Ok(())
    }
}

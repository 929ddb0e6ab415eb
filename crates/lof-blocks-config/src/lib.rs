use lof_blocks_engine::parameters::{DEFAULT_SEPARATOR, validated_separator};
use lof_blocks_engine::parsing::{normalize_key, parse_configuration_line, to_css_string};
use lof_blocks_engine::ParameterSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Outcome of changing the default separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeparatorUpdate {
    Accepted,
    /// The value was reserved; the separator is now [`DEFAULT_SEPARATOR`].
    Rejected { value: String },
}

impl SeparatorUpdate {
    /// Message to show the user, if any.
    pub fn notice(&self) -> Option<String> {
        match self {
            SeparatorUpdate::Accepted => None,
            SeparatorUpdate::Rejected { value } => Some(format!(
                "Invalid separator {value}. Please choose another one."
            )),
        }
    }
}

/// Document-wide defaults applied to every block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub block_settings: ParameterSet,
}

impl Settings {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut settings: Settings =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // A hand-edited file may carry a separator the UI would have refused
        let stored = settings.block_settings.separator.clone();
        if let Some(notice) = settings.set_separator(&stored).notice() {
            log::warn!("{}: {notice}", config_path.display());
        }

        Ok(Some(settings))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the settings at `config_path`, or the defaults if there is no file.
    pub fn load_or_default<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(config_path)?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/lof-blocks");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Sets the default separator, falling back to `::` for reserved tokens.
    pub fn set_separator(&mut self, value: &str) -> SeparatorUpdate {
        match validated_separator(value) {
            Ok(separator) => {
                self.block_settings.separator = separator;
                SeparatorUpdate::Accepted
            }
            Err(e) => {
                log::warn!("{e}");
                self.block_settings.separator = DEFAULT_SEPARATOR.to_string();
                SeparatorUpdate::Rejected { value: e.value }
            }
        }
    }

    /// Sets one style declaration, e.g. `set_style("font-size", "1.5em")`.
    pub fn set_style(&mut self, css_key: &str, value: &str) {
        self.block_settings
            .style
            .insert(normalize_key(css_key), value.trim().to_string());
    }

    pub fn style_value(&self, css_key: &str) -> Option<&str> {
        self.block_settings
            .style
            .get(&normalize_key(css_key))
            .map(String::as_str)
    }

    /// The default style as editable CSS declarations.
    pub fn raw_css(&self) -> String {
        to_css_string(&self.block_settings.style)
    }

    /// Replaces the default style with the declarations in `css`.
    ///
    /// A `separator` declaration in `css` updates the separator too; without
    /// one the current separator is kept.
    pub fn apply_raw_css(&mut self, css: &str) -> Option<SeparatorUpdate> {
        let parsed = parse_configuration_line(css);
        self.block_settings.style = parsed.style;
        parsed
            .separator
            .map(|separator| self.set_separator(&separator))
    }

    /// Restores every default.
    pub fn reset(&mut self) {
        self.block_settings = ParameterSet::default();
    }
}

use crate::error::AppError;
use glyph_match::{CatalogOptions, CodeSet, Palette, PaletteError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "ANSIFY_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Built-in palette name ("cga", "c64")
    #[serde(default = "default_palette")]
    pub palette: String,

    /// Custom palette as hex colors; overrides `palette` when set
    #[serde(default)]
    pub colors: Option<Vec<String>>,

    /// Text columns in the output
    #[serde(default = "default_columns")]
    pub columns: usize,

    /// Text rows; derived from the image aspect ratio when absent
    #[serde(default)]
    pub rows: Option<usize>,

    /// Character codes to use ("all", "printable", or "176-178,219")
    #[serde(default = "default_codes")]
    pub codes: String,

    /// Skip glyphs whose foreground and background are the same palette entry
    #[serde(default = "default_skip_equal")]
    pub skip_equal_color_pairs: bool,

    /// Matching threads (0 = one per core)
    #[serde(default)]
    pub threads: usize,
}

fn default_palette() -> String {
    "cga".to_string()
}

fn default_columns() -> usize {
    80
}

fn default_codes() -> String {
    "printable".to_string()
}

fn default_skip_equal() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            colors: None,
            columns: default_columns(),
            rows: None,
            codes: default_codes(),
            skip_equal_color_pairs: default_skip_equal(),
            threads: 0,
        }
    }
}

impl AppConfig {
    /// Config file from the command line, falling back to `ANSIFY_CONFIG`.
    pub fn resolve_path(cli: Option<PathBuf>) -> Option<PathBuf> {
        cli.or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
    }

    /// Load configuration, using defaults when no file is given or the file
    /// cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file, using defaults");
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        palette = %config.palette,
                        columns = config.columns,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        %e,
                        path = %path.display(),
                        "Failed to parse config, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    %e,
                    path = %path.display(),
                    "Failed to read config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// The configured palette: custom colors when given, else the built-in.
    pub fn palette(&self) -> Result<Palette, AppError> {
        match &self.colors {
            Some(colors) => {
                Palette::from_hex(colors.as_slice()).map_err(|e| AppError::Glyph(e.into()))
            }
            None => Palette::builtin(&self.palette).map_err(|e| match e {
                PaletteError::UnknownBuiltin(name) => AppError::UnknownPalette(name),
                other => AppError::Glyph(other.into()),
            }),
        }
    }

    /// The configured code set
    pub fn code_set(&self) -> Result<CodeSet, AppError> {
        Ok(self.codes.parse()?)
    }

    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions::new().skip_equal_color_pairs(self.skip_equal_color_pairs)
    }
}

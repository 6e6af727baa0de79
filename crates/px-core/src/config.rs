use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::aspect::slider_to_aspect;
use crate::request::ConversionRequest;

/// Bornes du slider de résolution (colonnes).
pub const WIDTH_RANGE: RangeInclusive<u32> = 30..=300;
/// Bornes du slider d'aspect, en centièmes.
pub const ASPECT_PERCENT_RANGE: RangeInclusive<u32> = 10..=100;
/// Bornes du tick de l'event loop, en millisecondes.
pub const TICK_MS_RANGE: RangeInclusive<u64> = 10..=1000;

/// Réglages initiaux de l'application. Lus au démarrage, jamais réécrits.
///
/// # Example
/// ```
/// use px_core::config::AppConfig;
/// let config = AppConfig::default();
/// assert_eq!(config.width, 200);
/// assert_eq!(config.aspect_percent, 30);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AppConfig {
    // === Conversion ===
    /// Initial character columns.
    pub width: u32,
    /// Initial aspect slider value (×0.01).
    pub aspect_percent: u32,
    /// Preset the aspect slider from the image's native ratio on load.
    pub auto_aspect: bool,

    // === UI ===
    /// Event-loop poll interval.
    pub tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 200,
            aspect_percent: 30,
            auto_aspect: true,
            tick_ms: 50,
        }
    }
}

impl AppConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.width = self.width.clamp(*WIDTH_RANGE.start(), *WIDTH_RANGE.end());
        self.aspect_percent = self
            .aspect_percent
            .clamp(*ASPECT_PERCENT_RANGE.start(), *ASPECT_PERCENT_RANGE.end());
        self.tick_ms = self
            .tick_ms
            .clamp(*TICK_MS_RANGE.start(), *TICK_MS_RANGE.end());
    }

    /// Request built from the current slider values.
    #[must_use]
    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(self.width, slider_to_aspect(self.aspect_percent))
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    convert: Option<ConvertSection>,
    ui: Option<UiSection>,
}

#[derive(Deserialize)]
struct ConvertSection {
    width: Option<u32>,
    aspect_percent: Option<u32>,
    auto_aspect: Option<bool>,
}

#[derive(Deserialize)]
struct UiSection {
    tick_ms: Option<u64>,
}

/// Parse TOML text and merge over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML for this schema.
///
/// # Example
/// ```
/// use px_core::config::parse_config;
/// let config = parse_config("[convert]\nwidth = 120\n").unwrap();
/// assert_eq!(config.width, 120);
/// assert_eq!(config.aspect_percent, 30);
/// ```
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = AppConfig::default();

    if let Some(c) = file.convert {
        if let Some(v) = c.width {
            config.width = v;
        }
        if let Some(v) = c.aspect_percent {
            config.aspect_percent = v;
        }
        if let Some(v) = c.auto_aspect {
            config.auto_aspect = v;
        }
    }
    if let Some(u) = file.ui {
        if let Some(v) = u.tick_ms {
            config.tick_ms = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use px_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Config invalide dans {}", path.display()))?;
    log::debug!("Config chargée depuis {}: {config:?}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = parse_config(
            "[convert]\nwidth = 5000\naspect_percent = 1\n[ui]\ntick_ms = 0\n",
        )
        .unwrap();
        assert_eq!(config.width, 300);
        assert_eq!(config.aspect_percent, 10);
        assert_eq!(config.tick_ms, 10);
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(parse_config("[convert]\nwidth = \"wide\"\n").is_err());
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[convert]\nauto_aspect = false\naspect_percent = 55").unwrap();
        let config = load_config(file.path()).unwrap();
        assert!(!config.auto_aspect);
        assert_eq!(config.aspect_percent, 55);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config(Path::new("/nonexistent/pixscii.toml")).is_err());
    }

    #[test]
    fn request_uses_hundredths() {
        let req = AppConfig::default().request();
        assert_eq!(req.target_width, 200);
        assert_eq!(req.resampled_height(), 60);
    }
}

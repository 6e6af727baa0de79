use std::path::PathBuf;

use clap::Parser;
use px_core::aspect::{optimal_slider_value, slider_to_aspect};
use px_core::config::AppConfig;
use px_core::request::ConversionRequest;

/// pixscii : image to ASCII art converter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image à charger au démarrage (PNG, JPEG, BMP, GIF).
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Colonnes de caractères. Défaut : config.
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Lignes par colonne (ex : 0.3). Exclusif avec --aspect-percent.
    #[arg(long, conflicts_with = "aspect_percent")]
    pub aspect: Option<f64>,

    /// Lignes par colonne, en centièmes (ex : 30).
    #[arg(long)]
    pub aspect_percent: Option<u32>,

    /// Déduire l'aspect du ratio natif de l'image (ignore --aspect*).
    #[arg(long, default_value_t = false)]
    pub auto_aspect: bool,

    /// Convertir une fois et écrire le texte, sans interface.
    #[arg(long, default_value_t = false)]
    pub print: bool,

    /// Fichier de sortie pour --print. Défaut : stdout.
    #[arg(short, long, requires = "print")]
    pub output: Option<PathBuf>,

    /// Fichier de configuration TOML.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Check flag combinations clap cannot express.
    ///
    /// # Errors
    /// Returns an error if `--print` is given without `--image`.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.print && self.image.is_none() {
            anyhow::bail!("--print requiert --image <chemin>.");
        }
        Ok(())
    }

    /// Fold CLI overrides into the loaded config (interactive start values).
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(p) = self.aspect_percent {
            config.aspect_percent = p;
        } else if let Some(a) = self.aspect {
            config.aspect_percent = (a * 100.0).round().max(0.0) as u32;
        }
        if self.auto_aspect {
            config.auto_aspect = true;
        }
        config.clamp_all();
    }

    /// Request for headless mode.
    ///
    /// Unlike the sliders, headless mode does not clamp: any positive width
    /// is passed through and the converter's guard decides. Priority:
    /// `--auto-aspect` (with a known native ratio) > `--aspect` >
    /// `--aspect-percent` > config.
    #[must_use]
    pub fn resolve_request(&self, config: &AppConfig, native_aspect: Option<f64>) -> ConversionRequest {
        let width = self.width.unwrap_or(config.width);
        let aspect = match (self.auto_aspect, native_aspect) {
            (true, Some(ratio)) => slider_to_aspect(optimal_slider_value(ratio)),
            _ => self
                .aspect
                .or_else(|| self.aspect_percent.map(slider_to_aspect))
                .unwrap_or_else(|| slider_to_aspect(config.aspect_percent)),
        };
        ConversionRequest::new(width, aspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["pixscii"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn defaults_come_from_config() {
        let cli = parse(&[]);
        let req = cli.resolve_request(&AppConfig::default(), None);
        assert_eq!(req.target_width, 200);
        assert!((req.aspect_ratio - 0.3).abs() < 1e-12);
    }

    #[test]
    fn explicit_aspect_wins_over_config() {
        let cli = parse(&["--width", "1000", "--aspect", "0.75"]);
        let req = cli.resolve_request(&AppConfig::default(), Some(2.0));
        assert_eq!(req.target_width, 1000);
        assert!((req.aspect_ratio - 0.75).abs() < 1e-12);
    }

    #[test]
    fn auto_aspect_uses_heuristic() {
        let cli = parse(&["--auto-aspect"]);
        let req = cli.resolve_request(&AppConfig::default(), Some(1.51));
        assert!((req.aspect_ratio - 0.70).abs() < 1e-12);
    }

    #[test]
    fn aspect_flags_conflict() {
        assert!(Cli::try_parse_from(["pixscii", "--aspect", "0.3", "--aspect-percent", "30"]).is_err());
    }

    #[test]
    fn output_requires_print() {
        assert!(Cli::try_parse_from(["pixscii", "--output", "out.txt"]).is_err());
    }

    #[test]
    fn print_requires_image() {
        assert!(parse(&["--print"]).validate().is_err());
        assert!(parse(&["--print", "--image", "a.png"]).validate().is_ok());
    }

    #[test]
    fn overrides_are_clamped_to_slider_ranges() {
        let mut config = AppConfig::default();
        parse(&["--width", "5", "--aspect", "3.0"]).apply_overrides(&mut config);
        assert_eq!(config.width, 30);
        assert_eq!(config.aspect_percent, 100);
    }
}

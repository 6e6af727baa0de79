use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use px_ascii::convert_path;
use px_core::art::AsciiArt;
use px_core::config::AppConfig;
use px_source::details::ImageDetails;

use crate::cli::Cli;

/// Conversion unique sans interface : `--print [--output fichier]`.
///
/// # Errors
/// Returns an error if the image cannot be read, the request is oversized,
/// or the output cannot be written. Nothing is written on failure.
pub fn run_print(cli: &Cli, config: &AppConfig) -> Result<()> {
    let Some(path) = cli.image.as_deref() else {
        anyhow::bail!("--print requiert --image <chemin>.");
    };
    let art = convert_for_print(cli, config, path)?;

    if let Some(out_path) = cli.output.as_deref() {
        std::fs::write(out_path, art.to_text())
            .with_context(|| format!("Impossible d'écrire {}", out_path.display()))?;
        log::info!("Art écrit dans {}", out_path.display());
    } else {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(art.to_text().as_bytes())
            .and_then(|()| lock.flush())
            .context("Écriture stdout impossible")?;
    }
    Ok(())
}

/// Resolve the request (probing the header for `--auto-aspect`) and convert.
///
/// # Errors
/// Propagates probe and conversion errors.
pub fn convert_for_print(cli: &Cli, config: &AppConfig, path: &Path) -> Result<AsciiArt> {
    let native = if cli.auto_aspect {
        Some(ImageDetails::probe(path)?.aspect())
    } else {
        None
    };
    let request = cli.resolve_request(config, native);
    log::debug!("Requête headless : {request:?}");
    convert_path(path, &request).with_context(|| format!("Conversion de {} échouée", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use px_ascii::ConvertError;

    fn write_png(dir: &Path, name: &str, w: u32, h: u32, level: u8) -> std::path::PathBuf {
        let path = dir.join(name);
        ::image::GrayImage::from_pixel(w, h, ::image::Luma([level]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn print_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let img = write_png(dir.path(), "black.png", 20, 20, 0);
        let out = dir.path().join("art.txt");
        let cli = Cli::try_parse_from([
            "pixscii",
            "--print",
            "--image",
            img.to_str().unwrap(),
            "--width",
            "10",
            "--aspect",
            "0.5",
            "--output",
            out.to_str().unwrap(),
        ])
        .unwrap();
        run_print(&cli, &AppConfig::default()).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text, "@@@@@@@@@@\n".repeat(5));
    }

    #[test]
    fn oversized_print_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let img = write_png(dir.path(), "white.png", 8, 8, 255);
        let out = dir.path().join("art.txt");
        let cli = Cli::try_parse_from([
            "pixscii",
            "--print",
            "--image",
            img.to_str().unwrap(),
            "--width",
            "2000",
            "--aspect",
            "1.0",
            "--output",
            out.to_str().unwrap(),
        ])
        .unwrap();
        let err = run_print(&cli, &AppConfig::default()).unwrap_err();
        let convert_err = err.downcast_ref::<ConvertError>();
        assert!(convert_err.is_some_and(ConvertError::is_oversized));
        assert!(!out.exists());
    }

    #[test]
    fn auto_aspect_probes_native_ratio() {
        let dir = tempfile::tempdir().unwrap();
        // 100×151 → ratio 1.51 → slider 70 → aspect 0.70
        let img = write_png(dir.path(), "tall.png", 100, 151, 255);
        let cli = Cli::try_parse_from([
            "pixscii",
            "--image",
            img.to_str().unwrap(),
            "--width",
            "40",
            "--auto-aspect",
        ])
        .unwrap();
        let art = convert_for_print(&cli, &AppConfig::default(), &img).unwrap();
        assert_eq!(art.height(), 28);
    }
}

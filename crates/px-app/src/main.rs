use anyhow::Result;
use clap::Parser;
use px_app::{app, cli, export};
use px_core::config::AppConfig;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    cli.validate()?;

    // 3. Charger la config
    let config = resolve_config(&cli)?;

    // Conversion unique, sans TUI
    if cli.print {
        return export::run_print(&cli, &config);
    }

    // 4. Appliquer les overrides CLI (bornés aux sliders)
    let mut config = config;
    cli.apply_overrides(&mut config);

    let mut app_instance = app::App::new(config);
    if let Some(ref path) = cli.image {
        app_instance.load(path);
    }

    // 5. Initialiser le terminal ratatui
    let terminal = ratatui::init();

    // 6. Boucle principale
    let result = app_instance.run(terminal);

    // 7. Restaurer le terminal (TOUJOURS, même en cas d'erreur)
    ratatui::restore();

    result
}

/// Missing config file → defaults; unreadable or invalid file → error.
fn resolve_config(cli: &cli::Cli) -> Result<AppConfig> {
    if cli.config.exists() {
        px_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(AppConfig::default())
    }
}

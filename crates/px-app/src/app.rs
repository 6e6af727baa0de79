use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use px_ascii::convert_path;
use px_core::art::AsciiArt;
use px_core::aspect::{optimal_slider_value, slider_to_aspect};
use px_core::config::{ASPECT_PERCENT_RANGE, AppConfig, WIDTH_RANGE};
use px_core::request::ConversionRequest;
use px_render::canvas::max_scroll;
use px_render::ui::{self, DrawContext, Focus, RenderState};
use px_render::widgets::{Slider, Status};
use px_source::details::ImageDetails;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::clipboard;

/// Extensions proposées dans le dialog d'ouverture.
const IMAGE_EXTS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Application state.
///
/// # Example
/// ```
/// use px_app::app::AppState;
/// let state = AppState::Running;
/// assert!(matches!(state, AppState::Running));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppState {
    /// L'application est en cours d'exécution normale.
    Running,
    /// Overlay d'aide affiché (touche ?).
    Help,
    /// Fenêtre « À propos » affichée (touche a).
    About,
    /// Fermeture de l'application. doit se terminer au prochain tour de boucle.
    Quitting,
}

/// One user intent. Each maps to exactly one controller operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Ask for a file through the native dialog.
    OpenImage,
    /// Run the conversion with the current sliders.
    Convert,
    /// Send the current art to the clipboard.
    Copy,
    /// Switch the focused slider.
    SwitchFocus,
    /// Move the focused slider.
    Adjust(i64),
    /// Re-apply the aspect heuristic to the loaded image.
    ResetAspect,
    /// Scroll the art viewport (columns, lines).
    Scroll(i32, i32),
    /// Toggle the help overlay.
    ToggleHelp,
    /// Show the about overlay.
    ShowAbout,
    /// Close the current overlay, or quit.
    Back,
    /// Quit.
    Quit,
}

/// Map a key press to an action, given the current state.
///
/// Overlays swallow every key except their close keys.
#[must_use]
pub fn action_for_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('o') => Some(Action::OpenImage),
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    match state {
        AppState::About => return Some(Action::Back),
        AppState::Help => {
            return matches!(key.code, KeyCode::Char('?' | 'q') | KeyCode::Esc).then_some(Action::Back);
        }
        AppState::Running | AppState::Quitting => {}
    }
    let action = match key.code {
        KeyCode::Char('o') => Action::OpenImage,
        KeyCode::Enter | KeyCode::Char('c') => Action::Convert,
        KeyCode::Char('y') => Action::Copy,
        KeyCode::Tab | KeyCode::BackTab => Action::SwitchFocus,
        KeyCode::Left => Action::Adjust(-1),
        KeyCode::Right => Action::Adjust(1),
        KeyCode::PageDown => Action::Adjust(-10),
        KeyCode::PageUp => Action::Adjust(10),
        KeyCode::Char('r') => Action::ResetAspect,
        KeyCode::Up | KeyCode::Char('k') => Action::Scroll(0, -1),
        KeyCode::Down | KeyCode::Char('j') => Action::Scroll(0, 1),
        KeyCode::Char('h') => Action::Scroll(-4, 0),
        KeyCode::Char('l') => Action::Scroll(4, 0),
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('a') => Action::ShowAbout,
        KeyCode::Esc => Action::Back,
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Image courante : chemin + métadonnées. Les pixels sont relus à chaque conversion.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    /// Metadata shown in the details panel.
    pub details: ImageDetails,
    /// Pre-formatted details lines.
    pub summary: Vec<String>,
}

/// Main application struct holding all state.
pub struct App {
    /// Current application state.
    pub state: AppState,
    /// Réglages de démarrage (jamais réécrits).
    pub config: AppConfig,
    /// Column count slider (30–300).
    pub resolution: Slider,
    /// Aspect slider in hundredths (10–100).
    pub aspect: Slider,
    /// Slider receiving ←/→.
    pub focus: Focus,
    /// Image sélectionnée, si présente.
    pub image: Option<LoadedImage>,
    /// Résultat de la dernière conversion réussie.
    pub art: Option<AsciiArt>,
    /// Status bar message.
    pub status: Option<Status>,
    /// Art scroll offset (column, line).
    pub scroll: (u16, u16),
    /// Taille du viewport art, mise à jour à chaque frame.
    pub viewport: (u16, u16),
    /// Flag: l'utilisateur a demandé l'ouverture du file dialog.
    pub open_requested: bool,
    /// Pending clipboard payload, flushed outside of ratatui's draw.
    pub clipboard_pending: Option<String>,
}

impl App {
    /// Create a new App instance from the start-up configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::Running,
            resolution: Slider::new("Resolution", WIDTH_RANGE, config.width),
            aspect: Slider::new("Aspect", ASPECT_PERCENT_RANGE, config.aspect_percent),
            config,
            focus: Focus::Resolution,
            image: None,
            art: None,
            status: None,
            scroll: (0, 0),
            viewport: (0, 0),
            open_requested: false,
            clipboard_pending: None,
        }
    }

    /// Request built from the current sliders.
    #[must_use]
    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(self.resolution.value(), slider_to_aspect(self.aspect.value()))
    }

    /// Main loop. Returns when the user quits.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be polled or drawn.
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let tick = Duration::from_millis(self.config.tick_ms);

        while self.state != AppState::Quitting {
            let size = terminal.size()?;
            self.viewport = ui::art_viewport(Rect::new(0, 0, size.width, size.height));
            self.clamp_scroll();

            terminal.draw(|frame| {
                let summary = self.image.as_ref().map(|i| i.summary.as_slice());
                let render_state = self.render_state();
                let ctx = DrawContext {
                    art: self.art.as_ref(),
                    details: summary,
                    resolution: &self.resolution,
                    aspect: &self.aspect,
                    focus: self.focus,
                    status: self.status.as_ref(),
                    scroll: self.scroll,
                    state: &render_state,
                };
                ui::draw(frame, &ctx);
            })?;

            if event::poll(tick)? {
                self.handle_event(&event::read()?);
            }

            // === File dialog si demandé ===
            if self.open_requested {
                self.open_requested = false;
                if let Some(path) = Self::pick_file(&mut terminal) {
                    self.load(&path);
                }
            }

            if let Some(text) = self.clipboard_pending.take() {
                let mut stdout = std::io::stdout();
                match clipboard::copy_to(&mut stdout, &text) {
                    Ok(()) => self.set_info("Copied to clipboard"),
                    Err(e) => self.set_error(format!("{e:#}")),
                }
            }
        }
        Ok(())
    }

    fn render_state(&self) -> RenderState {
        match self.state {
            AppState::Running => RenderState::Running,
            AppState::Help => RenderState::Help,
            AppState::About => RenderState::About,
            AppState::Quitting => RenderState::Quitting,
        }
    }

    /// Handle a terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key) = *event
            && let Some(action) = action_for_key(&self.state, key)
        {
            self.apply(action);
        }
    }

    /// Execute one action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::OpenImage => self.open_requested = true,
            Action::Convert => self.convert(),
            Action::Copy => self.copy(),
            Action::SwitchFocus => self.focus = self.focus.toggled(),
            Action::Adjust(delta) => match self.focus {
                Focus::Resolution => self.resolution.nudge(delta),
                Focus::Aspect => self.aspect.nudge(delta),
            },
            Action::ResetAspect => self.reset_aspect(),
            Action::Scroll(dx, dy) => self.scroll_by(dx, dy),
            Action::ToggleHelp => {
                self.state = if self.state == AppState::Help {
                    AppState::Running
                } else {
                    AppState::Help
                };
            }
            Action::ShowAbout => self.state = AppState::About,
            Action::Back => {
                self.state = match self.state {
                    AppState::Help | AppState::About => AppState::Running,
                    AppState::Running | AppState::Quitting => AppState::Quitting,
                };
            }
            Action::Quit => self.state = AppState::Quitting,
        }
    }

    /// Select an image: read its header and preset the aspect slider.
    ///
    /// The previous art is cleared; pixels are decoded at conversion time.
    pub fn load(&mut self, path: &Path) {
        match ImageDetails::probe(path) {
            Ok(details) => {
                let summary = details.summary_lines().to_vec();
                if self.config.auto_aspect {
                    self.aspect.set(optimal_slider_value(details.aspect()));
                }
                log::info!("Image sélectionnée : {}", path.display());
                self.set_info(format!("Loaded {}", details.display_name()));
                self.image = Some(LoadedImage { details, summary });
                self.art = None;
                self.scroll = (0, 0);
            }
            Err(e) => {
                log::info!("Chargement impossible : {e:#}");
                self.set_error(format!("{e:#}"));
            }
        }
    }

    /// Convert the selected image with the current sliders.
    ///
    /// On failure the previous art is cleared and the error shown; the
    /// user adjusts and retries.
    pub fn convert(&mut self) {
        let Some(path) = self.image.as_ref().map(|i| i.details.path.clone()) else {
            self.set_info("Load an image first (o)");
            return;
        };
        let request = self.request();
        match convert_path(&path, &request) {
            Ok(art) => {
                self.set_info(format!("Converted to {}×{}", art.width(), art.height()));
                self.art = Some(art);
                self.scroll = (0, 0);
            }
            Err(e) => {
                self.art = None;
                self.set_error(e.to_string());
            }
        }
    }

    fn copy(&mut self) {
        match self.art.as_ref() {
            Some(art) => self.clipboard_pending = Some(art.to_text()),
            None => self.set_info("Nothing to copy, convert first"),
        }
    }

    fn reset_aspect(&mut self) {
        if let Some(image) = self.image.as_ref() {
            let value = optimal_slider_value(image.details.aspect());
            self.aspect.set(value);
            self.set_info(format!("Aspect reset to {:.2}", slider_to_aspect(self.aspect.value())));
        }
    }

    fn art_size(&self) -> (usize, usize) {
        self.art
            .as_ref()
            .map_or((0, 0), |a| (a.width() as usize, a.height()))
    }

    fn scroll_by(&mut self, dx: i32, dy: i32) {
        let shift = |v: u16, d: i32| (i32::from(v) + d).clamp(0, i32::from(u16::MAX)) as u16;
        self.scroll = (shift(self.scroll.0, dx), shift(self.scroll.1, dy));
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let (mx, my) = max_scroll(self.art_size(), self.viewport);
        self.scroll = (self.scroll.0.min(mx), self.scroll.1.min(my));
    }

    fn set_info(&mut self, msg: impl Into<String>) {
        self.status = Some(Status::Info(msg.into()));
    }

    fn set_error(&mut self, msg: impl Into<String>) {
        self.status = Some(Status::Error(msg.into()));
    }

    /// Suspend le TUI, ouvre un dialog natif, restaure le TUI. Retourne le path choisi.
    fn pick_file(terminal: &mut DefaultTerminal) -> Option<PathBuf> {
        crossterm::terminal::disable_raw_mode().ok();
        crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen).ok();

        let picked = rfd::FileDialog::new()
            .set_title("Open Image \u{2014} pixscii")
            .add_filter("Images", IMAGE_EXTS)
            .pick_file();

        crossterm::terminal::enable_raw_mode().ok();
        crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen).ok();
        terminal.clear().ok();

        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn png(dir: &Path, name: &str, w: u32, h: u32, level: u8) -> PathBuf {
        let path = dir.join(name);
        ::image::GrayImage::from_pixel(w, h, ::image::Luma([level]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn keys_map_to_actions() {
        let s = AppState::Running;
        assert_eq!(action_for_key(&s, key(KeyCode::Enter)), Some(Action::Convert));
        assert_eq!(action_for_key(&s, key(KeyCode::Char('y'))), Some(Action::Copy));
        assert_eq!(action_for_key(&s, key(KeyCode::PageUp)), Some(Action::Adjust(10)));
        assert_eq!(action_for_key(&s, key(KeyCode::Char('x'))), None);
        let ctrl_o = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(&s, ctrl_o), Some(Action::OpenImage));
    }

    #[test]
    fn overlays_swallow_keys() {
        assert_eq!(action_for_key(&AppState::Help, key(KeyCode::Enter)), None);
        assert_eq!(action_for_key(&AppState::Help, key(KeyCode::Esc)), Some(Action::Back));
        assert_eq!(action_for_key(&AppState::About, key(KeyCode::Enter)), Some(Action::Back));
    }

    #[test]
    fn esc_closes_overlay_then_quits() {
        let mut app = App::new(AppConfig::default());
        app.apply(Action::ToggleHelp);
        assert_eq!(app.state, AppState::Help);
        app.apply(Action::Back);
        assert_eq!(app.state, AppState::Running);
        app.apply(Action::Back);
        assert_eq!(app.state, AppState::Quitting);
    }

    #[test]
    fn adjust_moves_focused_slider_only() {
        let mut app = App::new(AppConfig::default());
        app.apply(Action::Adjust(10));
        assert_eq!(app.resolution.value(), 210);
        assert_eq!(app.aspect.value(), 30);
        app.apply(Action::SwitchFocus);
        app.apply(Action::Adjust(-100));
        assert_eq!(app.aspect.value(), 10);
    }

    #[test]
    fn convert_without_image_is_a_hint() {
        let mut app = App::new(AppConfig::default());
        app.apply(Action::Convert);
        assert!(app.art.is_none());
        assert!(matches!(app.status, Some(Status::Info(_))));
    }

    #[test]
    fn load_presets_aspect_and_convert_fills_art() {
        let dir = tempfile::tempdir().unwrap();
        let path = png(dir.path(), "tall.png", 100, 151, 0);
        let mut app = App::new(AppConfig::default());
        app.load(&path);
        assert_eq!(app.aspect.value(), 70);
        app.resolution.set(40);
        app.apply(Action::Convert);
        let art = app.art.as_ref().unwrap();
        assert_eq!((art.width(), art.height()), (40, 28));
        assert!(art.lines().all(|l| l.chars().all(|c| c == '@')));
    }

    #[test]
    fn auto_aspect_off_keeps_slider() {
        let dir = tempfile::tempdir().unwrap();
        let path = png(dir.path(), "tall.png", 100, 151, 0);
        let config = AppConfig {
            auto_aspect: false,
            ..AppConfig::default()
        };
        let mut app = App::new(config);
        app.load(&path);
        assert_eq!(app.aspect.value(), 30);
        app.apply(Action::ResetAspect);
        assert_eq!(app.aspect.value(), 70);
    }

    #[test]
    fn failed_conversion_clears_art_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = png(dir.path(), "img.png", 10, 10, 200);
        let mut app = App::new(AppConfig::default());
        app.load(&path);
        app.apply(Action::Convert);
        assert!(app.art.is_some());

        std::fs::write(&path, b"corrupted").unwrap();
        app.apply(Action::Convert);
        assert!(app.art.is_none());
        assert!(matches!(app.status, Some(Status::Error(_))));
    }

    #[test]
    fn load_failure_keeps_previous_image() {
        let mut app = App::new(AppConfig::default());
        app.load(Path::new("/nonexistent/none.png"));
        assert!(app.image.is_none());
        assert!(matches!(app.status, Some(Status::Error(_))));
    }

    #[test]
    fn copy_queues_art_text() {
        let mut app = App::new(AppConfig::default());
        app.apply(Action::Copy);
        assert!(app.clipboard_pending.is_none());
        app.art = AsciiArt::from_rows(2, vec!["@ ".into()]).ok();
        app.apply(Action::Copy);
        assert_eq!(app.clipboard_pending.as_deref(), Some("@ \n"));
    }

    #[test]
    fn scroll_is_bounded_by_art_and_viewport() {
        let mut app = App::new(AppConfig::default());
        app.art = AsciiArt::from_rows(10, vec!["@".repeat(10); 6]).ok();
        app.viewport = (4, 4);
        app.apply(Action::Scroll(100, 100));
        assert_eq!(app.scroll, (6, 2));
        app.apply(Action::Scroll(-100, -100));
        assert_eq!(app.scroll, (0, 0));
    }
}

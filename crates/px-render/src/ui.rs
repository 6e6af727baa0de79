use px_core::art::AsciiArt;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::canvas;
use crate::widgets::{Slider, Status};

/// Height of the top panel (details + sliders), borders included.
pub const HEADER_HEIGHT: u16 = 6;
/// Height of the status bar.
pub const STATUS_HEIGHT: u16 = 1;
/// Width of the slider bar, in cells.
const BAR_WIDTH: usize = 24;

/// Application state enum (mirrored for rendering decisions).
///
/// # Example
/// ```
/// use px_render::ui::RenderState;
/// let state = RenderState::Running;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// Normal running state.
    Running,
    /// Help overlay visible.
    Help,
    /// About overlay visible.
    About,
    /// Quitting (should not reach draw).
    Quitting,
}

/// Which slider receives ←/→.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Column count slider.
    #[default]
    Resolution,
    /// Aspect slider (×0.01).
    Aspect,
}

impl Focus {
    /// The other slider.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Resolution => Self::Aspect,
            Self::Aspect => Self::Resolution,
        }
    }
}

/// Everything `draw` needs, borrowed from the app for one frame.
pub struct DrawContext<'a> {
    /// Last successful conversion, if any.
    pub art: Option<&'a AsciiArt>,
    /// Lines of the image details panel; `None` before the first load.
    pub details: Option<&'a [String]>,
    /// Column count slider.
    pub resolution: &'a Slider,
    /// Aspect slider.
    pub aspect: &'a Slider,
    /// Focused slider.
    pub focus: Focus,
    /// Status bar message.
    pub status: Option<&'a Status>,
    /// Art scroll offset (column, line).
    pub scroll: (u16, u16),
    /// Overlay selection.
    pub state: &'a RenderState,
}

/// Split the screen: [header | art | status].
#[must_use]
pub fn layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Inner size of the art viewport for a given terminal size.
#[must_use]
pub fn art_viewport(area: Rect) -> (u16, u16) {
    let (_, art_area, _) = layout(area);
    let inner = Block::default().borders(Borders::ALL).inner(art_area);
    (inner.width, inner.height)
}

/// Draw the full UI: header + art canvas + status bar.
pub fn draw(frame: &mut Frame, ctx: &DrawContext<'_>) {
    let area = frame.area();
    let (header, art_area, status_area) = layout(area);

    let h_chunks = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(header);
    draw_details(frame, h_chunks[0], ctx.details);
    draw_sliders(frame, h_chunks[1], ctx);
    draw_art(frame, art_area, ctx.art, ctx.scroll);
    draw_status(frame, status_area, ctx.status);

    match ctx.state {
        RenderState::Help => draw_help_overlay(frame, area),
        RenderState::About => draw_about_overlay(frame, area),
        RenderState::Running | RenderState::Quitting => {}
    }
}

fn draw_details(frame: &mut Frame, area: Rect, details: Option<&[String]>) {
    let lines: Vec<Line> = match details {
        Some(lines) => lines.iter().map(|l| Line::from(format!(" {l}"))).collect(),
        None => vec![Line::from(Span::styled(
            " No image: press o to load",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Image "));
    frame.render_widget(panel, area);
}

fn draw_sliders(frame: &mut Frame, area: Rect, ctx: &DrawContext<'_>) {
    let aspect_label = format!("{:.2}", f64::from(ctx.aspect.value()) / 100.0);
    let lines = vec![
        slider_line(ctx.resolution, ctx.focus == Focus::Resolution, ctx.resolution.value().to_string()),
        slider_line(ctx.aspect, ctx.focus == Focus::Aspect, aspect_label),
        Line::from(Span::styled(
            " Tab switch · ←/→ adjust · Enter convert",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Settings "));
    frame.render_widget(panel, area);
}

fn slider_line(slider: &Slider, focused: bool, value: String) -> Line<'static> {
    let marker = if focused { "▶" } else { " " };
    let style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{marker}{:<11}", slider.label()), style),
        Span::styled(slider.bar(BAR_WIDTH), Style::default().fg(Color::Cyan)),
        Span::raw(format!(" {value}")),
    ])
}

fn draw_art(frame: &mut Frame, area: Rect, art: Option<&AsciiArt>, scroll: (u16, u16)) {
    let title = match art {
        Some(a) => format!(" ASCII {}×{} ", a.width(), a.height()),
        None => " ASCII ".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if let Some(art) = art {
        canvas::render_art(frame.buffer_mut(), inner, art, scroll);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, status: Option<&Status>) {
    let line = match status {
        Some(Status::Error(msg)) => Line::from(Span::styled(
            format!(" ✖ {msg}"),
            Style::default().fg(Color::Red),
        )),
        Some(Status::Info(msg)) => Line::from(Span::styled(
            format!(" {msg}"),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(Span::styled(
            " ? = help",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

fn draw_overlay(frame: &mut Frame, area: Rect, title: &str, text: Vec<Line<'_>>, width: u16) {
    let height = text.len() as u16 + 2;
    let overlay_area = centered(area, width, height);
    let overlay = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().bg(Color::Black).fg(Color::White)),
    );
    frame.render_widget(Clear, overlay_area);
    frame.render_widget(overlay, overlay_area);
}

/// Draw the help overlay with all keybindings.
fn draw_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            " pixscii: controls ",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(" o / Ctrl+O  Load image"),
        Line::from(" Enter / c   Convert"),
        Line::from(" y           Copy to clipboard"),
        Line::from(" Tab         Switch slider"),
        Line::from(" ←/→         Adjust ±1"),
        Line::from(" PgUp/PgDn   Adjust ±10"),
        Line::from(" r           Reset aspect from image"),
        Line::from(" ↑/↓ h/l     Scroll art"),
        Line::from(" a           About"),
        Line::from(" ?           Toggle help"),
        Line::from(" q/Esc       Quit"),
        Line::from(""),
        Line::from(Span::styled(
            " Press ? or Esc to close ",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    draw_overlay(frame, area, " Help ", help_text, 38);
}

fn draw_about_overlay(frame: &mut Frame, area: Rect) {
    let about_text = vec![
        Line::from(Span::styled(
            format!(" pixscii {} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(" Converts images to ASCII art using"),
        Line::from(" a 10-level ramp: @%#*+=-:. "),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to close ",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    draw_overlay(frame, area, " About ", about_text, 40);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_excludes_header_status_and_borders() {
        let (w, h) = art_viewport(Rect::new(0, 0, 100, 40));
        assert_eq!(w, 98);
        assert_eq!(h, 40 - HEADER_HEIGHT - STATUS_HEIGHT - 2);
    }

    #[test]
    fn focus_toggles_between_sliders() {
        assert_eq!(Focus::Resolution.toggled(), Focus::Aspect);
        assert_eq!(Focus::Aspect.toggled(), Focus::Resolution);
    }

    #[test]
    fn centered_never_exceeds_area() {
        let r = centered(Rect::new(0, 0, 20, 5), 38, 17);
        assert_eq!((r.width, r.height), (20, 5));
    }
}

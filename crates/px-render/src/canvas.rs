use px_core::art::AsciiArt;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Écrit directement un `AsciiArt` dans un `ratatui::Buffer`.
///
/// `scroll` is the (column, line) of the art shown at the top-left corner
/// of `area`; whatever does not fit is clipped.
pub fn render_art(buf: &mut Buffer, area: Rect, art: &AsciiArt, scroll: (u16, u16)) {
    let (sx, sy) = (usize::from(scroll.0), usize::from(scroll.1));
    for (row, line) in art.lines().skip(sy).take(usize::from(area.height)).enumerate() {
        let bytes = line.as_bytes();
        for col in 0..usize::from(area.width) {
            let Some(&b) = bytes.get(sx + col) else {
                break;
            };
            if let Some(cell) = buf.cell_mut((area.x + col as u16, area.y + row as u16)) {
                cell.set_char(char::from(b));
            }
        }
    }
}

/// Largest scroll offset that still fills `area`, per axis.
///
/// # Example
/// ```
/// use px_render::canvas::max_scroll;
/// assert_eq!(max_scroll((200, 60), (80, 24)), (120, 36));
/// assert_eq!(max_scroll((40, 10), (80, 24)), (0, 0));
/// ```
#[must_use]
pub fn max_scroll(art_size: (usize, usize), view: (u16, u16)) -> (u16, u16) {
    let clamp = |len: usize, view: u16| {
        len.saturating_sub(usize::from(view))
            .min(usize::from(u16::MAX)) as u16
    };
    (clamp(art_size.0, view.0), clamp(art_size.1, view.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(buf: &Buffer, x: u16, y: u16) -> &str {
        buf[(x, y)].symbol()
    }

    fn sample() -> AsciiArt {
        AsciiArt::from_rows(4, vec!["@%#*".into(), "+=-:".into(), ".   ".into()]).unwrap_or_default()
    }

    #[test]
    fn draws_top_left_without_scroll() {
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        render_art(&mut buf, area, &sample(), (0, 0));
        assert_eq!(sym(&buf, 0, 0), "@");
        assert_eq!(sym(&buf, 2, 0), "#");
        assert_eq!(sym(&buf, 0, 1), "+");
    }

    #[test]
    fn scroll_shifts_the_window() {
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        render_art(&mut buf, area, &sample(), (2, 1));
        assert_eq!(sym(&buf, 0, 0), "-");
        assert_eq!(sym(&buf, 1, 0), ":");
        assert_eq!(sym(&buf, 0, 1), " ");
    }

    #[test]
    fn offset_area_is_respected() {
        let area = Rect::new(5, 3, 4, 3);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 8));
        render_art(&mut buf, area, &sample(), (0, 0));
        assert_eq!(sym(&buf, 5, 3), "@");
        assert_eq!(sym(&buf, 8, 4), ":");
    }
}

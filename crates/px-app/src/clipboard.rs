//! Export presse-papier via la séquence OSC 52.
//!
//! The terminal emulator owns the system clipboard; we only hand it a
//! base64 payload. Works over SSH and inside tmux (with `set-clipboard on`).

use std::io::Write;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose;

/// Payload size past which some terminals silently drop OSC 52.
pub const OSC52_SOFT_LIMIT: usize = 100_000;

/// Build the OSC 52 escape sequence that sets the clipboard to `text`.
///
/// # Example
/// ```
/// use px_app::clipboard::osc52_sequence;
/// assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
/// ```
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    let payload = general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{payload}\x07")
}

/// Write `text` to the clipboard through `out`.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn copy_to<W: Write>(out: &mut W, text: &str) -> Result<()> {
    let seq = osc52_sequence(text);
    if seq.len() > OSC52_SOFT_LIMIT {
        log::warn!(
            "Payload OSC 52 de {} octets : certains terminaux l'ignorent",
            seq.len()
        );
    }
    out.write_all(seq.as_bytes())
        .and_then(|()| out.flush())
        .context("Écriture OSC 52 impossible")?;
    log::info!("{} octets copiés dans le presse-papier", text.len());
    Ok(())
}

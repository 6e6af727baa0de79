use std::fmt;

use crate::error::CoreError;
use crate::ramp::AsciiRamp;

/// Résultat d'une conversion : lignes de texte de largeur fixe.
///
/// Invariants: every line is exactly `width` characters, and every
/// character belongs to the ramp.
///
/// # Example
/// ```
/// use px_core::art::AsciiArt;
/// let art = AsciiArt::from_rows(3, vec!["@%#".into(), "   ".into()]).unwrap();
/// assert_eq!(art.height(), 2);
/// assert_eq!(art.to_text(), "@%#\n   \n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsciiArt {
    rows: Vec<String>,
    width: u32,
}

impl AsciiArt {
    /// Art with zero lines.
    #[must_use]
    pub fn empty(width: u32) -> Self {
        Self {
            rows: Vec::new(),
            width,
        }
    }

    /// Build from rows, checking width and ramp membership.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if a row has the wrong length
    /// or contains a character outside the ramp.
    pub fn from_rows(width: u32, rows: Vec<String>) -> Result<Self, CoreError> {
        let height = rows.len() as u32;
        for row in &rows {
            let ok = row.chars().count() == width as usize && row.chars().all(AsciiRamp::contains);
            if !ok {
                return Err(CoreError::InvalidDimensions { width, height });
            }
        }
        Ok(Self { rows, width })
    }

    /// Columns per line.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over lines, without terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(String::as_str)
    }

    /// Character at (x, y), if in range.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y)?.as_bytes().get(x).map(|&b| char::from(b))
    }

    /// Texte complet, chaque ligne terminée par `\n`.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            f.write_str(row)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}

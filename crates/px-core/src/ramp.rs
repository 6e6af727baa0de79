/// 10 caractères, du plus dense au plus clair.
pub const ASCII_RAMP: &str = "@%#*+=-:. ";

/// Ramp as an array, index 0 = darkest.
pub const RAMP_CHARS: [char; 10] = ['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Luminance values per bucket. The last bucket absorbs 225..=255.
pub const BUCKET_WIDTH: u8 = 25;

/// Lookup table mapping luminance [0..255] → ramp character.
///
/// Pre-computed once for O(1) per-pixel cost.
///
/// # Example
/// ```
/// use px_core::ramp::AsciiRamp;
/// let ramp = AsciiRamp::new();
/// assert_eq!(ramp.map(0), '@');
/// assert_eq!(ramp.map(255), ' ');
/// ```
#[derive(Clone)]
pub struct AsciiRamp {
    lut: [char; 256],
}

impl AsciiRamp {
    /// Build the LUT from [`ASCII_RAMP`].
    #[must_use]
    pub fn new() -> Self {
        let chars: Vec<char> = ASCII_RAMP.chars().collect();
        let mut lut = [' '; 256];
        for (lum, slot) in lut.iter_mut().enumerate() {
            if let Some(&ch) = chars.get(Self::index(lum as u8)) {
                *slot = ch;
            }
        }
        Self { lut }
    }

    /// Bucket index for a luminance value: `min(v / 25, 9)`.
    ///
    /// # Example
    /// ```
    /// use px_core::ramp::AsciiRamp;
    /// assert_eq!(AsciiRamp::index(24), 0);
    /// assert_eq!(AsciiRamp::index(25), 1);
    /// assert_eq!(AsciiRamp::index(255), 9);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn index(luminance: u8) -> usize {
        usize::from(luminance / BUCKET_WIDTH).min(RAMP_CHARS.len() - 1)
    }

    /// Map a luminance value [0..255] to a character.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }

    /// Position of `ch` in the ramp, `None` if it is not a ramp character.
    #[must_use]
    pub fn position(ch: char) -> Option<usize> {
        ASCII_RAMP.chars().position(|c| c == ch)
    }

    /// True if `ch` belongs to the ramp.
    #[must_use]
    pub fn contains(ch: char) -> bool {
        Self::position(ch).is_some()
    }
}

impl Default for AsciiRamp {
    fn default() -> Self {
        Self::new()
    }
}

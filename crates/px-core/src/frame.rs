use crate::error::CoreError;

/// Bitmap décodé, immuable après construction.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel.
///
/// # Example
/// ```
/// use px_core::frame::SourceImage;
/// let img = SourceImage::solid(4, 2, (255, 255, 255));
/// assert_eq!(img.data().len(), 4 * 2 * 4);
/// assert_eq!(img.luminance(3, 1), 255);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl SourceImage {
    /// Wrap an RGBA8 buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if a dimension is zero or the
    /// buffer length is not `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        let expected = u64::from(width) * u64::from(height) * 4;
        if width == 0 || height == 0 || data.len() as u64 != expected {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Image uniforme, opaque. Utile pour les tests et les placeholders.
    ///
    /// Zero dimensions are bumped to 1.
    #[must_use]
    pub fn solid(width: u32, height: u32, rgb: (u8, u8, u8)) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let (r, g, b) = rgb;
        let data = [r, g, b, 255].repeat((width * height) as usize);
        Self {
            data,
            width,
            height,
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Luminance ITU-R 601 du pixel (x, y).
    #[inline(always)]
    #[must_use]
    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        let (r, g, b, _) = self.pixel(x, y);
        luma(r, g, b)
    }
}

/// Luma ITU-R 601-2 : `(299 R + 587 G + 114 B) / 1000`, arrondi au plus proche, in [0, 255].
///
/// # Example
/// ```
/// use px_core::frame::luma;
/// assert_eq!(luma(0, 0, 0), 0);
/// assert_eq!(luma(255, 255, 255), 255);
/// assert_eq!(luma(128, 128, 128), 128);
/// ```
#[inline(always)]
#[must_use]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114 + 500) / 1000) as u8
}

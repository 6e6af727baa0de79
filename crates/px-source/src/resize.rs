use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};
use px_core::frame::SourceImage;

use crate::error::SourceError;

/// Resizer réutilisable wrappant fast_image_resize.
///
/// Filtre bilinéaire : conserve l'ordre des luminances et les aplats
/// uniformes.
///
/// # Example
/// ```
/// use px_source::resize::Resizer;
/// use px_core::frame::SourceImage;
/// let mut r = Resizer::new();
/// let src = SourceImage::solid(100, 100, (0, 0, 0));
/// let dst = r.resize(&src, 50, 20).unwrap();
/// assert_eq!((dst.width(), dst.height()), (50, 20));
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch copy of the source (fast_image_resize wants a mutable slice).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new bilinear resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear)),
            src_buf: Vec::new(),
        }
    }

    /// Resample `src` to exactly `width × height`.
    ///
    /// # Errors
    /// Returns [`SourceError::Core`] for a zero target dimension and
    /// [`SourceError::Resize`] if fast_image_resize rejects the buffers.
    pub fn resize(
        &mut self,
        src: &SourceImage,
        width: u32,
        height: u32,
    ) -> Result<SourceImage, SourceError> {
        if width == 0 || height == 0 {
            return Err(px_core::CoreError::InvalidDimensions { width, height }.into());
        }
        if src.width() == width && src.height() == height {
            return Ok(src.clone());
        }

        self.src_buf.clear();
        self.src_buf.extend_from_slice(src.data());

        let src_image =
            Image::from_slice_u8(src.width(), src.height(), &mut self.src_buf, PixelType::U8x4)
                .map_err(|e| SourceError::Resize(format!("source invalide : {e}")))?;

        let mut dst_image = Image::new(width, height, PixelType::U8x4);

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .map_err(|e| SourceError::Resize(e.to_string()))?;

        Ok(SourceImage::from_rgba(width, height, dst_image.into_vec())?)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

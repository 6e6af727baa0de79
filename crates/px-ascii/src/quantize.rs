use std::path::Path;

use px_core::art::AsciiArt;
use px_core::frame::SourceImage;
use px_core::ramp::AsciiRamp;
use px_core::request::ConversionRequest;
use px_source::image::load_image;
use px_source::resize::Resizer;

use crate::error::ConvertError;

/// Convertit une image en art ASCII selon `request`.
///
/// The image is resampled to `target_width × round(aspect_ratio * target_width)`
/// pixels, then each pixel's luminance picks a ramp character, darkest
/// first. Oversized requests are rejected before any resampling.
///
/// # Errors
/// - [`ConvertError::Request`] wrapping `OversizedRequest` when
///   `height * width > 300_000`, or `InvalidRequest` for a zero width or a
///   non-positive aspect.
/// - [`ConvertError::Source`] if the resampler fails.
///
/// # Example
/// ```
/// use px_core::frame::SourceImage;
/// use px_core::request::ConversionRequest;
/// use px_ascii::convert;
///
/// let img = SourceImage::solid(64, 64, (0, 0, 0));
/// let art = convert(&img, &ConversionRequest::new(8, 0.5)).unwrap();
/// assert_eq!(art.to_text(), "@@@@@@@@\n@@@@@@@@\n@@@@@@@@\n@@@@@@@@\n");
/// ```
pub fn convert(image: &SourceImage, request: &ConversionRequest) -> Result<AsciiArt, ConvertError> {
    if let Err(e) = request.validate() {
        log::info!("Conversion refusée : {e}");
        return Err(e.into());
    }

    let width = request.target_width;
    // validate() guarantees height * width <= MAX_PIXELS, so it fits in u32.
    let height = request.resampled_height() as u32;
    if height == 0 {
        log::debug!("Hauteur arrondie à 0 pour {request:?}, art vide");
        return Ok(AsciiArt::empty(width));
    }

    let resized = Resizer::new().resize(image, width, height)?;
    let ramp = AsciiRamp::new();

    let mut rows = Vec::with_capacity(height as usize);
    for y in 0..height {
        let row: String = (0..width).map(|x| ramp.map(resized.luminance(x, y))).collect();
        rows.push(row);
    }

    log::debug!(
        "Conversion {}×{} → {width}×{height}",
        image.width(),
        image.height()
    );
    Ok(AsciiArt::from_rows(width, rows)?)
}

/// Decode `path` then [`convert`] it. The bitmap is dropped afterwards.
///
/// The request is checked first so an oversized request never touches the
/// file.
///
/// # Errors
/// Same as [`convert`], plus [`ConvertError::Source`] for decode failures.
pub fn convert_path(path: &Path, request: &ConversionRequest) -> Result<AsciiArt, ConvertError> {
    request.validate()?;
    let image = load_image(path)?;
    convert(&image, request)
}

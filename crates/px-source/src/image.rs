use std::path::Path;

use px_core::frame::SourceImage;

use crate::error::SourceError;

/// Décode une image depuis le disque en RGBA8.
///
/// Any format enabled on the `image` crate is accepted; color depth and
/// alpha are normalised to RGBA8.
///
/// # Errors
/// Returns [`SourceError::Decode`] if the path is unreadable or not an image.
///
/// # Example
/// ```no_run
/// use px_source::image::load_image;
/// use std::path::Path;
/// let img = load_image(Path::new("photo.png")).unwrap();
/// println!("{}x{}", img.width(), img.height());
/// ```
pub fn load_image(path: &Path) -> Result<SourceImage, SourceError> {
    let img = ::image::open(path).map_err(|source| SourceError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Image chargée : {} ({width}×{height})", path.display());
    Ok(SourceImage::from_rgba(width, height, rgba.into_raw())?)
}

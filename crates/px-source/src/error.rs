use std::path::PathBuf;

use px_core::CoreError;
use thiserror::Error;

/// Errors originating from the source module.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The file could not be opened or is not a decodable image.
    #[error("Impossible de charger {}: {source}", .path.display())]
    Decode {
        /// Path that failed.
        path: PathBuf,
        /// Underlying codec error, unchanged.
        #[source]
        source: ::image::ImageError,
    },

    /// Resampling failed inside fast_image_resize.
    #[error("Erreur de redimensionnement : {0}")]
    Resize(String),

    /// Invalid bitmap produced or requested.
    #[error(transparent)]
    Core(#[from] CoreError),
}

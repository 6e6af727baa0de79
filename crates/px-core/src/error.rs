use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The requested character grid exceeds the pixel guard.
    ///
    /// Recoverable: the caller reduces width or aspect ratio and retries.
    #[error(
        "Requested size is too large ({width}×{height} = {pixels} px, max {max}). \
         Please reduce the resolution or aspect ratio."
    )]
    OversizedRequest {
        /// Requested column count.
        width: u32,
        /// Rounded row count.
        height: u64,
        /// `width * height`.
        pixels: u64,
        /// Guard value.
        max: u64,
    },

    /// Width or aspect ratio outside of their domain.
    #[error("Requête invalide : {0}")]
    InvalidRequest(String),

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}

impl CoreError {
    /// True for errors the user can fix by moving a slider.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::OversizedRequest { .. } | Self::InvalidRequest(_))
    }
}

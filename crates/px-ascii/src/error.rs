use px_core::CoreError;
use px_source::SourceError;
use thiserror::Error;

/// Errors returned by a conversion. No partial output accompanies any of them.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Request rejected before any work (oversized or out of domain).
    #[error(transparent)]
    Request(#[from] CoreError),

    /// Decoding or resampling failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl ConvertError {
    /// True for the oversized-request condition.
    #[must_use]
    pub fn is_oversized(&self) -> bool {
        matches!(self, Self::Request(CoreError::OversizedRequest { .. }))
    }

    /// True if adjusting width/aspect can fix it.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Request(e) => e.is_recoverable(),
            Self::Source(_) => false,
        }
    }
}

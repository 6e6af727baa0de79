/// Input boundary for pixscii: decoding, resampling and describing images.

pub mod details;
pub mod error;
pub mod image;
pub mod resize;

pub use details::ImageDetails;
pub use error::SourceError;

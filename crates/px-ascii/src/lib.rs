/// ASCII conversion engine for pixscii.
///
/// Resamples a bitmap to the requested character grid and maps each
/// pixel's luminance onto the fixed ramp.
pub mod error;
pub mod quantize;

pub use error::ConvertError;
pub use quantize::{convert, convert_path};

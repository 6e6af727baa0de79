/// Types partagés, configuration et heuristiques pour pixscii.
///
/// This crate holds everything the converter and the terminal front-end
/// agree on: the source bitmap, the conversion request, the character ramp
/// and the produced art.

pub mod art;
pub mod aspect;
pub mod config;
pub mod error;
pub mod frame;
pub mod ramp;
pub mod request;

pub use art::AsciiArt;
pub use aspect::{optimal_slider_value, slider_to_aspect};
pub use config::AppConfig;
pub use error::CoreError;
pub use frame::SourceImage;
pub use ramp::AsciiRamp;
pub use request::{ConversionRequest, MAX_PIXELS};

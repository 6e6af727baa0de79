use crate::error::CoreError;

/// Garde-fou : nombre maximal de cellules (colonnes × lignes) par conversion.
pub const MAX_PIXELS: u64 = 300_000;

/// Paramètres d'une conversion, fournis par l'appelant à chaque appel.
///
/// `aspect_ratio` is output rows per output column: it compensates for
/// character cells being taller than wide, and lets the user squash or
/// stretch the rendered height.
///
/// # Example
/// ```
/// use px_core::request::ConversionRequest;
/// let req = ConversionRequest::new(200, 0.3);
/// assert_eq!(req.resampled_height(), 60);
/// assert_eq!(req.pixel_count(), 12_000);
/// assert!(req.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConversionRequest {
    /// Character columns.
    pub target_width: u32,
    /// Rows-per-column scaling factor.
    pub aspect_ratio: f64,
}

impl ConversionRequest {
    /// Build a request. Nothing is checked until [`Self::validate`].
    #[must_use]
    pub fn new(target_width: u32, aspect_ratio: f64) -> Self {
        Self {
            target_width,
            aspect_ratio,
        }
    }

    /// `round(aspect_ratio * target_width)`, saturating at `u64::MAX`.
    #[must_use]
    pub fn resampled_height(&self) -> u64 {
        let h = (self.aspect_ratio * f64::from(self.target_width)).round();
        if h.is_nan() || h <= 0.0 {
            0
        } else {
            // `as` saturates for out-of-range floats.
            h as u64
        }
    }

    /// `resampled_height * target_width`, saturating.
    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        self.resampled_height()
            .saturating_mul(u64::from(self.target_width))
    }

    /// Check domain and pixel guard.
    ///
    /// # Errors
    /// - [`CoreError::InvalidRequest`] for a zero width or a non-finite /
    ///   non-positive aspect ratio.
    /// - [`CoreError::OversizedRequest`] when `pixel_count() > MAX_PIXELS`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.target_width == 0 {
            return Err(CoreError::InvalidRequest(
                "target width must be positive".into(),
            ));
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(CoreError::InvalidRequest(format!(
                "aspect ratio must be a positive number, got {}",
                self.aspect_ratio
            )));
        }
        let pixels = self.pixel_count();
        if pixels > MAX_PIXELS {
            return Err(CoreError::OversizedRequest {
                width: self.target_width,
                height: self.resampled_height(),
                pixels,
                max: MAX_PIXELS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_rounds_to_nearest() {
        assert_eq!(ConversionRequest::new(30, 0.1).resampled_height(), 3);
        assert_eq!(ConversionRequest::new(10, 0.24).resampled_height(), 2);
        assert_eq!(ConversionRequest::new(10, 0.25).resampled_height(), 3);
        assert_eq!(ConversionRequest::new(1, 0.1).resampled_height(), 0);
    }

    #[test]
    fn guard_is_inclusive_at_limit() {
        // 600 × 500 = 300_000
        assert!(ConversionRequest::new(600, 500.0 / 600.0).validate().is_ok());
        // 600 × 501 > 300_000
        let err = ConversionRequest::new(600, 501.0 / 600.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::OversizedRequest {
                width: 600,
                height: 501,
                pixels: 300_600,
                ..
            }
        ));
        assert!(err.is_recoverable());
    }

    #[test]
    fn huge_aspect_saturates_instead_of_overflowing() {
        let req = ConversionRequest::new(u32::MAX, 1e300);
        assert_eq!(req.pixel_count(), u64::MAX);
        assert!(matches!(
            req.validate(),
            Err(CoreError::OversizedRequest { .. })
        ));
    }

    #[test]
    fn rejects_zero_width_and_bad_aspect() {
        assert!(matches!(
            ConversionRequest::new(0, 0.5).validate(),
            Err(CoreError::InvalidRequest(_))
        ));
        for aspect in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ConversionRequest::new(100, aspect).validate(),
                Err(CoreError::InvalidRequest(_))
            ));
        }
    }

    #[test]
    fn reference_slider_extremes_fit_the_guard() {
        // Largest interactive request: 300 columns at aspect 1.00.
        assert!(ConversionRequest::new(300, 1.0).validate().is_ok());
    }
}

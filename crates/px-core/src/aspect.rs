//! Heuristique de réglage par défaut du slider d'aspect.
//!
//! Interpolation linéaire entre deux points de calibration mesurés à l'œil
//! sur une police à chasse fixe : une image de ratio natif 0.67 rend bien à
//! 30 (×0.01), une image de ratio 1.51 rend bien à 70.

/// Low calibration point: (native height/width ratio, slider value).
pub const CALIBRATION_LOW: (f64, f64) = (0.67, 30.0);
/// High calibration point.
pub const CALIBRATION_HIGH: (f64, f64) = (1.51, 70.0);
/// Bounds applied after interpolation.
pub const SLIDER_MIN: i64 = 10;
/// Upper bound applied after interpolation.
pub const SLIDER_MAX: i64 = 200;

/// Suggest an aspect slider value for an image of native ratio `height / width`.
///
/// The interpolated value is truncated toward zero, then clamped to
/// `[SLIDER_MIN, SLIDER_MAX]`.
///
/// # Example
/// ```
/// use px_core::aspect::optimal_slider_value;
/// assert_eq!(optimal_slider_value(0.67), 30);
/// assert_eq!(optimal_slider_value(1.51), 70);
/// assert_eq!(optimal_slider_value(0.0), 10);
/// assert_eq!(optimal_slider_value(10.0), 200);
/// ```
#[must_use]
pub fn optimal_slider_value(ratio: f64) -> u32 {
    let (x1, y1) = CALIBRATION_LOW;
    let (x2, y2) = CALIBRATION_HIGH;
    let value = y1 + (ratio - x1) * (y2 - y1) / (x2 - x1);
    if value.is_nan() {
        return SLIDER_MIN as u32;
    }
    (value.trunc() as i64).clamp(SLIDER_MIN, SLIDER_MAX) as u32
}

/// Slider hundredths → aspect-ratio factor (`30` → `0.30`).
///
/// # Example
/// ```
/// use px_core::aspect::slider_to_aspect;
/// assert!((slider_to_aspect(30) - 0.3).abs() < 1e-12);
/// ```
#[must_use]
pub fn slider_to_aspect(value: u32) -> f64 {
    f64::from(value) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calibration_points_are_exact() {
        assert_eq!(optimal_slider_value(0.67), 30);
        assert_eq!(optimal_slider_value(1.51), 70);
    }

    #[test]
    fn clamps_both_ends() {
        assert_eq!(optimal_slider_value(0.0), 10);
        assert_eq!(optimal_slider_value(-3.0), 10);
        assert_eq!(optimal_slider_value(10.0), 200);
        assert_eq!(optimal_slider_value(f64::INFINITY), 200);
        assert_eq!(optimal_slider_value(f64::NAN), 10);
    }

    #[test]
    fn interpolates_and_truncates() {
        // 30 + 0.33 * 40 / 0.84 = 45.71…
        assert_eq!(optimal_slider_value(1.0), 45);
        // 21.90…
        assert_eq!(optimal_slider_value(0.5), 21);
        // 93.33…
        assert_eq!(optimal_slider_value(2.0), 93);
    }

    #[test]
    fn truncation_follows_closed_form_order() {
        // 1000×418 : 17.999… ou 18.0 selon l'ordre des opérations.
        assert_eq!(optimal_slider_value(0.418), 18);
        assert_eq!(optimal_slider_value(0.313), 12);
        assert_eq!(optimal_slider_value(1.174), 54);
        assert_eq!(optimal_slider_value(1.825), 84);
    }

    #[test]
    fn monotonic_in_ratio() {
        let mut prev = 0;
        for i in 0..400 {
            let v = optimal_slider_value(f64::from(i) / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}

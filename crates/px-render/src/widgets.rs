use std::ops::RangeInclusive;

/// Slider entier borné, équivalent terminal d'un `Scale` horizontal.
///
/// # Example
/// ```
/// use px_render::widgets::Slider;
/// let mut s = Slider::new("Resolution", 30..=300, 200);
/// s.nudge(500);
/// assert_eq!(s.value(), 300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slider {
    label: &'static str,
    min: u32,
    max: u32,
    value: u32,
}

impl Slider {
    /// Create a slider; `initial` is clamped into `range`.
    #[must_use]
    pub fn new(label: &'static str, range: RangeInclusive<u32>, initial: u32) -> Self {
        let (min, max) = (*range.start(), *range.end());
        Self {
            label,
            min,
            max,
            value: initial.clamp(min, max),
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Label shown before the bar.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Set, clamped to the range.
    pub fn set(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Move by `delta`, clamped to the range.
    pub fn nudge(&mut self, delta: i64) {
        let v = (i64::from(self.value) + delta).clamp(i64::from(self.min), i64::from(self.max));
        self.value = v as u32;
    }

    /// Position in [0.0, 1.0].
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.max == self.min {
            return 1.0;
        }
        f64::from(self.value - self.min) / f64::from(self.max - self.min)
    }

    /// Barre texte de `width` cellules.
    #[must_use]
    pub fn bar(&self, width: usize) -> String {
        let filled = (self.ratio() * width as f64).round() as usize;
        let filled = filled.min(width);
        let mut s = String::with_capacity(width * 3);
        s.extend(std::iter::repeat_n('█', filled));
        s.extend(std::iter::repeat_n('░', width - filled));
        s
    }
}

/// Message affiché dans la barre de statut.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Neutral feedback.
    Info(String),
    /// Recoverable problem the user should act on.
    Error(String),
}

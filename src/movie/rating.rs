use super::movie::MAX_RATING;

/// How many full, half and empty stars represent a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: u32,
    pub half: bool,
    pub empty: u32,
}

impl StarBreakdown {
    /// A half star is shown when the fractional part is at least 0.5.
    /// `value` is clamped to `[0, out_of]`.
    pub fn from_rating(value: f64, out_of: u32) -> Self {
        let value = if value.is_finite() {
            value.clamp(0.0, f64::from(out_of))
        } else {
            0.0
        };

        let full = value.floor() as u32;
        let half = value.fract() >= 0.5;
        let empty = out_of - full - u32::from(half);

        Self { full, half, empty }
    }

    /// Five-star scale.
    pub fn for_rating(value: f64) -> Self {
        Self::from_rating(value, MAX_RATING as u32)
    }

    pub fn total(&self) -> u32 {
        self.full + u32::from(self.half) + self.empty
    }
}

use serde::Serialize;

/// Mean rating at or above which a shipment mode counts as satisfactory.
pub const RATING_THRESHOLD: f64 = 3.0;

/// Classification of a mean customer rating against [`RATING_THRESHOLD`].
///
/// | Mean     | Band           | Indicator |
/// |----------|----------------|-----------|
/// | >= 3.0   | Satisfactory   | green     |
/// | < 3.0    | BelowThreshold | orange    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatingBand {
    Satisfactory,
    BelowThreshold,
}

impl RatingBand {
    pub fn from_mean(mean: f64) -> Self {
        if mean >= RATING_THRESHOLD {
            RatingBand::Satisfactory
        } else {
            RatingBand::BelowThreshold
        }
    }
}

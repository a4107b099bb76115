use serde::{Deserialize, Serialize};

/// Inclusive rating bounds accepted by the boundary layer.
pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 3.0;

/// Display names are capped at 50 characters.
pub const NAME_MAX_LEN: usize = 50;

/// A roster entry for one balancing call.
///
/// `id` is opaque and assumed unique by the caller; the core does not
/// deduplicate. `rating` is the sole balancing signal, any value in
/// `[RATING_MIN, RATING_MAX]` is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub rating: f64,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rating: f64) -> Self {
        Self { id: id.into(), name: name.into(), rating }
    }
}

/// Canonical skill tiers mapped onto the rating scale.
///
/// The scale is continuous; these are just the named anchor points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingTier {
    New,
    Casual,
    Advanced,
    Elite,
    Pro,
}

impl RatingTier {
    /// Tier points: New=0, Casual=1, Advanced=2, Elite=2.5, Pro=3
    pub fn points(self) -> f64 {
        match self {
            RatingTier::New => 0.0,
            RatingTier::Casual => 1.0,
            RatingTier::Advanced => 2.0,
            RatingTier::Elite => 2.5,
            RatingTier::Pro => 3.0,
        }
    }
}

//! Data model for one balancing call.
//!
//! Everything here is constructed, used, and discarded within a single
//! call; nothing persists across assignments.

pub mod assignment;
pub mod player;

pub use assignment::{AssignmentRequest, AssignmentResult};
pub use player::{Player, RatingTier, NAME_MAX_LEN, RATING_MAX, RATING_MIN};

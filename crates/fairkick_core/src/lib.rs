//! # fairkick_core - Randomized Two-Team Balancer
//!
//! This library splits a pickup-game roster into two teams ("green" and
//! "orange") around two fixed captains, keeping team sizes within one
//! player of each other and rating totals as close as the greedy pass
//! allows. Randomness (bench shuffle + tie-break) is injected through a
//! caller-supplied RNG so tests stay deterministic.

pub mod api;
pub mod balancer;
pub mod error;
pub mod messages;
pub mod models;
pub mod validation;

// Re-export main API functions
pub use api::generate_teams_json;
pub use balancer::{assign_balanced, assign_balanced_with_rng};
pub use error::{BalanceError, Result};
pub use messages::{pick_message, FAIRNESS_MESSAGES};
pub use models::{AssignmentRequest, AssignmentResult, Player, RatingTier};
pub use validation::{RequestValidator, ValidationError};

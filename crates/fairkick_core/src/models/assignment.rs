use serde::{Deserialize, Serialize};

use super::player::Player;

/// Input to one balancing call.
///
/// Uniqueness of player ids is the caller's contract; both captain ids
/// must reference players in `players` and must differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    pub players: Vec<Player>,
    pub green_captain_id: String,
    pub orange_captain_id: String,
}

/// A finished two-team partition with its fairness summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResult {
    pub green: Vec<Player>,
    pub orange: Vec<Player>,
    pub green_total: f64,
    pub orange_total: f64,
    pub rating_gap: f64,
    pub message: String,
}

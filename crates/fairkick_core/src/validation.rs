//! Boundary validation for assignment requests.
//!
//! Everything here runs before the balancer; a request that fails any
//! check is rejected with a client-facing message and never reaches the
//! core's defensive checks.

use std::fmt;

use crate::models::{AssignmentRequest, Player, NAME_MAX_LEN, RATING_MAX, RATING_MIN};

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name is empty, too long, or missing
    InvalidName(String),

    /// Rating outside the accepted range (or not finite)
    InvalidRating { name: String, rating: f64 },

    /// Fewer than 2 players in the request
    TooFewPlayers(usize),

    /// A captain id that resolves to no player
    UnknownCaptain(String),

    /// Green and orange captain ids are the same
    IdenticalCaptains(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidName(msg) => write!(f, "Invalid name: {}", msg),
            ValidationError::InvalidRating { name, rating } => {
                write!(
                    f,
                    "Invalid rating for '{}': {}. Must be between {} and {}",
                    name, rating, RATING_MIN, RATING_MAX
                )
            }
            ValidationError::TooFewPlayers(found) => {
                write!(f, "At least 2 players are required, found {}", found)
            }
            ValidationError::UnknownCaptain(id) => {
                write!(f, "Captains must exist in provided players: '{}' is unknown", id)
            }
            ValidationError::IdenticalCaptains(id) => {
                write!(f, "Captains must be different players (both '{}')", id)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Request validation utility
pub struct RequestValidator;

impl RequestValidator {
    /// Validate a display name (1-50 characters)
    pub fn validate_name(name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::InvalidName("Name cannot be empty".to_string()));
        }

        if name.chars().count() > NAME_MAX_LEN {
            return Err(ValidationError::InvalidName(format!(
                "Name cannot exceed {} characters",
                NAME_MAX_LEN
            )));
        }

        Ok(())
    }

    /// Validate a rating (finite, within [0, 3])
    pub fn validate_rating(name: &str, rating: f64) -> Result<(), ValidationError> {
        if !rating.is_finite() || !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(ValidationError::InvalidRating { name: name.to_string(), rating });
        }
        Ok(())
    }

    pub fn validate_player(player: &Player) -> Result<(), ValidationError> {
        Self::validate_name(&player.name)?;
        Self::validate_rating(&player.name, player.rating)?;
        Ok(())
    }

    /// Validate a whole request: every player, roster size, captain ids.
    pub fn validate(request: &AssignmentRequest) -> Result<(), ValidationError> {
        if request.players.len() < 2 {
            return Err(ValidationError::TooFewPlayers(request.players.len()));
        }

        for player in &request.players {
            Self::validate_player(player)?;
        }

        for captain_id in [&request.green_captain_id, &request.orange_captain_id] {
            if !request.players.iter().any(|p| &p.id == captain_id) {
                return Err(ValidationError::UnknownCaptain(captain_id.clone()));
            }
        }

        if request.green_captain_id == request.orange_captain_id {
            return Err(ValidationError::IdenticalCaptains(request.green_captain_id.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AssignmentRequest {
        AssignmentRequest {
            players: vec![
                Player::new("1", "Alex", 3.0),
                Player::new("2", "Jordan", 3.0),
                Player::new("3", "Casey", 2.0),
            ],
            green_captain_id: "1".to_string(),
            orange_captain_id: "2".to_string(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(RequestValidator::validate(&request()).is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(RequestValidator::validate_name("").is_err());
    }

    #[test]
    fn fifty_character_name_is_the_limit() {
        let at_limit = "a".repeat(50);
        let over = "a".repeat(51);
        assert!(RequestValidator::validate_name(&at_limit).is_ok());
        assert!(RequestValidator::validate_name(&over).is_err());
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(RequestValidator::validate_rating("x", 0.0).is_ok());
        assert!(RequestValidator::validate_rating("x", 3.0).is_ok());
        assert!(RequestValidator::validate_rating("x", 2.5).is_ok());
        assert!(RequestValidator::validate_rating("x", -0.1).is_err());
        assert!(RequestValidator::validate_rating("x", 3.1).is_err());
        assert!(RequestValidator::validate_rating("x", f64::NAN).is_err());
    }

    #[test]
    fn single_player_roster_is_rejected() {
        let mut req = request();
        req.players.truncate(1);
        assert_eq!(RequestValidator::validate(&req), Err(ValidationError::TooFewPlayers(1)));
    }

    #[test]
    fn unknown_captain_is_rejected() {
        let mut req = request();
        req.orange_captain_id = "99".to_string();
        assert_eq!(
            RequestValidator::validate(&req),
            Err(ValidationError::UnknownCaptain("99".to_string()))
        );
    }

    #[test]
    fn identical_captains_are_rejected() {
        let mut req = request();
        req.orange_captain_id = "1".to_string();
        assert_eq!(
            RequestValidator::validate(&req),
            Err(ValidationError::IdenticalCaptains("1".to_string()))
        );
    }
}

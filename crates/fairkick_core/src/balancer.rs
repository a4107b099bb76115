//! Greedy randomized two-team balancer.
//!
//! Both captains are pinned to their teams up front; the rest of the
//! roster (the bench) is shuffled, then handed out one player at a time
//! to whichever side is behind on total rating. Size targets override
//! rating: green takes `ceil(n/2)` players, orange `floor(n/2)`, so an
//! odd roster always leaves the extra player on green. Ties on total
//! rating fall back to a uniform coin flip.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{BalanceError, Result};
use crate::messages::pick_message;
use crate::models::{AssignmentRequest, AssignmentResult, Player};

/// Sum of member ratings.
pub fn total_rating(players: &[Player]) -> f64 {
    players.iter().map(|p| p.rating).sum()
}

/// Balance a roster using the process-wide RNG.
pub fn assign_balanced(request: &AssignmentRequest) -> Result<AssignmentResult> {
    assign_balanced_with_rng(request, &mut rand::thread_rng())
}

/// Balance a roster with a caller-supplied RNG.
///
/// The RNG drives the bench shuffle and the tie-break; a seeded
/// generator makes the whole assignment reproducible.
pub fn assign_balanced_with_rng<R: Rng>(
    request: &AssignmentRequest,
    rng: &mut R,
) -> Result<AssignmentResult> {
    let players = &request.players;

    if players.len() < 2 {
        return Err(BalanceError::NotEnoughPlayers { found: players.len() });
    }

    if request.green_captain_id == request.orange_captain_id {
        return Err(BalanceError::IdenticalCaptains { id: request.green_captain_id.clone() });
    }

    let green_captain = find_captain(players, &request.green_captain_id)?;
    let orange_captain = find_captain(players, &request.orange_captain_id)?;

    // Set-of-ids exclusion keeps the bench pass O(n) on large rosters.
    let captain_ids: HashSet<&str> =
        [green_captain.id.as_str(), orange_captain.id.as_str()].into_iter().collect();
    let mut bench: Vec<&Player> =
        players.iter().filter(|p| !captain_ids.contains(p.id.as_str())).collect();
    bench.shuffle(rng);

    let total_players = players.len();
    let green_target = (total_players + 1) / 2;
    let orange_target = total_players / 2;

    let mut green = vec![green_captain.clone()];
    let mut orange = vec![orange_captain.clone()];
    let mut green_total = green_captain.rating;
    let mut orange_total = orange_captain.rating;

    for player in bench {
        let to_green = if green.len() >= green_target {
            false
        } else if orange.len() >= orange_target {
            true
        } else if green_total == orange_total {
            rng.gen_bool(0.5)
        } else {
            green_total < orange_total
        };

        if to_green {
            green_total += player.rating;
            green.push(player.clone());
        } else {
            orange_total += player.rating;
            orange.push(player.clone());
        }
    }

    let rating_gap = (green_total - orange_total).abs();

    log::debug!(
        "balanced {} players: green {} ({:.1}), orange {} ({:.1}), gap {:.1}",
        total_players,
        green.len(),
        green_total,
        orange.len(),
        orange_total,
        rating_gap
    );

    Ok(AssignmentResult {
        green,
        orange,
        green_total,
        orange_total,
        rating_gap,
        message: pick_message(rating_gap).to_string(),
    })
}

fn find_captain<'a>(players: &'a [Player], id: &str) -> Result<&'a Player> {
    players
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| BalanceError::CaptainNotFound { id: id.to_string() })
}

//! Fairness-message lookup.
//!
//! Kept as data so thresholds and wording can change without touching
//! control flow.

/// Ordered `(threshold, message)` pairs; the first threshold >= gap wins.
/// The infinite threshold is the catch-all for any remaining gap.
pub const FAIRNESS_MESSAGES: &[(f64, &str)] = &[
    (0.0, "Perfectly balanced – as all things should be."),
    (1.0, "Teams look tight! Expect a competitive match."),
    (2.0, "Slight edge to one side, but still playable."),
    (f64::INFINITY, "Wide gap detected – consider a quick reshuffle."),
];

/// Select the fairness message for a rating gap.
///
/// Pure function of the gap, independent of team composition.
pub fn pick_message(gap: f64) -> &'static str {
    for &(threshold, message) in FAIRNESS_MESSAGES {
        if gap <= threshold {
            return message;
        }
    }
    FAIRNESS_MESSAGES[FAIRNESS_MESSAGES.len() - 1].1
}

use crate::domain::model::{Assignment, NameRoster, Pair, Pairing};
use crate::utils::error::{MatchError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Retry cap for the derangement rejection loop. The acceptance probability
/// converges to 1/e per trial, so hitting this cap for any roster of 2 or
/// more names indicates a broken RNG rather than bad luck.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 10_000;

/// Produces a uniformly random perfect matching over an even-length roster:
/// shuffle a copy, then split the shuffled order into consecutive pairs.
///
/// Parity is enforced by mode selection before this is called.
pub fn generate_pairing<R: Rng>(roster: &NameRoster, rng: &mut R) -> Pairing {
    debug_assert!(roster.len() % 2 == 0, "pairing requires an even roster");

    let mut shuffled = roster.names().to_vec();
    shuffled.shuffle(rng);

    let pairs = shuffled
        .chunks_exact(2)
        .map(|chunk| Pair(chunk[0].clone(), chunk[1].clone()))
        .collect();

    Pairing { pairs }
}

/// Produces a derangement of the roster by rejection sampling: shuffle a copy
/// until no position maps to itself, then zip roster order against it.
///
/// Expected number of trials approaches e as the roster grows, so the bounded
/// retry loop is a formality for valid input.
pub fn generate_derangement<R: Rng>(roster: &NameRoster, rng: &mut R) -> Result<Assignment> {
    let left = roster.names();
    let mut right = left.to_vec();

    for attempt in 1..=MAX_SHUFFLE_ATTEMPTS {
        right.shuffle(rng);

        if left.iter().zip(&right).all(|(a, b)| a != b) {
            tracing::trace!("Derangement accepted after {} attempt(s)", attempt);
            let entries = left.iter().cloned().zip(right).collect();
            return Ok(Assignment { entries });
        }
    }

    Err(MatchError::GenerationError {
        message: format!(
            "No derangement found within {} shuffle attempts",
            MAX_SHUFFLE_ATTEMPTS
        ),
    })
}

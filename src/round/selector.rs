//! Anti-repeat card draw.
//!
//! The two cards of a round are distinct, and neither was on display in the
//! previous round. Identity is the deck index.
//!
//! Small decks cannot honour the full rule, so it relaxes just enough to
//! terminate while still never repeating the previous ordered pair:
//!
//! | cards | upper avoids        | lower avoids            |
//! |-------|---------------------|-------------------------|
//! | >= 4  | both previous       | upper and both previous |
//! | 3     | both previous       | upper                   |
//! | 2     | previous upper      | upper                   |

use tracing::debug;

use crate::cards::CardIndex;
use crate::core::error::SessionError;
use crate::core::rng::GameRng;

/// Draws the card pair for each round.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundSelector;

impl RoundSelector {
    /// Draw `(upper, lower)` from a deck of `nb_cards` cards.
    pub fn draw(
        nb_cards: usize,
        previous: Option<(CardIndex, CardIndex)>,
        rng: &mut GameRng,
    ) -> Result<(CardIndex, CardIndex), SessionError> {
        if nb_cards < 2 {
            return Err(SessionError::DeckTooSmall { nb_cards });
        }

        let upper_avoid: Vec<CardIndex> = match previous {
            None => Vec::new(),
            Some((prev_upper, _)) if nb_cards == 2 => vec![prev_upper],
            Some((prev_upper, prev_lower)) => vec![prev_upper, prev_lower],
        };
        let upper = draw_excluding(nb_cards, &upper_avoid, rng);

        let mut lower_avoid = vec![upper];
        if nb_cards >= 4 {
            lower_avoid.extend(upper_avoid);
        }
        let lower = draw_excluding(nb_cards, &lower_avoid, rng);

        debug!(%upper, %lower, ?previous, "round drawn");
        Ok((upper, lower))
    }
}

/// Uniform rejection sampling over `[0, nb_cards)` minus `excluded`.
///
/// Callers guarantee at least one index stays available.
fn draw_excluding(nb_cards: usize, excluded: &[CardIndex], rng: &mut GameRng) -> CardIndex {
    loop {
        let candidate = CardIndex::new(rng.gen_range_usize(0..nb_cards));
        if !excluded.contains(&candidate) {
            return candidate;
        }
    }
}

//! Click hit testing.
//!
//! A click is judged against the upper card only: it must land inside the
//! card, and then within the drawn footprint of the icon both cards share.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, IconId};
use crate::core::error::DeckError;
use crate::layout::{distance, CardSlot, Geometry};

/// Verdict for one click during play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// The shared icon was hit.
    Correct,
    /// Inside the card, but not on the shared icon.
    Incorrect,
    /// Outside the upper card. Has no effect on the game.
    OutOfBounds,
}

/// The single icon present on both cards.
///
/// Zero or several shared icons means the deck is corrupt.
pub fn shared_icon(upper: &Card, lower: &Card) -> Result<IconId, DeckError> {
    let mut shared = upper.ids().filter(|&id| lower.contains(id));
    match (shared.next(), shared.count()) {
        (Some(id), 0) => Ok(id),
        (first, rest) => Err(DeckError::IntegrityViolation {
            first: upper.index,
            second: lower.index,
            shared: usize::from(first.is_some()) + rest,
        }),
    }
}

/// Turns pointer positions into verdicts.
#[derive(Clone, Copy, Debug)]
pub struct ClickResolver {
    geometry: Geometry,
}

impl ClickResolver {
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self { geometry }
    }

    /// Judge a click at `(x, y)` against the rendered round.
    ///
    /// Reads the icon centers last reported by the renderer. A shared icon
    /// that has not been painted yet cannot be hit, so such clicks are
    /// `OutOfBounds`.
    pub fn resolve(&self, x: i32, y: i32, upper: &Card, lower: &Card) -> Result<ClickOutcome, DeckError> {
        let target = shared_icon(upper, lower)?;

        let card_center = self.geometry.card_center(CardSlot::Upper);
        if distance((x, y), card_center) > self.geometry.card_radius {
            return Ok(ClickOutcome::OutOfBounds);
        }

        let Some(icon) = upper.icon(target) else {
            return Ok(ClickOutcome::OutOfBounds);
        };
        let Some(center) = icon.center else {
            return Ok(ClickOutcome::OutOfBounds);
        };

        let reach = self.geometry.icon_diameter(icon.placement.scale) / 2.0;
        if distance((x, y), center) <= reach {
            Ok(ClickOutcome::Correct)
        } else {
            Ok(ClickOutcome::Incorrect)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardIndex, Placement};
    use crate::core::config::WindowConfig;

    fn geometry() -> Geometry {
        Geometry::from_config(&WindowConfig::default())
    }

    fn card(index: usize, ids: &[u32]) -> Card {
        Card::new(CardIndex::new(index), ids.iter().copied().map(IconId::new))
    }

    /// Upper card with icon 1 painted 100px right of the card center.
    fn painted_pair() -> (Card, Card, (i32, i32)) {
        let g = geometry();
        let mut upper = card(0, &[1, 2, 3]);
        let lower = card(1, &[1, 4, 5]);

        let placement = Placement {
            radius: 100.0,
            angle: 0.0,
            rotation: 30.0,
            scale: 1.0,
        };
        let center = g.polar_to_screen(CardSlot::Upper, placement.radius, placement.angle);
        upper.icons[0].placement = placement;
        upper.icons[0].center = Some(center);
        upper.icons[1].center = Some(g.card_center(CardSlot::Upper));
        (upper, lower, center)
    }

    #[test]
    fn test_shared_icon() {
        let upper = card(0, &[1, 2, 3]);
        let lower = card(1, &[3, 4, 5]);
        assert_eq!(shared_icon(&upper, &lower).unwrap(), IconId::new(3));
    }

    #[test]
    fn test_shared_icon_violations() {
        let upper = card(0, &[1, 2, 3]);

        let none = card(1, &[4, 5, 6]);
        assert!(matches!(
            shared_icon(&upper, &none),
            Err(DeckError::IntegrityViolation { shared: 0, .. })
        ));

        let two = card(2, &[1, 2, 6]);
        match shared_icon(&upper, &two) {
            Err(DeckError::IntegrityViolation { first, second, shared }) => {
                assert_eq!(first, CardIndex::new(0));
                assert_eq!(second, CardIndex::new(2));
                assert_eq!(shared, 2);
            }
            other => panic!("expected IntegrityViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_click_on_shared_icon_is_correct() {
        let (upper, lower, (x, y)) = painted_pair();
        let resolver = ClickResolver::new(geometry());
        assert_eq!(resolver.resolve(x, y, &upper, &lower).unwrap(), ClickOutcome::Correct);
        // edge of the footprint: draw size 80, scale 1
        assert_eq!(resolver.resolve(x + 40, y, &upper, &lower).unwrap(), ClickOutcome::Correct);
    }

    #[test]
    fn test_click_beyond_footprint_is_incorrect() {
        let (upper, lower, (x, y)) = painted_pair();
        let resolver = ClickResolver::new(geometry());
        assert_eq!(resolver.resolve(x - 41, y, &upper, &lower).unwrap(), ClickOutcome::Incorrect);
        // on another icon
        let (cx, cy) = geometry().card_center(CardSlot::Upper);
        assert_eq!(resolver.resolve(cx, cy, &upper, &lower).unwrap(), ClickOutcome::Incorrect);
    }

    #[test]
    fn test_click_outside_card_is_out_of_bounds() {
        let (upper, lower, _) = painted_pair();
        let g = geometry();
        let resolver = ClickResolver::new(g);
        let (cx, cy) = g.card_center(CardSlot::Upper);

        assert_eq!(resolver.resolve(cx + 221, cy, &upper, &lower).unwrap(), ClickOutcome::OutOfBounds);
        assert_eq!(resolver.resolve(0, 0, &upper, &lower).unwrap(), ClickOutcome::OutOfBounds);
        // the lower card is not a target
        let (lx, ly) = g.card_center(CardSlot::Lower);
        assert_eq!(resolver.resolve(lx, ly, &upper, &lower).unwrap(), ClickOutcome::OutOfBounds);
    }

    #[test]
    fn test_unpainted_shared_icon_cannot_be_hit() {
        let upper = card(0, &[1, 2, 3]);
        let lower = card(1, &[1, 4, 5]);
        let g = geometry();
        let (cx, cy) = g.card_center(CardSlot::Upper);
        let resolver = ClickResolver::new(g);
        assert_eq!(resolver.resolve(cx, cy, &upper, &lower).unwrap(), ClickOutcome::OutOfBounds);
    }

    #[test]
    fn test_scale_changes_reach() {
        let (mut upper, lower, (x, y)) = painted_pair();
        upper.icons[0].placement.scale = 0.5;
        let resolver = ClickResolver::new(geometry());
        assert_eq!(resolver.resolve(x + 20, y, &upper, &lower).unwrap(), ClickOutcome::Correct);
        assert_eq!(resolver.resolve(x + 25, y, &upper, &lower).unwrap(), ClickOutcome::Incorrect);
    }

    #[test]
    fn test_integrity_violation_is_fatal() {
        let upper = card(0, &[1, 2, 3]);
        let lower = card(1, &[7, 8, 9]);
        let resolver = ClickResolver::new(geometry());
        assert!(resolver.resolve(0, 0, &upper, &lower).is_err());
    }
}

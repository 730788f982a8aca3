//! Per-round radial icon layout.
//!
//! A card with `n` icons puts `n - 1` of them on a ring at equal angular
//! steps from a random offset, and the last one at the center. Ring icons
//! get a random spin, a radius picked from a few discrete steps and a scale
//! that grows slightly with the radius, so bigger icons sit near the rim.
//! When the drawn icon size is known, the scale is capped so the whole icon
//! stays inside the card.
//!
//! The layout is recomputed every time a card enters a round slot, so a
//! card never looks the same twice in a row.

use tracing::trace;

use super::geometry::Geometry;
use crate::cards::{Card, Placement};
use crate::core::rng::GameRng;

/// Ring radii as fractions of the card radius.
pub const RADIUS_STEPS: [f64; 4] = [0.5, 0.6, 0.7, 0.8];

const SCALE_BASE: f64 = 0.75;
const SCALE_SPREAD: f64 = 0.25;
const SCALE_RADIUS_BIAS: f64 = 0.5;

/// Pixels kept free between an icon and the card rim. Covers the
/// truncation of rendered centers to the pixel grid.
pub const EDGE_MARGIN: f64 = 2.0;

/// Assigns placements to a card's icons.
#[derive(Clone, Copy, Debug)]
pub struct IconPlacer {
    card_radius: f64,
    /// Side of an icon drawn at scale 1.0, if known.
    icon_size: Option<f64>,
}

impl IconPlacer {
    /// Create a placer for cards of the given on-screen radius.
    #[must_use]
    pub fn new(card_radius: f64) -> Self {
        Self {
            card_radius,
            icon_size: None,
        }
    }

    /// Create a placer that keeps icons inside the cards of `geometry`.
    #[must_use]
    pub fn from_geometry(geometry: &Geometry) -> Self {
        Self::new(geometry.card_radius).with_icon_size(geometry.draw_icon_size)
    }

    /// Cap icon scales so icons of this drawn size never cross the rim.
    #[must_use]
    pub fn with_icon_size(mut self, icon_size: f64) -> Self {
        self.icon_size = Some(icon_size);
        self
    }

    /// Largest scale an icon centered `radius` pixels from the card center
    /// may take.
    #[must_use]
    pub fn max_scale(&self, radius: f64) -> f64 {
        match self.icon_size {
            Some(size) if size > 0.0 => 2.0 * (self.card_radius - radius - EDGE_MARGIN) / size,
            _ => f64::INFINITY,
        }
    }

    /// Angular step between ring icons for a card of `nb_icons` icons.
    ///
    /// Returns `None` when the card only has a center icon.
    #[must_use]
    pub fn ring_step(nb_icons: usize) -> Option<f64> {
        match nb_icons {
            0 | 1 => None,
            n => Some(360.0 / (n - 1) as f64),
        }
    }

    /// Give every icon of `card` a fresh placement.
    ///
    /// Previously rendered centers are cleared; the new look has not been
    /// painted yet.
    pub fn layout(&self, card: &mut Card, rng: &mut GameRng) {
        let index = card.index;
        let step = Self::ring_step(card.len());
        let Some((center, ring)) = card.icons.split_last_mut() else {
            return;
        };

        if let Some(step) = step {
            let offset = rng.gen_degrees();
            for (k, icon) in ring.iter_mut().enumerate() {
                let fraction = rng.choose(&RADIUS_STEPS).copied().unwrap_or(RADIUS_STEPS[0]);
                let radius = fraction * self.card_radius;
                let scale = SCALE_BASE
                    + rng.gen_unit() * SCALE_SPREAD
                    + (fraction - RADIUS_STEPS[0]) * SCALE_RADIUS_BIAS;
                icon.placement = Placement {
                    radius,
                    angle: (offset + k as f64 * step) % 360.0,
                    rotation: rng.gen_degrees(),
                    scale: scale.min(self.max_scale(radius)),
                };
            }
            trace!(card = %index, offset, step, "ring laid out");
        }

        center.placement = Placement::CENTER;
        card.clear_centers();
    }

    /// Permute which icon occupies which placement slot.
    ///
    /// Slot geometry is untouched; only icon identities move. Rendered
    /// centers are cleared since every slot may now hold a different icon.
    pub fn shuffle_order(card: &mut Card, rng: &mut GameRng) {
        let mut ids: Vec<_> = card.ids().collect();
        rng.shuffle(&mut ids);
        for (icon, id) in card.icons.iter_mut().zip(ids) {
            icon.id = id;
        }
        card.clear_centers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardIndex, IconId};
    use crate::core::config::WindowConfig;
    use crate::layout::geometry::{distance, CardSlot};

    const RADIUS: f64 = 220.0;

    fn card(n: u32) -> Card {
        Card::new(CardIndex::new(0), (0..n).map(IconId::new))
    }

    fn sorted_angles(card: &Card) -> Vec<f64> {
        let mut angles: Vec<f64> = card.icons[..card.len() - 1]
            .iter()
            .map(|i| i.placement.angle)
            .collect();
        angles.sort_by(f64::total_cmp);
        angles
    }

    #[test]
    fn test_center_icon() {
        let placer = IconPlacer::new(RADIUS);
        let mut rng = GameRng::new(1);

        for n in 1..=9 {
            let mut card = card(n);
            placer.layout(&mut card, &mut rng);
            let last = card.icons.last().unwrap();
            assert_eq!(last.placement, Placement::CENTER);
            assert_eq!(last.placement.radius, 0.0);
        }
    }

    #[test]
    fn test_ring_spans_full_circle_in_equal_steps() {
        let placer = IconPlacer::new(RADIUS);
        let mut rng = GameRng::new(2);

        for n in 3..=9u32 {
            let mut card = card(n);
            placer.layout(&mut card, &mut rng);

            let step = 360.0 / f64::from(n - 1);
            let angles = sorted_angles(&card);
            for pair in angles.windows(2) {
                assert!((pair[1] - pair[0] - step).abs() < 1e-9);
            }
            // wrap-around gap closes the circle
            let wrap = angles[0] + 360.0 - angles[angles.len() - 1];
            assert!((wrap - step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ring_values_in_range() {
        let placer = IconPlacer::new(RADIUS);
        let mut rng = GameRng::new(3);
        let mut card = card(8);

        for _ in 0..200 {
            placer.layout(&mut card, &mut rng);
            for icon in &card.icons[..7] {
                let p = icon.placement;
                assert!(RADIUS_STEPS.iter().any(|f| (f * RADIUS - p.radius).abs() < 1e-9));
                assert!((0.0..360.0).contains(&p.angle));
                assert!((0.0..360.0).contains(&p.rotation));
                assert!(p.scale >= SCALE_BASE);
                assert!(p.scale < SCALE_BASE + SCALE_SPREAD + 0.3 * SCALE_RADIUS_BIAS + 1e-9);
            }
        }
    }

    /// With the default geometry an icon at 0.8 of the radius and full
    /// scale would reach past the rim; the cap keeps every clickable pixel
    /// on the card.
    #[test]
    fn test_icons_stay_inside_card() {
        let geometry = Geometry::from_config(&WindowConfig::default());
        let placer = IconPlacer::from_geometry(&geometry);
        let mut rng = GameRng::new(8);
        let mut card = card(8);
        let card_center = geometry.card_center(CardSlot::Upper);

        let mut capped = false;
        for _ in 0..500 {
            placer.layout(&mut card, &mut rng);
            for icon in card.icons.iter() {
                let p = icon.placement;
                assert!(p.radius + geometry.icon_diameter(p.scale) / 2.0 <= geometry.card_radius);

                let center = geometry.polar_to_screen(CardSlot::Upper, p.radius, p.angle);
                let reach = geometry.icon_diameter(p.scale) / 2.0;
                assert!(distance(center, card_center) + reach <= geometry.card_radius);

                capped |= (p.scale - placer.max_scale(p.radius)).abs() < 1e-9;
            }
        }
        assert!(capped);
    }

    #[test]
    fn test_max_scale_without_icon_size() {
        let placer = IconPlacer::new(RADIUS);
        assert_eq!(placer.max_scale(0.8 * RADIUS), f64::INFINITY);

        let capped = placer.with_icon_size(80.0);
        assert!((capped.max_scale(176.0) - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_relayout_changes_look() {
        let placer = IconPlacer::new(RADIUS);
        let mut rng = GameRng::new(4);
        let mut card = card(8);

        placer.layout(&mut card, &mut rng);
        let first = card.clone();
        placer.layout(&mut card, &mut rng);

        assert_ne!(first, card);
        assert_eq!(first.index, card.index);
    }

    #[test]
    fn test_layout_clears_centers() {
        let placer = IconPlacer::new(RADIUS);
        let mut rng = GameRng::new(5);
        let mut card = card(4);
        card.icons[1].center = Some((1, 1));

        placer.layout(&mut card, &mut rng);
        assert!(card.icons.iter().all(|i| i.center.is_none()));
    }

    #[test]
    fn test_shuffle_order_keeps_slots() {
        let placer = IconPlacer::new(RADIUS);
        let mut rng = GameRng::new(6);
        let mut card = card(8);
        placer.layout(&mut card, &mut rng);

        let placements: Vec<_> = card.icons.iter().map(|i| i.placement).collect();
        let mut before: Vec<_> = card.ids().collect();

        let mut moved = false;
        for _ in 0..10 {
            let previous: Vec<_> = card.ids().collect();
            IconPlacer::shuffle_order(&mut card, &mut rng);
            moved |= previous != card.ids().collect::<Vec<_>>();
        }
        assert!(moved);

        let after_placements: Vec<_> = card.icons.iter().map(|i| i.placement).collect();
        assert_eq!(placements, after_placements);

        let mut after: Vec<_> = card.ids().collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_empty_card_is_noop() {
        let placer = IconPlacer::new(RADIUS);
        let mut rng = GameRng::new(7);
        let mut card = Card::new(CardIndex::new(0), std::iter::empty());
        placer.layout(&mut card, &mut rng);
        assert!(card.is_empty());
    }
}

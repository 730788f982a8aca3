//! Cards and their positional identity.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::icon::{Icon, IconId};

/// Position of a card inside its deck.
///
/// This is the card's identity. Cards are copied into round slots by value,
/// so two copies of the same card are recognised by index, never by address
/// or contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIndex(pub usize);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A card: an ordered set of icons.
///
/// The last icon is the one a layout places at the card center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub index: CardIndex,
    pub icons: SmallVec<[Icon; 8]>,
}

impl Card {
    /// Create a card from icon IDs, all unplaced.
    pub fn new(index: CardIndex, ids: impl IntoIterator<Item = IconId>) -> Self {
        Self {
            index,
            icons: ids.into_iter().map(Icon::new).collect(),
        }
    }

    /// Number of icons on the card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Check if the card has no icons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Check if the card shows the given icon.
    #[must_use]
    pub fn contains(&self, id: IconId) -> bool {
        self.icons.iter().any(|icon| icon.id == id)
    }

    /// Find the icon with the given ID.
    #[must_use]
    pub fn icon(&self, id: IconId) -> Option<&Icon> {
        self.icons.iter().find(|icon| icon.id == id)
    }

    /// Iterate over the icon IDs in slot order.
    pub fn ids(&self) -> impl Iterator<Item = IconId> + '_ {
        self.icons.iter().map(|icon| icon.id)
    }

    /// Forget every rendered center.
    pub fn clear_centers(&mut self) {
        for icon in &mut self.icons {
            icon.center = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(ids: &[u32]) -> Card {
        Card::new(CardIndex::new(0), ids.iter().copied().map(IconId::new))
    }

    #[test]
    fn test_card_index() {
        let index = CardIndex::new(4);
        assert_eq!(index.raw(), 4);
        assert_eq!(format!("{}", index), "#4");
    }

    #[test]
    fn test_lookup() {
        let card = card(&[1, 2, 3]);
        assert_eq!(card.len(), 3);
        assert!(card.contains(IconId::new(2)));
        assert!(!card.contains(IconId::new(9)));
        assert_eq!(card.icon(IconId::new(3)).map(|i| i.id), Some(IconId::new(3)));
        assert_eq!(card.ids().collect::<Vec<_>>(), vec![IconId(1), IconId(2), IconId(3)]);
    }

    #[test]
    fn test_copies_keep_identity() {
        let original = card(&[1, 2, 3]);
        let mut copy = original.clone();
        copy.icons[0].placement.radius = 42.0;

        assert_ne!(original, copy);
        assert_eq!(original.index, copy.index);
    }

    #[test]
    fn test_clear_centers() {
        let mut card = card(&[1, 2]);
        card.icons[0].center = Some((10, 10));
        card.clear_centers();
        assert!(card.icons.iter().all(|i| i.center.is_none()));
    }
}

//! Deck loading and validation.
//!
//! Content files are plain text:
//!
//! ```text
//! 3 3
//! 1 2 3
//! 1 4 5
//! 2 4 6
//! ```
//!
//! The header gives the number of cards and the number of icons per card,
//! followed by one row of icon IDs per card. A deck is only handed out once
//! every pair of cards has been checked to share exactly one icon.

use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::{info, warn};

use super::card::{Card, CardIndex};
use super::icon::IconId;
use crate::core::error::DeckError;

/// Content file holding the deck for a given icon count.
#[must_use]
pub fn content_file_name(nb_icons: usize) -> String {
    format!("cards_{}.txt", nb_icons)
}

/// Immutable catalogue of cards.
///
/// ## Example
///
/// ```
/// use spot_it::cards::{Deck, CardIndex};
///
/// let deck = Deck::parse("3 3\n1 2 3\n1 4 5\n2 4 6\n").unwrap();
/// assert_eq!(deck.nb_cards(), 3);
/// assert_eq!(deck.nb_icons(), 3);
/// assert_eq!(deck.card(CardIndex::new(2)).unwrap().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    nb_icons: usize,
    cards: Vec<Card>,
}

impl Deck {
    /// Load a deck from a content file.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let text = std::fs::read_to_string(path).map_err(|source| DeckError::ContentAbsent {
            path: path.to_path_buf(),
            source,
        })?;

        match Self::parse(&text) {
            Ok(deck) => {
                info!(
                    path = %path.display(),
                    cards = deck.nb_cards(),
                    icons = deck.nb_icons(),
                    "deck loaded"
                );
                Ok(deck)
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "deck rejected");
                Err(error)
            }
        }
    }

    /// Parse a deck from content text.
    pub fn parse(text: &str) -> Result<Self, DeckError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l))
            .filter(|(_, l)| !l.trim().is_empty());
        let end_line = text.lines().count() + 1;

        let (header_line, header) = lines
            .next()
            .ok_or_else(|| DeckError::malformed(1, "missing header"))?;
        let fields: Vec<&str> = header.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(DeckError::malformed(
                header_line,
                format!("header needs 2 values, found {}", fields.len()),
            ));
        }
        let nb_cards = parse_count(header_line, fields[0], "card count")?;
        let nb_icons = parse_count(header_line, fields[1], "icon count")?;

        let mut rows = Vec::with_capacity(nb_cards);
        for found in 0..nb_cards {
            let (line, row) = lines.next().ok_or_else(|| {
                DeckError::malformed(end_line, format!("expected {} cards, found {}", nb_cards, found))
            })?;
            let ids = parse_row(line, row, nb_icons)?;
            check_row(line, &ids)?;
            rows.push(ids);
        }

        if let Some((line, _)) = lines.next() {
            return Err(DeckError::malformed(line, "unexpected content after the last card"));
        }

        Self::build(nb_icons, rows)
    }

    /// Build a deck from in-memory rows of icon IDs.
    ///
    /// Rows are validated like a content file whose header sits on line 1,
    /// so the error for row `i` reports line `i + 2`.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, DeckError> {
        let nb_icons = rows.first().map_or(0, Vec::len);
        if nb_icons == 0 {
            return Err(DeckError::malformed(1, "a deck needs at least one card with one icon"));
        }

        let mut converted = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != nb_icons {
                return Err(DeckError::malformed(
                    i + 2,
                    format!("expected {} icons, found {}", nb_icons, row.len()),
                ));
            }
            let ids: Vec<IconId> = row.into_iter().map(IconId::new).collect();
            check_row(i + 2, &ids)?;
            converted.push(ids);
        }

        Self::build(nb_icons, converted)
    }

    fn build(nb_icons: usize, rows: Vec<Vec<IconId>>) -> Result<Self, DeckError> {
        let cards: Vec<Card> = rows
            .into_iter()
            .enumerate()
            .map(|(i, ids)| Card::new(CardIndex::new(i), ids))
            .collect();

        validate_pairs(&cards)?;

        Ok(Self { nb_icons, cards })
    }

    /// Number of cards.
    #[must_use]
    pub fn nb_cards(&self) -> usize {
        self.cards.len()
    }

    /// Number of icons on every card.
    #[must_use]
    pub fn nb_icons(&self) -> usize {
        self.nb_icons
    }

    /// Get a card by index.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.raw())
    }

    /// All cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Highest icon ID used by any card.
    #[must_use]
    pub fn max_icon_id(&self) -> Option<IconId> {
        self.cards.iter().flat_map(Card::ids).max()
    }
}

fn parse_count(line: usize, field: &str, what: &str) -> Result<usize, DeckError> {
    match field.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DeckError::malformed(
            line,
            format!("{} must be a positive integer, got {:?}", what, field),
        )),
    }
}

fn parse_row(line: usize, row: &str, nb_icons: usize) -> Result<Vec<IconId>, DeckError> {
    let ids = row
        .split_whitespace()
        .map(|field| {
            field.parse::<u32>().map(IconId::new).map_err(|_| {
                DeckError::malformed(line, format!("icon id must be a non-negative integer, got {:?}", field))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if ids.len() != nb_icons {
        return Err(DeckError::malformed(
            line,
            format!("expected {} icons, found {}", nb_icons, ids.len()),
        ));
    }
    Ok(ids)
}

fn check_row(line: usize, ids: &[IconId]) -> Result<(), DeckError> {
    let mut seen = FxHashSet::default();
    for &id in ids {
        if !seen.insert(id) {
            return Err(DeckError::malformed(line, format!("{} appears twice on one card", id)));
        }
    }
    Ok(())
}

/// Every pair of distinct cards must share exactly one icon.
fn validate_pairs(cards: &[Card]) -> Result<(), DeckError> {
    let sets: Vec<FxHashSet<IconId>> = cards.iter().map(|c| c.ids().collect()).collect();

    for (i, first) in sets.iter().enumerate() {
        for (j, second) in sets.iter().enumerate().skip(i + 1) {
            let shared = first.intersection(second).count();
            if shared != 1 {
                return Err(DeckError::IntegrityViolation {
                    first: CardIndex::new(i),
                    second: CardIndex::new(j),
                    shared,
                });
            }
        }
    }
    Ok(())
}

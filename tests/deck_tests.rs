//! Deck loading tests.
//!
//! These tests verify content files on disk:
//! - Missing and malformed files are rejected
//! - Decks that break the one-shared-icon rule are rejected
//! - The shipped decks are valid

use std::io::Write;
use std::path::PathBuf;

use spot_it::cards::{content_file_name, CardIndex, Deck, IconId};
use spot_it::core::DeckError;

fn write_content(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(text.as_bytes()).expect("write content");
    file
}

/// The three-card deck from the game rules.
#[test]
fn test_load_small_deck() {
    let file = write_content("3 3\n1 2 3\n1 4 5\n2 4 6\n");
    let deck = Deck::load(file.path()).unwrap();

    assert_eq!(deck.nb_cards(), 3);
    assert_eq!(deck.nb_icons(), 3);

    let first = deck.card(CardIndex::new(0)).unwrap();
    let second = deck.card(CardIndex::new(1)).unwrap();
    let shared: Vec<_> = first.ids().filter(|&id| second.contains(id)).collect();
    assert_eq!(shared, vec![IconId::new(1)]);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards_5.txt");

    match Deck::load(&path) {
        Err(DeckError::ContentAbsent { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ContentAbsent, got {:?}", other),
    }
}

#[test]
fn test_malformed_file() {
    let file = write_content("3 3\n1 2 3\n1 4\n2 4 6\n");
    assert!(matches!(
        Deck::load(file.path()),
        Err(DeckError::ContentMalformed { line: 3, .. })
    ));
}

#[test]
fn test_integrity_violation_in_file() {
    // cards 1 and 2 share icons 4 and 5
    let file = write_content("3 3\n1 2 3\n1 4 5\n2 4 5\n");
    match Deck::load(file.path()) {
        Err(DeckError::IntegrityViolation { first, second, shared }) => {
            assert_eq!((first, second, shared), (CardIndex::new(1), CardIndex::new(2), 2));
        }
        other => panic!("expected IntegrityViolation, got {:?}", other),
    }
}

/// Synthetic decks built from a projective plane of order 2 are accepted,
/// and breaking any single card is caught.
#[test]
fn test_synthetic_decks() {
    let fano = vec![
        vec![0, 1, 2],
        vec![0, 3, 4],
        vec![0, 5, 6],
        vec![1, 3, 5],
        vec![1, 4, 6],
        vec![2, 3, 6],
        vec![2, 4, 5],
    ];
    assert!(Deck::from_rows(fano.clone()).is_ok());

    for card in 0..fano.len() {
        let mut broken = fano.clone();
        broken[card][0] = 99;
        assert!(
            matches!(Deck::from_rows(broken), Err(DeckError::IntegrityViolation { .. })),
            "replacing an icon on card {} must break the deck",
            card
        );
    }
}

#[test]
fn test_shipped_decks_are_valid() {
    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");

    for (nb_icons, nb_cards) in [(3, 7), (4, 13), (6, 31), (8, 57)] {
        let deck = Deck::load(&data.join(content_file_name(nb_icons))).unwrap();
        assert_eq!(deck.nb_icons(), nb_icons);
        assert_eq!(deck.nb_cards(), nb_cards);
        assert!(deck.max_icon_id().unwrap().raw() < 80);
    }
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use solitaire::{
    code_to_deck, deck_fingerprint, deck_to_code, decrypt, encrypt, generate_keystream,
    parse_deck_vector, validate, CipherOptions, Deck, HashAlgorithm, SolitaireError,
};
use std::error::Error;

#[test]
fn library_message_chain_with_explicit_deck_handoff() -> Result<(), Box<dyn Error>> {
    let shared = Deck::shuffled(&mut StdRng::seed_from_u64(31337));
    let code = deck_to_code(shared.cards())?;

    // Sender
    let mut sender_deck = code_to_deck(&code)?;
    let first = encrypt("FIRST MESSAGE.", &sender_deck, &CipherOptions::default())?;
    sender_deck = first.final_deck.clone();
    let continued = CipherOptions {
        continued_from_previous_run: true,
    };
    let second = encrypt("SECOND ONE!", &sender_deck, &continued)?;

    // Receiver, starting from the same code
    let mut receiver_deck = Deck::from_code(&code)?;
    let opened = decrypt(&first.text, &receiver_deck, &CipherOptions::default())?;
    assert_eq!(opened.text, "FIRST MESSAGE.");
    receiver_deck = opened.final_deck;
    let opened = decrypt(&second.text, &receiver_deck, &continued)?;
    assert_eq!(opened.text, "SECOND ONE!");
    assert_eq!(opened.final_deck, second.final_deck);
    assert!(opened.warning.is_some());

    Ok(())
}

#[test]
fn library_deck_vector_to_code_and_fingerprint() -> Result<(), Box<dyn Error>> {
    let descending: Vec<String> = (1..=54).rev().map(|c| c.to_string()).collect();
    let deck = parse_deck_vector(&descending.join(" "))?;

    let code = deck.to_code();
    assert_eq!(code, "SqGvQklDTxzyFBvqk19Y5LpNdBKD8FKbVTws4p5z");
    assert_eq!(code_to_deck(&code)?, deck);

    let a = deck_fingerprint(deck.cards(), HashAlgorithm::Sha256)?;
    let b = deck_fingerprint(deck.cards(), HashAlgorithm::Sha256)?;
    assert_eq!(a, b);
    assert_ne!(
        a,
        deck_fingerprint(Deck::ordered().cards(), HashAlgorithm::Sha256)?
    );

    Ok(())
}

#[test]
fn library_invalid_decks_never_get_an_identity() {
    let mut cards: Vec<i64> = (1..=54).collect();
    cards[53] = 52;

    assert!(matches!(validate(&cards), Err(SolitaireError::MissingJoker)));
    assert!(deck_to_code(&cards).is_err());
    assert!(deck_fingerprint(&cards, HashAlgorithm::Sha256).is_err());
}

#[test]
fn library_keystream_avalanche_on_arbitrary_swap() {
    let baseline = Deck::ordered();
    let mut cards = baseline.cards().to_vec();
    cards.swap(10, 40);
    let perturbed = Deck::new(cards).unwrap();

    let a = generate_keystream(&baseline, 64);
    let b = generate_keystream(&perturbed, 64);
    let differing = a
        .keystream
        .iter()
        .zip(&b.keystream)
        .filter(|(x, y)| x != y)
        .count();
    assert!(differing as f64 / 64.0 > 0.6);
}

#[test]
fn library_empty_message_leaves_deck_alone() -> Result<(), Box<dyn Error>> {
    let deck = Deck::shuffled(&mut StdRng::seed_from_u64(5));
    let result = encrypt("", &deck, &CipherOptions::default())?;
    assert_eq!(result.final_deck, deck);
    assert!(result.keystream.is_empty());
    Ok(())
}

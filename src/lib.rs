//! Schneier's Solitaire (Pontifex) cipher.
//!
//! A keystream cipher run by hand with a deck of cards. The whole secret
//! state is the order of 54 tokens: 52 ranked cards plus two jokers.
//!
//! ## Cards
//!
//! - [`cards::Token`] — a ranked [`cards::Card`] or one of the two [`cards::Joker`]s
//! - [`cards::Deck`] — all 54 tokens in some order, and the shuffling rules
//!
//! ## Cipher
//!
//! - [`cipher::Keystream`] — values in 1..=52, one deck round per attempt
//! - [`cipher::Passphrase`] — keys a deck one letter at a time
//! - [`cipher::encrypt`] / [`cipher::decrypt`] — whole messages in five-letter blocks
//! - [`cipher::Cipher`] — the same, one typed character at a time
//!
//! ```
//! use solitaire::cards::Deck;
//! use solitaire::cipher::{encrypt, Passphrase};
//!
//! let deck = Deck::new().key(&Passphrase::from("FOO"));
//! assert_eq!(encrypt("AAAAAAAAAAAAAAA", deck), "ITHZU JIWGR FARMW");
//! ```
pub mod cards;
pub mod cipher;
#[cfg(feature = "cli")]
pub mod cli;

/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize terminal logging on stderr, keeping stdout for cipher text.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

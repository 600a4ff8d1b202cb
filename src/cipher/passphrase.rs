use super::letter::Letter;
use crate::cards::deck::Deck;

/// The letters of a keying passphrase.
///
/// Only ASCII letters take part in keying. Anything else is dropped
/// when the passphrase is built, so "Foo Bar!" keys exactly like
/// "FOOBAR".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Passphrase(Vec<Letter>);

impl Passphrase {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Passphrase {
    fn from(s: &str) -> Self {
        let letters = s
            .chars()
            .filter_map(|c| Letter::try_from(c).ok())
            .collect::<Vec<Letter>>();
        let skipped = s.chars().count() - letters.len();
        if skipped > 0 {
            log::debug!("passphrase: skipped {} non-letter characters", skipped);
        }
        Self(letters)
    }
}

/// never print key material
impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Passphrase({} letters)", self.0.len())
    }
}

impl Deck {
    /// For each letter: play a round, then cut by the letter's
    /// alphabet position instead of by the bottom card.
    pub fn key(self, passphrase: &Passphrase) -> Self {
        log::debug!("keying deck with {} letters", passphrase.len());
        passphrase
            .0
            .iter()
            .fold(self, |deck, letter| deck.round().cut(letter.ordinal()))
    }
}

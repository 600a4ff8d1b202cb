use super::keystream::Keystream;
use super::letter::Letter;
use crate::cards::deck::Deck;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Letter-at-a-time cipher over a running keystream.
///
/// This is the form a live typing session needs: every letter pushed
/// draws one keystream value, anything else is ignored without
/// touching the deck.
#[derive(Debug, Clone)]
pub struct Cipher {
    keystream: Keystream,
    direction: Direction,
}

impl Cipher {
    pub fn new(deck: Deck, direction: Direction) -> Self {
        Self {
            keystream: Keystream::from(deck),
            direction,
        }
    }
    pub fn encrypt(deck: Deck) -> Self {
        Self::new(deck, Direction::Encrypt)
    }
    pub fn decrypt(deck: Deck) -> Self {
        Self::new(deck, Direction::Decrypt)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
    /// letters processed so far
    pub fn count(&self) -> usize {
        self.keystream.emitted()
    }
    /// rounds played, rejected keystream attempts included
    pub fn rounds(&self) -> usize {
        self.keystream.rounds()
    }
    pub fn deck(&self) -> Deck {
        self.keystream.deck()
    }

    pub fn apply(&mut self, letter: Letter) -> Letter {
        let v = self
            .keystream
            .next()
            .unwrap_or_else(|| unreachable!("keystream never ends"));
        match self.direction {
            Direction::Encrypt => letter.shift(v),
            Direction::Decrypt => letter.unshift(v),
        }
    }

    pub fn push(&mut self, c: char) -> Option<Letter> {
        Letter::try_from(c).ok().map(|letter| self.apply(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn ignores_non_letters() {
        let mut cipher = Cipher::encrypt(Deck::new());
        assert!(cipher.push(' ').is_none());
        assert!(cipher.push('7').is_none());
        assert!(cipher.count() == 0);
        assert!(cipher.deck() == Deck::new());
        assert!(cipher.push('a').map(char::from) == Some('E'));
        assert!(cipher.count() == 1);
    }

    #[test]
    fn typing_matches_canonical_vector() {
        let mut cipher = Cipher::encrypt(Deck::new());
        let typed = "AAAAAAAAAA"
            .chars()
            .filter_map(|c| cipher.push(c))
            .map(char::from)
            .collect::<String>();
        assert!(typed == "EXKYIZSGEH");
    }

    #[test]
    fn decrypt_undoes_encrypt() {
        let deck = Deck::random();
        let mut encrypt = Cipher::encrypt(deck);
        let mut decrypt = Cipher::decrypt(deck);
        for _ in 0..128 {
            let letter = Letter::random();
            assert!(letter == decrypt.apply(encrypt.apply(letter)));
        }
        assert!(encrypt.deck() == decrypt.deck());
    }
}

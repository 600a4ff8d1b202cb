use crate::cards::deck::Deck;

/// Endless source of keystream values in 1..=52.
///
/// Each attempt advances the deck by exactly one round. An attempt
/// that turns up a joker (value 53) is thrown away and retried on
/// the advanced deck, so a value costs at least one round and
/// sometimes more. `take(n)` gives the finite stream.
#[derive(Debug, Clone)]
pub struct Keystream {
    deck: Deck,
    rounds: usize,
    emitted: usize,
}

impl From<Deck> for Keystream {
    fn from(deck: Deck) -> Self {
        Self {
            deck,
            rounds: 0,
            emitted: 0,
        }
    }
}

impl Keystream {
    /// deck state after the last round, where the stream would resume
    pub fn deck(&self) -> Deck {
        self.deck
    }
    /// rounds played so far, rejected attempts included
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl Iterator for Keystream {
    type Item = u8;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.deck = self.deck.round();
            self.rounds += 1;
            match self.deck.output() {
                53 => log::trace!("joker output at round {}, retrying", self.rounds),
                x => {
                    self.emitted += 1;
                    return Some(x);
                }
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl Deck {
    /// exactly `n` keystream values starting from this deck
    pub fn stream(self, n: usize) -> std::iter::Take<Keystream> {
        Keystream::from(self).take(n)
    }
}

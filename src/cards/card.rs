use super::rank::Rank;
use super::suit::Suit;

/// One of the 52 ranked cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// rank plus suit offset, 1..=52
    pub const fn value(&self) -> u8 {
        self.rank as u8 + self.suit.offset()
    }
    /// all 52 cards in bridge order, Ac first and Ks last
    pub fn all() -> impl Iterator<Item = Self> {
        Suit::all()
            .into_iter()
            .flat_map(|suit| Rank::all().into_iter().map(move |rank| Self { rank, suit }))
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its cipher value 1..=52
/// Td
/// 10 + 13 = 23
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.value()
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((1..=52).contains(&n), "Invalid card u8: {}", n);
        Self {
            rank: Rank::from((n - 1) % 13 + 1),
            suit: Suit::from((n - 1) / 13),
        }
    }
}

/// u64 injection
/// each card is one bit turned on, at position value - 1
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << (c.value() - 1)
    }
}

impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        anyhow::ensure!(s.len() == 2 && s.is_ascii(), "invalid card: {:?}", s);
        let rank = Rank::try_from(&s[0..1])?;
        let suit = Suit::try_from(&s[1..2])?;
        Ok(Card::from((rank, suit)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for card in Card::all() {
            assert!(card == Card::from(u8::from(card)));
        }
    }

    #[test]
    fn bijective_str() {
        for card in Card::all() {
            assert!(card == Card::try_from(card.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn values_are_bridge_order() {
        let values = Card::all().map(u8::from).collect::<Vec<u8>>();
        assert!(values == (1..=52).collect::<Vec<u8>>());
    }

    #[test]
    fn known_values() {
        assert!(Card::try_from("Ac").unwrap().value() == 1);
        assert!(Card::try_from("Kc").unwrap().value() == 13);
        assert!(Card::try_from("Td").unwrap().value() == 23);
        assert!(Card::try_from("Qh").unwrap().value() == 38);
        assert!(Card::try_from("Ks").unwrap().value() == 52);
    }

    #[test]
    #[should_panic]
    fn zero_is_not_a_card() {
        let _ = Card::from(0u8);
    }
}

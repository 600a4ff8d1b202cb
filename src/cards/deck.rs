use super::joker::Joker;
use super::token::Token;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordering of all 54 tokens, top of the deck first.
///
/// The array is private, so every Deck that exists holds each token
/// exactly once. Decks from the outside world go through TryFrom,
/// which rejects wrong lengths and duplicates before any shuffling
/// rule gets to see them.
///
/// All the rearrangements take the deck by value and hand back a
/// new one. Deck is Copy, so callers thread state explicitly:
/// `let deck = deck.round();`
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Deck([Token; 54]);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub const SIZE: usize = 54;

    /// Canonical order: clubs A..K, diamonds, hearts, spades, JA, JB.
    pub fn new() -> Self {
        let mut cards = [Token::Joker(Joker::A); Self::SIZE];
        cards
            .iter_mut()
            .zip(Token::all())
            .for_each(|(slot, token)| *slot = token);
        Self(cards)
    }

    /// Unkeyed deck, permuted by the injected generator.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.0.shuffle(rng);
        deck
    }

    pub fn top(&self) -> Token {
        self.0[0]
    }
    pub fn bottom(&self) -> Token {
        self.0[Self::SIZE - 1]
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }
    /// zero-based distance from the top
    pub fn position(&self, token: Token) -> usize {
        self.0
            .iter()
            .position(|t| *t == token)
            .unwrap_or_else(|| unreachable!("every deck holds {}", token))
    }

    /// Move a joker down by its step, wrapping around the bottom.
    ///
    /// The joker is lifted out first, so the target index lives in a
    /// 53-card deck and the wrap subtracts 53. That is what keeps a
    /// wrapping joker from ever becoming the top card: JA on the
    /// bottom lands under the top card, JB on the bottom lands
    /// under the second.
    pub fn move_joker(self, joker: Joker) -> Self {
        let from = self.position(Token::Joker(joker));
        let into = match from + joker.step() {
            n if n > Self::SIZE - 1 => n - (Self::SIZE - 1),
            n => n,
        };
        let mut cards = self.0;
        if into > from {
            cards[from..=into].rotate_left(1);
        } else {
            cards[into..=from].rotate_right(1);
        }
        Self(cards)
    }

    /// JA one step, then JB two steps.
    pub fn move_jokers(self) -> Self {
        self.move_joker(Joker::A).move_joker(Joker::B)
    }

    /// Swap the cards above the first joker with the cards below the
    /// second. The span from joker to joker stays put, in order.
    pub fn triple_cut(self) -> Self {
        let a = self.position(Token::Joker(Joker::A));
        let b = self.position(Token::Joker(Joker::B));
        let (lo, hi) = (a.min(b), a.max(b));
        let prefix = &self.0[..lo];
        let middle = &self.0[lo..=hi];
        let suffix = &self.0[hi + 1..];
        let mut cards = self.0;
        cards
            .iter_mut()
            .zip(suffix.iter().chain(middle).chain(prefix))
            .for_each(|(slot, token)| *slot = *token);
        Self(cards)
    }

    /// Move the top `count` cards to just above the bottom card.
    /// The bottom card never moves. A count of 53 is a no-op.
    pub fn cut(self, count: u8) -> Self {
        assert!(count <= 53, "count cut past the bottom card: {}", count);
        if count == 53 {
            return self;
        }
        let mut cards = self.0;
        cards[..Self::SIZE - 1].rotate_left(count as usize);
        Self(cards)
    }

    /// Count cut by the value of the bottom card.
    pub fn count_cut(self) -> Self {
        let count = self.bottom().value();
        self.cut(count)
    }

    /// One full Solitaire step. The only transition the keystream uses.
    pub fn round(self) -> Self {
        self.move_jokers().triple_cut().count_cut()
    }

    /// Look down past the top card by the top card's value.
    /// 53 means a joker turned up and the round yields nothing.
    pub fn output(&self) -> u8 {
        self.0[self.top().value() as usize].value()
    }
}

impl crate::Arbitrary for Deck {
    fn random() -> Self {
        Self::shuffled(&mut rand::rng())
    }
}

impl From<Deck> for [Token; 54] {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

impl IntoIterator for Deck {
    type Item = Token;
    type IntoIter = std::array::IntoIter<Token, 54>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl TryFrom<&[Token]> for Deck {
    type Error = anyhow::Error;
    fn try_from(tokens: &[Token]) -> Result<Self, Self::Error> {
        anyhow::ensure!(
            tokens.len() == Self::SIZE,
            "deck holds {} tokens, expected {}",
            tokens.len(),
            Self::SIZE
        );
        // 54 tokens with no repeats out of 54 possible bits covers them all
        let mut seen = 0u64;
        for token in tokens {
            let bit = u64::from(*token);
            anyhow::ensure!(seen & bit == 0, "duplicate token in deck: {}", token);
            seen |= bit;
        }
        let mut cards = [Token::Joker(Joker::A); Self::SIZE];
        cards.copy_from_slice(tokens);
        Ok(Self(cards))
    }
}
impl TryFrom<Vec<Token>> for Deck {
    type Error = anyhow::Error;
    fn try_from(tokens: Vec<Token>) -> Result<Self, Self::Error> {
        Self::try_from(tokens.as_slice())
    }
}

/// whitespace separated notation, e.g. "Ac 2c 3c ... Ks JA JB"
impl TryFrom<&str> for Deck {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Token::try_from)
            .collect::<Result<Vec<Token>, _>>()
            .and_then(|tokens| Self::try_from(tokens.as_slice()))
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{}", first)?;
        }
        tokens.try_for_each(|token| write!(f, " {}", token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::cards::card::Card;

    const JA: Token = Token::Joker(Joker::A);
    const JB: Token = Token::Joker(Joker::B);

    fn card(s: &str) -> Token {
        Token::Card(Card::try_from(s).unwrap())
    }

    #[test]
    fn canonical_order() {
        let deck = Deck::new();
        assert!(deck.top() == card("Ac"));
        assert!(deck.position(card("Kc")) == 12);
        assert!(deck.position(card("Ad")) == 13);
        assert!(deck.position(card("Ks")) == 51);
        assert!(deck.position(JA) == 52);
        assert!(deck.bottom() == JB);
    }

    #[test]
    fn bijective_str() {
        let deck = Deck::random();
        assert!(deck == Deck::try_from(deck.to_string().as_str()).unwrap());
    }

    #[test]
    fn rejects_short_decks() {
        let tokens = Deck::new().into_iter().skip(1).collect::<Vec<Token>>();
        assert!(Deck::try_from(tokens).is_err());
    }

    #[test]
    fn rejects_duplicates() {
        let mut tokens = Deck::new().into_iter().collect::<Vec<Token>>();
        tokens[0] = JB;
        assert!(Deck::try_from(tokens).is_err());
    }

    #[test]
    fn rejects_unknown_notation() {
        let notation = Deck::new().to_string().replace("Ac", "1c");
        assert!(Deck::try_from(notation.as_str()).is_err());
    }

    #[test]
    fn joker_a_steps_down_one() {
        let deck = Deck::new().move_joker(Joker::A);
        assert!(deck.position(JA) == 53);
        assert!(deck.position(JB) == 52);
    }

    #[test]
    fn joker_a_wraps_under_top_card() {
        let deck = Deck::new().move_joker(Joker::A).move_joker(Joker::A);
        assert!(deck.position(JA) == 1);
        assert!(deck.top() == card("Ac"));
    }

    #[test]
    fn joker_b_wraps_from_bottom_under_second_card() {
        let deck = Deck::new().move_joker(Joker::B);
        assert!(deck.position(JB) == 2);
        assert!(deck.position(JA) == 53);
    }

    #[test]
    fn joker_b_wraps_from_second_to_last_under_top_card() {
        let deck = Deck::new().move_joker(Joker::A);
        assert!(deck.position(JB) == 52);
        let deck = deck.move_joker(Joker::B);
        assert!(deck.position(JB) == 1);
    }

    #[test]
    fn moved_joker_never_lands_on_top() {
        for _ in 0..256 {
            let deck = Deck::random();
            for joker in Joker::all() {
                let from = deck.position(Token::Joker(joker));
                let moved = deck.move_joker(joker);
                let into = moved.position(Token::Joker(joker));
                let expected = match from + joker.step() {
                    n if n > 53 => n - 53,
                    n => n,
                };
                assert!(into == expected);
                assert!(into != 0);
                assert!(moved.iter().filter(|t| !t.is_joker()).eq(deck
                    .iter()
                    .filter(|t| !t.is_joker())));
            }
        }
    }

    #[test]
    fn triple_cut_keeps_middle() {
        for _ in 0..256 {
            let deck = Deck::random();
            let a = deck.position(JA);
            let b = deck.position(JB);
            let (lo, hi) = (a.min(b), a.max(b));
            let cut = deck.triple_cut();
            let cards = <[Token; 54]>::from(cut);
            let start = 53 - hi;
            let before = <[Token; 54]>::from(deck);
            assert!(cards[start..start + hi - lo + 1] == before[lo..=hi]);
            assert!(cards[..start] == before[hi + 1..]);
            assert!(cards[start + hi - lo + 1..] == before[..lo]);
        }
    }

    #[test]
    fn triple_cut_twice_is_identity() {
        for _ in 0..64 {
            let deck = Deck::random();
            assert!(deck == deck.triple_cut().triple_cut());
        }
    }

    #[test]
    fn triple_cut_without_outer_cards_is_identity() {
        let deck = Deck::try_from(
            std::iter::once(JA)
                .chain(Card::all().map(Token::Card))
                .chain(std::iter::once(JB))
                .collect::<Vec<Token>>(),
        )
        .unwrap();
        assert!(deck == deck.triple_cut());
    }

    #[test]
    fn count_cut_holds_bottom_card() {
        for _ in 0..256 {
            let deck = Deck::random();
            let cut = deck.count_cut();
            assert!(cut.bottom() == deck.bottom());
            if !deck.bottom().is_joker() {
                let n = deck.bottom().value() as usize;
                let before = <[Token; 54]>::from(deck);
                let after = <[Token; 54]>::from(cut);
                assert!(after[53 - n..53] == before[..n]);
                assert!(after[..53 - n] == before[n..53]);
            }
        }
    }

    #[test]
    fn count_cut_under_joker_is_noop() {
        let deck = Deck::new();
        assert!(deck.bottom().is_joker());
        assert!(deck == deck.count_cut());
        assert!(deck == deck.cut(53));
        assert!(deck == deck.cut(0));
    }

    #[test]
    fn cut_by_one() {
        let deck = Deck::new().cut(1);
        assert!(deck.top() == card("2c"));
        assert!(deck.position(card("Ac")) == 52);
        assert!(deck.bottom() == JB);
    }

    #[test]
    #[should_panic]
    fn cut_past_bottom_panics() {
        let _ = Deck::new().cut(54);
    }

    #[test]
    fn round_from_canonical() {
        let expected = Deck::new()
            .into_iter()
            .skip(1)
            .filter(|t| !t.is_joker())
            .chain([JA, JB, card("Ac")])
            .collect::<Vec<Token>>();
        assert!(Deck::new().round() == Deck::try_from(expected).unwrap());
    }

    #[test]
    fn round_is_closed() {
        for _ in 0..256 {
            let deck = Deck::random().round();
            let tokens = deck.into_iter().collect::<Vec<Token>>();
            assert!(Deck::try_from(tokens).is_ok());
        }
    }

    #[test]
    fn first_output_from_canonical() {
        // Ac 2c 3c 4c ... after one round the top is 2c, so look at index 2
        assert!(Deck::new().round().output() == 4);
    }

    #[test]
    fn shuffled_is_reproducible() {
        use rand::SeedableRng;
        let ref mut a = rand::rngs::SmallRng::seed_from_u64(54);
        let ref mut b = rand::rngs::SmallRng::seed_from_u64(54);
        assert!(Deck::shuffled(a) == Deck::shuffled(b));
    }
}

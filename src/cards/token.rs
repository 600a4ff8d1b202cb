use super::card::Card;
use super::joker::Joker;

/// Any of the 54 things that can sit in a Solitaire deck.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Token {
    Card(Card),
    Joker(Joker),
}

impl Token {
    /// value used by count cuts and output lookup.
    /// both jokers are worth 53.
    pub const fn value(&self) -> u8 {
        match self {
            Token::Card(card) => card.value(),
            Token::Joker(_) => 53,
        }
    }
    pub const fn is_joker(&self) -> bool {
        matches!(self, Token::Joker(_))
    }
    /// canonical order: Ac..Kc, Ad..Kd, Ah..Kh, As..Ks, JA, JB
    pub fn all() -> impl Iterator<Item = Self> {
        Card::all()
            .map(Token::Card)
            .chain(Joker::all().into_iter().map(Token::Joker))
    }
}

impl From<Card> for Token {
    fn from(card: Card) -> Self {
        Token::Card(card)
    }
}
impl From<Joker> for Token {
    fn from(joker: Joker) -> Self {
        Token::Joker(joker)
    }
}

/// u64 injection
/// cards occupy bits 0..52, JA bit 52, JB bit 53.
/// a full deck ORs to exactly 54 ones.
impl From<Token> for u64 {
    fn from(token: Token) -> u64 {
        match token {
            Token::Card(card) => u64::from(card),
            Token::Joker(Joker::A) => 1 << 52,
            Token::Joker(Joker::B) => 1 << 53,
        }
    }
}

impl TryFrom<&str> for Token {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Joker::try_from(s)
            .map(Token::Joker)
            .or_else(|_| Card::try_from(s).map(Token::Card))
            .map_err(|_| anyhow::anyhow!("invalid token: {:?}", s.trim()))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Card(card) => write!(f, "{}", card),
            Token::Joker(joker) => write!(f, "{}", joker),
        }
    }
}

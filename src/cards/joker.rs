/// The two distinguishable jokers. They share a value
/// but move down the deck by different distances.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Joker {
    A,
    B,
}

impl Joker {
    pub const fn all() -> [Self; 2] {
        [Joker::A, Joker::B]
    }
    /// how far the joker travels in a round
    pub const fn step(&self) -> usize {
        match self {
            Joker::A => 1,
            Joker::B => 2,
        }
    }
}

impl TryFrom<&str> for Joker {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "JA" => Ok(Joker::A),
            "JB" => Ok(Joker::B),
            s => Err(anyhow::anyhow!("invalid joker: {:?}", s)),
        }
    }
}

impl std::fmt::Display for Joker {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Joker::A => write!(f, "JA"),
            Joker::B => write!(f, "JB"),
        }
    }
}

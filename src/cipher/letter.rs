/// A letter of the 26-letter alphabet, A = 0 through Z = 25.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    pub const X: Self = Self(23);

    /// 1-based alphabet position, A = 1 through Z = 26
    pub const fn ordinal(&self) -> u8 {
        self.0 + 1
    }
    /// advance by a keystream value
    pub const fn shift(self, v: u8) -> Self {
        Self((self.0 + v % 26) % 26)
    }
    /// undo a shift by the same keystream value
    pub const fn unshift(self, v: u8) -> Self {
        Self((self.0 + 26 - v % 26) % 26)
    }
}

/// case-insensitive; anything outside A-Z is rejected
impl TryFrom<char> for Letter {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        anyhow::ensure!(c.is_ascii_alphabetic(), "not a letter: {:?}", c);
        Ok(Self(c.to_ascii_uppercase() as u8 - b'A'))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        (b'A' + letter.0) as char
    }
}

impl crate::Arbitrary for Letter {
    fn random() -> Self {
        Self(rand::random_range(0..26))
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

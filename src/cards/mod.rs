pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod joker;
pub use joker::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;

pub mod token;
pub use token::*;

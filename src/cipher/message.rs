use super::session::Cipher;
use crate::cards::deck::Deck;

pub const BLOCK: usize = 5;

/// Keep the ASCII letters, upper-cased.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Append X until the number of letters is a multiple of five.
/// Non-letters are left in place and do not count.
pub fn pad(text: &str) -> String {
    let letters = text.chars().filter(char::is_ascii_alphabetic).count();
    let missing = (BLOCK - letters % BLOCK) % BLOCK;
    std::iter::once(text)
        .chain(std::iter::repeat_n("X", missing))
        .collect()
}

/// Split into five-letter groups separated by single spaces.
pub fn blocks(letters: &str) -> String {
    letters
        .chars()
        .collect::<Vec<char>>()
        .chunks(BLOCK)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Pad, normalize, combine with the keystream from `deck`, and
/// print in blocks of five.
pub fn encrypt(text: &str, deck: Deck) -> String {
    let mut cipher = Cipher::encrypt(deck);
    let letters = normalize(&pad(text))
        .chars()
        .filter_map(|c| cipher.push(c))
        .map(char::from)
        .collect::<String>();
    log::debug!(
        "encrypted {} letters in {} rounds",
        cipher.count(),
        cipher.rounds()
    );
    blocks(&letters)
}

/// Inverse of encrypt when started from the same deck. Block spacing
/// and any other non-letters in the input are ignored; the result is
/// unspaced and keeps the padding.
pub fn decrypt(text: &str, deck: Deck) -> String {
    let mut cipher = Cipher::decrypt(deck);
    normalize(text)
        .chars()
        .filter_map(|c| cipher.push(c))
        .map(char::from)
        .collect()
}

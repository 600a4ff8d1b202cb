use super::args::Args;
use super::args::Command;
use super::args::KEY_VAR;
use crate::cards::deck::Deck;
use crate::cipher::message;
use crate::cipher::passphrase::Passphrase;
use std::io::Read;

impl Args {
    pub fn run(self) -> anyhow::Result<()> {
        let deck = self.start()?;
        match self.command {
            Command::Encrypt { text } => println!("{}", message::encrypt(&input(text)?, deck)),
            Command::Decrypt { text } => println!("{}", message::decrypt(&input(text)?, deck)),
            Command::Stream { count } => println!(
                "{}",
                deck.stream(count)
                    .map(|v| v.to_string())
                    .collect::<Vec<String>>()
                    .join(" ")
            ),
            Command::Deck => println!("{}", deck),
        }
        Ok(())
    }

    /// the starting deck, keyed by the passphrase
    pub fn start(&self) -> anyhow::Result<Deck> {
        let deck = match self.deck.as_deref() {
            Some(notation) => Deck::try_from(notation)?,
            None => Deck::new(),
        };
        Ok(deck.key(&self.passphrase()?))
    }

    fn passphrase(&self) -> anyhow::Result<Passphrase> {
        let key = match self.key.clone().or_else(|| std::env::var(KEY_VAR).ok()) {
            Some(key) => key,
            None => dialoguer::Password::new()
                .with_prompt("Encryption key")
                .allow_empty_password(true)
                .interact()?,
        };
        let passphrase = Passphrase::from(key.as_str());
        if passphrase.is_empty() {
            log::warn!("passphrase has no letters, deck stays unkeyed");
        }
        Ok(passphrase)
    }
}

fn input(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

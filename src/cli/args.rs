use clap::Parser;
use clap::Subcommand;

/// environment fallback for --key
pub const KEY_VAR: &str = "SOLITAIRE_KEY";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(
        short,
        long,
        global = true,
        help = "Passphrase to key the deck with (falls back to $SOLITAIRE_KEY, then a prompt)"
    )]
    pub key: Option<String>,
    #[arg(
        long,
        global = true,
        value_name = "NOTATION",
        help = "Starting deck, e.g. \"Ac 2c ... Ks JA JB\", instead of the canonical order"
    )]
    pub deck: Option<String>,
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Log more (repeat for debug and trace)"
    )]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    #[command(
        about = "Encrypt text, or stdin when absent, into five-letter blocks",
        alias = "enc"
    )]
    Encrypt { text: Option<String> },
    #[command(
        about = "Decrypt five-letter blocks, or stdin when absent",
        alias = "dec"
    )]
    Decrypt { text: Option<String> },
    #[command(about = "Print raw keystream values", alias = "ks")]
    Stream {
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
    #[command(about = "Print the keyed deck in card notation")]
    Deck,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

//! Solitaire Binary
//!
//! Encrypt, decrypt, or inspect the keystream from the command line.
//!
//! Options: --key, --deck, -v

use clap::Parser;
use solitaire::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    solitaire::log(args.level())?;
    args.run()
}

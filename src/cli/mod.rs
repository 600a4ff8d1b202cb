pub mod args;
pub use args::*;

mod run;

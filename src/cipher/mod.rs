pub mod keystream;
pub use keystream::*;

pub mod letter;
pub use letter::*;

pub mod message;
pub use message::*;

pub mod passphrase;
pub use passphrase::*;

pub mod session;
pub use session::*;

mod completion;
mod conversation;
mod envelope;
mod message;
mod persona;

pub use completion::*;
pub use conversation::*;
pub use envelope::*;
pub use message::*;
pub use persona::*;

mod chat_session;
mod converse;

pub use chat_session::*;
pub use converse::*;

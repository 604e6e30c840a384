pub mod chat_controller;
pub mod personas_controller;
pub mod serve_controller;

pub use chat_controller::{run_chat, ChatController};
pub use personas_controller::PersonasController;
pub use serve_controller::ServeController;

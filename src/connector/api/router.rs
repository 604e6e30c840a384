use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ChatController, PersonasController, ServeController};

pub struct Router<'a> {
    serve_controller: ServeController<'a>,
    chat_controller: ChatController<'a>,
    personas_controller: PersonasController,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            serve_controller: ServeController::new(container),
            chat_controller: ChatController::new(container),
            personas_controller: PersonasController::new(),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Serve { port, public } => self.serve_controller.serve(port, public).await,
            Commands::Chat {
                url,
                conversation_type,
            } => self.chat_controller.chat(url, conversation_type).await,
            Commands::Personas => self.personas_controller.list(),
        }
    }
}

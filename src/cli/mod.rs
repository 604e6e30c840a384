use clap::Subcommand;

use crate::connector::DEFAULT_SERVER_URL;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the answer endpoint (POST /api/answer)
    Serve {
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Chat with a running server from the terminal
    Chat {
        /// Base URL of the answer server
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        url: String,

        /// Conversation type (see `personas`)
        #[arg(short = 't', long = "type", default_value = "michael_scott")]
        conversation_type: String,
    },

    /// List the supported conversation types
    Personas,
}

mod http_answer_transport;
mod mock_completion;
mod openai_client;

pub use http_answer_transport::*;
pub use mock_completion::*;
pub use openai_client::*;

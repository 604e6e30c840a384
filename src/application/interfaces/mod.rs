mod answer_transport;
mod completion_service;

pub use answer_transport::*;
pub use completion_service::*;

mod answer_handler;
mod app;
mod validation;

pub use answer_handler::answer;
pub use app::*;
pub use validation::*;

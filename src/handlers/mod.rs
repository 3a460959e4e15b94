pub mod answer_handler;
pub mod challenge_handler;
pub mod health_handler;

pub use answer_handler::submit_answer;
pub use challenge_handler::{get_attempt_status, get_challenge, list_questions};
pub use health_handler::health_check;

pub mod request;
pub mod response;

pub use request::SubmitAnswerRequest;
pub use response::{AnswerResultResponse, AttemptStatusResponse, QuestionView};

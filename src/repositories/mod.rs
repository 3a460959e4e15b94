pub mod answer_repository;
pub mod attempt_repository;
pub mod challenge_repository;
pub mod question_repository;

pub use answer_repository::{AnswerRepository, MongoAnswerRepository};
pub use attempt_repository::{AttemptRepository, MongoAttemptRepository};
pub use challenge_repository::{ChallengeRepository, MongoChallengeRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};

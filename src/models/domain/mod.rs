pub mod answer;
pub mod attempt;
pub mod challenge;
pub mod notification;
pub mod question;
pub mod user;

pub use answer::Answer;
pub use attempt::{Attempt, EndedReason};
pub use challenge::{Challenge, ChallengeVariant};
pub use notification::Notification;
pub use question::{AnswerOption, Question};
pub use user::{User, UserRole};

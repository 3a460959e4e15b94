pub mod answer_service;
pub mod challenge_service;
pub mod notifier;
pub mod scoring;
pub mod xp_ledger;

pub use answer_service::{AnswerOutcome, AnswerService};
pub use challenge_service::ChallengeService;
pub use notifier::{MongoNotifier, Notifier};
pub use xp_ledger::{MongoXpLedger, XpLedger};

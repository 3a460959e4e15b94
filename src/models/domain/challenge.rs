use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Titles like "Who Wants to Be a Millionaire", "Million Dollar Quiz" mark the
/// ten-level elimination ladder. This is an authoring convention, not a schema
/// field, so the detection lives in one place only.
static LADDER_TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)million").expect("ladder title pattern is valid"));

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub question_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeVariant {
    /// Answer any question in any order; completed once all are answered.
    Standard,
    /// Escalating-stakes ladder; the first wrong answer ends the attempt.
    Ladder,
}

impl ChallengeVariant {
    pub fn classify(title: &str) -> Self {
        if LADDER_TITLE_PATTERN.is_match(title) {
            ChallengeVariant::Ladder
        } else {
            ChallengeVariant::Standard
        }
    }
}

impl Challenge {
    pub fn variant(&self) -> ChallengeVariant {
        ChallengeVariant::classify(&self.title)
    }
}

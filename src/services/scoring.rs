use crate::models::domain::{AnswerOption, ChallengeVariant, Question};

/// Escalating stakes for the ten-level ladder, indexed by order_index.
pub const LADDER_XP_TABLE: [i64; 10] =
    [100, 200, 300, 400, 500, 1000, 2000, 3000, 5000, 10000];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreOutcome {
    pub is_correct: bool,
    pub xp_earned: i64,
}

/// Pure scoring function: no persistence, no side effects.
pub fn score_answer(
    question: &Question,
    option: &AnswerOption,
    variant: ChallengeVariant,
) -> ScoreOutcome {
    let is_correct = option.is_correct;

    let xp_earned = if !is_correct {
        0
    } else {
        match variant {
            ChallengeVariant::Ladder => ladder_xp(question),
            ChallengeVariant::Standard => question.xp_value,
        }
    };

    ScoreOutcome {
        is_correct,
        xp_earned,
    }
}

/// Applied after scoring. Never touches is_correct; only zeroes the payout.
/// The flag is a reserved policy hook and is false in every deployment today.
pub fn apply_leader_gate(xp_earned: i64, block_leader_xp: bool, is_leader: bool) -> (i64, bool) {
    if block_leader_xp && is_leader {
        (0, true)
    } else {
        (xp_earned, false)
    }
}

fn ladder_xp(question: &Question) -> i64 {
    usize::try_from(question.order_index)
        .ok()
        .and_then(|idx| LADDER_XP_TABLE.get(idx).copied())
        .unwrap_or(question.xp_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::question::AnswerOption;

    fn question(order_index: i64, xp_value: i64) -> Question {
        Question {
            id: format!("q-{}", order_index),
            challenge_id: "ch-1".to_string(),
            order_index,
            xp_value,
            options: vec![],
            created_at: None,
        }
    }

    fn option(is_correct: bool) -> AnswerOption {
        AnswerOption {
            id: "opt-1".to_string(),
            is_correct,
            explanation: None,
        }
    }

    #[test]
    fn incorrect_answer_earns_nothing_in_both_variants() {
        let q = question(3, 50);
        for variant in [ChallengeVariant::Standard, ChallengeVariant::Ladder] {
            let outcome = score_answer(&q, &option(false), variant);
            assert!(!outcome.is_correct);
            assert_eq!(outcome.xp_earned, 0);
        }
    }

    #[test]
    fn standard_variant_pays_the_question_value() {
        let q = question(7, 25);
        let outcome = score_answer(&q, &option(true), ChallengeVariant::Standard);
        assert!(outcome.is_correct);
        assert_eq!(outcome.xp_earned, 25);
    }

    #[test]
    fn ladder_reward_table_is_exact() {
        let expected = [100, 200, 300, 400, 500, 1000, 2000, 3000, 5000, 10000];
        for (idx, &xp) in expected.iter().enumerate() {
            let q = question(idx as i64, 1);
            let outcome = score_answer(&q, &option(true), ChallengeVariant::Ladder);
            assert_eq!(outcome.xp_earned, xp, "order_index {}", idx);
        }
    }

    #[test]
    fn ladder_falls_back_to_question_value_beyond_table() {
        let q = question(10, 77);
        let outcome = score_answer(&q, &option(true), ChallengeVariant::Ladder);
        assert_eq!(outcome.xp_earned, 77);

        let q = question(-1, 33);
        let outcome = score_answer(&q, &option(true), ChallengeVariant::Ladder);
        assert_eq!(outcome.xp_earned, 33);
    }

    #[test]
    fn leader_gate_is_inert_while_disabled() {
        assert_eq!(apply_leader_gate(500, false, true), (500, false));
        assert_eq!(apply_leader_gate(500, false, false), (500, false));
    }

    #[test]
    fn leader_gate_zeroes_xp_only_for_leaders_when_enabled() {
        assert_eq!(apply_leader_gate(500, true, true), (0, true));
        assert_eq!(apply_leader_gate(500, true, false), (500, false));
    }
}

//! Scoring strategies, one per activity kind
//!
//! Each strategy maps a raw submission record to a score, a feedback line,
//! and a set of named metrics. Strategies are stateless and total over
//! well-typed input; the activity id they receive is used only for log
//! attribution, never for scoring.

use serde_json::{Map, Value};
use tracing::debug;

use crate::activity::ActivityKind;
use crate::error::ActivityResult;

use super::result::EvaluationResult;
use super::submission::Submission;

/// A scoring rule bound to one activity kind
pub trait EvaluationStrategy: Send + Sync {
    /// The kind this strategy scores
    fn kind(&self) -> ActivityKind;

    /// Score a submission
    ///
    /// # Errors
    /// Returns [`Validation`](crate::ActivityError::Validation) when a
    /// submission field is present but not numeric.
    fn evaluate(
        &self,
        submission: &Submission,
        activity_id: &str,
    ) -> ActivityResult<EvaluationResult>;
}

/// Look up the strategy for a kind
///
/// The mapping is total over the closed kind set, so every activity is
/// bound to a matching strategy at construction.
pub fn for_kind(kind: ActivityKind) -> &'static dyn EvaluationStrategy {
    match kind {
        ActivityKind::Dialog => &DialogStrategy,
        ActivityKind::Quiz => &QuizStrategy,
        ActivityKind::Scenario => &ScenarioStrategy,
    }
}

/// Scores quizzes by the fraction of correct answers
pub struct QuizStrategy;

impl EvaluationStrategy for QuizStrategy {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Quiz
    }

    fn evaluate(
        &self,
        submission: &Submission,
        activity_id: &str,
    ) -> ActivityResult<EvaluationResult> {
        let correct = submission.int_or("correct", 0)?;
        let total = submission.int_or("total", correct.max(1))?;
        let seconds = submission.int_or("seconds", 0)?;
        debug!(activity_id, correct, total, seconds, "scoring quiz submission");

        // A zero denominator is substituted with 1 rather than rejected;
        // the reported total keeps the raw value.
        let denominator = if total == 0 { 1 } else { total };
        let score = ((correct as f64 / denominator as f64) * 100.0).round() as i64;
        let score = score.clamp(0, 100);

        let mut metrics = Map::new();
        metrics.insert("correct".to_string(), Value::from(correct));
        metrics.insert("total".to_string(), Value::from(total));
        metrics.insert("seconds".to_string(), Value::from(seconds));
        metrics.insert("kind".to_string(), Value::from(self.kind().segment()));

        Ok(EvaluationResult {
            score,
            feedback: format!("Quiz: {correct}/{total} correct."),
            metrics,
        })
    }
}

/// Scores guided dialogs by completed steps and good choices
pub struct DialogStrategy;

impl EvaluationStrategy for DialogStrategy {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Dialog
    }

    fn evaluate(
        &self,
        submission: &Submission,
        activity_id: &str,
    ) -> ActivityResult<EvaluationResult> {
        let completed_steps = submission.int_or("completed_steps", 0)?;
        let total_steps = submission.int_or("total_steps", completed_steps.max(1))?;
        let good_choices = submission.int_or("good_choices", 0)?;
        debug!(
            activity_id,
            completed_steps, total_steps, good_choices, "scoring dialog submission"
        );

        let denominator = if total_steps == 0 { 1 } else { total_steps };
        let progress = (completed_steps as f64 / denominator as f64) * 70.0;
        let score = (progress + (good_choices * 10) as f64).round() as i64;
        let score = score.min(100);

        let mut metrics = Map::new();
        metrics.insert("completed_steps".to_string(), Value::from(completed_steps));
        metrics.insert("total_steps".to_string(), Value::from(total_steps));
        metrics.insert("good_choices".to_string(), Value::from(good_choices));
        metrics.insert("kind".to_string(), Value::from(self.kind().segment()));

        Ok(EvaluationResult {
            score,
            feedback: "Dialog: path completed and choices evaluated.".to_string(),
            metrics,
        })
    }
}

/// Scores scenarios by correct decisions minus penalties
pub struct ScenarioStrategy;

impl EvaluationStrategy for ScenarioStrategy {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Scenario
    }

    fn evaluate(
        &self,
        submission: &Submission,
        activity_id: &str,
    ) -> ActivityResult<EvaluationResult> {
        let decisions_ok = submission.int_or("decisions_ok", 0)?;
        let penalties = submission.int_or("penalties", 0)?;
        let steps = submission.int_or("steps", 0)?;
        debug!(
            activity_id,
            decisions_ok, penalties, steps, "scoring scenario submission"
        );

        let score = (decisions_ok * 20 - penalties * 10).clamp(0, 100);

        let mut metrics = Map::new();
        metrics.insert("decisions_ok".to_string(), Value::from(decisions_ok));
        metrics.insert("penalties".to_string(), Value::from(penalties));
        metrics.insert("steps".to_string(), Value::from(steps));
        metrics.insert("kind".to_string(), Value::from(self.kind().segment()));

        Ok(EvaluationResult {
            score,
            feedback: "Scenario: decisions and penalties applied.".to_string(),
            metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ActivityError;
    use serde_json::json;

    fn submission(value: Value) -> Submission {
        Submission::from_value(Some(&value)).unwrap()
    }

    #[test]
    fn for_kind_binds_matching_strategy() {
        for kind in ActivityKind::all() {
            assert_eq!(for_kind(kind).kind(), kind);
        }
    }

    // ===== Quiz =====

    #[test]
    fn quiz_scores_fraction_of_correct_answers() {
        let result = QuizStrategy
            .evaluate(
                &submission(json!({"correct": 3, "total": 4, "seconds": 30})),
                "DTALK-1",
            )
            .unwrap();

        assert_eq!(result.score, 75);
        assert_eq!(result.feedback, "Quiz: 3/4 correct.");
        assert_eq!(result.metrics["correct"], 3);
        assert_eq!(result.metrics["total"], 4);
        assert_eq!(result.metrics["seconds"], 30);
        assert_eq!(result.metrics["kind"], "quiz");
    }

    #[test]
    fn quiz_total_defaults_to_correct_when_absent() {
        let result = QuizStrategy
            .evaluate(&submission(json!({"correct": 5})), "DTALK-1")
            .unwrap();
        assert_eq!(result.score, 100);
        assert_eq!(result.metrics["total"], 5);
    }

    #[test]
    fn quiz_empty_submission_scores_zero() {
        let result = QuizStrategy.evaluate(&Submission::empty(), "DTALK-1").unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.metrics["total"], 1);
    }

    #[test]
    fn quiz_zero_total_substitutes_one() {
        let result = QuizStrategy
            .evaluate(&submission(json!({"correct": 2, "total": 0})), "DTALK-1")
            .unwrap();
        // Denominator 1, then clamped to the score range.
        assert_eq!(result.score, 100);
        assert_eq!(result.metrics["total"], 0);
    }

    #[test]
    fn quiz_score_is_monotonic_in_correct() {
        let mut previous = -1;
        for correct in 0..=10 {
            let result = QuizStrategy
                .evaluate(&submission(json!({"correct": correct, "total": 10})), "DTALK-1")
                .unwrap();
            assert!(result.score >= previous);
            previous = result.score;
        }
    }

    #[test]
    fn quiz_score_stays_in_range() {
        for (correct, total) in [(0, 4), (4, 4), (9, 4), (-3, 4)] {
            let result = QuizStrategy
                .evaluate(&submission(json!({"correct": correct, "total": total})), "DTALK-1")
                .unwrap();
            assert!((0..=100).contains(&result.score), "score {} out of range", result.score);
        }
    }

    #[test]
    fn quiz_rejects_non_numeric_field() {
        let err = QuizStrategy
            .evaluate(&submission(json!({"correct": "three"})), "DTALK-1")
            .unwrap_err();
        assert!(matches!(err, ActivityError::Validation { .. }));
    }

    // ===== Dialog =====

    #[test]
    fn dialog_full_path_with_good_choices_caps_at_100() {
        let result = DialogStrategy
            .evaluate(
                &submission(json!({"completed_steps": 5, "total_steps": 5, "good_choices": 3})),
                "DTALK-1",
            )
            .unwrap();
        assert_eq!(result.score, 100);
        assert_eq!(result.metrics["kind"], "dialog");
    }

    #[test]
    fn dialog_partial_path_scores_progress_share() {
        let result = DialogStrategy
            .evaluate(
                &submission(json!({"completed_steps": 2, "total_steps": 4, "good_choices": 1})),
                "DTALK-1",
            )
            .unwrap();
        // 2/4 * 70 + 10 = 45
        assert_eq!(result.score, 45);
    }

    #[test]
    fn dialog_has_fixed_feedback() {
        let result = DialogStrategy.evaluate(&Submission::empty(), "DTALK-1").unwrap();
        assert_eq!(result.feedback, "Dialog: path completed and choices evaluated.");
    }

    #[test]
    fn dialog_total_steps_defaults_to_completed() {
        let result = DialogStrategy
            .evaluate(&submission(json!({"completed_steps": 3})), "DTALK-1")
            .unwrap();
        // 3/3 * 70 = 70
        assert_eq!(result.score, 70);
        assert_eq!(result.metrics["total_steps"], 3);
    }

    // ===== Scenario =====

    #[test]
    fn scenario_clamps_high_scores() {
        let result = ScenarioStrategy
            .evaluate(&submission(json!({"decisions_ok": 10, "penalties": 0})), "DTALK-1")
            .unwrap();
        assert_eq!(result.score, 100);
    }

    #[test]
    fn scenario_clamps_negative_scores() {
        let result = ScenarioStrategy
            .evaluate(&submission(json!({"decisions_ok": 0, "penalties": 5})), "DTALK-1")
            .unwrap();
        assert_eq!(result.score, 0);
    }

    #[test]
    fn scenario_balances_decisions_and_penalties() {
        let result = ScenarioStrategy
            .evaluate(
                &submission(json!({"decisions_ok": 4, "penalties": 2, "steps": 9})),
                "DTALK-1",
            )
            .unwrap();
        assert_eq!(result.score, 60);
        assert_eq!(result.metrics["steps"], 9);
        assert_eq!(result.metrics["kind"], "scenario");
    }
}

//! Submission evaluation: strategy trait, per-kind scoring rules, and the
//! value types they consume and produce

mod result;
mod strategies;
mod submission;

pub use result::EvaluationResult;
pub use strategies::{
    DialogStrategy, EvaluationStrategy, QuizStrategy, ScenarioStrategy, for_kind,
};
pub use submission::Submission;

//! Evaluation result value type

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The outcome of scoring one submission
///
/// Produced fresh per evaluation call; the core never stores results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Numeric score in [0, 100]
    pub score: i64,
    /// Human-readable feedback line
    pub feedback: String,
    /// Named metrics emitted by the strategy
    pub metrics: Map<String, Value>,
}

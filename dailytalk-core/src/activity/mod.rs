//! Activity domain model
//!
//! An [`Activity`] is a deployed learning exercise: an opaque id, the base
//! URL it was deployed under, and the scoring strategy for its kind. The
//! activity derives its launch URL and delegates scoring entirely to the
//! bound strategy; adding a new kind means adding a variant and a matching
//! strategy, never touching shared dispatch code.

mod factory;
mod kind;

pub use factory::ActivityFactory;
pub use kind::ActivityKind;

use crate::error::ActivityResult;
use crate::evaluation::{EvaluationResult, EvaluationStrategy, Submission, for_kind};

/// A deployed activity instance, bound to its kind's scoring strategy
pub struct Activity {
    id: String,
    base_url: String,
    kind: ActivityKind,
    strategy: &'static dyn EvaluationStrategy,
}

impl Activity {
    /// Construct an activity with the strategy matching `kind`
    ///
    /// Construction is the only place the strategy is chosen, which keeps
    /// the invariant `strategy.kind() == kind` for the activity's lifetime.
    pub(crate) fn new(id: String, base_url: String, kind: ActivityKind) -> Self {
        Self {
            id,
            base_url,
            kind,
            strategy: for_kind(kind),
        }
    }

    /// The externally supplied activity id, stored verbatim
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The base URL this activity was deployed under, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The activity's kind
    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// The address a learner is sent to begin this activity
    ///
    /// Deterministic: `{base_url}/activity/{segment}/{id}`.
    pub fn launch_url(&self) -> String {
        format!("{}/activity/{}/{}", self.base_url, self.kind.segment(), self.id)
    }

    /// Score a submission by delegating to the bound strategy
    ///
    /// The activity performs no scoring logic itself; it only passes its id
    /// through for attribution in the strategy's logs.
    pub fn evaluate(&self, submission: &Submission) -> ActivityResult<EvaluationResult> {
        self.strategy.evaluate(submission, &self.id)
    }
}

impl std::fmt::Debug for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Activity")
            .field("id", &self.id)
            .field("base_url", &self.base_url)
            .field("kind", &self.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn launch_url_contains_kind_segment_and_id() {
        for kind in ActivityKind::all() {
            let activity = ActivityFactory::create(kind.segment(), "DTALK-7", "http://localhost");
            let url = activity.launch_url();
            assert!(url.contains(&format!("/activity/{}/", kind.segment())));
            assert!(url.ends_with("DTALK-7"));
        }
    }

    #[test]
    fn launch_url_is_stable_across_calls() {
        let activity = ActivityFactory::create("quiz", "DTALK-7", "http://localhost");
        assert_eq!(activity.launch_url(), activity.launch_url());
    }

    #[test]
    fn evaluate_delegates_to_bound_strategy() {
        let activity = ActivityFactory::create("quiz", "DTALK-7", "http://localhost");
        let submission =
            Submission::from_value(Some(&json!({"correct": 1, "total": 2}))).unwrap();

        let result = activity.evaluate(&submission).unwrap();
        assert_eq!(result.score, 50);
        assert_eq!(result.metrics["kind"], "quiz");
    }
}

//! Activity registry service
//!
//! The ActivityService is responsible for:
//! - Deploying activities via the factory (create-or-replace by id)
//! - Looking up deployed activities
//! - Forwarding submissions to the matching activity for scoring
//!
//! State is process-lifetime only: a single map from activity id to
//! activity, with last-write-wins semantics and no eviction.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, info};

use crate::activity::{Activity, ActivityFactory};
use crate::error::{ActivityError, ActivityResult};
use crate::evaluation::{EvaluationResult, Submission};

/// In-memory registry of deployed activities
#[derive(Debug, Default)]
pub struct ActivityService {
    activities: HashMap<String, Activity>,
}

impl ActivityService {
    /// Create a new empty service
    pub fn new() -> Self {
        Self {
            activities: HashMap::new(),
        }
    }

    /// Deploy an activity and return its launch URL
    ///
    /// Re-deploying an existing id silently replaces the prior instance.
    /// An empty or unrecognized kind falls back to dialog.
    ///
    /// # Errors
    /// Returns [`ActivityError::InvalidArgument`] when the id is empty.
    pub fn deploy(&mut self, id: &str, kind: &str, base_url: &str) -> ActivityResult<String> {
        if id.trim().is_empty() {
            return Err(ActivityError::InvalidArgument(
                "missing activityID".to_string(),
            ));
        }

        let activity = ActivityFactory::create(kind, id, base_url);
        let launch_url = activity.launch_url();

        if self.activities.insert(id.to_string(), activity).is_some() {
            debug!(activity_id = id, "replacing previously deployed activity");
        }
        info!(activity_id = id, %launch_url, "activity deployed");

        Ok(launch_url)
    }

    /// Get a deployed activity by id
    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.get(id)
    }

    /// Score a submission against a deployed activity
    ///
    /// A `null` or absent submission is scored as the empty record.
    ///
    /// # Errors
    /// Returns [`ActivityError::NotFound`] when the id was never deployed,
    /// [`ActivityError::InvalidSubmission`] when the payload is present but
    /// not an object, and [`ActivityError::Validation`] when a submission
    /// field is present but not numeric.
    pub fn submit(&self, id: &str, submission: Option<&Value>) -> ActivityResult<EvaluationResult> {
        let activity = self
            .get(id)
            .ok_or_else(|| ActivityError::NotFound(id.to_string()))?;

        let submission = Submission::from_value(submission)?;
        debug!(activity_id = id, kind = %activity.kind(), fields = submission.len(), "scoring submission");

        activity.evaluate(&submission)
    }

    /// Number of deployed activities
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether no activity has been deployed yet
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityKind;
    use serde_json::json;

    const BASE: &str = "http://localhost:7780";

    #[test]
    fn deploy_returns_launch_url() {
        let mut service = ActivityService::new();
        let url = service.deploy("DTALK-1", "quiz", BASE).unwrap();
        assert_eq!(url, "http://localhost:7780/activity/quiz/DTALK-1");
    }

    #[test]
    fn deploy_rejects_empty_id() {
        let mut service = ActivityService::new();
        let err = service.deploy("", "quiz", BASE).unwrap_err();
        assert!(matches!(err, ActivityError::InvalidArgument(_)));
        assert!(service.is_empty());
    }

    #[test]
    fn deploy_empty_kind_defaults_to_dialog() {
        let mut service = ActivityService::new();
        let url = service.deploy("DTALK-1", "", BASE).unwrap();
        assert!(url.contains("/activity/dialog/"));
    }

    #[test]
    fn deploy_same_id_replaces_activity() {
        let mut service = ActivityService::new();
        service.deploy("DTALK-1", "quiz", BASE).unwrap();
        service.deploy("DTALK-1", "scenario", BASE).unwrap();

        assert_eq!(service.len(), 1);
        assert_eq!(service.get("DTALK-1").unwrap().kind(), ActivityKind::Scenario);

        // The next submission is scored by the replacement's strategy.
        let result = service
            .submit("DTALK-1", Some(&json!({"decisions_ok": 3})))
            .unwrap();
        assert_eq!(result.metrics["kind"], "scenario");
        assert_eq!(result.score, 60);
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let service = ActivityService::new();
        assert!(service.get("DTALK-404").is_none());
    }

    #[test]
    fn submit_unknown_id_is_not_found() {
        let service = ActivityService::new();
        let err = service
            .submit("DTALK-404", Some(&json!({"correct": 3})))
            .unwrap_err();
        assert!(matches!(err, ActivityError::NotFound(_)));
    }

    #[test]
    fn submit_unknown_id_wins_over_bad_payload() {
        // NotFound regardless of submission content.
        let service = ActivityService::new();
        let err = service.submit("DTALK-404", Some(&json!("nope"))).unwrap_err();
        assert!(matches!(err, ActivityError::NotFound(_)));
    }

    #[test]
    fn submit_null_submission_scores_empty_record() {
        let mut service = ActivityService::new();
        service.deploy("DTALK-1", "quiz", BASE).unwrap();

        let result = service.submit("DTALK-1", Some(&Value::Null)).unwrap();
        assert_eq!(result.score, 0);
    }

    #[test]
    fn submit_non_object_submission_is_rejected() {
        let mut service = ActivityService::new();
        service.deploy("DTALK-1", "quiz", BASE).unwrap();

        let err = service.submit("DTALK-1", Some(&json!([1, 2]))).unwrap_err();
        assert!(matches!(err, ActivityError::InvalidSubmission(_)));
    }

    #[test]
    fn submit_scores_by_deployed_kind() {
        let mut service = ActivityService::new();
        service.deploy("DTALK-1", "quiz", BASE).unwrap();

        let result = service
            .submit("DTALK-1", Some(&json!({"correct": 3, "total": 4, "seconds": 30})))
            .unwrap();
        assert_eq!(result.score, 75);
        assert_eq!(result.feedback, "Quiz: 3/4 correct.");
    }
}

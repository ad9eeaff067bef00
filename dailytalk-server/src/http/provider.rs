//! Activity provider handlers: deploy, submit, and configuration metadata

use std::sync::Arc;

use axum::{
    Json,
    extract::{Host, Query, State},
    http::StatusCode,
    response::Html,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use dailytalk_core::ActivityError;

use crate::AppState;

/// Default activity id when the deploy request omits one
const DEFAULT_ACTIVITY_ID: &str = "DTALK-DEMO-001";
/// Default activity kind when the deploy request omits one
const DEFAULT_KIND: &str = "dialog";

/// Error body returned by all provider endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Map a core error to its HTTP representation
fn error_response(error: ActivityError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &error {
        ActivityError::InvalidArgument(_) | ActivityError::InvalidSubmission(_) => {
            StatusCode::BAD_REQUEST
        }
        ActivityError::NotFound(_) => StatusCode::NOT_FOUND,
        ActivityError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

/// GET / - HTML index listing the provider endpoints
pub async fn index() -> Html<&'static str> {
    Html(
        r#"<h1>DailyTalk - Activity Provider</h1>
<ul>
  <li><strong>config_url</strong>: <code>/config</code></li>
  <li><strong>json_params_url</strong>: <code>/json-params</code></li>
  <li><strong>user_url (deploy)</strong>: <code>/deploy?activityID=DTALK-DEMO-001&type=dialog</code></li>
  <li><strong>submit</strong>: <code>/submit</code> (POST JSON)</li>
  <li><strong>analytics_url</strong>: <code>/analytics</code> (POST JSON)</li>
  <li><strong>analytics_list_url</strong>: <code>/analytics-list</code></li>
</ul>
"#,
    )
}

/// GET /config - embeddable HTML fragment with the configurable fields
pub async fn config_page() -> Html<&'static str> {
    Html(
        r#"<div id="dailytalk-config">
  <h2>DailyTalk activity configuration</h2>

  <label for="scenario">Scenario</label><br>
  <input type="text" id="scenario" name="scenario"
         value="Arriving at a hostel in Lisbon"><br><br>

  <label for="language">Primary language</label><br>
  <input type="text" id="language" name="language"
         value="pt-PT"><br><br>

  <input type="hidden" name="difficulty" value="normal">
</div>
"#,
    )
}

/// A configurable activity parameter, as listed by /json-params
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigParam {
    /// Field name in the configuration page
    pub name: String,
    /// Declared value type
    #[serde(rename = "type")]
    pub param_type: String,
}

/// GET /json-params - the configuration page fields as JSON
pub async fn json_params() -> Json<Vec<ConfigParam>> {
    let params = ["scenario", "language", "difficulty"]
        .into_iter()
        .map(|name| ConfigParam {
            name: name.to_string(),
            param_type: "text/plain".to_string(),
        })
        .collect();
    Json(params)
}

/// Query parameters for GET /deploy
#[derive(Debug, Deserialize)]
pub struct DeployQuery {
    /// Activity id supplied by the platform
    #[serde(rename = "activityID", default = "default_activity_id")]
    pub activity_id: String,
    /// Requested activity kind
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
}

fn default_activity_id() -> String {
    DEFAULT_ACTIVITY_ID.to_string()
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}

/// GET /deploy - register an activity and return its launch URL as plain text
///
/// The base URL prefers the configured public URL and otherwise derives
/// from the request's Host header.
pub async fn deploy(
    State(state): State<Arc<AppState>>,
    Host(host): Host,
    Query(query): Query<DeployQuery>,
) -> Result<String, (StatusCode, Json<ErrorResponse>)> {
    let base_url = match &state.public_url {
        Some(url) => url.clone(),
        None => format!("http://{host}"),
    };

    let mut activities = state.activities.write().await;
    activities
        .deploy(&query.activity_id, &query.kind, &base_url)
        .map_err(error_response)
}

/// Request body for POST /submit
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Activity id the submission belongs to
    #[serde(rename = "activityID")]
    pub activity_id: Option<String>,
    /// Raw submission record; `null` is scored as the empty record
    #[serde(default)]
    pub submission: Option<Value>,
}

/// Response body for POST /submit
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Activity id the result belongs to
    #[serde(rename = "activityID")]
    pub activity_id: String,
    /// Numeric score in [0, 100]
    pub score: i64,
    /// Human-readable feedback line
    pub feedback: String,
    /// Named metrics emitted by the scoring strategy
    pub metrics: Map<String, Value>,
}

/// POST /submit - score a submission against a deployed activity
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, (StatusCode, Json<ErrorResponse>)> {
    let activity_id = match request.activity_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => {
            return Err(error_response(ActivityError::InvalidArgument(
                "missing activityID".to_string(),
            )));
        }
    };

    let activities = state.activities.read().await;
    let result = activities
        .submit(&activity_id, request.submission.as_ref())
        .map_err(error_response)?;

    Ok(Json(SubmitResponse {
        activity_id,
        score: result.score,
        feedback: result.feedback,
        metrics: result.metrics,
    }))
}

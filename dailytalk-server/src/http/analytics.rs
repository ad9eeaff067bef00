//! Analytics handlers
//!
//! Analytics are reported in the shape the platform expects but are fixed
//! sample data: they are not derived from real submissions in this design.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

/// An analytics field descriptor, as listed by /analytics-list
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsField {
    /// Field name
    pub name: String,
    /// Declared value type
    #[serde(rename = "type")]
    pub field_type: String,
}

/// The available analytics fields, split into qualitative and quantitative
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsListResponse {
    #[serde(rename = "qualAnalytics")]
    pub qual_analytics: Vec<AnalyticsField>,
    #[serde(rename = "quantAnalytics")]
    pub quant_analytics: Vec<AnalyticsField>,
}

/// An analytics field with its reported value
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsValue {
    /// Field name
    pub name: String,
    /// Declared value type
    #[serde(rename = "type")]
    pub field_type: String,
    /// Reported value; type varies per field
    pub value: Value,
}

/// Per-student analytics entry
#[derive(Debug, Serialize, Deserialize)]
pub struct StudentAnalytics {
    /// Student id in the learning platform
    #[serde(rename = "inveniraStdID")]
    pub student_id: u32,
    #[serde(rename = "quantAnalytics")]
    pub quant_analytics: Vec<AnalyticsValue>,
    #[serde(rename = "qualAnalytics")]
    pub qual_analytics: Vec<AnalyticsValue>,
}

/// Request body for POST /analytics
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsRequest {
    /// Activity the platform is asking about
    #[serde(rename = "activityID")]
    pub activity_id: Option<String>,
}

fn field(name: &str, field_type: &str) -> AnalyticsField {
    AnalyticsField {
        name: name.to_string(),
        field_type: field_type.to_string(),
    }
}

fn value(name: &str, field_type: &str, reported: Value) -> AnalyticsValue {
    AnalyticsValue {
        name: name.to_string(),
        field_type: field_type.to_string(),
        value: reported,
    }
}

/// GET /analytics-list - the analytics fields this provider reports
pub async fn analytics_list() -> Json<AnalyticsListResponse> {
    Json(AnalyticsListResponse {
        qual_analytics: vec![
            field("Student activity profile", "text/plain"),
            field("Activity heat map", "URL"),
        ],
        quant_analytics: vec![
            field("Total interactions", "integer"),
            field("Time on activity (seconds)", "integer"),
        ],
    })
}

/// POST /analytics - per-student analytics for an activity
///
/// Returns fixed sample records regardless of the requested activity.
pub async fn analytics(request: Option<Json<AnalyticsRequest>>) -> Json<Vec<StudentAnalytics>> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let activity_id = request
        .activity_id
        .unwrap_or_else(|| "DTALK-DEMO-001".to_string());
    debug!(activity_id, "reporting sample analytics");

    Json(vec![
        StudentAnalytics {
            student_id: 1001,
            quant_analytics: vec![
                value("Total interactions", "integer", json!(12)),
                value("Time on activity (seconds)", "integer", json!(210)),
            ],
            qual_analytics: vec![
                value(
                    "Student activity profile",
                    "text/plain",
                    json!("Completed every step of the dialog."),
                ),
                value(
                    "Activity heat map",
                    "URL",
                    json!("http://dailytalk.pt/heatmap/1001"),
                ),
            ],
        },
        StudentAnalytics {
            student_id: 1002,
            quant_analytics: vec![
                value("Total interactions", "integer", json!(5)),
                value("Time on activity (seconds)", "integer", json!(95)),
            ],
            qual_analytics: vec![
                value(
                    "Student activity profile",
                    "text/plain",
                    json!("Left the activity halfway through the dialog."),
                ),
                value(
                    "Activity heat map",
                    "URL",
                    json!("http://dailytalk.pt/heatmap/1002"),
                ),
            ],
        },
    ])
}

//! Activity construction

use super::{Activity, ActivityKind};

/// Builds activities of a requested kind with the matching strategy bound
///
/// Construction always succeeds: an unrecognized kind is a policy fallback
/// to dialog, not a failure. Uniqueness of ids is the registry's concern,
/// not the factory's.
pub struct ActivityFactory;

impl ActivityFactory {
    /// Create an activity
    ///
    /// The kind string is trimmed and lower-cased before matching; the base
    /// URL has trailing slashes stripped; the id is stored verbatim.
    pub fn create(kind: &str, id: &str, base_url: &str) -> Activity {
        let kind = ActivityKind::parse(kind);
        let base_url = base_url.trim_end_matches('/');
        Activity::new(id.to_string(), base_url.to_string(), kind)
    }
}

use crate::models::CourseId;
use serde::{Deserialize, Serialize};

/// A course, as far as the dashboard cares about it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique identifier of the course
    pub id: CourseId,
    /// Human-readable title
    #[serde(default)]
    pub title: String,
    /// Short name used in URLs and group names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

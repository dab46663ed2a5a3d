use serde::Deserialize;

/// Request payload for the milestone ingestion endpoint.
///
/// Required fields are modelled as `Option` so the backend can report
/// which one is missing instead of failing inside the JSON extractor;
/// display-only fields default to empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct MilestoneSubmission {
    pub student_id: Option<String>,
    #[serde(default)]
    pub student_name: String,
    pub course_id: Option<String>,
    #[serde(default)]
    pub instructor_name: String,
    #[serde(default)]
    pub activity_type: String,
    pub score: Option<f64>,
    pub max_score: Option<f64>,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub record_type: String,
}

/// Query parameters for record retrieval. `course_id` narrows the result
/// set when present.
#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    pub student_id: Option<String>,
    pub course_id: Option<String>,
}

/// Query parameters for the course average endpoint; both are required.
#[derive(Debug, Deserialize)]
pub struct AverageQuery {
    pub student_id: Option<String>,
    pub course_id: Option<String>,
}

/// Query parameters for the record count endpoint.
#[derive(Debug, Deserialize)]
pub struct CountQuery {
    pub student_id: Option<String>,
}

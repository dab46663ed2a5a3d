use serde::{Deserialize, Serialize, Serializer};

use crate::model::grade::LetterGrade;

/// One graded activity submission for a student in a course.
///
/// Records are immutable once stored: `percentage` and `grade` are derived
/// from `score`/`max_score` at ingestion time and never recomputed or
/// mutated afterwards. `timestamp` is integer seconds since the epoch;
/// consumers that want milliseconds multiply by 1000 on their side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneRecord {
    /// Store-assigned row id, monotonically increasing.
    pub id: i64,
    pub student_id: String,
    pub student_name: String,
    pub course_id: String,
    pub instructor_name: String,
    pub activity_type: String,
    pub score: f64,
    pub max_score: f64,
    /// Stored at full precision; rounded to two decimals only when
    /// serialized onto the wire.
    #[serde(serialize_with = "serialize_rounded")]
    pub percentage: f64,
    pub grade: LetterGrade,
    pub record_type: String,
    pub comments: String,
    pub timestamp: i64,
}

/// Display rounding for percentages, two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn serialize_rounded<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round2(*value))
}

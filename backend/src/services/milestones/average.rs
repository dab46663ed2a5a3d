//! Course-level aggregation for the `GET /course_average` endpoint.
//!
//! The average is the unweighted arithmetic mean of the stored percentages:
//! every milestone counts equally regardless of its own max_score. The
//! letter grade for the average comes from the same `GradeScale` used per
//! record. Zero matching records is a not-found outcome, so division by
//! zero cannot occur.

use actix_web::{web, HttpResponse};
use common::model::grade::LetterGrade;
use common::model::record::{round2, MilestoneRecord};
use common::requests::AverageQuery;
use serde_json::json;

use super::records::required_param;
use crate::error::EngineError;
use crate::grading::GradeScale;
use crate::store::RecordStore;

/// Aggregate outcome for one (student, course) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    /// Full-precision mean; rounded only when serialized.
    pub average: f64,
    pub letter_grade: LetterGrade,
}

pub async fn process(
    query: web::Query<AverageQuery>,
    store: web::Data<RecordStore>,
    scale: web::Data<GradeScale>,
) -> Result<HttpResponse, EngineError> {
    let student_id = required_param(&query.student_id, "student_id")?;
    let course_id = required_param(&query.course_id, "course_id")?;

    let summary = course_average(&student_id, &course_id, &scale, &store)?;
    Ok(HttpResponse::Ok().json(json!({
        "average": round2(summary.average),
        "letter_grade": summary.letter_grade,
    })))
}

/// Computes the course average for a student, or a not-found outcome when
/// the student has no records in the course.
pub fn course_average(
    student_id: &str,
    course_id: &str,
    scale: &GradeScale,
    store: &RecordStore,
) -> Result<CourseSummary, EngineError> {
    let records = store.query_by_student(student_id, Some(course_id))?;
    if records.is_empty() {
        return Err(EngineError::NotFound(
            "No records found for this student in this course".to_string(),
        ));
    }
    let average = mean_percentage(&records);
    Ok(CourseSummary {
        average,
        letter_grade: scale.letter_for(average),
    })
}

// Unweighted mean. A max_score-weighted variant would replace just this
// function; callers only see the summary.
fn mean_percentage(records: &[MilestoneRecord]) -> f64 {
    let total: f64 = records.iter().map(|r| r.percentage).sum();
    total / records.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::milestones::ingest;
    use common::requests::MilestoneSubmission;

    fn submit(store: &RecordStore, scale: &GradeScale, course: &str, score: f64, max: f64) {
        let sub = MilestoneSubmission {
            student_id: Some("s1".to_string()),
            student_name: String::new(),
            course_id: Some(course.to_string()),
            instructor_name: String::new(),
            activity_type: "Quiz".to_string(),
            score: Some(score),
            max_score: Some(max),
            comments: String::new(),
            record_type: "milestone".to_string(),
        };
        ingest(&sub, scale, store).unwrap();
    }

    #[test]
    fn average_is_unweighted_mean_of_percentages() {
        let store = RecordStore::open_in_memory().unwrap();
        let scale = GradeScale::standard();
        // 90% on a 50-point quiz, 70% on a 10-point quiz: the mean ignores
        // the point totals.
        submit(&store, &scale, "c1", 45.0, 50.0);
        submit(&store, &scale, "c1", 7.0, 10.0);

        let summary = course_average("s1", "c1", &scale, &store).unwrap();
        assert!((summary.average - 80.0).abs() < 1e-9);
        assert_eq!(summary.letter_grade, LetterGrade::B);
    }

    #[test]
    fn records_from_other_courses_are_excluded() {
        let store = RecordStore::open_in_memory().unwrap();
        let scale = GradeScale::standard();
        submit(&store, &scale, "c1", 45.0, 50.0);
        submit(&store, &scale, "c2", 1.0, 100.0);

        let summary = course_average("s1", "c1", &scale, &store).unwrap();
        assert!((summary.average - 90.0).abs() < 1e-9);
        assert_eq!(summary.letter_grade, LetterGrade::A);
    }

    #[test]
    fn no_records_is_not_found_never_division_by_zero() {
        let store = RecordStore::open_in_memory().unwrap();
        let scale = GradeScale::standard();
        let err = course_average("s1", "c1", &scale, &store).unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }
}

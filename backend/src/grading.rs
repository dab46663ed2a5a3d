//! Pure score-to-grade computation.
//!
//! The letter cutoffs live in an explicit [`GradeScale`] table rather than
//! inline conditionals, and the scale is injected into the services that
//! need it, so swapping cutoffs touches exactly one place.

use common::model::grade::LetterGrade;

use crate::error::EngineError;

/// Letter-grade threshold table, applied as closed-open intervals on a
/// 0-100 percentage: a percentage earns the first letter whose cutoff it
/// meets, F otherwise.
#[derive(Debug, Clone)]
pub struct GradeScale {
    cutoffs: [(f64, LetterGrade); 4],
}

impl GradeScale {
    /// Standard cutoffs: A >= 90, B >= 80, C >= 70, D >= 60, F below.
    pub fn standard() -> Self {
        GradeScale {
            cutoffs: [
                (90.0, LetterGrade::A),
                (80.0, LetterGrade::B),
                (70.0, LetterGrade::C),
                (60.0, LetterGrade::D),
            ],
        }
    }

    /// Maps a percentage to its letter grade.
    pub fn letter_for(&self, percentage: f64) -> LetterGrade {
        for (cutoff, letter) in self.cutoffs {
            if percentage >= cutoff {
                return letter;
            }
        }
        LetterGrade::F
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        GradeScale::standard()
    }
}

/// Converts a raw score into a percentage and letter grade.
///
/// `max_score` must be strictly positive; anything else (zero, negative,
/// NaN) is a validation error and nothing gets stored. The percentage is
/// returned at full precision; display rounding happens at the HTTP
/// boundary, never here.
pub fn grade(
    score: f64,
    max_score: f64,
    scale: &GradeScale,
) -> Result<(f64, LetterGrade), EngineError> {
    if !(max_score > 0.0) {
        return Err(EngineError::Validation(
            "max_score must be greater than zero".to_string(),
        ));
    }
    let percentage = 100.0 * score / max_score;
    Ok((percentage, scale.letter_for(percentage)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_score_over_max() {
        let scale = GradeScale::standard();
        let (pct, letter) = grade(45.0, 50.0, &scale).unwrap();
        assert!((pct - 90.0).abs() < f64::EPSILON);
        assert_eq!(letter, LetterGrade::A);
    }

    #[test]
    fn cutoffs_are_closed_open() {
        let scale = GradeScale::standard();
        assert_eq!(scale.letter_for(90.0), LetterGrade::A);
        assert_eq!(scale.letter_for(89.99), LetterGrade::B);
        assert_eq!(scale.letter_for(80.0), LetterGrade::B);
        assert_eq!(scale.letter_for(70.0), LetterGrade::C);
        assert_eq!(scale.letter_for(60.0), LetterGrade::D);
        assert_eq!(scale.letter_for(59.99), LetterGrade::F);
        assert_eq!(scale.letter_for(0.0), LetterGrade::F);
    }

    #[test]
    fn zero_max_score_is_rejected() {
        let scale = GradeScale::standard();
        let err = grade(10.0, 0.0, &scale).unwrap_err();
        assert_eq!(err.to_string(), "max_score must be greater than zero");
    }

    #[test]
    fn negative_and_nan_max_score_are_rejected() {
        let scale = GradeScale::standard();
        assert!(grade(10.0, -5.0, &scale).is_err());
        assert!(grade(10.0, f64::NAN, &scale).is_err());
    }
}

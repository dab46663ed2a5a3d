use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Categorical mapping of a percentage to a letter grade.
///
/// The wire format is the bare letter (`"A"` .. `"F"`); no other value is
/// valid anywhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored grade cell holds something outside `{A,B,C,D,F}`.
#[derive(Debug)]
pub struct ParseGradeError(pub String);

impl fmt::Display for ParseGradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid letter grade: {}", self.0)
    }
}

impl std::error::Error for ParseGradeError {}

impl FromStr for LetterGrade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(LetterGrade::A),
            "B" => Ok(LetterGrade::B),
            "C" => Ok(LetterGrade::C),
            "D" => Ok(LetterGrade::D),
            "F" => Ok(LetterGrade::F),
            other => Err(ParseGradeError(other.to_string())),
        }
    }
}

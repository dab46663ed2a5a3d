//! Append-only SQLite storage for milestone records.
//!
//! The store is opened once at startup, injected into the Actix app as
//! `web::Data`, and dropped (closing the connection) at shutdown. There is
//! deliberately no update or delete: records are immutable once written.
//! The single connection sits behind a mutex, which serializes appends —
//! one record is always written atomically — while queries see every write
//! that completed before they took the lock.

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use common::model::grade::LetterGrade;
use common::model::record::MilestoneRecord;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};

use crate::error::EngineError;

/// How long a store call may wait on a busy database before the request
/// fails with a storage error instead of hanging.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS milestones (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    student_id TEXT NOT NULL,
    student_name TEXT NOT NULL,
    course_id TEXT NOT NULL,
    instructor_name TEXT NOT NULL,
    activity_type TEXT NOT NULL,
    score REAL NOT NULL,
    max_score REAL NOT NULL CHECK (max_score > 0),
    percentage REAL NOT NULL,
    grade TEXT NOT NULL,
    record_type TEXT NOT NULL,
    comments TEXT NOT NULL,
    timestamp INTEGER NOT NULL
)";

const COLUMNS: &str = "id, student_id, student_name, course_id, instructor_name,
    activity_type, score, max_score, percentage, grade, record_type, comments, timestamp";

/// A fully graded record ready for its first and only write.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub student_id: String,
    pub student_name: String,
    pub course_id: String,
    pub instructor_name: String,
    pub activity_type: String,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub grade: LetterGrade,
    pub record_type: String,
    pub comments: String,
    pub timestamp: i64,
}

impl NewRecord {
    /// Attaches the store-assigned id, producing the stored record.
    pub fn into_record(self, id: i64) -> MilestoneRecord {
        MilestoneRecord {
            id,
            student_id: self.student_id,
            student_name: self.student_name,
            course_id: self.course_id,
            instructor_name: self.instructor_name,
            activity_type: self.activity_type,
            score: self.score,
            max_score: self.max_score,
            percentage: self.percentage,
            grade: self.grade,
            record_type: self.record_type,
            comments: self.comments,
            timestamp: self.timestamp,
        }
    }
}

pub struct RecordStore {
    conn: Mutex<Connection>,
}

impl RecordStore {
    /// Opens (creating if needed) the database at `path` and ensures the
    /// schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// In-memory store, used by the test suites.
    pub fn open_in_memory() -> Result<Self, EngineError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, EngineError> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute(SCHEMA, [])?;
        Ok(RecordStore {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        // A poisoned lock means another request panicked mid-call; the
        // connection itself is still usable, so recover it.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Appends one record and returns its monotonically increasing id.
    pub fn append(&self, record: &NewRecord) -> Result<i64, EngineError> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO milestones (student_id, student_name, course_id, instructor_name,
                activity_type, score, max_score, percentage, grade, record_type, comments, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                record.student_id,
                record.student_name,
                record.course_id,
                record.instructor_name,
                record.activity_type,
                record.score,
                record.max_score,
                record.percentage,
                record.grade.as_str(),
                record.record_type,
                record.comments,
                record.timestamp,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All records for a student, optionally narrowed to one course,
    /// ordered by timestamp ascending with insertion order breaking ties.
    /// No match is an empty vec, not an error.
    pub fn query_by_student(
        &self,
        student_id: &str,
        course_id: Option<&str>,
    ) -> Result<Vec<MilestoneRecord>, EngineError> {
        let conn = self.lock();
        let mut records = Vec::new();
        match course_id {
            Some(course) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {COLUMNS} FROM milestones
                     WHERE student_id = ?1 AND course_id = ?2
                     ORDER BY timestamp ASC, id ASC"
                ))?;
                let rows = stmt.query_map(params![student_id, course], row_to_record)?;
                for row in rows {
                    records.push(row?);
                }
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {COLUMNS} FROM milestones
                     WHERE student_id = ?1
                     ORDER BY timestamp ASC, id ASC"
                ))?;
                let rows = stmt.query_map(params![student_id], row_to_record)?;
                for row in rows {
                    records.push(row?);
                }
            }
        }
        Ok(records)
    }

    /// Every stored record, across all students and courses, in the same
    /// timestamp-ascending order as the per-student query.
    pub fn all_records(&self) -> Result<Vec<MilestoneRecord>, EngineError> {
        let conn = self.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM milestones ORDER BY timestamp ASC, id ASC"
        ))?;
        let rows = stmt.query_map([], row_to_record)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Number of stored records for a student.
    pub fn count_by_student(&self, student_id: &str) -> Result<i64, EngineError> {
        let conn = self.lock();
        let count = conn.query_row(
            "SELECT COUNT(*) FROM milestones WHERE student_id = ?1",
            params![student_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<MilestoneRecord> {
    let grade_text: String = row.get(9)?;
    let grade: LetterGrade = grade_text
        .parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e)))?;
    Ok(MilestoneRecord {
        id: row.get(0)?,
        student_id: row.get(1)?,
        student_name: row.get(2)?,
        course_id: row.get(3)?,
        instructor_name: row.get(4)?,
        activity_type: row.get(5)?,
        score: row.get(6)?,
        max_score: row.get(7)?,
        percentage: row.get(8)?,
        grade,
        record_type: row.get(10)?,
        comments: row.get(11)?,
        timestamp: row.get(12)?,
    })
}

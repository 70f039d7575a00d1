//! A single student's marks and the metrics derived from them.

use csv::StringRecord;
use serde::Serialize;

use crate::error::RecordError;
use crate::grade::{Grade, grade};

/// Highest possible coursework plus exam total.
pub const MAX_TOTAL: f64 = 160.0;
/// Highest possible coursework total, as shown in reports.
pub const MAX_COURSEWORK: i32 = 60;
/// Highest possible exam mark, as shown in reports.
pub const MAX_EXAM: i32 = 100;

const SCORE_FIELDS: [&str; 4] = ["course1", "course2", "course3", "exam"];

/// One student's raw marks. Nothing is derived at construction time and
/// nothing changes afterwards.
///
/// Scores are not range checked, so an exam mark of 120 is kept as-is and
/// simply yields a percentage above 100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    id: String,
    name: String,
    coursework: [i32; 3],
    exam: i32,
}

impl StudentRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coursework: [i32; 3],
        exam: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coursework,
            exam,
        }
    }

    /// Builds a record from already split fields.
    ///
    /// The first six fields are id, name, three coursework scores and the exam
    /// score. Each is trimmed; anything past the sixth is ignored.
    ///
    /// # Errors
    ///
    /// [`RecordError::TooFewFields`] when fewer than six fields are given, and
    /// [`RecordError::InvalidScore`] when a score is not an integer.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, RecordError> {
        if fields.len() < 6 {
            return Err(RecordError::TooFewFields {
                found: fields.len(),
            });
        }

        let mut scores = [0i32; 4];
        for (slot, (field, raw)) in scores
            .iter_mut()
            .zip(SCORE_FIELDS.iter().zip(&fields[2..6]))
        {
            let raw = raw.as_ref().trim();
            *slot = raw.parse().map_err(|_| RecordError::InvalidScore {
                field: *field,
                value: raw.to_string(),
            })?;
        }

        Ok(Self::new(
            fields[0].as_ref().trim(),
            fields[1].as_ref().trim(),
            [scores[0], scores[1], scores[2]],
            scores[3],
        ))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coursework(&self) -> [i32; 3] {
        self.coursework
    }

    pub fn exam(&self) -> i32 {
        self.exam
    }

    /// Summed in `i64` so any three `i32` scores fit.
    pub fn coursework_total(&self) -> i64 {
        self.coursework.iter().map(|&s| i64::from(s)).sum()
    }

    /// Coursework plus exam as a percentage of [`MAX_TOTAL`]. Not clamped.
    pub fn overall_percentage(&self) -> f64 {
        // Multiply before dividing: 143 / 160 * 100 is not exactly 89.375.
        (self.coursework_total() + i64::from(self.exam)) as f64 * 100.0 / MAX_TOTAL
    }

    pub fn grade(&self) -> Grade {
        grade(self.overall_percentage())
    }

    /// `"<id> - <name>"`, the label used for listings and search.
    pub fn label(&self) -> String {
        format!("{} - {}", self.id, self.name)
    }

    /// Multi-line rendering shared by every report.
    pub fn formatted(&self) -> String {
        format!(
            "Student Name: {}\n\
             Student Number: {}\n\
             Total Coursework Mark: {} / {MAX_COURSEWORK}\n\
             Exam Mark: {} / {MAX_EXAM}\n\
             Overall Percentage: {:.2}%\n\
             Grade: {}\n",
            self.name,
            self.id,
            self.coursework_total(),
            self.exam,
            self.overall_percentage(),
            self.grade(),
        )
    }

    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            coursework_total: self.coursework_total(),
            exam: self.exam,
            overall_percentage: self.overall_percentage(),
            grade: self.grade(),
        }
    }
}

impl TryFrom<&StringRecord> for StudentRecord {
    type Error = RecordError;

    fn try_from(row: &StringRecord) -> Result<Self, Self::Error> {
        let fields: Vec<&str> = row.iter().collect();
        Self::from_fields(fields.as_slice())
    }
}

/// A record together with its derived metrics, for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    pub id: String,
    pub name: String,
    pub coursework_total: i64,
    pub exam: i32,
    pub overall_percentage: f64,
    pub grade: Grade,
}

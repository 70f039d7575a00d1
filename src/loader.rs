//! Reads a student marks file into a [`Roster`].
//!
//! The file starts with a record count followed by that many lines of
//! `id,name,course1,course2,course3,exam`. [`parse_roster`] and [`load_roster`]
//! report every problem as a [`LoadError`]; [`load_or_sample`] turns any of
//! them into the built-in sample roster so the caller always has data.

use csv::{ReaderBuilder, Trim};
use std::io::ErrorKind;
use std::num::IntErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{LoadError, RecordError};
use crate::record::StudentRecord;
use crate::roster::Roster;

const SAMPLE_DATA: &[(&str, &str, [i32; 3], i32)] = &[
    ("101345", "John Curry", [8, 15, 7], 45),
    ("2345", "Sam Sturtivant", [14, 15, 14], 77),
    ("9876", "Lee Scott", [17, 11, 16], 99),
    ("3724", "Matt Thompson", [19, 11, 15], 81),
    ("1212", "Ron Herrema", [14, 17, 18], 66),
    ("8439", "Jake Hobbs", [10, 11, 10], 43),
    ("2344", "Jo Hyde", [6, 15, 10], 55),
    ("9384", "Gareth Southgate", [5, 6, 8], 33),
    ("8327", "Alan Shearer", [20, 20, 20], 100),
    ("2983", "Les Ferdinand", [15, 17, 18], 92),
];

/// The fixed ten-student roster used whenever the real source is unusable.
pub fn sample_roster() -> Roster {
    SAMPLE_DATA
        .iter()
        .map(|(id, name, coursework, exam)| StudentRecord::new(*id, *name, *coursework, *exam))
        .collect::<Vec<_>>()
        .into()
}

/// A roster plus the reason the sample roster was substituted, if it was.
#[derive(Debug)]
pub struct Loaded {
    pub roster: Roster,
    pub fallback: Option<LoadError>,
}

impl Loaded {
    pub fn is_sample(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Parses the text of a student marks file.
///
/// The first non-blank line is the record count N. The next N lines are read
/// as records; lines with fewer than six fields are skipped and lines past
/// the count are never looked at. Fewer than N lines is not an error.
///
/// # Errors
///
/// - [`LoadError::SourceEmpty`] if there is no count line or no record survives,
///   which includes a count of zero or less.
/// - [`LoadError::SourceMalformed`] if the count or any score is not an integer.
pub fn parse_roster(text: &str) -> Result<Roster, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .skip_while(|(_, line)| line.trim().is_empty());

    let (count_index, count_line) = lines.next().ok_or(LoadError::SourceEmpty)?;
    let count_line_no = count_index + 1;
    let count = parse_count(count_line.trim()).ok_or_else(|| {
        LoadError::malformed(
            count_line_no,
            format!("record count is not an integer: {:?}", count_line.trim()),
        )
    })?;
    debug!(count, "Declared record count");

    let body = lines
        .take(count)
        .map(|(_, line)| line)
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| LoadError::malformed(count_line_no, e.to_string()))?;
        let line_no = count_line_no + row.position().map_or(0, |p| p.line() as usize);

        match StudentRecord::try_from(&row) {
            Ok(record) => records.push(record),
            Err(RecordError::TooFewFields { found }) => {
                debug!(line = line_no, found, "Skipping short record");
            }
            Err(e @ RecordError::InvalidScore { .. }) => {
                return Err(LoadError::malformed(line_no, e.to_string()));
            }
        }
    }

    if records.is_empty() {
        return Err(LoadError::SourceEmpty);
    }

    Ok(Roster::new(records))
}

/// Reads a declared record count. Any integer is accepted: zero or less means
/// no records, and counts too large for `usize` saturate, since only the lines
/// that exist are read anyway. `None` means the text is not an integer.
fn parse_count(raw: &str) -> Option<usize> {
    match raw.parse::<i64>() {
        Ok(n) if n <= 0 => Some(0),
        Ok(n) => Some(usize::try_from(n).unwrap_or(usize::MAX)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(usize::MAX),
            IntErrorKind::NegOverflow => Some(0),
            _ => None,
        },
    }
}

/// Reads and parses the student marks file at `path`.
///
/// # Errors
///
/// [`LoadError::SourceMissing`] if the file does not exist, otherwise anything
/// [`parse_roster`] returns. Unreadable or non UTF-8 files are reported as
/// [`LoadError::SourceMalformed`] at line 0.
pub fn load_roster(path: &Path) -> Result<Roster, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::SourceMissing {
            path: path.to_path_buf(),
        },
        _ => LoadError::malformed(0, e.to_string()),
    })?;

    let text = String::from_utf8(bytes).map_err(|e| LoadError::malformed(0, e.to_string()))?;
    let roster = parse_roster(&text)?;

    info!(records = roster.len(), "Roster loaded");
    Ok(roster)
}

/// Loads the roster at `path`, substituting [`sample_roster`] on any failure.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_or_sample(path: &Path) -> Loaded {
    match load_roster(path) {
        Ok(roster) => Loaded {
            roster,
            fallback: None,
        },
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "Using sample roster");
            Loaded {
                roster: sample_roster(),
                fallback: Some(e),
            }
        }
    }
}

//! Letter grades for an overall percentage mark.

use serde::Serialize;
use std::fmt;

/// Letter grade awarded for an overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts an overall percentage (0.0–100.0) into a letter grade.
///
/// | Range   | Grade |
/// |---------|-------|
/// | >= 70   | A     |
/// | >= 60   | B     |
/// | >= 50   | C     |
/// | >= 40   | D     |
/// | < 40    | F     |
///
/// Percentages outside 0–100 are graded by the same thresholds.
pub fn grade(p: f64) -> Grade {
    match p {
        p if p >= 70.0 => Grade::A,
        p if p >= 60.0 => Grade::B,
        p if p >= 50.0 => Grade::C,
        p if p >= 40.0 => Grade::D,
        _ => Grade::F,
    }
}

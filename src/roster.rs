//! The loaded roster and the queries the viewer answers from it.

use tracing::debug;

use crate::error::EmptyRoster;
use crate::record::StudentRecord;
use crate::utility::mean;

/// Student records in file order. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

/// Every record plus the mean overall percentage, as returned by [`Roster::all`].
#[derive(Debug, Clone, Copy)]
pub struct Overview<'a> {
    pub records: &'a [StudentRecord],
    pub average_percentage: f64,
}

impl Roster {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    /// All records in load order with the mean overall percentage.
    ///
    /// # Errors
    ///
    /// [`EmptyRoster`] when there are no records to average.
    pub fn all(&self) -> Result<Overview<'_>, EmptyRoster> {
        let average_percentage =
            mean(self.records.iter().map(StudentRecord::overall_percentage)).ok_or(EmptyRoster)?;

        Ok(Overview {
            records: &self.records,
            average_percentage,
        })
    }

    /// First record whose id equals `id` exactly (case-sensitive).
    pub fn by_id(&self, id: &str) -> Option<&StudentRecord> {
        let found = self.records.iter().find(|r| r.id() == id);
        debug!(id, found = found.is_some(), "Lookup by id");
        found
    }

    /// Records whose `"<id> - <name>"` label contains `needle`, ignoring case.
    /// An empty needle matches every record.
    pub fn search(&self, needle: &str) -> Vec<&StudentRecord> {
        let needle = needle.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.label().to_lowercase().contains(&needle))
            .collect()
    }

    /// Record with the highest overall percentage; the earliest wins ties.
    pub fn highest(&self) -> Result<&StudentRecord, EmptyRoster> {
        self.first_by(|candidate, best| candidate > best)
    }

    /// Record with the lowest overall percentage; the earliest wins ties.
    pub fn lowest(&self) -> Result<&StudentRecord, EmptyRoster> {
        self.first_by(|candidate, best| candidate < best)
    }

    /// Stable scan that only replaces the current pick on a strict improvement.
    fn first_by(&self, beats: impl Fn(f64, f64) -> bool) -> Result<&StudentRecord, EmptyRoster> {
        let mut iter = self.records.iter();
        let mut best = iter.next().ok_or(EmptyRoster)?;
        let mut best_pct = best.overall_percentage();

        for record in iter {
            let pct = record.overall_percentage();
            if beats(pct, best_pct) {
                best = record;
                best_pct = pct;
            }
        }

        Ok(best)
    }
}

impl From<Vec<StudentRecord>> for Roster {
    fn from(records: Vec<StudentRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

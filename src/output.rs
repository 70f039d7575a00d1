//! Report rendering for roster queries.
//!
//! Supports the banner-framed text layout of the marks viewer and JSON.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::record::{RecordSummary, StudentRecord};
use crate::roster::Overview;

const RULE_WIDTH: usize = 80;

/// The result of one roster query, ready to render.
#[derive(Debug, Clone)]
pub enum Report<'a> {
    All(Overview<'a>),
    Individual(&'a StudentRecord),
    Highest(&'a StudentRecord),
    Lowest(&'a StudentRecord),
    Search {
        query: &'a str,
        matches: Vec<&'a StudentRecord>,
    },
    NotFound {
        id: &'a str,
    },
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    student_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    average_percentage: Option<f64>,
    records: Vec<RecordSummary>,
}

impl Report<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Report::All(_) => "all",
            Report::Individual(_) => "individual",
            Report::Highest(_) => "highest",
            Report::Lowest(_) => "lowest",
            Report::Search { .. } => "search",
            Report::NotFound { .. } => "not_found",
        }
    }

    /// Renders the report as the viewer's output panel text.
    pub fn render_text(&self) -> String {
        match self {
            Report::All(overview) => render_all(overview),
            Report::Individual(record) => single("INDIVIDUAL STUDENT RECORD", record),
            Report::Highest(record) => single("STUDENT WITH HIGHEST OVERALL MARK", record),
            Report::Lowest(record) => single("STUDENT WITH LOWEST OVERALL MARK", record),
            Report::Search { query, matches } => {
                if matches.is_empty() {
                    return format!("No students match {query:?}.\n");
                }
                matches.iter().map(|r| r.label() + "\n").collect()
            }
            Report::NotFound { id } => format!("Student {id} not found.\n"),
        }
    }

    /// Renders the report as pretty-printed JSON.
    pub fn render_json(&self) -> Result<String> {
        let (query, average_percentage, records): (_, _, Vec<&StudentRecord>) = match self {
            Report::All(overview) => (
                None,
                Some(overview.average_percentage),
                overview.records.iter().collect(),
            ),
            Report::Individual(record) | Report::Highest(record) | Report::Lowest(record) => {
                (None, None, vec![*record])
            }
            Report::Search { query, matches } => (Some(*query), None, matches.clone()),
            Report::NotFound { id } => (Some(*id), None, Vec::new()),
        };

        let report = JsonReport {
            generated_at: Utc::now(),
            kind: self.kind(),
            query,
            student_count: records.len(),
            average_percentage,
            records: records.into_iter().map(StudentRecord::summary).collect(),
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}

fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}\n")
}

fn single(title: &str, record: &StudentRecord) -> String {
    format!("{}\n{}", banner(title), record.formatted())
}

fn render_all(overview: &Overview<'_>) -> String {
    let mut out = banner("ALL STUDENT RECORDS");
    out.push('\n');

    let rule = "-".repeat(RULE_WIDTH);
    for (i, record) in overview.records.iter().enumerate() {
        out.push_str(&format!("STUDENT {}:\n{rule}\n", i + 1));
        out.push_str(&record.formatted());
        out.push('\n');
    }

    out.push_str(&banner("SUMMARY"));
    out.push_str(&format!(
        "Number of Students: {}\nAverage Percentage Mark: {:.2}%\n",
        overview.records.len(),
        overview.average_percentage
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::sample_roster;

    #[test]
    fn test_highest_report_text() {
        let roster = sample_roster();
        let text = Report::Highest(roster.highest().unwrap()).render_text();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("=".repeat(80).as_str()));
        assert_eq!(lines.next(), Some("STUDENT WITH HIGHEST OVERALL MARK"));
        assert_eq!(lines.next(), Some("=".repeat(80).as_str()));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("Student Name: Alan Shearer"));
        assert!(text.ends_with("Grade: A\n"));
    }

    #[test]
    fn test_lowest_report_text() {
        let roster = sample_roster();
        let text = Report::Lowest(roster.lowest().unwrap()).render_text();
        assert!(text.contains("STUDENT WITH LOWEST OVERALL MARK"));
        assert!(text.contains("Student Number: 9384"));
        assert!(text.contains("Overall Percentage: 32.50%"));
        assert!(text.contains("Grade: F"));
    }

    #[test]
    fn test_all_report_text() {
        let roster = sample_roster();
        let text = Report::All(roster.all().unwrap()).render_text();

        assert!(text.starts_with(&banner("ALL STUDENT RECORDS")));
        assert!(text.contains("STUDENT 1:\n"));
        assert!(text.contains("STUDENT 10:\n"));
        assert!(!text.contains("STUDENT 11:"));
        assert!(text.contains("Number of Students: 10\n"));
        assert!(text.ends_with("Average Percentage Mark: 68.31%\n"));
    }

    #[test]
    fn test_search_report_text() {
        let roster = sample_roster();
        let report = Report::Search {
            query: "hyde",
            matches: roster.search("hyde"),
        };
        assert_eq!(report.render_text(), "2344 - Jo Hyde\n");

        let report = Report::Search {
            query: "zzz",
            matches: roster.search("zzz"),
        };
        assert_eq!(report.render_text(), "No students match \"zzz\".\n");
    }

    #[test]
    fn test_not_found_report() {
        let roster = sample_roster();
        assert!(roster.by_id("0000").is_none());

        let report = Report::NotFound { id: "0000" };
        assert_eq!(report.render_text(), "Student 0000 not found.\n");

        let value: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();
        assert_eq!(value["kind"], "not_found");
        assert_eq!(value["query"], "0000");
        assert_eq!(value["student_count"], 0);
        assert_eq!(value["records"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_render_json_all() {
        let roster = sample_roster();
        let json = Report::All(roster.all().unwrap()).render_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["kind"], "all");
        assert_eq!(value["student_count"], 10);
        assert_eq!(value["average_percentage"], 68.3125);
        assert_eq!(value["records"][8]["id"], "8327");
        assert_eq!(value["records"][8]["grade"], "A");
        assert!(value.get("query").is_none());
    }

    #[test]
    fn test_render_json_individual() {
        let roster = sample_roster();
        let json = Report::Individual(roster.by_id("9384").unwrap())
            .render_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["kind"], "individual");
        assert_eq!(value["records"][0]["coursework_total"], 19);
        assert_eq!(value["records"][0]["overall_percentage"], 32.5);
        assert_eq!(value["records"][0]["grade"], "F");
        assert!(value.get("average_percentage").is_none());
    }
}

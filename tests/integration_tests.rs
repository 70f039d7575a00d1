use std::path::Path;
use student_marks::output::Report;
use student_marks::{Grade, LoadError, load_or_sample, parse_roster, sample_roster};

#[test]
fn test_full_pipeline() {
    let text = include_str!("fixtures/studentMarks.txt");
    let roster = parse_roster(text).expect("Failed to parse roster");

    // Six declared lines, one of them too short; the seventh is past the count.
    let ids: Vec<_> = roster.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["4401", "4402", "4403", "4405", "4406"]);

    let overview = roster.all().unwrap();
    assert!((overview.average_percentage - 66.125).abs() < 1e-9);

    // 4401 and 4406 tie on 88.75%; the earlier one wins.
    assert_eq!(roster.highest().unwrap().id(), "4401");
    assert_eq!(roster.lowest().unwrap().id(), "4403");

    let ortega = roster.by_id("4405").unwrap();
    assert_eq!(ortega.coursework_total(), 45);
    assert_eq!(ortega.overall_percentage(), 68.125);
    assert_eq!(ortega.grade(), Grade::B);

    assert!(roster.by_id("4407").is_none());
    assert!(roster.by_id("4404").is_none());
}

#[test]
fn test_bundled_resource_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/studentMarks.txt");
    let loaded = load_or_sample(&path);

    assert!(loaded.fallback.is_none());
    assert_eq!(loaded.roster.len(), 10);
    assert_eq!(
        loaded.roster.highest().unwrap().label(),
        "8327 - Alan Shearer"
    );
    assert_eq!(
        loaded.roster.lowest().unwrap().label(),
        "9384 - Gareth Southgate"
    );
}

#[test]
fn test_missing_file_uses_sample_roster() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/no_such_file.txt");
    let loaded = load_or_sample(&path);

    assert!(matches!(loaded.fallback, Some(LoadError::SourceMissing { .. })));
    assert_eq!(loaded.roster, sample_roster());

    let text = Report::All(loaded.roster.all().unwrap()).render_text();
    assert!(text.contains("Number of Students: 10"));
    assert!(text.contains("Average Percentage Mark: 68.31%"));
}

#[test]
fn test_sample_extremes_and_grades() {
    let roster = sample_roster();

    let top = roster.highest().unwrap();
    assert_eq!((top.id(), top.name()), ("8327", "Alan Shearer"));
    assert_eq!(top.coursework_total(), 60);
    assert_eq!(top.grade(), Grade::A);

    let bottom = roster.lowest().unwrap();
    assert_eq!((bottom.id(), bottom.name()), ("9384", "Gareth Southgate"));
    assert_eq!(bottom.overall_percentage(), 32.5);
    assert_eq!(bottom.grade(), Grade::F);

    let grades: Vec<_> = roster.iter().map(|r| r.grade()).collect();
    assert_eq!(
        grades,
        vec![
            Grade::D,
            Grade::A,
            Grade::A,
            Grade::A,
            Grade::A,
            Grade::D,
            Grade::C,
            Grade::F,
            Grade::A,
            Grade::A,
        ]
    );
}

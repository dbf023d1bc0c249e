//! Integration tests for SGPA CLI commands.
//!
//! Uses tempfile for grade, catalog and SVG files.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use sgpa::cli::{
    AppContext, CalculateArgs, cmd_calculate, cmd_catalog, cmd_departments, cmd_grades,
    cmd_interactive, cmd_lookup, cmd_subjects, parse_grade_arg,
};
use sgpa::config::{AppConfig, load_catalog_file};
use sgpa_core::{ArrearPolicy, CurriculumCatalog, Department, Semester};
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn sem(n: u8) -> Semester {
    Semester::new(n).unwrap()
}

/// Run a command against a buffer and return what it printed.
fn capture<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> sgpa::cli::CliResult,
{
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn calculate_args(department: Department, semester: Semester) -> CalculateArgs {
    CalculateArgs {
        department,
        semester,
        grades: Vec::new(),
        grades_file: None,
        arrears: Vec::new(),
        json: false,
        svg: None,
    }
}

/// Grades for CSE semester 1 by code, credits 4,4,3,3,2,2.
fn cse_first_semester_grades() -> Vec<String> {
    ["HS8151=O", "MA8151=A+", "PH8151=A", "CY8151=B+", "GE8161=B", "BS8161=C"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

// =============================================================================
// LISTING COMMANDS
// =============================================================================

#[test]
fn test_departments_lists_all_five() {
    let ctx = AppContext::builtin();
    let text = capture(|out| cmd_departments(&ctx, out, false));
    for department in Department::ALL {
        assert!(text.contains(department.as_str()), "missing {department}");
    }
}

#[test]
fn test_departments_json() {
    let ctx = AppContext::builtin();
    let text = capture(|out| cmd_departments(&ctx, out, true));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(list[0]["semesters"].as_array().unwrap().len(), 7);
}

#[test]
fn test_subjects_for_cse_first_semester() {
    let ctx = AppContext::builtin();
    let text = capture(|out| cmd_subjects(&ctx, out, Department::Cse, sem(1), false));
    assert!(text.contains("HS8151"));
    assert!(text.contains("Communicative English"));
    assert!(text.contains("6 subjects, 18 credits"));
}

#[test]
fn test_subjects_json_carries_credits() {
    let ctx = AppContext::builtin();
    let text = capture(|out| cmd_subjects(&ctx, out, Department::Cse, sem(3), true));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let data_structures = value
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["code"] == "CS8391")
        .unwrap();
    assert_eq!(data_structures["name"], "Data Structures");
    assert_eq!(data_structures["credits"], 3);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let ctx = AppContext::builtin();
    let text = capture(|out| cmd_lookup(&ctx, out, Department::Cse, " cs8391 ", false));
    assert!(text.contains("Data Structures"));
}

#[test]
fn test_lookup_unknown_code_fails() {
    let ctx = AppContext::builtin();
    let mut out = Vec::new();
    let result = cmd_lookup(&ctx, &mut out, Department::Cse, "ZZ0000", false);
    assert!(result.is_err());
}

#[test]
fn test_grades_table() {
    let ctx = AppContext::builtin();
    let text = capture(|out| cmd_grades(&ctx, out, true));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[0]["grade"], "O");
    assert_eq!(rows[0]["points"], 10);
    assert_eq!(rows[8]["grade"], "RA");
    assert_eq!(rows[8]["points"], 0);
}

// =============================================================================
// CATALOG COMMAND TESTS
// =============================================================================

#[test]
fn test_catalog_export_reloads_identically() {
    let temp = create_temp_dir();
    let path = temp.path().join("catalog.json");
    let ctx = AppContext::builtin();

    let text = capture(|out| cmd_catalog(&ctx, out, Some(&path)));
    assert!(text.contains("Catalog written"));

    let reloaded = load_catalog_file(&path).unwrap();
    assert_eq!(reloaded, CurriculumCatalog::builtin());
}

#[test]
fn test_custom_catalog_through_config() {
    let temp = create_temp_dir();
    let path = temp.path().join("tiny.json");
    std::fs::write(
        &path,
        r#"{
            "departments": {
                "CSE": {
                    "subjects": {
                        "XX1001": {"name": "Only Subject", "credits": 5}
                    },
                    "semesters": {"1": ["XX1001"]}
                }
            }
        }"#,
    )
    .unwrap();

    let config = AppConfig {
        catalog: Some(path),
        ..AppConfig::default()
    };
    let ctx = AppContext::from_config(&config).unwrap();

    let mut args = calculate_args(Department::Cse, sem(1));
    args.grades = vec!["Only Subject=B".to_string()];
    let text = capture(|out| cmd_calculate(&ctx, out, &args));
    assert!(text.contains("SGPA: 6.00"));
}

#[test]
fn test_catalog_with_dangling_code_is_rejected() {
    let temp = create_temp_dir();
    let path = temp.path().join("broken.json");
    std::fs::write(
        &path,
        r#"{"departments": {"ECE": {"subjects": {}, "semesters": {"2": ["EC0000"]}}}}"#,
    )
    .unwrap();

    let result = load_catalog_file(&path);
    assert!(result.is_err());
}

// =============================================================================
// CALCULATE COMMAND TESTS
// =============================================================================

#[test]
fn test_calculate_all_o_is_ten() {
    let ctx = AppContext::builtin();
    let mut args = calculate_args(Department::Cse, sem(1));
    args.grades = ["HS8151", "MA8151", "PH8151", "CY8151", "GE8161", "BS8161"]
        .iter()
        .map(|code| format!("{code}=O"))
        .collect();

    let text = capture(|out| cmd_calculate(&ctx, out, &args));
    assert!(text.contains("SGPA: 10.00"));
    assert!(text.contains("100.0%"));
}

#[test]
fn test_calculate_weighted_average() {
    // (40 + 36 + 24 + 21 + 12 + 10) / 18 = 7.944...
    let ctx = AppContext::builtin();
    let mut args = calculate_args(Department::Cse, sem(1));
    args.grades = cse_first_semester_grades();
    args.json = true;

    let text = capture(|out| cmd_calculate(&ctx, out, &args));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["department"], "CSE");
    assert_eq!(value["semester"], 1);
    assert_eq!(value["ready"], true);
    assert_eq!(value["result"]["average"], "7.94");
    assert_eq!(value["result"]["weighted_sum"], 143);
    assert_eq!(value["result"]["total_credits"], 18);
}

#[test]
fn test_calculate_with_grades_file_and_override() {
    let temp = create_temp_dir();
    let path = temp.path().join("grades.json");
    std::fs::write(
        &path,
        r#"{
            "HS8151": "A",
            "MA8151": "A",
            "Engineering Physics": "A",
            "cy8151": "A",
            "GE8161": "A",
            "BS8161": "A"
        }"#,
    )
    .unwrap();

    let ctx = AppContext::builtin();
    let mut args = calculate_args(Department::Cse, sem(1));
    args.grades_file = Some(path);
    // Command-line grades apply after the file.
    args.grades = vec!["HS8151=O".to_string()];

    // (40 + 32 + 24 + 24 + 16 + 16) / 18 = 8.444...
    let text = capture(|out| cmd_calculate(&ctx, out, &args));
    assert!(text.contains("SGPA: 8.44"));
}

#[test]
fn test_calculate_with_arrear() {
    let ctx = AppContext::builtin();
    let mut args = calculate_args(Department::Cse, sem(3));
    let subjects = ctx.catalog.subjects_for(Some(Department::Cse), Some(sem(3)));
    args.grades = subjects
        .iter()
        .map(|s| format!("{}=A+", s.code))
        .collect();
    args.arrears = vec!["ma8151".to_string()];
    args.grades.push("MA8151=O".to_string());

    let text = capture(|out| cmd_calculate(&ctx, out, &args));
    assert!(text.contains("Engineering Mathematics - I"));
    assert!(text.contains("[arrear]"));
}

#[test]
fn test_calculate_unknown_arrear_fails() {
    let ctx = AppContext::builtin();
    let mut args = calculate_args(Department::Ece, sem(4));
    args.arrears = vec!["NOPE123".to_string()];

    let mut out = Vec::new();
    let err = cmd_calculate(&ctx, &mut out, &args).unwrap_err();
    assert!(err.to_string().contains("Invalid subject code"));
}

#[test]
fn test_calculate_duplicate_arrear_policy() {
    let mut ctx = AppContext::builtin();
    let mut args = calculate_args(Department::Cse, sem(2));
    args.arrears = vec!["MA8151".to_string(), "MA8151".to_string()];

    ctx.policy = ArrearPolicy::RejectDuplicates;
    let mut out = Vec::new();
    let err = cmd_calculate(&ctx, &mut out, &args).unwrap_err();
    assert!(err.to_string().contains("already in the arrear list"));
}

#[test]
fn test_calculate_incomplete_fails() {
    let ctx = AppContext::builtin();
    let mut args = calculate_args(Department::Cse, sem(1));
    args.grades = vec!["HS8151=O".to_string()];

    let mut out = Vec::new();
    let err = cmd_calculate(&ctx, &mut out, &args).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("missing grades for"));
    assert!(message.contains("Engineering Physics"));
}

#[test]
fn test_calculate_unknown_subject_key_fails() {
    let ctx = AppContext::builtin();
    let mut args = calculate_args(Department::Cse, sem(1));
    args.grades = vec!["Underwater Basket Weaving=O".to_string()];

    let mut out = Vec::new();
    assert!(cmd_calculate(&ctx, &mut out, &args).is_err());
}

#[test]
fn test_calculate_unrecognized_grade_is_not_counted() {
    let ctx = AppContext::builtin();
    let mut args = calculate_args(Department::Cse, sem(1));
    args.grades = cse_first_semester_grades();
    // BS8161 (2 credits) drops out: (143 - 10) / 16 = 8.3125
    args.grades.push("BS8161=F".to_string());
    args.json = true;

    let text = capture(|out| cmd_calculate(&ctx, out, &args));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["result"]["average"], "8.31");
    assert_eq!(value["result"]["total_credits"], 16);
    assert_eq!(value["result"]["is_complete"], false);
}

#[test]
fn test_calculate_writes_svg() {
    let temp = create_temp_dir();
    let svg: PathBuf = temp.path().join("gauge.svg");

    let ctx = AppContext::builtin();
    let mut args = calculate_args(Department::Cse, sem(1));
    args.grades = cse_first_semester_grades();
    args.svg = Some(svg.clone());

    capture(|out| cmd_calculate(&ctx, out, &args));
    let content = std::fs::read_to_string(&svg).unwrap();
    assert!(content.starts_with("<svg"));
    assert!(content.contains(">7.94<"));
}

#[test]
fn test_parse_grade_arg() {
    assert_eq!(
        parse_grade_arg("Engineering Mathematics - I=A+"),
        Ok(("Engineering Mathematics - I".to_string(), "A+".to_string()))
    );
    assert!(parse_grade_arg("HS8151").is_err());
    assert!(parse_grade_arg("=O").is_err());
}

// =============================================================================
// INTERACTIVE TESTS
// =============================================================================

#[test]
fn test_interactive_full_session() {
    let ctx = AppContext::builtin();
    let script = "\
start
dept cse
sem 1
grade 1 O
grade MA8151 O
grade Engineering Physics O
grade 4 O
grade 5 O
calc
grade 6 O
calc
quit
";
    let text = capture(|out| cmd_interactive(&ctx, script.as_bytes(), out));
    assert!(text.starts_with("Welcome to SGPA Calculator"));
    assert!(text.contains("Calculate is disabled: 1 subject(s)"));
    assert!(text.contains("SGPA 10.00"));
    assert!(text.trim_end().ends_with("Bye."));
}

#[test]
fn test_interactive_requires_start() {
    let ctx = AppContext::builtin();
    let text = capture(|out| cmd_interactive(&ctx, "dept cse\n".as_bytes(), out));
    assert!(text.contains("Type 'start' to begin."));
    assert!(!text.contains("Department: CSE"));
}

#[test]
fn test_interactive_arrear_form() {
    let ctx = AppContext::builtin();
    let script = "\
start
arrear
dept ece
sem 4
arrear
submit XX9999
submit MA8151
show
";
    let text = capture(|out| cmd_interactive(&ctx, script.as_bytes(), out));
    assert!(text.contains("Select a department first."));
    assert!(text.contains("! Invalid subject code for the selected department."));
    assert!(text.contains("Added arrear MA8151 Engineering Mathematics - I."));
    assert!(text.contains("[arrear]"));
}

//! # CLI Commands
//!
//! One `cmd_*` function per subcommand. Each writes to the given output
//! so the binary passes stdout and tests pass a buffer.

use crate::config::AppConfig;
use crate::interactive;
use crate::render::{Report, gauge_svg, report_text};
use serde::Serialize;
use sgpa_core::{
    AggregationEngine, ArrearPolicy, CurriculumCatalog, Department, GradeTable, Semester,
    SelectionState, SessionError, SubjectCode, SubjectDescriptor,
};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

// =============================================================================
// CONTEXT
// =============================================================================

/// Immutable data loaded once at startup and shared by every session.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub catalog: Arc<CurriculumCatalog>,
    pub grades: Arc<GradeTable>,
    pub policy: ArrearPolicy,
}

impl AppContext {
    /// Bundled catalog, standard grades, default policy.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            catalog: Arc::new(CurriculumCatalog::builtin()),
            grades: Arc::new(GradeTable::standard()),
            policy: ArrearPolicy::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let catalog = config.load_catalog()?;
        info!(
            subjects = catalog.subject_count(),
            custom = config.catalog.is_some(),
            "catalog loaded"
        );
        Ok(Self {
            catalog: Arc::new(catalog),
            grades: Arc::new(GradeTable::standard()),
            policy: config.arrear_policy,
        })
    }

    /// A fresh, empty session over the shared data.
    #[must_use]
    pub fn new_session(&self) -> SelectionState {
        let engine = AggregationEngine::new(Arc::clone(&self.grades));
        SelectionState::new(Arc::clone(&self.catalog), engine).with_policy(self.policy)
    }
}

// =============================================================================
// LISTING COMMANDS
// =============================================================================

#[derive(Debug, Serialize)]
struct DepartmentSummary {
    department: Department,
    semesters: Vec<Semester>,
    subjects: usize,
}

/// `sgpa departments`
pub fn cmd_departments<W: Write>(ctx: &AppContext, out: &mut W, json: bool) -> CliResult {
    let summaries: Vec<_> = ctx
        .catalog
        .departments()
        .map(|department| DepartmentSummary {
            department,
            semesters: ctx.catalog.semesters(department),
            subjects: ctx.catalog.registry(department).count(),
        })
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
        return Ok(());
    }

    for summary in &summaries {
        let semesters: Vec<String> = summary.semesters.iter().map(ToString::to_string).collect();
        writeln!(
            out,
            "{:<6} semesters {:<16} {} subjects",
            summary.department.as_str(),
            semesters.join(","),
            summary.subjects
        )?;
    }
    Ok(())
}

/// `sgpa subjects`
pub fn cmd_subjects<W: Write>(
    ctx: &AppContext,
    out: &mut W,
    department: Department,
    semester: Semester,
    json: bool,
) -> CliResult {
    let subjects = ctx.catalog.subjects_for(Some(department), Some(semester));
    debug!(%department, %semester, count = subjects.len(), "listing subjects");

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&subjects)?)?;
        return Ok(());
    }

    if subjects.is_empty() {
        writeln!(out, "No subjects for {department} semester {semester}.")?;
        return Ok(());
    }
    for subject in &subjects {
        write_subject(out, subject)?;
    }
    let total: u32 = subjects.iter().map(|s| s.credits.value()).sum();
    writeln!(out, "{} subjects, {} credits", subjects.len(), total)?;
    Ok(())
}

fn write_subject<W: Write>(out: &mut W, subject: &SubjectDescriptor) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<8} {:<50} {:>2} cr",
        subject.code.as_str(),
        subject.name,
        subject.credits.value()
    )
}

/// `sgpa lookup`
pub fn cmd_lookup<W: Write>(
    ctx: &AppContext,
    out: &mut W,
    department: Department,
    code: &str,
    json: bool,
) -> CliResult {
    let Some(subject) = ctx.catalog.lookup_subject(department, code) else {
        return Err(format!("no subject '{}' in {department}", SubjectCode::new(code)).into());
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(subject)?)?;
    } else {
        write_subject(out, subject)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct GradeRow {
    grade: String,
    points: u8,
}

/// `sgpa grades`
pub fn cmd_grades<W: Write>(ctx: &AppContext, out: &mut W, json: bool) -> CliResult {
    let rows: Vec<_> = ctx
        .grades
        .symbols()
        .map(|(symbol, points)| GradeRow {
            grade: symbol.label().to_string(),
            points: points.value(),
        })
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }
    for row in &rows {
        writeln!(out, "{:<3} {:>2}", row.grade, row.points)?;
    }
    Ok(())
}

/// `sgpa catalog`: dump the active catalog as JSON (a template for `--catalog`).
pub fn cmd_catalog<W: Write>(ctx: &AppContext, out: &mut W, output: Option<&Path>) -> CliResult {
    let json = serde_json::to_string_pretty(&ctx.catalog.to_source())?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!(path = %path.display(), "catalog written");
            writeln!(out, "Catalog written to {}", path.display())?;
        }
        None => writeln!(out, "{json}")?,
    }
    Ok(())
}

// =============================================================================
// CALCULATE
// =============================================================================

/// Inputs of a one-shot calculation.
#[derive(Debug, Clone)]
pub struct CalculateArgs {
    pub department: Department,
    pub semester: Semester,
    /// `KEY=GRADE` pairs; KEY is a subject code or display name.
    pub grades: Vec<String>,
    /// JSON object of KEY -> GRADE, applied before `grades`.
    pub grades_file: Option<PathBuf>,
    pub arrears: Vec<String>,
    pub json: bool,
    pub svg: Option<PathBuf>,
}

/// Split `KEY=GRADE` on the last `=`.
pub fn parse_grade_arg(arg: &str) -> Result<(String, String), String> {
    let Some((key, grade)) = arg.rsplit_once('=') else {
        return Err(format!("expected KEY=GRADE, got '{arg}'"));
    };
    let (key, grade) = (key.trim(), grade.trim());
    if key.is_empty() {
        return Err(format!("missing subject before '=' in '{arg}'"));
    }
    Ok((key.to_string(), grade.to_string()))
}

/// Resolve a grade key to the display name of a subject in the session.
///
/// Codes are tried first, then names (case-insensitive).
pub fn resolve_subject_key(state: &SelectionState, key: &str) -> Option<String> {
    let combined = state.combined_subjects();
    let code = SubjectCode::new(key);
    combined
        .iter()
        .find(|s| s.code == code)
        .or_else(|| combined.iter().find(|s| s.name.eq_ignore_ascii_case(key.trim())))
        .map(|s| s.name.clone())
}

fn read_grades_file(path: &Path) -> Result<BTreeMap<String, String>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read grades file {}: {e}", path.display()))?;
    let grades = serde_json::from_str(&content)
        .map_err(|e| format!("invalid grades file {}: {e}", path.display()))?;
    Ok(grades)
}

/// `sgpa calculate`
pub fn cmd_calculate<W: Write>(ctx: &AppContext, out: &mut W, args: &CalculateArgs) -> CliResult {
    let mut state = ctx.new_session();
    state.select_department(args.department);
    state.select_semester(args.semester);

    for code in &args.arrears {
        let subject = state
            .add_arrear_subject(code)
            .map_err(|e| format!("arrear '{}': {e}", code.trim()))?;
        debug!(code = %subject.code, name = %subject.name, "arrear added");
    }

    let mut pairs: Vec<(String, String)> = Vec::new();
    if let Some(path) = &args.grades_file {
        pairs.extend(read_grades_file(path)?);
    }
    for arg in &args.grades {
        pairs.push(parse_grade_arg(arg)?);
    }

    for (key, grade) in pairs {
        let Some(name) = resolve_subject_key(&state, &key) else {
            return Err(format!(
                "no subject '{key}' in {} semester {} or the arrear list",
                args.department, args.semester
            )
            .into());
        };
        if !ctx.grades.points_for(&grade).is_found() {
            warn!(subject = %name, grade = %grade, "unrecognized grade; subject will not be counted");
        }
        state.set_grade(name, grade);
    }

    let result = match state.calculate() {
        Ok(result) => result,
        Err(SessionError::IncompleteSelection { ungraded }) => {
            return Err(format!("missing grades for: {}", ungraded.join(", ")).into());
        }
    };
    info!(
        average = %result.average,
        credits = result.total_credits,
        subjects = result.total_subjects,
        "calculated"
    );

    if let Some(path) = &args.svg {
        std::fs::write(path, gauge_svg(result.average, "SGPA"))?;
        info!(path = %path.display(), "gauge written");
    }

    let report = Report::from_session(&state);
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write!(out, "{}", report_text(&report))?;
    }
    Ok(())
}

// =============================================================================
// INTERACTIVE
// =============================================================================

/// `sgpa interactive`
pub fn cmd_interactive<R: BufRead, W: Write>(ctx: &AppContext, input: R, out: &mut W) -> CliResult {
    let state = ctx.new_session();
    interactive::run(state, input, out)?;
    Ok(())
}

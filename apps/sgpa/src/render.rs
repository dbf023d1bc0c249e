//! # Rendering
//!
//! Text and SVG views of a session. Everything is re-rendered from the
//! session on every change; nothing here holds state.

use serde::Serialize;
use sgpa_core::{
    AggregationResult, ArrearForm, Department, GradePointAverage, PointLookup, Semester,
    SelectionState,
};

// =============================================================================
// REPORT MODEL
// =============================================================================

/// One subject row as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectLine {
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub grade: Option<String>,
    /// Points if the grade is recognized.
    pub points: Option<u8>,
    pub arrear: bool,
}

/// Snapshot of a session suitable for printing or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub department: Option<Department>,
    pub semester: Option<Semester>,
    pub subjects: Vec<SubjectLine>,
    pub ready: bool,
    pub result: Option<AggregationResult>,
}

impl Report {
    #[must_use]
    pub fn from_session(state: &SelectionState) -> Self {
        let regular = state.regular_subjects();
        let regular_count = regular.len();
        let engine = state.engine();

        let subjects = state
            .combined_subjects()
            .into_iter()
            .enumerate()
            .map(|(i, subject)| {
                let points = match engine.lookup(&subject, state.grades()) {
                    PointLookup::Found(p) => Some(p.value()),
                    PointLookup::NotApplicable => None,
                };
                SubjectLine {
                    code: subject.code.to_string(),
                    grade: state.grade_for(&subject.name).map(str::to_string),
                    name: subject.name,
                    credits: subject.credits.value(),
                    points,
                    arrear: i >= regular_count,
                }
            })
            .collect();

        Self {
            department: state.department(),
            semester: state.semester(),
            subjects,
            ready: state.ready_to_calculate(),
            result: state.result().cloned(),
        }
    }
}

// =============================================================================
// TEXT
// =============================================================================

const RULE: &str = "─────────────────────────────────────────────────────────────";
const BAR_CELLS: u32 = 20;

/// A horizontal gauge, e.g. `[#################---] 85.7%`.
#[must_use]
pub fn gauge_bar(average: GradePointAverage) -> String {
    let tenths = average.percent_tenths().min(1000);
    let filled = tenths * BAR_CELLS / 1000;
    let mut bar = String::from("[");
    for cell in 0..BAR_CELLS {
        bar.push(if cell < filled { '#' } else { '-' });
    }
    bar.push_str("] ");
    bar.push_str(&average.percent_text());
    bar.push('%');
    bar
}

fn selector_line(report: &Report) -> String {
    let department = report
        .department
        .map_or_else(|| "(none)".to_string(), |d| d.to_string());
    let semester = report
        .semester
        .map_or_else(|| "(none)".to_string(), |s| s.to_string());
    format!("│ Department: {department}   Semester: {semester}\n")
}

fn subject_row(index: usize, line: &SubjectLine) -> String {
    let grade = match (&line.grade, line.points) {
        (Some(g), Some(p)) => format!("{g} ({p})"),
        (Some(g), None) => format!("{g} (not counted)"),
        (None, _) => "-".to_string(),
    };
    let tag = if line.arrear { " [arrear]" } else { "" };
    format!(
        "│ {:>2}. {:<8} {:<44} {:>2} cr  {}{}\n",
        index + 1,
        line.code,
        line.name,
        line.credits,
        grade,
        tag
    )
}

/// The full report box.
#[must_use]
pub fn report_text(report: &Report) -> String {
    let mut output = String::new();

    output.push_str(&format!("┌{RULE}\n"));
    output.push_str("│ SGPA CALCULATOR\n");
    output.push_str(&selector_line(report));
    output.push_str(&format!("├{RULE}\n"));

    if report.subjects.is_empty() {
        output.push_str("│ (select a department and semester to list subjects)\n");
    } else {
        for (i, line) in report.subjects.iter().enumerate() {
            output.push_str(&subject_row(i, line));
        }
    }

    output.push_str(&format!("├{RULE}\n"));
    match &report.result {
        Some(result) => {
            output.push_str(&format!("│ SGPA: {}\n", result.average));
            output.push_str(&format!("│ {}\n", gauge_bar(result.average)));
            output.push_str(&format!(
                "│ Credits counted: {} over {} of {} subject(s)\n",
                result.total_credits, result.graded_subjects, result.total_subjects
            ));
        }
        None => {
            let status = if report.ready {
                "ready"
            } else {
                "disabled (grade every subject first)"
            };
            output.push_str(&format!("│ Calculate: {status}\n"));
        }
    }
    output.push_str(&format!("└{RULE}\n"));

    output
}

/// The interactive view: report plus arrear form state.
#[must_use]
pub fn session_view(state: &SelectionState) -> String {
    let mut output = report_text(&Report::from_session(state));
    match state.arrear_form() {
        ArrearForm::Hidden => {}
        ArrearForm::Editing => {
            output.push_str("Arrear form open: 'submit <CODE>' or 'cancel'.\n");
        }
        ArrearForm::SubmittedError => {
            output.push_str("Arrear form open: 'submit <CODE>' or 'cancel'.\n");
            if let Some(err) = state.validation_error() {
                output.push_str(&format!("! {err}\n"));
            }
        }
    }
    output
}

// =============================================================================
// SVG GAUGE
// =============================================================================

/// Gauge radius in px.
pub const GAUGE_RADIUS: u32 = 70;

/// `2 * pi * GAUGE_RADIUS` in thousandths of a px.
pub const GAUGE_CIRCUMFERENCE_MILLI: u64 = 439_823;

/// Stroke offset hiding the unfilled part of the ring, in thousandths of a px.
///
/// Full circumference at 0%, zero at 100%.
#[must_use]
pub fn stroke_dash_offset_milli(percent_tenths: u32) -> u64 {
    let tenths = u64::from(percent_tenths.min(1000));
    GAUGE_CIRCUMFERENCE_MILLI * (1000 - tenths) / 1000
}

fn milli(value: u64) -> String {
    format!("{}.{:03}", value / 1000, value % 1000)
}

/// Circular progress gauge as a standalone SVG document.
#[must_use]
pub fn gauge_svg(average: GradePointAverage, heading: &str) -> String {
    let circumference = milli(GAUGE_CIRCUMFERENCE_MILLI);
    let offset = milli(stroke_dash_offset_milli(average.percent_tenths()));
    format!(
        r##"<svg class="progress_chart" xmlns="http://www.w3.org/2000/svg" width="160px" height="160px" viewBox="0 0 160 160">
  <defs>
    <linearGradient id="GradientColor">
      <stop offset="0%" stop-color="#00134d" />
      <stop offset="100%" stop-color="#002699" />
    </linearGradient>
  </defs>
  <circle class="bg" cx="80" cy="80" r="{r}" fill="none" stroke="#e0e4f0" stroke-width="20" />
  <circle class="progress" cx="80" cy="80" r="{r}" fill="none" stroke="url(#GradientColor)" stroke-width="20" stroke-linecap="round" stroke-dasharray="{circumference}" stroke-dashoffset="{offset}" transform="rotate(-90 80 80)" />
  <text x="80" y="80" text-anchor="middle" font-size="22" font-weight="bold">{average}</text>
  <text x="80" y="102" text-anchor="middle" font-size="12">{heading}</text>
</svg>
"##,
        r = GAUGE_RADIUS,
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_bar_fill() {
        assert_eq!(
            gauge_bar(GradePointAverage::ZERO),
            "[--------------------] 0.0%"
        );
        assert_eq!(
            gauge_bar(GradePointAverage::from_hundredths(1000)),
            "[####################] 100.0%"
        );
        assert_eq!(
            gauge_bar(GradePointAverage::from_hundredths(500)),
            "[##########----------] 50.0%"
        );
    }

    #[test]
    fn dash_offset_endpoints() {
        assert_eq!(stroke_dash_offset_milli(0), GAUGE_CIRCUMFERENCE_MILLI);
        assert_eq!(stroke_dash_offset_milli(1000), 0);
        assert_eq!(stroke_dash_offset_milli(500), GAUGE_CIRCUMFERENCE_MILLI / 2);
        // Clamped above 100%.
        assert_eq!(stroke_dash_offset_milli(2000), 0);
    }

    #[test]
    fn svg_contains_geometry() {
        let svg = gauge_svg(GradePointAverage::from_hundredths(857), "SGPA");
        assert!(svg.contains(r#"r="70""#));
        assert!(svg.contains(r#"stroke-dasharray="439.823""#));
        // 439823 * 143 / 1000 = 62894
        assert!(svg.contains(r#"stroke-dashoffset="62.894""#));
        assert!(svg.contains(">8.57<"));
        assert!(svg.contains(">SGPA<"));
    }

    #[test]
    fn empty_report_text() {
        let report = Report {
            department: None,
            semester: None,
            subjects: Vec::new(),
            ready: false,
            result: None,
        };
        let text = report_text(&report);
        assert!(text.contains("Department: (none)"));
        assert!(text.contains("select a department"));
        assert!(text.contains("Calculate: disabled"));
    }
}

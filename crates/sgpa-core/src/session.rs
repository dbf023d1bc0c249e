//! # Selection State
//!
//! One user's calculator session: department, semester, grade picks and
//! arrear subjects.
//!
//! Reset rules live in a single transition table ([`Transition::reset_scope`]):
//!
//! | Transition        | grades | arrears | result | arrear form |
//! |-------------------|--------|---------|--------|-------------|
//! | DepartmentChanged | clear  | clear   | clear  | close       |
//! | SemesterChanged   | clear  | keep    | clear  | keep        |
//! | GradeSet          | keep   | keep    | keep   | keep        |
//! | ArrearAdded       | keep   | keep    | keep   | keep        |
//!
//! Arrears survive a semester change but not a department change.

use crate::aggregate::{AggregationEngine, AggregationResult, GradeSheet};
use crate::catalog::{CurriculumCatalog, SubjectDescriptor};
use crate::error::{ArrearError, SessionError};
use crate::{Department, Semester, SubjectCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// TRANSITION TABLE
// =============================================================================

/// A user action that mutates the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    DepartmentChanged,
    SemesterChanged,
    GradeSet,
    ArrearAdded,
}

/// What a transition wipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResetScope {
    pub grades: bool,
    pub arrears: bool,
    pub result: bool,
    pub arrear_form: bool,
}

impl ResetScope {
    pub const NONE: Self = Self {
        grades: false,
        arrears: false,
        result: false,
        arrear_form: false,
    };
}

impl Transition {
    pub const ALL: [Transition; 4] = [
        Transition::DepartmentChanged,
        Transition::SemesterChanged,
        Transition::GradeSet,
        Transition::ArrearAdded,
    ];

    #[must_use]
    pub const fn reset_scope(self) -> ResetScope {
        match self {
            Transition::DepartmentChanged => ResetScope {
                grades: true,
                arrears: true,
                result: true,
                arrear_form: true,
            },
            Transition::SemesterChanged => ResetScope {
                grades: true,
                arrears: false,
                result: true,
                arrear_form: false,
            },
            Transition::GradeSet | Transition::ArrearAdded => ResetScope::NONE,
        }
    }
}

// =============================================================================
// ARREAR FORM & POLICY
// =============================================================================

/// State of the arrear-entry form.
///
/// A successful submit passes through "submitted OK" and immediately
/// settles in `Hidden`, so that state is never observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrearForm {
    #[default]
    Hidden,
    Editing,
    /// The last submit was rejected; the form stays open with the error.
    SubmittedError,
}

impl ArrearForm {
    #[must_use]
    pub fn is_open(self) -> bool {
        !matches!(self, ArrearForm::Hidden)
    }
}

/// How repeated arrear codes are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrearPolicy {
    /// Every valid submit appends, so a repeated code counts twice.
    #[default]
    AllowDuplicates,
    /// A code already in the arrear list is rejected.
    RejectDuplicates,
}

// =============================================================================
// SELECTION STATE
// =============================================================================

/// Mutable session state over a shared catalog.
#[derive(Debug, Clone)]
pub struct SelectionState {
    catalog: Arc<CurriculumCatalog>,
    engine: AggregationEngine,
    policy: ArrearPolicy,

    department: Option<Department>,
    semester: Option<Semester>,
    grades: GradeSheet,
    arrears: Vec<SubjectDescriptor>,
    result: Option<AggregationResult>,

    arrear_form: ArrearForm,
    validation_error: Option<ArrearError>,
}

impl SelectionState {
    /// Start an empty session.
    #[must_use]
    pub fn new(catalog: Arc<CurriculumCatalog>, engine: AggregationEngine) -> Self {
        Self {
            catalog,
            engine,
            policy: ArrearPolicy::default(),
            department: None,
            semester: None,
            grades: GradeSheet::new(),
            arrears: Vec::new(),
            result: None,
            arrear_form: ArrearForm::Hidden,
            validation_error: None,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ArrearPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn apply(&mut self, transition: Transition) {
        let scope = transition.reset_scope();
        if scope.grades {
            self.grades.clear();
        }
        if scope.arrears {
            self.arrears.clear();
        }
        if scope.result {
            self.result = None;
        }
        if scope.arrear_form {
            self.arrear_form = ArrearForm::Hidden;
            self.validation_error = None;
        }
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    pub fn select_department(&mut self, department: Department) {
        self.department = Some(department);
        self.apply(Transition::DepartmentChanged);
    }

    pub fn select_semester(&mut self, semester: Semester) {
        self.semester = Some(semester);
        self.apply(Transition::SemesterChanged);
    }

    /// Record a grade label for a subject. The label is not validated here.
    pub fn set_grade(&mut self, subject_name: impl Into<String>, label: impl Into<String>) {
        self.grades.insert(subject_name.into(), label.into());
        self.apply(Transition::GradeSet);
    }

    /// Resolve `code` in the department registry and append it as an arrear.
    ///
    /// On failure the arrear list is untouched and the error is kept as the
    /// session's validation error until the next successful add or edit.
    pub fn add_arrear_subject(&mut self, code: &str) -> Result<SubjectDescriptor, ArrearError> {
        match self.resolve_arrear(code) {
            Ok(subject) => {
                self.arrears.push(subject.clone());
                self.validation_error = None;
                self.apply(Transition::ArrearAdded);
                Ok(subject)
            }
            Err(err) => {
                self.validation_error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn resolve_arrear(&self, code: &str) -> Result<SubjectDescriptor, ArrearError> {
        let department = self.department.ok_or(ArrearError::NoDepartment)?;
        let subject = self
            .catalog
            .lookup_subject(department, code)
            .ok_or_else(|| ArrearError::UnknownCode(SubjectCode::new(code)))?;

        if self.policy == ArrearPolicy::RejectDuplicates
            && self.arrears.iter().any(|a| a.code == subject.code)
        {
            return Err(ArrearError::Duplicate(subject.code.clone()));
        }
        Ok(subject.clone())
    }

    // -------------------------------------------------------------------------
    // Arrear form
    // -------------------------------------------------------------------------

    pub fn open_arrear_form(&mut self) {
        if self.arrear_form == ArrearForm::Hidden {
            self.arrear_form = ArrearForm::Editing;
        }
    }

    /// The user is typing again: drop any shown error.
    pub fn edit_arrear_code(&mut self) {
        if self.arrear_form.is_open() {
            self.arrear_form = ArrearForm::Editing;
        }
        self.validation_error = None;
    }

    /// Submit the form. Closes it on success, keeps it open on error.
    pub fn submit_arrear_form(&mut self, code: &str) -> Result<SubjectDescriptor, ArrearError> {
        let outcome = self.add_arrear_subject(code);
        self.arrear_form = if outcome.is_ok() {
            ArrearForm::Hidden
        } else {
            ArrearForm::SubmittedError
        };
        outcome
    }

    /// Close the form without touching the arrear list.
    pub fn cancel_arrear_form(&mut self) {
        self.arrear_form = ArrearForm::Hidden;
        self.validation_error = None;
    }

    // -------------------------------------------------------------------------
    // Calculation
    // -------------------------------------------------------------------------

    /// Every subject in the combined list has a grade picked.
    #[must_use]
    pub fn ready_to_calculate(&self) -> bool {
        let combined = self.combined_subjects();
        !combined.is_empty() && combined.iter().all(|s| self.has_grade(s))
    }

    /// Subjects still waiting for a grade, in display order.
    #[must_use]
    pub fn ungraded_subjects(&self) -> Vec<SubjectDescriptor> {
        self.combined_subjects()
            .into_iter()
            .filter(|s| !self.has_grade(s))
            .collect()
    }

    fn has_grade(&self, subject: &SubjectDescriptor) -> bool {
        self.grades
            .get(&subject.name)
            .is_some_and(|label| !label.is_empty())
    }

    /// Run the aggregation and cache the result.
    ///
    /// Refused while [`Self::ready_to_calculate`] is false.
    pub fn calculate(&mut self) -> Result<AggregationResult, SessionError> {
        if !self.ready_to_calculate() {
            let ungraded = self
                .ungraded_subjects()
                .into_iter()
                .map(|s| s.name)
                .collect();
            return Err(SessionError::IncompleteSelection { ungraded });
        }
        let result = self.engine.aggregate(&self.combined_subjects(), &self.grades);
        self.result = Some(result.clone());
        Ok(result)
    }

    /// Aggregate without the readiness gate or caching.
    #[must_use]
    pub fn preview(&self) -> AggregationResult {
        self.engine.aggregate(&self.combined_subjects(), &self.grades)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn department(&self) -> Option<Department> {
        self.department
    }

    #[must_use]
    pub fn semester(&self) -> Option<Semester> {
        self.semester
    }

    #[must_use]
    pub fn policy(&self) -> ArrearPolicy {
        self.policy
    }

    #[must_use]
    pub fn catalog(&self) -> &CurriculumCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn engine(&self) -> &AggregationEngine {
        &self.engine
    }

    /// Subjects of the selected semester.
    #[must_use]
    pub fn regular_subjects(&self) -> Vec<SubjectDescriptor> {
        self.catalog.subjects_for(self.department, self.semester)
    }

    #[must_use]
    pub fn arrear_subjects(&self) -> &[SubjectDescriptor] {
        &self.arrears
    }

    /// Regular subjects followed by arrears in insertion order.
    #[must_use]
    pub fn combined_subjects(&self) -> Vec<SubjectDescriptor> {
        let mut combined = self.regular_subjects();
        combined.extend(self.arrears.iter().cloned());
        combined
    }

    #[must_use]
    pub fn grades(&self) -> &GradeSheet {
        &self.grades
    }

    #[must_use]
    pub fn grade_for(&self, subject_name: &str) -> Option<&str> {
        self.grades.get(subject_name).map(String::as_str)
    }

    /// Last calculated result, if still valid.
    #[must_use]
    pub fn result(&self) -> Option<&AggregationResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn arrear_form(&self) -> ArrearForm {
        self.arrear_form
    }

    #[must_use]
    pub fn validation_error(&self) -> Option<&ArrearError> {
        self.validation_error.as_ref()
    }
}

// =============================================================================
// TESTS
// =============================================================================

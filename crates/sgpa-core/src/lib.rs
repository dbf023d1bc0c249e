//! # SGPA Core
//!
//! The deterministic grading engine behind the SGPA calculator.
//!
//! Components, leaves first:
//! - [`GradeTable`]: letter grade -> grade points
//! - [`CurriculumCatalog`]: (department, semester) -> subjects, and the
//!   per-department subject registry used to resolve arrear codes
//! - [`AggregationEngine`]: credit-weighted average over graded subjects
//! - [`SelectionState`]: one user's session (department, semester, grades,
//!   arrears) with explicit reset rules
//!
//! Everything here is pure. There is no I/O, no logging and no floating
//! point: averages are carried as hundredths of a grade point.

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod grade;
pub mod session;

pub use aggregate::{AggregationEngine, AggregationResult, GradePointAverage, GradeSheet};
pub use catalog::{
    CatalogSource, CurriculumCatalog, DepartmentSource, SubjectDescriptor, SubjectSource,
};
pub use error::{ArrearError, CatalogError, ParseError, SessionError};
pub use grade::{GradePoints, GradeSymbol, GradeTable, PointLookup};
pub use session::{ArrearForm, ArrearPolicy, ResetScope, SelectionState, Transition};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// DEPARTMENT
// =============================================================================

/// An engineering department offering a curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Department {
    Civil,
    Mech,
    Eee,
    Ece,
    Cse,
}

impl Department {
    /// All departments in display order.
    pub const ALL: [Department; 5] = [
        Department::Civil,
        Department::Mech,
        Department::Eee,
        Department::Ece,
        Department::Cse,
    ];

    /// The canonical upper-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Department::Civil => "CIVIL",
            Department::Mech => "MECH",
            Department::Eee => "EEE",
            Department::Ece => "ECE",
            Department::Cse => "CSE",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownDepartment(wanted.to_string()))
    }
}

// =============================================================================
// SEMESTER
// =============================================================================

/// A semester number in `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Semester(u8);

impl Semester {
    /// First semester offered.
    pub const FIRST: u8 = 1;
    /// Last semester offered.
    pub const LAST: u8 = 7;

    /// Create a semester, rejecting numbers outside `1..=7`.
    pub fn new(number: u8) -> Result<Self, ParseError> {
        if (Self::FIRST..=Self::LAST).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ParseError::SemesterOutOfRange(number.to_string()))
        }
    }

    /// The semester number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Every valid semester in ascending order.
    pub fn all() -> impl Iterator<Item = Semester> {
        (Self::FIRST..=Self::LAST).map(Semester)
    }
}

impl TryFrom<u8> for Semester {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Semester> for u8 {
    fn from(value: Semester) -> Self {
        value.0
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Semester {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| ParseError::SemesterOutOfRange(trimmed.to_string()))
            .and_then(Self::new)
    }
}

// =============================================================================
// SUBJECT CODE & CREDITS
// =============================================================================

/// A subject code such as `CS8391`, unique within a department.
///
/// Codes are normalized on construction: surrounding whitespace is
/// stripped and letters are upper-cased, so `" cs8391"` and `"CS8391"`
/// name the same subject.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SubjectCode(String);

impl SubjectCode {
    #[must_use]
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SubjectCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SubjectCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<SubjectCode> for String {
    fn from(value: SubjectCode) -> Self {
        value.0
    }
}

impl fmt::Display for SubjectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Credit weight of a subject.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Credits(pub u32);

impl Credits {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// TESTS
// =============================================================================

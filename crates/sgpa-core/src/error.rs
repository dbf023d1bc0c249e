//! # Error Types
//!
//! Every failure in the core is locally recoverable. None of these
//! errors is fatal. An unrecognized grade label is deliberately NOT an
//! error: aggregation skips it (see [`crate::PointLookup`]).

use crate::{Department, Semester, SubjectCode};
use thiserror::Error;

/// Failure to parse a user-supplied label into a core value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown department '{0}' (expected one of CIVIL, MECH, EEE, ECE, CSE)")]
    UnknownDepartment(String),

    #[error("invalid semester '{0}' (expected a number from 1 to 7)")]
    SemesterOutOfRange(String),

    #[error("unknown grade '{0}' (expected one of O, A+, A, B+, B, C, D, E, RA)")]
    UnknownGrade(String),
}

/// Problems found while building a catalog from a [`crate::CatalogSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{department} semester {semester} lists '{code}', which is not in the {department} subject registry")]
    DanglingCode {
        department: Department,
        semester: Semester,
        code: SubjectCode,
    },

    #[error("{department} semester {semester} lists '{code}' more than once")]
    DuplicateCode {
        department: Department,
        semester: Semester,
        code: SubjectCode,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Rejection of an arrear subject code.
///
/// The Display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrearError {
    #[error("Select a department before adding arrear subjects.")]
    NoDepartment,

    #[error("Invalid subject code for the selected department.")]
    UnknownCode(SubjectCode),

    #[error("Subject {0} is already in the arrear list.")]
    Duplicate(SubjectCode),
}

/// Session-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Calculate was requested before every subject had a grade.
    #[error("cannot calculate: {} subject(s) still need a grade", ungraded.len())]
    IncompleteSelection { ungraded: Vec<String> },
}

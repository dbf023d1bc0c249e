//! # Curriculum Catalog
//!
//! Static curriculum data:
//! - (department, semester) -> ordered subject list
//! - (department, code) -> subject, the registry used to resolve arrears
//!
//! The registry of a department spans every semester, so an arrear from
//! an earlier semester resolves even while a later semester is selected.
//!
//! Absence is never an error here. An unset department or semester, or
//! a combination with no entry, yields an empty subject list.

mod data;

use crate::error::CatalogError;
use crate::{Credits, Department, Semester, SubjectCode};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// SUBJECT DESCRIPTOR
// =============================================================================

/// One subject in a department's curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectDescriptor {
    /// Code, unique within the department.
    pub code: SubjectCode,
    /// Display name. Grades are keyed by this name.
    pub name: String,
    /// Credit weight used in the weighted average.
    pub credits: Credits,
}

impl SubjectDescriptor {
    #[must_use]
    pub fn new(code: impl Into<SubjectCode>, name: impl Into<String>, credits: u32) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits: Credits::new(credits),
        }
    }
}

// =============================================================================
// SERIALIZED FORM
// =============================================================================

/// A subject as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSource {
    pub name: String,
    pub credits: Credits,
}

/// One department as written in a catalog file.
///
/// `semesters` keys are semester numbers; values list subject codes in
/// display order, each of which must appear in `subjects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSource {
    pub subjects: BTreeMap<SubjectCode, SubjectSource>,
    pub semesters: BTreeMap<u8, Vec<SubjectCode>>,
}

/// Deserializable description of a whole catalog.
///
/// ```json
/// { "departments": { "CSE": {
///     "subjects":  { "CS8391": { "name": "Data Structures", "credits": 3 } },
///     "semesters": { "3": ["CS8391"] } } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSource {
    pub departments: BTreeMap<Department, DepartmentSource>,
}

// =============================================================================
// CATALOG
// =============================================================================

/// Immutable curriculum catalog.
///
/// Loaded once (either [`CurriculumCatalog::builtin`] or
/// [`CurriculumCatalog::from_source`]) and shared behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurriculumCatalog {
    /// department -> (code -> subject)
    registry: BTreeMap<Department, BTreeMap<SubjectCode, SubjectDescriptor>>,
    /// (department, semester) -> codes in display order
    semesters: BTreeMap<(Department, Semester), Vec<SubjectCode>>,
}

impl CurriculumCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled curriculum: every department, semesters 1 to 7.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for department in Department::ALL {
            let rows = data::FIRST_YEAR
                .iter()
                .chain(data::department_rows(department));
            for (number, subjects) in rows {
                let Ok(semester) = Semester::new(*number) else {
                    continue;
                };
                for (code, name, credits) in *subjects {
                    let subject = SubjectDescriptor::new(*code, *name, *credits);
                    catalog.insert(department, semester, subject);
                }
            }
        }
        catalog
    }

    /// Build a catalog from its serialized description.
    ///
    /// Fails if a semester lists a code missing from the department's
    /// `subjects`, lists a code twice, or uses a semester outside 1 to 7.
    pub fn from_source(source: CatalogSource) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();

        for (department, dept) in source.departments {
            let registry = catalog.registry.entry(department).or_default();
            for (code, subject) in dept.subjects {
                let descriptor = SubjectDescriptor {
                    code: code.clone(),
                    name: subject.name,
                    credits: subject.credits,
                };
                registry.insert(code, descriptor);
            }

            for (number, codes) in dept.semesters {
                let semester = Semester::new(number)?;
                let mut seen = BTreeSet::new();
                for code in &codes {
                    if !registry.contains_key(code) {
                        return Err(CatalogError::DanglingCode {
                            department,
                            semester,
                            code: code.clone(),
                        });
                    }
                    if !seen.insert(code) {
                        return Err(CatalogError::DuplicateCode {
                            department,
                            semester,
                            code: code.clone(),
                        });
                    }
                }
                catalog.semesters.insert((department, semester), codes);
            }
        }

        Ok(catalog)
    }

    /// Serialized description of this catalog (inverse of `from_source`).
    #[must_use]
    pub fn to_source(&self) -> CatalogSource {
        let mut source = CatalogSource::default();
        for (department, subjects) in &self.registry {
            let dept = source.departments.entry(*department).or_default();
            for (code, subject) in subjects {
                dept.subjects.insert(
                    code.clone(),
                    SubjectSource {
                        name: subject.name.clone(),
                        credits: subject.credits,
                    },
                );
            }
        }
        for ((department, semester), codes) in &self.semesters {
            source
                .departments
                .entry(*department)
                .or_default()
                .semesters
                .insert(semester.number(), codes.clone());
        }
        source
    }

    /// Register a subject and append it to a semester's list.
    ///
    /// A code already listed for that semester is not appended twice.
    pub fn insert(&mut self, department: Department, semester: Semester, subject: SubjectDescriptor) {
        let code = subject.code.clone();
        self.registry
            .entry(department)
            .or_default()
            .insert(code.clone(), subject);
        let codes = self.semesters.entry((department, semester)).or_default();
        if !codes.contains(&code) {
            codes.push(code);
        }
    }

    /// Subjects of a semester in display order.
    ///
    /// Empty if either selector is unset or the pair is not in the catalog.
    #[must_use]
    pub fn subjects_for(
        &self,
        department: Option<Department>,
        semester: Option<Semester>,
    ) -> Vec<SubjectDescriptor> {
        let (Some(department), Some(semester)) = (department, semester) else {
            return Vec::new();
        };
        let Some(codes) = self.semesters.get(&(department, semester)) else {
            return Vec::new();
        };
        let Some(registry) = self.registry.get(&department) else {
            return Vec::new();
        };
        codes
            .iter()
            .filter_map(|code| registry.get(code).cloned())
            .collect()
    }

    /// Resolve a code against a department's full registry.
    ///
    /// The code is normalized first (trimmed, upper-cased).
    #[must_use]
    pub fn lookup_subject(&self, department: Department, code: &str) -> Option<&SubjectDescriptor> {
        let code = SubjectCode::new(code);
        self.registry.get(&department)?.get(&code)
    }

    /// Departments present in the catalog.
    pub fn departments(&self) -> impl Iterator<Item = Department> + '_ {
        self.registry.keys().copied()
    }

    /// Semesters with an entry for the department, ascending.
    #[must_use]
    pub fn semesters(&self, department: Department) -> Vec<Semester> {
        self.semesters
            .keys()
            .filter(|(d, _)| *d == department)
            .map(|(_, s)| *s)
            .collect()
    }

    /// Every subject registered for the department, ordered by code.
    pub fn registry(&self, department: Department) -> impl Iterator<Item = &SubjectDescriptor> {
        self.registry
            .get(&department)
            .into_iter()
            .flat_map(|subjects| subjects.values())
    }

    /// Total number of registered subjects across departments.
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.registry.values().map(BTreeMap::len).sum()
    }
}

// =============================================================================
// TESTS
// =============================================================================

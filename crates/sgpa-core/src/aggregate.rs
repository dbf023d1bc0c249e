//! # Aggregation Engine
//!
//! Credit-weighted grade-point average.
//!
//! For every subject whose grade resolves to points:
//!
//! ```text
//! weighted_sum  += points * credits
//! total_credits += credits
//! ```
//!
//! The average is `weighted_sum / total_credits` rounded half-up to two
//! decimals, or `0.00` when nothing was graded. Subjects without a
//! grade, or with an unrecognized one, are left out of BOTH sums.
//!
//! All arithmetic is integer: the average is held in hundredths.

use crate::catalog::SubjectDescriptor;
use crate::grade::{GradeTable, PointLookup};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Raw grade labels keyed by subject display name.
pub type GradeSheet = BTreeMap<String, String>;

// =============================================================================
// FIXED-POINT AVERAGE
// =============================================================================

/// A grade-point average stored as hundredths (`857` is `8.57`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GradePointAverage(u32);

impl GradePointAverage {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    #[must_use]
    pub const fn hundredths(self) -> u32 {
        self.0
    }

    /// `weighted_sum / total_credits`, rounded half-up to hundredths.
    ///
    /// Returns zero when `total_credits` is zero.
    #[must_use]
    pub fn from_ratio(weighted_sum: u64, total_credits: u64) -> Self {
        if total_credits == 0 {
            return Self::ZERO;
        }
        let numerator = weighted_sum
            .saturating_mul(200)
            .saturating_add(total_credits);
        let denominator = total_credits.saturating_mul(2);
        let hundredths = numerator / denominator;
        Self(u32::try_from(hundredths).unwrap_or(u32::MAX))
    }

    /// The gauge percentage (average x 10), in tenths of a percent.
    ///
    /// `8.57` becomes `857` tenths, i.e. `85.7%`.
    #[must_use]
    pub const fn percent_tenths(self) -> u32 {
        self.0
    }

    /// The gauge percentage formatted with one decimal, e.g. `85.7`.
    #[must_use]
    pub fn percent_text(self) -> String {
        format!("{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl fmt::Display for GradePointAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for GradePointAverage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// Outcome of one aggregation pass. Always derived fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationResult {
    /// Credit-weighted average, two decimals.
    pub average: GradePointAverage,
    /// Every subject in the list carries a recognized grade.
    pub is_complete: bool,
    /// Sum of `points * credits` over graded subjects.
    pub weighted_sum: u64,
    /// Sum of credits over graded subjects.
    pub total_credits: u64,
    /// Subjects that contributed.
    pub graded_subjects: usize,
    /// Subjects considered.
    pub total_subjects: usize,
}

impl AggregationResult {
    /// Result for an empty or fully ungraded list.
    #[must_use]
    pub fn empty(total_subjects: usize) -> Self {
        Self {
            average: GradePointAverage::ZERO,
            is_complete: false,
            weighted_sum: 0,
            total_credits: 0,
            graded_subjects: 0,
            total_subjects,
        }
    }

    /// Display percentage for the gauge, e.g. `"85.7"`.
    #[must_use]
    pub fn display_percent(&self) -> String {
        self.average.percent_text()
    }
}

// =============================================================================
// ENGINE
// =============================================================================

/// Stateless aggregation over a shared grade table.
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    grades: Arc<GradeTable>,
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new(Arc::new(GradeTable::standard()))
    }
}

impl AggregationEngine {
    #[must_use]
    pub fn new(grades: Arc<GradeTable>) -> Self {
        Self { grades }
    }

    #[must_use]
    pub fn grade_table(&self) -> &GradeTable {
        &self.grades
    }

    /// Points for a subject under the given sheet.
    #[must_use]
    pub fn lookup(&self, subject: &SubjectDescriptor, sheet: &GradeSheet) -> PointLookup {
        sheet
            .get(&subject.name)
            .map_or(PointLookup::NotApplicable, |label| self.grades.points_for(label))
    }

    /// Aggregate `subjects` (regular first, then arrears) against `sheet`.
    ///
    /// Pure: identical inputs give identical results.
    #[must_use]
    pub fn aggregate(&self, subjects: &[SubjectDescriptor], sheet: &GradeSheet) -> AggregationResult {
        let mut result = AggregationResult::empty(subjects.len());

        for subject in subjects {
            let PointLookup::Found(points) = self.lookup(subject, sheet) else {
                continue;
            };
            let credits = u64::from(subject.credits.value());
            result.weighted_sum = result
                .weighted_sum
                .saturating_add(u64::from(points.value()).saturating_mul(credits));
            result.total_credits = result.total_credits.saturating_add(credits);
            result.graded_subjects += 1;
        }

        result.average = GradePointAverage::from_ratio(result.weighted_sum, result.total_credits);
        result.is_complete = !subjects.is_empty() && result.graded_subjects == subjects.len();
        result
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Grade Table
//!
//! Maps letter grades to grade points.
//!
//! Lookups never fail. A label outside the closed symbol set yields
//! [`PointLookup::NotApplicable`], which the aggregation engine excludes
//! from both the weighted sum and the credit total.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// GRADE SYMBOL
// =============================================================================

/// A letter grade from the closed set {O, A+, A, B+, B, C, D, E, RA}.
///
/// `RA` ("re-appear") marks a failed subject and carries zero points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GradeSymbol {
    #[serde(rename = "O")]
    O,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "RA")]
    Ra,
}

impl GradeSymbol {
    /// All symbols, best first.
    pub const ALL: [GradeSymbol; 9] = [
        GradeSymbol::O,
        GradeSymbol::APlus,
        GradeSymbol::A,
        GradeSymbol::BPlus,
        GradeSymbol::B,
        GradeSymbol::C,
        GradeSymbol::D,
        GradeSymbol::E,
        GradeSymbol::Ra,
    ];

    /// The canonical label as printed on a grade sheet.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GradeSymbol::O => "O",
            GradeSymbol::APlus => "A+",
            GradeSymbol::A => "A",
            GradeSymbol::BPlus => "B+",
            GradeSymbol::B => "B",
            GradeSymbol::C => "C",
            GradeSymbol::D => "D",
            GradeSymbol::E => "E",
            GradeSymbol::Ra => "RA",
        }
    }

    /// Parse a label leniently. Returns `None` for anything unrecognized.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        GradeSymbol::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(wanted))
    }

    const fn standard_points(self) -> u8 {
        match self {
            GradeSymbol::O => 10,
            GradeSymbol::APlus => 9,
            GradeSymbol::A => 8,
            GradeSymbol::BPlus => 7,
            GradeSymbol::B => 6,
            GradeSymbol::C => 5,
            GradeSymbol::D => 4,
            GradeSymbol::E => 3,
            GradeSymbol::Ra => 0,
        }
    }
}

impl fmt::Display for GradeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GradeSymbol {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseError::UnknownGrade(s.trim().to_string()))
    }
}

// =============================================================================
// GRADE POINTS & LOOKUP
// =============================================================================

/// Grade points awarded for a symbol, `0..=10`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GradePoints(pub u8);

impl GradePoints {
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Result of looking up a grade label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLookup {
    /// The label is a recognized symbol worth these points.
    Found(GradePoints),
    /// The label is absent or unrecognized; exclude the subject.
    NotApplicable,
}

impl PointLookup {
    #[must_use]
    pub fn points(self) -> Option<GradePoints> {
        match self {
            PointLookup::Found(points) => Some(points),
            PointLookup::NotApplicable => None,
        }
    }

    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, PointLookup::Found(_))
    }
}

// =============================================================================
// GRADE TABLE
// =============================================================================

/// Immutable symbol -> points table.
///
/// Built once at startup and shared by reference (usually behind an
/// `Arc`) with the aggregation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeTable {
    points: BTreeMap<GradeSymbol, GradePoints>,
}

impl Default for GradeTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl GradeTable {
    /// The standard ten-point table (O=10 down to E=3, RA=0).
    #[must_use]
    pub fn standard() -> Self {
        let points = GradeSymbol::ALL
            .into_iter()
            .map(|s| (s, GradePoints(s.standard_points())))
            .collect();
        Self { points }
    }

    /// Points for a raw label as entered by the user.
    #[must_use]
    pub fn points_for(&self, label: &str) -> PointLookup {
        GradeSymbol::from_label(label)
            .and_then(|symbol| self.points.get(&symbol).copied())
            .map_or(PointLookup::NotApplicable, PointLookup::Found)
    }

    /// Points for a parsed symbol.
    #[must_use]
    pub fn points_of(&self, symbol: GradeSymbol) -> PointLookup {
        self.points
            .get(&symbol)
            .copied()
            .map_or(PointLookup::NotApplicable, PointLookup::Found)
    }

    /// Symbols with their points, best first. Used to populate grade pickers.
    pub fn symbols(&self) -> impl Iterator<Item = (GradeSymbol, GradePoints)> + '_ {
        self.points.iter().map(|(s, p)| (*s, *p))
    }

    /// Number of symbols in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_points() {
        let table = GradeTable::standard();
        let expected = [
            ("O", 10),
            ("A+", 9),
            ("A", 8),
            ("B+", 7),
            ("B", 6),
            ("C", 5),
            ("D", 4),
            ("E", 3),
            ("RA", 0),
        ];
        for (label, points) in expected {
            assert_eq!(
                table.points_for(label),
                PointLookup::Found(GradePoints(points)),
                "label {label}"
            );
        }
        assert_eq!(table.len(), 9);
    }

    #[test]
    fn unknown_label_is_not_applicable() {
        let table = GradeTable::standard();
        assert_eq!(table.points_for("F"), PointLookup::NotApplicable);
        assert_eq!(table.points_for(""), PointLookup::NotApplicable);
        assert_eq!(table.points_for("A++"), PointLookup::NotApplicable);
        assert_eq!(table.points_for("10"), PointLookup::NotApplicable);
    }

    #[test]
    fn labels_match_case_insensitively() {
        let table = GradeTable::standard();
        assert_eq!(table.points_for("ra"), PointLookup::Found(GradePoints(0)));
        assert_eq!(table.points_for(" b+ "), PointLookup::Found(GradePoints(7)));
    }

    #[test]
    fn symbols_are_best_first() {
        let table = GradeTable::standard();
        let labels: Vec<_> = table.symbols().map(|(s, _)| s.label()).collect();
        assert_eq!(labels, vec!["O", "A+", "A", "B+", "B", "C", "D", "E", "RA"]);

        let points: Vec<_> = table.symbols().map(|(_, p)| p.value()).collect();
        assert!(points.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn strict_parse_reports_unknown_grade() {
        assert_eq!("a+".parse::<GradeSymbol>(), Ok(GradeSymbol::APlus));
        assert_eq!(
            "Z".parse::<GradeSymbol>(),
            Err(ParseError::UnknownGrade("Z".to_string()))
        );
    }

    #[test]
    fn lookup_helpers() {
        let found = PointLookup::Found(GradePoints(8));
        assert!(found.is_found());
        assert_eq!(found.points(), Some(GradePoints(8)));
        assert!(!PointLookup::NotApplicable.is_found());
        assert_eq!(PointLookup::NotApplicable.points(), None);
    }
}

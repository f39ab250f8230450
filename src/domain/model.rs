use crate::utils::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A trimmed, non-empty participant name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
    /// Trims the raw line; returns `None` when nothing remains.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The ordered list of unique names a run operates on. Immutable after
/// construction; generators work on their own copies.
#[derive(Debug, Clone)]
pub struct NameRoster {
    names: Vec<Name>,
}

impl NameRoster {
    /// Builds a roster from already-parsed names, enforcing the roster
    /// invariants (at least 2 entries, no exact duplicates).
    pub fn new(names: Vec<Name>) -> Result<Self> {
        if names.len() < 2 {
            return Err(MatchError::InvalidInputError {
                message: format!(
                    "The input must contain at least 2 names, found {}",
                    names.len()
                ),
            });
        }

        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MatchError::InvalidInputError {
                    message: format!("Duplicate name detected: {}", name),
                });
            }
        }

        Ok(Self { names })
    }

    /// Parses newline-delimited text: each line is trimmed, blank lines are
    /// skipped, duplicates are rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let names = text.lines().filter_map(Name::new).collect();
        Self::new(names)
    }

    pub fn names(&self) -> &[Name] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// An unordered two-element pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair(pub Name, pub Name);

/// A perfect matching over an even-length roster.
#[derive(Debug, Clone)]
pub struct Pairing {
    pub pairs: Vec<Pair>,
}

/// A fixed-point-free bijection from the roster onto itself, in roster order.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub entries: Vec<(Name, Name)>,
}

/// Result of the transform stage, consumed by the load stage.
#[derive(Debug, Clone)]
pub enum MatchOutcome {
    Pairs(Pairing),
    Assignments(Assignment),
}

impl MatchOutcome {
    pub fn len(&self) -> usize {
        match self {
            MatchOutcome::Pairs(p) => p.pairs.len(),
            MatchOutcome::Assignments(a) => a.entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            MatchOutcome::Pairs(_) => "pairs",
            MatchOutcome::Assignments(_) => "assignments",
        }
    }

    /// Display lines in generation order, one per pair or assignment.
    pub fn lines(&self) -> Vec<String> {
        match self {
            MatchOutcome::Pairs(pairing) => pairing
                .pairs
                .iter()
                .map(|Pair(a, b)| format!("Selected match: {} ↔ {}", a, b))
                .collect(),
            MatchOutcome::Assignments(assignment) => assignment
                .entries
                .iter()
                .map(|(from, to)| format!("Match: {} → {}", from, to))
                .collect(),
        }
    }
}

/// Which generator actually runs, after mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Pairs,
    Assignments,
}

/// Requested matching mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Pair when the roster is even, assign when it is odd.
    #[default]
    Auto,
    /// Perfect matching; requires an even roster.
    Pairs,
    /// Derangement; works for any roster length.
    Assignments,
}

impl Mode {
    /// One-shot mode selection policy.
    pub fn select(&self, roster_len: usize) -> Result<MatchKind> {
        match self {
            Mode::Auto => {
                if roster_len % 2 == 0 {
                    Ok(MatchKind::Pairs)
                } else {
                    Ok(MatchKind::Assignments)
                }
            }
            Mode::Pairs => {
                if roster_len % 2 != 0 {
                    Err(MatchError::InvalidInputError {
                        message: format!(
                            "Pairs mode requires an even number of names, got {}",
                            roster_len
                        ),
                    })
                } else {
                    Ok(MatchKind::Pairs)
                }
            }
            Mode::Assignments => Ok(MatchKind::Assignments),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mode::Auto => "auto",
            Mode::Pairs => "pairs",
            Mode::Assignments => "assignments",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_trims_and_rejects_blank() {
        assert_eq!(Name::new("  Alice  ").unwrap().as_str(), "Alice");
        assert!(Name::new("   ").is_none());
        assert!(Name::new("").is_none());
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let roster = NameRoster::parse("Alice\n\n  Bob  \n\t\nCarol\n").unwrap();
        let names: Vec<&str> = roster.names().iter().map(Name::as_str).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_parse_rejects_too_few_names() {
        let err = NameRoster::parse("Alice\n\n").unwrap_err();
        assert!(matches!(err, MatchError::InvalidInputError { .. }));
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let err = NameRoster::parse("Alice\nBob\nAlice\n").unwrap_err();
        assert!(matches!(err, MatchError::InvalidInputError { .. }));
    }

    #[test]
    fn test_duplicate_detection_is_case_sensitive() {
        // "alice" and "Alice" are distinct names.
        assert!(NameRoster::parse("alice\nAlice\n").is_ok());
    }

    #[test]
    fn test_parse_is_idempotent_on_malformed_input() {
        let first = NameRoster::parse("Alice\nBob\nAlice").unwrap_err();
        let second = NameRoster::parse("Alice\nBob\nAlice").unwrap_err();
        assert!(matches!(first, MatchError::InvalidInputError { .. }));
        assert!(matches!(second, MatchError::InvalidInputError { .. }));
    }

    #[test]
    fn test_mode_selection_policy() {
        assert_eq!(Mode::Auto.select(4).unwrap(), MatchKind::Pairs);
        assert_eq!(Mode::Auto.select(5).unwrap(), MatchKind::Assignments);
        assert_eq!(Mode::Pairs.select(4).unwrap(), MatchKind::Pairs);
        assert!(Mode::Pairs.select(5).is_err());
        assert_eq!(Mode::Assignments.select(4).unwrap(), MatchKind::Assignments);
        assert_eq!(Mode::Assignments.select(5).unwrap(), MatchKind::Assignments);
    }

    #[test]
    fn test_outcome_line_formats() {
        let a = Name::new("A").unwrap();
        let b = Name::new("B").unwrap();

        let pairing = MatchOutcome::Pairs(Pairing {
            pairs: vec![Pair(a.clone(), b.clone())],
        });
        assert_eq!(pairing.lines(), vec!["Selected match: A ↔ B"]);

        let assignment = MatchOutcome::Assignments(Assignment {
            entries: vec![(a.clone(), b.clone()), (b, a)],
        });
        assert_eq!(assignment.lines(), vec!["Match: A → B", "Match: B → A"]);
    }
}

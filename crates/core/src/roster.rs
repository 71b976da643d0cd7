//! Roster import: header normalization and per-row classification.
//!
//! Uploaded rosters come from spreadsheets whose header casing is not
//! consistent, so each raw JSON row is first mapped through a small alias
//! table onto canonical `usn` / `name` fields. The reconciler in the `db`
//! crate then asks [`plan_row`] what to do with each normalized row.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Accepted header spellings for the roll-number column, in priority order.
pub const USN_ALIASES: &[&str] = &["usn", "USN", "Usn"];

/// Accepted header spellings for the student-name column, in priority order.
pub const NAME_ALIASES: &[&str] = &["name", "Name", "NAME"];

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// A roster row after header normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub usn: String,
    pub name: String,
}

impl RosterEntry {
    /// Normalize one raw row.
    ///
    /// Returns `None` when the row is not an object, or when either the roll
    /// number or the name is absent or blank under every alias.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        let obj = raw.as_object()?;
        let usn = first_alias(obj, USN_ALIASES)?;
        let name = first_alias(obj, NAME_ALIASES)?;
        Some(Self { usn, name })
    }
}

/// Return the first alias whose value is a usable cell.
///
/// Strings are trimmed and blanks are ignored; numbers are rendered as text
/// because spreadsheet exports often turn numeric roll numbers into numbers.
fn first_alias(obj: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|key| obj.get(*key))
        .find_map(cell_text)
}

fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// What the reconciler must do for a normalized row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// No student with this roll exists in the class: insert one.
    Insert,
    /// The student exists under a different name: overwrite the name.
    Rename,
    /// The student exists with the same name: nothing to write.
    Unchanged,
}

impl RowAction {
    /// The outcome this action is counted as.
    pub fn outcome(self) -> RowOutcome {
        match self {
            Self::Insert => RowOutcome::Added,
            Self::Rename => RowOutcome::Updated,
            Self::Unchanged => RowOutcome::Skipped,
        }
    }
}

/// Decide the action for a row given the currently stored name, if any.
pub fn plan_row(stored_name: Option<&str>, incoming_name: &str) -> RowAction {
    match stored_name {
        None => RowAction::Insert,
        Some(stored) if stored != incoming_name => RowAction::Rename,
        Some(_) => RowAction::Unchanged,
    }
}

/// How a single input row was counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOutcome {
    Added,
    Updated,
    Skipped,
}

impl RowOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Updated => "updated",
            Self::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Counters returned by a roster import.
///
/// Every input row lands in exactly one counter, so [`ImportSummary::total`]
/// always equals the number of rows submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub added: u32,
    pub updated: u32,
    pub skipped: u32,
}

impl ImportSummary {
    pub fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Added => self.added += 1,
            RowOutcome::Updated => self.updated += 1,
            RowOutcome::Skipped => self.skipped += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.added + self.updated + self.skipped
    }
}

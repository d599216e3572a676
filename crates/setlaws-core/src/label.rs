//! Caller supplied set names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, SetLawError};
use crate::set::FiniteSet;

/// Maximum number of characters accepted in a label.
pub const MAX_LABEL_CHARS: usize = 64;

/// Validated, free-form name of a set such as `A` or `Primes`.
///
/// Labels may contain any printable or control character; renderers are
/// responsible for escaping them before embedding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SetLabel(String);

impl SetLabel {
    /// Trims and validates a label.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, SetLawError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SetLawError::InvalidInput(
                ErrorInfo::new("invalid-label", "set labels must not be empty")
                    .with_hint("name sets with short identifiers such as `A`"),
            ));
        }
        let chars = trimmed.chars().count();
        if chars > MAX_LABEL_CHARS {
            return Err(SetLawError::InvalidInput(
                ErrorInfo::new("invalid-label", "set label is too long")
                    .with_context("chars", chars.to_string())
                    .with_context("limit", MAX_LABEL_CHARS.to_string()),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SetLabel {
    type Error = SetLawError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SetLabel::new(value)
    }
}

impl From<SetLabel> for String {
    fn from(label: SetLabel) -> Self {
        label.0
    }
}

impl fmt::Display for SetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A finite set paired with the label it is displayed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSet {
    /// Display name.
    pub label: SetLabel,
    /// Members.
    pub set: FiniteSet,
}

impl NamedSet {
    /// Pairs a label with a set.
    pub fn new(label: SetLabel, set: FiniteSet) -> Self {
        Self { label, set }
    }

    /// Validates `label` and pairs it with `set`.
    pub fn labelled(label: impl AsRef<str>, set: FiniteSet) -> Result<Self, SetLawError> {
        Ok(Self::new(SetLabel::new(label)?, set))
    }
}

/// Rejects any label that occurs more than once in `labels`.
pub fn ensure_distinct_labels<'a, I>(labels: I) -> Result<(), SetLawError>
where
    I: IntoIterator<Item = &'a SetLabel>,
{
    let mut seen: Vec<&SetLabel> = Vec::new();
    for label in labels {
        if seen.contains(&label) {
            return Err(SetLawError::InvalidInput(
                ErrorInfo::new("duplicate-label", "each set must carry a distinct label")
                    .with_context("label", label.as_str()),
            ));
        }
        seen.push(label);
    }
    Ok(())
}

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use setlaws_core::{ErrorInfo, FiniteSet, NamedSet, SetLabel, SetLawError};

use crate::policies::Policy;
use crate::system::SetSystem;

fn config_error(code: &str, message: impl ToString) -> SetLawError {
    SetLawError::Config(ErrorInfo::new(code, message.to_string()))
}

/// Inclusive integer range `start..=end`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeSpec {
    /// First element.
    pub start: i64,
    /// Last element, inclusive.
    pub end: i64,
}

/// Unvalidated description of one labelled set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetSpec {
    /// Display label.
    pub label: String,
    /// Optional integer range merged with `elements`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeSpec>,
    /// Explicit members, checked for comparability on conversion.
    #[serde(default)]
    pub elements: Vec<Value>,
}

impl SetSpec {
    /// Converts the description into a validated [`NamedSet`].
    pub fn to_named(&self) -> Result<NamedSet, SetLawError> {
        let label = SetLabel::new(&self.label)?;
        let listed = FiniteSet::from_values(&self.elements).map_err(|err| with_label(err, &label))?;
        let set = match self.range {
            Some(range) => FiniteSet::range_inclusive(range.start, range.end)
                .map_err(|err| with_label(err, &label))?
                .union(&listed),
            None => listed,
        };
        Ok(NamedSet::new(label, set))
    }
}

fn with_label(err: SetLawError, label: &SetLabel) -> SetLawError {
    match err {
        SetLawError::InvalidInput(info) => {
            SetLawError::InvalidInput(info.with_context("label", label.as_str()))
        }
        other => other,
    }
}

const UNIVERSE_LABEL: &str = "U";

fn universe_label() -> String {
    UNIVERSE_LABEL.to_string()
}

fn default_universe() -> SetSpec {
    SetSpec {
        label: universe_label(),
        range: None,
        elements: Vec::new(),
    }
}

// Subset labels stay mandatory; only the universe block may omit one.
#[derive(Deserialize)]
struct UniverseSpec {
    #[serde(default = "universe_label")]
    label: String,
    #[serde(default)]
    range: Option<RangeSpec>,
    #[serde(default)]
    elements: Vec<Value>,
}

fn deserialize_universe<'de, D>(deserializer: D) -> Result<SetSpec, D::Error>
where
    D: Deserializer<'de>,
{
    let spec = UniverseSpec::deserialize(deserializer)?;
    Ok(SetSpec {
        label: spec.label,
        range: spec.range,
        elements: spec.elements,
    })
}

/// YAML/JSON description of a verification run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemConfig {
    /// Universal set; labelled `U` when the block or its label is omitted.
    #[serde(default = "default_universe", deserialize_with = "deserialize_universe")]
    pub universe: SetSpec,
    /// Two or three subsets.
    pub sets: Vec<SetSpec>,
    /// Verification policy.
    #[serde(default)]
    pub policy: Policy,
}

impl SystemConfig {
    /// Validates the description into a [`SetSystem`].
    pub fn to_system(&self) -> Result<SetSystem, SetLawError> {
        let universe = self.universe.to_named()?;
        let subsets = self
            .sets
            .iter()
            .map(SetSpec::to_named)
            .collect::<Result<Vec<_>, _>>()?;
        SetSystem::new(universe, subsets)
    }

    /// Parses a configuration from YAML (JSON is accepted as a YAML subset).
    pub fn from_yaml_slice(bytes: &[u8]) -> Result<Self, SetLawError> {
        parse_yaml(bytes)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self, SetLawError> {
        load_yaml(path)
    }
}

fn parse_yaml<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SetLawError> {
    serde_yaml::from_slice(bytes).map_err(|err| config_error("config-parse", err))
}

/// Reads a YAML file into any configuration type that embeds a
/// [`SystemConfig`]. Read and parse failures carry the offending path.
pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, SetLawError> {
    let bytes = fs::read(path).map_err(|err| {
        SetLawError::Config(
            ErrorInfo::new("config-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    parse_yaml(&bytes).map_err(|err| match err {
        SetLawError::Config(info) => {
            SetLawError::Config(info.with_context("path", path.display().to_string()))
        }
        other => other,
    })
}

use std::path::{Path, PathBuf};

use clap::Args;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use setlaws_core::{Element, ErrorInfo, SetLawError};
use setlaws_render::{parse_set_listing, TextOptions};
use setlaws_verify::{load_yaml, Policy, RangeSpec, SetSpec, SubsetCheck, SystemConfig};
use tracing::debug;

/// Input options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// YAML file describing the universe, subsets, policy and rendering.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Universe as `1,2,3`, `{1, "x"}`, `1..13` or `1..=12`.
    #[arg(long, global = true, value_name = "SET")]
    pub universe: Option<String>,
    /// Label of the universe.
    #[arg(long = "universe-label", global = true, value_name = "LABEL")]
    pub universe_label: Option<String>,
    /// Subset as `LABEL=SET`; repeat two or three times.
    #[arg(long = "set", global = true, value_name = "LABEL=SET")]
    pub sets: Vec<String>,
    /// Reject subsets that contain elements outside the universe.
    #[arg(long = "enforce-subsets", global = true)]
    pub enforce_subsets: bool,
    /// Restrict plain-text output to ASCII.
    #[arg(long, global = true)]
    pub ascii: bool,
    /// Write output to this file instead of stdout.
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,
}

/// Configuration file layout: a set system plus rendering options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Universe, subsets and policy.
    #[serde(flatten)]
    pub system: SystemConfig,
    /// Plain-text rendering options.
    #[serde(default)]
    pub render: TextOptions,
}

fn flag_error(code: &str, message: impl Into<String>, flag: &str) -> SetLawError {
    SetLawError::Config(ErrorInfo::new(code, message).with_context("flag", flag))
}

impl CliConfig {
    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self, SetLawError> {
        load_yaml(path)
    }

    /// Builds the effective configuration: the file if given, then flags.
    pub fn resolve(args: &InputArgs) -> Result<Self, SetLawError> {
        let mut config = match &args.config {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                Self::load(path)?
            }
            None => {
                if args.universe.is_none() {
                    return Err(SetLawError::Config(
                        ErrorInfo::new("missing-input", "no set system given")
                            .with_hint("pass --config <file> or --universe with --set flags"),
                    ));
                }
                Self {
                    system: SystemConfig {
                        universe: SetSpec {
                            label: "U".to_string(),
                            range: None,
                            elements: Vec::new(),
                        },
                        sets: Vec::new(),
                        policy: Policy::default(),
                    },
                    render: TextOptions::default(),
                }
            }
        };

        if let Some(raw) = &args.universe {
            let label = config.system.universe.label.clone();
            config.system.universe = parse_set_spec(&label, raw)
                .map_err(|err| retag(err, "--universe"))?;
        }
        if let Some(label) = &args.universe_label {
            config.system.universe.label = label.clone();
        }
        if !args.sets.is_empty() {
            config.system.sets = args
                .sets
                .iter()
                .map(String::as_str)
                .map(parse_set_flag)
                .collect::<Result<Vec<_>, _>>()?;
        }
        if args.enforce_subsets {
            config.system.policy.subset_check = SubsetCheck::Enforce;
        }
        if args.ascii {
            config.render.ascii_only = true;
        }
        Ok(config)
    }
}

fn retag(err: SetLawError, flag: &str) -> SetLawError {
    match err {
        SetLawError::InvalidInput(info) => {
            SetLawError::InvalidInput(info.with_context("flag", flag))
        }
        other => other,
    }
}

/// Parses `LABEL=SET`.
pub fn parse_set_flag(raw: &str) -> Result<SetSpec, SetLawError> {
    let (label, body) = raw.split_once('=').ok_or_else(|| {
        flag_error("malformed-set-flag", format!("expected LABEL=SET, got `{raw}`"), "--set")
    })?;
    parse_set_spec(label.trim(), body).map_err(|err| retag(err, "--set"))
}

fn parse_bound(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Parses an inline set: an integer range, a brace listing or a bare
/// comma-separated list. Bare items are integers, quoted text or plain
/// words; floats and booleans are rejected as in a configuration file.
pub fn parse_set_spec(label: &str, raw: &str) -> Result<SetSpec, SetLawError> {
    let raw = raw.trim();
    let mut spec = SetSpec {
        label: label.to_string(),
        range: None,
        elements: Vec::new(),
    };

    if let Some((start, end)) = raw.split_once("..=") {
        if let (Some(start), Some(end)) = (parse_bound(start), parse_bound(end)) {
            spec.range = Some(RangeSpec { start, end });
            return Ok(spec);
        }
    } else if let Some((start, end)) = raw.split_once("..") {
        if let (Some(start), Some(end)) = (parse_bound(start), parse_bound(end)) {
            // An exclusive end of i64::MIN leaves nothing to include.
            spec.range = end.checked_sub(1).map(|end| RangeSpec { start, end });
            return Ok(spec);
        }
    }

    if raw.starts_with('{') || raw == setlaws_render::EMPTY_SET {
        let set = parse_set_listing(raw)?;
        spec.elements = set.iter().map(element_value).collect();
        return Ok(spec);
    }

    spec.elements = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(bare_item)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(spec)
}

fn bare_item(item: &str) -> Result<Value, SetLawError> {
    if let Ok(value) = item.parse::<i64>() {
        return Ok(Value::from(value));
    }
    if let Some(text) = item
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return Ok(Value::from(text));
    }
    let scalar = match item {
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        "null" => Some(Value::Null),
        _ if item.bytes().any(|b| b.is_ascii_digit()) => {
            item.parse::<f64>().ok().map(Value::from)
        }
        _ => None,
    };
    match scalar {
        // Same acceptance rules as YAML elements.
        Some(value) => Element::from_value(&value).map(|element| element_value(&element)),
        None => Ok(Value::from(item)),
    }
}

fn element_value(element: &Element) -> Value {
    match element {
        Element::Int(value) => Value::from(*value),
        Element::Text(text) => Value::from(text.as_str()),
    }
}

//! Human-readable explanations.

use serde::{Deserialize, Serialize};
use setlaws_core::FiniteSet;
use setlaws_verify::{
    IdentityResult, LawFamily, PairRelation, Relation, RelationReport, SubsetWarning,
    VerificationReport,
};

use crate::escape::sanitize_label;
use crate::expr::{render_expr, Symbols, ASCII, UNICODE};
use crate::listing::render_listing;
use crate::Renderer;

/// Rule separating groups of identities.
pub const SECTION_RULE: &str = "--------------------------------------------------";

/// Plain-text output options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOptions {
    /// Restrict output to ASCII: operator words, `HOLDS`/`DOES NOT HOLD`, `{}`.
    #[serde(default)]
    pub ascii_only: bool,
}

/// Renders results as indented plain-text explanations.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    options: TextOptions,
}

impl TextRenderer {
    /// Creates a renderer with the given options.
    pub fn new(options: TextOptions) -> Self {
        Self { options }
    }

    /// Unicode renderer.
    pub fn unicode() -> Self {
        Self::new(TextOptions { ascii_only: false })
    }

    /// ASCII-only renderer.
    pub fn ascii() -> Self {
        Self::new(TextOptions { ascii_only: true })
    }

    fn symbols(&self) -> &'static Symbols {
        if self.options.ascii_only {
            &ASCII
        } else {
            &UNICODE
        }
    }

    fn label(&self, label: &str) -> String {
        sanitize_label(label, self.options.ascii_only)
    }

    /// Renders a set listing.
    pub fn render_set(&self, set: &FiniteSet) -> String {
        render_listing(set, self.options.ascii_only)
    }

    fn status(&self, holds: bool) -> &'static str {
        match (holds, self.options.ascii_only) {
            (true, false) => "HOLDS ✅",
            (false, false) => "DOES NOT HOLD ❌",
            (true, true) => "HOLDS",
            (false, true) => "DOES NOT HOLD",
        }
    }

    /// Renders a subset warning line.
    pub fn render_warning(&self, warning: &SubsetWarning) -> String {
        format!(
            "Warning: Set {} contains elements not in universal set {}: {}",
            self.label(warning.label.as_str()),
            self.label(warning.universe.as_str()),
            self.render_set(&warning.stray)
        )
    }

    fn render_pair(&self, pair: &PairRelation) -> Vec<String> {
        let left = self.label(pair.left.as_str());
        let right = self.label(pair.right.as_str());
        let line = match &pair.relation {
            Relation::Equal => format!("{left} and {right} are EQUAL."),
            Relation::ProperSubset => format!("{left} is a PROPER SUBSET of {right}."),
            Relation::ProperSuperset => format!("{right} is a PROPER SUBSET of {left}."),
            Relation::Disjoint => {
                format!("{left} and {right} are DISJOINT (no common elements).")
            }
            Relation::Overlap { intersection } => format!(
                "{left} and {right} OVERLAP (Intersection: {}).",
                self.render_set(intersection)
            ),
        };
        vec![
            String::new(),
            format!("Relationship between {left} and {right}:"),
            format!("  - {line}"),
        ]
    }
}

impl Renderer for TextRenderer {
    fn render_identity(&self, result: &IdentityResult) -> String {
        let labels: Vec<String> = result
            .operands
            .iter()
            .map(|label| self.label(label.as_str()))
            .collect();
        let universe = result
            .universe
            .as_ref()
            .map(|label| self.label(label.as_str()))
            .unwrap_or_else(|| "U".to_string());
        let (lhs_expr, rhs_expr) = result.law.statement();
        let symbols = self.symbols();

        let header = if result.law.family() == LawFamily::DeMorgan {
            format!("{} for ({}):", result.law.name(), labels.join(", "))
        } else {
            format!("{}:", result.law.name())
        };
        let lines = [
            header,
            format!(
                "  LHS = {} = {}",
                render_expr(&lhs_expr, symbols, &universe, &labels),
                self.render_set(&result.lhs)
            ),
            format!(
                "  RHS = {} = {}",
                render_expr(&rhs_expr, symbols, &universe, &labels),
                self.render_set(&result.rhs)
            ),
            format!("  Result: {}", self.status(result.holds)),
        ];
        lines.join("\n")
    }

    fn render_report(&self, report: &VerificationReport) -> String {
        let mut groups: Vec<Vec<String>> = Vec::new();
        let mut previous: Option<&IdentityResult> = None;
        for result in &report.results {
            let same_group = previous.is_some_and(|prev| {
                prev.law.family() == result.law.family() && prev.operands == result.operands
            });
            let block = self.render_identity(result);
            match groups.last_mut() {
                Some(group) if same_group => group.push(block),
                _ => groups.push(vec![block]),
            }
            previous = Some(result);
        }

        let rule = format!("\n\n{SECTION_RULE}\n\n");
        let body = groups
            .iter()
            .map(|group| group.join("\n\n"))
            .collect::<Vec<_>>()
            .join(&rule);
        if report.warnings.is_empty() {
            return body;
        }
        let warnings: Vec<String> = report
            .warnings
            .iter()
            .map(|warning| self.render_warning(warning))
            .collect();
        format!("{}\n\n{body}", warnings.join("\n"))
    }

    fn render_relations(&self, report: &RelationReport) -> String {
        let mut lines = vec!["--- Euler Diagram Relationship Analysis ---".to_string()];
        lines.extend(report.warnings.iter().map(|w| self.render_warning(w)));
        for pair in &report.pairs {
            lines.extend(self.render_pair(pair));
        }

        lines.push(String::new());
        let labels: Vec<String> = report
            .labels
            .iter()
            .map(|label| self.label(label.as_str()))
            .collect();
        if report.common.is_empty() {
            let scope = if labels.len() == 2 {
                "both sets".to_string()
            } else {
                format!("all {} sets", number_word(labels.len()))
            };
            lines.push(format!("There is NO common intersection between {scope}."));
        } else {
            let joined = labels.join(&format!(" {} ", self.symbols().intersection));
            lines.push(format!(
                "Common Intersection ({joined}): {}",
                self.render_set(&report.common)
            ));
        }
        lines.join("\n")
    }
}

fn number_word(count: usize) -> String {
    match count {
        2 => "two".to_string(),
        3 => "three".to_string(),
        other => other.to_string(),
    }
}

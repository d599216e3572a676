//! LaTeX derivations built from `aligned` environments.

use setlaws_core::{Element, FiniteSet};
use setlaws_verify::{
    IdentityResult, LawFamily, PairRelation, Relation, RelationReport, SubsetWarning,
    VerificationReport,
};

use crate::escape::latex_escape;
use crate::expr::{render_expr, LATEX};
use crate::Renderer;

/// Separator placed between blocks of a report.
pub const BLOCK_SEPARATOR: &str = "\n\n% ---\n\n";

/// Renders results as LaTeX math blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexRenderer;

impl LatexRenderer {
    /// Creates the renderer.
    pub fn new() -> Self {
        Self
    }
}

/// Math-mode form of a label: a single ASCII letter stays a symbol, anything
/// else becomes escaped upright text.
pub fn latex_label(label: &str) -> String {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => ch.to_string(),
        _ => format!("\\text{{{}}}", latex_escape(label)),
    }
}

fn latex_element(element: &Element) -> String {
    match element {
        Element::Int(value) => value.to_string(),
        Element::Text(text) => format!("\\text{{{}}}", latex_escape(text)),
    }
}

/// `\{1, 2\}`, or `\emptyset` for the empty set.
pub fn latex_set(set: &FiniteSet) -> String {
    if set.is_empty() {
        return "\\emptyset".to_string();
    }
    let items: Vec<String> = set.iter().map(latex_element).collect();
    format!("\\{{{}\\}}", items.join(", "))
}

fn warning_comment(warning: &SubsetWarning) -> String {
    format!(
        "% Warning: set {} contains elements not in universal set {}: {}",
        latex_label(warning.label.as_str()),
        latex_label(warning.universe.as_str()),
        latex_set(&warning.stray)
    )
}

fn relation_item(pair: &PairRelation) -> String {
    let left = latex_label(pair.left.as_str());
    let right = latex_label(pair.right.as_str());
    let relation = match pair.relation {
        Relation::Equal => format!("is equal to ${right}$"),
        Relation::ProperSubset => {
            format!("is a proper subset of ${right}$ ($ {left} \\subset {right} $)")
        }
        Relation::ProperSuperset => {
            format!("is a superset of ${right}$ ($ {left} \\supset {right} $)")
        }
        Relation::Disjoint => {
            format!("is disjoint from ${right}$ ($ {left} \\cap {right} = \\emptyset $)")
        }
        Relation::Overlap { .. } => {
            format!("overlaps with ${right}$ ($ {left} \\cap {right} \\neq \\emptyset $)")
        }
    };
    format!("    \\item Set ${left}$ {relation}.")
}

impl Renderer for LatexRenderer {
    fn render_identity(&self, result: &IdentityResult) -> String {
        let labels: Vec<String> = result
            .operands
            .iter()
            .map(|label| latex_label(label.as_str()))
            .collect();
        let universe = result
            .universe
            .as_ref()
            .map(|label| latex_label(label.as_str()))
            .unwrap_or_else(|| "U".to_string());
        let (lhs_expr, rhs_expr) = result.law.statement();
        let lhs_tex = render_expr(&lhs_expr, &LATEX, &universe, &labels);
        let rhs_tex = render_expr(&rhs_expr, &LATEX, &universe, &labels);

        let mut lines = vec!["\\[".to_string(), "\\begin{aligned}".to_string()];
        match result.law.family() {
            LawFamily::Associativity => lines.push(format!(
                "{lhs_tex} &= {rhs_tex} && \\text{{associativity}}\\\\[2pt]"
            )),
            family => {
                let reason = if family == LawFamily::DeMorgan {
                    "by De Morgan"
                } else {
                    "distributive law"
                };
                lines.push(lhs_tex);
                lines.push(format!("&= {rhs_tex} && \\text{{{reason}}}\\\\[2pt]"));
            }
        }
        lines.push(format!(
            "&= {} \\quad\\text{{and}}\\quad {} && \\text{{compute both sides}}\\\\",
            latex_set(&result.lhs),
            latex_set(&result.rhs)
        ));
        lines.push(if result.holds {
            "&\\text{so the sets are equal.}".to_string()
        } else {
            "&\\text{so the sets are not equal.}".to_string()
        });
        lines.push("\\end{aligned}".to_string());
        lines.push("\\]".to_string());
        let mut block = lines.join("\n");
        block.push('\n');
        block
    }

    fn render_report(&self, report: &VerificationReport) -> String {
        let blocks: Vec<String> = report
            .results
            .iter()
            .map(|result| self.render_identity(result))
            .collect();
        let body = blocks.join(BLOCK_SEPARATOR);
        if report.warnings.is_empty() {
            return body;
        }
        let comments: Vec<String> = report.warnings.iter().map(warning_comment).collect();
        format!("{}\n\n{body}", comments.join("\n"))
    }

    fn render_relations(&self, report: &RelationReport) -> String {
        let mut lines: Vec<String> = report.warnings.iter().map(warning_comment).collect();
        lines.push("\\begin{itemize}".to_string());
        lines.extend(report.pairs.iter().map(relation_item));

        let joined = report
            .labels
            .iter()
            .map(|label| latex_label(label.as_str()))
            .collect::<Vec<_>>()
            .join(" \\cap ");
        if report.common.is_empty() {
            lines.push(format!(
                "    \\item The common intersection is empty ($ {joined} = \\emptyset $)."
            ));
        } else {
            lines.push(format!(
                "    \\item The common intersection $ {joined} $ contains {} element(s).",
                report.common.len()
            ));
        }
        lines.push("\\end{itemize}".to_string());
        lines.join("\n")
    }
}

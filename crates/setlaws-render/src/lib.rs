#![deny(missing_docs)]
#![doc = "Plain-text and LaTeX renderers for set-law verification results."]

/// LaTeX escaping and label sanitising.
pub mod escape;
mod expr;
/// LaTeX math-block renderer.
pub mod latex;
/// Brace listings of finite sets and their parser.
pub mod listing;
/// Indented plain-text renderer.
pub mod text;

use setlaws_verify::{IdentityResult, RelationReport, VerificationReport};

pub use escape::{latex_escape, sanitize_label};
pub use latex::{latex_label, latex_set, LatexRenderer, BLOCK_SEPARATOR};
pub use listing::{parse_set_listing, render_element, render_listing, EMPTY_SET, EMPTY_SET_ASCII};
pub use text::{TextOptions, TextRenderer, SECTION_RULE};

/// Turns verification results into a presentation format.
///
/// Renderers only read the stored sides and outcome; they never recompute
/// set operations.
pub trait Renderer {
    /// Renders a single identity.
    fn render_identity(&self, result: &IdentityResult) -> String;

    /// Renders every identity of a report, preceded by any subset warnings.
    fn render_report(&self, report: &VerificationReport) -> String;

    /// Renders a pairwise relationship analysis.
    fn render_relations(&self, report: &RelationReport) -> String;
}

use std::error::Error;

use clap::Args;
use setlaws_render::{LatexRenderer, Renderer, TextRenderer};
use setlaws_verify::analyze_relations;
use tracing::info;

use crate::config::InputArgs;

#[derive(Args, Debug)]
pub struct RelationsArgs {
    /// Emit a LaTeX itemize list instead of plain text.
    #[arg(long)]
    pub latex: bool,
}

/// Runs the pairwise relationship analysis.
pub fn run(input: &InputArgs, args: &RelationsArgs) -> Result<(), Box<dyn Error>> {
    let loaded = super::load(input)?;
    let report = analyze_relations(&loaded.system, &loaded.config.system.policy)?;
    info!(
        pairs = report.pairs.len(),
        common = report.common.len(),
        "relationship analysis finished"
    );
    let rendered = if args.latex {
        LatexRenderer::new().render_relations(&report)
    } else {
        TextRenderer::new(loaded.config.render).render_relations(&report)
    };
    super::emit(input.out.as_deref(), &rendered)
}

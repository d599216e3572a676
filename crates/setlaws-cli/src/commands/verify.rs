use std::error::Error;

use setlaws_render::{Renderer, TextRenderer};

use crate::config::InputArgs;

/// Prints plain-text explanations; fails when any identity does not hold.
pub fn run(input: &InputArgs) -> Result<(), Box<dyn Error>> {
    let loaded = super::load(input)?;
    let report = super::verify(&loaded)?;
    let renderer = TextRenderer::new(loaded.config.render);
    super::emit(input.out.as_deref(), &renderer.render_report(&report))?;

    let failed: Vec<String> = report.failures().map(|result| result.signature()).collect();
    if !failed.is_empty() {
        return Err(format!("identities do not hold: {}", failed.join("; ")).into());
    }
    Ok(())
}

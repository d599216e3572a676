use std::error::Error;

use setlaws_render::{LatexRenderer, Renderer};

use crate::config::InputArgs;

pub fn run(input: &InputArgs) -> Result<(), Box<dyn Error>> {
    let loaded = super::load(input)?;
    let report = super::verify(&loaded)?;
    super::emit(
        input.out.as_deref(),
        &LatexRenderer::new().render_report(&report),
    )
}

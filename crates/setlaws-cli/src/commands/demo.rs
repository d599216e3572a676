use std::error::Error;

use setlaws_core::{FiniteSet, NamedSet, SetLawError};
use setlaws_render::{LatexRenderer, Renderer, TextOptions, TextRenderer};
use setlaws_verify::{verify_system, Policy, SetSystem};

use crate::config::InputArgs;

/// U = {1..12}, A = {1, 2, 3, 6}, B = {2, 4, 6, 8}, C = {1, 5, 6, 9, 10}.
pub fn textbook_system() -> Result<SetSystem, SetLawError> {
    let subset = |label: &str, values: &[i64]| {
        NamedSet::labelled(label, FiniteSet::from_ints(values.iter().copied()))
    };
    SetSystem::new(
        NamedSet::labelled("U", FiniteSet::range_inclusive(1, 12)?)?,
        vec![
            subset("A", &[1, 2, 3, 6])?,
            subset("B", &[2, 4, 6, 8])?,
            subset("C", &[1, 5, 6, 9, 10])?,
        ],
    )
}

/// Verifies the textbook system and prints text followed by LaTeX.
pub fn run(input: &InputArgs) -> Result<(), Box<dyn Error>> {
    let system = textbook_system()?;
    let report = verify_system(&system, &Policy::default())?;
    let text = TextRenderer::new(TextOptions {
        ascii_only: input.ascii,
    })
    .render_report(&report);
    let latex = LatexRenderer::new().render_report(&report);
    let rule = "=".repeat(60);
    let output = format!("{text}\n\n{rule}\nLATEX OUTPUT:\n\n{latex}");
    super::emit(input.out.as_deref(), &output)
}

use std::error::Error;

use crate::config::InputArgs;

/// Emits the verification report as canonical JSON.
pub fn run(input: &InputArgs) -> Result<(), Box<dyn Error>> {
    let loaded = super::load(input)?;
    let report = super::verify(&loaded)?;
    let json = String::from_utf8(report.to_bytes()?)?;
    super::emit(input.out.as_deref(), &json)
}

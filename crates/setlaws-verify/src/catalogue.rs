use setlaws_core::{NamedSet, SetLawError};
use tracing::debug;

use crate::hash::stable_hash_string;
use crate::identities::{evaluate, IdentityResult};
use crate::laws::{Law, LawFamily};
use crate::policies::Policy;
use crate::report::{validate_results, VerificationProvenance, VerificationReport};
use crate::system::SetSystem;

fn run_law(
    law: Law,
    system: &SetSystem,
    operands: &[&NamedSet],
    results: &mut Vec<IdentityResult>,
) -> Result<(), SetLawError> {
    let result = evaluate(law, system.universe(), operands)?;
    debug!(law = law.id(), holds = result.holds, "evaluated identity");
    results.push(result);
    Ok(())
}

/// Evaluates the selected laws without validating the subset relation.
///
/// De Morgan runs on every subset pair; associativity and distributivity
/// only run when exactly three subsets are present.
pub fn evaluate_catalogue(
    system: &SetSystem,
    policy: &Policy,
) -> Result<Vec<IdentityResult>, SetLawError> {
    let mut results = Vec::new();
    for (x, y) in system.pairs() {
        for law in Law::ALL
            .into_iter()
            .filter(|law| law.family() == LawFamily::DeMorgan)
        {
            if policy.enables(law) {
                run_law(law, system, &[x, y], &mut results)?;
            }
        }
    }
    if let Some(triple) = system.triple() {
        for law in Law::ALL
            .into_iter()
            .filter(|law| law.family() != LawFamily::DeMorgan)
        {
            if policy.enables(law) {
                run_law(law, system, &triple, &mut results)?;
            }
        }
    }
    Ok(results)
}

/// Validates the system, evaluates the catalogue and returns a deterministic report.
pub fn verify_system(
    system: &SetSystem,
    policy: &Policy,
) -> Result<VerificationReport, SetLawError> {
    let warnings = system.validate(policy.subset_check)?;
    let results = evaluate_catalogue(system, policy)?;
    validate_results(&results)?;
    let law_order = results.iter().map(IdentityResult::signature).collect();
    let input_hash = stable_hash_string(system)?;
    let provenance = VerificationProvenance::new(policy.clone(), input_hash, law_order);
    VerificationReport::new(results, warnings, provenance)
}

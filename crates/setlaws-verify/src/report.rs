use serde::{Deserialize, Serialize};
use setlaws_core::{ErrorInfo, SchemaVersion, SetLawError};

use crate::hash::stable_hash_string;
use crate::identities::IdentityResult;
use crate::policies::Policy;
use crate::serde::to_canonical_json_bytes;
use crate::system::SubsetWarning;

fn report_error(code: &str, message: impl Into<String>) -> SetLawError {
    SetLawError::InvalidInput(ErrorInfo::new(code, message.into()))
}

/// Provenance metadata attached to [`VerificationReport`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationProvenance {
    /// Policy applied during the run.
    pub policy: Policy,
    /// Stable hash of the verified set system.
    pub input_hash: String,
    /// Signatures of the evaluated identities, in evaluation order.
    pub law_order: Vec<String>,
}

impl VerificationProvenance {
    /// Constructs provenance metadata from the policy and input hash.
    pub fn new(policy: Policy, input_hash: String, law_order: Vec<String>) -> Self {
        Self {
            policy,
            input_hash,
            law_order,
        }
    }
}

/// Every identity evaluated for one set system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationReport {
    /// Schema of this payload.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Content-addressed hash of results, warnings and provenance.
    pub analysis_hash: String,
    /// Identity outcomes in evaluation order.
    pub results: Vec<IdentityResult>,
    /// Subsets that escaped the universe under warn mode.
    #[serde(default)]
    pub warnings: Vec<SubsetWarning>,
    /// Policy and input provenance.
    pub provenance: VerificationProvenance,
}

impl VerificationReport {
    /// Constructs a report while computing the stable hash.
    pub fn new(
        results: Vec<IdentityResult>,
        warnings: Vec<SubsetWarning>,
        provenance: VerificationProvenance,
    ) -> Result<Self, SetLawError> {
        let analysis_hash = stable_hash_string(&(&results, &warnings, &provenance))?;
        Ok(Self {
            schema_version: SchemaVersion::CURRENT,
            analysis_hash,
            results,
            warnings,
            provenance,
        })
    }

    /// Whether every evaluated identity holds.
    pub fn all_hold(&self) -> bool {
        self.results.iter().all(|result| result.holds)
    }

    /// Identities whose sides differ.
    pub fn failures(&self) -> impl Iterator<Item = &IdentityResult> {
        self.results.iter().filter(|result| !result.holds)
    }

    /// Persists the report as canonical JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SetLawError> {
        to_canonical_json_bytes(self)
    }
}

/// Validates that at least one identity was evaluated.
pub fn validate_results(results: &[IdentityResult]) -> Result<(), SetLawError> {
    if results.is_empty() {
        return Err(report_error(
            "empty-catalogue",
            "the policy selects no law applicable to this set system",
        ));
    }
    Ok(())
}

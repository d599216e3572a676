use serde::{Deserialize, Serialize};
use setlaws_core::{FiniteSet, SchemaVersion, SetLabel, SetLawError};

use crate::policies::Policy;
use crate::system::{SetSystem, SubsetWarning};

/// Euler-diagram relationship between two sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Relation {
    /// Same members.
    Equal,
    /// Left is strictly contained in right.
    ProperSubset,
    /// Right is strictly contained in left.
    ProperSuperset,
    /// No common member.
    Disjoint,
    /// Some, but not all, members shared.
    Overlap {
        /// Shared members.
        intersection: FiniteSet,
    },
}

/// Classifies `left` against `right`.
///
/// Checks run in a fixed precedence so an empty set is reported as a proper
/// subset of a non-empty one rather than as disjoint from it.
pub fn classify(left: &FiniteSet, right: &FiniteSet) -> Relation {
    if left == right {
        Relation::Equal
    } else if left.is_subset(right) {
        Relation::ProperSubset
    } else if right.is_subset(left) {
        Relation::ProperSuperset
    } else if left.is_disjoint(right) {
        Relation::Disjoint
    } else {
        Relation::Overlap {
            intersection: left.intersection(right),
        }
    }
}

/// Relationship for one subset pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairRelation {
    /// First label of the pair.
    pub left: SetLabel,
    /// Second label of the pair.
    pub right: SetLabel,
    /// Relationship of `left` to `right`.
    pub relation: Relation,
}

/// Pairwise relationships and common intersection for a set system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationReport {
    /// Schema of this payload.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Subset labels in caller order.
    pub labels: Vec<SetLabel>,
    /// Relationship per pair `(i < j)` in caller order.
    pub pairs: Vec<PairRelation>,
    /// Intersection of all subsets.
    pub common: FiniteSet,
    /// Subsets that escaped the universe under warn mode.
    #[serde(default)]
    pub warnings: Vec<SubsetWarning>,
}

/// Analyses subset relationships after applying the policy's subset check.
pub fn analyze_relations(
    system: &SetSystem,
    policy: &Policy,
) -> Result<RelationReport, SetLawError> {
    let warnings = system.validate(policy.subset_check)?;
    let pairs = system
        .pairs()
        .into_iter()
        .map(|(left, right)| PairRelation {
            left: left.label.clone(),
            right: right.label.clone(),
            relation: classify(&left.set, &right.set),
        })
        .collect();
    Ok(RelationReport {
        schema_version: SchemaVersion::CURRENT,
        labels: system.labels().into_iter().cloned().collect(),
        pairs,
        common: system.common_intersection(),
        warnings,
    })
}

use serde::{Deserialize, Serialize};
use setlaws_core::{ensure_distinct_labels, ErrorInfo, FiniteSet, NamedSet, SetLabel, SetLawError};
use tracing::warn;

use crate::policies::SubsetCheck;

/// Subset escaping the universe, recorded under [`SubsetCheck::Warn`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubsetWarning {
    /// Offending subset.
    pub label: SetLabel,
    /// Universe the subset was checked against.
    pub universe: SetLabel,
    /// Elements of the subset missing from the universe.
    pub stray: FiniteSet,
}

/// Universe plus two or three labelled subsets.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SetSystem {
    universe: NamedSet,
    subsets: Vec<NamedSet>,
}

impl SetSystem {
    /// Fewest subsets accepted.
    pub const MIN_SUBSETS: usize = 2;
    /// Most subsets accepted.
    pub const MAX_SUBSETS: usize = 3;

    /// Builds a system, rejecting bad subset counts and repeated labels.
    pub fn new(universe: NamedSet, subsets: Vec<NamedSet>) -> Result<Self, SetLawError> {
        if !(Self::MIN_SUBSETS..=Self::MAX_SUBSETS).contains(&subsets.len()) {
            return Err(SetLawError::InvalidInput(
                ErrorInfo::new("subset-count", "a set system needs two or three subsets")
                    .with_context("actual", subsets.len().to_string()),
            ));
        }
        ensure_distinct_labels(
            std::iter::once(&universe.label).chain(subsets.iter().map(|named| &named.label)),
        )?;
        Ok(Self { universe, subsets })
    }

    /// Universal set.
    pub fn universe(&self) -> &NamedSet {
        &self.universe
    }

    /// Subsets in caller order.
    pub fn subsets(&self) -> &[NamedSet] {
        &self.subsets
    }

    /// Subset labels in caller order.
    pub fn labels(&self) -> Vec<&SetLabel> {
        self.subsets.iter().map(|named| &named.label).collect()
    }

    /// Every unordered pair `(i < j)` of subsets in caller order.
    pub fn pairs(&self) -> Vec<(&NamedSet, &NamedSet)> {
        let mut pairs = Vec::new();
        for (idx, left) in self.subsets.iter().enumerate() {
            for right in &self.subsets[idx + 1..] {
                pairs.push((left, right));
            }
        }
        pairs
    }

    /// The three subsets, when exactly three are present.
    pub fn triple(&self) -> Option<[&NamedSet; 3]> {
        match self.subsets.as_slice() {
            [a, b, c] => Some([a, b, c]),
            _ => None,
        }
    }

    /// Intersection of every subset.
    pub fn common_intersection(&self) -> FiniteSet {
        let mut iter = self.subsets.iter();
        let Some(first) = iter.next() else {
            return FiniteSet::empty();
        };
        iter.fold(first.set.clone(), |acc, named| acc.intersection(&named.set))
    }

    /// Subsets with elements outside the universe, with those elements.
    pub fn stray_elements(&self) -> Vec<SubsetWarning> {
        self.subsets
            .iter()
            .filter_map(|named| {
                let stray = named.set.difference(&self.universe.set);
                (!stray.is_empty()).then(|| SubsetWarning {
                    label: named.label.clone(),
                    universe: self.universe.label.clone(),
                    stray,
                })
            })
            .collect()
    }

    /// Applies the subset-of-universe check.
    pub fn validate(&self, check: SubsetCheck) -> Result<Vec<SubsetWarning>, SetLawError> {
        let strays = self.stray_elements();
        match (check, strays.first()) {
            (SubsetCheck::Enforce, Some(first)) => {
                let stray: Vec<String> = first.stray.iter().map(ToString::to_string).collect();
                Err(SetLawError::InvalidInput(
                    ErrorInfo::new(
                        "not-a-subset",
                        format!(
                            "set {} contains elements outside universe {}",
                            first.label, first.universe
                        ),
                    )
                    .with_context("label", first.label.as_str())
                    .with_context("stray", stray.join(", "))
                    .with_hint("add the elements to the universe or use warn mode"),
                ))
            }
            _ => {
                for warning in &strays {
                    warn!(
                        label = %warning.label,
                        universe = %warning.universe,
                        stray = warning.stray.len(),
                        "subset contains elements outside the universe"
                    );
                }
                Ok(strays)
            }
        }
    }
}

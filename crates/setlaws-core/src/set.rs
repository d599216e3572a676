use std::collections::btree_set;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::element::Element;
use crate::errors::{ErrorInfo, SetLawError};

/// Largest number of elements a range constructor will materialise.
pub const MAX_RANGE_LEN: u64 = 1_000_000;

/// Immutable finite set of [`Element`]s, iterated in ascending total order.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FiniteSet {
    elements: BTreeSet<Element>,
}

impl FiniteSet {
    /// Returns the empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set of integer elements.
    pub fn from_ints<I: IntoIterator<Item = i64>>(values: I) -> Self {
        values.into_iter().map(Element::Int).collect()
    }

    /// Builds `{start, start + 1, ..., end}`; empty when `start > end`.
    pub fn range_inclusive(start: i64, end: i64) -> Result<Self, SetLawError> {
        if start > end {
            return Ok(Self::empty());
        }
        let span = (end as i128 - start as i128 + 1) as u128;
        if span > MAX_RANGE_LEN as u128 {
            return Err(SetLawError::InvalidInput(
                ErrorInfo::new("range-too-large", "range exceeds the element limit")
                    .with_context("start", start.to_string())
                    .with_context("end", end.to_string())
                    .with_context("limit", MAX_RANGE_LEN.to_string()),
            ));
        }
        Ok(Self::from_ints(start..=end))
    }

    /// Builds a set from untyped JSON/YAML values, rejecting non-set-like members.
    pub fn from_values(values: &[Value]) -> Result<Self, SetLawError> {
        values.iter().map(Element::from_value).collect()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns whether `element` is a member.
    pub fn contains(&self, element: &Element) -> bool {
        self.elements.contains(element)
    }

    /// Iterates the elements in ascending total order.
    pub fn iter(&self) -> btree_set::Iter<'_, Element> {
        self.elements.iter()
    }

    /// `self ∪ other`.
    pub fn union(&self, other: &FiniteSet) -> FiniteSet {
        self.elements.union(&other.elements).cloned().collect()
    }

    /// `self ∩ other`.
    pub fn intersection(&self, other: &FiniteSet) -> FiniteSet {
        self.elements
            .intersection(&other.elements)
            .cloned()
            .collect()
    }

    /// `self \ other`. Elements of `other` absent from `self` are ignored.
    pub fn difference(&self, other: &FiniteSet) -> FiniteSet {
        self.elements.difference(&other.elements).cloned().collect()
    }

    /// Returns whether every element of `self` belongs to `other`.
    pub fn is_subset(&self, other: &FiniteSet) -> bool {
        self.elements.is_subset(&other.elements)
    }

    /// Returns whether `self` and `other` share no element.
    pub fn is_disjoint(&self, other: &FiniteSet) -> bool {
        self.elements.is_disjoint(&other.elements)
    }
}

impl<T: Into<Element>> FromIterator<T> for FiniteSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FiniteSet {
    type Item = &'a Element;
    type IntoIter = btree_set::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for FiniteSet {
    type Item = Element;
    type IntoIter = btree_set::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

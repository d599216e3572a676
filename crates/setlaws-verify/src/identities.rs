use serde::{Deserialize, Serialize};
use setlaws_core::{ensure_distinct_labels, ErrorInfo, FiniteSet, NamedSet, SetLabel, SetLawError};

use crate::laws::Law;

/// Outcome of evaluating one law against specific operand sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentityResult {
    /// Evaluated law.
    pub law: Law,
    /// Label of the universe for laws that take complements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universe: Option<SetLabel>,
    /// Operand labels in statement order.
    pub operands: Vec<SetLabel>,
    /// Computed left hand side.
    pub lhs: FiniteSet,
    /// Computed right hand side.
    pub rhs: FiniteSet,
    /// Whether both sides are equal.
    pub holds: bool,
}

impl IdentityResult {
    fn new(
        law: Law,
        universe: Option<&NamedSet>,
        operands: &[&NamedSet],
        lhs: FiniteSet,
        rhs: FiniteSet,
    ) -> Self {
        let holds = lhs == rhs;
        Self {
            law,
            universe: universe.map(|named| named.label.clone()),
            operands: operands.iter().map(|named| named.label.clone()).collect(),
            lhs,
            rhs,
            holds,
        }
    }

    /// Short description such as `de_morgan_union(A, B)`.
    pub fn signature(&self) -> String {
        let labels: Vec<&str> = self.operands.iter().map(SetLabel::as_str).collect();
        format!("{}({})", self.law.id(), labels.join(", "))
    }
}

/// `U \ X`. `X` need not be contained in `U`.
pub fn complement(universe: &FiniteSet, set: &FiniteSet) -> FiniteSet {
    universe.difference(set)
}

fn distinct(universe: Option<&NamedSet>, operands: &[&NamedSet]) -> Result<(), SetLawError> {
    ensure_distinct_labels(
        universe
            .into_iter()
            .chain(operands.iter().copied())
            .map(|named| &named.label),
    )
}

/// Compares `U \ (X ∪ Y)` with `(U \ X) ∩ (U \ Y)`.
pub fn de_morgan_union(
    universe: &NamedSet,
    x: &NamedSet,
    y: &NamedSet,
) -> Result<IdentityResult, SetLawError> {
    distinct(Some(universe), &[x, y])?;
    let u = &universe.set;
    let lhs = complement(u, &x.set.union(&y.set));
    let rhs = complement(u, &x.set).intersection(&complement(u, &y.set));
    Ok(IdentityResult::new(
        Law::DeMorganUnion,
        Some(universe),
        &[x, y],
        lhs,
        rhs,
    ))
}

/// Compares `U \ (X ∩ Y)` with `(U \ X) ∪ (U \ Y)`.
pub fn de_morgan_intersection(
    universe: &NamedSet,
    x: &NamedSet,
    y: &NamedSet,
) -> Result<IdentityResult, SetLawError> {
    distinct(Some(universe), &[x, y])?;
    let u = &universe.set;
    let lhs = complement(u, &x.set.intersection(&y.set));
    let rhs = complement(u, &x.set).union(&complement(u, &y.set));
    Ok(IdentityResult::new(
        Law::DeMorganIntersection,
        Some(universe),
        &[x, y],
        lhs,
        rhs,
    ))
}

/// Compares `(A ∪ B) ∪ C` with `A ∪ (B ∪ C)`.
pub fn associative_union(
    a: &NamedSet,
    b: &NamedSet,
    c: &NamedSet,
) -> Result<IdentityResult, SetLawError> {
    distinct(None, &[a, b, c])?;
    let lhs = a.set.union(&b.set).union(&c.set);
    let rhs = a.set.union(&b.set.union(&c.set));
    Ok(IdentityResult::new(
        Law::AssociativeUnion,
        None,
        &[a, b, c],
        lhs,
        rhs,
    ))
}

/// Compares `(A ∩ B) ∩ C` with `A ∩ (B ∩ C)`.
pub fn associative_intersection(
    a: &NamedSet,
    b: &NamedSet,
    c: &NamedSet,
) -> Result<IdentityResult, SetLawError> {
    distinct(None, &[a, b, c])?;
    let lhs = a.set.intersection(&b.set).intersection(&c.set);
    let rhs = a.set.intersection(&b.set.intersection(&c.set));
    Ok(IdentityResult::new(
        Law::AssociativeIntersection,
        None,
        &[a, b, c],
        lhs,
        rhs,
    ))
}

/// Compares `A ∪ (B ∩ C)` with `(A ∪ B) ∩ (A ∪ C)`.
pub fn distributive_union_over_intersection(
    a: &NamedSet,
    b: &NamedSet,
    c: &NamedSet,
) -> Result<IdentityResult, SetLawError> {
    distinct(None, &[a, b, c])?;
    let lhs = a.set.union(&b.set.intersection(&c.set));
    let rhs = a.set.union(&b.set).intersection(&a.set.union(&c.set));
    Ok(IdentityResult::new(
        Law::DistributiveUnionOverIntersection,
        None,
        &[a, b, c],
        lhs,
        rhs,
    ))
}

/// Compares `A ∩ (B ∪ C)` with `(A ∩ B) ∪ (A ∩ C)`.
pub fn distributive_intersection_over_union(
    a: &NamedSet,
    b: &NamedSet,
    c: &NamedSet,
) -> Result<IdentityResult, SetLawError> {
    distinct(None, &[a, b, c])?;
    let lhs = a.set.intersection(&b.set.union(&c.set));
    let rhs = a.set.intersection(&b.set).union(&a.set.intersection(&c.set));
    Ok(IdentityResult::new(
        Law::DistributiveIntersectionOverUnion,
        None,
        &[a, b, c],
        lhs,
        rhs,
    ))
}

/// Dispatches `law` over `operands`, which must match its arity.
pub fn evaluate(
    law: Law,
    universe: &NamedSet,
    operands: &[&NamedSet],
) -> Result<IdentityResult, SetLawError> {
    match (law, operands) {
        (Law::DeMorganUnion, [x, y]) => de_morgan_union(universe, x, y),
        (Law::DeMorganIntersection, [x, y]) => de_morgan_intersection(universe, x, y),
        (Law::AssociativeUnion, [a, b, c]) => associative_union(a, b, c),
        (Law::AssociativeIntersection, [a, b, c]) => associative_intersection(a, b, c),
        (Law::DistributiveUnionOverIntersection, [a, b, c]) => {
            distributive_union_over_intersection(a, b, c)
        }
        (Law::DistributiveIntersectionOverUnion, [a, b, c]) => {
            distributive_intersection_over_union(a, b, c)
        }
        _ => Err(SetLawError::InvalidInput(
            ErrorInfo::new("operand-count", "operand count does not match the law")
                .with_context("law", law.id())
                .with_context("expected", law.arity().to_string())
                .with_context("actual", operands.len().to_string()),
        )),
    }
}

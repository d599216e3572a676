use serde::{Deserialize, Serialize};
use setlaws_core::{ErrorInfo, FiniteSet, SetLawError};

/// Identities evaluated by the verifier, in catalogue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Law {
    /// `U \ (X ∪ Y) = (U \ X) ∩ (U \ Y)`.
    DeMorganUnion,
    /// `U \ (X ∩ Y) = (U \ X) ∪ (U \ Y)`.
    DeMorganIntersection,
    /// `(A ∪ B) ∪ C = A ∪ (B ∪ C)`.
    AssociativeUnion,
    /// `(A ∩ B) ∩ C = A ∩ (B ∩ C)`.
    AssociativeIntersection,
    /// `A ∪ (B ∩ C) = (A ∪ B) ∩ (A ∪ C)`.
    DistributiveUnionOverIntersection,
    /// `A ∩ (B ∪ C) = (A ∩ B) ∪ (A ∩ C)`.
    DistributiveIntersectionOverUnion,
}

/// Grouping used when laying out rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LawFamily {
    /// Complement laws relative to the universe.
    DeMorgan,
    /// Regrouping of a single operator.
    Associativity,
    /// One operator distributed over the other.
    Distributive,
}

impl Law {
    /// Every law in catalogue order.
    pub const ALL: [Law; 6] = [
        Law::DeMorganUnion,
        Law::DeMorganIntersection,
        Law::AssociativeUnion,
        Law::AssociativeIntersection,
        Law::DistributiveUnionOverIntersection,
        Law::DistributiveIntersectionOverUnion,
    ];

    /// Stable identifier used in configuration files and provenance.
    pub fn id(&self) -> &'static str {
        match self {
            Law::DeMorganUnion => "de_morgan_union",
            Law::DeMorganIntersection => "de_morgan_intersection",
            Law::AssociativeUnion => "associative_union",
            Law::AssociativeIntersection => "associative_intersection",
            Law::DistributiveUnionOverIntersection => "distributive_union_over_intersection",
            Law::DistributiveIntersectionOverUnion => "distributive_intersection_over_union",
        }
    }

    /// Display name shown in rendered explanations.
    pub fn name(&self) -> &'static str {
        match self {
            Law::DeMorganUnion => "De Morgan (complement of union)",
            Law::DeMorganIntersection => "De Morgan (complement of intersection)",
            Law::AssociativeUnion => "Associativity (union)",
            Law::AssociativeIntersection => "Associativity (intersection)",
            Law::DistributiveUnionOverIntersection => "Distributive (union over intersection)",
            Law::DistributiveIntersectionOverUnion => "Distributive (intersection over union)",
        }
    }

    /// Family the law belongs to.
    pub fn family(&self) -> LawFamily {
        match self {
            Law::DeMorganUnion | Law::DeMorganIntersection => LawFamily::DeMorgan,
            Law::AssociativeUnion | Law::AssociativeIntersection => LawFamily::Associativity,
            Law::DistributiveUnionOverIntersection | Law::DistributiveIntersectionOverUnion => {
                LawFamily::Distributive
            }
        }
    }

    /// Number of named operands, excluding the universe.
    pub fn arity(&self) -> usize {
        match self.family() {
            LawFamily::DeMorgan => 2,
            LawFamily::Associativity | LawFamily::Distributive => 3,
        }
    }

    /// Whether the statement takes complements relative to the universe.
    pub fn uses_universe(&self) -> bool {
        self.family() == LawFamily::DeMorgan
    }

    /// Symbolic left and right hand sides over operands `0..arity`.
    pub fn statement(&self) -> (SetExpr, SetExpr) {
        use SetExpr as E;
        let (a, b, c) = (E::Operand(0), E::Operand(1), E::Operand(2));
        match self {
            Law::DeMorganUnion => (
                E::complement(E::union(a.clone(), b.clone())),
                E::intersection(E::complement(a), E::complement(b)),
            ),
            Law::DeMorganIntersection => (
                E::complement(E::intersection(a.clone(), b.clone())),
                E::union(E::complement(a), E::complement(b)),
            ),
            Law::AssociativeUnion => (
                E::union(E::union(a.clone(), b.clone()), c.clone()),
                E::union(a, E::union(b, c)),
            ),
            Law::AssociativeIntersection => (
                E::intersection(E::intersection(a.clone(), b.clone()), c.clone()),
                E::intersection(a, E::intersection(b, c)),
            ),
            Law::DistributiveUnionOverIntersection => (
                E::union(a.clone(), E::intersection(b.clone(), c.clone())),
                E::intersection(E::union(a.clone(), b), E::union(a, c)),
            ),
            Law::DistributiveIntersectionOverUnion => (
                E::intersection(a.clone(), E::union(b.clone(), c.clone())),
                E::union(E::intersection(a.clone(), b), E::intersection(a, c)),
            ),
        }
    }
}

/// Expression tree over positional operands, used to display law statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetExpr {
    /// The operand at the given position.
    Operand(usize),
    /// Complement relative to the universe.
    Complement(Box<SetExpr>),
    /// Union of two subexpressions.
    Union(Box<SetExpr>, Box<SetExpr>),
    /// Intersection of two subexpressions.
    Intersection(Box<SetExpr>, Box<SetExpr>),
}

impl SetExpr {
    /// `U \ inner`.
    pub fn complement(inner: SetExpr) -> Self {
        SetExpr::Complement(Box::new(inner))
    }

    /// `left ∪ right`.
    pub fn union(left: SetExpr, right: SetExpr) -> Self {
        SetExpr::Union(Box::new(left), Box::new(right))
    }

    /// `left ∩ right`.
    pub fn intersection(left: SetExpr, right: SetExpr) -> Self {
        SetExpr::Intersection(Box::new(left), Box::new(right))
    }

    /// Whether the expression is a bare operand.
    pub fn is_atom(&self) -> bool {
        matches!(self, SetExpr::Operand(_))
    }

    /// Evaluates the expression against concrete sets.
    pub fn eval(
        &self,
        universe: &FiniteSet,
        operands: &[&FiniteSet],
    ) -> Result<FiniteSet, SetLawError> {
        match self {
            SetExpr::Operand(idx) => operands.get(*idx).map(|set| (*set).clone()).ok_or_else(|| {
                SetLawError::InvalidInput(
                    ErrorInfo::new("operand-count", "expression refers to a missing operand")
                        .with_context("index", idx.to_string())
                        .with_context("operands", operands.len().to_string()),
                )
            }),
            SetExpr::Complement(inner) => {
                Ok(universe.difference(&inner.eval(universe, operands)?))
            }
            SetExpr::Union(left, right) => Ok(left
                .eval(universe, operands)?
                .union(&right.eval(universe, operands)?)),
            SetExpr::Intersection(left, right) => Ok(left
                .eval(universe, operands)?
                .intersection(&right.eval(universe, operands)?)),
        }
    }
}

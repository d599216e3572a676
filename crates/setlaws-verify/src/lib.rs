#![deny(missing_docs)]
#![doc = "Set-algebra identity verification, boundary validation and Euler relationship analysis."]

/// Catalogue driver producing verification reports.
pub mod catalogue;
/// YAML configuration schema for set systems.
pub mod config;
/// Canonical hashing helpers.
pub mod hash;
/// The individual identity operations.
pub mod identities;
/// Law catalogue and symbolic statements.
pub mod laws;
/// Policy definitions controlling validation strictness.
pub mod policies;
/// Pairwise Euler relationship analysis.
pub mod relations;
/// Aggregated verification reports and provenance types.
pub mod report;
/// Canonical JSON helpers.
pub mod serde;
/// Validated universe plus labelled subsets.
pub mod system;

pub use catalogue::{evaluate_catalogue, verify_system};
pub use config::{load_yaml, RangeSpec, SetSpec, SystemConfig};
pub use identities::{
    associative_intersection, associative_union, complement, de_morgan_intersection,
    de_morgan_union, distributive_intersection_over_union, distributive_union_over_intersection,
    evaluate, IdentityResult,
};
pub use laws::{Law, LawFamily, SetExpr};
pub use policies::{Policy, SubsetCheck};
pub use relations::{analyze_relations, classify, PairRelation, Relation, RelationReport};
pub use report::{VerificationProvenance, VerificationReport};
pub use system::{SetSystem, SubsetWarning};

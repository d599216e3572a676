#![deny(missing_docs)]
#![doc = "Finite sets, labels and the shared error surface for the setlaws verifier."]

pub mod element;
pub mod errors;
pub mod label;
pub mod provenance;
mod set;

pub use element::Element;
pub use errors::{ErrorInfo, SetLawError};
pub use label::{ensure_distinct_labels, NamedSet, SetLabel, MAX_LABEL_CHARS};
pub use provenance::SchemaVersion;
pub use set::{FiniteSet, MAX_RANGE_LEN};

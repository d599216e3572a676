use serde::{Deserialize, Serialize};

use crate::laws::Law;

/// How subsets that escape the universe are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubsetCheck {
    /// Reject the set system with an invalid-input error.
    Enforce,
    /// Record a warning in the report and continue.
    #[default]
    Warn,
}

/// Verification policy controlling validation strictness and law selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Policy {
    /// Subset-of-universe handling.
    #[serde(default)]
    pub subset_check: SubsetCheck,
    /// Laws to evaluate. Catalogue order is kept regardless of listing order.
    #[serde(default = "Policy::default_laws")]
    pub laws: Vec<Law>,
}

impl Policy {
    fn default_laws() -> Vec<Law> {
        Law::ALL.to_vec()
    }

    /// Default policy with subset enforcement switched on.
    pub fn enforcing() -> Self {
        Self {
            subset_check: SubsetCheck::Enforce,
            ..Self::default()
        }
    }

    /// Whether `law` is selected.
    pub fn enables(&self, law: Law) -> bool {
        self.laws.contains(&law)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            subset_check: SubsetCheck::default(),
            laws: Self::default_laws(),
        }
    }
}

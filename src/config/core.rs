use serde::{Deserialize, Serialize};

use super::weights::StateSpaceWeights;

/// Root configuration structure, read from `.complex-lint.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ComplexLintConfig {
    /// Heuristic cardinalities for the state-space estimator
    #[serde(default)]
    pub state_space: Option<StateSpaceWeights>,
}

impl ComplexLintConfig {
    pub fn weights(&self) -> StateSpaceWeights {
        self.state_space.unwrap_or_default()
    }
}

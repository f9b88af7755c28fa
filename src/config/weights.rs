use serde::{Deserialize, Serialize};

/// Heuristic cardinalities used by the state-space estimator.
///
/// These are ranking policy, not real value counts: an `i64` is not
/// ten values wide, it is simply weighted as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSpaceWeights {
    #[serde(default = "default_boolean")]
    pub boolean: u64,

    #[serde(default = "default_integer")]
    pub integer: u64,

    #[serde(default = "default_string")]
    pub string: u64,

    /// Multiplier standing in for the unbounded length of a sequence
    #[serde(default = "default_sequence_length")]
    pub sequence_length: u64,
}

impl Default for StateSpaceWeights {
    fn default() -> Self {
        Self {
            boolean: default_boolean(),
            integer: default_integer(),
            string: default_string(),
            sequence_length: default_sequence_length(),
        }
    }
}

impl StateSpaceWeights {
    /// Every weight must be at least 1 so no type can zero out a product.
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("boolean", self.boolean),
            ("integer", self.integer),
            ("string", self.string),
            ("sequence_length", self.sequence_length),
        ];

        match weights.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(format!("state_space.{name} must be at least 1")),
            None => Ok(()),
        }
    }
}

fn default_boolean() -> u64 {
    2
}

fn default_integer() -> u64 {
    10
}

fn default_string() -> u64 {
    10
}

fn default_sequence_length() -> u64 {
    100
}

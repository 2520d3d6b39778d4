//! Configurable rule variations.

use serde::{Deserialize, Serialize};

/// Which die may bear off a checker when the roll offers more than one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BearOffPolicy {
    /// Any die that legally bears the checker off may be used.
    #[default]
    Free,
    /// A bear-off with a die is refused while a larger remaining die would
    /// also bear off the same checker.
    LargestDieFirst,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub bear_off_policy: BearOffPolicy,
}

impl Rules {
    pub fn with_bear_off_policy(mut self, policy: BearOffPolicy) -> Self {
        self.bear_off_policy = policy;
        self
    }

    /// Reads rules from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

use serde::{Deserialize, Serialize};

use super::{EdgeAggregation, UnknownStopPolicy};

/// options for deriving a travel time graph from a feed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GraphBuildConfig {
    pub edge_aggregation: EdgeAggregation,
    pub unknown_stop_policy: UnknownStopPolicy,
    /// derive trip legs on the rayon thread pool
    pub parallelize: bool,
}

impl Default for GraphBuildConfig {
    fn default() -> Self {
        Self {
            edge_aggregation: EdgeAggregation::default(),
            unknown_stop_policy: UnknownStopPolicy::default(),
            parallelize: true,
        }
    }
}

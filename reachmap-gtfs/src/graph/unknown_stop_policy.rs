use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle edges that
/// reference a stop missing from stops.txt
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnknownStopPolicy {
    /// keep every edge derived from stop_times.txt
    #[default]
    Keep,
    /// drop edges whose source or destination stop is not a decoded stop
    Drop,
}

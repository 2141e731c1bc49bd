use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the three tables a feed load fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedResource {
    Stops,
    Trips,
    StopTimes,
}

impl FeedResource {
    pub const ALL: [FeedResource; 3] = [
        FeedResource::Stops,
        FeedResource::Trips,
        FeedResource::StopTimes,
    ];

    /// file name of this table relative to the feed root
    pub fn filename(&self) -> &'static str {
        match self {
            FeedResource::Stops => "stops.txt",
            FeedResource::Trips => "trips.txt",
            FeedResource::StopTimes => "stop_times.txt",
        }
    }
}

impl Display for FeedResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.filename())
    }
}

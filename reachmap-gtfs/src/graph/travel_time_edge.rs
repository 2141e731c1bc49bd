use serde::{Deserialize, Serialize};

/// a directed connection between two consecutive stops, weighted by the
/// travel time kept for that stop pair across all trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TravelTimeEdge {
    pub src_stop_id: String,
    pub dst_stop_id: String,
    /// always greater than zero
    pub travel_seconds: u32,
}

impl TravelTimeEdge {
    pub fn new(src_stop_id: &str, dst_stop_id: &str, travel_seconds: u32) -> Self {
        Self {
            src_stop_id: src_stop_id.to_string(),
            dst_stop_id: dst_stop_id.to_string(),
            travel_seconds,
        }
    }
}

use std::fmt::Display;

use super::TravelTimeGraph;
use crate::feed::TransitFeed;

/// counts describing one feed load and the graph derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphSummary {
    pub stops: usize,
    pub trips: usize,
    pub stop_time_events: usize,
    pub trips_without_stop_times: usize,
    /// stops with at least one outgoing edge
    pub source_stops: usize,
    pub edges: usize,
    /// edges whose source or destination is not a decoded stop
    pub unknown_stop_edges: usize,
    pub min_travel_seconds: Option<u32>,
    pub max_travel_seconds: Option<u32>,
}

impl GraphSummary {
    pub const HEADER: &'static str = "stops,trips,stop_time_events,trips_without_stop_times,source_stops,edges,unknown_stop_edges,min_travel_seconds,max_travel_seconds";

    pub fn new(feed: &TransitFeed, graph: &TravelTimeGraph) -> GraphSummary {
        let stops = feed.stop_lookup();
        let unknown_stop_edges = graph
            .iter_edges()
            .filter(|e| {
                !stops.contains_key(e.src_stop_id.as_str())
                    || !stops.contains_key(e.dst_stop_id.as_str())
            })
            .count();
        if unknown_stop_edges > 0 {
            log::warn!("{unknown_stop_edges} edges reference stops missing from stops.txt");
        }
        GraphSummary {
            stops: feed.stops.len(),
            trips: feed.trips.len(),
            stop_time_events: feed.stop_time_events.len(),
            trips_without_stop_times: feed.trips_without_stop_times(),
            source_stops: graph.n_stops(),
            edges: graph.n_edges(),
            unknown_stop_edges,
            min_travel_seconds: graph.iter_edges().map(|e| e.travel_seconds).min(),
            max_travel_seconds: graph.iter_edges().map(|e| e.travel_seconds).max(),
        }
    }
}

impl Display for GraphSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let min = self.min_travel_seconds.map(|s| s.to_string()).unwrap_or_default();
        let max = self.max_travel_seconds.map(|s| s.to_string()).unwrap_or_default();
        write!(
            f,
            "{},{},{},{},{},{},{},{},{}",
            self.stops,
            self.trips,
            self.stop_time_events,
            self.trips_without_stop_times,
            self.source_stops,
            self.edges,
            self.unknown_stop_edges,
            min,
            max
        )
    }
}

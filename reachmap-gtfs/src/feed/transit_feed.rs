use std::collections::{HashMap, HashSet};

use super::{
    decode_stop_time_events, decode_stops, decode_trips, read_feed, Stop, StopTimeEvent, Trip,
};
use crate::source::FeedText;

/// the decoded entities of one feed load. replaced wholesale by the next load.
#[derive(Debug, Clone, Default)]
pub struct TransitFeed {
    pub stops: Vec<Stop>,
    pub trips: Vec<Trip>,
    pub stop_time_events: Vec<StopTimeEvent>,
}

impl TransitFeed {
    /// parses and decodes the three feed tables. the tables are independent
    /// of each other and are decoded in parallel.
    pub fn from_text(text: &FeedText) -> TransitFeed {
        let (stops, (trips, stop_time_events)) = rayon::join(
            || decode_stops(&read_feed(&text.stops)),
            || {
                rayon::join(
                    || decode_trips(&read_feed(&text.trips)),
                    || decode_stop_time_events(&read_feed(&text.stop_times)),
                )
            },
        );
        log::info!(
            "decoded feed with {} stops, {} trips, {} stop times",
            stops.len(),
            trips.len(),
            stop_time_events.len()
        );
        TransitFeed {
            stops,
            trips,
            stop_time_events,
        }
    }

    /// stops keyed by id. when an id repeats, the last row wins.
    pub fn stop_lookup(&self) -> HashMap<&str, &Stop> {
        self.stops.iter().map(|s| (s.id.as_str(), s)).collect()
    }

    /// trips in trips.txt that never appear in stop_times.txt
    pub fn trips_without_stop_times(&self) -> usize {
        let scheduled: HashSet<&str> = self
            .stop_time_events
            .iter()
            .map(|e| e.trip_id.as_str())
            .collect();
        self.trips
            .iter()
            .filter(|t| !scheduled.contains(t.id.as_str()))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty() && self.trips.is_empty() && self.stop_time_events.is_empty()
    }
}

use std::collections::HashMap;

use rayon::prelude::*;

use super::{
    trip_stop_sequence::{group_by_trip, TripStopSequence},
    EdgeAggregation, GraphBuildConfig, TravelTimeAccumulator, TravelTimeEdge, TravelTimeGraph,
};
use crate::feed::StopTimeEvent;

/// folds stop-time events into a travel time graph.
///
/// events are grouped by trip and ordered by stop sequence. every pair of
/// consecutive stops with known, increasing times becomes a candidate edge,
/// and candidates for the same ordered stop pair are combined with the
/// configured [`EdgeAggregation`]. trips with fewer than two usable events
/// contribute nothing. no event is an error: bad rows only mean fewer edges.
///
/// with `parallelize` set, trips are processed on the rayon pool into
/// per-thread partial results that are merged before the graph is built.
pub fn build_travel_time_graph(
    events: &[StopTimeEvent],
    config: &GraphBuildConfig,
) -> TravelTimeGraph {
    let trips = group_by_trip(events);
    let candidates = if config.parallelize {
        trips
            .par_iter()
            .fold(EdgeCandidates::default, |mut acc, trip| {
                acc.add_trip(trip);
                acc
            })
            .reduce(EdgeCandidates::default, |mut a, b| {
                a.merge(b);
                a
            })
    } else {
        trips
            .iter()
            .fold(EdgeCandidates::default(), |mut acc, trip| {
                acc.add_trip(trip);
                acc
            })
    };
    log::info!(
        "{} of {} trips contributed {} stop pairs",
        candidates.contributing_trips,
        trips.len(),
        candidates.pairs.len()
    );
    candidates.into_graph(&config.edge_aggregation)
}

/// candidate edge observations for each ordered stop pair
#[derive(Default)]
struct EdgeCandidates<'a> {
    pairs: HashMap<(&'a str, &'a str), TravelTimeAccumulator>,
    contributing_trips: usize,
}

impl<'a> EdgeCandidates<'a> {
    fn add_trip(&mut self, trip: &TripStopSequence<'a>) {
        let mut n_legs = 0;
        for leg in trip.legs() {
            n_legs += 1;
            self.pairs
                .entry((leg.src_stop_id, leg.dst_stop_id))
                .and_modify(|acc| acc.add(leg.travel_seconds))
                .or_insert_with(|| TravelTimeAccumulator::new(leg.travel_seconds));
        }
        if n_legs > 0 {
            self.contributing_trips += 1;
        } else {
            log::trace!("trip {} has no usable legs", trip.trip_id);
        }
    }

    fn merge(&mut self, other: EdgeCandidates<'a>) {
        for (pair, acc) in other.pairs {
            self.pairs
                .entry(pair)
                .and_modify(|a| a.merge(&acc))
                .or_insert(acc);
        }
        self.contributing_trips += other.contributing_trips;
    }

    fn into_graph(self, aggregation: &EdgeAggregation) -> TravelTimeGraph {
        let edges = self.pairs.into_iter().map(|((src, dst), acc)| {
            TravelTimeEdge::new(src, dst, acc.finish(aggregation))
        });
        TravelTimeGraph::from_edges(edges)
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TravelTimeEdge;

/// stop-to-stop travel times keyed by source stop id.
///
/// only stops with at least one outgoing edge are keys; a missing key means
/// "no outgoing edges". each ordered stop pair appears at most once. a graph is
/// never modified after construction, a new feed load builds a new graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TravelTimeGraph {
    adjacency: BTreeMap<String, Vec<TravelTimeEdge>>,
}

impl TravelTimeGraph {
    /// builds a graph from a collection of edges. zero-second edges are
    /// discarded and a repeated stop pair keeps its smallest travel time.
    pub fn from_edges(edges: impl IntoIterator<Item = TravelTimeEdge>) -> TravelTimeGraph {
        let mut pairs: BTreeMap<String, BTreeMap<String, u32>> = BTreeMap::new();
        for edge in edges.into_iter().filter(|e| e.travel_seconds > 0) {
            let dsts = pairs.entry(edge.src_stop_id).or_default();
            dsts.entry(edge.dst_stop_id)
                .and_modify(|s| *s = (*s).min(edge.travel_seconds))
                .or_insert(edge.travel_seconds);
        }
        let adjacency = pairs
            .into_iter()
            .map(|(src, dsts)| {
                let edges = dsts
                    .into_iter()
                    .map(|(dst, travel_seconds)| TravelTimeEdge {
                        src_stop_id: src.clone(),
                        dst_stop_id: dst,
                        travel_seconds,
                    })
                    .collect();
                (src, edges)
            })
            .collect();
        TravelTimeGraph { adjacency }
    }

    /// outgoing edges of a stop, ordered by destination id. empty when the
    /// stop is not a key of this graph.
    pub fn outgoing(&self, stop_id: &str) -> &[TravelTimeEdge] {
        self.adjacency
            .get(stop_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn edge(&self, src_stop_id: &str, dst_stop_id: &str) -> Option<&TravelTimeEdge> {
        self.outgoing(src_stop_id)
            .iter()
            .find(|e| e.dst_stop_id == dst_stop_id)
    }

    pub fn travel_seconds(&self, src_stop_id: &str, dst_stop_id: &str) -> Option<u32> {
        self.edge(src_stop_id, dst_stop_id).map(|e| e.travel_seconds)
    }

    /// true if the stop has outgoing edges
    pub fn contains_stop(&self, stop_id: &str) -> bool {
        self.adjacency.contains_key(stop_id)
    }

    /// ids of the stops with outgoing edges, in sorted order
    pub fn stop_ids(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = &TravelTimeEdge> {
        self.adjacency.values().flatten()
    }

    /// a new graph holding only the edges accepted by the predicate.
    pub fn filter_edges(&self, predicate: impl Fn(&TravelTimeEdge) -> bool) -> TravelTimeGraph {
        TravelTimeGraph::from_edges(self.iter_edges().filter(|e| predicate(e)).cloned())
    }

    pub fn n_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// number of stops with outgoing edges
    pub fn n_stops(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

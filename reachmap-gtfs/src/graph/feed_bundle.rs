use std::{collections::HashSet, sync::Arc};

use super::{build_travel_time_graph, GraphBuildConfig, GraphSummary, TravelTimeGraph, UnknownStopPolicy};
use crate::{
    feed::TransitFeed,
    source::{fetch_feed_text, FeedSource, FetchError},
};

/// the result of one complete feed load: the decoded feed and the graph
/// derived from it.
#[derive(Debug, Clone)]
pub struct FeedBundle {
    pub feed: TransitFeed,
    pub graph: Arc<TravelTimeGraph>,
}

impl FeedBundle {
    /// derives the graph for an already decoded feed.
    pub fn new(feed: TransitFeed, config: &GraphBuildConfig) -> FeedBundle {
        let graph = build_travel_time_graph(&feed.stop_time_events, config);
        let graph = apply_unknown_stop_policy(graph, &feed, &config.unknown_stop_policy);
        if graph.is_empty() {
            log::warn!("graph built with 0 edges");
        } else {
            log::info!(
                "graph built with {} edges from {} stops",
                graph.n_edges(),
                graph.n_stops()
            );
        }
        FeedBundle {
            feed,
            graph: Arc::new(graph),
        }
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary::new(&self.feed, &self.graph)
    }
}

/// runs a full feed load: fetch the three tables, decode them and build
/// the graph. only transport failures are errors, so either a complete
/// bundle is returned or nothing is.
pub fn build_feed_bundle(
    source: &dyn FeedSource,
    config: &GraphBuildConfig,
) -> Result<FeedBundle, FetchError> {
    let text = fetch_feed_text(source)?;
    let feed = TransitFeed::from_text(&text);
    Ok(FeedBundle::new(feed, config))
}

fn apply_unknown_stop_policy(
    graph: TravelTimeGraph,
    feed: &TransitFeed,
    policy: &UnknownStopPolicy,
) -> TravelTimeGraph {
    match policy {
        UnknownStopPolicy::Keep => graph,
        UnknownStopPolicy::Drop => {
            let known: HashSet<&str> = feed.stops.iter().map(|s| s.id.as_str()).collect();
            let filtered = graph.filter_edges(|e| {
                known.contains(e.src_stop_id.as_str()) && known.contains(e.dst_stop_id.as_str())
            });
            let n_dropped = graph.n_edges() - filtered.n_edges();
            if n_dropped > 0 {
                log::warn!("dropped {n_dropped} edges referencing stops missing from stops.txt");
            }
            filtered
        }
    }
}

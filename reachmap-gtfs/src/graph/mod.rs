//! derivation of stop-to-stop travel time graphs from decoded feeds.
mod distance_ops;
mod edge_aggregation;
mod feed_bundle;
mod graph_build_config;
mod graph_builder;
mod graph_cache;
mod graph_summary;
mod graph_writer;
mod travel_time_edge;
mod travel_time_graph;
mod trip_stop_sequence;
mod unknown_stop_policy;

pub use distance_ops::haversine_meters;
pub use edge_aggregation::{EdgeAggregation, TravelTimeAccumulator};
pub use feed_bundle::{build_feed_bundle, FeedBundle};
pub use graph_build_config::GraphBuildConfig;
pub use graph_builder::build_travel_time_graph;
pub use graph_cache::{load_graph, CacheExpiry, GraphCache, GraphCacheKey};
pub use graph_summary::GraphSummary;
pub use graph_writer::{
    edge_rows, write_bundle, write_edge_rows, EdgeRow, GraphOutputFormat, GraphWriteError,
};
pub use travel_time_edge::TravelTimeEdge;
pub use travel_time_graph::TravelTimeGraph;
pub use trip_stop_sequence::{group_by_trip, TripLeg, TripStopSequence};
pub use unknown_stop_policy::UnknownStopPolicy;

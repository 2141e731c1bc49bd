//! file-based configuration of graph build runs.
mod build_configuration;
mod feed_source_config;

pub use build_configuration::BuildConfiguration;
pub use feed_source_config::FeedSourceConfig;

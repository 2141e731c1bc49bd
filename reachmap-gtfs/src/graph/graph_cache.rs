use std::{
    sync::{Arc, PoisonError, RwLock},
    time::{Duration, Instant},
};

use super::{build_feed_bundle, GraphBuildConfig, TravelTimeGraph};
use crate::source::{FeedSource, FetchError};

/// when a cached graph stops being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheExpiry {
    /// served until invalidated
    #[default]
    Never,
    /// served for this long after it was built
    After(Duration),
}

impl CacheExpiry {
    fn is_expired(&self, built_at: Instant, now: Instant) -> bool {
        match self {
            CacheExpiry::Never => false,
            CacheExpiry::After(ttl) => now.saturating_duration_since(built_at) >= *ttl,
        }
    }
}

/// identifies what a cached graph was built from: the feed location and the
/// build options. a graph is only served for an identical key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphCacheKey {
    pub source: String,
    pub config: GraphBuildConfig,
}

impl GraphCacheKey {
    pub fn new(source: &dyn FeedSource, config: &GraphBuildConfig) -> GraphCacheKey {
        GraphCacheKey {
            source: source.describe(),
            config: config.clone(),
        }
    }
}

struct CachedGraph {
    key: GraphCacheKey,
    graph: Arc<TravelTimeGraph>,
    built_at: Instant,
}

/// holds the most recently published graph for reuse across build calls.
///
/// a graph is only ever stored once it is complete, and replacing it swaps
/// one `Arc` for another, so readers see either the old or the new graph.
/// a lookup with a different key is a miss, and publishing under a new key
/// replaces the previous graph. the cache is owned by the caller and passed
/// to [`load_graph`].
pub struct GraphCache {
    expiry: CacheExpiry,
    entry: RwLock<Option<CachedGraph>>,
}

impl GraphCache {
    pub fn new(expiry: CacheExpiry) -> GraphCache {
        GraphCache {
            expiry,
            entry: RwLock::new(None),
        }
    }

    /// the graph cached for this key, unless it is missing or expired
    pub fn get(&self, key: &GraphCacheKey) -> Option<Arc<TravelTimeGraph>> {
        let entry = self.entry.read().unwrap_or_else(PoisonError::into_inner);
        entry
            .as_ref()
            .filter(|cached| cached.key == *key)
            .filter(|cached| !self.expiry.is_expired(cached.built_at, Instant::now()))
            .map(|cached| cached.graph.clone())
    }

    /// stores a complete graph, replacing any previous one.
    pub fn publish(&self, key: GraphCacheKey, graph: Arc<TravelTimeGraph>) {
        let mut entry = self.entry.write().unwrap_or_else(PoisonError::into_inner);
        *entry = Some(CachedGraph {
            key,
            graph,
            built_at: Instant::now(),
        });
    }

    pub fn invalidate(&self) {
        let mut entry = self.entry.write().unwrap_or_else(PoisonError::into_inner);
        *entry = None;
    }

    /// returns the graph cached for `key`, or runs `build` and publishes its
    /// result under `key`. a failed build leaves the cache as it was.
    pub fn get_or_try_build<E>(
        &self,
        key: GraphCacheKey,
        build: impl FnOnce() -> Result<Arc<TravelTimeGraph>, E>,
    ) -> Result<Arc<TravelTimeGraph>, E> {
        if let Some(graph) = self.get(&key) {
            log::debug!("serving cached travel time graph for {}", key.source);
            return Ok(graph);
        }
        let graph = build()?;
        self.publish(key, graph.clone());
        Ok(graph)
    }
}

/// loads the travel time graph of a feed, reusing the graph in `cache` when
/// it was built from the same source with the same options and has not
/// expired.
pub fn load_graph(
    source: &dyn FeedSource,
    config: &GraphBuildConfig,
    cache: Option<&GraphCache>,
) -> Result<Arc<TravelTimeGraph>, FetchError> {
    let build = || build_feed_bundle(source, config).map(|bundle| bundle.graph);
    match cache {
        None => build(),
        Some(c) => c.get_or_try_build(GraphCacheKey::new(source, config), build),
    }
}

#[cfg(test)]
mod test {
    use super::{load_graph, CacheExpiry, GraphCache, GraphCacheKey};
    use crate::graph::{EdgeAggregation, GraphBuildConfig, TravelTimeEdge, TravelTimeGraph};
    use crate::source::{DirectoryFeedSource, FeedResource, MemoryFeedSource};
    use std::{path::PathBuf, sync::Arc, time::Duration};

    const STOP_TIMES: &str = "trip_id,stop_id,stop_sequence,arrival_time,departure_time\n\
                              T1,A,1,08:00:00,08:00:00\n\
                              T1,B,2,08:05:00,08:05:00\n\
                              T2,A,1,09:00:00,09:00:00\n\
                              T2,B,2,09:04:40,09:04:40\n";

    fn key(source: &str) -> GraphCacheKey {
        GraphCacheKey {
            source: source.to_string(),
            config: GraphBuildConfig::default(),
        }
    }

    #[test]
    fn test_reuses_cached_graph() {
        let cache = GraphCache::new(CacheExpiry::Never);
        let source = MemoryFeedSource::new("", "", STOP_TIMES);
        let config = GraphBuildConfig::default();
        let first = load_graph(&source, &config, Some(&cache)).expect("load should succeed");

        // the cached graph is served even once the source can no longer be read
        let broken = source.without_table(FeedResource::StopTimes);
        let second = load_graph(&broken, &config, Some(&cache)).expect("cache should be used");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.travel_seconds("A", "B"), Some(280));
    }

    #[test]
    fn test_different_config_is_rebuilt() {
        let cache = GraphCache::new(CacheExpiry::Never);
        let source = MemoryFeedSource::new("", "", STOP_TIMES);
        let minimum = GraphBuildConfig::default();
        let mean = GraphBuildConfig {
            edge_aggregation: EdgeAggregation::Mean,
            ..Default::default()
        };
        let first = load_graph(&source, &minimum, Some(&cache)).expect("load should succeed");
        let second = load_graph(&source, &mean, Some(&cache)).expect("load should succeed");
        assert_eq!(first.travel_seconds("A", "B"), Some(280));
        assert_eq!(second.travel_seconds("A", "B"), Some(290));
        assert!(cache.get(&GraphCacheKey::new(&source, &minimum)).is_none());
        assert!(cache.get(&GraphCacheKey::new(&source, &mean)).is_some());
    }

    #[test]
    fn test_different_source_is_rebuilt() {
        let cache = GraphCache::new(CacheExpiry::Never);
        let config = GraphBuildConfig::default();
        let memory = MemoryFeedSource::new("", "", STOP_TIMES);
        load_graph(&memory, &config, Some(&cache)).expect("load should succeed");

        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("resources")
            .join("test_feed");
        let directory = DirectoryFeedSource::new(&dir);
        let graph = load_graph(&directory, &config, Some(&cache)).expect("load should succeed");
        assert_eq!(graph.travel_seconds("A", "B"), None);
        assert_eq!(graph.travel_seconds("GARE", "BONLIEU"), Some(300));
    }

    #[test]
    fn test_expired_graph_is_rebuilt() {
        let cache = GraphCache::new(CacheExpiry::After(Duration::ZERO));
        let source = MemoryFeedSource::new("", "", STOP_TIMES);
        let config = GraphBuildConfig::default();
        let first = load_graph(&source, &config, Some(&cache)).expect("load should succeed");
        assert!(cache.get(&GraphCacheKey::new(&source, &config)).is_none());
        let second = load_graph(&source, &config, Some(&cache)).expect("load should succeed");
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_failed_build_publishes_nothing() {
        let cache = GraphCache::new(CacheExpiry::Never);
        let graph = TravelTimeGraph::from_edges(vec![TravelTimeEdge::new("A", "B", 60)]);
        cache.publish(key("memory"), Arc::new(graph));
        cache.invalidate();
        assert!(cache.get(&key("memory")).is_none());

        let failed: Result<_, String> =
            cache.get_or_try_build(key("memory"), || Err(String::from("offline")));
        assert!(failed.is_err());
        assert!(cache.get(&key("memory")).is_none());

        let built = cache
            .get_or_try_build::<String>(key("memory"), || Ok(Arc::new(TravelTimeGraph::default())))
            .expect("build should succeed");
        assert!(built.is_empty());
        assert!(cache.get(&key("memory")).is_some());
        assert!(cache.get(&key("other")).is_none());
    }
}

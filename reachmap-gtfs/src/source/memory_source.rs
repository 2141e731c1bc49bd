use std::collections::HashMap;

use super::{FeedResource, FeedSource, FetchError};

/// feed tables already held in memory, e.g. text fetched by the caller.
#[derive(Debug, Clone, Default)]
pub struct MemoryFeedSource {
    tables: HashMap<FeedResource, String>,
}

impl MemoryFeedSource {
    pub fn new(stops: &str, trips: &str, stop_times: &str) -> Self {
        let tables = HashMap::from([
            (FeedResource::Stops, stops.to_string()),
            (FeedResource::Trips, trips.to_string()),
            (FeedResource::StopTimes, stop_times.to_string()),
        ]);
        Self { tables }
    }

    pub fn with_table(mut self, resource: FeedResource, text: &str) -> Self {
        self.tables.insert(resource, text.to_string());
        self
    }

    pub fn without_table(mut self, resource: FeedResource) -> Self {
        self.tables.remove(&resource);
        self
    }
}

impl FeedSource for MemoryFeedSource {
    fn fetch(&self, resource: FeedResource) -> Result<String, FetchError> {
        self.tables
            .get(&resource)
            .cloned()
            .ok_or_else(|| FetchError::MissingResource {
                resource,
                source_name: self.describe(),
            })
    }

    fn describe(&self) -> String {
        String::from("in-memory tables")
    }
}

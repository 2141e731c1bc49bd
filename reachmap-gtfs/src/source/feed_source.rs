use super::{FeedResource, FetchError};

/// something that can hand over the raw text of a feed table.
///
/// sources are shared across the threads that fetch the three tables of a
/// feed load concurrently.
pub trait FeedSource: Send + Sync {
    /// raw text of the requested table, or a transport error
    fn fetch(&self, resource: FeedResource) -> Result<String, FetchError>;

    /// human-readable location of this source, used in logging
    fn describe(&self) -> String;
}

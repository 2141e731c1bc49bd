//! fetching the raw text of feed tables from directories, zip archives,
//! web servers or memory.
mod directory_source;
mod feed_resource;
mod feed_source;
mod feed_text;
mod fetch_error;
mod http_source;
mod memory_source;
mod zip_source;

pub use directory_source::DirectoryFeedSource;
pub use feed_resource::FeedResource;
pub use feed_source::FeedSource;
pub use feed_text::{fetch_feed_text, FeedText};
pub use fetch_error::FetchError;
pub use http_source::HttpFeedSource;
pub use memory_source::MemoryFeedSource;
pub use zip_source::ZipFeedSource;

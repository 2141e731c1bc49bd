use super::FeedResource;

/// transport failures while fetching a feed resource. fatal to the feed load
/// that hit them and returned to the caller as-is; nothing here is retried.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("failure reading {resource} from '{path}': {source}")]
    Io {
        resource: FeedResource,
        path: String,
        source: std::io::Error,
    },
    #[error("failure building http client: {0}")]
    HttpClient(reqwest::Error),
    #[error("failure requesting {resource} from '{url}': {source}")]
    HttpRequest {
        resource: FeedResource,
        url: String,
        source: reqwest::Error,
    },
    #[error("GTFS fetch error: {status} for {resource} at '{url}'")]
    HttpStatus {
        resource: FeedResource,
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failure reading zip archive '{path}': {source}")]
    Archive {
        path: String,
        source: zip::result::ZipError,
    },
    #[error("{resource} not found in archive '{path}'")]
    MissingArchiveEntry {
        resource: FeedResource,
        path: String,
    },
    #[error("{resource} not provided by {source_name}")]
    MissingResource {
        resource: FeedResource,
        source_name: String,
    },
}

use std::time::Duration;

use reqwest::blocking::Client;

use super::{FeedResource, FeedSource, FetchError};

/// a feed published as individual files below a base URL, e.g.
/// `https://example.org/datasets/gtfs/sibra`.
///
/// a non-success response status is a transport error; there are no retries.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    base_url: String,
    client: Client,
}

impl HttpFeedSource {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(FetchError::HttpClient)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn url_for(&self, resource: FeedResource) -> String {
        format!("{}/{}", self.base_url, resource.filename())
    }
}

impl FeedSource for HttpFeedSource {
    fn fetch(&self, resource: FeedResource) -> Result<String, FetchError> {
        let url = self.url_for(resource);
        log::debug!("requesting {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::HttpRequest {
                resource,
                url: url.clone(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                resource,
                url,
                status,
            });
        }
        response
            .text()
            .map_err(|source| FetchError::HttpRequest {
                resource,
                url,
                source,
            })
    }

    fn describe(&self) -> String {
        format!("url '{}'", self.base_url)
    }
}

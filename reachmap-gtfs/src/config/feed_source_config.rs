use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    app::AppError,
    source::{DirectoryFeedSource, FeedSource, HttpFeedSource, ZipFeedSource},
};

/// where the three feed tables are read from.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedSourceConfig {
    /// a directory holding stops.txt, trips.txt and stop_times.txt
    Directory { path: PathBuf },
    /// a GTFS zip archive
    Zip { path: PathBuf },
    /// a web server exposing the tables under a common base URL
    Http {
        base_url: String,
        /// request timeout in human-readable form, such as "30s" or "2m"
        #[serde(default)]
        timeout: Option<String>,
    },
}

impl FeedSourceConfig {
    pub fn build(&self) -> Result<Box<dyn FeedSource>, AppError> {
        match self {
            FeedSourceConfig::Directory { path } => {
                if !path.is_dir() {
                    return Err(AppError::ConfigurationError(format!(
                        "feed directory {} does not exist",
                        path.display()
                    )));
                }
                Ok(Box::new(DirectoryFeedSource::new(path)))
            }
            FeedSourceConfig::Zip { path } => Ok(Box::new(ZipFeedSource::new(path))),
            FeedSourceConfig::Http { base_url, timeout } => {
                let timeout = timeout
                    .as_ref()
                    .map(|t| {
                        humantime::parse_duration(t).map_err(|e| {
                            AppError::ConfigurationError(format!("invalid timeout '{t}': {e}"))
                        })
                    })
                    .transpose()?;
                let source = HttpFeedSource::new(base_url, timeout)?;
                Ok(Box::new(source))
            }
        }
    }
}

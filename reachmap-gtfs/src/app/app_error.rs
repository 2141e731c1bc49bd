use crate::{graph::GraphWriteError, source::FetchError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure fetching feed: {source}")]
    FetchError {
        #[from]
        source: FetchError,
    },
    #[error("failure writing graph: {source}")]
    WriteError {
        #[from]
        source: GraphWriteError,
    },
    #[error("failure preparing output: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}

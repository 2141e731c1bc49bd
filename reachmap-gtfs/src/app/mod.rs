mod app_error;
mod cli;
mod operation;

pub use app_error::AppError;
pub use cli::ReachmapGtfsApp;
pub use operation::{GtfsOperation, SourceArgs};

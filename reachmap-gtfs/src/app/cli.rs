use super::GtfsOperation;
use clap::Parser;

/// command line tool for deriving stop-to-stop travel time graphs from GTFS feeds
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ReachmapGtfsApp {
    #[command(subcommand)]
    pub op: GtfsOperation,
}

//! reading and decoding of the tabular GTFS schedule files.
mod decode_error;
mod decode_ops;
mod feed_header;
mod feed_reader;
mod feed_record;
mod service_time;
mod stop;
mod stop_time_event;
mod transit_feed;
mod trip;

pub use decode_error::DecodeError;
pub use feed_header::FeedHeader;
pub use feed_reader::{read_feed, FeedReader};
pub use feed_record::FeedRecord;
pub use service_time::{format_service_seconds, parse_service_seconds};
pub use stop::{decode_stops, Stop};
pub use stop_time_event::{decode_stop_time_events, StopTimeEvent};
pub use transit_feed::TransitFeed;
pub use trip::{decode_trips, Trip};

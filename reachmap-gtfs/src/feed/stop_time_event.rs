use serde::{Deserialize, Serialize};

use super::{decode_ops, parse_service_seconds, DecodeError, FeedRecord};

/// one scheduled visit of a trip to a stop, from stop_times.txt. times are
/// seconds since the start of the operating day, None when the feed value
/// was empty or could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopTimeEvent {
    pub trip_id: String,
    pub stop_id: String,
    /// position within the trip. ordering is defined by this value, not by
    /// the row order of the feed.
    pub sequence: i64,
    pub arrival_seconds: Option<u32>,
    pub departure_seconds: Option<u32>,
}

impl StopTimeEvent {
    pub const TRIP_ID: &'static str = "trip_id";
    pub const STOP_ID: &'static str = "stop_id";
    pub const STOP_SEQUENCE: &'static str = "stop_sequence";
    pub const ARRIVAL_TIME: &'static str = "arrival_time";
    pub const DEPARTURE_TIME: &'static str = "departure_time";

    /// time the vehicle leaves this stop, falling back to its arrival time.
    pub fn departure_or_arrival(&self) -> Option<u32> {
        self.departure_seconds.or(self.arrival_seconds)
    }

    /// time the vehicle reaches this stop, falling back to its departure time.
    pub fn arrival_or_departure(&self) -> Option<u32> {
        self.arrival_seconds.or(self.departure_seconds)
    }
}

impl TryFrom<&FeedRecord> for StopTimeEvent {
    type Error = DecodeError;

    fn try_from(record: &FeedRecord) -> Result<Self, Self::Error> {
        let trip_id = decode_ops::required_text(record, Self::TRIP_ID)?;
        let stop_id = decode_ops::required_text(record, Self::STOP_ID)?;
        let sequence = decode_ops::integer(record, Self::STOP_SEQUENCE)?;
        Ok(StopTimeEvent {
            trip_id,
            stop_id,
            sequence,
            arrival_seconds: parse_service_seconds(record.get_or_empty(Self::ARRIVAL_TIME)),
            departure_seconds: parse_service_seconds(record.get_or_empty(Self::DEPARTURE_TIME)),
        })
    }
}

pub fn decode_stop_time_events<'a>(
    records: impl IntoIterator<Item = &'a FeedRecord>,
) -> Vec<StopTimeEvent> {
    decode_ops::decode_records(records, "stop time")
}

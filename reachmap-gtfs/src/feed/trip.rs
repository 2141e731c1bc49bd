use serde::{Deserialize, Serialize};

use super::{decode_ops, DecodeError, FeedRecord};

/// one scheduled run of a vehicle, from trips.txt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub route_id: String,
    /// service calendar of this trip. may be empty.
    pub service_id: String,
}

impl Trip {
    pub const TRIP_ID: &'static str = "trip_id";
    pub const ROUTE_ID: &'static str = "route_id";
    pub const SERVICE_ID: &'static str = "service_id";
}

impl TryFrom<&FeedRecord> for Trip {
    type Error = DecodeError;

    fn try_from(record: &FeedRecord) -> Result<Self, Self::Error> {
        Ok(Trip {
            id: decode_ops::required_text(record, Self::TRIP_ID)?,
            route_id: decode_ops::required_text(record, Self::ROUTE_ID)?,
            service_id: record.get_or_empty(Self::SERVICE_ID).to_string(),
        })
    }
}

pub fn decode_trips<'a>(records: impl IntoIterator<Item = &'a FeedRecord>) -> Vec<Trip> {
    decode_ops::decode_records(records, "trip")
}

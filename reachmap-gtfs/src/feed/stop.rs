use geo::Point;
use serde::{Deserialize, Serialize};

use super::{decode_ops, DecodeError, FeedRecord};

/// a boarding or alighting location from stops.txt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Stop {
    pub const STOP_ID: &'static str = "stop_id";
    pub const STOP_NAME: &'static str = "stop_name";
    pub const STOP_LAT: &'static str = "stop_lat";
    pub const STOP_LON: &'static str = "stop_lon";

    /// stop location as an x=lon, y=lat point
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl TryFrom<&FeedRecord> for Stop {
    type Error = DecodeError;

    fn try_from(record: &FeedRecord) -> Result<Self, Self::Error> {
        let id = decode_ops::required_text(record, Self::STOP_ID)?;
        let lat = decode_ops::finite_f64(record, Self::STOP_LAT)?;
        let lon = decode_ops::finite_f64(record, Self::STOP_LON)?;
        Ok(Stop {
            id,
            name: record.get_or_empty(Self::STOP_NAME).to_string(),
            lat,
            lon,
        })
    }
}

/// decodes stops.txt records, dropping any without an id or finite coordinates.
pub fn decode_stops<'a>(records: impl IntoIterator<Item = &'a FeedRecord>) -> Vec<Stop> {
    decode_ops::decode_records(records, "stop")
}

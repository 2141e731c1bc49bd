use indexmap::IndexMap;

use crate::feed::StopTimeEvent;

/// the stop-time events of one trip, prepared for edge derivation.
pub struct TripStopSequence<'a> {
    /// GTFS trip identifier
    pub trip_id: &'a str,
    /// events of this trip in ascending stop sequence. events sharing a
    /// sequence number keep their feed row order.
    events: Vec<&'a StopTimeEvent>,
}

/// travel between two consecutive stops of a single trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripLeg<'a> {
    pub src_stop_id: &'a str,
    pub dst_stop_id: &'a str,
    pub travel_seconds: u32,
}

impl<'a> TripStopSequence<'a> {
    pub fn new(trip_id: &'a str, mut events: Vec<&'a StopTimeEvent>) -> Self {
        // stable sort
        events.sort_by_key(|e| e.sequence);
        Self { trip_id, events }
    }

    pub fn events(&self) -> &[&'a StopTimeEvent] {
        &self.events
    }

    /// legs between each pair of consecutive events. a pair is skipped when
    /// either time is unknown or the travel time is not positive.
    pub fn legs(&self) -> impl Iterator<Item = TripLeg<'a>> + '_ {
        self.events
            .windows(2)
            .filter_map(|pair| TripLeg::between(pair[0], pair[1]))
    }
}

impl<'a> TripLeg<'a> {
    /// the leg from `src` to `dst`, leaving `src` at its departure (or
    /// arrival) time and reaching `dst` at its arrival (or departure) time.
    pub fn between(src: &'a StopTimeEvent, dst: &'a StopTimeEvent) -> Option<TripLeg<'a>> {
        let departure = src.departure_or_arrival()?;
        let arrival = dst.arrival_or_departure()?;
        let travel_seconds = arrival.checked_sub(departure).filter(|s| *s > 0)?;
        Some(TripLeg {
            src_stop_id: &src.stop_id,
            dst_stop_id: &dst.stop_id,
            travel_seconds,
        })
    }
}

/// groups events by trip, with trips in order of first appearance.
pub fn group_by_trip(events: &[StopTimeEvent]) -> Vec<TripStopSequence<'_>> {
    let mut by_trip: IndexMap<&str, Vec<&StopTimeEvent>> = IndexMap::new();
    for event in events.iter() {
        by_trip.entry(event.trip_id.as_str()).or_default().push(event);
    }
    by_trip
        .into_iter()
        .map(|(trip_id, trip_events)| TripStopSequence::new(trip_id, trip_events))
        .collect()
}

#[cfg(test)]
mod test {
    use super::{group_by_trip, TripLeg};
    use crate::feed::StopTimeEvent;

    fn event(trip: &str, stop: &str, seq: i64, arr: Option<u32>, dep: Option<u32>) -> StopTimeEvent {
        StopTimeEvent {
            trip_id: trip.to_string(),
            stop_id: stop.to_string(),
            sequence: seq,
            arrival_seconds: arr,
            departure_seconds: dep,
        }
    }

    #[test]
    fn test_orders_by_sequence_not_row() {
        let events = vec![
            event("T1", "C", 30, Some(300), Some(300)),
            event("T2", "X", 1, Some(0), Some(0)),
            event("T1", "A", 10, Some(100), Some(100)),
            event("T1", "B", 20, Some(200), Some(200)),
        ];
        let trips = group_by_trip(&events);
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].trip_id, "T1");
        let stops: Vec<&str> = trips[0].events().iter().map(|e| e.stop_id.as_str()).collect();
        assert_eq!(stops, vec!["A", "B", "C"]);
        assert_eq!(trips[1].legs().count(), 0);
    }

    #[test]
    fn test_equal_sequence_keeps_row_order() {
        let events = vec![
            event("T1", "B", 2, Some(200), Some(200)),
            event("T1", "A", 1, Some(100), Some(100)),
            event("T1", "B2", 2, Some(250), Some(250)),
        ];
        let trips = group_by_trip(&events);
        let stops: Vec<&str> = trips[0].events().iter().map(|e| e.stop_id.as_str()).collect();
        assert_eq!(stops, vec!["A", "B", "B2"]);
    }

    #[test]
    fn test_leg_time_fallbacks() {
        let a = event("T1", "A", 1, Some(100), None);
        let b = event("T1", "B", 2, None, Some(160));
        let leg = TripLeg::between(&a, &b).expect("both times resolve through fallbacks");
        assert_eq!(leg.travel_seconds, 60);

        let unknown = event("T1", "C", 3, None, None);
        assert_eq!(TripLeg::between(&b, &unknown), None);
        assert_eq!(TripLeg::between(&unknown, &a), None);
    }

    #[test]
    fn test_non_positive_legs_are_skipped() {
        let a = event("T1", "A", 1, Some(100), Some(100));
        let same = event("T1", "B", 2, Some(100), Some(100));
        let earlier = event("T1", "C", 3, Some(40), Some(40));
        assert_eq!(TripLeg::between(&a, &same), None);
        assert_eq!(TripLeg::between(&a, &earlier), None);
    }
}

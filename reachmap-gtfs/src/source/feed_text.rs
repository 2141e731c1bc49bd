use super::{FeedResource, FeedSource, FetchError};

/// raw text of the three tables of one feed load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedText {
    pub stops: String,
    pub trips: String,
    pub stop_times: String,
}

/// fetches stops, trips and stop times concurrently and waits for all three.
/// the first transport error, in table order, is returned unmodified.
pub fn fetch_feed_text(source: &dyn FeedSource) -> Result<FeedText, FetchError> {
    log::info!("fetching feed tables from {}", source.describe());
    let (stops, (trips, stop_times)) = rayon::join(
        || source.fetch(FeedResource::Stops),
        || {
            rayon::join(
                || source.fetch(FeedResource::Trips),
                || source.fetch(FeedResource::StopTimes),
            )
        },
    );
    Ok(FeedText {
        stops: stops?,
        trips: trips?,
        stop_times: stop_times?,
    })
}

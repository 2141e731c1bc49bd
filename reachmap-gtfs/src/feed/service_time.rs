//! conversion of GTFS clock times into seconds since the start of the
//! operating day. hours may run past 23 for trips that continue after
//! midnight on the same service day.
use itertools::Itertools;

/// parses a `HH:MM:SS` clock time into seconds since the start of the
/// operating day.
///
/// exactly three colon-separated components are required. component widths
/// are not checked, so `"07:5:00"` is read as 25500 and `"25:10:00"` as 90600.
/// a component may carry surrounding whitespace and a leading `+`, and an
/// empty component counts as zero, so `"08::00"` is 28800. returns None when
/// the whole value is empty, has another shape or overflows, and when a
/// component is anything but digits. negative and fractional components are
/// unknown rather than read as numbers.
pub fn parse_service_seconds(value: &str) -> Option<u32> {
    if value.is_empty() {
        return None;
    }
    let (hours, minutes, seconds) = value.split(':').collect_tuple()?;
    let hours = parse_component(hours)?;
    let minutes = parse_component(minutes)?;
    let seconds = parse_component(seconds)?;
    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// renders seconds since the start of the operating day as `HH:MM:SS`,
/// with hours past 23 left as-is.
pub fn format_service_seconds(seconds: u32) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

fn parse_component(component: &str) -> Option<u32> {
    let trimmed = component.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok()
}

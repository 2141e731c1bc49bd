use super::{DecodeError, FeedRecord};

/// decodes every record that passes validation, dropping the rest. the
/// number of dropped records is logged but never reported to the caller.
pub fn decode_records<'a, T, I>(records: I, entity: &str) -> Vec<T>
where
    I: IntoIterator<Item = &'a FeedRecord>,
    T: TryFrom<&'a FeedRecord, Error = DecodeError>,
{
    let mut dropped: usize = 0;
    let decoded: Vec<T> = records
        .into_iter()
        .filter_map(|record| match T::try_from(record) {
            Ok(value) => Some(value),
            Err(e) => {
                log::trace!("dropping {entity} record: {e}");
                dropped += 1;
                None
            }
        })
        .collect();
    if dropped > 0 {
        log::debug!("dropped {dropped} invalid {entity} records");
    }
    log::debug!("decoded {} {entity} records", decoded.len());
    decoded
}

/// a required text field, rejected when absent or empty.
pub fn required_text(record: &FeedRecord, field: &'static str) -> Result<String, DecodeError> {
    match record.get(field) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(DecodeError::MissingField(field)),
    }
}

/// a floating point field that must hold a finite number.
pub fn finite_f64(record: &FeedRecord, field: &'static str) -> Result<f64, DecodeError> {
    let raw = record.get_or_empty(field);
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| DecodeError::NonNumeric {
            field,
            value: raw.to_string(),
        })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DecodeError::NonFinite {
            field,
            value: raw.to_string(),
        })
    }
}

/// an integer field. integral decimals such as `1.0` are accepted, while
/// fractional values like `2.5` and empty values are rejected.
pub fn integer(record: &FeedRecord, field: &'static str) -> Result<i64, DecodeError> {
    let raw = record.get_or_empty(field);
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64)
        .map(|v| v as i64)
        .ok_or_else(|| DecodeError::NonNumeric {
            field,
            value: raw.to_string(),
        })
}

/// reasons a feed record is rejected while decoding schedule entities.
/// these never stop a feed load: the record is dropped and decoding continues.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("required field '{0}' is missing or empty")]
    MissingField(&'static str),
    #[error("field '{field}' has non-numeric value '{value}'")]
    NonNumeric { field: &'static str, value: String },
    #[error("field '{field}' has non-finite value '{value}'")]
    NonFinite { field: &'static str, value: String },
}

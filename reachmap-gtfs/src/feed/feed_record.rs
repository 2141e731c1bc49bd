use std::sync::Arc;

use super::FeedHeader;

/// one data row of a feed table, viewed as an ordered mapping from header
/// name to cell value.
#[derive(Debug, Clone)]
pub struct FeedRecord {
    header: Arc<FeedHeader>,
    values: Vec<String>,
}

impl FeedRecord {
    /// pairs a row of cells with its header. missing trailing cells are filled
    /// with empty strings and cells beyond the header width are discarded.
    pub fn new(header: Arc<FeedHeader>, mut values: Vec<String>) -> Self {
        values.resize(header.width(), String::new());
        Self { header, values }
    }

    /// value at the named column, or None if the table has no such column.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.header
            .index_of(name)
            .and_then(|idx| self.values.get(idx))
            .map(String::as_str)
    }

    /// value at the named column, treating an absent column as empty.
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn header(&self) -> &FeedHeader {
        &self.header
    }

    /// (name, value) pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header.columns().map(|(name, idx)| {
            let value = self.values.get(idx).map(String::as_str).unwrap_or_default();
            (name, value)
        })
    }

    pub fn len(&self) -> usize {
        self.header.len()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }
}

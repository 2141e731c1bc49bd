use indexmap::IndexMap;

/// the column names of a feed table, in the order they appear in the header row.
/// shared by every [`super::FeedRecord`] read from the same table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedHeader {
    /// header name to the column index it reads from. a name repeated in the
    /// header row keeps its first position but reads from its last column.
    columns: IndexMap<String, usize>,
    /// number of cells in the header row, including repeated names
    width: usize,
}

impl FeedHeader {
    pub fn new(cells: Vec<String>) -> Self {
        let width = cells.len();
        let mut columns = IndexMap::with_capacity(width);
        for (idx, cell) in cells.into_iter().enumerate() {
            columns.insert(cell.trim().to_string(), idx);
        }
        Self { columns, width }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// header names with the column index each one reads from
    pub fn columns(&self) -> impl Iterator<Item = (&str, usize)> {
        self.columns.iter().map(|(name, idx)| (name.as_str(), *idx))
    }

    /// number of distinct header names
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod test {
    use super::FeedHeader;

    #[test]
    fn test_header_cells_are_trimmed() {
        let header = FeedHeader::new(vec![" stop_id".into(), "stop_name ".into()]);
        assert_eq!(header.index_of("stop_id"), Some(0));
        assert_eq!(header.index_of("stop_name"), Some(1));
        assert_eq!(header.width(), 2);
    }

    #[test]
    fn test_repeated_name_reads_last_column() {
        let header = FeedHeader::new(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(header.len(), 2);
        assert_eq!(header.width(), 3);
        assert_eq!(header.index_of("a"), Some(2));
        let names: Vec<&str> = header.columns().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}

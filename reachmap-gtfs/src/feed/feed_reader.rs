use std::{str::Lines, sync::Arc};

use super::{FeedHeader, FeedRecord};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// reads the rows of a comma-separated feed table. the first non-empty line is
/// the header, every following non-empty line becomes a [`FeedRecord`].
///
/// lines are split before any quote handling, so a quoted region never spans
/// lines: an unterminated quote simply runs to the end of its line. malformed
/// quoting never produces an error.
///
/// the reader borrows the text and holds no other state, so a new reader over
/// the same text starts the parse over.
pub struct FeedReader<'a> {
    lines: Lines<'a>,
    header: Option<Arc<FeedHeader>>,
}

impl<'a> FeedReader<'a> {
    pub fn new(text: &'a str) -> FeedReader<'a> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let mut lines = text.lines();
        let header = lines
            .by_ref()
            .find(|line| !line.is_empty())
            .map(|line| Arc::new(FeedHeader::new(split_cells(line))));
        FeedReader { lines, header }
    }

    /// the header row, or None if the text contains no non-empty line.
    pub fn header(&self) -> Option<&FeedHeader> {
        self.header.as_deref()
    }
}

impl Iterator for FeedReader<'_> {
    type Item = FeedRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let header = self.header.as_ref()?;
        let line = self.lines.by_ref().find(|line| !line.is_empty())?;
        Some(FeedRecord::new(header.clone(), split_cells(line)))
    }
}

/// reads all records of a feed table in row order.
pub fn read_feed(text: &str) -> Vec<FeedRecord> {
    FeedReader::new(text).collect()
}

/// splits a single line into cells.
///
/// every `"` opens or closes a quoted region wherever it appears in a cell,
/// and is not part of the value. inside a quoted region a doubled quote is
/// one literal quote and a comma is kept. outside, a comma ends the cell.
/// so `x"y,z"w` is the single cell `xy,zw` and ` "p,q"` is ` p,q`.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells = vec![];
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    cells.push(current);
    cells
}

#[cfg(test)]
mod test {
    use super::{read_feed, FeedReader};

    fn cells(text: &str) -> Vec<Vec<String>> {
        read_feed(text)
            .iter()
            .map(|r| r.iter().map(|(_, v)| v.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_reads_records_in_row_order() {
        let text = "stop_id,stop_name\nA,Gare\nB,Centre\n";
        let records = read_feed(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("stop_id"), Some("A"));
        assert_eq!(records[0].get("stop_name"), Some("Gare"));
        assert_eq!(records[1].get("stop_id"), Some("B"));
        assert_eq!(records[1].get("missing"), None);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let text = "\r\n\nid,name\r\n\r\n1,one\r\n\n2,two\n\n";
        let records = read_feed(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("id"), Some("1"));
        assert_eq!(records[0].get("name"), Some("one"));
        assert_eq!(records[1].get("name"), Some("two"));
    }

    #[test]
    fn test_quoted_fields() {
        let text = "id,name\n1,\"Place de la Gare, quai 2\"\n2,\"le \"\"Pâquier\"\"\"\n";
        assert_eq!(
            cells(text),
            vec![
                vec!["1".to_string(), "Place de la Gare, quai 2".to_string()],
                vec!["2".to_string(), "le \"Pâquier\"".to_string()],
            ]
        );
    }

    #[test]
    fn test_short_and_long_rows() {
        let text = "a,b,c\n1\n1,2,3,4,5\n";
        assert_eq!(
            cells(text),
            vec![
                vec!["1".to_string(), "".to_string(), "".to_string()],
                vec!["1".to_string(), "2".to_string(), "3".to_string()],
            ]
        );
    }

    #[test]
    fn test_unterminated_quote_runs_to_end_of_line() {
        let text = "a,b\n1,\"open, still open\n2,closed\n";
        let records = read_feed(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("b"), Some("open, still open"));
        assert_eq!(records[1].get("a"), Some("2"));
        assert_eq!(records[1].get("b"), Some("closed"));
    }

    #[test]
    fn test_empty_and_header_only_text() {
        assert!(read_feed("").is_empty());
        assert!(read_feed("\n\r\n").is_empty());
        let reader = FeedReader::new("stop_id,stop_name\n");
        assert_eq!(reader.header().map(|h| h.len()), Some(2));
        assert_eq!(reader.count(), 0);
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let records = read_feed("\u{feff}stop_id\nA\n");
        assert_eq!(records[0].get("stop_id"), Some("A"));
    }

    #[test]
    fn test_rereading_same_text() {
        let text = "x\n1\n2\n";
        let first: Vec<_> = FeedReader::new(text).map(|r| r.get_or_empty("x").to_string()).collect();
        let second: Vec<_> = FeedReader::new(text).map(|r| r.get_or_empty("x").to_string()).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["1", "2"]);
    }

    #[test]
    fn test_quotes_inside_unquoted_cells() {
        let text = "a,b\n1,x\"y,z\"w\n2, \"p,q\"\n3,\"\"\n";
        assert_eq!(
            cells(text),
            vec![
                vec!["1".to_string(), "xy,zw".to_string()],
                vec!["2".to_string(), " p,q".to_string()],
                vec!["3".to_string(), "".to_string()],
            ]
        );
    }

    #[test]
    fn test_space_before_quoted_name() {
        let text = "stop_id,stop_name,stop_lat\nPAQUIER, \"Le Pâquier, Hôtel\",45.9\n";
        let records = read_feed(text);
        assert_eq!(records[0].get("stop_name"), Some(" Le Pâquier, Hôtel"));
        assert_eq!(records[0].get("stop_lat"), Some("45.9"));
    }

    #[test]
    fn test_reads_back_written_cells() {
        let rows = vec![
            vec!["S1", "Rue \"Sommeiller\", Annecy", "45.9"],
            vec!["S2", ",,", "\"\""],
            vec!["S3", "plain", ""],
        ];
        let mut writer = csv::WriterBuilder::new().from_writer(vec![]);
        writer.write_record(["stop_id", "stop_name", "stop_lat"]).unwrap();
        for row in rows.iter() {
            writer.write_record(row).unwrap();
        }
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let decoded = cells(&text);
        let expected: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect();
        assert_eq!(decoded, expected);
    }
}

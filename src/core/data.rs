//! Memory-efficient CSV table loader, column-oriented.
//!
//! No quoting or escaping support: the expected input is "header line plus
//! at least one data row" with comma-separated fields.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

use crate::core::{error::ChartError, impute::parse_cell};

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    RaggedRow { want: usize, got: usize },
    NoData,
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::RaggedRow { want, got } => {
                write!(f, "line {}: expected {} columns, got {}", self.line, want, got)
            }
            ParseErrorKind::NoData => write!(f, "file is empty or has no data rows"),
        }
    }
}
impl Error for ParseCsvError {}

// --- Table ---

/// Header names plus one cell vector per column, all the same length.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<String>>,
}

impl Table {
    #[inline]
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows (header excluded).
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[String]> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(&self.columns[idx])
    }

    /// Look up a column and check that every non-empty cell parses as a
    /// finite float.  The first offending cell is reported verbatim.
    pub fn numeric_column(&self, name: &str) -> Result<&[String], ChartError> {
        let cells = self.column(name).ok_or_else(|| ChartError::NoSuchColumn {
            name: name.to_string(),
        })?;
        for cell in cells {
            if !cell.is_empty() && parse_cell(cell.as_bytes()).is_err() {
                return Err(ChartError::NonNumericColumn {
                    name: name.to_string(),
                    text: cell.clone(),
                });
            }
        }
        Ok(cells)
    }
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

fn split_fields(buf: &[u8]) -> Vec<String> {
    buf.split(|&b| b == b',')
        .map(|f| String::from_utf8_lossy(trim(f)).into_owned())
        .collect()
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

pub fn read_table<R: Read>(src: R) -> Result<Table, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut headers: Option<Vec<String>> = None;
    let mut columns = Vec::<Vec<String>>::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if buf.is_empty() || buf[0] == b'#' {
            continue;
        }

        let fields = split_fields(&buf);
        match &headers {
            // first surviving line is the header
            None => {
                columns = vec![Vec::new(); fields.len()];
                headers = Some(fields);
            }
            Some(h) => {
                if fields.len() != h.len() {
                    return Err(ParseCsvError {
                        line: line_no,
                        kind: ParseErrorKind::RaggedRow {
                            want: h.len(),
                            got: fields.len(),
                        },
                    });
                }
                for (col, cell) in columns.iter_mut().zip(fields) {
                    col.push(cell);
                }
            }
        }
    }

    match headers {
        Some(headers) if columns.first().is_some_and(|c| !c.is_empty()) => {
            Ok(Table { headers, columns })
        }
        _ => Err(ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::NoData,
        }),
    }
}

pub fn read_table_from_path(path: &str) -> Result<Table, ParseCsvError> {
    if path == "-" {
        read_table(std::io::stdin())
    } else {
        use std::fs::File;
        read_table(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn table(text: &str) -> Table {
        read_table(Cursor::new(text)).expect("valid table")
    }

    #[test]
    fn header_and_rows_parse() {
        let t = table("name,age\nada,36\ngrace,\n");
        assert_eq!(t.headers(), ["name", "age"]);
        assert_eq!(t.rows(), 2);
        assert_eq!(t.column("age").unwrap(), ["36", ""]);
        assert_eq!(t.column("name").unwrap(), ["ada", "grace"]);
    }

    #[test]
    fn cells_are_trimmed() {
        let t = table("a, b\n 1 , 2 \n");
        assert_eq!(t.headers(), ["a", "b"]);
        assert_eq!(t.column("a").unwrap(), ["1"]);
        assert_eq!(t.column("b").unwrap(), ["2"]);
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        let t = table("# generated\n\nx\n1\n\n2\n");
        assert_eq!(t.rows(), 2);
        assert_eq!(t.column("x").unwrap(), ["1", "2"]);
    }

    #[test]
    fn unicode_minus_is_normalized() {
        let t = table("x\n\u{2212}3.5\n");
        assert_eq!(t.column("x").unwrap(), ["-3.5"]);
    }

    #[test]
    fn ragged_row_reports_line() {
        let err = read_table(Cursor::new("a,b\n1,2\n3\n")).unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(
            err.kind,
            ParseErrorKind::RaggedRow { want: 2, got: 1 }
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = read_table(Cursor::new("")).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::NoData));
    }

    #[test]
    fn header_without_rows_is_rejected() {
        let err = read_table(Cursor::new("a,b\n")).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::NoData));
    }

    #[test]
    fn unknown_column_is_reported() {
        let t = table("x\n1\n");
        assert!(matches!(
            t.numeric_column("y"),
            Err(ChartError::NoSuchColumn { .. })
        ));
    }

    #[test]
    fn numeric_column_rejects_text() {
        let t = table("x\n1\nhello\n");
        match t.numeric_column("x") {
            Err(ChartError::NonNumericColumn { name, text }) => {
                assert_eq!(name, "x");
                assert_eq!(text, "hello");
            }
            other => panic!("expected NonNumericColumn, got {other:?}"),
        }
    }

    #[test]
    fn numeric_column_accepts_empty_cells() {
        let t = table("x,y\n1,2\n,3\n");
        assert!(t.numeric_column("x").is_ok());
    }

    #[test]
    fn quoted_cells_are_plain_text() {
        // no quoting support: `""` is two literal characters, not empty
        let t = table("x\n1\n\"\"\n");
        assert!(t.numeric_column("x").is_err());
    }
}

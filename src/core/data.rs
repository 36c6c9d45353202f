//! Column-oriented CSV loader with zero-allocation float parsing.
//!
//! The first column is X; every further column is the Y values of one
//! series.  Empty fields become NaN, which breaks the plotted line there.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

// --- Public Table Struct ---
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CsvTable {
    /// Column names from the header row, if there was one.
    pub headers: Option<Vec<String>>,
    pub xs: Vec<f64>,
    /// One vector per Y column, each as long as `xs`.
    pub columns: Vec<Vec<f64>>,
}

impl CsvTable {
    /// Name for Y column `i`, falling back to `y{i+1}`.
    #[must_use]
    pub fn column_name(&self, i: usize) -> String {
        self.headers
            .as_ref()
            .and_then(|h| h.get(i + 1))
            .cloned()
            .unwrap_or_else(|| format!("y{}", i + 1))
    }
}

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadColumnCount { expected: usize, got: usize },
    BadFloat { column: usize, text: String },
    Empty,
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadColumnCount { expected, got } => {
                write!(
                    f,
                    "line {}: expected {expected} columns, got {got}",
                    self.line
                )
            }
            ParseErrorKind::BadFloat { column, text } => {
                write!(
                    f,
                    "line {}: invalid value '{}' in column {}",
                    self.line, text, column
                )
            }
            ParseErrorKind::Empty => f.write_str("no data rows (need an X column and at least one Y column)"),
        }
    }
}
impl Error for ParseCsvError {}

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

/// NaN / inf are accepted: they are meaningful to the plot.
#[inline]
fn parse_f64(bytes: &[u8], line: usize, column: usize) -> Result<f64, ParseCsvError> {
    if bytes.is_empty() {
        return Ok(f64::NAN);
    }
    lexical_core::parse::<f64>(bytes).map_err(|_| ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat {
            column,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    })
}

fn split_fields(buf: &[u8]) -> impl Iterator<Item = &[u8]> {
    buf.split(|&b| b == b',').map(trim)
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

pub fn read_csv<R: Read>(src: R) -> Result<CsvTable, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut table = CsvTable::default();
    let mut width: Option<usize> = None;
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
        if trim(&buf).is_empty() || buf[0] == b'#' {
            continue;
        }

        // simple header detection (non-numeric first field on the first row)
        if width.is_none() && table.headers.is_none() {
            let first = split_fields(&buf).next().unwrap_or(&[]);
            if lexical_core::parse::<f64>(first).is_err() {
                let names: Vec<String> = split_fields(&buf)
                    .map(|f| String::from_utf8_lossy(f).into_owned())
                    .collect();
                width = Some(names.len());
                table.headers = Some(names);
                continue;
            }
        }

        let got = split_fields(&buf).count();
        let expected = *width.get_or_insert(got);
        if got != expected || got < 2 {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount {
                    expected: expected.max(2),
                    got,
                },
            });
        }
        if table.columns.is_empty() {
            table.columns = vec![Vec::new(); expected - 1];
        }

        for (i, field) in split_fields(&buf).enumerate() {
            let v = parse_f64(field, line_no, i + 1)?;
            if i == 0 {
                table.xs.push(v);
            } else {
                table.columns[i - 1].push(v);
            }
        }
    }
    if table.xs.is_empty() {
        return Err(ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Empty,
        });
    }
    Ok(table)
}

pub fn read_csv_from_path(path: &str) -> Result<CsvTable, ParseCsvError> {
    if path == "-" {
        read_csv(std::io::stdin())
    } else {
        use std::fs::File;
        read_csv(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

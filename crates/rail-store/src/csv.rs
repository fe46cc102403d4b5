//! # CSV Line Framing
//!
//! Reads the data rows of a reservation CSV file and splits them into fields.
//!
//! The format is deliberately simple: no quoting, no escaping. The first line
//! is a header and is skipped unread. Fields are separated by `,`, so a comma
//! inside a train or passenger name shifts every later field.
//!
//! ```text
//!   1001,Express Delhi,100,97
//!   └┬─┘ └─────┬─────┘ └┬┘ └┬┘
//!   text()   text()  text() text()
//!
//!   BK7Q2MX09A,1001,3,Asha,03/14/2025 09:26:53
//!   └───┬────┘ └┬─┘ ┬ └┬─┘ └────────┬────────┘
//!     text()  text() ...          remainder()   (may contain commas)
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::IntErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{RowError, StoreError, StoreResult};

/// One data line of a CSV file with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,

    /// Line text for logging. Invalid UTF-8 is shown with replacement characters.
    pub content: String,

    valid_utf8: bool,
}

impl Row {
    fn decode(line: usize, bytes: &[u8]) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(text) => Row {
                line,
                content: text.to_string(),
                valid_utf8: true,
            },
            Err(_) => Row {
                line,
                content: String::from_utf8_lossy(bytes).into_owned(),
                valid_utf8: false,
            },
        }
    }

    /// Field reader over the line, or `InvalidEncoding` if it was not UTF-8.
    pub fn fields(&self) -> Result<FieldReader<'_>, RowError> {
        if !self.valid_utf8 {
            return Err(RowError::InvalidEncoding);
        }
        Ok(FieldReader::new(&self.content))
    }
}

/// Opens `path` and returns its data rows (header and blank lines dropped).
pub fn read_rows(path: &Path) -> StoreResult<Vec<Row>> {
    let file = File::open(path).map_err(|e| StoreError::io(path, "open", e))?;
    read_rows_from(BufReader::new(file), path)
}

/// Same as [`read_rows`] over any buffered reader; `path` is for errors only.
///
/// Lines are split on raw bytes, so a line that is not UTF-8 still becomes a
/// row and only fails when its fields are read.
pub fn read_rows_from<R: BufRead>(mut reader: R, path: &Path) -> StoreResult<Vec<Row>> {
    let mut rows = Vec::new();
    let mut buf = Vec::new();
    let mut line = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| StoreError::io(path, "read", e))?;
        if read == 0 {
            break;
        }
        line += 1;
        if line == 1 {
            continue;
        }

        let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        let row = Row::decode(line, bytes);
        if row.content.trim().is_empty() {
            debug!(path = %path.display(), line, "Skipping blank line");
            continue;
        }

        rows.push(row);
    }

    Ok(rows)
}

/// Sequential field reader over one row.
#[derive(Debug)]
pub struct FieldReader<'a> {
    rest: Option<&'a str>,
}

impl<'a> FieldReader<'a> {
    pub fn new(text: &'a str) -> Self {
        FieldReader { rest: Some(text) }
    }

    /// Next comma-terminated field.
    pub fn text(&mut self, field: &'static str) -> Result<&'a str, RowError> {
        let rest = self.rest.ok_or(RowError::MissingField { field })?;
        match rest.split_once(',') {
            Some((value, tail)) => {
                self.rest = Some(tail);
                Ok(value)
            }
            None => {
                self.rest = None;
                Ok(rest)
            }
        }
    }

    /// Next field parsed as a 32-bit signed integer, widened to `i64`.
    ///
    /// Surrounding spaces and a leading `+` or `-` are allowed. Digits that
    /// do not fit in 32 bits are `OutOfRange`.
    pub fn number(&mut self, field: &'static str) -> Result<i64, RowError> {
        let value = self.text(field)?;
        match value.trim().parse::<i32>() {
            Ok(number) => Ok(i64::from(number)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(RowError::OutOfRange {
                    field,
                    value: value.to_string(),
                }),
                _ => Err(RowError::NotNumeric {
                    field,
                    value: value.to_string(),
                }),
            },
        }
    }

    /// Everything left on the line, commas included. Empty if nothing is left.
    pub fn remainder(&mut self) -> &'a str {
        self.rest.take().unwrap_or("")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

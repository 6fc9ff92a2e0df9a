//! Text feed parsing.
//!
//! Expected input: a process count `n`, then `n` rows of four
//! whitespace-separated integers `AT BT PR PH`. Blank lines are skipped.
//! Any malformed line aborts the run with its line number and content; no
//! partial process set is ever returned.

use std::fmt;
use std::str::FromStr;

use crate::models::ProcessAttrs;

/// A parse failure pointing at the offending line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Failure category.
    pub kind: ParseErrorKind,
    /// 1-based line number in the feed; 0 when the feed ended early.
    pub line: usize,
    /// Offending line content; empty when the feed ended early.
    pub content: String,
}

/// Categories of parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The count line is missing or not a non-negative integer.
    InvalidCount,
    /// A row token is not an integer in range.
    InvalidInteger,
    /// A row does not have exactly four fields.
    WrongFieldCount,
    /// The feed ended before the declared number of rows.
    MissingRows {
        /// Declared process count.
        expected: usize,
        /// Rows actually present.
        found: usize,
    },
}

impl ParseError {
    fn new(kind: ParseErrorKind, line: usize, content: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            content: content.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::InvalidCount if self.content.is_empty() => {
                write!(f, "Input is missing the process count")
            }
            ParseErrorKind::InvalidCount => write!(
                f,
                "Line {}: '{}': expected a non-negative process count",
                self.line, self.content
            ),
            ParseErrorKind::InvalidInteger => write!(
                f,
                "Line {}: '{}': expected integer fields",
                self.line, self.content
            ),
            ParseErrorKind::WrongFieldCount => write!(
                f,
                "Line {}: '{}': expected 4 fields (AT BT PR PH)",
                self.line, self.content
            ),
            ParseErrorKind::MissingRows { expected, found } => write!(
                f,
                "Input ended after {found} of {expected} process rows"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a process feed.
///
/// Returns the attribute rows in input order; attribute range checks are
/// the registry's job, not the parser's. Content past the declared count
/// is ignored.
pub fn parse_processes(input: &str) -> Result<Vec<ProcessAttrs>, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (count_idx, count_line) = lines
        .next()
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidCount, 0, ""))?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidCount, count_idx + 1, count_line))?;

    let mut rows = Vec::with_capacity(count);
    for _ in 0..count {
        let (idx, line) = lines.next().ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::MissingRows {
                    expected: count,
                    found: rows.len(),
                },
                0,
                "",
            )
        })?;
        rows.push(parse_row(idx + 1, line)?);
    }

    Ok(rows)
}

fn parse_row(line_no: usize, line: &str) -> Result<ProcessAttrs, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(ParseError::new(
            ParseErrorKind::WrongFieldCount,
            line_no,
            line,
        ));
    }

    Ok(ProcessAttrs::new(
        parse_field(fields[0], line_no, line)?,
        parse_field(fields[1], line_no, line)?,
        parse_field(fields[2], line_no, line)?,
        parse_field(fields[3], line_no, line)?,
    ))
}

fn parse_field<T: FromStr>(token: &str, line_no: usize, line: &str) -> Result<T, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidInteger, line_no, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_documented_example() {
        let rows = parse_processes("3\n0 5 1 3\n1 3 2 1\n2 2 1 2\n").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ProcessAttrs::new(0, 5, 1, 3));
        assert_eq!(rows[2], ProcessAttrs::new(2, 2, 1, 2));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let rows = parse_processes("\n2\n\n0 5 1 3\n\n1 3 2 1\n\n").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_zero_count() {
        assert!(parse_processes("0\n").unwrap().is_empty());
    }

    #[test]
    fn test_empty_feed() {
        let err = parse_processes("").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidCount);
        assert_eq!(err.line, 0);
    }

    #[test]
    fn test_bad_count() {
        let err = parse_processes("three\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidCount);
        assert_eq!(err.line, 1);
        assert_eq!(err.content, "three");
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = parse_processes("-1\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidCount);
    }

    #[test]
    fn test_non_integer_token() {
        let err = parse_processes("1\n0 five 1 1\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidInteger);
        assert_eq!(err.line, 2);
        assert_eq!(err.content, "0 five 1 1");
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_processes("1\n0 5 1\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::WrongFieldCount);

        let err = parse_processes("1\n0 5 1 3 9\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::WrongFieldCount);
    }

    #[test]
    fn test_missing_rows() {
        let err = parse_processes("3\n0 5 1 3\n").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MissingRows {
                expected: 3,
                found: 1,
            }
        );
    }

    #[test]
    fn test_negative_attribute_values_parse() {
        // Range checks belong to validation; the parser accepts any integer.
        let rows = parse_processes("1\n-1 -4 -2 0\n").unwrap();
        assert_eq!(rows[0], ProcessAttrs::new(-1, -4, -2, 0));
    }

    #[test]
    fn test_extra_rows_ignored() {
        let rows = parse_processes("1\n0 5 1 3\n9 9 9 9\n").unwrap();
        assert_eq!(rows.len(), 1);
    }
}

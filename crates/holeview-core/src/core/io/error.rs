use crate::core::models::error::GeometryError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed description: {0}")]
    MalformedDescription(#[from] serde_json::Error),

    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },

    #[error(
        "Ragged table: line {line} has {found} columns, but the first row has {expected}"
    )]
    RaggedTable {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid geometry: {0}")]
    Geometry(#[from] GeometryError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("Invalid float in column {column} (value: '{value}')")]
    InvalidFloat { column: usize, value: String },
    #[error("Expected {expected} values, found {found}")]
    WrongTokenCount { expected: usize, found: usize },
}

/// Parses every whitespace-separated token of `line` as a float.
pub(crate) fn parse_floats(line: &str, line_num: usize) -> Result<Vec<f64>, FileError> {
    line.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<f64>().map_err(|_| FileError::Parse {
                line: line_num,
                kind: ParseErrorKind::InvalidFloat {
                    column: i + 1,
                    value: token.to_string(),
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_floats_accepts_leading_whitespace_and_exponents() {
        let values = parse_floats(" 1.5  -2 3e2", 1).unwrap();
        assert_eq!(values, vec![1.5, -2.0, 300.0]);
    }

    #[test]
    fn parse_floats_reports_line_and_column() {
        let err = parse_floats("1.0 abc", 4).unwrap_err();
        match err {
            FileError::Parse { line, kind } => {
                assert_eq!(line, 4);
                assert_eq!(
                    kind,
                    ParseErrorKind::InvalidFloat {
                        column: 2,
                        value: "abc".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

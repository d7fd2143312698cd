// src/data_input/text_parser.rs

use thiserror::Error;

use crate::data_input::dataset::{Dataset, RawRow, RawTable, RowSchema};

/// Errors that abort a parse. No partial dataset is produced on any of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no data provided")]
    EmptyInput,
    #[error("no data rows found (only comments or blank lines)")]
    NoDataRows,
    #[error("line {line}: expected {expected} columns but found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: unsupported column count {found} (expected 2 or 3)")]
    UnsupportedSchema { line: usize, found: usize },
}

/// Both views of a successful parse.
#[derive(Debug, Clone)]
pub struct ParsedData {
    pub raw: RawTable,
    pub numeric: Dataset,
}

/// Parses pasted text into the string-preserving table and the numeric
/// NaN-dropped dataset.
///
/// Lines whose first non-whitespace character is `#` are comments and take
/// no part in column-count inference. The first non-comment line fixes the
/// column count for the whole dataset; any later mismatch is a dataset-level
/// error. Cell-level coercion failures are not: they become NaN in the
/// numeric view, and rows containing any NaN are dropped from it while
/// remaining in the raw view.
pub fn parse(raw_text: &str) -> Result<ParsedData, ParseError> {
    if raw_text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut schema: Option<RowSchema> = None;
    let mut rows: Vec<RawRow> = Vec::new();

    for (index, line) in raw_text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let line_no = index + 1;

        let current_schema = match schema {
            Some(s) => s,
            None => {
                let s = RowSchema::from_column_count(tokens.len()).ok_or(
                    ParseError::UnsupportedSchema {
                        line: line_no,
                        found: tokens.len(),
                    },
                )?;
                schema = Some(s);
                s
            }
        };

        if tokens.len() != current_schema.column_count() {
            return Err(ParseError::ColumnCount {
                line: line_no,
                expected: current_schema.column_count(),
                found: tokens.len(),
            });
        }

        rows.push(RawRow {
            x: tokens[0].to_string(),
            y: tokens[1].to_string(),
            y_error: tokens.get(2).map(|t| (*t).to_string()),
        });
    }

    let schema = schema.ok_or(ParseError::NoDataRows)?;
    let raw = RawTable { schema, rows };
    let numeric = build_numeric(&raw);
    Ok(ParsedData { raw, numeric })
}

/// Coerces the raw table cell by cell and drops rows containing any NaN.
fn build_numeric(raw: &RawTable) -> Dataset {
    let mut x = Vec::with_capacity(raw.rows.len());
    let mut y = Vec::with_capacity(raw.rows.len());
    let mut y_error = match raw.schema {
        RowSchema::XyWithError => Some(Vec::with_capacity(raw.rows.len())),
        RowSchema::Xy => None,
    };

    for row in &raw.rows {
        let (xv, yv, ev) = row.coerced();
        let error_is_nan = matches!(ev, Some(e) if e.is_nan());
        if xv.is_nan() || yv.is_nan() || error_is_nan {
            continue;
        }
        x.push(xv);
        y.push(yv);
        if let (Some(out), Some(e)) = (y_error.as_mut(), ev) {
            out.push(e);
        }
    }

    Dataset { x, y, y_error }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_column_input_parses_fully() {
        let parsed = parse("1.0 2.1\n2.0 3.9\n3.0 6.1").unwrap();
        assert_eq!(parsed.raw.schema, RowSchema::Xy);
        assert_eq!(parsed.raw.rows.len(), 3);
        assert_eq!(parsed.numeric.len(), 3);
        assert_eq!(parsed.numeric.x, vec![1.0, 2.0, 3.0]);
        assert!(parsed.numeric.y_error.is_none());
    }

    #[test]
    fn three_column_input_keeps_error_column() {
        let parsed = parse("1 2 0.1\n2 4 0.2").unwrap();
        assert_eq!(parsed.raw.schema, RowSchema::XyWithError);
        assert_eq!(parsed.numeric.y_error, Some(vec![0.1, 0.2]));
    }

    #[test]
    fn empty_and_whitespace_input_is_rejected() {
        assert_eq!(parse("").unwrap_err(), ParseError::EmptyInput);
        assert_eq!(parse("   \n\t\n").unwrap_err(), ParseError::EmptyInput);
    }

    #[test]
    fn comment_only_input_has_no_rows() {
        assert_eq!(
            parse("# a comment\n# another").unwrap_err(),
            ParseError::NoDataRows
        );
    }

    #[test]
    fn comments_are_excluded_from_schema_inference() {
        let parsed = parse("# x y err header note\n1 2\n3 4").unwrap();
        assert_eq!(parsed.raw.schema, RowSchema::Xy);
        assert_eq!(parsed.numeric.len(), 2);
    }

    #[test]
    fn column_mismatch_is_a_dataset_error() {
        let err = parse("1 2\n3 4 5").unwrap_err();
        assert_eq!(
            err,
            ParseError::ColumnCount {
                line: 2,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn unsupported_first_line_width_is_rejected() {
        let err = parse("1 2 3 4").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnsupportedSchema { line: 1, found: 4 }
        );
    }

    #[test]
    fn non_numeric_cells_become_nan_and_are_dropped_from_numeric_view() {
        let parsed = parse("abc 2\n1 2\n3 oops").unwrap();
        assert_eq!(parsed.raw.rows.len(), 3);
        assert_eq!(parsed.numeric.len(), 1);
        assert_eq!(parsed.numeric.x, vec![1.0]);
        // raw view keeps the original tokens
        assert_eq!(parsed.raw.rows[0].x, "abc");
    }

    #[test]
    fn nan_error_cell_drops_the_row() {
        let parsed = parse("1 2 0.1\n2 4 bad").unwrap();
        assert_eq!(parsed.numeric.len(), 1);
        assert_eq!(parsed.numeric.y_error, Some(vec![0.1]));
    }

    #[test]
    fn all_valid_floats_produce_zero_nan_rows() {
        let text = "0.5 1e3\n-2 3.25\n7 -0.125";
        let parsed = parse(text).unwrap();
        assert_eq!(parsed.numeric.len(), 3);
        assert!(parsed.numeric.x.iter().all(|v| v.is_finite()));
        assert!(parsed.numeric.y.iter().all(|v| v.is_finite()));
    }
}

// src/data_input/text_parser.rs

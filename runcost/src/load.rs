//! Text loader for cost grids.
//!
//! The format is whitespace-separated integers: the row count `m`, the
//! column count `n`, then `m * n` non-negative cell costs in row-major
//! order. Line breaks carry no meaning. Anything after the last cell is
//! ignored.

use std::io::{self, Read};

use runcost_core::{CostGrid, GridError};
use thiserror::Error;

/// Errors raised while reading a grid.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A token is missing or is not an integer in range.
    #[error("expected {expected}, found {}", found_or_eof(.found))]
    InputFormat {
        expected: String,
        found: Option<String>,
    },
    /// A dimension is zero or negative.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: i64, cols: i64 },
    /// A cell cost is negative.
    #[error("negative cost {value} at row {row}, column {col}")]
    InvalidCost { row: usize, col: usize, value: i64 },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

fn found_or_eof(found: &Option<String>) -> String {
    match found {
        Some(tok) => format!("`{tok}`"),
        None => "end of input".to_string(),
    }
}

/// Parse a grid from text.
pub fn load_grid(text: &str) -> Result<CostGrid, LoadError> {
    let mut tokens = text.split_whitespace();

    let rows = read_int(&mut tokens, || "row count".to_string())?;
    let cols = read_int(&mut tokens, || "column count".to_string())?;
    if rows <= 0 || cols <= 0 {
        return Err(LoadError::InvalidDimension { rows, cols });
    }
    let (Ok(rows), Ok(cols)) = (usize::try_from(rows), usize::try_from(cols)) else {
        return Err(LoadError::InvalidDimension { rows, cols });
    };
    let Some(count) = rows.checked_mul(cols) else {
        return Err(GridError::TooLarge { rows, cols }.into());
    };

    // Capacity is capped so a bogus header cannot force a huge allocation
    // before the values are actually there.
    let mut values = Vec::with_capacity(count.min(1 << 16));
    for i in 0..count {
        let (row, col) = (i / cols, i % cols);
        let what = || format!("cost at row {row}, column {col}");
        let value = read_int(&mut tokens, what)?;
        if value < 0 {
            return Err(LoadError::InvalidCost { row, col, value });
        }
        let Ok(value) = u32::try_from(value) else {
            return Err(LoadError::InputFormat {
                expected: format!("{} of at most {}", what(), u32::MAX),
                found: Some(value.to_string()),
            });
        };
        values.push(value);
    }

    let trailing = tokens.count();
    if trailing > 0 {
        log::warn!("ignoring {trailing} trailing token(s) after the grid");
    }

    let grid = CostGrid::from_vec(rows, cols, values)?;
    log::debug!("loaded {rows}x{cols} grid");
    Ok(grid)
}

/// Read all of `reader` and parse it with [`load_grid`].
pub fn load_grid_from(mut reader: impl Read) -> Result<CostGrid, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_grid(&text)
}

fn read_int<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: impl FnOnce() -> String,
) -> Result<i64, LoadError> {
    let Some(tok) = tokens.next() else {
        return Err(LoadError::InputFormat {
            expected: what(),
            found: None,
        });
    };
    tok.parse().map_err(|_| LoadError::InputFormat {
        expected: what(),
        found: Some(tok.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use runcost_core::{Cost, Point};

    #[test]
    fn parses_rows_and_values() {
        let g = load_grid("2 3\n1 2 3\n4 5 6\n").unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.at(Point::at(1, 0)), Some(Cost(4)));
        assert_eq!(g.at(Point::at(0, 2)), Some(Cost(3)));
    }

    #[test]
    fn line_layout_is_irrelevant() {
        let a = load_grid("2 2 1 2 3 4").unwrap();
        let b = load_grid("2\n2\n1\t2\n\n3 4").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let g = load_grid("1 1 7 8 9").unwrap();
        assert_eq!(g.at(Point::ZERO), Some(Cost(7)));
    }

    #[test]
    fn missing_value() {
        let err = load_grid("2 2\n1 2 3").unwrap_err();
        match err {
            LoadError::InputFormat { expected, found } => {
                assert_eq!(expected, "cost at row 1, column 1");
                assert_eq!(found, None);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_header() {
        assert!(matches!(
            load_grid(""),
            Err(LoadError::InputFormat { found: None, .. })
        ));
        assert!(matches!(
            load_grid("3"),
            Err(LoadError::InputFormat { found: None, .. })
        ));
    }

    #[test]
    fn non_numeric_token() {
        let err = load_grid("2 2\n1 x 3 4").unwrap_err();
        assert_eq!(err.to_string(), "expected cost at row 0, column 1, found `x`");
        assert!(matches!(
            load_grid("two 2"),
            Err(LoadError::InputFormat { found: Some(ref t), .. }) if t == "two"
        ));
    }

    #[test]
    fn invalid_dimensions() {
        assert!(matches!(
            load_grid("0 3"),
            Err(LoadError::InvalidDimension { rows: 0, cols: 3 })
        ));
        assert!(matches!(
            load_grid("2 -1 1 1"),
            Err(LoadError::InvalidDimension { rows: 2, cols: -1 })
        ));
    }

    #[test]
    fn negative_cost() {
        let err = load_grid("2 2\n1 2\n-3 4").unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidCost {
                row: 1,
                col: 0,
                value: -3
            }
        ));
        assert_eq!(err.to_string(), "negative cost -3 at row 1, column 0");
    }

    #[test]
    fn cost_out_of_range() {
        let err = load_grid("1 1 4294967296").unwrap_err();
        assert!(matches!(err, LoadError::InputFormat { .. }));
        assert!(load_grid("1 1 4294967295").is_ok());
    }

    #[test]
    fn reads_from_reader() {
        let g = load_grid_from("1 2\n3 3\n".as_bytes()).unwrap();
        assert_eq!(g.cols(), 2);
    }
}

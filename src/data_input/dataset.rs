// src/data_input/dataset.rs

/// Column layout of the pasted table, decided once per parse from the first
/// non-comment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSchema {
    /// Two columns: x, y.
    Xy,
    /// Three columns: x, y, y-error.
    XyWithError,
}

impl RowSchema {
    pub fn from_column_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(Self::Xy),
            3 => Some(Self::XyWithError),
            _ => None,
        }
    }

    pub fn column_count(self) -> usize {
        match self {
            Self::Xy => 2,
            Self::XyWithError => 3,
        }
    }
}

/// One data row with the pasted tokens preserved verbatim, so the original
/// text stays available for preview and export.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub x: String,
    pub y: String,
    pub y_error: Option<String>,
}

impl RawRow {
    /// Numeric view of this row; cells that do not parse become NaN.
    pub fn coerced(&self) -> (f64, f64, Option<f64>) {
        (
            coerce(&self.x),
            coerce(&self.y),
            self.y_error.as_deref().map(coerce),
        )
    }
}

/// Coerce one cell to f64, mapping parse failures to NaN rather than erroring.
pub fn coerce(token: &str) -> f64 {
    token.parse::<f64>().unwrap_or(f64::NAN)
}

/// String-preserving view of every row that passed column-count validation.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub schema: RowSchema,
    pub rows: Vec<RawRow>,
}

/// Numeric, NaN-dropped view used for plotting and fitting. Recreated on
/// every parse and never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Present only for three-column input; same length as `x`.
    pub y_error: Option<Vec<f64>>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// src/data_input/dataset.rs

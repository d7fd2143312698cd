// src/export/latex.rs

use crate::data_input::dataset::{coerce, RawTable, RowSchema};

/// How numeric cells are rendered in the exported table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableNumberFormat {
    /// Three decimal places for cells that parse as numbers.
    Fixed3,
    /// The pasted tokens, verbatim.
    OriginalText,
}

/// Renders the raw table as a LaTeX tabular, one header row from the axis
/// labels and one data row per pasted row. Cells that never parsed as
/// numbers keep their original text under either format.
pub fn latex_table(
    raw: &RawTable,
    x_label: &str,
    y_label: &str,
    format: TableNumberFormat,
) -> String {
    let (column_spec, header) = match raw.schema {
        RowSchema::Xy => ("cc".to_string(), format!("{x_label} & {y_label} \\\\")),
        RowSchema::XyWithError => (
            "ccc".to_string(),
            format!("{x_label} & {y_label} & {y_label} error \\\\"),
        ),
    };

    let mut out = String::new();
    out.push_str(&format!("\\begin{{tabular}}{{{column_spec}}}\n"));
    out.push_str("\\hline\n");
    out.push_str(&header);
    out.push('\n');
    out.push_str("\\hline\n");

    for row in &raw.rows {
        let mut cells = vec![format_cell(&row.x, format), format_cell(&row.y, format)];
        if let Some(e) = &row.y_error {
            cells.push(format_cell(e, format));
        }
        out.push_str(&cells.join(" & "));
        out.push_str(" \\\\\n");
    }

    out.push_str("\\hline\n");
    out.push_str("\\end{tabular}\n");
    out
}

fn format_cell(token: &str, format: TableNumberFormat) -> String {
    match format {
        TableNumberFormat::OriginalText => token.to_string(),
        TableNumberFormat::Fixed3 => {
            let value = coerce(token);
            if value.is_nan() {
                token.to_string()
            } else {
                format!("{value:.3}")
            }
        }
    }
}


// src/export/latex.rs

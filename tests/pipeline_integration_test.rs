// tests/pipeline_integration_test.rs
// End-to-end checks of the paste-to-chart pipeline without touching disk.

use pasteplot::data_input::text_parser::{parse, ParseError};
use pasteplot::plot_functions::plot_chart::build_chart;
use pasteplot::settings::{AxisRangeMode, GraphSettings};
use pasteplot::types::AxisScaleMode;

#[test]
fn linear_paste_to_fit() {
    let parsed = parse("1 2\n2 4\n3 6\n4 8").unwrap();
    assert_eq!(parsed.numeric.len(), 4);

    let settings = GraphSettings {
        show_fitting: true,
        ..GraphSettings::default()
    };
    let (surface, report) = build_chart(&parsed.numeric, &settings);
    assert_eq!(surface.line_count(), 1);

    let fit = report.primary_fit.expect("primary fit requested");
    assert!(fit.is_ok());
    assert!((fit.b.unwrap() - 2.0).abs() < 1e-10);
    assert!(fit.intercept.unwrap().abs() < 1e-10);
    assert!((fit.r_squared.unwrap() - 1.0).abs() < 1e-10);
}

#[test]
fn comment_lines_and_loglog_fit() {
    // Roughly y = 10 x^-1 with a little noise.
    let parsed = parse("# measured decay\n1 10\n2 5\n3 3.3").unwrap();
    assert_eq!(parsed.numeric.len(), 3);

    let settings = GraphSettings {
        plot_type: AxisScaleMode::LogLog,
        show_fitting: true,
        ..GraphSettings::default()
    };
    let (_, report) = build_chart(&parsed.numeric, &settings);
    let fit = report.primary_fit.expect("primary fit requested");
    assert!(fit.is_ok());
    assert!((fit.b.unwrap() - (-1.0)).abs() < 0.05);
    assert!((fit.a.unwrap() - 10.0).abs() < 0.2);
}

#[test]
fn column_count_inferred_from_first_line() {
    // A non-numeric first line still fixes the column count.
    let parsed = parse("abc def\n1 2").unwrap();
    assert_eq!(parsed.raw.rows.len(), 2);
    assert_eq!(parsed.numeric.len(), 1);

    let err = parse("abc def\n1 2 3").unwrap_err();
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
fn force_origin_pipeline() {
    let parsed = parse("2 5\n3 7\n4 9").unwrap();
    let settings = GraphSettings {
        axis_range_mode: AxisRangeMode::ForceOrigin,
        show_fitting: true,
        ..GraphSettings::default()
    };
    let (surface, report) = build_chart(&parsed.numeric, &settings);

    assert!(report.final_xlim.0 <= 0.0);
    assert!(report.final_ylim.0 <= 0.0);
    assert!(report.final_xlim.1 >= 4.0);
    assert!(report.primary_fit.unwrap().is_ok());
    assert_eq!(surface.line_count(), 1);
}

#[test]
fn log_y_fit_failure_leaves_data_plot_intact() {
    let parsed = parse("1 -2\n2 -4\n3 -6").unwrap();
    let settings = GraphSettings {
        plot_type: AxisScaleMode::LogY,
        show_fitting: true,
        ..GraphSettings::default()
    };
    let (surface, report) = build_chart(&parsed.numeric, &settings);

    // No fit line, but the chart still carries a (filtered) data series and
    // usable fallback axis limits.
    assert_eq!(surface.line_count(), 0);
    let fit = report.primary_fit.unwrap();
    assert_eq!(
        fit.error.as_deref(),
        Some("positive Y values are required for a log-scale Y fit")
    );
    assert!(report.final_ylim.0 > 0.0);
    assert!(report.final_ylim.1 > report.final_ylim.0);
}

// tests/pipeline_integration_test.rs

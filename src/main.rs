// src/main.rs

use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use pasteplot::crate_version;
use pasteplot::data_input::text_parser::parse;
use pasteplot::export::latex::{latex_table, TableNumberFormat};
use pasteplot::plot_functions::plot_chart::render_chart;
use pasteplot::release::{
    acknowledge, latest_release_summary, load_state, should_notify, FileVersionStore,
};
use pasteplot::settings::GraphSettings;
use pasteplot::types::AxisScaleMode;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input_data.txt> [settings.json]", args[0]);
        std::process::exit(1);
    }
    let input_path = Path::new(&args[1]);
    let root_name = input_path.file_stem().unwrap_or_default().to_string_lossy();

    let settings = match args.get(2) {
        Some(settings_file) => {
            let text = fs::read_to_string(settings_file)?;
            GraphSettings::from_json(&text)?
        }
        None => GraphSettings::default(),
    };

    println!("pasteplot v{}", crate_version());

    // --- Update Notice ---
    let store = FileVersionStore::new(".pasteplot_version");
    let mut notice_state = load_state(&store);
    if should_notify(&notice_state, crate_version()) {
        if let Ok(notes) = fs::read_to_string("release_notes.md") {
            if let Some(summary) = latest_release_summary(&notes, crate_version()) {
                println!("What's new:\n{summary}");
            }
        }
        acknowledge(&mut notice_state, crate_version(), &store);
    }

    // --- Parse Input ---
    let input_text = fs::read_to_string(input_path)?;
    let parsed = match parse(&input_text) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "Parsed {} rows ({} usable for plotting).",
        parsed.raw.rows.len(),
        parsed.numeric.len()
    );

    // --- Render ---
    let png_path = format!("{root_name}.png");
    let svg_path = format!("{root_name}.svg");
    let report = render_chart(
        &parsed.numeric,
        &settings,
        Path::new(&png_path),
        Path::new(&svg_path),
    )?;
    println!("Chart written to {png_path} and {svg_path}");

    // --- Fit Report ---
    let transformed_note = if settings.plot_type == AxisScaleMode::Linear {
        ""
    } else {
        " (computed on the linearized data)"
    };
    for (name, fit) in [
        ("Fit", report.primary_fit.as_ref()),
        ("Range fit", report.secondary_fit.as_ref()),
    ] {
        let Some(fit) = fit else { continue };
        match &fit.error {
            Some(message) => println!("{name}: {message}"),
            None => {
                println!("{name}: {}", fit.equation_text);
                if let Some(r2) = fit.r_squared {
                    println!("{name}: R^2 = {r2:.4}{transformed_note}");
                }
            }
        }
    }

    // --- LaTeX Table Export ---
    let table = latex_table(
        &parsed.raw,
        &settings.x_label,
        &settings.y_label,
        TableNumberFormat::Fixed3,
    );
    let table_path = format!("{root_name}_table.tex");
    fs::write(&table_path, table)?;
    println!("LaTeX table written to {table_path}");

    Ok(())
}

// src/main.rs

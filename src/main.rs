//! NutriChoice: Food Nutrition Analytics CLI
//!
//! Loads a food nutrition CSV, applies user-supplied filters and renders
//! KPI metrics, rankings and descriptive statistics as terminal tables.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use cli::Cli;
use pipeline::{apply_filters, describe, load_dataset, summarize, top_n, FilterCriteria};
use report::{
    build_run_report, print_column_stats, print_macro_split, print_preview, print_ranking,
    print_summary, write_filtered_csv, write_json_report,
};
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    print_banner(env!("CARGO_PKG_VERSION"));

    // Load dataset (schema is validated as part of the load)
    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(&cli.input, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols) = df.shape();
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    print_step_time(step_start.elapsed());

    // Criteria: ranges seeded from the dataset, overridden by CLI bounds
    let criteria = cli.criteria(FilterCriteria::seeded_from(&df)?);
    anyhow::ensure!(
        criteria.calorie_range.0 <= criteria.calorie_range.1,
        "Calorie range is inverted: {} > {}",
        criteria.calorie_range.0,
        criteria.calorie_range.1
    );
    anyhow::ensure!(
        criteria.protein_range.0 <= criteria.protein_range.1,
        "Protein range is inverted: {} > {}",
        criteria.protein_range.0,
        criteria.protein_range.1
    );

    print_config(
        &cli.input,
        criteria.search_text.as_deref(),
        criteria.calorie_range,
        criteria.protein_range,
        cli.top_n,
    );

    // Step 1: Apply filters
    print_step_header(1, "Apply Filters");
    let step_start = Instant::now();
    let view = apply_filters(&df, &criteria)?;
    print_count("matching row(s)", view.height());
    if view.height() == 0 {
        print_info("No foods match the current criteria");
    } else {
        print_success("Filters applied");
    }
    print_step_time(step_start.elapsed());

    // Step 2: KPI summary
    print_step_header(2, "KPI Summary");
    let step_start = Instant::now();
    let summary = summarize(&view)?;
    print_summary(&summary);
    print_macro_split(&summary);
    print_step_time(step_start.elapsed());

    // Step 3: Top-N ranking
    print_step_header(3, &format!("Top {} by {}", cli.top_n, cli.rank_by));
    let step_start = Instant::now();
    let ranked = top_n(&view, &cli.rank_by, cli.top_n)?;
    print_ranking(&ranked, &cli.rank_by)?;
    print_step_time(step_start.elapsed());

    // Step 4: Descriptive statistics
    print_step_header(4, "Descriptive Statistics");
    let step_start = Instant::now();
    let stats = describe(&view)?;
    print_column_stats(&stats);
    print_step_time(step_start.elapsed());

    // Optional data preview
    if cli.show_table {
        print_step_header(5, "Filtered Data");
        print_preview(&view, cli.preview_rows)?;
    }

    // Optional exports
    if cli.export.is_some() || cli.report.is_some() {
        print_step_header(if cli.show_table { 6 } else { 5 }, "Export");

        if let Some(path) = &cli.export {
            let spinner = create_spinner("Writing filtered CSV...");
            write_filtered_csv(&view, path)?;
            finish_with_success(&spinner, &format!("Saved to {}", path.display()));
        }

        if let Some(path) = &cli.report {
            let report =
                build_run_report(&cli.input, &criteria, rows, view.height(), summary, stats);
            write_json_report(&report, path)?;
            print_success(&format!("Run report written to {}", path.display()));
        }
    }

    print_completion();
    Ok(())
}

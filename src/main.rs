//! woeiv: Weight of Evidence / Information Value scoring CLI
//!
//! Loads a tabular dataset, fills missing values, then scores every column
//! (except the target and an optional id column) against the binary target
//! and prints an IV ranking.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;
use rayon::prelude::*;

use cli::Cli;
use pipeline::{calculate_woe, fill_missing, load_dataset, WoeTable};
use report::{export_iv_scores, ExportParams, IvSummary};
use utils::{
    create_progress_bar, create_spinner, finish_with_success, print_banner, print_completion,
    print_config, print_step_header, print_success, print_warning, SAVE,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let start = Instant::now();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, &cli.target, cli.bins, cli.id_column.as_deref());

    // 0 means full table scan
    let schema_length = if cli.infer_schema_length == 0 {
        None
    } else {
        Some(cli.infer_schema_length)
    };

    // Step 1: Load dataset and fill missing values
    print_step_header(1, "Loading dataset");
    let spinner = create_spinner("Reading dataset...");
    let df = load_dataset(&cli.input, schema_length)?.collect()?;
    let df = fill_missing(&df)?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols) = df.shape();
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);

    // Verify target column exists before scoring anything
    let column_names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    if !column_names.contains(&cli.target) {
        anyhow::bail!(
            "Target column '{}' not found. Available columns: {}",
            cli.target,
            column_names.join(", ")
        );
    }
    if let Some(id) = &cli.id_column {
        if !column_names.contains(id) {
            print_warning(&format!("Id column '{}' not found; nothing to exclude", id));
        }
    }

    // Step 2: Score each feature column
    print_step_header(2, "Scoring columns (WoE / IV)");
    let feature_cols: Vec<String> = column_names
        .into_iter()
        .filter(|name| name != &cli.target && Some(name) != cli.id_column.as_ref())
        .collect();

    if feature_cols.is_empty() {
        anyhow::bail!("No feature columns left to score");
    }

    let pb = create_progress_bar(feature_cols.len() as u64, "   Calculating IV");
    let progress_counter = Arc::new(AtomicU64::new(0));

    let outcomes: Vec<(String, Result<WoeTable, pipeline::WoeError>)> = feature_cols
        .par_iter()
        .map(|name| {
            let result = calculate_woe(&df, name, &cli.target, cli.kind, cli.bins);
            let count = progress_counter.fetch_add(1, Ordering::Relaxed);
            pb.set_position(count + 1);
            (name.clone(), result)
        })
        .collect();
    pb.finish_and_clear();

    let mut tables: Vec<(String, WoeTable)> = Vec::new();
    let mut skipped: Vec<String> = Vec::new();
    for (name, result) in outcomes {
        match result {
            Ok(table) => tables.push((name, table)),
            Err(e) => {
                print_warning(&format!("Skipping '{}': {}", name, e));
                skipped.push(name);
            }
        }
    }
    print_success(&format!(
        "Scored {} columns ({} skipped)",
        tables.len(),
        skipped.len()
    ));

    // Step 3: Present the ranking
    let scores: Vec<(String, f64)> = tables
        .iter()
        .map(|(name, table)| (name.clone(), table.iv()))
        .collect();
    let summary = IvSummary::new(scores, skipped.clone());
    summary.display();

    // Optional JSON export
    if let Some(output) = &cli.output {
        let input_file = cli.input.display().to_string();
        let params = ExportParams {
            input_file: &input_file,
            target_column: &cli.target,
            id_column: cli.id_column.as_deref(),
            category_count: cli.bins,
        };
        export_iv_scores(&tables, &skipped, output, &params)?;
        println!("    {} Scores exported to {}", SAVE, output.display());
    }

    println!(
        "\n    {}",
        style(format!("Finished in {:.2?}", start.elapsed())).dim()
    );
    print_completion();

    Ok(())
}

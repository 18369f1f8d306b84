//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::ColumnKind;

/// woeiv - Score dataset columns with Weight of Evidence / Information Value
#[derive(Parser, Debug)]
#[command(name = "woeiv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Binary target column name (values must be 0/1)
    #[arg(short, long)]
    pub target: String,

    /// Id column to exclude from scoring (e.g. a customer identifier)
    #[arg(long)]
    pub id_column: Option<String>,

    /// Number of equal-width buckets for continuous columns
    #[arg(short = 'b', long, default_value = "10")]
    pub bins: usize,

    /// Force every scored column to be treated as categorical or continuous.
    /// When omitted, float-typed columns are treated as continuous and
    /// everything else as categorical.
    #[arg(short = 'k', long)]
    pub kind: Option<ColumnKind>,

    /// Output path for a JSON report of all WoE tables and IV scores
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of rows to scan when inferring CSV column types
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

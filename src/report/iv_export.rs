//! IV scoring export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::WoeTable;
use crate::report::IvStrength;

/// Metadata about the scoring run
#[derive(Serialize)]
pub struct ScoringMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// woeiv version
    pub woeiv_version: String,
    /// Input file path
    pub input_file: String,
    /// Target column name
    pub target_column: String,
    /// Id column excluded from scoring (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_column: Option<String>,
    /// Number of equal-width buckets for continuous columns
    pub category_count: usize,
}

/// A single column's scoring result
#[derive(Serialize)]
pub struct IvExportEntry {
    /// Column name
    pub column: String,
    /// Information Value score
    pub iv: f64,
    /// Strength band for the IV score
    pub strength: IvStrength,
    /// Full per-category WoE table
    pub woe_table: WoeTable,
}

/// Complete scoring export with metadata
#[derive(Serialize)]
pub struct IvScoringExport {
    /// Metadata about the scoring run
    pub metadata: ScoringMetadata,
    /// Scored columns, ranked by IV descending
    pub columns: Vec<IvExportEntry>,
    /// Columns whose IV could not be computed
    pub skipped: Vec<String>,
}

/// Parameters for the scoring export
pub struct ExportParams<'a> {
    pub input_file: &'a str,
    pub target_column: &'a str,
    pub id_column: Option<&'a str>,
    pub category_count: usize,
}

/// Export scoring results to a JSON file
pub fn export_iv_scores(
    results: &[(String, WoeTable)],
    skipped: &[String],
    output_path: &Path,
    params: &ExportParams,
) -> Result<()> {
    let mut columns: Vec<IvExportEntry> = results
        .iter()
        .map(|(name, table)| {
            let iv = table.iv();
            IvExportEntry {
                column: name.clone(),
                iv,
                strength: IvStrength::classify(iv),
                woe_table: table.clone(),
            }
        })
        .collect();
    columns.sort_by(|a, b| b.iv.partial_cmp(&a.iv).unwrap_or(std::cmp::Ordering::Equal));

    let export = IvScoringExport {
        metadata: ScoringMetadata {
            timestamp: Utc::now().to_rfc3339(),
            woeiv_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            target_column: params.target_column.to_string(),
            id_column: params.id_column.map(|s| s.to_string()),
            category_count: params.category_count,
        },
        columns,
        skipped: skipped.to_vec(),
    };

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize IV scores to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write IV scores to {}", output_path.display()))?;

    Ok(())
}

//! Dataset loader for CSV and Parquet files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Load a dataset from a file (CSV or Parquet based on extension)
pub fn load_dataset(path: &Path, infer_schema_length: Option<usize>) -> Result<LazyFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let lf = match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(infer_schema_length)
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, parquet",
            extension
        ),
    };

    Ok(lf)
}

/// Fill missing values so the WoE core sees a pre-cleaned dataset.
///
/// Numeric nulls become 0 and string nulls become the empty string. The core
/// rejects nulls outright, so the driver runs this once after loading.
pub fn fill_missing(df: &DataFrame) -> Result<DataFrame> {
    let mut filled = df.clone();

    for name in df.get_column_names_owned() {
        let col = df.column(name.as_str())?;
        if col.null_count() == 0 {
            continue;
        }

        let series = col.as_materialized_series();
        let replaced = if col.dtype().is_primitive_numeric() {
            series.fill_null(FillNullStrategy::Zero)?
        } else if matches!(col.dtype(), DataType::String) {
            let empty = Series::new(name.clone(), vec![""; series.len()]);
            series.zip_with(&series.is_not_null(), &empty)?
        } else {
            // Other dtypes are left as-is; the scoring core reports the nulls
            continue;
        };

        filled.replace(name.as_str(), replaced)?;
    }

    Ok(filled)
}

/// Get column names without collecting the full dataset
pub fn get_column_names(path: &Path) -> Result<Vec<String>> {
    let mut lf = load_dataset(path, None)?;
    let schema = lf
        .collect_schema()
        .with_context(|| format!("Failed to read schema from {}", path.display()))?;
    Ok(schema.iter_names().map(|n| n.to_string()).collect())
}

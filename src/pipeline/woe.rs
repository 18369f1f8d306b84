//! Weight of Evidence (WoE) and Information Value (IV) calculation
//!
//! Scores how predictive an independent variable is of a binary target.
//! Continuous columns are first bucketed with equal-width binning, then each
//! category's class-conditional distribution is turned into a WoE value and
//! an IV contribution.

use std::collections::HashMap;

use console::style;
use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;

use super::binning::encode_continuous_column;

/// Tolerance when checking that a float-typed target holds 0/1 values
const BINARY_TOLERANCE: f64 = 1e-9;

/// Errors raised by the WoE calculation
///
/// The calculator surfaces these; only [`calculate_iv`] absorbs them.
#[derive(Debug, Error)]
pub enum WoeError {
    #[error("Column '{name}' not found in dataset")]
    ColumnNotFound { name: String },

    #[error("Target column '{name}' must be binary (0/1). Found {count} distinct values: {values:?}")]
    NonBinaryTarget {
        name: String,
        count: usize,
        values: Vec<String>,
    },

    #[error("Column '{name}' cannot be treated as continuous: it contains non-numeric values")]
    NonNumeric { name: String },

    #[error("Target column '{name}' does not contain two classes ({goods} goods, {bads} bads)")]
    DegenerateTarget {
        name: String,
        goods: u64,
        bads: u64,
    },

    #[error("Column '{name}' contains null values; fill or drop them before scoring")]
    NullValues { name: String },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// How the independent variable should be treated
///
/// Replaces dtype sniffing with an explicit choice. When the caller passes
/// `None`, treatment is inferred once: float-typed columns are Continuous,
/// everything else is Categorical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnKind {
    Categorical,
    Continuous,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Categorical => write!(f, "categorical"),
            ColumnKind::Continuous => write!(f, "continuous"),
        }
    }
}

impl std::str::FromStr for ColumnKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "categorical" => Ok(ColumnKind::Categorical),
            "continuous" => Ok(ColumnKind::Continuous),
            _ => Err(format!(
                "Unknown column kind: '{}'. Use 'categorical' or 'continuous'.",
                s
            )),
        }
    }
}

/// Per-category WoE statistics
///
/// Zero-count policy: a category with zero goods has `goods_percentage` 0 and
/// WoE of negative infinity; zero bads gives positive infinity. The infinity
/// is the documented sentinel for "WoE undefined in this category" - it is
/// deliberately not smoothed away, so a degenerate cell stays visible.
#[derive(Debug, Clone, Serialize)]
pub struct WoeRow {
    /// Category value (natural value, or a `cat_N` bucket label)
    pub category: String,
    /// Count of rows with target = 0 in this category
    pub goods_count: u64,
    /// Count of rows with target = 1 in this category
    pub bads_count: u64,
    /// goods_count / total_goods
    pub goods_percentage: f64,
    /// bads_count / total_bads
    pub bads_percentage: f64,
    /// ln(goods_percentage / bads_percentage)
    pub woe: f64,
    /// woe * (goods_percentage - bads_percentage)
    pub iv: f64,
}

/// Complete WoE table for a single independent variable
#[derive(Debug, Clone, Serialize)]
pub struct WoeTable {
    /// Per-category rows, in the order categories first appear in the column
    pub rows: Vec<WoeRow>,
    /// Total rows with target = 0 across the dataset
    pub total_goods: u64,
    /// Total rows with target = 1 across the dataset
    pub total_bads: u64,
}

impl WoeTable {
    /// Information Value: sum of all per-category IV contributions
    pub fn iv(&self) -> f64 {
        self.rows.iter().map(|r| r.iv).sum()
    }
}

/// Calculate the WoE table of an independent variable against a binary target.
///
/// Continuous columns (explicit via `kind`, or inferred from a float dtype)
/// are bucketed into `category_count` equal-width bins first. The input
/// DataFrame is never modified; binning happens on a local copy of the
/// column values.
///
/// # Errors
/// - [`WoeError::DegenerateTarget`] if the target holds only one class
/// - [`WoeError::NonBinaryTarget`] if the target is not 0/1
/// - [`WoeError::NullValues`] if either column contains nulls (the core
///   expects a pre-cleaned dataset)
pub fn calculate_woe(
    df: &DataFrame,
    independent_var: &str,
    dependent_var: &str,
    kind: Option<ColumnKind>,
    category_count: usize,
) -> Result<WoeTable, WoeError> {
    let targets = binary_target_values(df, dependent_var)?;

    let total_bads: u64 = targets.iter().map(|&t| t as u64).sum();
    let total_goods: u64 = targets.len() as u64 - total_bads;

    if total_goods == 0 || total_bads == 0 {
        return Err(WoeError::DegenerateTarget {
            name: dependent_var.to_string(),
            goods: total_goods,
            bads: total_bads,
        });
    }

    let categories = category_values(df, independent_var, kind, category_count)?;

    // Group counts per category, keeping first-encounter order
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, (u64, u64)> = HashMap::new();

    for (category, &target) in categories.iter().zip(targets.iter()) {
        let entry = counts.entry(category.clone()).or_insert_with(|| {
            order.push(category.clone());
            (0, 0)
        });
        if target == 1 {
            entry.1 += 1;
        } else {
            entry.0 += 1;
        }
    }

    let rows = order
        .into_iter()
        .map(|category| {
            let (goods_count, bads_count) = counts[&category];
            let goods_percentage = goods_count as f64 / total_goods as f64;
            let bads_percentage = bads_count as f64 / total_bads as f64;
            let woe = (goods_percentage / bads_percentage).ln();
            let iv = woe * (goods_percentage - bads_percentage);

            WoeRow {
                category,
                goods_count,
                bads_count,
                goods_percentage,
                bads_percentage,
                woe,
                iv,
            }
        })
        .collect();

    Ok(WoeTable {
        rows,
        total_goods,
        total_bads,
    })
}

/// Calculate the Information Value of an independent variable.
///
/// Sums the per-category IV contributions from [`calculate_woe`]. Any
/// failure (including a degenerate target) is logged as a styled warning on
/// stderr and `None` is returned - absent means "could not be computed" and
/// must never be read as an IV of zero.
pub fn calculate_iv(
    df: &DataFrame,
    independent_var: &str,
    dependent_var: &str,
    kind: Option<ColumnKind>,
    category_count: usize,
) -> Option<f64> {
    match calculate_woe(df, independent_var, dependent_var, kind, category_count) {
        Ok(table) => Some(table.iv()),
        Err(e) => {
            eprintln!(
                "    {} Skipping '{}': {}",
                style("⚠").yellow().bold(),
                independent_var,
                e
            );
            None
        }
    }
}

/// Extract and validate the binary target column as 0/1 values
fn binary_target_values(df: &DataFrame, dependent_var: &str) -> Result<Vec<i32>, WoeError> {
    let target_col = df
        .column(dependent_var)
        .map_err(|_| WoeError::ColumnNotFound {
            name: dependent_var.to_string(),
        })?;

    if target_col.null_count() > 0 {
        return Err(WoeError::NullValues {
            name: dependent_var.to_string(),
        });
    }

    let float_col = target_col.cast(&DataType::Float64)?;

    // A cast that manufactures nulls means values that are not numeric at
    // all (e.g. a stray string in the target) - reject, never read past them
    if float_col.null_count() > 0 {
        return Err(non_binary_target(target_col, dependent_var));
    }

    let values = float_col.f64()?;
    let mut targets = Vec::with_capacity(values.len());

    for v in values.into_no_null_iter() {
        if (v - 0.0).abs() < BINARY_TOLERANCE {
            targets.push(0);
        } else if (v - 1.0).abs() < BINARY_TOLERANCE {
            targets.push(1);
        } else {
            return Err(non_binary_target(target_col, dependent_var));
        }
    }

    Ok(targets)
}

/// Build a NonBinaryTarget error listing the column's distinct raw values
fn non_binary_target(col: &Column, dependent_var: &str) -> WoeError {
    let mut values: Vec<String> = col
        .unique()
        .and_then(|u| u.cast(&DataType::String))
        .ok()
        .and_then(|u| {
            u.str()
                .map(|ca| ca.into_iter().flatten().map(str::to_string).collect())
                .ok()
        })
        .unwrap_or_default();
    values.sort();

    WoeError::NonBinaryTarget {
        name: dependent_var.to_string(),
        count: values.len(),
        values,
    }
}

/// Resolve the independent column into category labels.
///
/// Treatment: explicit `kind` wins; otherwise float dtypes are Continuous
/// and everything else (integers, strings) is Categorical.
fn category_values(
    df: &DataFrame,
    independent_var: &str,
    kind: Option<ColumnKind>,
    category_count: usize,
) -> Result<Vec<String>, WoeError> {
    let col = df
        .column(independent_var)
        .map_err(|_| WoeError::ColumnNotFound {
            name: independent_var.to_string(),
        })?;

    if col.null_count() > 0 {
        return Err(WoeError::NullValues {
            name: independent_var.to_string(),
        });
    }

    let resolved = kind.unwrap_or(match col.dtype() {
        DataType::Float32 | DataType::Float64 => ColumnKind::Continuous,
        _ => ColumnKind::Categorical,
    });

    match resolved {
        ColumnKind::Continuous => {
            let float_col = col.cast(&DataType::Float64)?;
            // Nulls appearing here were manufactured by the cast, so the
            // column holds values that cannot be bucketed numerically
            if float_col.null_count() > 0 {
                return Err(WoeError::NonNumeric {
                    name: independent_var.to_string(),
                });
            }
            let values: Vec<f64> = float_col.f64()?.into_no_null_iter().collect();
            Ok(encode_continuous_column(&values, category_count))
        }
        ColumnKind::Categorical => {
            let string_col = col.cast(&DataType::String)?;
            Ok(string_col
                .str()?
                .into_no_null_iter()
                .map(|s| s.to_string())
                .collect())
        }
    }
}

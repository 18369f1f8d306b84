//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a test DataFrame with known scoring characteristics
///
/// - `target`: binary target column (0/1)
/// - `score`: continuous feature cleanly separating the classes
/// - `segment`: categorical feature with mixed classes per level
/// - `noise`: continuous feature with no relationship to the target
pub fn create_test_dataframe() -> DataFrame {
    df! {
        "target" => [0i32, 0, 0, 0, 0, 1, 1, 1, 1, 1],
        "score" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        "segment" => ["A", "A", "B", "B", "A", "B", "A", "B", "A", "B"],
        "noise" => [5.0f64, 1.0, 9.0, 3.0, 7.0, 2.0, 8.0, 4.0, 6.0, 10.0],
    }
    .unwrap()
}

/// Create a larger random DataFrame for stress tests
pub fn create_large_test_dataframe(rows: usize, cols: usize) -> DataFrame {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let mut columns: Vec<Column> = Vec::with_capacity(cols + 1);

    let target: Vec<i32> = (0..rows).map(|_| rng.gen_range(0..2)).collect();
    columns.push(Column::new("target".into(), target));

    for i in 0..cols {
        let values: Vec<f64> = (0..rows).map(|_| rng.gen::<f64>()).collect();
        columns.push(Column::new(format!("feature_{}", i).into(), values));
    }

    DataFrame::new(columns).unwrap()
}

/// Write a small CSV dataset to a temp directory, returning (dir, path).
///
/// Keep the TempDir alive for as long as the file is needed.
pub fn write_test_csv() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    std::fs::write(
        &path,
        "customer_id,segment,balance,target\n\
         1,A,10.5,0\n\
         2,A,20.0,0\n\
         3,B,90.5,1\n\
         4,B,85.0,1\n\
         5,A,15.0,0\n\
         6,B,95.5,1\n\
         7,A,30.0,1\n\
         8,B,60.0,0\n",
    )
    .unwrap();
    (dir, path)
}

//! Tabular I/O for sample dumps and tally inputs (CSV or Parquet, chosen by extension).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Csv,
    Parquet,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Format::Csv),
        Some(ext) if ext.eq_ignore_ascii_case("parquet") => Ok(Format::Parquet),
        _ => bail!("unsupported table format: {} (want .csv or .parquet)", path.display()),
    }
}

/// Write `values` as a single-column table at `path`. Returns the row count.
pub fn write_values(path: &Path, column: &str, values: &[f64]) -> Result<usize> {
    let format = format_of(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut df = df!(column => values)?;
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        Format::Csv => {
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Format::Parquet => {
            ParquetWriter::new(&mut file)
                .finish(&mut df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }
    Ok(df.height())
}

/// Read one column from a table as display strings. Nulls read as `"null"`.
pub fn read_column_strings(path: &Path, column: &str) -> Result<Vec<String>> {
    let lf = match format_of(path)? {
        Format::Csv => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Format::Parquet => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
    };
    let df = lf
        .select([col(column)])
        .collect()
        .with_context(|| format!("reading column {column:?} from {}", path.display()))?;
    let series = df.column(column)?.cast(&DataType::String)?;
    let out = series
        .str()?
        .into_iter()
        .map(|v| v.unwrap_or("null").to_string())
        .collect();
    Ok(out)
}

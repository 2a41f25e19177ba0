//! Tabular IO: primer tables in, classified reads out.
//!
//! The primer table is a headered CSV or TSV whose `Primers` column holds
//! the ordered pattern list; the delimiter follows the file extension. The
//! output table carries one row per classified read in the order produced by
//! the sorter, columns `Description`, `Sequences`, `primer_number`.

use std::collections::BTreeMap;
use std::path::Path;

use polars::prelude::*;

use crate::error::{PrimersortError, Result};
use crate::primer::PrimerSet;
use crate::record::ClassifiedRead;

/// Accepted extensions for primer and output tables, for error messages.
pub const TABLE_EXTENSIONS: &str = ".csv or .tsv";

/// `true` if the path carries a recognized tabular-text extension.
pub fn has_table_extension<P: AsRef<Path>>(path: P) -> bool {
    matches!(
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref(),
        Some("csv") | Some("tsv")
    )
}

fn delimiter_for(path: &Path) -> u8 {
    if path.extension().map(|e| e.eq_ignore_ascii_case("tsv")).unwrap_or(false) {
        b'\t'
    } else {
        b','
    }
}

/// Load the ordered primer list from the `Primers` column and compile it.
///
/// Empty cells are skipped; any other cell must compile as a start-anchored
/// pattern or the whole load fails.
pub fn load_primers<P: AsRef<Path>>(path: P) -> Result<PrimerSet> {
    let p = path.as_ref();
    let ctx = |source| PrimersortError::Table { path: p.display().to_string(), source };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter_for(p))
        .from_path(p)
        .map_err(ctx)?;
    let col = rdr
        .headers()
        .map_err(ctx)?
        .iter()
        .position(|h| h == "Primers")
        .ok_or_else(|| PrimersortError::MissingPrimersColumn { path: p.display().to_string() })?;

    let mut primers = Vec::new();
    for rec in rdr.records() {
        let row = rec.map_err(ctx)?;
        if let Some(value) = row.get(col) {
            if !value.is_empty() {
                primers.push(value.to_string());
            }
        }
    }
    PrimerSet::compile(primers)
}

/// Write classified reads as `Description,Sequences,primer_number` rows, in
/// the order given.
pub fn write_classified<P: AsRef<Path>>(path: P, reads: &[ClassifiedRead]) -> Result<()> {
    let p = path.as_ref();
    let ctx = |source| PrimersortError::Table { path: p.display().to_string(), source };

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter_for(p))
        .from_path(p)
        .map_err(ctx)?;
    wtr.write_record(["Description", "Sequences", "primer_number"]).map_err(ctx)?;
    for r in reads {
        let idx = r.primer_index.to_string();
        wtr.write_record([r.description.as_str(), r.sequence.as_str(), idx.as_str()])
            .map_err(ctx)?;
    }
    wtr.flush().map_err(|e| ctx(csv::Error::from(e)))?;
    Ok(())
}

/// Per-primer read tally, ascending by `primer_number` (so the unmatched
/// `-1` bucket leads, matching the row order of the output table).
pub fn tally_dataframe(reads: &[ClassifiedRead]) -> PolarsResult<DataFrame> {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    for r in reads {
        *counts.entry(r.primer_index).or_insert(0) += 1;
    }
    let indices: Vec<i32> = counts.keys().copied().collect();
    let reads_n: Vec<u64> = counts.values().copied().collect();
    df!(
        "primer_number" => indices,
        "reads"         => reads_n,
    )
}

//! Read loading for **FASTQ / FASTQ.GZ / plain-text FASTQ**.
//!
//! Parsing goes through `needletail`, which sniffs the on-disk format and
//! decompresses gzip transparently, so a `.txt` file holding FASTQ text
//! loads the same way a `.fastq` file does. The whole file is materialized
//! into memory: classification and sorting operate on the full batch.
//!
//! Extension policy lives here too so the CLI and the tests share one
//! definition of what a reads path may look like.

use std::path::Path;

use needletail::parse_fastx_file;

use crate::error::{PrimersortError, Result};
use crate::record::ReadRecord;

/// Accepted extensions for a reads path, for error messages.
pub const READS_EXTENSIONS: &str = ".fastq/.fq (optionally .gz) or .txt";

/// `true` if the path carries a recognized reads-file extension.
pub fn has_reads_extension<P: AsRef<Path>>(path: P) -> bool {
    let name = path
        .as_ref()
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    name.ends_with(".fastq.gz")
        || name.ends_with(".fq.gz")
        || name.ends_with(".fastq")
        || name.ends_with(".fq")
        || name.ends_with(".txt")
}

/// Load every record of a reads file as `(description, sequence)` pairs.
///
/// The description is the full header line (identifier plus comment), the
/// sequence the literal basecall string. Parse failures abort the load; no
/// partially-read batch is returned.
pub fn load_reads<P: AsRef<Path>>(path: P) -> Result<Vec<ReadRecord>> {
    let p = path.as_ref();
    let ctx = |source| PrimersortError::ReadInput { path: p.display().to_string(), source };

    let mut reader = parse_fastx_file(p).map_err(ctx)?;
    let mut reads = Vec::new();
    while let Some(record) = reader.next() {
        let rec = record.map_err(ctx)?;
        let description = String::from_utf8_lossy(rec.id()).to_string();
        let sequence = String::from_utf8_lossy(&rec.seq()).to_string();
        reads.push(ReadRecord { description, sequence });
    }
    Ok(reads)
}

#![forbid(unsafe_code)]
//! # primersort
//!
//! Sort sequencing reads by the **first primer pattern matching their
//! prefix**. Reads come from a FASTQ file (plain, gzipped, or FASTQ text in
//! a `.txt`), primers from the `Primers` column of a CSV/TSV table, and the
//! result is a CSV of the same reads reordered by primer index.
//!
//! ## Semantics
//! - Each primer is compiled once as a regex anchored at position 0, so a
//!   literal primer behaves as a plain prefix test and the first matching
//!   primer wins.
//! - Reads no primer matches get index `-1` and lead the ascending output
//!   order; ties keep their input order (stable sort).
//! - A pattern that fails to compile aborts the load rather than silently
//!   matching nothing.
//!
//! ## Examples
//! ```rust
//! use primersort::{classify_and_sort, PrimerSet, ReadRecord};
//!
//! let primers = PrimerSet::compile(["AC", "GT"]).unwrap();
//! assert_eq!(primers.classify("ACGTGT"), 0);
//!
//! let reads = vec![
//!     ReadRecord { description: "r1".into(), sequence: "ACGTGT".into() },
//!     ReadRecord { description: "r2".into(), sequence: "TTTT".into() },
//! ];
//! let sorted = classify_and_sort(&primers, reads);
//! // The unmatched read sorts ahead of the matched one.
//! assert_eq!(sorted[0].primer_index, -1);
//! assert_eq!(sorted[1].primer_index, 0);
//! ```

pub mod error;
pub mod primer;
pub mod record;
pub mod seqio;
pub mod sorter;
pub mod table;

pub use error::{PrimersortError, Result};
pub use primer::{PrimerSet, NO_MATCH};
pub use record::{ClassifiedRead, ReadRecord};
pub use sorter::classify_and_sort;

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use std::io::Write;

    // End-to-end through the library surface: files in, ordered rows out.
    #[test]
    fn files_to_sorted_rows() {
        let dir = tempfile::tempdir().unwrap();
        let reads_path = dir.path().join("reads.fastq");
        let primers_path = dir.path().join("primers.csv");
        let out_path = dir.path().join("sorted.csv");

        std::fs::File::create(&reads_path)
            .unwrap()
            .write_all(b"@r1\nACGTGT\n+\nIIIIII\n@r2\nGTACAC\n+\nIIIIII\n@r3\nTTTT\n+\nIIII\n")
            .unwrap();
        std::fs::File::create(&primers_path).unwrap().write_all(b"Primers\nAC\nGT\n").unwrap();

        let primers = table::load_primers(&primers_path).unwrap();
        let reads = seqio::load_reads(&reads_path).unwrap();
        let sorted = classify_and_sort(&primers, reads);
        table::write_classified(&out_path, &sorted).unwrap();

        let text = std::fs::read_to_string(&out_path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Description,Sequences,primer_number",
                "r3,TTTT,-1",
                "r1,ACGTGT,0",
                "r2,GTACAC,1",
            ]
        );
    }
}

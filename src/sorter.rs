//! Batch classification and ordering of reads.
//!
//! Classification of each read is independent, so the annotation pass fans
//! out across the ambient rayon pool; the indexed collect keeps input order,
//! and the final sort is the standard library's stable sort. Unmatched reads
//! carry index `-1` and therefore lead the output of an ascending sort.

use rayon::prelude::*;

use crate::primer::PrimerSet;
use crate::record::{ClassifiedRead, ReadRecord};

/// Annotate every read with its primer index, then stable-sort ascending by
/// that index.
///
/// The output holds exactly the input reads, none dropped or duplicated.
/// Reads sharing an index retain their relative input order; the unmatched
/// (`-1`) group sorts first.
pub fn classify_and_sort(primers: &PrimerSet, reads: Vec<ReadRecord>) -> Vec<ClassifiedRead> {
    let mut classified: Vec<ClassifiedRead> = reads
        .into_par_iter()
        .map(|r| {
            let idx = primers.classify(&r.sequence);
            ClassifiedRead::from_record(r, idx)
        })
        .collect();
    classified.sort_by_key(|r| r.primer_index);
    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(description: &str, sequence: &str) -> ReadRecord {
        ReadRecord { description: description.to_string(), sequence: sequence.to_string() }
    }

    #[test]
    fn unmatched_reads_sort_first() {
        let primers = PrimerSet::compile(["AC", "GT"]).unwrap();
        let reads = vec![read("r1", "ACGTGT"), read("r2", "GTACAC"), read("r3", "TTTT")];
        let out = classify_and_sort(&primers, reads);
        let order: Vec<(&str, i32)> =
            out.iter().map(|r| (r.description.as_str(), r.primer_index)).collect();
        assert_eq!(order, vec![("r3", -1), ("r1", 0), ("r2", 1)]);
    }

    #[test]
    fn ties_retain_input_order() {
        let primers = PrimerSet::compile(["AC"]).unwrap();
        let reads = vec![
            read("a", "ACAA"),
            read("b", "TTTT"),
            read("c", "ACCC"),
            read("d", "GGGG"),
            read("e", "ACGG"),
        ];
        let out = classify_and_sort(&primers, reads);
        let names: Vec<&str> = out.iter().map(|r| r.description.as_str()).collect();
        // Unmatched pair first in input order, then the matched trio in input order.
        assert_eq!(names, vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn empty_primer_set_keeps_input_order() {
        let primers = PrimerSet::compile(Vec::<String>::new()).unwrap();
        let reads = vec![read("x", "AC"), read("y", "GT"), read("z", "TT")];
        let out = classify_and_sort(&primers, reads);
        let names: Vec<&str> = out.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
        assert!(out.iter().all(|r| r.primer_index == -1));
    }

    #[test]
    fn multiset_of_reads_is_preserved() {
        let primers = PrimerSet::compile(["GT", "AC"]).unwrap();
        let reads = vec![
            read("dup", "ACAC"),
            read("dup", "ACAC"),
            read("other", "NNNN"),
        ];
        let out = classify_and_sort(&primers, reads);
        assert_eq!(out.len(), 3);
        assert_eq!(out.iter().filter(|r| r.description == "dup").count(), 2);
        assert_eq!(out.iter().filter(|r| r.description == "other").count(), 1);
    }

    #[test]
    fn sorting_sorted_output_is_idempotent() {
        let primers = PrimerSet::compile(["AC", "GT"]).unwrap();
        let reads = vec![read("r1", "ACGTGT"), read("r2", "GTACAC"), read("r3", "TTTT")];
        let once = classify_and_sort(&primers, reads);
        let again = classify_and_sort(
            &primers,
            once.iter()
                .map(|r| read(&r.description, &r.sequence))
                .collect(),
        );
        assert_eq!(once, again);
    }
}

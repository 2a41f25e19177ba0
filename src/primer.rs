//! Primer patterns and prefix classification.
//!
//! A [`PrimerSet`] holds an ordered list of primer patterns. Each pattern is
//! compiled once, at construction, as a regular expression anchored at the
//! start of the read (`^(?:pattern)`). A plain nucleotide string therefore
//! behaves as a literal prefix match, while embedded metacharacters keep
//! their regex meaning. Order is semantically meaningful: the first matching
//! pattern wins.
//!
//! # Examples
//! ```
//! use primersort::PrimerSet;
//! let primers = PrimerSet::compile(["AC", "GT"]).unwrap();
//! assert_eq!(primers.classify("ACGTGT"), 0);
//! assert_eq!(primers.classify("GTACAC"), 1);
//! assert_eq!(primers.classify("TTTT"), -1);
//! ```

use regex::Regex;

use crate::error::{PrimersortError, Result};

/// Sentinel classification for a read no primer matched.
///
/// Sorts ahead of every real primer index in an ascending sort.
pub const NO_MATCH: i32 = -1;

/// An ordered, immutable set of compiled primer patterns.
#[derive(Clone, Debug)]
pub struct PrimerSet {
    patterns: Vec<String>,
    compiled: Vec<Regex>,
}

impl PrimerSet {
    /// Compile an ordered list of primer patterns.
    ///
    /// Each pattern is anchored at position 0; a pattern that fails to
    /// compile aborts the whole load with
    /// [`PrimersortError::InvalidPrimer`] naming the offending text.
    pub fn compile<I, S>(primers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = primers.into_iter().map(Into::into).collect();
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in &patterns {
            let re = Regex::new(&format!("^(?:{pattern})")).map_err(|e| {
                PrimersortError::InvalidPrimer { pattern: pattern.clone(), source: e }
            })?;
            compiled.push(re);
        }
        Ok(PrimerSet { patterns, compiled })
    }

    /// Number of primers in the set.
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    /// `true` for a set with no primers (every read classifies as no match).
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// The pattern strings in their original order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Index of the first primer matching the start of `sequence`, or
    /// [`NO_MATCH`].
    ///
    /// Only a prefix match is required; the pattern need not cover the whole
    /// sequence. Pure function of the set and the sequence.
    pub fn classify(&self, sequence: &str) -> i32 {
        for (i, re) in self.compiled.iter().enumerate() {
            if re.is_match(sequence) {
                return i as i32;
            }
        }
        NO_MATCH
    }
}

//! Data model for reads before and after classification.
//!
//! A [`ReadRecord`] is what the loaders hand to the classifier; a
//! [`ClassifiedRead`] is the same read annotated with the index of the first
//! primer whose pattern matched its prefix. Records never carry quality
//! strings: classification looks at basecalls only.

/// A single sequenced read as loaded from the input file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReadRecord {
    /// Full header line of the read (identifier plus any comment text).
    pub description: String,
    /// Literal basecall string matched against the primer patterns.
    pub sequence: String,
}

/// A read annotated with its classification.
///
/// `primer_index` is in `[-1, N-1]` for a set of `N` primers; `-1` means no
/// primer matched. The annotation is derived per read and depends only on the
/// primer set and the read's own sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassifiedRead {
    /// Header line carried through unchanged from the input.
    pub description: String,
    /// Basecall string carried through unchanged from the input.
    pub sequence: String,
    /// Index of the first matching primer, or `-1` for no match.
    pub primer_index: i32,
}

impl ClassifiedRead {
    /// Annotate a [`ReadRecord`] with a classification index.
    pub fn from_record(record: ReadRecord, primer_index: i32) -> Self {
        ClassifiedRead { description: record.description, sequence: record.sequence, primer_index }
    }
}

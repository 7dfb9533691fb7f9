// ============================================================
// Layer 3 — LabelledSequence Domain Type
// ============================================================
// One row of a classification CSV: a DNA read and the class
// it belongs to.
//
// Labels in the CSV files are 1-indexed (class 1, class 2, ...)
// while the model's classification head expects 0-indexed
// targets. The shift happens exactly once, in zero_indexed_label(),
// when the row is turned into a dataset record.
//
// Reference: Rust Book §5 (Structs)

/// A DNA sequence together with its 1-indexed class label,
/// exactly as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledSequence {
    /// The raw nucleotide string from the `SEQ` column
    pub seq: String,

    /// The class label from the `CLASS` / `Class` column
    pub label: i64,
}

impl LabelledSequence {
    /// Create a new LabelledSequence
    pub fn new(seq: impl Into<String>, label: i64) -> Self {
        Self { seq: seq.into(), label }
    }

    /// The label the model trains against (source label minus one)
    pub fn zero_indexed_label(&self) -> i64 {
        self.label - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_indexed_label() {
        assert_eq!(LabelledSequence::new("ATCG", 2).zero_indexed_label(), 1);
        assert_eq!(LabelledSequence::new("ATCG", 1).zero_indexed_label(), 0);
    }
}

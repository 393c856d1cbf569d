use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AlignError {
    /// Gap penalty parameters that cannot drive a computation
    Configuration(String),
    /// The scoring source cannot supply a square table
    ScoringDimension(String),
    /// A queried symbol pair has no score
    Lookup {
        /// Symbol from the first sequence
        first: u8,
        /// Symbol from the second sequence
        second: u8,
        /// Row of the cell being filled (1-based, 0 is the empty prefix)
        row: usize,
        /// Column of the cell being filled
        col: usize,
    },
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignError::Configuration(msg) => write!(f, "Gap penalty configuration error: {}", msg),
            AlignError::ScoringDimension(msg) => write!(f, "Scoring matrix error: {}", msg),
            AlignError::Lookup {
                first,
                second,
                row,
                col,
            } => write!(
                f,
                "No score for the pair ({}, {}) at cell ({}, {})",
                char::from(*first),
                char::from(*second),
                row,
                col
            ),
        }
    }
}

impl std::error::Error for AlignError {}

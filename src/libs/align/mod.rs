//! Pairwise alignment with every optimal path.
//!
//! ```
//! use nwsw::libs::align::{needleman_wunsch, GapPenalty, MatchMismatch};
//!
//! let gap = GapPenalty::Linear { rate: 1.0 };
//! let result = needleman_wunsch(b"AA", b"A", &MatchMismatch::default(), &gap).unwrap();
//!
//! assert_eq!(result.score(), 0.0);
//! let rows: Vec<_> = result.iter().map(|p| (p.first, p.second)).collect();
//! assert_eq!(
//!     rows,
//!     vec![
//!         ("AA".to_string(), "_A".to_string()),
//!         ("AA".to_string(), "A_".to_string()),
//!     ]
//! );
//! ```

mod error;
mod gap;
mod global;
mod local;
mod scoring;
mod table;
mod traceback;

pub use error::AlignError;
pub use gap::{GapPenalty, DEFAULT_GAP_RATE};
pub use global::fill_global;
pub use local::fill_local;
pub use scoring::{one_letter_code, MatchMismatch, Scorer, SubstMatrix};
pub use table::{DpTable, Edge, Pos};
pub use traceback::{AlignedPair, Paths, GAP};

use std::fmt;
use std::str::FromStr;

/// Score of the pair that fills `pos`, i.e. `seq1[row - 1]` against `seq2[col - 1]`.
pub(crate) fn pair_score<S: Scorer + ?Sized>(
    scorer: &S,
    seq1: &[u8],
    seq2: &[u8],
    pos: Pos,
) -> Result<f64, AlignError> {
    let first = seq1[pos.row() - 1];
    let second = seq2[pos.col() - 1];
    scorer.score(first, second).ok_or(AlignError::Lookup {
        first,
        second,
        row: pos.row(),
        col: pos.col(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignMode {
    /// Needleman-Wunsch, end to end
    Global,
    /// Smith-Waterman, best scoring regions
    Local,
}

impl FromStr for AlignMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "global" | "nw" => Ok(AlignMode::Global),
            "local" | "sw" => Ok(AlignMode::Local),
            _ => Err(anyhow::anyhow!("Unknown alignment mode: {}", s)),
        }
    }
}

impl fmt::Display for AlignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignMode::Global => write!(f, "global"),
            AlignMode::Local => write!(f, "local"),
        }
    }
}

/// A filled table together with the cells its alignments start from.
///
/// Nothing is enumerated up front. Each call to [`Alignments::iter`] walks
/// the parent graph again from the first root, so taking a prefix of the
/// iterator bounds the work.
#[derive(Debug, Clone)]
pub struct Alignments<'a> {
    mode: AlignMode,
    seq1: &'a [u8],
    seq2: &'a [u8],
    table: DpTable,
    roots: Vec<Pos>,
}

impl<'a> Alignments<'a> {
    pub fn mode(&self) -> AlignMode {
        self.mode
    }

    /// The optimal score: the bottom-right cell for global, the table maximum
    /// for local.
    pub fn score(&self) -> f64 {
        match self.mode {
            AlignMode::Global => self.table.value(self.table.last()),
            AlignMode::Local => self.table.max_value(),
        }
    }

    pub fn roots(&self) -> &[Pos] {
        &self.roots
    }

    pub fn table(&self) -> &DpTable {
        &self.table
    }

    pub fn iter(&self) -> Paths<'_> {
        Paths::new(&self.table, self.seq1, self.seq2, &self.roots)
    }
}

impl<'s, 'a> IntoIterator for &'s Alignments<'a> {
    type Item = AlignedPair;
    type IntoIter = Paths<'s>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Global alignment of the full lengths of both sequences.
pub fn needleman_wunsch<'a, S: Scorer + ?Sized>(
    seq1: &'a [u8],
    seq2: &'a [u8],
    scorer: &S,
    gap: &GapPenalty,
) -> Result<Alignments<'a>, AlignError> {
    let table = fill_global(seq1, seq2, scorer, gap)?;
    let roots = vec![table.last()];

    Ok(Alignments {
        mode: AlignMode::Global,
        seq1,
        seq2,
        table,
        roots,
    })
}

/// Local alignment: every region reaching the highest score.
///
/// When no pair scores above 0 there is nothing to report and the result
/// holds no roots.
pub fn smith_waterman<'a, S: Scorer + ?Sized>(
    seq1: &'a [u8],
    seq2: &'a [u8],
    scorer: &S,
    gap: &GapPenalty,
) -> Result<Alignments<'a>, AlignError> {
    let table = fill_local(seq1, seq2, scorer, gap)?;

    let max = table.max_value();
    let roots = if max > 0.0 {
        table.positions_of(max)
    } else {
        vec![]
    };

    Ok(Alignments {
        mode: AlignMode::Local,
        seq1,
        seq2,
        table,
        roots,
    })
}

pub fn align<'a, S: Scorer + ?Sized>(
    mode: AlignMode,
    seq1: &'a [u8],
    seq2: &'a [u8],
    scorer: &S,
    gap: &GapPenalty,
) -> Result<Alignments<'a>, AlignError> {
    match mode {
        AlignMode::Global => needleman_wunsch(seq1, seq2, scorer, gap),
        AlignMode::Local => smith_waterman(seq1, seq2, scorer, gap),
    }
}

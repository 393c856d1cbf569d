use super::{DpTable, Edge, Pos};
use std::fmt;

/// Marker for a position without a counterpart in the other sequence.
pub const GAP: u8 = b'_';

/// One optimal alignment, front to back. Both rows have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlignedPair {
    pub first: String,
    pub second: String,
}

impl AlignedPair {
    /// Builds a pair from symbols collected back to front.
    fn from_reversed(mut first: Vec<u8>, mut second: Vec<u8>) -> Self {
        first.reverse();
        second.reverse();
        Self {
            first: first.into_iter().map(char::from).collect(),
            second: second.into_iter().map(char::from).collect(),
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }
}

impl fmt::Display for AlignedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.first, self.second)
    }
}

/// A partial path: where the walk stands and what it has emitted so far.
#[derive(Clone)]
struct Frame {
    pos: Pos,
    first: Vec<u8>,
    second: Vec<u8>,
}

/// Lazily walks the parent graph from the given roots, yielding one
/// [`AlignedPair`] per distinct path.
///
/// The walk keeps its own stack, so long sequences never deepen the call
/// stack, and nothing is produced before it is asked for. A cell without
/// parents ends a path and adds nothing to it. Where a cell has several
/// parents the first one is followed first.
pub struct Paths<'a> {
    table: &'a DpTable,
    seq1: &'a [u8],
    seq2: &'a [u8],
    stack: Vec<Frame>,
}

impl<'a> Paths<'a> {
    pub fn new(table: &'a DpTable, seq1: &'a [u8], seq2: &'a [u8], roots: &[Pos]) -> Self {
        let capacity = seq1.len() + seq2.len();
        let stack = roots
            .iter()
            .rev()
            .map(|&pos| Frame {
                pos,
                first: Vec::with_capacity(capacity),
                second: Vec::with_capacity(capacity),
            })
            .collect();

        Self {
            table,
            seq1,
            seq2,
            stack,
        }
    }

    /// Appends the pairs `edge` covers and moves the frame to the parent.
    fn follow(&self, frame: &mut Frame, edge: Edge) {
        let (row, col) = (frame.pos.row(), frame.pos.col());
        match edge {
            Edge::Diagonal => {
                frame.first.push(self.seq1[row - 1]);
                frame.second.push(self.seq2[col - 1]);
            }
            Edge::Horizontal(k) => {
                for step in 0..k {
                    frame.first.push(GAP);
                    frame.second.push(self.seq2[col - 1 - step]);
                }
            }
            Edge::Vertical(k) => {
                for step in 0..k {
                    frame.first.push(self.seq1[row - 1 - step]);
                    frame.second.push(GAP);
                }
            }
        }
        frame.pos = frame.pos.back(edge);
    }
}

impl Iterator for Paths<'_> {
    type Item = AlignedPair;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut frame) = self.stack.pop() {
            let parents = self.table.parents(frame.pos);

            let Some((&first, rest)) = parents.split_first() else {
                return Some(AlignedPair::from_reversed(frame.first, frame.second));
            };

            // pushed in reverse so that the first parent is popped next
            for &edge in rest.iter().rev() {
                let mut branch = frame.clone();
                self.follow(&mut branch, edge);
                self.stack.push(branch);
            }
            self.follow(&mut frame, first);
            self.stack.push(frame);
        }

        None
    }
}

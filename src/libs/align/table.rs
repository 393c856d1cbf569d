/// A cell coordinate. Row 0 and column 0 stand for the empty prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    row: usize,
    col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// The predecessor reached by walking `edge` backwards.
    pub fn back(&self, edge: Edge) -> Pos {
        match edge {
            Edge::Diagonal => Pos::new(self.row - 1, self.col - 1),
            Edge::Horizontal(k) => Pos::new(self.row, self.col - k),
            Edge::Vertical(k) => Pos::new(self.row - k, self.col),
        }
    }
}

/// How a cell was reached from one of its parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// From (row - 1, col - 1), pairing one symbol of each sequence
    Diagonal,
    /// From (row, col - k), a gap in the first sequence
    Horizontal(usize),
    /// From (row - k, col), a gap in the second sequence
    Vertical(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Cell {
    value: f64,
    parents: Vec<Edge>,
}

/// Cumulative scores plus the parent graph of a single computation.
///
/// The table is `(len1 + 1) x (len2 + 1)`; it is filled once and only read
/// afterwards.
#[derive(Debug, Clone)]
pub struct DpTable {
    cells: Vec<Vec<Cell>>,
}

impl DpTable {
    /// Creates a table for sequences of lengths `len1` and `len2`, every
    /// cell at 0 with no parents.
    pub fn new(len1: usize, len2: usize) -> Self {
        Self {
            cells: vec![vec![Cell::default(); len2 + 1]; len1 + 1],
        }
    }

    /// Number of rows, `len1 + 1`.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns, `len2 + 1`.
    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    /// The bottom-right cell.
    pub fn last(&self) -> Pos {
        Pos::new(self.rows() - 1, self.cols() - 1)
    }

    pub fn value(&self, pos: Pos) -> f64 {
        self.cells[pos.row][pos.col].value
    }

    pub fn parents(&self, pos: Pos) -> &[Edge] {
        &self.cells[pos.row][pos.col].parents
    }

    pub(crate) fn set(&mut self, pos: Pos, value: f64, parents: Vec<Edge>) {
        self.cells[pos.row][pos.col] = Cell { value, parents };
    }

    /// All positions, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let cols = self.cols();
        (0..self.rows()).flat_map(move |row| (0..cols).map(move |col| Pos::new(row, col)))
    }

    /// The largest value in the table.
    pub fn max_value(&self) -> f64 {
        self.positions()
            .map(|pos| self.value(pos))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Positions holding exactly `value`, row-major.
    pub fn positions_of(&self, value: f64) -> Vec<Pos> {
        self.positions().filter(|&pos| self.value(pos) == value).collect()
    }
}

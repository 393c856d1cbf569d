use super::{pair_score, AlignError, DpTable, Edge, GapPenalty, Pos, Scorer};

/// Fills the Smith-Waterman table.
///
/// Values are floored at 0 and a cell at 0 has no parent, which ends a local
/// alignment. A positive cell keeps a single parent even when candidates
/// tie: the diagonal first, then the horizontal jump, then the vertical one,
/// and within a scan the shortest jump reaching the best value.
pub fn fill_local<S: Scorer + ?Sized>(
    seq1: &[u8],
    seq2: &[u8],
    scorer: &S,
    gap: &GapPenalty,
) -> Result<DpTable, AlignError> {
    let gap = gap.validate()?;
    let mut table = DpTable::new(seq1.len(), seq2.len());

    for row in 1..table.rows() {
        for col in 1..table.cols() {
            let pos = Pos::new(row, col);

            let diagonal =
                table.value(pos.back(Edge::Diagonal)) + pair_score(scorer, seq1, seq2, pos)?;
            let left = first_best_run(&table, &gap, pos, gap.max_run(col), Edge::Horizontal);
            let up = first_best_run(&table, &gap, pos, gap.max_run(row), Edge::Vertical);

            let mut value = 0.0;
            let mut parent = None;
            for (candidate, edge) in [(diagonal, Some(Edge::Diagonal)), left, up] {
                if candidate > value {
                    value = candidate;
                    parent = edge;
                }
            }

            table.set(pos, value, parent.into_iter().collect());
        }
    }

    Ok(table)
}

/// Best value over jumps of 1..=`max_run` cells back along one axis and the
/// first jump reaching it.
fn first_best_run(
    table: &DpTable,
    gap: &GapPenalty,
    pos: Pos,
    max_run: usize,
    edge: fn(usize) -> Edge,
) -> (f64, Option<Edge>) {
    let mut best = (f64::NEG_INFINITY, None);

    for k in 1..=max_run {
        let candidate = table.value(pos.back(edge(k))) - gap.cost(k);
        if candidate > best.0 {
            best = (candidate, Some(edge(k)));
        }
    }

    best
}

use super::{pair_score, AlignError, DpTable, Edge, GapPenalty, Pos, Scorer};

/// Fills the Needleman-Wunsch table.
///
/// Every cell but (0, 0) gets at least one parent, and every candidate that
/// ties for a cell's optimum is kept: the diagonal, each tying horizontal jump
/// and each tying vertical jump, in that order and by ascending jump length.
///
/// The boundary costs `gap.cost(i)` for `i` steps from the origin, each cell
/// pointing at its neighbour towards the origin.
pub fn fill_global<S: Scorer + ?Sized>(
    seq1: &[u8],
    seq2: &[u8],
    scorer: &S,
    gap: &GapPenalty,
) -> Result<DpTable, AlignError> {
    let gap = gap.validate()?;
    let mut table = DpTable::new(seq1.len(), seq2.len());

    for row in 1..table.rows() {
        table.set(Pos::new(row, 0), -gap.cost(row), vec![Edge::Vertical(1)]);
    }
    for col in 1..table.cols() {
        table.set(Pos::new(0, col), -gap.cost(col), vec![Edge::Horizontal(1)]);
    }

    for row in 1..table.rows() {
        for col in 1..table.cols() {
            let pos = Pos::new(row, col);

            let diagonal =
                table.value(pos.back(Edge::Diagonal)) + pair_score(scorer, seq1, seq2, pos)?;
            let (left, left_edges) =
                best_run(&table, &gap, pos, gap.max_run(col), Edge::Horizontal);
            let (up, up_edges) = best_run(&table, &gap, pos, gap.max_run(row), Edge::Vertical);

            let best = diagonal.max(left).max(up);

            let mut parents = Vec::with_capacity(1);
            if diagonal == best {
                parents.push(Edge::Diagonal);
            }
            if left == best {
                parents.extend(left_edges);
            }
            if up == best {
                parents.extend(up_edges);
            }

            table.set(pos, best, parents);
        }
    }

    Ok(table)
}

/// Best value over jumps of 1..=`max_run` cells back along one axis, with
/// every jump reaching it.
fn best_run(
    table: &DpTable,
    gap: &GapPenalty,
    pos: Pos,
    max_run: usize,
    edge: fn(usize) -> Edge,
) -> (f64, Vec<Edge>) {
    let mut best = f64::NEG_INFINITY;
    let mut edges = Vec::new();

    for k in 1..=max_run {
        let candidate = table.value(pos.back(edge(k))) - gap.cost(k);
        if candidate > best {
            best = candidate;
            edges.clear();
            edges.push(edge(k));
        } else if candidate == best {
            edges.push(edge(k));
        }
    }

    (best, edges)
}

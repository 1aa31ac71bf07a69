use crate::engine::eval::evaluate;
use crate::engine::move_list::MoveList;
use crate::engine::{Move, Score};
use crate::logic::board::{Board, Player, MAX_BOARD_SIZE};

/// Geometric preference tier for a cell; lower sorts first. The tiers are
/// fixed classifications of the board shape, independent of its contents:
/// center cell(s), then corners, then non-corner border cells, then the
/// interior rest.
fn tier(board: &Board, mv: Move) -> u8 {
    let m = board.size();
    let row = mv.row as usize;
    let col = mv.col as usize;
    let center_lo = (m - 1) / 2;
    let center_hi = m / 2;
    let central = |i: usize| i == center_lo || i == center_hi;
    let border = |i: usize| i == 0 || i == m - 1;

    if central(row) && central(col) {
        0
    } else if border(row) && border(col) {
        1
    } else if border(row) || border(col) {
        2
    } else {
        3
    }
}

/// Ranks the legal moves of `board` for `player` to maximize alpha-beta
/// cutoffs: by geometric tier, then (when `use_probe` is set) by a depth-0
/// probe that applies the move and scores the successor with `evaluate`.
/// The sort is stable over the row-major baseline, so equal keys keep
/// ascending row-major order -- required for reproducible searches.
///
/// The input board is never mutated; probe successors are discarded.
#[must_use]
pub fn order_moves(board: &Board, player: Player, use_probe: bool) -> MoveList {
    let mut moves = board.legal_moves();
    let size = board.size();

    // Keys are computed once per move, then looked up by cell index while
    // the list is sorted in place.
    let mut keys: [(u8, Score); MAX_BOARD_SIZE * MAX_BOARD_SIZE] =
        [(0, 0); MAX_BOARD_SIZE * MAX_BOARD_SIZE];
    for &mv in &moves {
        let probe = if use_probe {
            let next = board
                .apply_move(mv, player)
                .expect("legal move probes an empty cell");
            evaluate(&next, player)
        } else {
            0
        };
        if let Some(slot) = keys.get_mut(cell_index(mv, size)) {
            *slot = (tier(board, mv), -probe);
        }
    }

    moves.sort_by(|a, b| {
        let ka = keys.get(cell_index(*a, size)).copied().unwrap_or_default();
        let kb = keys.get(cell_index(*b, size)).copied().unwrap_or_default();
        ka.cmp(&kb)
    });
    moves
}

fn cell_index(mv: Move, size: usize) -> usize {
    usize::from(mv.row) * size + usize::from(mv.col)
}

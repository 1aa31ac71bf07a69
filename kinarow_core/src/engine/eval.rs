use crate::engine::Score;
use crate::logic::board::{Board, Player};
use crate::logic::rules;

/// Sentinel for decided games. Larger than any achievable sum of window
/// scores across the supported board sizes, so a confirmed win always
/// dominates heuristic totals.
pub const WIN_VALUE: Score = 1_000_000_000_000;

/// Static evaluation of `board` from `perspective`.
///
/// Terminal positions score +/-`WIN_VALUE` (0 for a drawn full board).
/// Otherwise every `win_length` window holding marks from at most one player
/// contributes 10^c for its c marks to that player's total; mixed windows
/// can never become a win and contribute nothing. The result is the
/// perspective's total minus the opponent's, so forcing formations dominate
/// scattered single marks.
///
/// Pure: same inputs, same output, no shared state.
#[must_use]
pub fn evaluate(board: &Board, perspective: Player) -> Score {
    if let Some(winner) = rules::winner(board) {
        return if winner == perspective {
            WIN_VALUE
        } else {
            -WIN_VALUE
        };
    }
    if board.is_full() {
        return 0;
    }

    let mut own: Score = 0;
    let mut opp: Score = 0;
    for w in board.windows() {
        let (mine, theirs) = match perspective {
            Player::X => (w.x, w.o),
            Player::O => (w.o, w.x),
        };
        if mine > 0 && theirs > 0 {
            continue;
        }
        if mine > 0 {
            own += 10_i64.pow(u32::from(mine));
        } else if theirs > 0 {
            opp += 10_i64.pow(u32::from(theirs));
        }
    }
    own - opp
}

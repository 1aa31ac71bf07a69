use crate::engine::eval::evaluate;
use crate::engine::move_list::MoveList;
use crate::engine::ordering::order_moves;
use crate::engine::{Move, NodeCounter, Score, SearchResult};
use crate::logic::board::{Board, Player};
use crate::logic::rules::{self, ConfigError};
use log::debug;

/// Exhaustive minimax from `player`'s point of view, expanding children in
/// row-major order. Every searched node, the root included, ticks `counter`
/// exactly once.
///
/// Ties at the root resolve to the first move that reached the best score,
/// so results are fully deterministic for a given position.
#[must_use]
pub fn minimax(board: &Board, player: Player, counter: &mut NodeCounter) -> SearchResult {
    counter.tick();
    if rules::is_terminal(board) {
        return SearchResult {
            best_move: None,
            score: evaluate(board, player),
        };
    }

    let mut best_move: Option<Move> = None;
    let mut best = Score::MIN;
    for &mv in &board.legal_moves() {
        let child = board
            .apply_move(mv, player)
            .expect("generated move targets an empty cell");
        let value = minimax_value(&child, player, player.opposite(), counter);
        if value > best {
            best = value;
            best_move = Some(mv);
        }
    }

    debug!(
        "minimax: best={best_move:?} score={best} nodes={}",
        counter.nodes()
    );
    SearchResult {
        best_move,
        score: best,
    }
}

fn minimax_value(
    board: &Board,
    max_player: Player,
    to_move: Player,
    counter: &mut NodeCounter,
) -> Score {
    counter.tick();
    if rules::is_terminal(board) {
        return evaluate(board, max_player);
    }

    let maximizing = to_move == max_player;
    let mut best = if maximizing { Score::MIN } else { Score::MAX };
    for &mv in &board.legal_moves() {
        let child = board
            .apply_move(mv, to_move)
            .expect("generated move targets an empty cell");
        let value = minimax_value(&child, max_player, to_move.opposite(), counter);
        if maximizing {
            best = best.max(value);
        } else {
            best = best.min(value);
        }
    }
    best
}

/// Fail-soft alpha-beta search to the same depth as [`minimax`]. Returns the
/// identical best move and score for any position while visiting a subset of
/// the nodes; `use_ordering` trades per-node ranking cost for extra cutoffs
/// and never changes the result.
#[must_use]
pub fn alpha_beta(
    board: &Board,
    player: Player,
    use_ordering: bool,
    counter: &mut NodeCounter,
) -> SearchResult {
    counter.tick();
    if rules::is_terminal(board) {
        return SearchResult {
            best_move: None,
            score: evaluate(board, player),
        };
    }

    let mut best_move: Option<Move> = None;
    let mut best = Score::MIN;
    let mut alpha = Score::MIN;
    let moves = generate(board, player, use_ordering);
    for &mv in &moves {
        let child = board
            .apply_move(mv, player)
            .expect("generated move targets an empty cell");
        let value = alpha_beta_value(
            &child,
            player,
            player.opposite(),
            alpha,
            Score::MAX,
            use_ordering,
            counter,
        );
        if value > best {
            best = value;
            best_move = Some(mv);
        }
        alpha = alpha.max(best);
    }

    debug!(
        "alpha_beta: best={best_move:?} score={best} ordering={use_ordering} nodes={}",
        counter.nodes()
    );
    SearchResult {
        best_move,
        score: best,
    }
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta_value(
    board: &Board,
    max_player: Player,
    to_move: Player,
    mut alpha: Score,
    mut beta: Score,
    use_ordering: bool,
    counter: &mut NodeCounter,
) -> Score {
    counter.tick();
    if rules::is_terminal(board) {
        return evaluate(board, max_player);
    }

    let maximizing = to_move == max_player;
    let mut best = if maximizing { Score::MIN } else { Score::MAX };
    let moves = generate(board, to_move, use_ordering);
    for &mv in &moves {
        let child = board
            .apply_move(mv, to_move)
            .expect("generated move targets an empty cell");
        let value = alpha_beta_value(
            &child,
            max_player,
            to_move.opposite(),
            alpha,
            beta,
            use_ordering,
            counter,
        );
        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Alpha-beta search truncated at `depth` plies, scoring the frontier with
/// the static evaluator. A terminal root is answered directly regardless of
/// `depth`; otherwise `depth` must be at least 1.
pub fn depth_limited(
    board: &Board,
    player: Player,
    depth: u8,
    use_ordering: bool,
    counter: &mut NodeCounter,
) -> Result<SearchResult, ConfigError> {
    counter.tick();
    if rules::is_terminal(board) {
        return Ok(SearchResult {
            best_move: None,
            score: evaluate(board, player),
        });
    }
    if depth == 0 {
        return Err(ConfigError::InvalidDepthLimit);
    }

    let mut best_move: Option<Move> = None;
    let mut best = Score::MIN;
    let mut alpha = Score::MIN;
    let moves = generate(board, player, use_ordering);
    for &mv in &moves {
        let child = board
            .apply_move(mv, player)
            .expect("generated move targets an empty cell");
        let value = depth_limited_value(
            &child,
            player,
            player.opposite(),
            depth - 1,
            alpha,
            Score::MAX,
            use_ordering,
            counter,
        );
        if value > best {
            best = value;
            best_move = Some(mv);
        }
        alpha = alpha.max(best);
    }

    debug!(
        "depth_limited: depth={depth} best={best_move:?} score={best} nodes={}",
        counter.nodes()
    );
    Ok(SearchResult {
        best_move,
        score: best,
    })
}

#[allow(clippy::too_many_arguments)]
fn depth_limited_value(
    board: &Board,
    max_player: Player,
    to_move: Player,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    use_ordering: bool,
    counter: &mut NodeCounter,
) -> Score {
    counter.tick();
    if depth == 0 || rules::is_terminal(board) {
        return evaluate(board, max_player);
    }

    let maximizing = to_move == max_player;
    let mut best = if maximizing { Score::MIN } else { Score::MAX };
    let moves = generate(board, to_move, use_ordering);
    for &mv in &moves {
        let child = board
            .apply_move(mv, to_move)
            .expect("generated move targets an empty cell");
        let value = depth_limited_value(
            &child,
            max_player,
            to_move.opposite(),
            depth - 1,
            alpha,
            beta,
            use_ordering,
            counter,
        );
        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

fn generate(board: &Board, to_move: Player, use_ordering: bool) -> MoveList {
    if use_ordering {
        order_moves(board, to_move, true)
    } else {
        board.legal_moves()
    }
}

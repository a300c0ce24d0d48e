//! The mutually recursive give/place search and the two AI entry
//! points that wrap it with candidate shuffling and ranking.

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::QuartoRng;
use crate::search::accumulator::SearchAccumulator;
use crate::search::depth::depth_budget_for_board;
use crate::search::rank::choose_from_result_list;
use crate::search::result::SearchResult;

/// When the side to move is us and we've hit the `max_me` cutoff,
/// sample one candidate from the actual candidate set rather than the
/// full code/index space, so the draw always lands on something legal.
fn sample_if_capped<T: Copy>(candidates: Vec<T>, my_turn: bool, max_me: i32, rng: &mut QuartoRng) -> Vec<T> {
    if my_turn && max_me <= 0 && !candidates.is_empty() {
        let i = rng.usize(0..candidates.len());
        vec![candidates[i]]
    } else {
        candidates
    }
}

/// Explores, from a give-decision point, every (or a sampled) unused
/// piece and accumulates the resulting win/loss/tie counts.
pub fn search_from_give_phase(
    board: &Board,
    accumulator: &mut SearchAccumulator,
    me_index: usize,
    max_me: i32,
    max_all: i32,
    save_piece: bool,
    rng: &mut QuartoRng,
) {
    if max_all <= 0 {
        return;
    }
    if board.is_game_over() {
        if !board.is_win() {
            accumulator.inc_tie();
        }
        return;
    }

    let my_turn = me_index == board.current_give_player_index();

    if save_piece {
        let (piece, result) = choose_piece(board, me_index, rng);
        *accumulator += result.accumulator();
        accumulator.set_aux_piece(piece);
        return;
    }

    let candidates = sample_if_capped(board.unused_pieces().collect(), my_turn, max_me, rng);

    let mut forced_accumulator = SearchAccumulator::new();
    let mut got_any = false;

    for piece in candidates {
        let mut child = SearchAccumulator::new();
        search_from_place_phase(board, &mut child, me_index, max_me, max_all, piece, rng);

        if my_turn {
            if child.is_forced_loss() {
                forced_accumulator += &child;
                continue;
            }
        } else if child.is_forced_win() {
            accumulator.inc_accidental_win_from(&child);
            forced_accumulator += &child;
            continue;
        }

        *accumulator += &child;
        got_any = true;
    }

    // Every move was forced.
    if !got_any {
        *accumulator += &forced_accumulator;
    }
}

/// Explores, from a place-decision point with `given_piece` already
/// handed over, every (or a sampled) empty square. Short-circuits the
/// moment any candidate square is an immediate win.
pub fn search_from_place_phase(
    board: &Board,
    accumulator: &mut SearchAccumulator,
    me_index: usize,
    max_me: i32,
    max_all: i32,
    given_piece: Piece,
    rng: &mut QuartoRng,
) {
    if max_all <= 0 {
        return;
    }

    let my_turn = me_index == board.current_place_player_index();
    let candidates = sample_if_capped(board.empty_squares().collect(), my_turn, max_me, rng);

    let mut forced_accumulator = SearchAccumulator::new();
    let mut got_any = false;
    let mut sum = SearchAccumulator::new();

    for si in candidates {
        let next = board.place_piece(si, given_piece);
        if next.is_win() {
            if my_turn {
                accumulator.inc_win();
            } else {
                accumulator.inc_lose();
            }
            accumulator.set_aux_square(si);
            return;
        }

        let mut child = SearchAccumulator::new();
        search_from_give_phase(&next, &mut child, me_index, max_me - 1, max_all - 1, false, rng);

        if my_turn {
            if child.is_forced_loss() {
                forced_accumulator += &child;
                continue;
            }
        } else if child.is_forced_win() {
            sum.inc_accidental_win_from(&child);
            forced_accumulator += &child;
            continue;
        }

        sum += &child;
        got_any = true;
    }

    // Every move was forced.
    if !got_any {
        sum += &forced_accumulator;
    }

    if sum.is_forced_win() {
        accumulator.inc_win_from(&sum);
    } else if sum.is_forced_loss() {
        accumulator.inc_lose_from(&sum);
        accumulator.inc_accidental_win_from(&sum);
    } else if sum.is_forced_tie() {
        accumulator.inc_tie_from(&sum);
        accumulator.inc_accidental_win_from(&sum);
    } else if sum.is_accidental_win() {
        accumulator.inc_accidental_win_from(&sum);
    } else {
        *accumulator += &sum;
    }
}

/// Chooses which piece `me_index` should give next, searching from
/// this give-decision point.
pub fn choose_piece(board: &Board, me_index: usize, rng: &mut QuartoRng) -> (Piece, SearchResult) {
    let mut candidates: Vec<Piece> = board.unused_pieces().collect();
    rng.shuffle(&mut candidates);
    let budget = depth_budget_for_board(board, 1);

    let mut results: Vec<SearchResult> = Vec::with_capacity(candidates.len());
    for piece in candidates {
        let mut acc = SearchAccumulator::new();
        search_from_place_phase(board, &mut acc, me_index, budget.max_me, budget.max_all, piece, rng);
        acc.set_aux_piece(piece);
        log::trace!("choose_piece candidate {piece}: {acc:?}");
        results.push(SearchResult::new(acc));
    }

    let chosen = choose_from_result_list(&results);
    let piece = chosen.aux_piece().expect("choose_piece always records its candidate piece");
    log::debug!("choose_piece({me_index}) -> {piece} ({:?})", chosen.accumulator());
    (piece, chosen)
}

/// Chooses where `me_index` should place `given_piece`, and (via the
/// nested `save_piece` search) what to give next.
pub fn choose_square_and_piece(
    board: &Board,
    me_index: usize,
    given_piece: Piece,
    rng: &mut QuartoRng,
) -> (usize, Option<Piece>, SearchResult) {
    let mut candidates: Vec<usize> = board.empty_squares().collect();
    rng.shuffle(&mut candidates);

    for &si in &candidates {
        let next = board.place_piece(si, given_piece);
        if next.is_win() {
            let mut acc = SearchAccumulator::new();
            acc.inc_win();
            acc.set_aux_square(si);
            log::debug!("choose_square_and_piece({me_index}) -> immediate win at {si}");
            return (si, None, SearchResult::new(acc));
        }
    }

    let budget = depth_budget_for_board(board, 0);
    let mut results: Vec<SearchResult> = Vec::with_capacity(candidates.len());
    for si in candidates {
        let next = board.place_piece(si, given_piece);
        let mut acc = SearchAccumulator::new();
        search_from_give_phase(&next, &mut acc, me_index, budget.max_me - 1, budget.max_all - 1, true, rng);
        acc.set_aux_square(si);
        let mut result = SearchResult::new(acc);
        result.compute_win_score_for_board(&next);
        results.push(result);
    }

    let chosen = choose_from_result_list(&results);
    let square = chosen.aux_square().expect("choose_square_and_piece always records its candidate square");
    let piece = chosen.aux_piece();
    log::debug!(
        "choose_square_and_piece({me_index}) -> square {square}, next piece {piece:?} ({:?})",
        chosen.accumulator()
    );
    (square, piece, chosen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choose_square_and_piece_takes_immediate_win() {
        let mut board = Board::new();
        board = board.place_piece(0, Piece::new(1));
        board = board.place_piece(1, Piece::new(3));
        board = board.place_piece(2, Piece::new(5));
        let given = Piece::new(9); // shares the light bit with 1,3,5
        let mut rng = QuartoRng::with_seed(1);
        let (square, piece, result) = choose_square_and_piece(&board, 1, given, &mut rng);
        assert_eq!(square, 3);
        assert!(piece.is_none());
        assert!(result.is_forced_win() || result.accumulator().win_count() > 0);
    }

    #[test]
    fn choose_piece_on_empty_board_is_reproducible_with_same_seed() {
        let board = Board::new();
        let mut rng_a = QuartoRng::with_seed(123);
        let mut rng_b = QuartoRng::with_seed(123);
        let (piece_a, _) = choose_piece(&board, 0, &mut rng_a);
        let (piece_b, _) = choose_piece(&board, 0, &mut rng_b);
        assert_eq!(piece_a, piece_b);
        assert_eq!(board.num_used_pieces(), 0);
    }

    #[test]
    fn choose_piece_returns_a_currently_unused_piece() {
        // Column 0,4,8,12 has three squares sharing the light bit, with
        // square 12 open: most remaining pieces would hand the placer an
        // immediate win there, but some (dark, round pieces) would not.
        let mut board = Board::new();
        board = board.place_piece(0, Piece::new(1));
        board = board.place_piece(4, Piece::new(3));
        board = board.place_piece(8, Piece::new(5));
        let mut rng = QuartoRng::with_seed(9);
        let (piece, _result) = choose_piece(&board, board.current_give_player_index(), &mut rng);
        assert!(board.is_unused(piece));
    }
}

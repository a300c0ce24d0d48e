//! Picks one candidate from a list of searched results: a forced win
//! beats everything, then prefer no chance of losing, then the best
//! ratio among mixed outcomes, and only pick a loss if every candidate
//! is one.

use crate::search::result::SearchResult;

pub fn choose_from_result_list(results: &[SearchResult]) -> SearchResult {
    assert!(!results.is_empty(), "cannot rank an empty candidate list");

    for r in results {
        if r.is_forced_win() {
            return *r;
        }
    }

    let mut best_not_loss: Option<SearchResult> = None;
    let mut best_mixed: Option<SearchResult> = None;
    let mut best_loss: Option<SearchResult> = None;

    for r in results {
        if r.is_not_loss() {
            if best_not_loss.is_none_or(|b| r.win_score() > b.win_score()) {
                best_not_loss = Some(*r);
            }
        } else if r.is_forced_loss() {
            if best_loss.is_none_or(|b| r.win_score() > b.win_score()) {
                best_loss = Some(*r);
            }
        } else if best_mixed.is_none_or(|b| r.win_ratio() > b.win_ratio()) {
            best_mixed = Some(*r);
        }
    }

    best_not_loss.or(best_mixed).or(best_loss).unwrap_or(results[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::accumulator::SearchAccumulator;

    fn result_with(wins: u32, losses: u32, ties: u32) -> SearchResult {
        let mut acc = SearchAccumulator::new();
        for _ in 0..wins {
            acc.inc_win();
        }
        for _ in 0..losses {
            acc.inc_lose();
        }
        for _ in 0..ties {
            acc.inc_tie();
        }
        SearchResult::new(acc)
    }

    #[test]
    fn forced_win_beats_everything() {
        let forced_win = result_with(1, 0, 0);
        let not_loss = result_with(0, 0, 1);
        let chosen = choose_from_result_list(&[not_loss, forced_win]);
        assert!(chosen.is_forced_win());
    }

    #[test]
    fn not_loss_beats_mixed_even_with_lower_ratio() {
        let not_loss = result_with(1, 0, 3);
        let mixed = result_with(10, 1, 0);
        let chosen = choose_from_result_list(&[mixed, not_loss]);
        assert!(chosen.is_not_loss());
        assert!(!chosen.is_forced_win());
    }

    #[test]
    fn mixed_beats_forced_loss() {
        let mixed = result_with(1, 1, 0);
        let loss = result_with(0, 1, 0);
        let chosen = choose_from_result_list(&[loss, mixed]);
        assert_eq!(chosen.accumulator().win_count(), 1);
    }

    #[test]
    fn best_loss_chosen_when_all_are_losses() {
        let worse = result_with(0, 5, 0);
        let better = result_with(0, 1, 0);
        // both forced losses (win=0); win_score is 0 for both here since
        // accidental_win_count is also 0, so this just exercises the path.
        let chosen = choose_from_result_list(&[worse, better]);
        assert!(chosen.is_forced_loss());
    }
}

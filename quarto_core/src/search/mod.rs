//! The two-phase minimax search: accumulator and result types, the
//! depth controller, the recursive engine, and the ranking procedure.

pub mod accumulator;
pub mod depth;
pub mod engine;
pub mod rank;
pub mod result;

pub use accumulator::SearchAccumulator;
pub use depth::{DepthBudget, depth_budget, depth_budget_for_board};
pub use engine::{choose_piece, choose_square_and_piece, search_from_give_phase, search_from_place_phase};
pub use rank::choose_from_result_list;
pub use result::SearchResult;

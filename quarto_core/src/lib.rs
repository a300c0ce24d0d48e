//! Core library for the Quarto decision engine: board representation,
//! win/near-win evaluation, and the two-phase minimax search that picks
//! which piece to give and where to place a received piece.

pub mod board;
pub mod piece;
pub mod rng;
pub mod search;

pub use board::Board;
pub use piece::Piece;
pub use rng::QuartoRng;
pub use search::{SearchAccumulator, SearchResult};

//! Computer opponent for `verso-reversi`: a depth-limited tree search over
//! legal moves with a static positional evaluation, plus the interactive
//! console game built on top of it.

pub mod cli;
pub mod eval;
pub mod search;

pub use eval::Weights;
pub use search::SearchNode;

/// Opponent strength, as offered by the difficulty menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// The search depth this difficulty buys, in plies: two per level.
    pub fn search_depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Normal => 4,
            Difficulty::Hard => 6,
        }
    }
}

//! Depth-limited tree search over legal moves.
//!
//! The tree is built lazily: each node materializes its legal children once,
//! recurses to a fixed remaining depth, and commits to one child. Leaves and
//! forced passes fall back to the static positional deficit.
//!
//! Selection is not minimax. Every interior node takes the child with the
//! numerically largest stored score, no matter which side that score was
//! computed for, then rescores itself from the chosen child's position. The
//! asymmetry is intentional behavior, not an oversight: changing it changes
//! how the opponent plays.

use crate::eval::Weights;
use verso_reversi::{Board, Coord, Move, Side};

/// One node of the search tree: a position, the side whose turn it
/// evaluates, and the search results for that side.
#[derive(Clone, Debug)]
pub struct SearchNode {
    board: Board,
    to_move: Side,
    score: i32,
    best: Option<Move>,
    children: Vec<(Coord, SearchNode)>,
    expanded: bool,
    chosen: Option<usize>,
}

impl SearchNode {
    /// A fresh, unexplored node.
    pub fn new(board: Board, to_move: Side) -> Self {
        SearchNode {
            board,
            to_move,
            score: 0,
            best: None,
            children: Vec::new(),
            expanded: false,
            chosen: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// The node's heuristic score, valid once [`SearchNode::compute`] ran.
    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// The move chosen for `to_move`: `None` until [`SearchNode::compute`]
    /// decides one, `Some(Move::Pass)` when there is nothing to play.
    #[inline]
    pub fn best(&self) -> Option<Move> {
        self.best
    }

    /// Search `depth` plies below this node, filling in `score` and `best`.
    ///
    /// Children are enumerated on the first visit and reused afterwards, so
    /// recomputing a node is cheap and yields the same decision.
    pub fn compute(&mut self, depth: u32, weights: &Weights) {
        // Out of lookahead, or no cell left to play on: score the position
        // as it stands. No move gets decided here.
        if depth == 0 || self.board.is_full() {
            self.score = weights.deficit(&self.board, self.to_move);
            return;
        }

        if !self.expanded {
            let opponent = !self.to_move;
            self.children = self
                .board
                .legal_moves(self.to_move)
                .into_iter()
                .map(|(at, board)| (at, SearchNode::new(board, opponent)))
                .collect();
            self.expanded = true;
        }

        // Forced pass: the turn goes over unplayed.
        if self.children.is_empty() {
            self.score = weights.deficit(&self.board, self.to_move);
            self.best = Some(Move::Pass);
            self.chosen = None;
            return;
        }

        for (_, child) in self.children.iter_mut() {
            child.compute(depth - 1, weights);
        }

        // Highest stored child score wins; the first of equals sticks, and
        // children sit in row-major enumeration order.
        let mut best_index = 0;
        let mut best_score = i32::MIN;
        for (index, (_, child)) in self.children.iter().enumerate() {
            if child.score > best_score {
                best_score = child.score;
                best_index = index;
            }
        }

        let (at, chosen) = &self.children[best_index];
        self.best = Some(Move::Place(*at));
        self.score = weights.deficit(&chosen.board, self.to_move);
        self.chosen = Some(best_index);
    }

    /// Commit the placement picked by the last [`SearchNode::compute`]: this
    /// node becomes the chosen child, keeping that child's explored subtree.
    /// The rest of the tree is dropped.
    ///
    /// # Panics
    /// If no placement is pending; passes and uncomputed nodes have nothing
    /// to commit.
    pub fn apply_best(&mut self) {
        let index = self
            .chosen
            .take()
            .expect("apply_best with no pending placement");
        let (_, child) = self.children.swap_remove(index);
        *self = child;
    }
}

//! The interactive console game.
//!
//! A thin shell over the library: rules questions go through
//! [`Board`], the computer's play through [`SearchNode`].

use crate::eval::Weights;
use crate::search::SearchNode;
use crate::Difficulty;
use anyhow::{bail, Result};
use itertools::Itertools;
use std::io::{self, Write};
use verso_reversi::{Board, Coord, Dims, Move, Side};

/// Run one full game against the console player on the default board.
pub fn run() -> Result<()> {
    println!("cpu level: [1] easy, [2] normal, [3] hard.");
    let difficulty = match prompt_choice(&["1", "2", "3"])? {
        0 => Difficulty::Easy,
        1 => Difficulty::Normal,
        _ => Difficulty::Hard,
    };

    println!("play first as [{}], or second as [{}].", Side::White, Side::Black);
    let human = match prompt_choice(&["o", "x"])? {
        0 => Side::White,
        _ => Side::Black,
    };
    let cpu = !human;

    let dims = Dims::default();
    let depth = difficulty.search_depth();
    let weights = Weights::for_dims(dims);
    let mut node = SearchNode::new(Board::standard(dims), cpu);

    // The computer opens when it holds White.
    if cpu == Side::White {
        println!("\n{}\n", node.board());
        cpu_turn(&mut node, depth, &weights);
    }

    let mut pass_count = 0;
    while !node.board().is_full() && pass_count < 2 {
        pass_count = 0;

        println!("\n{}\n", node.board());
        match human_turn(node.board(), human)? {
            Some(board) => node = SearchNode::new(board, cpu),
            None => {
                pass_count += 1;
                node = SearchNode::new(node.board().clone(), cpu);
            }
        }

        if !node.board().is_full() {
            println!("\n{}\n", node.board());
            if cpu_turn(&mut node, depth, &weights) == Move::Pass {
                pass_count += 1;
            }
        }
    }

    let board = node.board();
    println!("\n{}\n", board);
    let human_count = board.count(human);
    let cpu_count = board.count(cpu);
    println!("player: {}", human_count);
    println!("cpu: {}", cpu_count);
    if human_count > cpu_count {
        println!("player wins.");
    } else if cpu_count > human_count {
        println!("cpu wins.");
    } else {
        println!("draw.");
    }
    Ok(())
}

/// Ask the human for a move until a legal one arrives, or report their
/// forced pass. Returns the committed board, or `None` on a pass.
fn human_turn(board: &Board, human: Side) -> Result<Option<Board>> {
    let moves = board.legal_moves(human);
    if moves.is_empty() {
        println!("player: pass...");
        return Ok(None);
    }

    loop {
        let line = prompt()?;
        let mv: Move = match line.trim().parse() {
            Ok(mv) => mv,
            Err(_) => {
                println!("cannot parse that.");
                continue;
            }
        };
        let at = match mv {
            Move::Place(at) => at,
            // Passing is only allowed when there is no move to make.
            Move::Pass => {
                println!("you have moves. legal: {}", legal_list(&moves));
                continue;
            }
        };
        if let Some((_, next)) = moves.iter().find(|(coord, _)| *coord == at) {
            return Ok(Some(next.clone()));
        }
        println!("illegal move. legal: {}", legal_list(&moves));
    }
}

/// Compute and commit the computer's move, narrating it. Returns the move.
fn cpu_turn(node: &mut SearchNode, depth: u32, weights: &Weights) -> Move {
    node.compute(depth, weights);
    match node.best() {
        Some(Move::Place(at)) => {
            node.apply_best();
            println!("cpu: {}", at);
            Move::Place(at)
        }
        _ => {
            println!("cpu: pass...");
            Move::Pass
        }
    }
}

fn legal_list(moves: &[(Coord, Board)]) -> String {
    moves.iter().map(|(at, _)| at).format(", ").to_string()
}

/// Print the input marker and read one trimmed line.
fn prompt() -> Result<String> {
    print!(">> ");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("input ended mid-game");
    }
    Ok(line)
}

/// Prompt until the player enters one of `keys`; returns the key's index.
fn prompt_choice(keys: &[&str]) -> Result<usize> {
    loop {
        let line = prompt()?;
        let entered = line.trim();
        if let Some(index) = keys.iter().position(|key| key.eq_ignore_ascii_case(entered)) {
            return Ok(index);
        }
        println!("pick one of: {}.", keys.iter().format(", "));
    }
}

//! The interactive text driver: alternates give/place decisions
//! between the AI search and (optionally) a human typing at stdin,
//! mirroring the original reference driver's prompt loop.

use anyhow::Context;
use quarto_core::board::{NUM_PLAYERS, NUM_SQUARES};
use quarto_core::piece::NUM_PIECES;
use quarto_core::{Board, Piece, QuartoRng};
use std::io::{self, Write};

pub struct GameDriver {
    board: Board,
    rng: QuartoRng,
    is_human: [bool; NUM_PLAYERS],
}

impl GameDriver {
    pub fn new(board: Board, rng: QuartoRng, is_human: [bool; NUM_PLAYERS]) -> Self {
        Self { board, rng, is_human }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        while !self.board.is_game_over() {
            println!();
            print!("{}", self.board);

            let giver = self.board.current_give_player_index();
            let give_piece = if self.is_human[giver] {
                human_choose_piece(&self.board)?
            } else {
                println!("\nPlayer {} is selecting a piece...", giver + 1);
                let (piece, _) = quarto_core::search::choose_piece(&self.board, giver, &mut self.rng);
                println!("Player {} selected piece {piece}", giver + 1);
                piece
            };

            println!();
            print!("{}", self.board);

            let placer = self.board.current_place_player_index();
            let square = if self.is_human[placer] {
                human_choose_square(&self.board, give_piece)?
            } else {
                println!("\nPlayer {} is selecting a square for {give_piece}...", placer + 1);
                let (square, _, _) =
                    quarto_core::search::choose_square_and_piece(&self.board, placer, give_piece, &mut self.rng);
                println!("Player {} selected square {}", placer + 1, square + 1);
                square
            };

            self.board = self.board.place_piece(square, give_piece);
        }

        print!("{}", self.board);
        if self.board.is_win() {
            println!("Congratulations, Player {}!", self.board.winning_player_index() + 1);
        } else {
            println!("Game is a draw, thanks for playing.");
        }
        Ok(())
    }
}

/// Prompts a human for a 1-based piece number, re-prompting on invalid
/// or already-used input.
pub fn human_choose_piece(board: &Board) -> anyhow::Result<Piece> {
    loop {
        print!("Select a piece to give (1-{NUM_PIECES}): ");
        io::stdout().flush()?;
        let number: i64 = match read_number()? {
            Some(n) => n,
            None => continue,
        };
        if number < 1 || number > NUM_PIECES as i64 {
            println!("Invalid piece number: {number}");
            continue;
        }
        let piece = Piece::new((number - 1) as u8);
        if !board.is_unused(piece) {
            println!("Piece {piece} has already been used");
            continue;
        }
        return Ok(piece);
    }
}

/// Prompts a human for a 1-based square number, re-prompting on
/// invalid or occupied input.
pub fn human_choose_square(board: &Board, given: Piece) -> anyhow::Result<usize> {
    loop {
        print!("Select a square to place {given} (1-{NUM_SQUARES}): ");
        io::stdout().flush()?;
        let number: i64 = match read_number()? {
            Some(n) => n,
            None => continue,
        };
        if number < 1 || number > NUM_SQUARES as i64 {
            println!("Invalid square number: {number}");
            continue;
        }
        let square = (number - 1) as usize;
        if !board.is_empty(square) {
            println!("Square {number} is already occupied.");
            continue;
        }
        return Ok(square);
    }
}

fn read_number() -> anyhow::Result<Option<i64>> {
    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line).context("reading from stdin")?;
    if bytes == 0 {
        anyhow::bail!("stdin closed while waiting for input");
    }
    Ok(line.trim().parse::<i64>().ok())
}

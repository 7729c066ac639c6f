use rand::Rng;
use tracing::debug;

use super::input::{parse_choice, InputError};
use super::narration::Transcript;
use crate::content::{Puzzle, Table};

/// Draws one puzzle at random and puts its question and numbered choices in
/// front of the player.
pub fn give_puzzle<R: Rng + ?Sized>(
    puzzles: &Table<Puzzle>,
    rng: &mut R,
    transcript: &mut Transcript,
) -> Puzzle {
    let puzzle = puzzles.pick(rng).clone();
    debug!(question = %puzzle.question, "puzzle given");
    transcript.tell([puzzle.question.as_str()]);
    transcript.offer(puzzle.choices.as_slice());
    puzzle
}

/// Whether `input` names the correct choice. Input that names no choice at
/// all is an error so the caller can ask again with the same puzzle.
pub fn check_answer(puzzle: &Puzzle, input: &str) -> Result<bool, InputError> {
    let chosen = parse_choice(input, puzzle.choices.len())?;
    Ok(chosen == puzzle.answer)
}

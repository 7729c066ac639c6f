use tracing::debug;

use super::narration::Transcript;

pub const MOVEMENT_SCORE: i32 = 5;
pub const SOLVE_PUZZLE: i32 = 10;
pub const RUN_AWAY: i32 = -5;

/// Adds every delta to `total`, tells the player the new total and returns
/// it. There is no floor: a run of bad decisions can go negative.
pub fn impact_score(total: i32, deltas: &[i32], transcript: &mut Transcript) -> i32 {
    let updated = deltas.iter().fold(total, |sum, delta| sum + delta);
    debug!(before = total, after = updated, ?deltas, "score changed");
    transcript.score(updated);
    updated
}

use tracing::debug;

use super::narration::Transcript;
use crate::content::{Antagonist, Weapon};

/// Swings `weapon` at `antagonist` and returns damage minus health.
///
/// A negative result means the antagonist prevails; zero or more means the
/// player does. Either way the matching scene is told.
pub fn attack(weapon: &Weapon, antagonist: &Antagonist, transcript: &mut Transcript) -> i32 {
    let attack_score = weapon.damage - antagonist.health;
    debug!(
        weapon = %weapon.name,
        damage = weapon.damage,
        antagonist = %antagonist.name,
        health = antagonist.health,
        attack_score,
        "attack resolved"
    );

    if attack_score < 0 {
        transcript.tell([
            "You do your best...".to_string(),
            format!(
                "but your rusty old {} is no match for the {}. You have been defeated!",
                weapon.name, antagonist.name
            ),
        ]);
    } else {
        transcript.tell([
            format!("As the {} moves to attack you,", antagonist.name),
            format!("you raise your new {}.", weapon.name),
            format!(
                "The {} shines brightly in your hand as you brace yourself for the attack.",
                weapon.name
            ),
            format!(
                "But the {} takes one look at your shiny new {} and runs away!",
                antagonist.name, weapon.name
            ),
            format!(
                "You have rid the town of the {}. You are victorious!",
                antagonist.name
            ),
        ]);
    }

    attack_score
}

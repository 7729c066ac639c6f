//! The three places the player can be: the open field, the antagonist's
//! house and the genie's cave.
//!
//! Each scene is split in two: `enter_*` tells the scene and offers its
//! choices, the matching `leave_*`/`resolve_*` applies whatever the player
//! picked and says where to go next.

use rand::Rng;
use tracing::debug;

use super::combat::attack;
use super::narration::Transcript;
use super::riddle::give_puzzle;
use super::scoring::{impact_score, MOVEMENT_SCORE, RUN_AWAY, SOLVE_PUZZLE};
use super::session::Session;
use crate::content::{Content, Puzzle, Weapon};

pub const FIELD_CHOICES: [&str; 2] = ["knock on the door of the house.", "peer into the cave."];
pub const HOUSE_CHOICES: [&str; 2] = ["Attack", "run away?"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Field,
    House,
    Cave,
}

impl Scene {
    pub fn title(self) -> &'static str {
        match self {
            Scene::Field => "Open Field",
            Scene::House => "The House",
            Scene::Cave => "Dark Cave",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Won,
    Lost,
}

impl Status {
    pub fn banner(self) -> &'static str {
        match self {
            Status::Won => "You won!",
            Status::Lost => "You lost!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Scene(Scene),
    Finished(Status),
}

/// A cave visit waiting on the player's answer to the genie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaveVisit {
    pub puzzle: Puzzle,
    pub legendary: Weapon,
}

pub fn enter_field(session: &Session, first_visit: bool, transcript: &mut Transcript) {
    if first_visit {
        transcript.tell([
            "You find yourself standing in an open field,".to_string(),
            "filled with grass and yellow wildflowers.".to_string(),
            format!(
                "Rumor has it that a {} is somewhere around here,",
                session.antagonist.name
            ),
            "and has been terrifying the nearby village.".to_string(),
            "In front of you is a house.".to_string(),
            "To your right is a dark cave.".to_string(),
            format!(
                "In your hand you hold your trusty (but not very effective) {}.",
                session.weapon.name
            ),
        ]);
    } else {
        transcript.tell(["You find yourself standing in an open field,"]);
    }
    transcript.offer(&FIELD_CHOICES);
}

/// Walking anywhere from the field earns the movement bonus.
pub fn leave_field(session: &mut Session, choice: usize, transcript: &mut Transcript) -> Scene {
    session.score = impact_score(session.score, &[MOVEMENT_SCORE], transcript);
    match choice {
        1 => Scene::House,
        _ => Scene::Cave,
    }
}

pub fn enter_house(session: &Session, transcript: &mut Transcript) {
    let name = &session.antagonist.name;
    transcript.tell([
        "You approach the door of the house.".to_string(),
        format!("You are about to knock when the door opens and out steps a {name}."),
        format!("Eep! This is the {name}'s house!"),
        format!("The {name} finds you!"),
        "Would you like to:".to_string(),
    ]);
    transcript.offer(&HOUSE_CHOICES);
}

/// Attacking ends the play-through; running away costs points and leads
/// back to the field.
///
/// Winning takes both a non-negative attack and a positive total afterwards.
pub fn resolve_house(session: &mut Session, choice: usize, transcript: &mut Transcript) -> Next {
    match choice {
        1 => {
            let attack_score = attack(&session.weapon, &session.antagonist, transcript);
            session.score = impact_score(session.score, &[attack_score], transcript);
            let status = if attack_score >= 0 && session.score > 0 {
                Status::Won
            } else {
                Status::Lost
            };
            debug!(?status, score = session.score, "battle over");
            Next::Finished(status)
        }
        _ => {
            session.score = impact_score(session.score, &[RUN_AWAY], transcript);
            Next::Scene(Scene::Field)
        }
    }
}

/// Tells the genie's arrival and hands over the riddle. The reward is drawn
/// up front so the tale can name it once the riddle is answered.
pub fn enter_cave<R: Rng + ?Sized>(
    content: &Content,
    rng: &mut R,
    transcript: &mut Transcript,
) -> CaveVisit {
    transcript.tell([
        "You peer cautiously into the cave.",
        "You find a genie.",
        "The genie gives you a riddle that reads:",
    ]);
    let legendary = content.legendary_weapons.pick(rng).clone();
    let puzzle = give_puzzle(&content.puzzles, rng, transcript);
    CaveVisit { puzzle, legendary }
}

pub fn resolve_cave(
    session: &mut Session,
    visit: CaveVisit,
    solved: bool,
    transcript: &mut Transcript,
) -> Scene {
    transcript.tell([
        "It turns out to be only a very small cave.",
        "Your eye catches a glint of metal behind a rock.",
    ]);

    if solved {
        let legendary = visit.legendary;
        transcript.tell([
            format!("You have found {}!", legendary.name),
            format!(
                "You discard your rusty old {} and take the {} with you.",
                session.weapon.name, legendary.name
            ),
            "You walk back out to the field.".to_string(),
        ]);
        debug!(from = %session.weapon.name, to = %legendary.name, "weapon upgraded");
        session.weapon = legendary;
        session.score = impact_score(session.score, &[SOLVE_PUZZLE], transcript);
    } else {
        transcript.tell([
            "But, it turns out to be a broken car wheel.",
            "You walk back out to the field.",
        ]);
    }

    Scene::Field
}

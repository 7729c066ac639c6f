use rand::Rng;

use crate::content::{Antagonist, Content, Weapon};

/// Everything one play-through carries from scene to scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub antagonist: Antagonist,
    pub weapon: Weapon,
    pub score: i32,
}

impl Session {
    /// A fresh play-through: a random antagonist, a random regular weapon
    /// and no score.
    pub fn new<R: Rng + ?Sized>(content: &Content, rng: &mut R) -> Self {
        Session {
            antagonist: content.antagonists.pick(rng).clone(),
            weapon: content.regular_weapons.pick(rng).clone(),
            score: 0,
        }
    }
}

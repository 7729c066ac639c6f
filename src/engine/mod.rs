pub mod combat;
pub mod game;
pub mod input;
pub mod narration;
pub mod riddle;
pub mod scenes;
pub mod scoring;
pub mod session;

pub use game::{Flow, Game};
pub use narration::Narration;

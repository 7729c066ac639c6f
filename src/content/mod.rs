pub mod loader;
pub mod types;

pub use loader::load_embedded;
pub use types::{Antagonist, Content, Puzzle, Table, Weapon};

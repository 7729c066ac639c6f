use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct Content {
    pub antagonists: Table<Antagonist>,
    pub regular_weapons: Table<Weapon>,
    pub legendary_weapons: Table<Weapon>,
    pub puzzles: Table<Puzzle>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Antagonist {
    pub name: String,
    pub health: i32,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Weapon {
    pub name: String,
    pub damage: i32,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub question: String,
    pub choices: Vec<String>,
    pub answer: usize, // 1-based index into `choices`
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("a content table needs at least one entry")]
pub struct EmptyTable;

/// A fixed list of entries the game draws from at random.
///
/// Construction rejects an empty list, so [`Table::pick`] always has
/// something to return.
#[derive(Debug, Deserialize, Clone)]
#[serde(try_from = "Vec<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Table<T> {
    entries: Vec<T>,
}

impl<T> Table<T> {
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.entries[rng.gen_range(0..self.entries.len())]
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

impl<T> TryFrom<Vec<T>> for Table<T> {
    type Error = EmptyTable;

    fn try_from(entries: Vec<T>) -> Result<Self, Self::Error> {
        if entries.is_empty() {
            return Err(EmptyTable);
        }
        Ok(Table { entries })
    }
}

/// One line of what the player gets told.
///
/// Styling is carried as data: the front end decides what a highlighted
/// choice key or a marked banner looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narration {
    Line(String),
    Choice { key: usize, label: String },
    Score(i32),
    Banner(String),
}

/// The page of narration currently in front of the player.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Narration>,
}

impl Transcript {
    pub fn tell<I, S>(&mut self, tale: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .extend(tale.into_iter().map(|line| Narration::Line(line.into())));
    }

    /// Lists `choices` numbered from 1.
    pub fn offer<S: AsRef<str>>(&mut self, choices: &[S]) {
        self.entries
            .extend(choices.iter().enumerate().map(|(index, label)| Narration::Choice {
                key: index + 1,
                label: label.as_ref().to_string(),
            }));
    }

    pub fn score(&mut self, total: i32) {
        self.entries.push(Narration::Score(total));
    }

    pub fn banner(&mut self, text: impl Into<String>) {
        self.entries.push(Narration::Banner(text.into()));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Narration] {
        &self.entries
    }

    #[cfg(test)]
    pub fn contains_line(&self, needle: &str) -> bool {
        self.entries.iter().any(|entry| match entry {
            Narration::Line(line) | Narration::Banner(line) => line.contains(needle),
            Narration::Choice { label, .. } => label.contains(needle),
            Narration::Score(_) => false,
        })
    }
}

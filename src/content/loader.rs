use anyhow::{ensure, Context, Result};
use tracing::debug;

use super::types::Content;

const EMBEDDED: &str = include_str!("../../content/adventure.toml");

pub fn load_embedded() -> Result<Content> {
    parse_content(EMBEDDED).context("built-in adventure content is invalid")
}

pub fn parse_content(source: &str) -> Result<Content> {
    let content: Content = toml::from_str(source)?;

    for (index, puzzle) in content.puzzles.entries().iter().enumerate() {
        let number = index + 1;
        ensure!(
            !puzzle.choices.is_empty(),
            "puzzle {} ({:?}) has no choices",
            number,
            puzzle.question
        );
        ensure!(
            (1..=puzzle.choices.len()).contains(&puzzle.answer),
            "puzzle {} ({:?}) answer {} is not one of its {} choices",
            number,
            puzzle.question,
            puzzle.answer,
            puzzle.choices.len()
        );
    }

    debug!(
        antagonists = content.antagonists.entries().len(),
        regular_weapons = content.regular_weapons.entries().len(),
        legendary_weapons = content.legendary_weapons.entries().len(),
        puzzles = content.puzzles.entries().len(),
        "loaded adventure content"
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [[antagonists]]
        name = "troll"
        health = 20

        [[regular_weapons]]
        name = "dagger"
        damage = 10

        [[legendary_weapons]]
        name = "golden dagger"
        damage = 50

        [[puzzles]]
        question = "How many minutes in an hour?"
        choices = ["60", "100", "13"]
        answer = 1
    "#;

    #[test]
    fn embedded_content_matches_the_game_tables() {
        let content = load_embedded().unwrap();
        assert_eq!(content.antagonists.entries().len(), 4);
        assert_eq!(content.regular_weapons.entries().len(), 3);
        assert_eq!(content.legendary_weapons.entries().len(), 3);
        assert_eq!(content.puzzles.entries().len(), 3);
        assert!(content
            .puzzles
            .entries()
            .iter()
            .all(|puzzle| puzzle.choices.len() == 3));
    }

    #[test]
    fn legendary_weapons_outclass_every_antagonist() {
        let content = load_embedded().unwrap();
        let toughest = content
            .antagonists
            .entries()
            .iter()
            .map(|a| a.health)
            .max()
            .unwrap();
        assert!(content
            .legendary_weapons
            .entries()
            .iter()
            .all(|w| w.damage >= toughest));
    }

    #[test]
    fn parses_minimal_document() {
        let content = parse_content(MINIMAL).unwrap();
        assert_eq!(content.antagonists.entries()[0].name, "troll");
        assert_eq!(content.puzzles.entries()[0].answer, 1);
    }

    #[test]
    fn rejects_empty_table() {
        let without_legendary = MINIMAL.replace(
            "[[legendary_weapons]]\n        name = \"golden dagger\"\n        damage = 50",
            "",
        );
        let source = format!("legendary_weapons = []\n{without_legendary}");
        let err = parse_content(&source).unwrap_err();
        assert!(format!("{err:#}").contains("at least one entry"));
    }

    #[test]
    fn rejects_answer_outside_choices() {
        let source = MINIMAL.replace("answer = 1", "answer = 4");
        let err = parse_content(&source).unwrap_err();
        assert!(err.to_string().contains("answer 4"));
    }

    #[test]
    fn rejects_zero_answer() {
        let source = MINIMAL.replace("answer = 1", "answer = 0");
        assert!(parse_content(&source).is_err());
    }

    #[test]
    fn rejects_missing_field() {
        let source = MINIMAL.replace("health = 20", "");
        assert!(parse_content(&source).is_err());
    }
}

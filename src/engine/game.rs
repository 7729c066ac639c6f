use rand::Rng;
use tracing::{debug, info};

use super::input::{parse_choice, parse_reply, InputError};
use super::narration::Transcript;
use super::riddle::check_answer;
use super::scenes::{
    enter_cave, enter_field, enter_house, leave_field, resolve_cave, resolve_house, CaveVisit,
    Next, Scene, Status, FIELD_CHOICES, HOUSE_CHOICES,
};
use super::session::Session;
use crate::content::Content;

const CHOICE_PROMPT: &str = "What would you like to do? (Please enter a number)";
const REPLAY_PROMPT: &str = "Would you like to play again? (y/n)";

/// What the front end should do after a line of input was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The question the player currently has to answer.
#[derive(Debug)]
enum Pending {
    Field,
    House,
    Cave(CaveVisit),
    Replay(Status),
}

/// Drives play-throughs one line of input at a time.
///
/// Every accepted line turns the page: the transcript is cleared, the
/// current scene resolves, and the next scene is told. Rejected input
/// leaves everything as it was.
#[derive(Debug)]
pub struct Game<R> {
    content: Content,
    rng: R,
    session: Session,
    scene: Scene,
    pending: Pending,
    transcript: Transcript,
}

impl<R: Rng> Game<R> {
    pub fn new(content: Content, mut rng: R) -> Self {
        let session = Session::new(&content, &mut rng);
        let mut game = Game {
            content,
            rng,
            session,
            scene: Scene::Field,
            pending: Pending::Field,
            transcript: Transcript::default(),
        };
        game.begin();
        game
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The outcome of the finished play-through, if there is one.
    pub fn status(&self) -> Option<Status> {
        match self.pending {
            Pending::Replay(status) => Some(status),
            _ => None,
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self.pending {
            Pending::Replay(_) => REPLAY_PROMPT,
            _ => CHOICE_PROMPT,
        }
    }

    pub fn submit(&mut self, input: &str) -> Result<Flow, InputError> {
        match &self.pending {
            Pending::Field => {
                let choice = parse_choice(input, FIELD_CHOICES.len())?;
                self.transcript.clear();
                let next = leave_field(&mut self.session, choice, &mut self.transcript);
                self.enter(next);
            }
            Pending::House => {
                let choice = parse_choice(input, HOUSE_CHOICES.len())?;
                self.transcript.clear();
                match resolve_house(&mut self.session, choice, &mut self.transcript) {
                    Next::Scene(scene) => self.enter(scene),
                    Next::Finished(status) => self.finish(status),
                }
            }
            Pending::Cave(visit) => {
                let solved = check_answer(&visit.puzzle, input)?;
                debug!(solved, "riddle answered");
                let visit = visit.clone();
                self.transcript.clear();
                let next = resolve_cave(&mut self.session, visit, solved, &mut self.transcript);
                self.enter(next);
            }
            Pending::Replay(_) => {
                if !parse_reply(input)? {
                    info!(score = self.session.score, "player is done playing");
                    return Ok(Flow::Exit);
                }
                self.session = Session::new(&self.content, &mut self.rng);
                self.begin();
            }
        }
        Ok(Flow::Continue)
    }

    fn begin(&mut self) {
        info!(
            antagonist = %self.session.antagonist.name,
            weapon = %self.session.weapon.name,
            "new play-through"
        );
        self.transcript.clear();
        self.scene = Scene::Field;
        self.pending = Pending::Field;
        enter_field(&self.session, true, &mut self.transcript);
    }

    fn enter(&mut self, scene: Scene) {
        debug!(from = ?self.scene, to = ?scene, score = self.session.score, "scene change");
        self.scene = scene;
        self.pending = match scene {
            Scene::Field => {
                enter_field(&self.session, false, &mut self.transcript);
                Pending::Field
            }
            Scene::House => {
                enter_house(&self.session, &mut self.transcript);
                Pending::House
            }
            Scene::Cave => {
                let visit = enter_cave(&self.content, &mut self.rng, &mut self.transcript);
                Pending::Cave(visit)
            }
        };
    }

    fn finish(&mut self, status: Status) {
        info!(?status, score = self.session.score, "play-through finished");
        self.transcript.banner(status.banner());
        self.transcript
            .tell([format!("Your total score is: {}", self.session.score)]);
        self.pending = Pending::Replay(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::load_embedded;
    use crate::engine::narration::Narration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(seed: u64) -> Game<StdRng> {
        Game::new(load_embedded().unwrap(), StdRng::seed_from_u64(seed))
    }

    fn riddle(game: &Game<StdRng>) -> &CaveVisit {
        match &game.pending {
            Pending::Cave(visit) => visit,
            other => panic!("expected a riddle, found {other:?}"),
        }
    }

    fn wrong_answer(visit: &CaveVisit) -> String {
        (1..=visit.puzzle.choices.len())
            .find(|choice| *choice != visit.puzzle.answer)
            .unwrap()
            .to_string()
    }

    #[test]
    fn starts_in_the_field_with_the_opening_tale() {
        let game = game(1);
        assert_eq!(game.scene(), Scene::Field);
        assert_eq!(game.session().score, 0);
        assert_eq!(game.status(), None);
        assert_eq!(game.prompt(), CHOICE_PROMPT);
        assert!(game.transcript().contains_line("yellow wildflowers"));
    }

    #[test]
    fn invalid_input_changes_nothing() {
        let mut game = game(2);
        let before = game.session().clone();
        for input in ["", "0", "3", "house"] {
            assert_eq!(
                game.submit(input),
                Err(InputError::NotAChoice { highest: 2 })
            );
        }
        assert_eq!(game.session(), &before);
        assert_eq!(game.scene(), Scene::Field);
        assert!(game.transcript().contains_line("yellow wildflowers"));
    }

    #[test]
    fn invalid_input_at_the_house_changes_nothing() {
        let mut game = game(8);
        game.submit("1").unwrap();
        assert_eq!(game.scene(), Scene::House);
        let before = game.session().clone();

        for input in ["3", "", " 1", "attack"] {
            assert_eq!(
                game.submit(input),
                Err(InputError::NotAChoice { highest: 2 })
            );
        }

        assert_eq!(game.session(), &before);
        assert_eq!(game.scene(), Scene::House);
        assert_eq!(game.prompt(), CHOICE_PROMPT);
        assert_eq!(game.status(), None);
        assert!(game.transcript().contains_line("Would you like to:"));
    }

    #[test]
    fn solving_the_riddle_upgrades_the_weapon_for_good() {
        let mut game = game(3);
        let content = load_embedded().unwrap();

        assert_eq!(game.submit("2"), Ok(Flow::Continue));
        assert_eq!(game.scene(), Scene::Cave);
        assert_eq!(game.session().score, 5);

        let visit = riddle(&game).clone();
        assert_eq!(game.submit("7"), Err(InputError::NotAChoice { highest: 3 }));
        assert_eq!(riddle(&game), &visit);

        game.submit(&visit.puzzle.answer.to_string()).unwrap();
        assert_eq!(game.scene(), Scene::Field);
        assert_eq!(game.session().score, 15);
        assert_eq!(game.session().weapon, visit.legendary);
        assert!(game.transcript().contains_line("You walk back out to the field."));
        assert!(!game.transcript().contains_line("yellow wildflowers"));

        game.submit("2").unwrap();
        let second = riddle(&game).clone();
        game.submit(&wrong_answer(&second)).unwrap();
        assert_eq!(game.session().weapon, visit.legendary);
        assert!(content
            .legendary_weapons
            .entries()
            .contains(&game.session().weapon));
    }

    #[test]
    fn failing_the_riddle_keeps_the_weapon() {
        let mut game = game(4);
        let weapon = game.session().weapon.clone();
        game.submit("2").unwrap();
        let answer = wrong_answer(riddle(&game));
        game.submit(&answer).unwrap();
        assert_eq!(game.scene(), Scene::Field);
        assert_eq!(game.session().weapon, weapon);
        assert_eq!(game.session().score, 5);
    }

    #[test]
    fn fleeing_returns_to_the_field() {
        let mut game = game(5);
        game.submit("1").unwrap();
        assert_eq!(game.scene(), Scene::House);
        game.submit("2").unwrap();
        assert_eq!(game.scene(), Scene::Field);
        assert_eq!(game.session().score, 0);
        assert_eq!(game.status(), None);
        assert_eq!(game.transcript().entries()[0], Narration::Score(0));
    }

    #[test]
    fn attacking_with_a_regular_weapon_ends_the_play_through() {
        for seed in 0..8 {
            let mut game = game(seed);
            let health = game.session().antagonist.health;
            let damage = game.session().weapon.damage;
            game.submit("1").unwrap();
            game.submit("1").unwrap();

            let expected = if damage >= health { Status::Won } else { Status::Lost };
            assert_eq!(game.status(), Some(expected));
            assert_eq!(game.session().score, 5 + damage - health);
            assert_eq!(game.prompt(), REPLAY_PROMPT);
            assert!(game
                .transcript()
                .entries()
                .contains(&Narration::Banner(expected.banner().to_string())));
        }
    }

    #[test]
    fn legendary_weapon_always_wins() {
        let mut game = game(6);
        game.submit("2").unwrap();
        let answer = riddle(&game).puzzle.answer.to_string();
        game.submit(&answer).unwrap();
        game.submit("1").unwrap();
        game.submit("1").unwrap();
        assert_eq!(game.status(), Some(Status::Won));
        assert!(game.transcript().contains_line("You are victorious!"));
    }

    #[test]
    fn replay_starts_over_and_no_exits() {
        let mut game = game(7);
        game.submit("1").unwrap();
        game.submit("1").unwrap();
        assert!(game.status().is_some());

        assert_eq!(game.submit("maybe"), Err(InputError::NotYesNo));
        assert!(game.status().is_some());

        assert_eq!(game.submit("y"), Ok(Flow::Continue));
        assert_eq!(game.status(), None);
        assert_eq!(game.scene(), Scene::Field);
        assert_eq!(game.session().score, 0);
        assert!(game.transcript().contains_line("yellow wildflowers"));

        game.submit("1").unwrap();
        game.submit("1").unwrap();
        assert_eq!(game.submit("n"), Ok(Flow::Exit));
    }
}

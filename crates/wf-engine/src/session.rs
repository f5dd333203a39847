//! Game session management.
//!
//! `GameSession` owns all session-scoped state (enemy, weapon, discovery
//! flag, score, and current stage) and advances it through an explicit
//! stage loop instead of recursive handlers, so long replay chains never
//! grow the call stack. Frontends alternate `step` (drain auto stages) with
//! `prompt`/`choose` (blocking player input) until `is_over`.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SessionConfig;
use crate::enemy::Enemy;
use crate::error::{EngineError, EngineResult};
use crate::narration::Narration;
use crate::score::{Score, delta};
use crate::stage::Stage;
use crate::weapon::Weapon;

/// A pending request for player input: prompt text plus the enumerated
/// options that will be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    /// The text to display when asking.
    pub text: &'static str,
    /// The accepted options; anything else is rejected and re-asked.
    pub options: &'static [&'static str],
}

/// The field prompt: house or cave.
const FIELD_PROMPT: Prompt = Prompt {
    text: "What would you like to do? (1 or 2): ",
    options: &["1", "2"],
};

/// The fight prompt: stand and fight or run away.
const FIGHT_PROMPT: Prompt = Prompt {
    text: "Would you like to (1) fight or (2) run away? ",
    options: &["1", "2"],
};

/// The replay prompt shown once a fight has resolved.
const REPLAY_PROMPT: Prompt = Prompt {
    text: "Would you like to play again? (y/n): ",
    options: &["y", "n"],
};

/// One playthrough of the adventure, replayable in place.
pub struct GameSession {
    enemy: Enemy,
    weapon: Weapon,
    special_weapon_found: bool,
    score: Score,
    stage: Stage,
    rng: StdRng,
}

impl GameSession {
    /// Create a new session, drawing the enemy from the seeded RNG.
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let enemy = Enemy::draw(&mut rng);
        Self {
            enemy,
            weapon: Weapon::Dagger,
            special_weapon_found: false,
            score: Score::new(),
            stage: Stage::Intro,
            rng,
        }
    }

    /// Get the enemy menacing the village this session.
    pub fn enemy(&self) -> Enemy {
        self.enemy
    }

    /// Get the weapon the player currently carries.
    pub fn weapon(&self) -> Weapon {
        self.weapon
    }

    /// Whether the Sword of Slaying has been found this session.
    pub fn special_weapon_found(&self) -> bool {
        self.special_weapon_found
    }

    /// Get the accumulated score.
    pub fn score(&self) -> i32 {
        self.score.value()
    }

    /// Get the current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Whether the session has ended (replay declined).
    pub fn is_over(&self) -> bool {
        self.stage == Stage::Done
    }

    /// Advance through auto-narrating stages until the session needs a
    /// choice or is over, returning the narration emitted along the way.
    ///
    /// Calling this while a prompt is already pending is a no-op.
    pub fn step(&mut self) -> Vec<Narration> {
        let mut events = Vec::new();
        loop {
            match self.stage {
                Stage::Intro => self.narrate_intro(&mut events),
                Stage::Cave => self.visit_cave(&mut events),
                Stage::House => self.enter_house(&mut events),
                Stage::Field | Stage::Fight | Stage::End | Stage::Done => break,
            }
        }
        events
    }

    /// The pending prompt, or `None` once the session is over.
    ///
    /// Auto stages carry no prompt; drain them with [`Self::step`] first.
    pub fn prompt(&self) -> Option<Prompt> {
        match self.stage {
            Stage::Field => Some(FIELD_PROMPT),
            Stage::Fight => Some(FIGHT_PROMPT),
            Stage::End => Some(REPLAY_PROMPT),
            _ => None,
        }
    }

    /// Apply a player choice to the current prompting stage.
    ///
    /// Matching is case-insensitive with surrounding whitespace stripped.
    /// Input outside the option set is rejected without touching score,
    /// stage, or weapon, so the caller can re-prompt indefinitely.
    pub fn choose(&mut self, input: &str) -> EngineResult<Vec<Narration>> {
        let choice = input.trim().to_lowercase();
        let mut events = Vec::new();
        match self.stage {
            Stage::Field => match choice.as_str() {
                "1" => {
                    events.push(self.score_banner());
                    self.stage = Stage::House;
                }
                "2" => {
                    events.push(self.score_banner());
                    self.stage = Stage::Cave;
                }
                _ => return Err(EngineError::InvalidChoice(choice)),
            },
            Stage::Fight => match choice.as_str() {
                "1" => self.resolve_fight(&mut events),
                "2" => self.flee(&mut events),
                _ => return Err(EngineError::InvalidChoice(choice)),
            },
            Stage::End => match choice.as_str() {
                "y" => self.restart(&mut events),
                "n" => {
                    events.push(Narration::status("Thanks for playing! Goodbye."));
                    self.stage = Stage::Done;
                }
                _ => return Err(EngineError::InvalidChoice(choice)),
            },
            stage => {
                return Err(EngineError::InvalidChoice(format!(
                    "no prompt pending in the {stage} stage"
                )));
            }
        }
        Ok(events)
    }

    fn narrate_intro(&mut self, events: &mut Vec<Narration>) {
        events.push(Narration::beat(
            "You find yourself standing in an open field, filled with grass \
             and yellow wildflowers.",
        ));
        events.push(Narration::beat(format!(
            "Rumor has it that a wicked {} lurks nearby, terrifying the village.",
            self.enemy
        )));
        events.push(Narration::beat("In front of you is a house."));
        events.push(Narration::beat("To your right is a dark cave."));
        events.push(Narration::beat(format!(
            "In your hand, you hold your trusty (but not very effective) {}.",
            self.weapon
        )));
        events.push(self.score_banner());
        self.arrive_field(events);
    }

    fn visit_cave(&mut self, events: &mut Vec<Narration>) {
        if self.special_weapon_found {
            events.push(Narration::beat("You peer into the cave again."));
            events.push(Narration::beat(
                "You've been here before. It's just an empty cave now.",
            ));
            self.score.apply(delta::EMPTY_CAVE);
        } else {
            events.push(Narration::beat("You peer cautiously into the cave."));
            events.push(Narration::beat("It turns out to be only a very small cave."));
            events.push(Narration::beat(
                "Your eye catches a glint of metal behind a rock...",
            ));
            events.push(Narration::beat(format!(
                "You have found the magical Sword of {} Slaying!",
                self.enemy
            )));
            events.push(Narration::beat(
                "You discard your old dagger and take the sword with you.",
            ));
            self.weapon = Weapon::SwordOfSlaying;
            self.special_weapon_found = true;
            self.score.apply(delta::SWORD_DISCOVERY);
        }
        events.push(self.score_banner());
        self.arrive_field(events);
    }

    fn enter_house(&mut self, events: &mut Vec<Narration>) {
        events.push(Narration::beat("You walk up to the door of the house."));
        events.push(Narration::beat(format!(
            "You are about to knock when the door opens and out steps a {}.",
            self.enemy
        )));
        events.push(Narration::beat(format!(
            "Eep! This is the {}'s house!",
            self.enemy
        )));
        events.push(Narration::beat(format!("The {} attacks you!", self.enemy)));
        if self.weapon == Weapon::Dagger {
            events.push(Narration::beat("You feel under-prepared for this fight..."));
        }
        events.push(self.score_banner());
        self.stage = Stage::Fight;
    }

    fn resolve_fight(&mut self, events: &mut Vec<Narration>) {
        match self.weapon {
            Weapon::SwordOfSlaying => {
                events.push(Narration::beat(format!(
                    "As the {} lunges, you raise your glowing Sword of Slaying!",
                    self.enemy
                )));
                events.push(Narration::beat(format!(
                    "The {} takes one look at your sword... and flees!",
                    self.enemy
                )));
                events.push(Narration::beat(format!(
                    "You have rid the village of the {}. Victory is yours!",
                    self.enemy
                )));
                self.score.apply(delta::VICTORY);
            }
            Weapon::Dagger => {
                events.push(Narration::beat("You fight bravely..."));
                events.push(Narration::beat(format!(
                    "But your dagger is no match for the {}.",
                    self.enemy
                )));
                events.push(Narration::beat("You have been defeated."));
                self.score.apply(delta::DEFEAT);
            }
        }
        events.push(self.score_banner());
        events.push(Narration::beat(format!(
            "Your final score is: {}",
            self.score
        )));
        self.stage = Stage::End;
    }

    fn flee(&mut self, events: &mut Vec<Narration>) {
        events.push(Narration::beat(
            "You run back into the field. Luckily, you don't seem to have \
             been followed.",
        ));
        self.score.apply(delta::FLEE);
        events.push(self.score_banner());
        self.arrive_field(events);
    }

    /// Reset to fresh initial values with a new enemy draw. The draw comes
    /// from the session's existing RNG stream, so one seed reproduces a
    /// whole multi-replay sitting.
    fn restart(&mut self, events: &mut Vec<Narration>) {
        events.push(Narration::status("\nExcellent! Restarting the game...\n"));
        self.enemy = Enemy::draw(&mut self.rng);
        self.weapon = Weapon::Dagger;
        self.special_weapon_found = false;
        self.score = Score::new();
        self.stage = Stage::Intro;
    }

    fn arrive_field(&mut self, events: &mut Vec<Narration>) {
        self.stage = Stage::Field;
        events.push(Narration::beat(
            "\nEnter 1 to knock on the door of the house.",
        ));
        events.push(Narration::beat("Enter 2 to peer into the cave."));
    }

    fn score_banner(&self) -> Narration {
        Narration::status(format!("[ Current Score: {} ]", self.score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(SessionConfig::default())
    }

    /// Step, then apply each choice in order, stepping after each one.
    fn play(session: &mut GameSession, choices: &[&str]) -> Vec<Narration> {
        let mut events = session.step();
        for choice in choices {
            events.extend(session.choose(choice).expect("valid choice"));
            events.extend(session.step());
        }
        events
    }

    fn text_of(events: &[Narration]) -> String {
        events
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn create_session() {
        let s = session();
        assert_eq!(s.stage(), Stage::Intro);
        assert_eq!(s.score(), 0);
        assert_eq!(s.weapon(), Weapon::Dagger);
        assert!(!s.special_weapon_found());
        assert!(!s.is_over());
    }

    #[test]
    fn intro_narrates_setting_and_arrives_at_field() {
        let mut s = session();
        let text = text_of(&s.step());

        assert!(text.contains("open field"));
        assert!(text.contains(&s.enemy().to_string()));
        assert!(text.contains("dark cave"));
        assert!(text.contains("[ Current Score: 0 ]"));
        assert_eq!(s.stage(), Stage::Field);
        assert_eq!(s.prompt(), Some(FIELD_PROMPT));
    }

    #[test]
    fn step_is_idempotent_at_a_prompt() {
        let mut s = session();
        s.step();
        assert!(s.step().is_empty());
        assert_eq!(s.stage(), Stage::Field);
    }

    #[test]
    fn cave_discovery_awards_ten_and_swaps_weapon() {
        let mut s = session();
        let text = text_of(&play(&mut s, &["2"]));

        assert!(text.contains("glint of metal"));
        assert!(text.contains("Sword of"));
        assert!(text.contains("[ Current Score: 10 ]"));
        assert_eq!(s.score(), 10);
        assert_eq!(s.weapon(), Weapon::SwordOfSlaying);
        assert!(s.special_weapon_found());
        assert_eq!(s.stage(), Stage::Field);
    }

    #[test]
    fn cave_revisit_awards_one_without_rediscovery() {
        let mut s = session();
        play(&mut s, &["2"]);
        let text = text_of(&play(&mut s, &["2"]));

        assert!(text.contains("empty cave"));
        assert!(!text.contains("glint of metal"));
        assert_eq!(s.score(), 11);
        assert_eq!(s.weapon(), Weapon::SwordOfSlaying);
    }

    #[test]
    fn house_ambush_leads_to_fight() {
        let mut s = session();
        let text = text_of(&play(&mut s, &["1"]));

        assert!(text.contains("attacks you"));
        assert_eq!(s.stage(), Stage::Fight);
        assert_eq!(s.prompt(), Some(FIGHT_PROMPT));
    }

    #[test]
    fn under_prepared_warning_only_with_dagger() {
        let mut dagger = session();
        assert!(text_of(&play(&mut dagger, &["1"])).contains("under-prepared"));

        let mut sword = session();
        let text = text_of(&play(&mut sword, &["2", "1"]));
        assert!(!text.contains("under-prepared"));
    }

    #[test]
    fn fight_with_sword_wins_twenty() {
        let mut s = session();
        let text = text_of(&play(&mut s, &["2", "1", "1"]));

        assert!(text.contains("Victory is yours!"));
        assert!(text.contains("Your final score is: 30"));
        assert_eq!(s.score(), 30);
        assert_eq!(s.stage(), Stage::End);
        assert_eq!(s.prompt(), Some(REPLAY_PROMPT));
    }

    #[test]
    fn fight_with_dagger_loses_ten() {
        let mut s = session();
        let text = text_of(&play(&mut s, &["1", "1"]));

        assert!(text.contains("You have been defeated."));
        assert!(text.contains("Your final score is: -10"));
        assert_eq!(s.score(), -10);
        assert_eq!(s.stage(), Stage::End);
    }

    #[test]
    fn fleeing_costs_two_and_returns_to_field() {
        let mut s = session();
        let text = text_of(&play(&mut s, &["1", "2"]));

        assert!(text.contains("run back into the field"));
        assert!(text.contains("[ Current Score: -2 ]"));
        assert_eq!(s.score(), -2);
        assert_eq!(s.stage(), Stage::Field);
        assert!(!s.is_over());
    }

    #[test]
    fn flee_then_cave_then_victory() {
        // Scenario: house, run (-2), cave (+10 = 8), house, fight (+20 = 28).
        let mut s = session();
        let text = text_of(&play(&mut s, &["1", "2", "2", "1", "1"]));

        assert!(text.contains("[ Current Score: -2 ]"));
        assert!(text.contains("[ Current Score: 8 ]"));
        assert!(text.contains("Your final score is: 28"));
        assert_eq!(s.score(), 28);
    }

    #[test]
    fn replay_resets_session() {
        let mut s = session();
        play(&mut s, &["2", "1", "1"]);
        assert_eq!(s.score(), 30);

        let restart = s.choose("y").unwrap();
        assert!(text_of(&restart).contains("Restarting"));
        assert_eq!(s.score(), 0);
        assert_eq!(s.weapon(), Weapon::Dagger);
        assert!(!s.special_weapon_found());
        assert_eq!(s.stage(), Stage::Intro);

        // The fresh session narrates its intro again.
        let text = text_of(&s.step());
        assert!(text.contains("open field"));
        assert!(text.contains("[ Current Score: 0 ]"));
    }

    #[test]
    fn decline_replay_finishes_the_session() {
        let mut s = session();
        play(&mut s, &["1", "1"]);

        let text = text_of(&s.choose("n").unwrap());
        assert!(text.contains("Thanks for playing! Goodbye."));
        assert!(s.is_over());
        assert_eq!(s.prompt(), None);
        assert!(s.step().is_empty());
    }

    #[test]
    fn invalid_choice_rejected_without_mutation() {
        let mut s = session();
        s.step();
        let before = (s.score(), s.stage(), s.weapon(), s.special_weapon_found());

        assert!(s.choose("3").is_err());
        assert!(s.choose("cave").is_err());
        assert!(s.choose("").is_err());

        let after = (s.score(), s.stage(), s.weapon(), s.special_weapon_found());
        assert_eq!(before, after);

        // A valid choice still goes through afterwards.
        assert!(s.choose("2").is_ok());
    }

    #[test]
    fn invalid_choice_at_fight_and_replay() {
        let mut s = session();
        play(&mut s, &["1"]);
        assert!(s.choose("attack").is_err());
        assert_eq!(s.stage(), Stage::Fight);

        s.choose("1").unwrap();
        assert!(s.choose("maybe").is_err());
        assert_eq!(s.stage(), Stage::End);
    }

    #[test]
    fn choice_is_case_insensitive_and_trimmed() {
        let mut s = session();
        s.step();
        assert!(s.choose("  2  ").is_ok());
        s.step();
        s.choose("1").unwrap();
        s.step();
        s.choose("1").unwrap();
        assert!(s.choose(" Y ").is_ok());
        assert_eq!(s.stage(), Stage::Intro);
    }

    #[test]
    fn no_prompt_pending_is_rejected() {
        let mut s = session();
        // Still in Intro: nothing to choose yet.
        assert!(s.choose("1").is_err());
        assert_eq!(s.stage(), Stage::Intro);
    }

    #[test]
    fn same_seed_draws_the_same_enemy() {
        let a = GameSession::new(SessionConfig::default().with_seed(7));
        let b = GameSession::new(SessionConfig::default().with_seed(7));
        assert_eq!(a.enemy(), b.enemy());
    }

    #[test]
    fn enemy_is_fixed_for_the_session() {
        let mut s = session();
        let enemy = s.enemy();
        play(&mut s, &["2", "1", "2", "1", "1"]);
        assert_eq!(s.enemy(), enemy);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn invalid_input_never_mutates(input in "\\PC{0,12}") {
                let normalized = input.trim().to_lowercase();
                prop_assume!(normalized != "1" && normalized != "2");

                let mut s = session();
                s.step();
                let before = (s.score(), s.stage(), s.weapon());
                prop_assert!(s.choose(&input).is_err());
                prop_assert_eq!(before, (s.score(), s.stage(), s.weapon()));
            }
        }
    }
}

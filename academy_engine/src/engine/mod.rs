//! The game engine - owns the player and walks the content graph.
//!
//! One pass of the loop in [`GameEngine::run`]:
//! 1. **Navigate**: look up the location, make it current, render it
//! 2. **Select**: read a menu choice until it is a valid option number
//! 3. **Process**: check skills, apply gains, then move or run an action
//! 4. **Transition**: go somewhere, re-show the current location, or finish

mod actions;
mod exam;

pub use actions::*;
pub use exam::*;

use academy_rules::{
    check_skills, ActionKind, ContentGraph, Location, LocationId, LocationOption, OptionTarget,
    Player, Skill, Vitality, MAX_HEALTH,
};
use tracing::{debug, info, info_span, warn};

use crate::config::GameConfig;
use crate::console::{Console, Tone};
use crate::random::RandomSource;
use crate::{render, EngineError, Result};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    GameOver { reason: String },
    Certified,
}

/// What the loop does after an option has been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Goto(LocationId),
    /// Show the current location again.
    Stay,
    Finish(Outcome),
}

/// A single play session.
pub struct GameEngine<C, R> {
    content: ContentGraph,
    player: Player,
    console: C,
    rng: R,
    actions: ActionTable<C, R>,
    config: GameConfig,
}

impl<C: Console, R: RandomSource> GameEngine<C, R> {
    /// Create an engine around an existing player.
    ///
    /// Fails if the content lacks a location the built-in actions lead to.
    pub fn new(
        content: ContentGraph,
        player: Player,
        console: C,
        rng: R,
        config: GameConfig,
    ) -> Result<Self> {
        content.require(&required_locations())?;
        Ok(Self {
            content,
            player,
            console,
            rng,
            actions: ActionTable::standard(),
            config,
        })
    }

    /// Show the title, ask for the player's name and set up the session.
    pub fn begin(content: ContentGraph, mut console: C, rng: R, config: GameConfig) -> Result<Self> {
        content.require(&required_locations())?;

        console.clear();
        render::title(&mut console);

        let name = console.prompt("Enter your name: ")?;
        let player = Player::new(name, content.start().clone());
        info!(player = %player.id, name = player.name(), "player created");

        render::welcome(&mut console, player.name());
        console.pause(config.pacing);

        Self::new(content, player, console, rng, config)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn content(&self) -> &ContentGraph {
        &self.content
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn actions_mut(&mut self) -> &mut ActionTable<C, R> {
        &mut self.actions
    }

    /// Play until the game ends. Returns the terminal state; the caller
    /// decides what to do with the process.
    pub fn run(&mut self) -> Result<Outcome> {
        let span = info_span!("session", player = %self.player.id);
        let _guard = span.enter();

        let mut next = self.player.current_location.clone();
        loop {
            let option = self.navigate(&next)?;
            match self.process_choice(&option)? {
                Transition::Goto(id) => next = id,
                Transition::Stay => next = self.player.current_location.clone(),
                Transition::Finish(outcome) => {
                    self.finish(&outcome);
                    return Ok(outcome);
                }
            }
        }
    }

    /// Enter a location, show it, and return the option the player picks.
    pub fn navigate(&mut self, id: &LocationId) -> Result<LocationOption> {
        let location = self.content.get_location(id)?;
        self.player.current_location = id.clone();
        debug!(location = %id, "entered location");

        self.console.clear();
        render::location(&mut self.console, location);
        let option = Self::select_option(&mut self.console, location)?;
        Ok(option.clone())
    }

    /// Show the menu of `location` and read a valid choice.
    pub fn select_option<'a>(console: &mut C, location: &'a Location) -> Result<&'a LocationOption> {
        render::menu(console, location);
        let choice = Self::read_choice(console, location.options.len())?;
        Ok(&location.options[choice - 1])
    }

    /// Prompt until the input is a number in `1..=max`. Bad input is
    /// reported and re-prompted, never returned as an error.
    pub fn read_choice(console: &mut C, max: usize) -> Result<usize> {
        loop {
            let line = console.prompt(&format!("\nEnter your choice (1-{}): ", max))?;
            match line.trim().parse::<i64>() {
                Ok(choice) if choice >= 1 && choice as u64 <= max as u64 => {
                    return Ok(choice as usize)
                }
                Ok(_) => {
                    debug!(input = %line, max, "choice out of range");
                    console.say(
                        Tone::Danger,
                        &format!("Please enter a number between 1 and {}.", max),
                    );
                }
                Err(_) => {
                    debug!(input = %line, "choice not a number");
                    console.say(Tone::Danger, "Please enter a valid number.");
                }
            }
        }
    }

    /// Apply a chosen option.
    ///
    /// A failed skill check leaves all state untouched and re-shows the
    /// current location.
    pub fn process_choice(&mut self, option: &LocationOption) -> Result<Transition> {
        if let Err(shortfall) = check_skills(self.player.skills.as_map(), &option.skill_check) {
            debug!(
                skill = %shortfall.skill,
                required = shortfall.required,
                current = shortfall.current,
                "skill check failed"
            );
            render::skill_shortfall(&mut self.console, &shortfall);
            self.wait_for_enter()?;
            return Ok(Transition::Stay);
        }

        for &(skill, amount) in &option.skill_gain {
            self.train(skill, amount);
        }

        match option.target() {
            Some(OptionTarget::Destination(id)) => Ok(Transition::Goto(id.clone())),
            Some(OptionTarget::Action(kind)) => self.perform_action(kind),
            None => Err(EngineError::InvalidOption {
                location: self.player.current_location.clone(),
                text: option.text.clone(),
            }),
        }
    }

    /// Run the handler registered for `kind`.
    pub fn perform_action(&mut self, kind: ActionKind) -> Result<Transition> {
        let handler = self.actions.get(kind);
        match handler {
            Some(handler) => {
                info!(action = %kind, location = %self.player.current_location, "performing action");
                handler(self)
            }
            None => {
                warn!(action = %kind, "no handler registered for action");
                self.console
                    .say(Tone::Danger, &format!("Error: Unknown action '{}'!", kind));
                self.wait_for_enter()?;
                Ok(Transition::Stay)
            }
        }
    }

    fn finish(&mut self, outcome: &Outcome) {
        render::outcome(&mut self.console, outcome, &self.player);
        match serde_json::to_string(&self.player) {
            Ok(snapshot) => info!(?outcome, %snapshot, "session finished"),
            Err(err) => warn!(error = %err, "failed to serialize final player state"),
        }
    }

    pub(crate) fn wait_for_enter(&mut self) -> Result<()> {
        self.console.prompt("\nPress Enter to continue...")?;
        Ok(())
    }

    pub(crate) fn grant_item(&mut self, item: &str) {
        self.player.add_to_inventory(item);
        self.console
            .say(Tone::Success, &format!("Added {} to your inventory!", item));
    }

    pub(crate) fn award_score(&mut self, points: u32) {
        let total = self.player.add_score(points);
        self.console.say(
            Tone::Score,
            &format!("You gained {} points! Score: {}", points, total),
        );
    }

    pub(crate) fn train(&mut self, skill: Skill, amount: u32) {
        let level = self.player.improve_skill(skill, amount);
        self.console.say(
            Tone::Skill,
            &format!("Your {} skill increased to {}!", skill, level),
        );
    }

    pub(crate) fn injure(&mut self, amount: u32) -> Vitality {
        let vitality = self.player.take_damage(amount);
        self.console.say(
            Tone::Danger,
            &format!(
                "You took {} damage! Health: {}/{}",
                amount, self.player.health.current, MAX_HEALTH
            ),
        );
        vitality
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::random::ScriptedRolls;
    use academy_rules::{Exam, ExamQuestion, SkillList};

    type TestEngine = GameEngine<ScriptedConsole, ScriptedRolls>;

    fn engine_at(location: &str, inputs: &[&str]) -> TestEngine {
        let content = ContentGraph::academy().unwrap();
        let player = Player::new("Tester", LocationId::new(location));
        GameEngine::new(
            content,
            player,
            ScriptedConsole::new(inputs.iter().copied()),
            ScriptedRolls::always(0.5),
            GameConfig::quiet(),
        )
        .unwrap()
    }

    fn begin(inputs: &[&str], rolls: ScriptedRolls) -> TestEngine {
        GameEngine::begin(
            ContentGraph::academy().unwrap(),
            ScriptedConsole::new(inputs.iter().copied()),
            rolls,
            GameConfig::quiet(),
        )
        .unwrap()
    }

    fn option_at(engine: &TestEngine, location: &str, index: usize) -> LocationOption {
        engine
            .content()
            .get_location(&location.into())
            .unwrap()
            .options[index]
            .clone()
    }

    #[test]
    fn test_begin_reads_name() {
        let engine = begin(&["Alice"], ScriptedRolls::always(0.5));

        assert_eq!(engine.player().name(), "Alice");
        assert_eq!(engine.player().current_location.as_str(), "cloud_academy");
        assert!(engine.console().shows("Welcome, Alice! Your AWS adventure begins now..."));
    }

    #[test]
    fn test_read_choice_retries_until_valid() {
        let mut console = ScriptedConsole::new(["abc", "0", "5", "-1", " 3 "]);

        let choice = TestEngine::read_choice(&mut console, 4).unwrap();

        assert_eq!(choice, 3);
        assert_eq!(console.count("Please enter a valid number."), 1);
        assert_eq!(console.count("Please enter a number between 1 and 4."), 3);
        assert_eq!(console.count("Enter your choice (1-4): "), 5);
    }

    #[test]
    fn test_read_choice_surfaces_closed_input() {
        let mut console = ScriptedConsole::new(["nope"]);
        let result = TestEngine::read_choice(&mut console, 2);
        assert!(matches!(result, Err(EngineError::InputClosed)));
    }

    #[test]
    fn test_navigate_sets_location_and_returns_choice() {
        let mut engine = engine_at("cloud_academy", &["2"]);

        let option = engine.navigate(&"s3_lab".into()).unwrap();

        assert_eq!(engine.player().current_location.as_str(), "s3_lab");
        assert_eq!(option.text, "Configure bucket policies");
        assert!(engine.console().shows("=== S3 Storage Workshop ==="));
        assert!(engine.console().shows("4. Check your status"));
    }

    #[test]
    fn test_navigate_to_missing_location_is_fatal() {
        let mut engine = engine_at("cloud_academy", &["1"]);
        let result = engine.navigate(&"moon_base".into());
        assert!(matches!(
            result,
            Err(EngineError::Content(academy_rules::RulesError::LocationNotFound(_)))
        ));
        assert_eq!(engine.player().current_location.as_str(), "cloud_academy");
    }

    #[test]
    fn test_destination_option_applies_gain_and_moves() {
        let mut engine = engine_at("cloud_academy", &[]);
        let option = option_at(&engine, "cloud_academy", 0);

        let transition = engine.process_choice(&option).unwrap();

        assert_eq!(transition, Transition::Goto("ec2_lab".into()));
        assert_eq!(engine.player().skill_level(Skill::Compute), 2);
        assert_eq!(engine.player().score, 0);
        assert!(engine.console().shows("Your compute skill increased to 2!"));
    }

    #[test]
    fn test_failed_skill_check_mutates_nothing() {
        let mut engine = engine_at("vpc_lab", &[""]);
        let option = option_at(&engine, "vpc_lab", 1); // NAT gateway needs networking 3
        let before = engine.player().clone();

        let transition = engine.process_choice(&option).unwrap();

        assert_eq!(transition, Transition::Stay);
        let after = engine.player();
        assert_eq!(after.score, before.score);
        assert_eq!(after.skills, before.skills);
        assert_eq!(after.inventory, before.inventory);
        assert_eq!(after.current_location, before.current_location);
        assert!(engine
            .console()
            .shows("You need Networking level 3 to do this, but your level is 1."));
        assert!(engine.console().shows("Hint: Try improving your networking skill first!"));
    }

    #[test]
    fn test_only_first_failing_skill_is_reported() {
        let mut engine = engine_at("lambda_workshop", &["", ""]);
        engine.player_mut().skills = Default::default();
        let mut option = option_at(&engine, "lambda_workshop", 1);
        option.skill_check = vec![(Skill::Networking, 2), (Skill::Serverless, 2)];

        engine.process_choice(&option).unwrap();

        assert_eq!(engine.console().count("You need"), 1);
        assert!(engine.console().shows("You need Networking level 2"));

        // Authored order decides which failure is shown.
        option.skill_check.reverse();
        engine.process_choice(&option).unwrap();

        assert_eq!(engine.console().count("You need"), 2);
        assert!(engine.console().shows("You need Serverless level 2"));
    }

    #[test]
    fn test_gain_applied_even_without_check() {
        let mut engine = engine_at("cloud_academy", &[]);
        let mut option = option_at(&engine, "cloud_academy", 2);
        option.skill_gain = vec![(Skill::Networking, 3), (Skill::Security, 1)];

        engine.process_choice(&option).unwrap();

        assert_eq!(engine.player().skill_level(Skill::Networking), 4);
        assert_eq!(engine.player().skill_level(Skill::Security), 2);
    }

    #[test]
    fn test_option_without_target_is_fatal() {
        let mut engine = engine_at("cloud_academy", &[]);
        let mut option = option_at(&engine, "cloud_academy", 0);
        option.destination = None;

        let result = engine.process_choice(&option);

        assert!(matches!(result, Err(EngineError::InvalidOption { .. })));
    }

    #[test]
    fn test_unregistered_action_reports_and_stays() {
        let mut engine = engine_at("ec2_lab", &[""]);
        engine.actions_mut().remove(ActionKind::SecurityGroup);
        engine.player_mut().improve_skill(Skill::Security, 5);
        let before = engine.player().clone();

        let transition = engine.perform_action(ActionKind::SecurityGroup).unwrap();

        assert_eq!(transition, Transition::Stay);
        assert_eq!(engine.player().score, before.score);
        assert!(engine.console().shows("Error: Unknown action 'security_group'!"));
    }

    #[test]
    fn test_engine_requires_action_targets() {
        let exam = Exam::new(vec![ExamQuestion {
            question: "?".into(),
            options: vec!["yes".into()],
            correct: 0,
        }])
        .unwrap();
        let lobby = Location {
            id: "cloud_academy".into(),
            name: "Lobby".into(),
            description: String::new(),
            options: vec![LocationOption {
                text: "Wait".into(),
                destination: None,
                action: Some(ActionKind::Status),
                skill_gain: SkillList::new(),
                skill_check: SkillList::new(),
            }],
        };
        let content = ContentGraph::new("cloud_academy".into(), vec![lobby], exam).unwrap();

        let result = GameEngine::new(
            content,
            Player::new("Tester", "cloud_academy".into()),
            ScriptedConsole::default(),
            ScriptedRolls::always(0.5),
            GameConfig::quiet(),
        );

        assert!(matches!(
            result,
            Err(EngineError::Content(academy_rules::RulesError::LocationNotFound(_)))
        ));
    }

    #[test]
    fn test_launch_scenario_without_incident() {
        // name, EC2 course, launch, Enter, status at the workshop, Enter, return
        let mut engine = begin(
            &["Alice", "1", "1", "", "4", "", "3"],
            ScriptedRolls::always(0.5),
        );

        let result = engine.run();

        assert!(matches!(result, Err(EngineError::InputClosed)));
        let player = engine.player();
        assert_eq!(player.inventory.items, vec!["EC2 Instance Key"]);
        assert_eq!(player.score, 10);
        assert_eq!(player.skill_level(Skill::Compute), 3);
        assert_eq!(player.health.current, 100);
        assert_eq!(player.current_location.as_str(), "cloud_academy");
        assert!(engine.console().shows("=== Alice's Status ==="));
        assert!(engine.console().shows("  - EC2 Instance Key"));
    }

    #[test]
    fn test_status_from_start_shows_empty_inventory() {
        let mut engine = begin(&["Bob", "4", ""], ScriptedRolls::always(0.5));

        let _ = engine.run();

        assert!(engine.console().shows("Health: 100/100"));
        assert!(engine.console().shows("Location: cloud_academy"));
        assert!(engine.console().shows("  Serverless: 1"));
        assert!(engine.console().shows("  (empty)"));
        // Status re-shows the academy rather than moving on.
        assert_eq!(engine.console().count("=== AWS Cloud Academy ==="), 2);
    }

    #[test]
    fn test_score_never_decreases_over_a_session() {
        let mut engine = begin(
            &[
                "Carol", "3", "1", "", // networking course, multi-AZ
                "3", "3", "1", "", // back, networking again, multi-AZ again
                "3", "3", "2", "", // back, networking, NAT gateway
                "2", "", // API gateway
                "2", // back to the academy from the exam hall
            ],
            ScriptedRolls::always(0.5),
        );

        let _ = engine.run();

        let player = engine.player();
        assert_eq!(player.score, 20 + 20 + 25 + 25);
        assert_eq!(player.current_location.as_str(), "cloud_academy");
        let scores: Vec<u32> = engine
            .console()
            .transcript
            .iter()
            .filter_map(|line| line.split("Score: ").nth(1))
            .map(|n| n.trim().parse().unwrap())
            .collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }
}

//! Player-facing text.

use academy_rules::{ExamGrade, ExamQuestion, Location, Player, SkillShortfall, MAX_HEALTH};

use crate::console::{Console, Tone};
use crate::engine::Outcome;

const TITLE: &str = r"
     _   __        __ ____       _       _                 _
    / \  \ \      / // ___|     / \   __| |_   _____ _ __ | |_ _   _ _ __ ___
   / _ \  \ \ /\ / / \___ \    / _ \ / _` \ \ / / _ \ '_ \| __| | | | '__/ _ \
  / ___ \  \ V  V /   ___) |  / ___ \ (_| |\ V /  __/ | | | |_| |_| | | |  __/
 /_/   \_\  \_/\_/   |____/  /_/   \_\__,_| \_/ \___|_| |_|\__|\__,_|_|  \___|
";

pub fn title<C: Console + ?Sized>(console: &mut C) {
    console.say(Tone::Warning, TITLE);
    console.say(Tone::Info, "Welcome to the AWS Adventure Game!");
    console.say(
        Tone::Plain,
        "In this game, you'll navigate the AWS Cloud, learn new skills,",
    );
    console.say(
        Tone::Plain,
        "and face challenges to become an AWS expert.",
    );
    console.blank();
}

pub fn welcome<C: Console + ?Sized>(console: &mut C, name: &str) {
    console.blank();
    console.say(
        Tone::Plain,
        &format!("Welcome, {}! Your AWS adventure begins now...", name),
    );
    console.blank();
}

pub fn location<C: Console + ?Sized>(console: &mut C, location: &Location) {
    console.blank();
    console.say(Tone::Heading, &format!("=== {} ===", location.name));
    console.say(Tone::Info, &location.description);
    console.blank();
}

pub fn menu<C: Console + ?Sized>(console: &mut C, location: &Location) {
    console.say(Tone::Heading, "What would you like to do?");
    for (index, option) in location.options.iter().enumerate() {
        console.say(Tone::Plain, &format!("{}. {}", index + 1, option.text));
    }
}

pub fn skill_shortfall<C: Console + ?Sized>(console: &mut C, shortfall: &SkillShortfall) {
    console.blank();
    console.say(
        Tone::Danger,
        &format!(
            "You need {} level {} to do this, but your level is {}.",
            shortfall.skill.title(),
            shortfall.required,
            shortfall.current
        ),
    );
    console.say(
        Tone::Warning,
        &format!("Hint: Try improving your {} skill first!", shortfall.skill),
    );
}

pub fn status<C: Console + ?Sized>(console: &mut C, player: &Player) {
    console.blank();
    console.say(Tone::Heading, &format!("=== {}'s Status ===", player.name()));
    console.say(
        Tone::Plain,
        &format!("Health: {}/{}", player.health.current, MAX_HEALTH),
    );
    console.say(Tone::Plain, &format!("Score: {}", player.score));
    console.say(
        Tone::Plain,
        &format!("Location: {}", player.current_location),
    );

    console.blank();
    console.say(Tone::Plain, "Skills:");
    for (skill, level) in player.skills.iter() {
        console.say(Tone::Plain, &format!("  {}: {}", skill.title(), level));
    }

    console.blank();
    console.say(Tone::Plain, "Inventory:");
    if player.inventory.is_empty() {
        console.say(Tone::Plain, "  (empty)");
    } else {
        for item in &player.inventory.items {
            console.say(Tone::Plain, &format!("  - {}", item));
        }
    }
    console.blank();
}

pub fn exam_intro<C: Console + ?Sized>(console: &mut C) {
    console.blank();
    console.say(Tone::Heading, "=== AWS Certification Exam ===");
    console.say(
        Tone::Info,
        "This is your final challenge! Answer these AWS questions correctly to complete your journey.",
    );
    console.blank();
}

pub fn exam_question<C: Console + ?Sized>(console: &mut C, number: usize, question: &ExamQuestion) {
    console.blank();
    console.say(
        Tone::Heading,
        &format!("Question {}: {}", number, question.question),
    );
    for (index, option) in question.options.iter().enumerate() {
        console.say(Tone::Plain, &format!("{}. {}", index + 1, option));
    }
}

pub fn exam_results<C: Console + ?Sized>(console: &mut C, grade: &ExamGrade) {
    console.blank();
    console.say(Tone::Heading, "=== Exam Results ===");
    console.say(
        Tone::Plain,
        &format!(
            "You answered {} out of {} questions correctly ({:.1}%).",
            grade.correct, grade.total, grade.percent
        ),
    );
}

pub fn outcome<C: Console + ?Sized>(console: &mut C, outcome: &Outcome, player: &Player) {
    match outcome {
        Outcome::GameOver { reason } => {
            console.blank();
            console.say(Tone::Danger, &format!("GAME OVER: {}", reason));
            console.blank();
        }
        Outcome::Certified => {
            console.blank();
            console.say(Tone::Warning, "You have completed the AWS Adventure Game!");
        }
    }
    console.say(Tone::Score, &format!("Final Score: {}", player.score));
    console.blank();
    console.say(
        Tone::Plain,
        &format!("Thanks for playing, {}!", player.name()),
    );
}

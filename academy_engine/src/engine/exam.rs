//! The certification exam - a short, fixed sequence of questions.

use academy_rules::{ExamGrade, LocationId};
use tracing::info;

use super::{GameEngine, Outcome, Transition, CLOUD_ACADEMY};
use crate::console::{Console, Tone};
use crate::random::RandomSource;
use crate::{render, Result};

pub const POINTS_PER_CORRECT_ANSWER: u32 = 10;
pub const PASS_BONUS: u32 = 50;
pub const CERTIFICATION_ITEM: &str = "AWS Certification";

/// Progress through the exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamState {
    InProgress {
        question_index: usize,
        correct_count: usize,
    },
    Complete {
        correct_count: usize,
    },
}

impl ExamState {
    pub fn start(total_questions: usize) -> Self {
        if total_questions == 0 {
            ExamState::Complete { correct_count: 0 }
        } else {
            ExamState::InProgress {
                question_index: 0,
                correct_count: 0,
            }
        }
    }

    /// Record the answer to the current question.
    pub fn answer(self, correct: bool, total_questions: usize) -> Self {
        match self {
            ExamState::InProgress {
                question_index,
                correct_count,
            } => {
                let correct_count = correct_count + usize::from(correct);
                let question_index = question_index + 1;
                if question_index >= total_questions {
                    ExamState::Complete { correct_count }
                } else {
                    ExamState::InProgress {
                        question_index,
                        correct_count,
                    }
                }
            }
            complete => complete,
        }
    }

    pub fn correct_count(&self) -> usize {
        match *self {
            ExamState::InProgress { correct_count, .. } | ExamState::Complete { correct_count } => {
                correct_count
            }
        }
    }
}

impl<C: Console, R: RandomSource> GameEngine<C, R> {
    /// Ask every question, then certify the player or send them back to
    /// the academy with their progress intact.
    pub fn run_final_exam(&mut self) -> Result<Transition> {
        self.console.clear();
        render::exam_intro(&mut self.console);

        let total = self.content.exam().len();
        let mut state = ExamState::start(total);

        while let ExamState::InProgress { question_index, .. } = state {
            let question = self.content.exam().questions()[question_index].clone();
            render::exam_question(&mut self.console, question_index + 1, &question);

            let answer = Self::read_choice(&mut self.console, question.options.len())? - 1;
            let correct = question.is_correct(answer);
            if correct {
                self.console.say(Tone::Success, "Correct!");
                self.award_score(POINTS_PER_CORRECT_ANSWER);
            } else {
                self.console.say(
                    Tone::Danger,
                    &format!(
                        "Incorrect! The correct answer was: {}",
                        question.correct_answer().unwrap_or_default()
                    ),
                );
            }

            state = state.answer(correct, total);
            self.console.pause(self.config.pacing);
        }

        let grade = ExamGrade::new(state.correct_count(), total);
        info!(
            correct = grade.correct,
            total = grade.total,
            percent = grade.percent,
            passed = grade.passed,
            "exam graded"
        );

        self.console.clear();
        render::exam_results(&mut self.console, &grade);

        if grade.passed {
            self.console.blank();
            self.console.say(
                Tone::Success,
                "Congratulations! You passed the AWS Certification Exam!",
            );
            self.award_score(PASS_BONUS);
            self.grant_item(CERTIFICATION_ITEM);
            Ok(Transition::Finish(Outcome::Certified))
        } else {
            self.console.blank();
            self.console.say(
                Tone::Danger,
                "Unfortunately, you didn't pass the exam. You need at least 70% to pass.",
            );
            self.console.say(
                Tone::Warning,
                "Don't worry, you can study more and try again!",
            );
            self.wait_for_enter()?;
            Ok(Transition::Goto(LocationId::new(CLOUD_ACADEMY)))
        }
    }
}

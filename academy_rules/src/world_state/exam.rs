//! Certification exam questions and grading.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Minimum percentage of correct answers needed to pass (inclusive).
pub const PASS_PERCENT: f64 = 70.0;

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct: usize,
}

impl ExamQuestion {
    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct
    }

    /// Text of the correct option, if `correct` points at one.
    pub fn correct_answer(&self) -> Option<&str> {
        self.options.get(self.correct).map(String::as_str)
    }
}

/// The ordered, non-empty question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exam {
    questions: Vec<ExamQuestion>,
}

impl Exam {
    pub fn new(questions: Vec<ExamQuestion>) -> Result<Self, RulesError> {
        if questions.is_empty() {
            return Err(RulesError::EmptyExam);
        }
        for (index, question) in questions.iter().enumerate() {
            if question.options.is_empty() {
                return Err(RulesError::InvalidQuestion {
                    index: index + 1,
                    reason: "no answer options".to_string(),
                });
            }
            if question.correct >= question.options.len() {
                return Err(RulesError::InvalidQuestion {
                    index: index + 1,
                    reason: format!(
                        "correct index {} out of range for {} options",
                        question.correct,
                        question.options.len()
                    ),
                });
            }
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[ExamQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Final tally of an exam attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExamGrade {
    pub correct: usize,
    pub total: usize,
    /// Not rounded.
    pub percent: f64,
    pub passed: bool,
}

impl ExamGrade {
    pub fn new(correct: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0.0
        } else {
            100.0 * correct as f64 / total as f64
        };
        Self {
            correct,
            total,
            percent,
            passed: percent >= PASS_PERCENT,
        }
    }
}

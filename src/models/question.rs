use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Full score awarded across all correct options of one question
pub const FULL_SCORE: f64 = 100.0;

/// One answer option of a multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Uppercase ASCII letter, used both as identifier and sort key
    pub letter: char,

    /// Display text (marker and following whitespace already stripped)
    pub text: String,
}

impl AnswerOption {
    pub fn new(letter: char, text: impl Into<String>) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            text: text.into(),
        }
    }
}

/// A parsed (or user-created) multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Positive id, unique within one document
    pub id: u32,

    /// Prompt text, stored unescaped
    pub text: String,

    /// Options in parse/insertion order
    pub options: Vec<AnswerOption>,

    /// Letters of the correct options; empty means no answer was recorded
    #[serde(default)]
    pub correct: BTreeSet<char>,

    /// Set once a "Đáp án đúng:" line was consumed for this question
    #[serde(default)]
    pub explicit_answer: bool,
}

impl Question {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            options: Vec::new(),
            correct: BTreeSet::new(),
            explicit_answer: false,
        }
    }

    /// Add an option (builder style)
    pub fn with_option(mut self, letter: char, text: impl Into<String>) -> Self {
        self.options.push(AnswerOption::new(letter, text));
        self
    }

    /// Set the correct letters (builder style)
    pub fn with_correct<I>(mut self, letters: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.correct = letters.into_iter().map(|l| l.to_ascii_uppercase()).collect();
        self
    }

    pub fn is_correct(&self, letter: char) -> bool {
        self.correct.contains(&letter.to_ascii_uppercase())
    }

    /// Options ordered by letter; options sharing a letter keep their relative order
    pub fn sorted_options(&self) -> Vec<&AnswerOption> {
        let mut sorted: Vec<&AnswerOption> = self.options.iter().collect();
        sorted.sort_by_key(|o| o.letter);
        sorted
    }

    /// Score fraction (0..=100) for selecting the option with this letter
    pub fn fraction_for(&self, letter: char) -> f64 {
        if self.correct.is_empty() || !self.is_correct(letter) {
            return 0.0;
        }
        FULL_SCORE / self.correct.len() as f64
    }

    /// Drop correct letters that name no option
    pub fn retain_known_correct(&mut self) {
        let letters: BTreeSet<char> = self.options.iter().map(|o| o.letter).collect();
        self.correct.retain(|l| letters.contains(l));
    }

    pub fn has_answer(&self) -> bool {
        !self.correct.is_empty()
    }
}

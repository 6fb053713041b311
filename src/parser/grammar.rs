//! Line grammar shared by every input kind
//!
//! Three line shapes are recognized, in priority order:
//! 1. question header: `Câu hỏi <n>: <prompt>`
//! 2. option: `<letter>. <text>`
//! 3. explicit answer: `Đáp án đúng: <letters>`
//!
//! Matching is case-insensitive. While a question is open, lines of any other shape
//! are dropped; they are not appended to the prompt or to an option.

use crate::models::{AnswerOption, Question};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^câu\s+hỏi\s+([0-9]+)\s*:\s*(.+)$").expect("Invalid question header regex")
});

// Letter class stays ASCII-only: (?i)[A-Z] would also accept the Kelvin sign.
static OPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z])\.\s*(.+)$").expect("Invalid option regex"));

static ANSWER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^đáp\s+án\s+đúng\s*:\s*([A-Za-z,\s]+)").expect("Invalid answer line regex")
});

/// Shape of one trimmed, non-blank line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Header { id: u32, prompt: &'a str },
    Option { letter: char, text: &'a str },
    Answer { letters: BTreeSet<char> },
    Other,
}

/// Classify a trimmed line
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(cap) = HEADER.captures(line) {
        if let (Some(id), Some(prompt)) = (cap.get(1), cap.get(2)) {
            // Ids that overflow u32 are not valid headers
            if let Ok(id) = id.as_str().parse::<u32>() {
                return LineKind::Header {
                    id,
                    prompt: prompt.as_str().trim(),
                };
            }
        }
        return LineKind::Other;
    }

    if let Some(cap) = OPTION.captures(line) {
        if let (Some(letter), Some(text)) = (cap.get(1), cap.get(2)) {
            if let Some(letter) = letter.as_str().chars().next() {
                return LineKind::Option {
                    letter: letter.to_ascii_uppercase(),
                    text: text.as_str().trim(),
                };
            }
        }
    }

    if let Some(rest) = ANSWER.captures(line).and_then(|cap| cap.get(1)) {
        let letters = rest
            .as_str()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        return LineKind::Answer { letters };
    }

    LineKind::Other
}

/// Question under construction
#[derive(Debug)]
struct Draft {
    id: u32,
    text: String,
    options: Vec<AnswerOption>,
    inline: BTreeSet<char>,
    explicit: Option<BTreeSet<char>>,
}

impl Draft {
    fn new(id: u32, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            options: Vec::new(),
            inline: BTreeSet::new(),
            explicit: None,
        }
    }

    /// An explicit answer line wins over inline formatting; the two never merge
    fn finish(self) -> Question {
        let explicit_answer = self.explicit.is_some();
        let mut question = Question {
            id: self.id,
            text: self.text,
            options: self.options,
            correct: self.explicit.unwrap_or(self.inline),
            explicit_answer,
        };
        question.retain_known_correct();
        question
    }
}

#[derive(Debug)]
enum State {
    NoOpenQuestion,
    OpenQuestion(Draft),
}

/// Builds questions from a stream of lines
#[derive(Debug)]
pub struct QuestionStateMachine {
    state: State,
    questions: Vec<Question>,
}

impl Default for QuestionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionStateMachine {
    pub fn new() -> Self {
        Self {
            state: State::NoOpenQuestion,
            questions: Vec::new(),
        }
    }

    /// Feed one line. `marked` tells whether the line carries inline correctness
    /// formatting; it only matters for option lines.
    pub fn feed(&mut self, line: &str, marked: bool) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        match classify(line) {
            LineKind::Header { id, prompt } => {
                self.close();
                self.state = State::OpenQuestion(Draft::new(id, prompt));
            }
            kind => {
                let State::OpenQuestion(draft) = &mut self.state else {
                    return;
                };
                match kind {
                    LineKind::Option { letter, text } => {
                        if marked {
                            draft.inline.insert(letter);
                        }
                        draft.options.push(AnswerOption::new(letter, text));
                    }
                    LineKind::Answer { letters } => draft.explicit = Some(letters),
                    LineKind::Header { .. } | LineKind::Other => {}
                }
            }
        }
    }

    fn close(&mut self) {
        if let State::OpenQuestion(draft) = std::mem::replace(&mut self.state, State::NoOpenQuestion) {
            self.questions.push(draft.finish());
        }
    }

    /// Emit the open question (if any) and return everything built so far
    pub fn finish(mut self) -> Vec<Question> {
        self.close();
        self.questions
    }
}

pub mod answer_key;
pub mod docx;
pub mod formatting;
pub mod grammar;
pub mod source;

pub use answer_key::AnswerKey;
pub use docx::{parse_document_xml, read_docx, DocxError};
pub use formatting::is_correctness_marked;
pub use grammar::{classify, LineKind, QuestionStateMachine};
pub use source::{AnswerKeyScope, ParagraphSource, PlainText, SourceLine, StyledDocument};

use crate::models::{Document, Question};

/// Parse questions from any paragraph source
///
/// Never fails: input with no recognizable question yields an empty list.
pub fn parse<S: ParagraphSource + ?Sized>(source: &S) -> Vec<Question> {
    let lines = source.lines();

    let key_line = match source.answer_key_scope() {
        AnswerKeyScope::LastMatchingLine => {
            answer_key::find_last_key_line(lines.iter().map(|l| l.text.as_ref()))
        }
        AnswerKeyScope::DocumentTail => answer_key::find_key_at_tail(&visible_text(&lines)),
    };
    if let Some(key) = &key_line {
        log::debug!("Found compact answer key '{}'", key);
    }

    let mut machine = QuestionStateMachine::new();
    for line in &lines {
        let is_key = key_line
            .as_deref()
            .is_some_and(|key| line.text.trim().to_uppercase() == key);
        if !is_key {
            machine.feed(&line.text, line.marked);
        }
    }

    let mut questions = machine.finish();
    if let Some(key) = key_line {
        AnswerKey::decode(&key).apply_to(&mut questions);
    }

    log::debug!("Parsed {} questions", questions.len());
    questions
}

/// Parse line-oriented plain text
pub fn parse_text(content: &str) -> Vec<Question> {
    parse(&PlainText::new(content))
}

/// Parse a styled document, reading option correctness from run formatting
pub fn parse_document(document: &Document) -> Vec<Question> {
    parse(&StyledDocument::new(document))
}

/// Non-empty trimmed lines joined by newlines
fn visible_text(lines: &[SourceLine<'_>]) -> String {
    lines
        .iter()
        .map(|l| l.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

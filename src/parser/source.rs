//! Paragraph sources: the pluggable input side of the parser
//!
//! A source turns its input into lines of text, each tagged with whether it carries
//! inline correctness formatting. Everything else (grammar, answer key, fallback) is
//! shared.

use super::formatting::{is_correctness_marked, paragraph_marked};
use crate::models::{Document, Paragraph};
use std::borrow::Cow;

/// Where a source looks for its compact answer key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKeyScope {
    /// The last line whose whole content is a key, scanning from the end
    LastMatchingLine,
    /// A key anchored to the end of the concatenated visible text
    DocumentTail,
}

/// One line/paragraph as seen by the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub text: Cow<'a, str>,
    pub marked: bool,
}

pub trait ParagraphSource {
    /// Lines in document order, untrimmed
    fn lines(&self) -> Vec<SourceLine<'_>>;

    fn answer_key_scope(&self) -> AnswerKeyScope;
}

/// Line-oriented plain text
#[derive(Debug, Clone, Copy)]
pub struct PlainText<'a> {
    content: &'a str,
}

impl<'a> PlainText<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }
}

impl ParagraphSource for PlainText<'_> {
    fn lines(&self) -> Vec<SourceLine<'_>> {
        self.content
            .trim()
            .lines()
            .map(|line| SourceLine {
                text: Cow::Borrowed(line),
                marked: false,
            })
            .collect()
    }

    fn answer_key_scope(&self) -> AnswerKeyScope {
        AnswerKeyScope::LastMatchingLine
    }
}

/// Paragraph/run document; option correctness comes from run formatting
#[derive(Debug, Clone, Copy)]
pub struct StyledDocument<'a> {
    document: &'a Document,
}

impl<'a> StyledDocument<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }
}

impl ParagraphSource for StyledDocument<'_> {
    fn lines(&self) -> Vec<SourceLine<'_>> {
        self.document
            .paragraphs
            .iter()
            .flat_map(split_soft_breaks)
            .collect()
    }

    fn answer_key_scope(&self) -> AnswerKeyScope {
        AnswerKeyScope::DocumentTail
    }
}

/// Split a paragraph on soft line breaks (`w:br`)
///
/// Each resulting line is marked only by the runs that put text on it. A paragraph
/// without breaks is a single line marked by any of its runs.
fn split_soft_breaks<'a>(paragraph: &Paragraph) -> Vec<SourceLine<'a>> {
    if !paragraph.runs.iter().any(|r| r.text.contains('\n')) {
        return vec![SourceLine {
            text: Cow::Owned(paragraph.text()),
            marked: paragraph_marked(paragraph),
        }];
    }

    let mut lines = Vec::new();
    let mut text = String::new();
    let mut marked = false;

    for run in &paragraph.runs {
        let run_marked = is_correctness_marked(run);
        for (i, piece) in run.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(SourceLine {
                    text: Cow::Owned(std::mem::take(&mut text)),
                    marked,
                });
                marked = false;
            }
            if !piece.is_empty() {
                text.push_str(piece);
                marked |= run_marked;
            }
        }
    }

    lines.push(SourceLine {
        text: Cow::Owned(text),
        marked,
    });
    lines
}

use crate::models::{Paragraph, Rgb, Run};

/// Whether a run's formatting marks its option as correct
///
/// Pure red text, bold, italic or underline each count on their own.
pub fn is_correctness_marked(run: &Run) -> bool {
    run.color == Some(Rgb::RED) || run.bold || run.italic || run.underline
}

/// A paragraph is marked as soon as any one of its runs is
pub fn paragraph_marked(paragraph: &Paragraph) -> bool {
    paragraph.runs.iter().any(is_correctness_marked)
}

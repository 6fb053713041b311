//! Quiz service - loading quiz files, converting them and writing Moodle XML

use crate::models::{Question, QuizConfig};
use crate::parser;
use crate::render;
use crate::services::question_bank::{QuestionBank, QuestionRepository};
use crate::{Context, Result};
use std::path::{Path, PathBuf};

/// Outcome of writing one XML file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub output_path: PathBuf,
    pub question_count: usize,
    /// Ids of questions that ended up with no correct answer
    pub unanswered: Vec<u32>,
}

/// Whether the file is a Word document (by extension, case-insensitive)
pub fn is_docx(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("docx"))
}

/// Read and parse a quiz file; `.docx` goes through the styled parser, anything else
/// is read as UTF-8 text
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let questions = if is_docx(path) {
        let document = parser::read_docx(path)?;
        parser::parse_document(&document)
    } else {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parser::parse_text(&content)
    };

    log::info!("Parsed {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// `<input dir>/<output dir>/<stem><suffix>.xml`
///
/// An absolute `output_dir_name` is used as-is.
pub fn output_path(input: &Path, config: &QuizConfig) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid input file name: {}", input.display()))?;

    let base_dir = input.parent().unwrap_or_else(|| Path::new(""));
    Ok(base_dir
        .join(&config.output_dir_name)
        .join(format!("{}{}.xml", stem, config.file_suffix)))
}

/// Render questions and write them next to the input file
pub fn write_quiz(questions: &[Question], input: &Path, config: &QuizConfig) -> Result<ConversionReport> {
    let output_path = output_path(input, config)?;
    if let Some(dir) = output_path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    std::fs::write(&output_path, render::render(questions))
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    log::info!("Wrote {} questions to {}", questions.len(), output_path.display());

    Ok(ConversionReport {
        output_path,
        question_count: questions.len(),
        unanswered: questions
            .iter()
            .filter(|q| !q.has_answer())
            .map(|q| q.id)
            .collect(),
    })
}

/// Parse an input file and write its Moodle XML
pub fn convert_file(input: &Path, config: &QuizConfig) -> Result<ConversionReport> {
    let questions = load_questions(input)?;
    write_quiz(&questions, input, config)
}

/// Parse an input file, append one question, and write the result
///
/// Returns the id given to the new question.
pub fn add_question(
    input: &Path,
    question: Question,
    config: &QuizConfig,
) -> Result<(u32, ConversionReport)> {
    let mut bank = QuestionBank::from_questions(load_questions(input)?);
    let id = bank.append(question)?;
    let report = write_quiz(bank.list(), input, config)?;
    Ok((id, report))
}

/// Parse an input file and render it without writing anything
pub fn preview(input: &Path) -> Result<String> {
    let questions = load_questions(input)?;
    Ok(render::render(&questions))
}

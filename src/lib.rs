// quizconv - quiz documents to Moodle XML
// Parses "Câu hỏi N:" style quizzes from plain text or Word documents

pub mod cli;
pub mod models;
pub mod parser;
pub mod render;
pub mod services;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use models::{AnswerOption, Document, Paragraph, Question, QuizConfig, Rgb, Run};
pub use parser::{parse, parse_document, parse_text};
pub use render::render;
pub use services::question_bank::{QuestionBank, QuestionRepository};

pub mod config;
pub mod document;
pub mod question;

pub use config::QuizConfig;
pub use document::{Document, Paragraph, Rgb, Run};
pub use question::{AnswerOption, Question, FULL_SCORE};

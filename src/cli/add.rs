//! Add CLI command - append a question to a parsed quiz and write the XML

use crate::models::{AnswerOption, Question};
use crate::services::quiz_service;
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Args)]
pub struct AddArgs {
    /// Quiz file (.txt or .docx) the question is added to
    input: PathBuf,

    /// Question prompt
    #[arg(short, long)]
    question: String,

    /// Option as "LETTER=text" (repeatable)
    #[arg(short = 'a', long = "option", required = true)]
    options: Vec<String>,

    /// Correct letters, e.g. "A" or "A,C"
    #[arg(short, long)]
    correct: Option<String>,

    /// Output directory (relative to the input file unless absolute)
    #[arg(short, long)]
    output_dir: Option<String>,
}

pub fn run(args: AddArgs) -> Result<()> {
    let config = super::resolve_config(args.output_dir.as_deref(), None)?;

    let options = args
        .options
        .iter()
        .map(|spec| parse_option_spec(spec))
        .collect::<Result<Vec<_>>>()?;

    let question = Question {
        id: 0,
        text: args.question,
        options,
        correct: args.correct.as_deref().map(parse_letters).unwrap_or_default(),
        explicit_answer: false,
    };

    let (id, report) = quiz_service::add_question(&args.input, question, &config)?;
    println!("{}", format!("➕ Added question #{}", id).cyan());
    super::convert::print_report(&report);
    Ok(())
}

/// Parse "B=Hà Nội" into an option
fn parse_option_spec(spec: &str) -> Result<AnswerOption> {
    let (letter, text) = spec
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Invalid option '{}': expected LETTER=text", spec))?;

    let mut chars = letter.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => {
            Ok(AnswerOption::new(letter, text.trim()))
        }
        _ => anyhow::bail!("Invalid option letter '{}': expected a single letter A-Z", letter),
    }
}

/// Letters out of "a, c" / "AC" / "A C"
fn parse_letters(value: &str) -> BTreeSet<char> {
    value
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

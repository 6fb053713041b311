use crate::models::Question;
use crate::services::quiz_service;
use crate::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(input: &Path, json: bool) -> Result<()> {
    let questions = quiz_service::load_questions(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    println!("{}", format!("📋 Questions in {}", input.display()).cyan());
    if questions.is_empty() {
        println!("{}", "No questions found.".yellow());
        return Ok(());
    }

    for question in &questions {
        print_question(question);
    }
    println!("\nTotal: {} question(s)", questions.len());

    Ok(())
}

fn print_question(question: &Question) {
    println!(
        "\n{} {}",
        format!("#{}", question.id).bold(),
        question.text
    );

    for option in question.sorted_options() {
        let line = format!("   {}. {}", option.letter, option.text);
        if question.is_correct(option.letter) {
            println!("{} {}", line.green(), "✓".green());
        } else {
            println!("{}", line);
        }
    }

    if !question.has_answer() {
        println!("   {}", "(no correct answer)".yellow());
    }
}

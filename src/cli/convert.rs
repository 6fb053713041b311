//! Convert CLI command

use crate::services::quiz_service::{self, ConversionReport};
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct ConvertArgs {
    /// Quiz file (.txt or .docx)
    input: PathBuf,

    /// Output directory (relative to the input file unless absolute)
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Suffix appended to the file name (default: "_quiz")
    #[arg(short, long)]
    suffix: Option<String>,

    /// Open the output directory when done
    #[arg(long)]
    open: bool,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let config = super::resolve_config(args.output_dir.as_deref(), args.suffix.as_deref())?;

    println!("{}", format!("📄 Converting: {}", args.input.display()).cyan());
    let report = quiz_service::convert_file(&args.input, &config)?;
    print_report(&report);

    if args.open || config.open_output {
        if let Some(dir) = report.output_path.parent() {
            open_dir(dir);
        }
    }

    Ok(())
}

pub(crate) fn print_report(report: &ConversionReport) {
    if report.question_count == 0 {
        println!(
            "{}",
            "⚠ No questions recognized (expected \"Câu hỏi N: ...\" headers)".yellow()
        );
    }

    if !report.unanswered.is_empty() {
        let ids: Vec<String> = report.unanswered.iter().map(|id| id.to_string()).collect();
        println!(
            "{}",
            format!(
                "⚠ {} question(s) without a correct answer: {}",
                ids.len(),
                ids.join(", ")
            )
            .yellow()
        );
    }

    println!(
        "{}",
        format!(
            "✓ Wrote {} question(s) to {}",
            report.question_count,
            report.output_path.display()
        )
        .green()
    );
}

#[cfg(feature = "ui")]
fn open_dir(dir: &Path) {
    if let Err(e) = open::that(dir) {
        eprintln!("   {} Failed to open {}: {}", "⚠".yellow(), dir.display(), e);
    }
}

#[cfg(not(feature = "ui"))]
fn open_dir(dir: &Path) {
    log::warn!(
        "Not opening {}: built without the 'ui' feature",
        dir.display()
    );
}

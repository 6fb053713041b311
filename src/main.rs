use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use quizconv::Result;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quizconv")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert quiz documents (.txt/.docx) to Moodle XML", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a quiz file and write <dir>/OUTPUT/<name>_quiz.xml
    Convert(quizconv::cli::convert::ConvertArgs),

    /// Print the generated XML without writing a file
    Preview {
        /// Quiz file (.txt or .docx)
        input: PathBuf,
    },

    /// List parsed questions
    List {
        /// Quiz file (.txt or .docx)
        input: PathBuf,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Add a question to a quiz file's questions and write the XML
    Add(quizconv::cli::add::AddArgs),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert(args) => {
            quizconv::cli::convert::run(args)?;
        }

        Commands::Preview { input } => {
            quizconv::cli::preview::run(&input)?;
        }

        Commands::List { input, json } => {
            quizconv::cli::list::run(&input, json)?;
        }

        Commands::Add(args) => {
            quizconv::cli::add::run(args)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "quizconv", &mut io::stdout());
        }
    }

    Ok(())
}

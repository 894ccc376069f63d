use std::path::PathBuf;

use clap::{ArgAction, Parser};
use knowledge_quiz::logging::{LogConfig, init_logging};
use knowledge_quiz::{Quiz, QuizDataset, QuizError, Skin};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (built-in questions when omitted)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Screen layout
    #[arg(short, long, value_enum, default_value_t = Skin::Fluid)]
    skin: Skin,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let log_config = LogConfig::from_verbosity(args.verbose).with_log_file(args.log_file.clone());
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Failed to open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    let quiz = match args.questions {
        Some(path) => Quiz::from_json(path, args.skin)?,
        None => Quiz::new(QuizDataset::sample(), args.skin),
    };
    quiz.run()
}

use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::{ArgAction, Parser};
use env_logger::Env;
use log::info;
use recognizer::{display_error, lexer::lexer::tokenize, parser::parser::parse};

#[derive(Parser)]
#[command(name = "recognizer")]
#[command(version, about = "Checks a source file against the statement grammar")]
struct Cli {
    /// Source file to recognize
    file: PathBuf,

    /// Print the token stream before recognizing
    #[arg(short, long)]
    tokens: bool,

    /// Show the offending source line under the diagnostic
    #[arg(short, long)]
    snippet: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: Could not open file {}: {}", cli.file.display(), err);
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();

    let result = tokenize(&source).and_then(|tokens| {
        info!("Tokenized in {:?}", start.elapsed());

        if cli.tokens {
            for token in &tokens {
                println!("{}", token);
            }
        }

        let parse_start = Instant::now();
        let result = parse(&tokens);
        info!("Parsed in {:?}", parse_start.elapsed());
        result
    });

    match result {
        Ok(()) => {
            println!("Parsing completed successfully! No Syntax Error");
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("{}", error);
            if cli.snippet {
                println!("{}", display_error(&error, &source, &cli.file));
            }
            ExitCode::from(1)
        }
    }
}

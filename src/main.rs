use clap::{Parser, Subcommand, ValueEnum};
use farsinum::{Normalizer, TextStats, parse_to_words, to_persian_digits, to_western_digits};
use std::{
    error::Error,
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "farsinum", version, about = "Persian text normalization and numerals")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a file (or stdin) and print the result
    Normalize {
        file: Option<PathBuf>,
        /// Keep `ئ` and `ء` instead of folding them
        #[arg(long)]
        keep_hamza: bool,
    },
    /// Translate the digits in TEXT
    Digits {
        #[arg(long, value_enum)]
        to: DigitSystem,
        text: String,
    },
    /// Spell an integer (Western or Persian digits) in Persian words
    Words {
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
    /// Count words, sentences and paragraphs of a file (or stdin)
    Stats { file: Option<PathBuf> },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DigitSystem {
    Persian,
    Western,
}

fn read_input(file: Option<PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut out = io::stdout().lock();
    match cli.command {
        Command::Normalize { file, keep_hamza } => {
            let text = read_input(file)?;
            let normalizer = Normalizer::builder().fold_hamza(!keep_hamza).build();
            writeln!(out, "{}", normalizer.try_normalize(&text)?)?;
        }
        Command::Digits { to, text } => {
            let translated = match to {
                DigitSystem::Persian => to_persian_digits(text.as_str()),
                DigitSystem::Western => to_western_digits(text.as_str()),
            };
            writeln!(out, "{translated}")?;
        }
        Command::Words { number } => {
            writeln!(out, "{}", parse_to_words(&number)?)?;
        }
        Command::Stats { file } => {
            let text = read_input(file)?;
            let normalized = farsinum::normalize(&text);
            let stats = TextStats::of(&normalized);
            debug!(?stats, "computed");
            writeln!(out, "words\t{}", stats.words)?;
            writeln!(out, "sentences\t{}", stats.sentences)?;
            writeln!(out, "paragraphs\t{}", stats.paragraphs)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    debug!(?cli, "starting");
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

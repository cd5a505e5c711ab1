//! Console movie quiz.
//!
//! Run with: `cargo run -- --words movies.txt`
//!
//! Ctrl+C (or closing stdin) at any prompt ends the game with a farewell and
//! a success exit status. Set `RUST_LOG=debug` for engine diagnostics on
//! stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, warn};

use movie_quiz::{
    build_quiz, default_word_list_path, load_titles, report, seeded_rng, Palette, QuizConfig,
    QuizError, QuizSession, Terminal,
};

const FAREWELL: &str = "\n\nGiving up are we? Okay, bye 👋";

/// Guess the movie from its scrambled title.
#[derive(Debug, Parser)]
#[command(name = "movie_quiz", version, about)]
struct Cli {
    /// Word list with one movie title per line. Defaults to `movies.txt`
    /// beside the executable, in the working directory, or in the crate root.
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Attempts per question; `next` and `pass` count as attempts too.
    #[arg(short = 'g', long, default_value_t = 3)]
    max_guesses: usize,

    /// Anagrams pre-generated for every title.
    #[arg(long, default_value_t = 50)]
    variants: usize,

    /// Seed for a reproducible quiz.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable ANSI colours (also honoured via `NO_COLOR`).
    #[arg(long)]
    no_color: bool,

    /// Print the session report as JSON after the summary.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = ctrlc::set_handler(|| {
        println!("{FAREWELL}");
        std::process::exit(0);
    }) {
        warn!("could not install Ctrl+C handler: {err}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(QuizError::Interrupted) => {
            println!("{FAREWELL}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("movie_quiz: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), QuizError> {
    let config = QuizConfig {
        max_guesses: cli.max_guesses,
        variants_per_title: cli.variants,
        rng_seed: cli.seed,
    };
    let path = cli.words.unwrap_or_else(default_word_list_path);
    debug!("config: {config:?}, word list: {}", path.display());

    let titles = load_titles(&path)?;
    let mut rng = seeded_rng(config.rng_seed);
    let quiz = build_quiz(&mut rng, &titles, &config)?;

    let palette = if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        Palette::plain()
    } else {
        Palette::ansi()
    };

    let mut session = QuizSession::new(quiz, Terminal::stdio(palette), rng);
    let summary = session.run()?;

    if cli.json {
        println!("{}", report::to_pretty_string(&summary)?);
    }
    Ok(())
}

//! Wordle Sieve - CLI
//!
//! Narrow a word list down to the words consistent with your Wordle feedback,
//! either interactively in the TUI or from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use std::path::{Path, PathBuf};
use wordle_sieve::{
    commands::{SearchConfig, run_search, validate_word_list},
    dictionary::{Dictionary, loader::load_or_embedded},
    interactive::{App, DEFAULT_ROWS, run_tui},
    output::{print_search_result, print_validation_result},
    search::DEFAULT_DISPLAY_LIMIT,
};

#[derive(Parser)]
#[command(
    name = "wordle_sieve",
    about = "Filter a word list by Wordle guesses and their colored feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one 5-letter word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive guess editor (default)
    Play {
        /// Number of guess rows
        #[arg(short, long, default_value_t = DEFAULT_ROWS)]
        rows: usize,

        /// Maximum number of candidates to display
        #[arg(short, long, default_value_t = DEFAULT_DISPLAY_LIMIT)]
        limit: usize,
    },

    /// Print the candidates for guesses such as `crane:-Y--G`
    Search {
        /// Guesses as `word:pattern` (G = green, Y = yellow, - = gray)
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Maximum number of candidates to print
        #[arg(short, long, default_value_t = DEFAULT_DISPLAY_LIMIT)]
        limit: usize,

        /// Also show the derived constraints
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check that a word list file is well formed
    Validate {
        /// Path of the word list to check
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        rows: DEFAULT_ROWS,
        limit: DEFAULT_DISPLAY_LIMIT,
    });

    match command {
        Commands::Play { rows, limit } => {
            let dictionary = load_dictionary(cli.wordlist.as_deref())?;
            run_tui(App::new(&dictionary, rows, limit))
        }
        Commands::Search {
            guesses,
            limit,
            verbose,
        } => {
            let dictionary = load_dictionary(cli.wordlist.as_deref())?;
            let config = SearchConfig::new(guesses).with_limit(limit);
            let result = run_search(&config, &dictionary)?;
            print_search_result(&result, verbose);
            Ok(())
        }
        Commands::Validate { path } => {
            let result = validate_word_list(&path)?;
            print_validation_result(&result);
            Ok(())
        }
    }
}

fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    load_or_embedded(path)
        .inspect_err(|e| warn!("Word list rejected: {e}"))
        .with_context(|| match path {
            Some(path) => format!("Failed to load word list {}", path.display()),
            None => "Failed to load the built-in word list".to_string(),
        })
}

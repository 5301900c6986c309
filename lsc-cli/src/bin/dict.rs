use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lsc_cli::logging::init_logging;
use lsc_engine::{WordList, current_token, recompute};
use serde::Serialize;

/// lsc word list tool: inspect completion word lists.
#[derive(Parser, Debug)]
#[command(name = "lsc-dict")]
#[command(about = "lsc word list tool: inspect completion word lists")]
struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print word count and duplicate/blank line statistics.
    Stats {
        /// Newline-delimited word list
        words: PathBuf,
    },

    /// Show the completions offered for a text.
    ///
    /// The completion uses the last word of the text, exactly as the keyboard
    /// does while typing.
    Complete {
        /// Newline-delimited word list
        words: PathBuf,

        /// Text typed so far
        text: String,

        /// Maximum number of completions to print (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct CompleteOutput<'a> {
    token: &'a str,
    total: usize,
    completions: &'a [String],
}

fn run_stats(path: PathBuf) -> Result<()> {
    let source = std::fs::read_to_string(&path)?;
    let lines = source.lines().count();
    let blank = source.lines().filter(|l| l.trim().is_empty()).count();
    let words = WordList::from_words(source.lines());

    println!("file:       {:?}", path);
    println!("lines:      {}", lines);
    println!("blank:      {}", blank);
    println!("duplicates: {}", lines - blank - words.len());
    println!("words:      {}", words.len());
    Ok(())
}

fn run_complete(path: PathBuf, text: String, limit: usize, json: bool) -> Result<()> {
    let words = WordList::load(&path)?;
    let completions = recompute(&text, &words);
    let shown = if limit == 0 {
        &completions[..]
    } else {
        &completions[..limit.min(completions.len())]
    };

    if json {
        let output = CompleteOutput {
            token: current_token(&text),
            total: completions.len(),
            completions: shown,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    eprintln!(
        "{} completions for {:?}",
        completions.len(),
        current_token(&text)
    );
    for word in shown {
        println!("{}", word);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Stats { words } => run_stats(words),
        Commands::Complete {
            words,
            text,
            limit,
            json,
        } => run_complete(words, text, limit, json),
    }
}

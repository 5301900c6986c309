use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use lsc_cli::driver::{Driver, Snapshot};
use lsc_cli::logging::init_logging;
use lsc_cli::script::{Command, parse_script};
use lsc_engine::WordList;
use lsc_im::KeyboardEngine;
use lsc_im::config::Settings;
use tokio::io::{AsyncBufReadExt, BufReader};

/// LSC on-screen keyboard driven from an event script
#[derive(Parser, Debug)]
#[command(name = "lsc-keyboard")]
#[command(about = "Drive the LSC keyboard engine from an event script", long_about = None)]
struct Args {
    /// Event script (reads commands from stdin when omitted)
    script: Option<PathBuf>,

    /// Settings file (defaults to the user config, then built-in defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Word list for completion (overrides the settings)
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Plain keyboard: no word completion
    #[arg(long)]
    plain: bool,

    /// Print the engine state as JSON after every command
    #[arg(long)]
    json: bool,

    /// Print the key layout and exit
    #[arg(long)]
    layout: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("failed to load settings from {:?}", path))?,
        None => Settings::load()?,
    };
    if args.plain {
        settings.suggestions.enabled = false;
    }
    Ok(settings)
}

fn print_layout(settings: &Settings) -> Result<()> {
    let layout = settings.layout()?;
    for (i, row) in layout.rows().iter().enumerate() {
        let keys: Vec<String> = row
            .iter()
            .map(|key| {
                let (w, h) = key.size_class().pixel_size();
                format!("{}({}x{})", key.asset_name(), w, h)
            })
            .collect();
        println!("row {}: {}", i + 1, keys.join(" "));
    }
    Ok(())
}

fn print_snapshot(snapshot: &Snapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
        return Ok(());
    }
    println!("text: {:?}", snapshot.text);
    if snapshot.caps_lock {
        println!("caps-lock: on");
    }
    if !snapshot.suggestions.is_empty() {
        let list: Vec<String> = snapshot
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if snapshot.highlighted == Some(i) {
                    format!("[{}]", word)
                } else {
                    word.clone()
                }
            })
            .collect();
        println!("suggestions: {}", list.join(" "));
    }
    Ok(())
}

async fn run_stdin(driver: &mut Driver, json: bool) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    // A held key keeps repeating while we wait for the next line
    while let Some(line) = driver.deliver_ticks_until(lines.next_line()).await? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match trimmed.parse::<Command>() {
            Ok(command) => {
                driver.run(&command).await;
                print_snapshot(&driver.snapshot(), json)?;
            }
            Err(e) => eprintln!("error: {:#}", e),
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = load_settings(&args)?;
    if args.layout {
        return print_layout(&settings);
    }

    let mut engine = KeyboardEngine::from_settings(&settings)?;
    if let Some(path) = &args.words
        && settings.suggestions.enabled
    {
        engine.set_word_list(Arc::new(WordList::load_or_empty(path)));
    }
    tracing::info!("Keyboard ready: {} words", engine.words().len());

    let mut driver = Driver::new(engine);
    match &args.script {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read script {:?}", path))?;
            let commands = parse_script(&source)?;
            for command in &commands {
                driver.run(command).await;
                if args.json {
                    print_snapshot(&driver.snapshot(), true)?;
                }
            }
            if !args.json {
                print_snapshot(&driver.snapshot(), false)?;
            }
        }
        None => run_stdin(&mut driver, args.json).await?,
    }
    Ok(())
}

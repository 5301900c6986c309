//! Event scripts for driving the keyboard without a window.
//!
//! One command per line; blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! type hola mu        # activate one key per character (space = space key)
//! key enter           # activate a key by name
//! press backspace     # press-started
//! release backspace   # released
//! hold backspace 500  # press, keep held for 500 ms, release
//! wait 200            # let time pass (repeat ticks keep firing)
//! next | prev         # move the suggestion highlight
//! page next|prev      # move the highlight a page
//! highlight 2         # highlight a suggestion by index
//! choose [word]       # complete with the highlighted suggestion, or a named one
//! reset               # clear everything
//! ```
//!
//! Key names are checked while parsing, so a script naming an unknown key is
//! rejected before any event reaches the engine.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use lsc_im::KeyId;

/// A single scripted command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Activate keys in order
    Type(Vec<KeyId>),
    Key(KeyId),
    Press(KeyId),
    Release(KeyId),
    Hold(KeyId, Duration),
    Wait(Duration),
    Next,
    Prev,
    NextPage,
    PrevPage,
    Highlight(usize),
    Choose(Option<String>),
    Reset,
}

/// Keys typing each character of `text`.
fn keys_for_text(text: &str) -> Result<Vec<KeyId>> {
    text.chars()
        .map(|ch| match ch {
            ' ' => Ok(KeyId::Space),
            other => KeyId::from_char(other)
                .with_context(|| format!("no key types {:?} (use capslock for uppercase)", other)),
        })
        .collect()
}

fn parse_key(name: &str) -> Result<KeyId> {
    Ok(name.parse::<KeyId>()?)
}

fn parse_millis(value: &str) -> Result<Duration> {
    let ms: u64 = value
        .trim_end_matches("ms")
        .parse()
        .with_context(|| format!("invalid duration: {:?}", value))?;
    Ok(Duration::from_millis(ms))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match (name, args.as_slice()) {
            // Keep inner spaces: they are space key presses
            ("type", _) => Command::Type(keys_for_text(rest.trim_end())?),
            ("key", [key]) => Command::Key(parse_key(key)?),
            ("press", [key]) => Command::Press(parse_key(key)?),
            ("release", [key]) => Command::Release(parse_key(key)?),
            ("hold", [key, ms]) => Command::Hold(parse_key(key)?, parse_millis(ms)?),
            ("wait", [ms]) => Command::Wait(parse_millis(ms)?),
            ("next", []) => Command::Next,
            ("prev", []) => Command::Prev,
            ("page", ["next"]) => Command::NextPage,
            ("page", ["prev"]) => Command::PrevPage,
            ("highlight", [index]) => Command::Highlight(
                index
                    .parse()
                    .with_context(|| format!("invalid index: {:?}", index))?,
            ),
            ("choose", []) => Command::Choose(None),
            ("choose", [word]) => Command::Choose(Some(word.to_string())),
            ("reset", []) => Command::Reset,
            _ => bail!("unrecognized command: {:?}", line),
        };
        Ok(command)
    }
}

/// Parse a whole script, reporting the first bad line.
pub fn parse_script(source: &str) -> Result<Vec<Command>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            line.parse::<Command>()
                .with_context(|| format!("line {}", i + 1))
        })
        .collect()
}

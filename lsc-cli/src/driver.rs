//! Tokio driver: plays the role of the UI event loop for the keyboard engine.
//!
//! Every `ScheduleRepeat` action becomes a fire-and-forget timer task that
//! sends its session back over a channel when it expires. The driver feeds
//! those ticks to the engine in order with the scripted events, so all state
//! changes still happen on one logical thread. Ticks keep flowing whenever the
//! driver is awaiting something, be it a scripted wait or the next line of
//! input. Timers are never cancelled; the engine drops ticks from holds that
//! have ended.

use lsc_im::{EngineAction, EngineResult, KeyboardEngine, RepeatSession};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant, sleep, sleep_until};
use tracing::{debug, trace};

use crate::script::Command;

/// Serializable view of the engine after a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub text: String,
    pub caps_lock: bool,
    pub repeating: bool,
    pub suggestions: Vec<String>,
    pub highlighted: Option<usize>,
}

/// Drives a [`KeyboardEngine`] from scripted commands and real timers
pub struct Driver {
    engine: KeyboardEngine,
    ticks_tx: mpsc::UnboundedSender<RepeatSession>,
    ticks_rx: mpsc::UnboundedReceiver<RepeatSession>,
    /// Number of ticks delivered to the engine (stale ones included)
    ticks_delivered: usize,
}

impl Driver {
    pub fn new(engine: KeyboardEngine) -> Self {
        let (ticks_tx, ticks_rx) = mpsc::unbounded_channel();
        Self {
            engine,
            ticks_tx,
            ticks_rx,
            ticks_delivered: 0,
        }
    }

    pub fn engine(&self) -> &KeyboardEngine {
        &self.engine
    }

    pub fn ticks_delivered(&self) -> usize {
        self.ticks_delivered
    }

    pub fn snapshot(&self) -> Snapshot {
        let suggestions = self.engine.suggestions();
        Snapshot {
            text: self.engine.text().to_string(),
            caps_lock: self.engine.caps_lock(),
            repeating: self.engine.is_repeating(),
            suggestions: suggestions.words().to_vec(),
            highlighted: suggestions.cursor(),
        }
    }

    /// Run one command to completion.
    pub async fn run(&mut self, command: &Command) {
        debug!("Running {:?}", command);
        match command {
            Command::Type(keys) => {
                for key in keys {
                    let result = self.engine.activate(*key);
                    self.apply(result);
                }
            }
            Command::Key(key) => {
                let result = self.engine.activate(*key);
                self.apply(result);
            }
            Command::Press(key) => {
                let result = self.engine.press_started(*key);
                self.apply(result);
            }
            Command::Release(key) => {
                let result = self.engine.released(*key);
                self.apply(result);
            }
            Command::Hold(key, duration) => {
                let result = self.engine.press_started(*key);
                self.apply(result);
                self.advance(*duration).await;
                let result = self.engine.released(*key);
                self.apply(result);
            }
            Command::Wait(duration) => self.advance(*duration).await,
            Command::Next => {
                let result = self.engine.highlight_next();
                self.apply(result);
            }
            Command::Prev => {
                let result = self.engine.highlight_prev();
                self.apply(result);
            }
            Command::NextPage => {
                let result = self.engine.next_page();
                self.apply(result);
            }
            Command::PrevPage => {
                let result = self.engine.prev_page();
                self.apply(result);
            }
            Command::Highlight(index) => {
                let result = self.engine.highlight(*index);
                self.apply(result);
            }
            Command::Choose(None) => {
                let result = self.engine.choose_highlighted();
                self.apply(result);
            }
            Command::Choose(Some(word)) => {
                let result = self.engine.choose_word(word);
                self.apply(result);
            }
            Command::Reset => self.engine.reset(),
        }
    }

    /// Run commands in order
    pub async fn run_all(&mut self, commands: &[Command]) {
        for command in commands {
            self.run(command).await;
        }
    }

    /// Await `fut`, delivering repeat ticks to the engine until it completes.
    pub async fn deliver_ticks_until<F: Future>(&mut self, fut: F) -> F::Output {
        tokio::pin!(fut);
        loop {
            tokio::select! {
                biased;
                output = &mut fut => return output,
                Some(session) = self.ticks_rx.recv() => {
                    self.ticks_delivered += 1;
                    let result = self.engine.repeat_tick(session);
                    self.apply(result);
                }
            }
        }
    }

    /// Let `duration` pass, delivering repeat ticks as their timers expire.
    async fn advance(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        self.deliver_ticks_until(sleep_until(deadline)).await;
    }

    fn apply(&mut self, result: EngineResult) {
        for action in result.actions {
            match action {
                EngineAction::ScheduleRepeat { session, after } => self.arm(session, after),
                EngineAction::UpdateText(text) => trace!("text: {:?}", text),
                EngineAction::UpdateCapsLock(active) => debug!("caps-lock key pressed: {}", active),
                EngineAction::ShowSuggestions(list) => trace!("suggestions: {:?}", list.words()),
                EngineAction::HideSuggestions => trace!("suggestions hidden"),
            }
        }
    }

    /// Start a one-shot timer that reports `session` after `after`.
    fn arm(&self, session: RepeatSession, after: Duration) {
        let tx = self.ticks_tx.clone();
        tokio::spawn(async move {
            sleep(after).await;
            // The driver may be gone by the time the timer fires
            let _ = tx.send(session);
        });
    }
}

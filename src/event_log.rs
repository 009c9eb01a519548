//! Optional JSON-lines event log.
//!
//! The game owns the terminal, so nothing is printed while it runs. Instead
//! each session can append one JSON object per line to a file:
//!
//! ```text
//! {"ts":1760000000000,"event":"session_start","seed":42,"rows":40,"columns":20,"fall_interval_ms":500}
//! {"ts":1760000001234,"event":"lock","lines_cleared":1,"score_awarded":100,"score":100,"lines":1,"game_over":false}
//! {"ts":1760000009876,"event":"session_end","reason":"game_over","score":1200,"lines":3,"pieces":12}
//! ```
//!
//! Write failures never stop the game: the log disables itself and keeps
//! the first error so the caller can report it once the terminal is restored.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::types::LockEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    GameOver,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventRecord {
    SessionStart {
        seed: u32,
        rows: usize,
        columns: usize,
        fall_interval_ms: u64,
    },
    Lock {
        lines_cleared: u32,
        score_awarded: u32,
        score: u32,
        lines: u32,
        game_over: bool,
    },
    SessionEnd {
        reason: EndReason,
        score: u32,
        lines: u32,
        pieces: u32,
    },
}

impl EventRecord {
    pub fn lock(event: LockEvent, total_lines: u32) -> Self {
        EventRecord::Lock {
            lines_cleared: event.lines_cleared,
            score_awarded: event.score_awarded,
            score: event.score,
            lines: total_lines,
            game_over: event.game_over,
        }
    }
}

#[derive(Serialize)]
struct LogLine<'a> {
    ts: u64,
    #[serde(flatten)]
    record: &'a EventRecord,
}

pub struct EventLog {
    out: Option<Box<dyn Write>>,
    buf: Vec<u8>,
    first_error: Option<anyhow::Error>,
}

impl EventLog {
    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
            first_error: None,
        }
    }

    /// Append to `path`, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("event log: cannot open {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// Open `path` when given. An open failure yields a disabled log that
    /// still reports the error through [`EventLog::take_error`].
    pub fn open_optional(path: Option<&Path>) -> Self {
        match path {
            None => Self::disabled(),
            Some(path) => Self::open(path).unwrap_or_else(|e| {
                let mut log = Self::disabled();
                log.first_error = Some(e);
                log
            }),
        }
    }

    pub fn from_writer(out: impl Write + 'static) -> Self {
        Self {
            out: Some(Box::new(out)),
            buf: Vec::with_capacity(256),
            first_error: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Append one record stamped with the current wall-clock time.
    pub fn record(&mut self, record: &EventRecord) {
        self.record_at(current_timestamp_ms(), record);
    }

    pub fn record_at(&mut self, ts: u64, record: &EventRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        let line = LogLine { ts, record };
        let result = serde_json::to_writer(&mut self.buf, &line)
            .map_err(|e| anyhow!("event log: encode failed: {}", e))
            .and_then(|()| {
                self.buf.push(b'\n');
                out.write_all(&self.buf)
                    .context("event log: write failed")
            });

        if let Err(e) = result {
            self.fail(e);
        }
    }

    pub fn flush(&mut self) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        if let Err(e) = out.flush() {
            self.fail(anyhow!("event log: flush failed: {}", e));
        }
    }

    /// The first failure seen, if any. Later failures are dropped.
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.first_error.take()
    }

    fn fail(&mut self, e: anyhow::Error) {
        self.out = None;
        if self.first_error.is_none() {
            self.first_error = Some(e);
        }
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        if let Some(out) = self.out.as_mut() {
            let _ = out.flush();
        }
    }
}

/// Milliseconds since the Unix epoch.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

//! hx-logging: append-only NDJSON events for run post-mortems.
//!
//! One JSON object per line; a crashed run leaves at most one partial
//! trailing line, which readers should skip.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Error)]
pub enum LogError {
    #[error("log io error: {0}")]
    Io(#[from] io::Error),
    #[error("log serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One solver decision inside a game.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionEventV1 {
    pub event: &'static str,
    pub game_id: u64,
    pub ply: u32,
    pub player: u8,
    pub difficulty: &'static str,
    pub row: i32,
    pub col: i32,
    pub elapsed_ms: u64,
    pub iterations: u32,
    pub tree_nodes: u64,
    pub best_visits: u32,
}

impl DecisionEventV1 {
    pub const EVENT: &'static str = "decision_v1";
}

/// One finished game.
#[derive(Debug, Clone, Serialize)]
pub struct GameEventV1 {
    pub event: &'static str,
    pub game_id: u64,
    pub rows: i32,
    pub cols: i32,
    pub winner: u8,
    pub moves: u32,
}

impl GameEventV1 {
    pub const EVENT: &'static str = "game_v1";
}

/// Append-only NDJSON writer.
///
/// Contract: each `append` writes exactly one JSON object and a newline.
/// Buffered; call `flush` at durable points (end of game, end of run).
pub struct EventLog {
    w: BufWriter<File>,
}

impl EventLog {
    /// Open `path` for append, creating it if missing.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
        })
    }

    pub fn append<T: Serialize>(&mut self, event: &T) -> Result<(), LogError> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');
        self.w.write_all(&line)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), LogError> {
        self.w.flush()?;
        Ok(())
    }
}

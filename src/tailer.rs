//! Tailer - follow-mode consumption of a growing order stream.
//!
//! The order source is a file another process keeps appending to. The
//! loop reads whatever lines are available, and when it runs out it
//! sleeps for a bounded poll interval and resumes from the same position
//! instead of spinning. An external shutdown flag is the only way to stop
//! the loop other than inventory depletion.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::engine::OrderEngine;

/// Default pause between polls of an exhausted source
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Tailing loop configuration
#[derive(Clone, Copy, Debug)]
pub struct FollowConfig {
    /// How long to sleep when the source has no complete line available
    pub poll_interval: Duration,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Why the tailing loop returned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The warehouse was drained; the report is due
    Depleted,
    /// The shutdown flag was raised externally
    Cancelled,
    /// The source could not be opened; nothing was processed
    SourceUnavailable,
}

/// Failure while reading an already-open order source
#[derive(Debug, Error)]
pub enum TailError {
    #[error("order source read failed: {0}")]
    Io(#[from] io::Error),
}

/// Buffered line reader that tolerates a source still being written.
///
/// Only newline-terminated lines are handed out. A partial tail line
/// (the writer got there first) is held back and completed on a later
/// poll, so a line is never split across two reads. The read position
/// survives end-of-stream, which is what makes re-polling pick up
/// appended data.
pub struct LineFollower {
    reader: BufReader<File>,
    pending: String,
}

impl LineFollower {
    /// Open `path` for following
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self {
            reader: BufReader::new(File::open(path)?),
            pending: String::new(),
        })
    }

    /// Read the next complete line, without its terminator.
    ///
    /// `Ok(None)` means the source is exhausted *for now*; call again
    /// later from the same position.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut chunk = String::new();
        let read = self.reader.read_line(&mut chunk)?;
        if read == 0 {
            return Ok(None);
        }

        self.pending.push_str(&chunk);
        if !self.pending.ends_with('\n') {
            // Writer is mid-line; hold what we have until it finishes
            return Ok(None);
        }

        let mut line = std::mem::take(&mut self.pending);
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Drive `engine` from the order stream at `path` until the inventory is
/// depleted or `shutdown` is raised.
///
/// After each line (accepted or discarded) the depletion check runs;
/// further unread lines are abandoned once it fires. An exhausted source
/// only pauses the loop for `config.poll_interval` before re-polling. An
/// unopenable source yields [`RunOutcome::SourceUnavailable`] with
/// nothing processed.
pub fn follow(
    engine: &mut OrderEngine,
    path: &Path,
    config: &FollowConfig,
    shutdown: &AtomicBool,
) -> Result<RunOutcome, TailError> {
    let mut follower = match LineFollower::open(path) {
        Ok(follower) => follower,
        Err(err) => {
            debug!(%err, path = %path.display(), "order source unavailable");
            return Ok(RunOutcome::SourceUnavailable);
        }
    };

    info!(path = %path.display(), "following order stream");
    loop {
        if shutdown.load(Ordering::Relaxed) {
            info!(orders = engine.log().len(), "shutdown requested");
            return Ok(RunOutcome::Cancelled);
        }

        match follower.next_line()? {
            Some(line) => {
                engine.process_line(&line);
                if engine.is_depleted() {
                    info!(orders = engine.log().len(), "inventory depleted");
                    return Ok(RunOutcome::Depleted);
                }
            }
            None => thread::sleep(config.poll_interval),
        }
    }
}

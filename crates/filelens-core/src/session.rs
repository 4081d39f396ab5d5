//! Read session state tracking.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Lifecycle state of a read session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ReadStatus {
    /// No read has started yet.
    #[default]
    Idle,
    /// A read is in flight.
    Loading,
    /// The read completed successfully.
    Done,
    /// The read terminated with an error.
    Errored,
    /// The read was cancelled by the user.
    Aborted,
}

impl ReadStatus {
    /// Whether this state admits no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Errored | Self::Aborted)
    }

    /// Whether the machine may move from `self` to `next`.
    ///
    /// The only legal edges are idle -> loading and
    /// loading -> done | errored | aborted.
    pub fn can_transition(self, next: ReadStatus) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Loading)
                | (Self::Loading, Self::Done)
                | (Self::Loading, Self::Errored)
                | (Self::Loading, Self::Aborted)
        )
    }
}

/// Byte counters for an in-flight read.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReadProgress {
    /// Bytes delivered so far.
    pub bytes_loaded: u64,

    /// Total bytes this read will deliver, when computable.
    pub bytes_total: Option<u64>,
}

impl ReadProgress {
    /// Counters at the start of a read.
    pub fn new(bytes_total: Option<u64>) -> Self {
        Self {
            bytes_loaded: 0,
            bytes_total,
        }
    }

    /// Whole-percent completion, rounded down. `None` until the total
    /// is known. A zero-byte total reports 100: nothing is left to load.
    pub fn percent(&self) -> Option<u8> {
        let total = self.bytes_total?;
        if total == 0 {
            return Some(100);
        }
        let loaded = self.bytes_loaded.min(total);
        Some((loaded as u128 * 100 / total as u128) as u8)
    }
}

/// Live state of one read interaction.
///
/// Orchestrator events are applied to the session and renderers query it.
/// Illegal transitions leave the session unchanged and return `false`.
#[derive(Debug, Clone, Default)]
pub struct ReadSession {
    status: ReadStatus,
    progress: ReadProgress,
}

impl ReadSession {
    /// Create a fresh idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn status(&self) -> ReadStatus {
        self.status
    }

    /// Current byte counters.
    pub fn progress(&self) -> ReadProgress {
        self.progress
    }

    /// Move to `loading` and reset the counters.
    pub fn start(&mut self, bytes_total: Option<u64>) -> bool {
        if !self.status.can_transition(ReadStatus::Loading) {
            return false;
        }
        self.status = ReadStatus::Loading;
        self.progress = ReadProgress::new(bytes_total);
        true
    }

    /// Record delivered bytes. Counters never move backwards and never
    /// pass a known total.
    pub fn record(&mut self, bytes_loaded: u64) -> bool {
        if self.status != ReadStatus::Loading {
            return false;
        }
        let capped = match self.progress.bytes_total {
            Some(total) => bytes_loaded.min(total),
            None => bytes_loaded,
        };
        self.progress.bytes_loaded = self.progress.bytes_loaded.max(capped);
        true
    }

    /// Terminate successfully. Snaps the counter to the total when known.
    pub fn complete(&mut self) -> bool {
        if !self.status.can_transition(ReadStatus::Done) {
            return false;
        }
        if let Some(total) = self.progress.bytes_total {
            self.progress.bytes_loaded = total;
        }
        self.status = ReadStatus::Done;
        true
    }

    /// Terminate with an error.
    pub fn fail(&mut self) -> bool {
        self.finish(ReadStatus::Errored)
    }

    /// Terminate as cancelled.
    pub fn abort(&mut self) -> bool {
        self.finish(ReadStatus::Aborted)
    }

    fn finish(&mut self, terminal: ReadStatus) -> bool {
        if !self.status.can_transition(terminal) {
            return false;
        }
        self.status = terminal;
        true
    }

    /// Percent to render. While loading only values strictly below 100
    /// are shown; exactly 100 belongs to successful completion alone.
    pub fn display_percent(&self) -> Option<u8> {
        match self.status {
            ReadStatus::Loading => self.progress.percent().filter(|p| *p < 100),
            ReadStatus::Done => Some(100),
            _ => None,
        }
    }
}

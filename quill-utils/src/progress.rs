use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, interval_at};
use tracing::debug;

pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(800);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressPhase {
    Thinking,
    Calculating,
    Rephrasing,
    Sending,
}

impl ProgressPhase {
    pub const ALL: [ProgressPhase; 4] = [
        ProgressPhase::Thinking,
        ProgressPhase::Calculating,
        ProgressPhase::Rephrasing,
        ProgressPhase::Sending,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProgressPhase::Thinking => "Thinking...",
            ProgressPhase::Calculating => "Calculating...",
            ProgressPhase::Rephrasing => "Rephrasing...",
            ProgressPhase::Sending => "Sending...",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            ProgressPhase::Thinking => Some(ProgressPhase::Calculating),
            ProgressPhase::Calculating => Some(ProgressPhase::Rephrasing),
            ProgressPhase::Rephrasing => Some(ProgressPhase::Sending),
            ProgressPhase::Sending => None,
        }
    }
}

/// Advances through [`ProgressPhase::ALL`] on a fixed interval.
///
/// The background task stops after the last phase. Dropping or cancelling the
/// ticker aborts it early. Phases are cosmetic and unrelated to request progress.
#[derive(Debug)]
pub struct ProgressTicker {
    phase: watch::Receiver<ProgressPhase>,
    task: JoinHandle<()>,
}

impl ProgressTicker {
    /// Start at `Thinking`. Must be called inside a tokio runtime.
    pub fn start(interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        let (tx, rx) = watch::channel(ProgressPhase::Thinking);

        let task = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + interval, interval);
            let mut phase = ProgressPhase::Thinking;

            while let Some(next) = phase.next() {
                ticks.tick().await;
                phase = next;
                if tx.send(phase).is_err() {
                    break;
                }
            }

            debug!("progress sequence finished");
        });

        Self { phase: rx, task }
    }

    pub fn phase(&self) -> ProgressPhase {
        *self.phase.borrow()
    }

    /// Receiver notified on every phase change; closes when the sequence ends.
    pub fn subscribe(&self) -> watch::Receiver<ProgressPhase> {
        self.phase.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

use std::time::Duration;

use quill_utils::progress::{ProgressPhase, ProgressTicker};
use tokio::sync::watch;

/// Owns the decorative ticker while at least one request is pending.
#[derive(Debug, Default)]
pub struct ProgressView {
    ticker: Option<ProgressTicker>,
    phases: Option<watch::Receiver<ProgressPhase>>,
}

impl ProgressView {
    /// Start a fresh sequence, replacing any earlier one, and return its first phase.
    pub fn begin(&mut self, interval: Duration) -> ProgressPhase {
        self.end();

        let ticker = ProgressTicker::start(interval);
        let mut phases = ticker.subscribe();
        let first = *phases.borrow_and_update();
        self.phases = Some(phases);
        self.ticker = Some(ticker);
        first
    }

    /// Stop the ticker and forget its phase stream.
    pub fn end(&mut self) {
        self.phases = None;
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    /// Wait for the next phase change. Pends forever while idle or once the sequence is done.
    pub async fn next_phase(&mut self) -> ProgressPhase {
        if let Some(phases) = self.phases.as_mut() {
            if phases.changed().await.is_ok() {
                return *phases.borrow_and_update();
            }
            self.phases = None;
        }

        std::future::pending().await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use quill_utils::progress::ProgressPhase;
    use tokio::time::timeout;

    use super::ProgressView;

    #[tokio::test(start_paused = true)]
    async fn begin_restarts_the_sequence() {
        let mut view = ProgressView::default();
        assert_eq!(view.begin(Duration::from_millis(800)), ProgressPhase::Thinking);
        assert_eq!(view.next_phase().await, ProgressPhase::Calculating);

        assert_eq!(view.begin(Duration::from_millis(800)), ProgressPhase::Thinking);
        assert_eq!(view.next_phase().await, ProgressPhase::Calculating);

        view.end();
        assert!(view.ticker.is_none());
        let waited = timeout(Duration::from_secs(10), view.next_phase()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn idle_view_never_yields() {
        let mut view = ProgressView::default();
        let waited = timeout(Duration::from_secs(10), view.next_phase()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn finished_sequence_goes_quiet() {
        let mut view = ProgressView::default();
        view.begin(Duration::from_millis(10));

        for expected in &ProgressPhase::ALL[1..] {
            assert_eq!(view.next_phase().await, *expected);
        }

        let waited = timeout(Duration::from_secs(1), view.next_phase()).await;
        assert!(waited.is_err());
    }
}

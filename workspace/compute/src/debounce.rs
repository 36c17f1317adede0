use std::time::Duration;
use tokio::sync::mpsc;
use tracing::trace;

/// Default quiet period before a burst of edits is considered settled.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(1000);

/// Collapses bursts of edits into a single settled value.
///
/// After each edit the debouncer waits for the quiet period; any edit arriving
/// in the meantime replaces the pending one and restarts the wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    quiet_period: Duration,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self { quiet_period }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Consumes `edits` until the channel closes, handing every settled value
    /// to `on_settled`.
    ///
    /// A value still pending when the channel closes is flushed before returning.
    pub async fn run<T, F>(&self, mut edits: mpsc::Receiver<T>, mut on_settled: F)
    where
        F: FnMut(T),
    {
        let mut pending: Option<T> = None;

        loop {
            match pending.take() {
                None => match edits.recv().await {
                    Some(edit) => pending = Some(edit),
                    None => return,
                },
                Some(current) => {
                    tokio::select! {
                        next = edits.recv() => match next {
                            Some(edit) => {
                                trace!("Edit superseded before settling");
                                pending = Some(edit);
                            }
                            None => {
                                on_settled(current);
                                return;
                            }
                        },
                        _ = tokio::time::sleep(self.quiet_period) => {
                            trace!("Edit settled after {:?}", self.quiet_period);
                            on_settled(current);
                        }
                    }
                }
            }
        }
    }
}

use crate::core::calculator::timeline::{now_marker_percent, shows_now_marker};
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Longest accepted refresh interval for the live marker.
pub const MAX_REFRESH: Duration = Duration::from_secs(20);

pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// Viewer's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

fn marker_for(log_date: NaiveDate, now: NaiveDateTime) -> Option<f64> {
    shows_now_marker(log_date, now.date()).then(|| now_marker_percent(now.time()))
}

/// Periodically recomputes the "now" marker of one displayed log.
///
/// The task stops when `cancel`/`stop` is called or the handle is dropped.
pub struct NowMarkerTask {
    cancel: CancellationToken,
    rx: watch::Receiver<Option<f64>>,
    handle: Option<JoinHandle<()>>,
}

impl NowMarkerTask {
    pub fn spawn(log_date: NaiveDate, clock: Arc<dyn Clock>, every: Duration) -> Self {
        let every = every.clamp(Duration::from_secs(1), MAX_REFRESH);
        let (tx, rx) = watch::channel(marker_for(log_date, clock.now()));
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await; // first tick is immediate

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        if tx.is_closed() {
                            break;
                        }
                        let marker = marker_for(log_date, clock.now());
                        tx.send_if_modified(|current| {
                            let changed = *current != marker;
                            *current = marker;
                            changed
                        });
                    }
                }
            }
            debug!(%log_date, "now-marker task stopped");
        });

        Self {
            cancel,
            rx,
            handle: Some(handle),
        }
    }

    pub fn current(&self) -> Option<f64> {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<f64>> {
        self.rx.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancel and wait for the task to finish.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for NowMarkerTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

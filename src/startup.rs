// startup.rs - One-shot timer for the automatic first cascade

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Fires once, `delay` after being scheduled. The waker runs on the runtime
/// when the delay elapses so the UI can repaint and notice.
pub struct StartupTimer {
    rx: Option<oneshot::Receiver<()>>,
}

impl StartupTimer {
    pub fn schedule<W>(runtime: &Handle, delay: Duration, wake: W) -> Self
    where
        W: FnOnce() + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(()).is_ok() {
                wake();
            }
        });
        Self { rx: Some(rx) }
    }

    /// True exactly once: the first poll after the timer has fired.
    pub fn poll_fired(&mut self) -> bool {
        let Some(rx) = self.rx.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(()) => {
                self.rx = None;
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Closed) => {
                log::warn!("startup timer dropped before firing");
                self.rx = None;
                false
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_delay() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = wakes.clone();
        let mut timer = StartupTimer::schedule(&Handle::current(), Duration::from_millis(1000), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(!timer.poll_fired());
        assert!(timer.is_pending());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(timer.poll_fired());
        assert!(!timer.poll_fired());
        assert!(!timer.is_pending());

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(!timer.poll_fired());
        assert_eq!(wakes.load(Ordering::SeqCst), 1);
    }
}

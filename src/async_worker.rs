use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

// ---------------------------------------------------------------------------
// Work type
// ---------------------------------------------------------------------------

pub(crate) struct TimerWork {
    pub generation: u64,
    pub deadline: Instant,
}

// ---------------------------------------------------------------------------
// DebounceTimer
// ---------------------------------------------------------------------------

/// Background timer for debounced suggestion requests.
///
/// Each armed request replaces the previous one. Once a deadline passes and
/// the generation is still the latest, the generation is queued for the host
/// thread to pick up with `try_recv` or `recv_timeout`.
pub(crate) struct DebounceTimer {
    work_tx: mpsc::Sender<TimerWork>,
    ready_rx: Mutex<mpsc::Receiver<u64>>,
    latest: Arc<AtomicU64>,
}

impl DebounceTimer {
    pub fn new() -> std::io::Result<Self> {
        let latest = Arc::new(AtomicU64::new(0));
        let (work_tx, work_rx) = mpsc::channel::<TimerWork>();
        let (ready_tx, ready_rx) = mpsc::channel::<u64>();
        {
            let latest = Arc::clone(&latest);
            thread::Builder::new()
                .name("urlbar-debounce".into())
                .spawn(move || timer_worker(work_rx, ready_tx, latest))?;
        }
        Ok(Self {
            work_tx,
            ready_rx: Mutex::new(ready_rx),
            latest,
        })
    }

    pub fn arm(&self, generation: u64, deadline: Instant) {
        self.latest.store(generation, Ordering::SeqCst);
        let _ = self.work_tx.send(TimerWork {
            generation,
            deadline,
        });
    }

    /// Make any armed request stale.
    pub fn disarm(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    pub fn try_recv(&self) -> Option<u64> {
        let rx = self.ready_rx.lock().ok()?;
        rx.try_recv().ok()
    }

    /// Block up to `wait` for the next fired generation.
    pub fn recv_timeout(&self, wait: Duration) -> Option<u64> {
        let rx = self.ready_rx.lock().ok()?;
        rx.recv_timeout(wait).ok()
    }
}

// ---------------------------------------------------------------------------
// Worker thread
// ---------------------------------------------------------------------------

fn timer_worker(rx: mpsc::Receiver<TimerWork>, tx: mpsc::Sender<u64>, latest: Arc<AtomicU64>) {
    while let Ok(work) = rx.recv() {
        // Drain: if multiple requests queued, skip to latest
        let mut current = work;
        while let Ok(newer) = rx.try_recv() {
            current = newer;
        }

        // Sleep until the deadline, restarting if a newer request arrives.
        loop {
            let now = Instant::now();
            if now >= current.deadline {
                break;
            }
            match rx.recv_timeout(current.deadline - now) {
                Ok(newer) => current = newer,
                Err(mpsc::RecvTimeoutError::Timeout) => break,
                Err(mpsc::RecvTimeoutError::Disconnected) => return,
            }
        }

        if current.generation != latest.load(Ordering::SeqCst) {
            debug!(generation = current.generation, "stale timer dropped");
            continue;
        }
        if tx.send(current.generation).is_err() {
            return;
        }
    }
}

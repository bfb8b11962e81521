//! Frame clock driving the animation.
//!
//! The clock owns the only mutable state of the viewer: the current frame
//! index. A background thread advances it on a fixed cadence and notifies
//! subscribers. The index cycles through `[0, cycle_len)` where `cycle_len`
//! is the length of the shorter telemetry sequence; while that is zero the
//! clock keeps running but does not tick.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::Duration;

/// Interval between two frames.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(400);

/// Published after every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTick {
    pub frame: usize,
    pub cycle_len: usize,
}

type TickCallback = Arc<dyn Fn(FrameTick) + Send + Sync>;

struct ClockInner {
    frame: usize,
    cycle_len: usize,
    listeners: Vec<Sender<FrameTick>>,
    callbacks: Vec<TickCallback>,
}

impl ClockInner {
    /// Advance one frame. `None` while suspended.
    fn advance(&mut self) -> Option<FrameTick> {
        if self.cycle_len == 0 {
            return None;
        }
        self.frame = (self.frame + 1) % self.cycle_len;
        let tick = FrameTick {
            frame: self.frame,
            cycle_len: self.cycle_len,
        };
        self.listeners.retain(|tx| tx.send(tick).is_ok());
        Some(tick)
    }
}

struct Runner {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

/// Owned, cancelable frame clock.
pub struct FrameClock {
    inner: Arc<Mutex<ClockInner>>,
    interval: Duration,
    runner: Option<Runner>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ClockInner {
                frame: 0,
                cycle_len: 0,
                listeners: Vec::new(),
                callbacks: Vec::new(),
            })),
            interval,
            runner: None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ClockInner> {
        lock_inner(&self.inner)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn frame(&self) -> usize {
        self.lock().frame
    }

    pub fn cycle_len(&self) -> usize {
        self.lock().cycle_len
    }

    /// Set the cycle to the shorter of the two sequence lengths.
    ///
    /// A frame index outside the new cycle wraps into it.
    pub fn set_sequence_lengths(&self, a: usize, b: usize) {
        let mut inner = self.lock();
        inner.cycle_len = a.min(b);
        if inner.cycle_len == 0 {
            inner.frame = 0;
        } else {
            inner.frame %= inner.cycle_len;
        }
    }

    /// Receive a [`FrameTick`] after every tick.
    pub fn subscribe(&self) -> Receiver<FrameTick> {
        let (tx, rx) = mpsc::channel();
        self.lock().listeners.push(tx);
        rx
    }

    /// Run `callback` after every tick, outside the clock's lock.
    pub fn on_tick<F>(&self, callback: F)
    where
        F: Fn(FrameTick) + Send + Sync + 'static,
    {
        self.lock().callbacks.push(Arc::new(callback));
    }

    /// Perform one tick on the calling thread.
    pub fn tick(&self) -> Option<FrameTick> {
        tick_shared(&self.inner)
    }

    pub fn is_running(&self) -> bool {
        self.runner.is_some()
    }

    /// Start ticking in the background. Does nothing if already running.
    pub fn start(&mut self) {
        if self.runner.is_some() {
            return;
        }
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let inner = Arc::clone(&self.inner);
        let interval = self.interval;
        let handle = std::thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    tick_shared(&inner);
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        tracing::debug!(interval_ms = interval.as_millis() as u64, "frame clock started");
        self.runner = Some(Runner { stop_tx, handle });
    }

    /// Stop ticking and join the background thread. Does nothing if stopped.
    pub fn stop(&mut self) {
        if let Some(runner) = self.runner.take() {
            let _ = runner.stop_tx.send(());
            if runner.handle.join().is_err() {
                tracing::warn!("frame clock thread panicked");
            }
            tracing::debug!(frame = self.frame(), "frame clock stopped");
        }
    }
}

impl Drop for FrameClock {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock_inner(inner: &Mutex<ClockInner>) -> MutexGuard<'_, ClockInner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn tick_shared(inner: &Mutex<ClockInner>) -> Option<FrameTick> {
    let (tick, callbacks) = {
        let mut guard = lock_inner(inner);
        let tick = guard.advance()?;
        (tick, guard.callbacks.clone())
    };
    tracing::trace!(frame = tick.frame, cycle_len = tick.cycle_len, "tick");
    for cb in &callbacks {
        cb(tick);
    }
    Some(tick)
}

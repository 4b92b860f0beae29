#![forbid(unsafe_code)]

//! Cancellable tick timing for the auto-play scheduler.
//!
//! [`tick_pair`] yields a waiter/canceller pair built on a mutex + condvar.
//! The ticker thread blocks in [`TickSignal::wait_timeout`] between advances;
//! cancellation wakes it immediately, so stopping playback is a first-class,
//! race-free operation rather than a flag re-check on the next poll.
//!
//! Cancellation is one-way and idempotent. Each ticker generation gets a
//! fresh pair; a signal from a superseded generation can never affect its
//! successor.

use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

struct TickShared {
    cancelled: Mutex<bool>,
    wake: Condvar,
}

/// Waiter half: owned by the ticker thread.
#[derive(Clone)]
pub(crate) struct TickSignal {
    shared: Arc<TickShared>,
}

/// Canceller half: held by the player's ticker slot.
pub(crate) struct TickCancel {
    shared: Arc<TickShared>,
}

/// Create a connected waiter/canceller pair.
pub(crate) fn tick_pair() -> (TickSignal, TickCancel) {
    let shared = Arc::new(TickShared {
        cancelled: Mutex::new(false),
        wake: Condvar::new(),
    });
    (
        TickSignal {
            shared: Arc::clone(&shared),
        },
        TickCancel { shared },
    )
}

impl TickSignal {
    /// Block until the delay elapses or cancellation arrives, whichever is
    /// first. Returns `true` if cancelled.
    ///
    /// Loops on the condvar so spurious wakeups neither shorten the wait nor
    /// read as cancellation.
    pub(crate) fn wait_timeout(&self, delay: Duration) -> bool {
        let start = std::time::Instant::now();
        let mut cancelled = self
            .shared
            .cancelled
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        loop {
            if *cancelled {
                return true;
            }
            let elapsed = start.elapsed();
            if elapsed >= delay {
                return false;
            }
            let (guard, _timeout) = self
                .shared
                .wake
                .wait_timeout(cancelled, delay - elapsed)
                .unwrap_or_else(|e| e.into_inner());
            cancelled = guard;
        }
    }

    #[cfg(test)]
    pub(crate) fn is_cancelled(&self) -> bool {
        *self
            .shared
            .cancelled
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }
}

impl TickCancel {
    /// Request cancellation and wake a pending wait.
    pub(crate) fn cancel(&self) {
        let mut cancelled = self
            .shared
            .cancelled
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        *cancelled = true;
        self.shared.wake.notify_all();
    }
}

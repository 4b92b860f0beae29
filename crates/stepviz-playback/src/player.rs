#![forbid(unsafe_code)]

//! The Player: serialized state owner with command, query, and observe APIs.
//!
//! All mutation funnels through one mutex-guarded apply point, so state
//! transitions form a total order regardless of how many threads submit
//! commands. Observers are notified inside the same critical section, in
//! registration order, which makes notification order identical to the
//! transition order.
//!
//! Auto-play is driven by a ticker thread that the player reconciles with
//! the `playing` flag after every dispatch: `play()` starts one, and
//! `pause()`/`reset()`/`load_trace()` cancel it outright - the thread is
//! woken from its wait rather than left to poll a flag. The ticker reads the
//! speed fresh on every cycle, so a speed change takes effect on the next
//! tick, never the wait already in progress. When the ticker reaches the
//! final snapshot it issues `Pause` itself and exits (auto-stop).
//!
//! # Failure Modes
//!
//! - **Re-entrant callback**: an observer calling back into the player
//!   deadlocks on the state mutex. Observers must treat the `&PlaybackState`
//!   argument as their whole world.
//! - **Panicking trace generator**: caught in [`trace_for`]; playback falls
//!   back to the placeholder trace and stays inert.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::thread;
use std::time::Duration;

use stepviz_trace::{Problem, Snapshot, Trace, generate};
use tracing::{debug, warn};

use crate::command::{Command, CommandError};
use crate::select::{self, PlaybackSummary};
use crate::state::{DEFAULT_SPEED, PlaybackState};
use crate::ticker::{TickCancel, TickSignal, tick_pair};

/// Player construction options.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Initial delay between automatic advances. Must be non-zero; a zero
    /// value falls back to [`DEFAULT_SPEED`].
    pub speed: Duration,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
        }
    }
}

impl PlayerConfig {
    /// Set the initial playback speed.
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }
}

type ObserverFn = dyn Fn(&PlaybackState) + Send + Sync + 'static;

/// Keeps an observer registered. Dropping the guard unregisters; the player
/// prunes dead observers lazily on the next notification.
pub struct ObserverGuard {
    _callback: Arc<ObserverFn>,
}

struct TickerSlot {
    generation: u64,
    cancel: TickCancel,
}

struct PlayerInner {
    state: PlaybackState,
    observers: Vec<Weak<ObserverFn>>,
    ticker: Option<TickerSlot>,
    next_generation: u64,
}

/// Cheap-clone handle to one playback engine. Clones share the same state.
#[derive(Clone)]
pub struct Player {
    inner: Arc<Mutex<PlayerInner>>,
}

impl Player {
    pub fn new() -> Self {
        Self::with_config(PlayerConfig::default())
    }

    pub fn with_config(config: PlayerConfig) -> Self {
        let mut state = PlaybackState::new();
        if config.speed.is_zero() {
            warn!("zero speed in config, using default");
        } else {
            match state.apply(Command::SetSpeed(config.speed)) {
                Ok(next) => state = next,
                Err(err) => warn!(%err, "config speed rejected, using default"),
            }
        }
        Self {
            inner: Arc::new(Mutex::new(PlayerInner {
                state,
                observers: Vec::new(),
                ticker: None,
                next_generation: 0,
            })),
        }
    }

    // ── Commands ────────────────────────────────────────────────────────

    /// Replace the loaded trace wholesale; rewinds and halts auto-play.
    pub fn load_trace(&self, trace: Trace) {
        self.dispatch_infallible(Command::LoadTrace(trace));
    }

    /// Generate and load the trace for one catalog problem. A panicking
    /// generator or malformed snapshot list falls back to the placeholder
    /// trace.
    pub fn load_problem(&self, problem: &Problem) {
        self.load_trace(trace_for(problem));
    }

    /// Advance one snapshot; no-op at the end of the trace.
    pub fn step(&self) {
        self.dispatch_infallible(Command::Step);
    }

    /// Begin auto-play. Idempotent: a second call neither restarts the
    /// cadence nor spawns a second ticker.
    pub fn play(&self) {
        self.dispatch_infallible(Command::Play);
    }

    /// Halt auto-play, cancelling any pending tick wait.
    pub fn pause(&self) {
        self.dispatch_infallible(Command::Pause);
    }

    /// Rewind to the first snapshot and halt auto-play.
    pub fn reset(&self) {
        self.dispatch_infallible(Command::Reset);
    }

    /// Change the tick cadence. Takes effect on the next tick; a wait
    /// already in progress keeps its old delay.
    pub fn set_speed(&self, speed: Duration) -> Result<(), CommandError> {
        self.dispatch(Command::SetSpeed(speed))
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.lock();
        select::current_snapshot(&inner.state).clone()
    }

    /// Read-only summary of the playback record.
    pub fn summary(&self) -> PlaybackSummary {
        let inner = self.lock();
        select::summarize(&inner.state)
    }

    /// Clone of the full playback state.
    pub fn state(&self) -> PlaybackState {
        self.lock().state.clone()
    }

    // ── Observation ─────────────────────────────────────────────────────

    /// Register a change observer. Called with the new state after every
    /// applied command, in registration order, until the guard is dropped.
    ///
    /// Callbacks run inside the dispatch critical section and must not call
    /// back into the player.
    #[must_use]
    pub fn observe(
        &self,
        callback: impl Fn(&PlaybackState) + Send + Sync + 'static,
    ) -> ObserverGuard {
        let callback: Arc<ObserverFn> = Arc::new(callback);
        self.lock().observers.push(Arc::downgrade(&callback));
        ObserverGuard {
            _callback: callback,
        }
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn lock(&self) -> MutexGuard<'_, PlayerInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn dispatch(&self, command: Command) -> Result<(), CommandError> {
        let mut inner = self.lock();
        self.apply_locked(&mut inner, command)
    }

    fn dispatch_infallible(&self, command: Command) {
        if let Err(err) = self.dispatch(command) {
            warn!(%err, "command rejected");
        }
    }

    /// The single apply point: reduce, notify, reconcile - all under the
    /// state lock.
    fn apply_locked(
        &self,
        inner: &mut PlayerInner,
        command: Command,
    ) -> Result<(), CommandError> {
        let name = command.name();
        inner.state = inner.state.apply(command)?;
        debug!(
            command = name,
            step = inner.state.current_step(),
            playing = inner.state.is_playing(),
            "command applied"
        );
        Self::notify(inner);
        self.reconcile(inner);
        Ok(())
    }

    fn notify(inner: &mut PlayerInner) {
        let state = inner.state.clone();
        inner.observers.retain(|observer| match observer.upgrade() {
            Some(callback) => {
                callback(&state);
                true
            }
            None => false,
        });
    }

    /// Align the ticker thread with the `playing` flag.
    fn reconcile(&self, inner: &mut PlayerInner) {
        if inner.state.is_playing() {
            if inner.ticker.is_none() {
                let generation = inner.next_generation;
                inner.next_generation += 1;
                let (signal, cancel) = tick_pair();
                inner.ticker = Some(TickerSlot { generation, cancel });
                let player = self.clone();
                thread::spawn(move || run_ticker(player, signal, generation));
                debug!(generation, "ticker started");
            }
        } else if let Some(slot) = inner.ticker.take() {
            slot.cancel.cancel();
            debug!(generation = slot.generation, "ticker cancelled");
        }
    }

    /// One scheduler tick: pause at the last snapshot, step otherwise.
    /// Stale generations (superseded by a cancel or a newer ticker) do
    /// nothing.
    fn tick(&self, generation: u64) -> Tick {
        let mut inner = self.lock();
        let current = inner.ticker.as_ref().map(|slot| slot.generation);
        if current != Some(generation) || !inner.state.is_playing() {
            return Tick::Stale;
        }
        if select::is_at_end(&inner.state) {
            // auto-stop: the reducer cannot fail on Pause
            if self.apply_locked(&mut inner, Command::Pause).is_err() {
                return Tick::Stale;
            }
            debug!("auto-stop at end of trace");
            Tick::Finished
        } else {
            if self.apply_locked(&mut inner, Command::Step).is_err() {
                return Tick::Stale;
            }
            Tick::Stepped
        }
    }

    /// Current delay for a live ticker generation, or `None` if superseded.
    fn tick_delay(&self, generation: u64) -> Option<Duration> {
        let inner = self.lock();
        let current = inner.ticker.as_ref().map(|slot| slot.generation);
        if current != Some(generation) || !inner.state.is_playing() {
            return None;
        }
        Some(inner.state.speed())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

enum Tick {
    Stepped,
    Finished,
    Stale,
}

/// Ticker thread body: wait one cadence, then step (or auto-pause at the
/// end), until cancelled or superseded.
fn run_ticker(player: Player, signal: TickSignal, generation: u64) {
    loop {
        let Some(delay) = player.tick_delay(generation) else {
            break;
        };
        if signal.wait_timeout(delay) {
            break;
        }
        match player.tick(generation) {
            Tick::Stepped => {}
            Tick::Finished | Tick::Stale => break,
        }
    }
    debug!(generation, "ticker exited");
}

/// Generate a trace for one problem, falling back to the placeholder on a
/// panicking generator or malformed output.
pub fn trace_for(problem: &Problem) -> Trace {
    trace_from_generator(problem.id, || generate(problem))
}

fn trace_from_generator(
    problem_id: &str,
    generator: impl FnOnce() -> Vec<Snapshot>,
) -> Trace {
    match catch_unwind(AssertUnwindSafe(generator)) {
        Ok(snapshots) => match Trace::from_snapshots(snapshots) {
            Ok(trace) => trace,
            Err(err) => {
                warn!(problem_id, %err, "generator output rejected, using placeholder");
                Trace::placeholder(format!("Trace unavailable for {problem_id}"))
            }
        },
        Err(_) => {
            warn!(problem_id, "generator panicked, using placeholder");
            Trace::placeholder(format!("Trace unavailable for {problem_id}"))
        }
    }
}

use std::time::Duration;

/// Monotonic counter identifying one timed flow of a game engine.
///
/// Every scheduled timer embeds the generation current at scheduling time.
/// When an engine abandons its outstanding timed flow (new game, host reset)
/// it bumps its counter, and any timer still in flight arrives with a stale
/// generation and must be ignored.
pub type Generation = u64;

/// A delayed callback, reified as a value instead of a closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer<K> {
    pub generation: Generation,
    pub kind: K,
}

impl<K> Timer<K> {
    pub fn new(generation: Generation, kind: K) -> Self {
        Self { generation, kind }
    }
}

/// Host-side scheduling collaborator. Game cores only ever request
/// "deliver this timer after `delay`"; they never read wall-clock time.
pub trait Scheduler<K> {
    fn after(&mut self, delay: Duration, timer: Timer<K>);
}

/// Deterministic scheduler over a virtual clock.
///
/// Timers fire in fire-time order; ties fire in scheduling order. Used by
/// the CLI simulations and the timing tests; a real host would back the
/// trait with its own event loop instead.
#[derive(Debug)]
pub struct QueueScheduler<K> {
    now: Duration,
    seq: u64,
    pending: Vec<(Duration, u64, Timer<K>)>,
}

impl<K: Copy> QueueScheduler<K> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            pending: Vec::new(),
        }
    }

    /// Current position of the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Advances the clock to the earliest pending timer and returns it.
    /// Returns None when nothing is scheduled.
    pub fn pop_next(&mut self) -> Option<Timer<K>> {
        if self.pending.is_empty() {
            return None;
        }

        let mut best = 0;
        for i in 1..self.pending.len() {
            let (due, seq, _) = self.pending[i];
            let (best_due, best_seq, _) = self.pending[best];
            if due < best_due || (due == best_due && seq < best_seq) {
                best = i;
            }
        }

        let (due, _, timer) = self.pending.remove(best);
        // The clock never moves backwards, even if a timer was scheduled
        // with zero delay after the clock already passed its slot.
        if due > self.now {
            self.now = due;
        }
        Some(timer)
    }
}

impl<K: Copy> Default for QueueScheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy> Scheduler<K> for QueueScheduler<K> {
    fn after(&mut self, delay: Duration, timer: Timer<K>) {
        let due = self.now + delay;
        self.pending.push((due, self.seq, timer));
        self.seq += 1;
    }
}

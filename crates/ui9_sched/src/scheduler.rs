//! Timer scheduler
//!
//! Owns every timer; fires the due ones on each tick.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::fmt;
use std::time::{Duration, Instant};

new_key_type! {
    struct SlotKey;
}

/// Opaque timer handle.
///
/// Ids are positive, handed out in increasing order starting at 1, and never
/// reused for the lifetime of a scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(i64);

impl TimerId {
    /// Returned by [`Scheduler::add_boxed`] when no callback was supplied.
    pub const INVALID: TimerId = TimerId(-1);

    pub fn is_valid(self) -> bool {
        self.0 > 0
    }

    pub fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Timer callback: the loop context plus the scheduler that fired it.
pub type TimerFn<C> = Box<dyn FnMut(&mut C, &mut Scheduler<C>)>;

struct Timer<C> {
    id: TimerId,
    repeat: bool,
    interval: Duration,
    due: Instant,
    /// `None` only while the callback is being invoked.
    callback: Option<TimerFn<C>>,
}

/// Cooperative timer scheduler.
///
/// A timer is active from [`add`](Self::add) until it is cancelled or, for
/// one-shot timers, until it fires. Storage grows on demand; adding never
/// fails for lack of capacity.
pub struct Scheduler<C> {
    timers: SlotMap<SlotKey, Timer<C>>,
    index: FxHashMap<TimerId, SlotKey>,
    next_id: i64,
}

impl<C> Scheduler<C> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            index: FxHashMap::default(),
            next_id: 1,
        }
    }

    /// Add a timer relative to the current monotonic time.
    ///
    /// `interval == 0` makes a one-shot timer; a positive interval repeats.
    pub fn add<F>(&mut self, delay: Duration, interval: Duration, callback: F) -> TimerId
    where
        F: FnMut(&mut C, &mut Scheduler<C>) + 'static,
    {
        self.add_at(Instant::now(), delay, interval, callback)
    }

    /// Add a timer whose first deadline is `now + delay`.
    pub fn add_at<F>(
        &mut self,
        now: Instant,
        delay: Duration,
        interval: Duration,
        callback: F,
    ) -> TimerId
    where
        F: FnMut(&mut C, &mut Scheduler<C>) + 'static,
    {
        self.add_boxed(now, delay, interval, Some(Box::new(callback)))
    }

    /// Add a timer from an optional boxed callback.
    ///
    /// Returns [`TimerId::INVALID`] when `callback` is `None`; that is the
    /// only way adding a timer can fail.
    pub fn add_boxed(
        &mut self,
        now: Instant,
        delay: Duration,
        interval: Duration,
        callback: Option<TimerFn<C>>,
    ) -> TimerId {
        let Some(callback) = callback else {
            return TimerId::INVALID;
        };

        let id = TimerId(self.next_id);
        self.next_id += 1;

        let key = self.timers.insert(Timer {
            id,
            repeat: !interval.is_zero(),
            interval,
            due: now + delay,
            callback: Some(callback),
        });
        self.index.insert(id, key);

        tracing::trace!(%id, ?delay, ?interval, "timer added");
        id
    }

    /// Deactivate a timer. Unknown or already-inactive ids are ignored.
    pub fn cancel(&mut self, id: TimerId) {
        if let Some(key) = self.index.remove(&id) {
            self.timers.remove(key);
            tracing::trace!(%id, "timer cancelled");
        }
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.index.contains_key(&id)
    }

    /// Next deadline of an active timer.
    pub fn deadline(&self, id: TimerId) -> Option<Instant> {
        let key = self.index.get(&id)?;
        self.timers.get(*key).map(|t| t.due)
    }

    /// Number of active timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Time until the earliest active deadline, zero if one is overdue.
    ///
    /// `None` when no timer is active; the caller then falls back to its own
    /// idle ceiling.
    pub fn next_wake(&self, now: Instant) -> Option<Duration> {
        self.timers
            .values()
            .map(|t| t.due.saturating_duration_since(now))
            .min()
    }

    /// Fire every timer whose deadline is at or before `now`.
    ///
    /// Each due timer is snapshotted and rescheduled (or retired, if
    /// one-shot) before its callback runs. A repeating timer's next deadline
    /// is `now + interval`, measured from the tick rather than from the
    /// missed deadline, so a late tick pushes the whole series back. That
    /// drift is intentional: UI pulses only need "at most this often".
    ///
    /// Timers added by a callback are not fired by the tick that created
    /// them. The order in which simultaneously-due timers fire is
    /// unspecified; a cancellation made by one callback affects another due
    /// timer only if that timer has not fired yet in this tick.
    ///
    /// Returns the number of callbacks invoked.
    pub fn tick(&mut self, now: Instant, ctx: &mut C) -> usize {
        // Collected up front: slot keys are versioned, so a slot freed and
        // reused by a callback never matches a key in this list.
        let due: SmallVec<[SlotKey; 8]> = self
            .timers
            .iter()
            .filter(|(_, t)| t.due <= now)
            .map(|(key, _)| key)
            .collect();

        let mut fired = 0;
        for key in due {
            let Some(timer) = self.timers.get_mut(key) else {
                continue;
            };
            let (id, repeat, interval) = (timer.id, timer.repeat, timer.interval);

            let callback = if repeat {
                timer.due = now + interval;
                timer.callback.take()
            } else {
                self.index.remove(&id);
                self.timers.remove(key).and_then(|t| t.callback)
            };

            // A callback already in flight (nested tick) is skipped.
            let Some(mut callback) = callback else {
                continue;
            };

            callback(ctx, self);
            fired += 1;

            if repeat {
                if let Some(timer) = self.timers.get_mut(key) {
                    timer.callback = Some(callback);
                }
            }
        }

        if fired > 0 {
            tracing::trace!(fired, active = self.timers.len(), "scheduler tick");
        }
        fired
    }
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Scheduler<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("active", &self.timers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

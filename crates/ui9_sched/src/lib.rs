//! 9DE Timer Scheduler
//!
//! A lightweight, thread-free timer set for UI loops. The owner polls it once
//! per loop iteration:
//!
//! 1. [`Scheduler::next_wake`] bounds the blocking wait for input.
//! 2. [`Scheduler::tick`] fires every timer whose deadline has passed.
//!
//! Timers are one-shot (`interval == 0`) or repeating. Callbacks receive the
//! loop's context value plus the scheduler itself, so they may add or cancel
//! timers while a tick is in progress.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use ui9_sched::Scheduler;
//!
//! struct Ui { dirty: bool }
//!
//! let mut sched = Scheduler::<Ui>::new();
//! let t0 = Instant::now();
//! sched.add_at(t0, Duration::ZERO, Duration::from_millis(33), |ui, _| ui.dirty = true);
//!
//! let mut ui = Ui { dirty: false };
//! assert_eq!(sched.next_wake(t0), Some(Duration::ZERO));
//! assert_eq!(sched.tick(t0, &mut ui), 1);
//! assert!(ui.dirty);
//! ```

mod scheduler;

pub use scheduler::{Scheduler, TimerFn, TimerId};

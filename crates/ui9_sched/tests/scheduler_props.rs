//! Property tests for the timer scheduler.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use ui9_sched::{Scheduler, TimerId};

/// Fire counts keyed by the order in which timers were added.
#[derive(Default)]
struct Fires {
    count: HashMap<usize, usize>,
}

#[derive(Debug, Clone)]
enum Op {
    Add { delay: u64, interval: u64 },
    Cancel(usize),
    Tick(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u64..200, prop_oneof![Just(0u64), 1u64..100])
            .prop_map(|(delay, interval)| Op::Add { delay, interval }),
        (0usize..16).prop_map(Op::Cancel),
        (0u64..150).prop_map(Op::Tick),
    ]
}

struct Added {
    id: TimerId,
    one_shot: bool,
    due: Instant,
    cancelled_at: Option<usize>,
}

proptest! {
    /// One-shot timers fire at most once and never before their deadline;
    /// cancelled timers never fire again.
    #[test]
    fn one_shots_fire_at_most_once(ops in prop::collection::vec(op(), 1..60)) {
        let mut now = Instant::now();
        let mut sched = Scheduler::<Fires>::new();
        let mut fires = Fires::default();
        let mut added: Vec<Added> = Vec::new();

        for op in ops {
            match op {
                Op::Add { delay, interval } => {
                    let slot = added.len();
                    let id = sched.add_at(
                        now,
                        Duration::from_millis(delay),
                        Duration::from_millis(interval),
                        move |f: &mut Fires, _| *f.count.entry(slot).or_default() += 1,
                    );
                    prop_assert!(id.is_valid());
                    if let Some(last) = added.last() {
                        prop_assert!(id > last.id);
                    }
                    added.push(Added {
                        id,
                        one_shot: interval == 0,
                        due: now + Duration::from_millis(delay),
                        cancelled_at: None,
                    });
                }
                Op::Cancel(i) => {
                    if let Some(entry) = added.get_mut(i) {
                        sched.cancel(entry.id);
                        sched.cancel(entry.id);
                        prop_assert!(!sched.is_active(entry.id));
                        entry
                            .cancelled_at
                            .get_or_insert(fires.count.get(&i).copied().unwrap_or(0));
                    }
                }
                Op::Tick(step) => {
                    now += Duration::from_millis(step);
                    sched.tick(now, &mut fires);
                }
            }

            for (slot, entry) in added.iter().enumerate() {
                let n = fires.count.get(&slot).copied().unwrap_or(0);
                if entry.one_shot {
                    prop_assert!(n <= 1);
                }
                if n > 0 {
                    prop_assert!(entry.due <= now);
                }
                if let Some(at_cancel) = entry.cancelled_at {
                    prop_assert_eq!(n, at_cancel);
                }
            }
        }
    }

    /// `next_wake` is the distance to the earliest active deadline.
    #[test]
    fn next_wake_is_minimum(delays in prop::collection::vec(0u64..1_000, 1..20), at in 0u64..1_500) {
        let t0 = Instant::now();
        let mut sched = Scheduler::<()>::new();
        let ids: Vec<TimerId> = delays
            .iter()
            .map(|d| sched.add_at(t0, Duration::from_millis(*d), Duration::ZERO, |_, _| {}))
            .collect();

        let now = t0 + Duration::from_millis(at);
        let wake = sched.next_wake(now).expect("timers are active");
        for id in ids {
            let deadline = sched.deadline(id).expect("still active");
            prop_assert!(wake <= deadline.saturating_duration_since(now));
        }

        let expected = delays.iter().map(|d| d.saturating_sub(at)).min().unwrap_or(0);
        prop_assert_eq!(wake, Duration::from_millis(expected));
    }

    /// A due repeating timer fires once per tick and its next deadline is
    /// measured from the tick, not from the previous deadline.
    #[test]
    fn repeats_reschedule_from_tick_time(
        delay in 0u64..200,
        interval in 1u64..100,
        gaps in prop::collection::vec(0u64..250, 1..40),
    ) {
        let t0 = Instant::now();
        let mut sched = Scheduler::<u32>::new();
        let id = sched.add_at(
            t0,
            Duration::from_millis(delay),
            Duration::from_millis(interval),
            |n: &mut u32, _| *n += 1,
        );

        let mut now = t0;
        let mut fired = 0u32;
        for gap in gaps {
            now += Duration::from_millis(gap);
            let due = sched.deadline(id).expect("repeating timers stay active");
            let n = sched.tick(now, &mut fired);

            if due <= now {
                prop_assert_eq!(n, 1);
                prop_assert_eq!(sched.deadline(id), Some(now + Duration::from_millis(interval)));
            } else {
                prop_assert_eq!(n, 0);
                prop_assert_eq!(sched.deadline(id), Some(due));
            }
        }
        prop_assert!(sched.is_active(id));
    }
}

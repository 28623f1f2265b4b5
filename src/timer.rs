//! One-shot timer scheduling.
//!
//! Animation state machines never touch the platform clock directly. They ask a
//! [`TimerHost`] to run a callback after a delay and keep the returned handle so
//! the timer can be cancelled when the owner goes away. The browser build backs
//! this with `setTimeout`; tests use [`VirtualTimers`], a manual clock.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

pub type TimerCallback = Box<dyn FnOnce()>;

pub trait TimerHandle {
    /// Cancel the timer. Cancelling a timer that already fired is a no-op.
    fn cancel(self);
}

pub trait TimerHost {
    type Handle: TimerHandle;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Self::Handle;
}

struct PendingTimer {
    id: u64,
    due: Duration,
    callback: TimerCallback,
}

#[derive(Default)]
struct VirtualClock {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

/// Deterministic timer host driven by [`VirtualTimers::advance`].
///
/// Timers due at the same instant fire in scheduling order. A callback that
/// schedules another timer which falls inside the advanced window sees it fire
/// within the same `advance` call.
#[derive(Clone, Default)]
pub struct VirtualTimers {
    clock: Rc<RefCell<VirtualClock>>,
}

pub struct VirtualTimerHandle {
    id: u64,
    clock: Weak<RefCell<VirtualClock>>,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward, firing every timer that comes due on the way.
    /// Returns the number of callbacks that ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let idx = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                idx.map(|i| {
                    let timer = clock.pending.remove(i);
                    clock.now = timer.due;
                    timer.callback
                })
            };
            // clock borrow released before running user code
            match next {
                Some(callback) => {
                    callback();
                    fired += 1;
                }
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
        fired
    }
}

impl TimerHost for VirtualTimers {
    type Handle = VirtualTimerHandle;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Self::Handle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.pending.push(PendingTimer { id, due, callback });
        VirtualTimerHandle {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

impl TimerHandle for VirtualTimerHandle {
    fn cancel(self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().pending.retain(|t| t.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_fires_in_due_order() {
        let timers = VirtualTimers::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (name, ms) in [("b", 200), ("a", 100), ("c", 200)] {
            let log = log.clone();
            timers.schedule(
                Duration::from_millis(ms),
                Box::new(move || log.borrow_mut().push(name)),
            );
        }

        assert_eq!(timers.advance(Duration::from_millis(99)), 0);
        assert_eq!(timers.advance(Duration::from_millis(1)), 1);
        assert_eq!(timers.advance(Duration::from_millis(500)), 2);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(timers.now(), Duration::from_millis(600));
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let timers = VirtualTimers::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let handle = timers.schedule(Duration::from_millis(10), Box::new(move || h.set(1)));
        handle.cancel();

        assert_eq!(timers.pending(), 0);
        timers.advance(Duration::from_secs(1));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_nested_schedule_within_window() {
        let timers = VirtualTimers::new();
        let at = Rc::new(Cell::new(Duration::ZERO));
        let inner_timers = timers.clone();
        let inner_at = at.clone();
        timers.schedule(
            Duration::from_millis(100),
            Box::new(move || {
                let clock = inner_timers.clone();
                inner_timers.schedule(
                    Duration::from_millis(50),
                    Box::new(move || inner_at.set(clock.now())),
                );
            }),
        );

        assert_eq!(timers.advance(Duration::from_millis(200)), 2);
        assert_eq!(at.get(), Duration::from_millis(150));
    }
}

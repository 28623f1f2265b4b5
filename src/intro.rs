//! Splash sequence shown before the main page is mounted.
//!
//! [`IntroSequencer`] is the pure state machine: it knows which phase it is in
//! and how long the current phase lasts. [`IntroRunner`] drives it with a
//! [`TimerHost`], keeps exactly one timer pending at a time, and guarantees
//! nothing fires once it has been torn down.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use log::debug;

use crate::timer::{TimerHandle, TimerHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    pub text: &'static str,
    pub language: &'static str,
}

pub const GREETINGS: [Greeting; 3] = [
    Greeting {
        text: "Hello",
        language: "English",
    },
    Greeting {
        text: "नमस्ते",
        language: "Hindi",
    },
    Greeting {
        text: "Hola",
        language: "Spanish",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroTiming {
    /// How long each greeting stays on screen.
    pub dwell: Duration,
    /// Extra time the last greeting lingers before the fade starts.
    pub hold: Duration,
    /// Length of the splash fade-out.
    pub fade: Duration,
}

impl IntroTiming {
    pub const DEFAULT: Self = Self {
        dwell: Duration::from_millis(1000),
        hold: Duration::from_millis(800),
        fade: Duration::from_millis(500),
    };
}

impl Default for IntroTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Showing(usize),
    FadingOut,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerState {
    pub current_index: usize,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct IntroSequencer {
    len: usize,
    timing: IntroTiming,
    phase: Phase,
    // last greeting has finished its dwell and is waiting out `timing.hold`
    holding: bool,
}

impl IntroSequencer {
    pub fn new(len: usize, timing: IntroTiming) -> Self {
        let phase = if len == 0 {
            Phase::FadingOut
        } else {
            Phase::Showing(0)
        };
        Self {
            len,
            timing,
            phase,
            holding: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> SequencerState {
        let current_index = match self.phase {
            Phase::Showing(i) => i,
            _ => self.len.saturating_sub(1),
        };
        SequencerState {
            current_index,
            visible: matches!(self.phase, Phase::Showing(_)),
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Time until the next transition, or `None` once finished.
    pub fn pending_delay(&self) -> Option<Duration> {
        match self.phase {
            Phase::Showing(_) if self.holding => Some(self.timing.hold),
            Phase::Showing(_) => Some(self.timing.dwell),
            Phase::FadingOut => Some(self.timing.fade),
            Phase::Done => None,
        }
    }

    /// Apply the transition for the delay returned by [`Self::pending_delay`]
    /// having elapsed.
    pub fn advance(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Showing(i) if i + 1 < self.len => Phase::Showing(i + 1),
            Phase::Showing(i) if !self.holding => {
                self.holding = true;
                Phase::Showing(i)
            }
            Phase::Showing(_) => Phase::FadingOut,
            Phase::FadingOut | Phase::Done => Phase::Done,
        };
        self.phase
    }
}

struct RunnerInner<H: TimerHost> {
    sequencer: IntroSequencer,
    host: H,
    pending: Option<H::Handle>,
    on_phase: Rc<dyn Fn(Phase)>,
    on_complete: Option<Box<dyn FnOnce()>>,
    started: bool,
    torn_down: bool,
}

/// Owns an [`IntroSequencer`] and the single timer currently driving it.
///
/// `on_phase` runs on every visible phase change; `on_complete` runs exactly
/// once when the sequence reaches [`Phase::Done`]. Neither runs after
/// [`IntroRunner::teardown`] or after the runner is dropped.
pub struct IntroRunner<H: TimerHost + 'static> {
    inner: Rc<RefCell<RunnerInner<H>>>,
}

impl<H: TimerHost + 'static> IntroRunner<H> {
    pub fn new(
        host: H,
        sequencer: IntroSequencer,
        on_phase: impl Fn(Phase) + 'static,
        on_complete: impl FnOnce() + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(RunnerInner {
                sequencer,
                host,
                pending: None,
                on_phase: Rc::new(on_phase),
                on_complete: Some(Box::new(on_complete)),
                started: false,
                torn_down: false,
            })),
        }
    }

    pub fn phase(&self) -> Phase {
        self.inner.borrow().sequencer.phase()
    }

    pub fn state(&self) -> SequencerState {
        self.inner.borrow().sequencer.state()
    }

    /// Arm the first timer. Calling it again, or after teardown, does nothing.
    pub fn start(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.started || inner.torn_down {
            return;
        }
        inner.started = true;
        Self::arm(&self.inner, &mut inner);
    }

    /// Cancel the pending timer and drop the completion callback.
    pub fn teardown(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.torn_down {
            return;
        }
        inner.torn_down = true;
        inner.on_complete = None;
        if let Some(handle) = inner.pending.take() {
            handle.cancel();
        }
        debug!("intro torn down at {:?}", inner.sequencer.phase());
    }

    fn arm(this: &Rc<RefCell<RunnerInner<H>>>, inner: &mut RunnerInner<H>) {
        let Some(delay) = inner.sequencer.pending_delay() else {
            return;
        };
        let weak = Rc::downgrade(this);
        let handle = inner
            .host
            .schedule(delay, Box::new(move || Self::fire(&weak)));
        inner.pending = Some(handle);
    }

    fn fire(weak: &Weak<RefCell<RunnerInner<H>>>) {
        let Some(this) = weak.upgrade() else {
            return;
        };
        let (changed, on_phase, completion) = {
            let mut inner = this.borrow_mut();
            if inner.torn_down {
                return;
            }
            inner.pending = None;
            let before = inner.sequencer.phase();
            let after = inner.sequencer.advance();
            let completion = if after == Phase::Done {
                inner.on_complete.take()
            } else {
                Self::arm(&this, &mut inner);
                None
            };
            let changed = (before != after).then_some(after);
            (changed, inner.on_phase.clone(), completion)
        };

        // user callbacks run with the runner unborrowed so they may tear it down
        if let Some(phase) = changed {
            debug!("intro phase -> {phase:?}");
            on_phase(phase);
        }
        if let Some(complete) = completion {
            if !this.borrow().torn_down {
                complete();
            }
        }
    }
}

impl<H: TimerHost + 'static> Drop for IntroRunner<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualTimers;
    use std::cell::Cell;

    type Events = Rc<RefCell<Vec<(Duration, Phase)>>>;

    fn runner_with(
        timers: &VirtualTimers,
        len: usize,
    ) -> (IntroRunner<VirtualTimers>, Events, Rc<Cell<usize>>) {
        let events: Events = Rc::new(RefCell::new(Vec::new()));
        let completions = Rc::new(Cell::new(0));
        let clock = timers.clone();
        let ev = events.clone();
        let done = completions.clone();
        let runner = IntroRunner::new(
            timers.clone(),
            IntroSequencer::new(len, IntroTiming::default()),
            move |phase| ev.borrow_mut().push((clock.now(), phase)),
            move || done.set(done.get() + 1),
        );
        (runner, events, completions)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_visits_every_greeting_in_order() {
        for len in 1..=5 {
            let timers = VirtualTimers::new();
            let (runner, events, completions) = runner_with(&timers, len);
            assert_eq!(runner.phase(), Phase::Showing(0));
            runner.start();
            timers.advance(Duration::from_secs(60));

            let phases: Vec<Phase> = events.borrow().iter().map(|(_, p)| *p).collect();
            let mut expected: Vec<Phase> = (1..len).map(Phase::Showing).collect();
            expected.push(Phase::FadingOut);
            expected.push(Phase::Done);
            assert_eq!(phases, expected, "len {len}");
            assert_eq!(completions.get(), 1);
            assert_eq!(timers.pending(), 0);
        }
    }

    #[test]
    fn test_default_timeline() {
        let timers = VirtualTimers::new();
        let (runner, events, completions) = runner_with(&timers, GREETINGS.len());
        runner.start();

        timers.advance(ms(1000));
        assert_eq!(runner.phase(), Phase::Showing(1));
        timers.advance(ms(1000));
        assert_eq!(runner.phase(), Phase::Showing(2));
        // last greeting dwells, then holds
        timers.advance(ms(1799));
        assert_eq!(runner.phase(), Phase::Showing(2));
        timers.advance(ms(1));
        assert_eq!(runner.phase(), Phase::FadingOut);
        assert!(!runner.state().visible);
        assert_eq!(completions.get(), 0);
        timers.advance(ms(500));
        assert_eq!(runner.phase(), Phase::Done);
        assert_eq!(completions.get(), 1);

        assert_eq!(
            *events.borrow(),
            vec![
                (ms(1000), Phase::Showing(1)),
                (ms(2000), Phase::Showing(2)),
                (ms(3800), Phase::FadingOut),
                (ms(4300), Phase::Done),
            ]
        );
    }

    #[test]
    fn test_teardown_mid_sequence_silences_everything() {
        let timers = VirtualTimers::new();
        let (runner, events, completions) = runner_with(&timers, 3);
        runner.start();
        timers.advance(ms(1000));
        assert_eq!(runner.state().current_index, 1);

        runner.teardown();
        assert_eq!(timers.pending(), 0);
        assert_eq!(timers.advance(Duration::from_secs(10)), 0);
        assert_eq!(events.borrow().len(), 1);
        assert_eq!(completions.get(), 0);
    }

    #[test]
    fn test_drop_cancels_pending_timer() {
        let timers = VirtualTimers::new();
        let (runner, events, completions) = runner_with(&timers, 3);
        runner.start();
        assert_eq!(timers.pending(), 1);
        drop(runner);

        assert_eq!(timers.pending(), 0);
        timers.advance(Duration::from_secs(10));
        assert!(events.borrow().is_empty());
        assert_eq!(completions.get(), 0);
    }

    /// Host whose handles cannot cancel, so every timer fires regardless.
    #[derive(Clone, Default)]
    struct StubbornTimers(VirtualTimers);

    struct StubbornHandle;

    impl TimerHandle for StubbornHandle {
        fn cancel(self) {}
    }

    impl TimerHost for StubbornTimers {
        type Handle = StubbornHandle;

        fn schedule(&self, delay: Duration, callback: crate::timer::TimerCallback) -> Self::Handle {
            self.0.schedule(delay, callback);
            StubbornHandle
        }
    }

    #[test]
    fn test_late_timer_after_teardown_is_noop() {
        let timers = StubbornTimers::default();
        let completions = Rc::new(Cell::new(0));
        let phases = Rc::new(Cell::new(0));
        let done = completions.clone();
        let seen = phases.clone();
        let runner = IntroRunner::new(
            timers.clone(),
            IntroSequencer::new(1, IntroTiming::default()),
            move |_| seen.set(seen.get() + 1),
            move || done.set(done.get() + 1),
        );
        runner.start();
        runner.teardown();
        assert_eq!(timers.0.pending(), 1);

        timers.0.advance(Duration::from_secs(10));
        assert_eq!(phases.get(), 0);
        assert_eq!(completions.get(), 0);

        // and once the runner itself is gone the weak guard takes over
        let runner = IntroRunner::new(
            timers.clone(),
            IntroSequencer::new(1, IntroTiming::default()),
            |_| {},
            || panic!("completion after drop"),
        );
        runner.start();
        drop(runner);
        timers.0.advance(Duration::from_secs(10));
    }

    #[test]
    fn test_start_is_idempotent() {
        let timers = VirtualTimers::new();
        let (runner, _events, completions) = runner_with(&timers, 2);
        runner.start();
        runner.start();
        assert_eq!(timers.pending(), 1);
        timers.advance(Duration::from_secs(60));
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn test_completion_may_drop_runner() {
        let timers = VirtualTimers::new();
        let slot: Rc<RefCell<Option<IntroRunner<VirtualTimers>>>> = Rc::new(RefCell::new(None));
        let unmount = slot.clone();
        let runner = IntroRunner::new(
            timers.clone(),
            IntroSequencer::new(1, IntroTiming::default()),
            |_| {},
            move || {
                unmount.borrow_mut().take();
            },
        );
        runner.start();
        *slot.borrow_mut() = Some(runner);

        timers.advance(Duration::from_secs(60));
        assert!(slot.borrow().is_none());
    }

    #[test]
    fn test_empty_sequence_goes_straight_to_fade() {
        let mut seq = IntroSequencer::new(0, IntroTiming::default());
        assert_eq!(seq.phase(), Phase::FadingOut);
        assert_eq!(seq.pending_delay(), Some(ms(500)));
        assert_eq!(seq.advance(), Phase::Done);
        assert_eq!(seq.pending_delay(), None);
        assert!(seq.is_done());
    }

    #[test]
    fn test_state_tracks_index_and_visibility() {
        let mut seq = IntroSequencer::new(2, IntroTiming::default());
        assert_eq!(
            seq.state(),
            SequencerState {
                current_index: 0,
                visible: true
            }
        );
        seq.advance();
        seq.advance();
        assert_eq!(seq.phase(), Phase::Showing(1));
        assert_eq!(seq.pending_delay(), Some(ms(800)));
        seq.advance();
        assert_eq!(
            seq.state(),
            SequencerState {
                current_index: 1,
                visible: false
            }
        );
    }
}

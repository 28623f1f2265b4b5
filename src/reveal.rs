//! One-shot "entered the viewport" latches and staggered entrance delays.

use std::time::Duration;

/// Axis-aligned box in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Margin applied to the viewport before the intersection test, with the same
/// sign convention as an intersection observer's `rootMargin`: negative values
/// shrink the viewport so an element has to travel further in to count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMargin(pub f64);

impl RevealMargin {
    pub const SECTION: Self = Self(-100.0);
    pub const CARD: Self = Self(-50.0);

    pub fn root_margin(&self) -> String {
        format!("{}px", self.0)
    }
}

impl Default for RevealMargin {
    fn default() -> Self {
        Self::SECTION
    }
}

/// Whether `element` overlaps a `viewport_width` x `viewport_height` window
/// grown (or shrunk) by `margin` on every side.
pub fn in_viewport(
    element: Rect,
    viewport_width: f64,
    viewport_height: f64,
    margin: RevealMargin,
) -> bool {
    let m = margin.0;
    let root = Rect::new(
        -m,
        -m,
        viewport_width + 2.0 * m,
        viewport_height + 2.0 * m,
    );
    if root.width <= 0.0 || root.height <= 0.0 {
        return false;
    }
    element.left < root.right()
        && element.right() > root.left
        && element.top < root.bottom()
        && element.bottom() > root.top
}

/// Monotonic boolean: false until the first intersecting observation, true
/// forever after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    entered: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Feed one observation. Returns `true` only for the observation that
    /// flipped the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.entered || !intersecting {
            return false;
        }
        self.entered = true;
        true
    }
}

/// `delay(index) = base + index * step`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stagger {
    pub base: Duration,
    pub step: Duration,
}

impl Stagger {
    pub const fn new(base_ms: u64, step_ms: u64) -> Self {
        Self {
            base: Duration::from_millis(base_ms),
            step: Duration::from_millis(step_ms),
        }
    }

    pub fn delay(&self, index: usize) -> Duration {
        self.base + self.step * index as u32
    }

    /// Nested stagger: the delay of item `index` used as the base for its
    /// children.
    pub fn then(&self, index: usize, step_ms: u64) -> Stagger {
        Stagger {
            base: self.delay(index),
            step: Duration::from_millis(step_ms),
        }
    }
}

/// Inline style delaying a CSS transition.
pub fn transition_delay_style(delay: Duration) -> String {
    format!("transition-delay: {}ms", delay.as_millis())
}

/// Delay for an element's entrance transition. Once `settled` the delay is
/// dropped so later transitions on the same element (hover effects) start
/// immediately.
pub fn entrance_delay_style(delay: Duration, settled: bool) -> String {
    if settled || delay.is_zero() {
        String::new()
    } else {
        transition_delay_style(delay)
    }
}

/// Inline style delaying a CSS keyframe animation.
pub fn animation_delay_style(delay: Duration) -> String {
    format!("animation-delay: {}ms", delay.as_millis())
}

/// Starting pose of an element before it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Entrance {
    #[default]
    Up,
    Down,
    Left,
    Right,
    Scale,
    Fade,
}

impl Entrance {
    /// Tailwind classes for the hidden pose.
    pub fn hidden_class(&self) -> &'static str {
        match self {
            Entrance::Up => "opacity-0 translate-y-12",
            Entrance::Down => "opacity-0 -translate-y-12",
            Entrance::Left => "opacity-0 -translate-x-12",
            Entrance::Right => "opacity-0 translate-x-12",
            Entrance::Scale => "opacity-0 scale-75",
            Entrance::Fade => "opacity-0",
        }
    }

    pub fn shown_class(&self) -> &'static str {
        "opacity-100 translate-x-0 translate-y-0 scale-100"
    }

    pub fn class(&self, revealed: bool) -> &'static str {
        if revealed {
            self.shown_class()
        } else {
            self.hidden_class()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_on_first_check_when_already_visible() {
        // section above the fold at mount
        let section = Rect::new(0.0, 120.0, 1280.0, 600.0);
        let mut latch = RevealLatch::new();
        assert!(latch.observe(in_viewport(section, 1280.0, 800.0, RevealMargin::SECTION)));
        assert!(latch.has_entered());
    }

    #[test]
    fn test_latch_never_resets() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.has_entered());
        assert!(latch.observe(true));
        // scrolled out, then back in
        assert!(!latch.observe(false));
        assert!(latch.has_entered());
        assert!(!latch.observe(true));
        assert!(latch.has_entered());
    }

    #[test]
    fn test_negative_margin_shrinks_viewport() {
        // top edge 50px above the bottom of an 800px viewport
        let peeking = Rect::new(0.0, 750.0, 400.0, 300.0);
        assert!(in_viewport(peeking, 1280.0, 800.0, RevealMargin(0.0)));
        assert!(!in_viewport(peeking, 1280.0, 800.0, RevealMargin::SECTION));
        assert!(!in_viewport(peeking, 1280.0, 800.0, RevealMargin::CARD));

        let further_in = Rect::new(0.0, 640.0, 400.0, 300.0);
        assert!(in_viewport(further_in, 1280.0, 800.0, RevealMargin::SECTION));
    }

    #[test]
    fn test_offscreen_elements() {
        let below = Rect::new(0.0, 2000.0, 400.0, 300.0);
        let above = Rect::new(0.0, -900.0, 400.0, 300.0);
        assert!(!in_viewport(below, 1280.0, 800.0, RevealMargin(0.0)));
        assert!(!in_viewport(above, 1280.0, 800.0, RevealMargin(0.0)));
        // margin larger than the viewport leaves nothing to intersect
        let center = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!in_viewport(center, 150.0, 150.0, RevealMargin::SECTION));
    }

    #[test]
    fn test_stagger_delay() {
        let cards = Stagger::new(0, 200);
        assert_eq!(cards.delay(0), Duration::ZERO);
        assert_eq!(cards.delay(3), Duration::from_millis(600));

        let rows = cards.then(2, 100);
        assert_eq!(rows.delay(0), Duration::from_millis(400));
        assert_eq!(rows.delay(2), Duration::from_millis(600));

        let contact = Stagger::new(400, 100);
        let delays: Vec<_> = (0..3).map(|i| contact.delay(i).as_millis()).collect();
        assert_eq!(delays, vec![400, 500, 600]);
    }

    #[test]
    fn test_card_enters_before_its_points() {
        let cards = Stagger::new(0, 200);
        for index in 0..4 {
            let points = cards.then(index, 100);
            assert_eq!(cards.delay(index), points.delay(0));
            assert!(cards.delay(index) < points.delay(1));
        }
        // third card at 400ms, its second point at 500ms
        assert_eq!(cards.delay(2), Duration::from_millis(400));
        assert_eq!(cards.then(2, 100).delay(1), Duration::from_millis(500));
    }

    #[test]
    fn test_delay_styles() {
        let s = Stagger::new(400, 100);
        assert_eq!(transition_delay_style(s.delay(2)), "transition-delay: 600ms");
        assert_eq!(animation_delay_style(Duration::ZERO), "animation-delay: 0ms");
    }

    #[test]
    fn test_entrance_delay_cleared_once_settled() {
        let delay = Stagger::new(800, 100).delay(5);
        assert_eq!(entrance_delay_style(delay, false), "transition-delay: 1300ms");
        assert_eq!(entrance_delay_style(delay, true), "");
        assert_eq!(entrance_delay_style(Duration::ZERO, false), "");
    }

    #[test]
    fn test_root_margin_string() {
        assert_eq!(RevealMargin::SECTION.root_margin(), "-100px");
        assert_eq!(RevealMargin::CARD.root_margin(), "-50px");
    }

    #[test]
    fn test_entrance_classes() {
        assert_eq!(Entrance::Left.class(false), "opacity-0 -translate-x-12");
        assert!(Entrance::Left.class(true).contains("opacity-100"));
        assert_eq!(Entrance::default(), Entrance::Up);
    }
}

//! Pointer-driven 3D tilt.
//!
//! Pointer position relative to an element's centre is mapped linearly to a
//! pair of rotations, and each rotation chases its target through a damped
//! spring so the card eases in and out of the tilt instead of snapping.

use std::time::Duration;

use crate::reveal::Rect;

pub const MAX_TILT_DEG: f64 = 15.0;

/// Maximum frame step fed to the integrator (seconds).
const MAX_FRAME_DT: f64 = 0.05;
/// Integration sub-step (seconds).
const SUBSTEP_DT: f64 = 1.0 / 240.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    pub const NEUTRAL: Self = Self { x: 0.0, y: 0.0 };

    pub fn from_pointer(pointer_x: f64, pointer_y: f64, bounds: Rect, scale_factor: f64) -> Self {
        let (cx, cy) = bounds.center();
        Self {
            x: (pointer_x - cx) / scale_factor,
            y: (pointer_y - cy) / scale_factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Rotation about the horizontal axis, driven by vertical offset.
    pub rotate_x: f64,
    /// Rotation about the vertical axis, driven by horizontal offset.
    pub rotate_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn css_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.3}deg) rotateY({:.3}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Linear map of `value` from `input` to `output`, saturating at the ends.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + t * (out_hi - out_lo)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxProfile {
    /// Pointer displacement (after scaling) that yields full tilt.
    pub domain: f64,
    pub scale_factor: f64,
    pub max_deg: f64,
}

impl ParallaxProfile {
    /// Large hero cards: full tilt 300px from centre.
    pub const WIDE: Self = Self {
        domain: 300.0,
        scale_factor: 1.0,
        max_deg: MAX_TILT_DEG,
    };
    /// Smaller cards: full tilt 100px from centre.
    pub const COMPACT: Self = Self {
        domain: 100.0,
        scale_factor: 1.0,
        max_deg: MAX_TILT_DEG,
    };
    /// The profile card in the personal section.
    pub const PROFILE_CARD: Self = Self::COMPACT;

    pub fn offset(&self, pointer_x: f64, pointer_y: f64, bounds: Rect) -> PointerOffset {
        PointerOffset::from_pointer(pointer_x, pointer_y, bounds, self.scale_factor)
    }

    pub fn tilt(&self, offset: PointerOffset) -> Tilt {
        let d = self.domain;
        let m = self.max_deg;
        Tilt {
            // pointer below centre tips the top edge away
            rotate_x: interpolate(offset.y, (-d, d), (m, -m)),
            rotate_y: interpolate(offset.x, (-d, d), (-m, m)),
        }
    }
}

/// Background layers drift at half the page scroll speed.
pub const PARTICLE_DRIFT_RATE: f64 = 0.5;
pub const PARTICLE_COUNT: usize = 6;

/// Vertical offset (px) of a layer moving at `rate` times the page scroll.
/// Overscroll above the top of the document is ignored.
pub fn scroll_drift(scroll_y: f64, rate: f64) -> f64 {
    scroll_y.max(0.0) * rate
}

/// One dot in the floating background layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingParticle {
    pub left_pct: f64,
    pub top_pct: f64,
    /// Length of one bob cycle.
    pub period: Duration,
    pub delay: Duration,
}

impl FloatingParticle {
    /// Dots march diagonally across the layer, each a little slower than the last.
    pub fn nth(index: usize) -> Self {
        Self {
            left_pct: 20.0 + 15.0 * index as f64,
            top_pct: 30.0 + 10.0 * index as f64,
            period: Duration::from_secs(3 + index as u64),
            delay: Duration::from_millis(500 * index as u64),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation-duration: {}ms; animation-delay: {}ms",
            self.left_pct,
            self.top_pct,
            self.period.as_millis(),
            self.delay.as_millis()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Snap to target once both displacement and speed fall below these.
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 20.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(value: f64, config: SpringConfig) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds. Returns `true` while still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_at_rest() {
            return false;
        }
        let mut remaining = dt.clamp(0.0, MAX_FRAME_DT);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_DT);
            let spring_force = -self.config.stiffness * (self.value - self.target);
            let damping_force = -self.config.damping * self.velocity;
            self.velocity += (spring_force + damping_force) / self.config.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

/// Tilt state for one hovered element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltState {
    profile: ParallaxProfile,
    offset: PointerOffset,
    rotate_x: Spring,
    rotate_y: Spring,
}

impl TiltState {
    pub fn new(profile: ParallaxProfile) -> Self {
        Self::with_spring(profile, SpringConfig::default())
    }

    pub fn with_spring(profile: ParallaxProfile, spring: SpringConfig) -> Self {
        Self {
            profile,
            offset: PointerOffset::NEUTRAL,
            rotate_x: Spring::new(0.0, spring),
            rotate_y: Spring::new(0.0, spring),
        }
    }

    pub fn offset(&self) -> PointerOffset {
        self.offset
    }

    /// Rotation the springs are heading to.
    pub fn target(&self) -> Tilt {
        self.profile.tilt(self.offset)
    }

    /// Smoothed rotation to render this frame.
    pub fn current(&self) -> Tilt {
        Tilt {
            rotate_x: self.rotate_x.value(),
            rotate_y: self.rotate_y.value(),
        }
    }

    pub fn pointer_move(&mut self, pointer_x: f64, pointer_y: f64, bounds: Rect) {
        self.set_offset(self.profile.offset(pointer_x, pointer_y, bounds));
    }

    pub fn pointer_leave(&mut self) {
        self.set_offset(PointerOffset::NEUTRAL);
    }

    fn set_offset(&mut self, offset: PointerOffset) {
        self.offset = offset;
        let target = self.profile.tilt(offset);
        self.rotate_x.set_target(target.rotate_x);
        self.rotate_y.set_target(target.rotate_y);
    }

    pub fn is_settled(&self) -> bool {
        self.rotate_x.is_at_rest() && self.rotate_y.is_at_rest()
    }

    /// Advance both springs by `dt` seconds. Returns `true` while either moves.
    pub fn step(&mut self, dt: f64) -> bool {
        let x = self.rotate_x.step(dt);
        let y = self.rotate_y.step(dt);
        x || y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn card() -> Rect {
        Rect::new(100.0, 200.0, 600.0, 400.0)
    }

    #[test]
    fn test_center_is_neutral() {
        for profile in [ParallaxProfile::WIDE, ParallaxProfile::COMPACT] {
            let (cx, cy) = card().center();
            let offset = profile.offset(cx, cy, card());
            assert_eq!(offset, PointerOffset::NEUTRAL);
            assert_eq!(profile.tilt(offset), Tilt::NEUTRAL);
        }
    }

    #[test]
    fn test_domain_boundary_is_extreme() {
        let (cx, cy) = card().center();
        let wide = ParallaxProfile::WIDE;
        let t = wide.tilt(wide.offset(cx + 300.0, cy + 300.0, card()));
        assert_eq!(t.rotate_x, -15.0);
        assert_eq!(t.rotate_y, 15.0);
        let t = wide.tilt(wide.offset(cx - 300.0, cy - 300.0, card()));
        assert_eq!(t.rotate_x, 15.0);
        assert_eq!(t.rotate_y, -15.0);

        let compact = ParallaxProfile::COMPACT;
        let t = compact.tilt(PointerOffset { x: 100.0, y: 100.0 });
        assert_eq!(t.rotate_x, -15.0);
        assert_eq!(t.rotate_y, 15.0);
        // halfway is half the tilt
        let t = compact.tilt(PointerOffset { x: -50.0, y: 0.0 });
        assert_eq!(t.rotate_y, -7.5);
    }

    #[test]
    fn test_mapping_saturates_past_domain() {
        let t = ParallaxProfile::COMPACT.tilt(PointerOffset { x: 900.0, y: -900.0 });
        assert_eq!(t.rotate_y, 15.0);
        assert_eq!(t.rotate_x, 15.0);
    }

    #[test]
    fn test_scale_factor_divides_offset() {
        let profile = ParallaxProfile {
            scale_factor: 4.0,
            ..ParallaxProfile::COMPACT
        };
        let (cx, cy) = card().center();
        let offset = profile.offset(cx + 200.0, cy - 40.0, card());
        assert_eq!(offset, PointerOffset { x: 50.0, y: -10.0 });
    }

    #[test]
    fn test_spring_reaches_target() {
        let mut tilt = TiltState::new(ParallaxProfile::WIDE);
        let (cx, cy) = card().center();
        tilt.pointer_move(cx + 300.0, cy, card());
        assert_eq!(tilt.target().rotate_y, 15.0);
        assert_eq!(tilt.current(), Tilt::NEUTRAL);

        let mut frames = 0;
        while tilt.step(FRAME) {
            frames += 1;
            assert!(frames < 600, "spring never settled");
        }
        assert_eq!(tilt.current().rotate_y, 15.0);
        assert!(tilt.is_settled());
    }

    #[test]
    fn test_pointer_leave_eases_back_to_neutral() {
        let mut tilt = TiltState::new(ParallaxProfile::COMPACT);
        let (cx, cy) = card().center();
        tilt.pointer_move(cx - 100.0, cy - 100.0, card());
        while tilt.step(FRAME) {}
        assert_eq!(
            tilt.current(),
            Tilt {
                rotate_x: 15.0,
                rotate_y: -15.0
            }
        );

        tilt.pointer_leave();
        assert_eq!(tilt.offset(), PointerOffset::NEUTRAL);
        assert!(tilt.step(FRAME));
        // one frame later it has moved, but only a little
        let first = tilt.current();
        assert!(first.rotate_x < 15.0 && first.rotate_x > 10.0);
        assert!(first.rotate_y > -15.0 && first.rotate_y < -10.0);

        let mut frames = 0;
        while tilt.step(FRAME) {
            frames += 1;
            assert!(frames < 600, "spring never settled");
        }
        assert_eq!(tilt.current(), Tilt::NEUTRAL);
    }

    #[test]
    fn test_large_frame_gap_stays_stable() {
        let mut spring = Spring::new(0.0, SpringConfig::default());
        spring.set_target(15.0);
        // a backgrounded tab can hand us multi-second deltas
        for _ in 0..200 {
            spring.step(5.0);
            assert!(spring.value().abs() < 30.0);
        }
        assert_eq!(spring.value(), 15.0);
    }

    #[test]
    fn test_css_transform() {
        let t = Tilt {
            rotate_x: 1.5,
            rotate_y: -2.0,
        };
        assert_eq!(
            t.css_transform(),
            "perspective(1000px) rotateX(1.500deg) rotateY(-2.000deg)"
        );
    }

    #[test]
    fn test_profile_card_sensitivity() {
        let profile = ParallaxProfile::PROFILE_CARD;
        assert_eq!(profile, ParallaxProfile::COMPACT);
        let (cx, cy) = card().center();

        // full tilt at the card's 100px domain edge, half at 50px
        let t = profile.tilt(profile.offset(cx + 100.0, cy, card()));
        assert_eq!(t.rotate_y, 15.0);
        let t = profile.tilt(profile.offset(cx + 50.0, cy + 50.0, card()));
        assert_eq!(t.rotate_y, 7.5);
        assert_eq!(t.rotate_x, -7.5);

        // dividing by 100 as well would leave the tilt imperceptible
        let damped = ParallaxProfile {
            scale_factor: 100.0,
            ..profile
        };
        let t = damped.tilt(damped.offset(cx + 100.0, cy, card()));
        assert!((t.rotate_y - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_scroll_drift() {
        assert_eq!(scroll_drift(0.0, PARTICLE_DRIFT_RATE), 0.0);
        assert_eq!(scroll_drift(800.0, PARTICLE_DRIFT_RATE), 400.0);
        // rubber-band overscroll on touch devices
        assert_eq!(scroll_drift(-40.0, PARTICLE_DRIFT_RATE), 0.0);
    }

    #[test]
    fn test_floating_particles() {
        let particles: Vec<_> = (0..PARTICLE_COUNT).map(FloatingParticle::nth).collect();
        assert_eq!(particles[0].left_pct, 20.0);
        assert_eq!(particles[5].left_pct, 95.0);
        assert_eq!(particles[5].top_pct, 80.0);
        assert!(particles.iter().all(|p| p.left_pct <= 100.0 && p.top_pct <= 100.0));
        assert_eq!(
            particles[2].style(),
            "left: 50%; top: 50%; animation-duration: 5000ms; animation-delay: 1000ms"
        );
    }
}

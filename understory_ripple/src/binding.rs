// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host binding: the per-element ripple state machine.
//!
//! ## States
//!
//! - Idle: no inline style on the artifact, fuse disarmed.
//! - Armed: the artifact is animating and a fuse tick is outstanding.
//!
//! ## Transitions
//!
//! - [`RippleBinding::on_touch_start`] always triggers, from the first touch point.
//! - [`RippleBinding::on_mouse_down`] triggers unless it echoes a touch
//!   (see [`PointerClassifier`]).
//! - A trigger while Armed clears the style before applying the new one, so the
//!   animation restarts instead of layering.
//! - [`RippleBinding::on_fuse_tick`] counts down; at zero the inline style is cleared.

use alloc::string::{String, ToString};

use kurbo::Point;
use tracing::{debug, trace};
use understory_style::{StyleRegistry, StyleSink, VendorPrefix};

use crate::error::RippleError;
use crate::fuse::{Fuse, FuseStep, FuseTick};
use crate::geometry::ArtifactGeometry;
use crate::host::{FuseScheduler, RippleHost};
use crate::options::RippleOptions;
use crate::pointer::PointerClassifier;
use crate::style::ArtifactStyle;
use crate::styles::{ARTIFACT_CLASS, register_styles};

/// Duration of the expand-and-fade animation, in milliseconds.
pub const ANIMATION_LENGTH_MS: u32 = 600;

/// Interval between fuse ticks, in milliseconds.
pub const FUSE_TICK_MS: u32 = 10;

/// A ripple effect attached to one host element.
///
/// Owns the host handle and the single artifact child.
/// Drive it with input events and fuse ticks from the host's event loop.
pub struct RippleBinding<H: RippleHost> {
    host: H,
    artifact: H::Artifact,
    color: String,
    prefix: VendorPrefix,
    pointer: PointerClassifier,
    fuse: Fuse,
}

impl<H: RippleHost> core::fmt::Debug for RippleBinding<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RippleBinding")
            .field("color", &self.color)
            .field("prefix", &self.prefix)
            .field("pointer", &self.pointer)
            .field("fuse", &self.fuse)
            .finish_non_exhaustive()
    }
}

impl<H: RippleHost> RippleBinding<H> {
    /// Attach a ripple to `host`.
    ///
    /// Validates `options`, makes sure the artifact styles are in `styles`,
    /// and appends a fresh artifact child to the host.
    pub fn attach<S: StyleSink>(
        mut host: H,
        options: RippleOptions,
        styles: &mut StyleRegistry<S>,
    ) -> Result<Self, RippleError> {
        options.validate()?;
        register_styles(styles);
        let artifact = host.create_artifact(ARTIFACT_CLASS);
        host.append_artifact(&artifact);
        debug!(color = options.color.as_str(), "ripple attached");
        Ok(Self {
            host,
            artifact,
            color: options.color,
            prefix: styles.prefix().clone(),
            pointer: PointerClassifier::Idle,
            fuse: Fuse::new(),
        })
    }

    /// The host element.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The configured background color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Touch/mouse classifier state.
    pub fn pointer(&self) -> PointerClassifier {
        self.pointer
    }

    /// Milliseconds until the artifact style is cleared; `0` when idle.
    pub fn remaining_ms(&self) -> u32 {
        self.fuse.remaining_ms()
    }

    /// True while an animation is running and its fuse is live.
    pub fn is_armed(&self) -> bool {
        self.fuse.is_armed()
    }

    /// Handle a touch-start whose active touch points are `touches` (client coordinates).
    ///
    /// The classifier records the touch even if `touches` is empty; in that
    /// case no ripple is triggered and [`RippleError::NoTouchPoints`] is returned.
    pub fn on_touch_start(
        &mut self,
        scheduler: &mut impl FuseScheduler,
        touches: &[Point],
    ) -> Result<ArtifactGeometry, RippleError> {
        self.pointer.touch_start();
        let origin = touches.first().copied().ok_or(RippleError::NoTouchPoints)?;
        Ok(self.trigger(scheduler, origin))
    }

    /// Handle a mouse-down at `client`.
    ///
    /// Returns `None` if the press was the synthetic echo of a touch.
    pub fn on_mouse_down(
        &mut self,
        scheduler: &mut impl FuseScheduler,
        client: Point,
    ) -> Option<ArtifactGeometry> {
        if self.pointer.mouse_down() {
            Some(self.trigger(scheduler, client))
        } else {
            debug!(x = client.x, y = client.y, "mouse-down after touch suppressed");
            None
        }
    }

    /// Deliver a fuse tick previously handed to `scheduler`.
    pub fn on_fuse_tick(&mut self, scheduler: &mut impl FuseScheduler, tick: FuseTick) -> FuseStep {
        let step = self.fuse.advance(tick, FUSE_TICK_MS);
        match step {
            FuseStep::Stale => {
                trace!(generation = tick.generation(), "stale fuse tick ignored");
            }
            FuseStep::Pending(next) => {
                trace!(remaining_ms = self.fuse.remaining_ms(), "fuse tick");
                scheduler.schedule_tick(FUSE_TICK_MS, next);
            }
            FuseStep::Expired => {
                self.host.set_artifact_style(&self.artifact, "");
                debug!(generation = tick.generation(), "ripple cleared");
            }
        }
        step
    }

    fn trigger(&mut self, scheduler: &mut impl FuseScheduler, origin: Point) -> ArtifactGeometry {
        let restart = self.fuse.is_armed();
        let tick = self.fuse.arm(ANIMATION_LENGTH_MS);
        if restart {
            self.host.set_artifact_style(&self.artifact, "");
        }
        scheduler.schedule_tick(FUSE_TICK_MS, tick);

        let geometry = ArtifactGeometry::compute(self.host.bounding_rect(), origin);
        // Re-append so the artifact paints above children added since the last press.
        self.host.append_artifact(&self.artifact);
        let style = ArtifactStyle {
            color: &self.color,
            geometry,
            prefix: &self.prefix,
            duration_ms: ANIMATION_LENGTH_MS,
        }
        .to_string();
        self.host.set_artifact_style(&self.artifact, &style);
        debug!(
            restart,
            generation = tick.generation(),
            size = geometry.size,
            top = geometry.top,
            left = geometry.left,
            "ripple triggered"
        );
        geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ManualScheduler, SimHost};
    use alloc::vec::Vec;
    use kurbo::Rect;
    use understory_style::StyleSheet;

    fn registry() -> StyleRegistry<StyleSheet> {
        StyleRegistry::new(StyleSheet::new(), VendorPrefix::new("webkit").unwrap())
    }

    fn host() -> SimHost {
        SimHost::new(Rect::from_origin_size((50.0, 100.0), (80.0, 120.0)))
    }

    fn attach(options: RippleOptions) -> RippleBinding<SimHost> {
        RippleBinding::attach(host(), options, &mut registry()).unwrap()
    }

    fn artifact_style(binding: &RippleBinding<SimHost>) -> &str {
        binding.host().style_of_class(ARTIFACT_CLASS).unwrap()
    }

    #[test]
    fn attach_appends_one_unstyled_artifact() {
        let binding = attach(RippleOptions::default());
        let host = binding.host();
        assert_eq!(host.children().len(), 1);
        assert_eq!(host.children()[0].class, ARTIFACT_CLASS);
        assert_eq!(artifact_style(&binding), "");
        assert!(!binding.is_armed());
    }

    #[test]
    fn attach_rejects_invalid_color() {
        let err = RippleBinding::attach(host(), RippleOptions::with_color("red;"), &mut registry())
            .unwrap_err();
        assert!(matches!(err, RippleError::InvalidColor { .. }));
    }

    #[test]
    fn mouse_down_applies_computed_style() {
        let mut binding = attach(RippleOptions::default());
        let mut sched = ManualScheduler::new();
        let g = binding
            .on_mouse_down(&mut sched, Point::new(130.0, 160.0))
            .unwrap();
        assert_eq!((g.size, g.top, g.left), (120.0, 0.0, 20.0));
        assert_eq!(
            artifact_style(&binding),
            "background-color:#ccc;width: 120px;height: 120px;top:0px;left:20px;\
             -webkit-animation: ripple-effect ease-out 600ms forwards;\
             animation: ripple-effect ease-out 600ms forwards;"
        );
        assert_eq!(binding.remaining_ms(), ANIMATION_LENGTH_MS);
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn touch_reads_first_touch_point() {
        let mut binding = attach(RippleOptions::default());
        let mut sched = ManualScheduler::new();
        let touches = [Point::new(90.0, 160.0), Point::new(0.0, 0.0)];
        let g = binding.on_touch_start(&mut sched, &touches).unwrap();
        assert_eq!((g.top, g.left), (0.0, -20.0));
        assert_eq!(binding.pointer(), PointerClassifier::RecentTouch);
    }

    #[test]
    fn touch_then_mouse_is_suppressed_once() {
        let mut binding = attach(RippleOptions::default());
        let mut sched = ManualScheduler::new();
        binding
            .on_touch_start(&mut sched, &[Point::new(130.0, 160.0)])
            .unwrap();
        let touched = artifact_style(&binding).to_string();
        let writes = binding.host().style_writes().len();

        assert!(binding.on_mouse_down(&mut sched, Point::new(60.0, 110.0)).is_none());
        assert_eq!(artifact_style(&binding), touched);
        assert_eq!(binding.host().style_writes().len(), writes);
        assert_eq!(binding.pointer(), PointerClassifier::Idle);

        assert!(binding.on_mouse_down(&mut sched, Point::new(60.0, 110.0)).is_some());
        assert_ne!(artifact_style(&binding), touched);
    }

    #[test]
    fn empty_touch_list_is_an_error_and_leaves_fuse_idle() {
        let mut binding = attach(RippleOptions::default());
        let mut sched = ManualScheduler::new();
        assert_eq!(
            binding.on_touch_start(&mut sched, &[]),
            Err(RippleError::NoTouchPoints)
        );
        assert!(!binding.is_armed());
        assert_eq!(sched.pending(), 0);
        // The echo of that touch is still swallowed.
        assert!(binding.on_mouse_down(&mut sched, Point::new(60.0, 110.0)).is_none());
    }

    #[test]
    fn style_clears_after_exactly_animation_length() {
        let mut binding = attach(RippleOptions::default());
        let mut sched = ManualScheduler::new();
        binding.on_mouse_down(&mut sched, Point::new(130.0, 160.0));

        sched.advance(&mut binding, 590);
        assert!(binding.is_armed());
        assert_eq!(binding.remaining_ms(), 10);
        assert_ne!(artifact_style(&binding), "");

        sched.advance(&mut binding, 10);
        assert!(!binding.is_armed());
        assert_eq!(artifact_style(&binding), "");
        assert_eq!(sched.pending(), 0);
        assert_eq!(sched.now_ms(), 600);
    }

    #[test]
    fn retrigger_extends_from_second_press() {
        let mut binding = attach(RippleOptions::default());
        let mut sched = ManualScheduler::new();
        binding.on_mouse_down(&mut sched, Point::new(130.0, 160.0));
        sched.advance(&mut binding, 400);
        assert_eq!(binding.remaining_ms(), 200);

        let before = binding.host().style_writes().len();
        binding.on_mouse_down(&mut sched, Point::new(70.0, 120.0));
        assert_eq!(binding.remaining_ms(), ANIMATION_LENGTH_MS);
        let writes: Vec<&str> = binding.host().style_writes()[before..]
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0], "");
        assert!(writes[1].starts_with("background-color:#ccc;"));

        // Not cleared when the first press would have expired.
        sched.advance(&mut binding, 200);
        assert_ne!(artifact_style(&binding), "");
        sched.advance(&mut binding, 390);
        assert_ne!(artifact_style(&binding), "");
        sched.advance(&mut binding, 10);
        assert_eq!(artifact_style(&binding), "");
        assert_eq!(sched.now_ms(), 1000);
    }

    #[test]
    fn trigger_at_expiry_instant_rearms() {
        let mut binding = attach(RippleOptions::default());
        let mut sched = ManualScheduler::new();
        binding.on_mouse_down(&mut sched, Point::new(130.0, 160.0));
        sched.advance(&mut binding, 590);
        assert_eq!(binding.remaining_ms(), 10);

        // The last tick of the first press is due now; a press lands first.
        let last = sched.take_next().unwrap();
        assert_eq!(sched.now_ms(), 600);
        binding.on_mouse_down(&mut sched, Point::new(130.0, 160.0));
        assert_eq!(binding.on_fuse_tick(&mut sched, last), FuseStep::Stale);
        assert_ne!(artifact_style(&binding), "");
        assert_eq!(binding.remaining_ms(), ANIMATION_LENGTH_MS);

        sched.advance(&mut binding, 599);
        assert_ne!(artifact_style(&binding), "");
        sched.advance(&mut binding, 1);
        assert_eq!(artifact_style(&binding), "");
        assert_eq!(sched.now_ms(), 1200);
    }

    #[test]
    fn geometry_follows_moved_host() {
        let mut binding = attach(RippleOptions::default());
        let mut sched = ManualScheduler::new();
        let g = binding
            .on_mouse_down(&mut sched, Point::new(130.0, 160.0))
            .unwrap();
        assert_eq!((g.size, g.top, g.left), (120.0, 0.0, 20.0));

        binding.host.set_bounds(Rect::new(0.0, 0.0, 300.0, 10.0));
        let g = binding
            .on_mouse_down(&mut sched, Point::new(150.0, 5.0))
            .unwrap();
        assert_eq!((g.size, g.top, g.left), (300.0, -145.0, 0.0));
        assert!(artifact_style(&binding).contains("width: 300px;height: 300px;top:-145px;left:0px;"));
    }

    #[test]
    fn stale_tick_does_not_count_down() {
        let mut binding = attach(RippleOptions::default());
        let mut sched = ManualScheduler::new();
        binding.on_mouse_down(&mut sched, Point::new(130.0, 160.0));
        let old = sched.take_next().unwrap();
        binding.on_mouse_down(&mut sched, Point::new(130.0, 160.0));
        assert_eq!(binding.on_fuse_tick(&mut sched, old), FuseStep::Stale);
        assert_eq!(binding.remaining_ms(), ANIMATION_LENGTH_MS);
    }

    #[test]
    fn trigger_reappends_artifact_above_new_children() {
        let mut binding = attach(RippleOptions::default());
        let mut sched = ManualScheduler::new();
        binding.host.push_child("label");
        assert_eq!(binding.host().children()[0].class, ARTIFACT_CLASS);
        binding.on_mouse_down(&mut sched, Point::new(130.0, 160.0));
        let children = binding.host().children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].class, ARTIFACT_CLASS);
    }

    #[test]
    fn configured_color_is_used_verbatim() {
        let mut binding = attach(RippleOptions::with_color("rgba(255, 0, 0, .4)"));
        assert_eq!(binding.color(), "rgba(255, 0, 0, .4)");
        let mut sched = ManualScheduler::new();
        for _ in 0..3 {
            binding.on_mouse_down(&mut sched, Point::new(100.0, 150.0));
            assert!(artifact_style(&binding).starts_with("background-color:rgba(255, 0, 0, .4);"));
        }
    }

    #[test]
    fn many_bindings_share_one_registration() {
        let mut styles = registry();
        let bindings: Vec<_> = (0..5)
            .map(|_| RippleBinding::attach(host(), RippleOptions::default(), &mut styles).unwrap())
            .collect();
        assert_eq!(bindings.len(), 5);
        // Base rule plus prefixed and standard keyframes.
        assert_eq!(styles.sink().len(), 3);
        assert!(styles.contains_rule(crate::styles::ARTIFACT_SELECTOR));
        assert!(styles.contains_keyframes(crate::styles::KEYFRAMES_NAME));
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seams to the host toolkit: element operations and deferred execution.
//!
//! ## Overview
//!
//! The engine never touches a DOM or scene graph directly. Implement [`RippleHost`]
//! for the element a ripple is attached to, and [`FuseScheduler`] for your event
//! loop's timer. [`sim`](crate::sim) has in-memory implementations of both.

use kurbo::Rect;

use crate::fuse::FuseTick;

/// Element operations the engine needs from the host it is attached to.
///
/// The artifact handle is created once per binding and held privately by it,
/// so style writes to the artifact only ever come from the engine.
pub trait RippleHost {
    /// Handle to the artifact child element.
    type Artifact;

    /// Create a detached child element carrying `class`.
    fn create_artifact(&mut self, class: &str) -> Self::Artifact;

    /// Append `artifact` as the host's last child, moving it if already attached.
    fn append_artifact(&mut self, artifact: &Self::Artifact);

    /// Current bounds of the host, in the same space as event coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Replace the artifact's inline style. An empty string removes all inline style.
    fn set_artifact_style(&mut self, artifact: &Self::Artifact, style: &str);
}

/// Deferred execution on the host's event queue.
///
/// After `delay_ms`, the host must pass `tick` back to
/// [`RippleBinding::on_fuse_tick`](crate::RippleBinding::on_fuse_tick)
/// on the same binding. Ticks carry no identity beyond their generation,
/// so delivering a superseded tick is harmless.
pub trait FuseScheduler {
    /// Schedule `tick` for delivery after `delay_ms`.
    fn schedule_tick(&mut self, delay_ms: u32, tick: FuseTick);
}

impl<S: FuseScheduler + ?Sized> FuseScheduler for &mut S {
    fn schedule_tick(&mut self, delay_ms: u32, tick: FuseTick) {
        (**self).schedule_tick(delay_ms, tick);
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cleanup fuse: a generation-counted countdown.
//!
//! ## Semantics
//!
//! - [`Fuse::arm`] starts a fresh countdown and bumps the generation. The returned
//!   [`FuseTick`] is the only tick that can advance it.
//! - [`Fuse::advance`] consumes one tick. Ticks from an older generation, or ticks
//!   arriving while idle, are [`Stale`](FuseStep::Stale) and change nothing.
//! - The countdown is live exactly while `remaining_ms() > 0`; the tick that brings it
//!   to zero reports [`Expired`](FuseStep::Expired) and no further tick is issued.
//!
//! Re-arming an armed fuse therefore extends it: the in-flight tick goes stale and the
//! new chain runs the full length from the re-arm.

/// Token for one scheduled step of a [`Fuse`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FuseTick {
    generation: u64,
}

impl FuseTick {
    /// Generation of the countdown this tick belongs to.
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Result of delivering a [`FuseTick`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FuseStep {
    /// The tick was superseded (or the fuse is idle); nothing changed.
    Stale,
    /// Time remains; deliver this tick after another step.
    Pending(FuseTick),
    /// The countdown reached zero.
    Expired,
}

/// Countdown state for one binding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fuse {
    remaining_ms: u32,
    generation: u64,
}

impl Fuse {
    /// An idle fuse.
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds left before expiry; `0` when idle.
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    /// Current generation; increments on every [`arm`](Self::arm).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a countdown is live.
    pub fn is_armed(&self) -> bool {
        self.remaining_ms > 0
    }

    /// Start (or restart) a countdown of `length_ms`.
    ///
    /// A zero length is raised to one millisecond so that the returned tick always expires the fuse.
    pub fn arm(&mut self, length_ms: u32) -> FuseTick {
        self.generation = self.generation.wrapping_add(1);
        self.remaining_ms = length_ms.max(1);
        FuseTick {
            generation: self.generation,
        }
    }

    /// Deliver `tick`, counting down by `step_ms`.
    pub fn advance(&mut self, tick: FuseTick, step_ms: u32) -> FuseStep {
        if tick.generation != self.generation || self.remaining_ms == 0 {
            return FuseStep::Stale;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(step_ms);
        if self.remaining_ms == 0 {
            FuseStep::Expired
        } else {
            FuseStep::Pending(tick)
        }
    }
}

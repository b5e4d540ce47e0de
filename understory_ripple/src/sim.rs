// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host and virtual clock.
//!
//! ## Overview
//!
//! [`SimHost`] is a flat element with child nodes, a settable bounding rectangle,
//! and a log of every artifact style write. [`ManualScheduler`] queues fuse ticks
//! against a virtual millisecond clock and delivers them in due order.
//! Together they run a [`RippleBinding`] deterministically, without a toolkit.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_ripple::sim::{ManualScheduler, SimHost};
//! use understory_ripple::{ARTIFACT_CLASS, RippleBinding, RippleOptions};
//! use understory_style::{StyleRegistry, StyleSheet, VendorPrefix};
//!
//! let mut styles = StyleRegistry::new(StyleSheet::new(), VendorPrefix::none());
//! let host = SimHost::new(Rect::new(0.0, 0.0, 100.0, 40.0));
//! let mut ripple = RippleBinding::attach(host, RippleOptions::default(), &mut styles).unwrap();
//! let mut clock = ManualScheduler::new();
//!
//! ripple.on_mouse_down(&mut clock, Point::new(50.0, 20.0));
//! clock.advance(&mut ripple, 599);
//! assert!(ripple.is_armed());
//! clock.advance(&mut ripple, 1);
//! assert_eq!(ripple.host().style_of_class(ARTIFACT_CLASS), Some(""));
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Rect;

use crate::binding::RippleBinding;
use crate::fuse::FuseTick;
use crate::host::{FuseScheduler, RippleHost};

/// Handle to a [`SimHost`] child.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SimNodeId(u32);

/// A child element of a [`SimHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimNode {
    /// Stable identifier.
    pub id: SimNodeId,
    /// Class attribute.
    pub class: String,
    /// Inline style attribute.
    pub style: String,
}

/// A host element kept entirely in memory.
#[derive(Clone, Debug, Default)]
pub struct SimHost {
    bounds: Rect,
    // Attached children in paint order; detached nodes are kept aside.
    children: Vec<SimNode>,
    detached: Vec<SimNode>,
    next_id: u32,
    style_writes: Vec<String>,
}

impl SimHost {
    /// Create a host with the given bounds and no children.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }

    /// Move or resize the host.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Append an unrelated child with `class`, as other content of the host would.
    pub fn push_child(&mut self, class: &str) -> SimNodeId {
        let node = self.new_node(class);
        let id = node.id;
        self.children.push(node);
        id
    }

    /// Attached children in paint order (last is topmost).
    pub fn children(&self) -> &[SimNode] {
        &self.children
    }

    /// Inline style of the first attached child carrying `class`.
    pub fn style_of_class(&self, class: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|n| n.class == class)
            .map(|n| n.style.as_str())
    }

    /// Every artifact style write, oldest first.
    pub fn style_writes(&self) -> &[String] {
        &self.style_writes
    }

    fn new_node(&mut self, class: &str) -> SimNode {
        let id = SimNodeId(self.next_id);
        self.next_id += 1;
        SimNode {
            id,
            class: class.to_string(),
            style: String::new(),
        }
    }

    fn node_mut(&mut self, id: SimNodeId) -> Option<&mut SimNode> {
        self.children
            .iter_mut()
            .chain(self.detached.iter_mut())
            .find(|n| n.id == id)
    }
}

impl RippleHost for SimHost {
    type Artifact = SimNodeId;

    fn create_artifact(&mut self, class: &str) -> SimNodeId {
        let node = self.new_node(class);
        let id = node.id;
        self.detached.push(node);
        id
    }

    fn append_artifact(&mut self, artifact: &SimNodeId) {
        let node = if let Some(pos) = self.children.iter().position(|n| n.id == *artifact) {
            self.children.remove(pos)
        } else if let Some(pos) = self.detached.iter().position(|n| n.id == *artifact) {
            self.detached.remove(pos)
        } else {
            return;
        };
        self.children.push(node);
    }

    fn bounding_rect(&self) -> Rect {
        self.bounds
    }

    fn set_artifact_style(&mut self, artifact: &SimNodeId, style: &str) {
        if let Some(node) = self.node_mut(*artifact) {
            node.style = style.to_string();
            self.style_writes.push(style.to_string());
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Pending {
    due_ms: u64,
    seq: u64,
    tick: FuseTick,
}

/// A virtual clock that queues [`FuseTick`]s.
///
/// Ticks due at the same instant are delivered in the order they were scheduled.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    seq: u64,
    queue: Vec<Pending>,
}

impl ManualScheduler {
    /// A clock at time zero with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of queued ticks, including superseded ones.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Remove the earliest queued tick, moving the clock to its due time.
    pub fn take_next(&mut self) -> Option<FuseTick> {
        let pos = self
            .queue
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)?;
        let p = self.queue.swap_remove(pos);
        self.now_ms = self.now_ms.max(p.due_ms);
        Some(p.tick)
    }

    /// Run the clock forward by `ms`, delivering every tick that comes due to `binding`.
    ///
    /// Returns the number of ticks delivered.
    pub fn advance<H: RippleHost>(&mut self, binding: &mut RippleBinding<H>, ms: u64) -> usize {
        let until = self.now_ms + ms;
        let mut delivered = 0;
        while self.queue.iter().any(|p| p.due_ms <= until) {
            let Some(tick) = self.take_next() else {
                break;
            };
            binding.on_fuse_tick(self, tick);
            delivered += 1;
        }
        self.now_ms = until;
        delivered
    }
}

impl FuseScheduler for ManualScheduler {
    fn schedule_tick(&mut self, delay_ms: u32, tick: FuseTick) {
        self.queue.push(Pending {
            due_ms: self.now_ms + u64::from(delay_ms),
            seq: self.seq,
            tick,
        });
        self.seq += 1;
    }
}

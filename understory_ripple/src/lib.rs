// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ripple --heading-base-level=0

//! Understory Ripple: a deterministic, `no_std` press-ripple effect.
//!
//! ## Overview
//!
//! When a press lands inside a host element, a circular highlight expands from the press point and fades out.
//! This crate is the effect engine behind that: it computes where the circle goes, writes its inline style,
//! and runs the cleanup countdown that clears it afterwards.
//! It does not draw, lay out, or own an event loop.
//!
//! ## Pieces
//!
//! - [`register_styles`] installs the artifact's base rule and keyframes into an
//!   [`understory_style::StyleRegistry`], once per registry.
//! - [`ArtifactGeometry`] places a host-covering square centered on the press point.
//! - [`PointerClassifier`] lets a touch trigger and swallows the mouse-down that browsers synthesize after it.
//! - [`Fuse`] is a generation-counted countdown: re-triggering bumps the generation and restarts it,
//!   and superseded ticks report [`FuseStep::Stale`].
//! - [`RippleBinding`] ties them together for one host, through the [`RippleHost`] and [`FuseScheduler`] seams.
//!
//! ## Timing
//!
//! A trigger arms the fuse for [`ANIMATION_LENGTH_MS`] and schedules one tick [`FUSE_TICK_MS`] out.
//! Each live tick counts down and schedules the next; the tick that reaches zero clears the artifact's style.
//! The style is therefore cleared exactly [`ANIMATION_LENGTH_MS`] after the most recent trigger.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_ripple::sim::{ManualScheduler, SimHost};
//! use understory_ripple::{ARTIFACT_CLASS, RippleBinding, RippleOptions};
//! use understory_style::{StyleRegistry, StyleSheet, VendorPrefix};
//!
//! let mut styles = StyleRegistry::new(StyleSheet::new(), VendorPrefix::new("webkit").unwrap());
//! let host = SimHost::new(Rect::from_origin_size((50.0, 100.0), (80.0, 120.0)));
//! let options = RippleOptions::from_attributes([("ripplecolor", "teal")]);
//! let mut ripple = RippleBinding::attach(host, options, &mut styles).unwrap();
//! let mut clock = ManualScheduler::new();
//!
//! let g = ripple.on_mouse_down(&mut clock, Point::new(130.0, 160.0)).unwrap();
//! assert_eq!((g.size, g.top, g.left), (120.0, 0.0, 20.0));
//! assert!(ripple.host().style_of_class(ARTIFACT_CLASS).unwrap().starts_with("background-color:teal;"));
//!
//! clock.advance(&mut ripple, 600);
//! assert_eq!(ripple.host().style_of_class(ARTIFACT_CLASS), Some(""));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod error;
mod fuse;
mod geometry;
mod host;
mod options;
mod pointer;
mod style;
mod styles;

pub mod sim;

pub use binding::{ANIMATION_LENGTH_MS, FUSE_TICK_MS, RippleBinding};
pub use error::RippleError;
pub use fuse::{Fuse, FuseStep, FuseTick};
pub use geometry::ArtifactGeometry;
pub use host::{FuseScheduler, RippleHost};
pub use options::{COLOR_ATTRIBUTE, DEFAULT_COLOR, RippleOptions};
pub use pointer::PointerClassifier;
pub use style::ArtifactStyle;
pub use styles::{
    ARTIFACT_CLASS, ARTIFACT_RULE, ARTIFACT_SELECTOR, KEYFRAMES_NAME, keyframes, register_styles,
};

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch/mouse disambiguation.
//!
//! Browsers follow a touch with a synthetic mouse-down for the same press.
//! [`PointerClassifier`] lets the touch trigger and swallows exactly one mouse-down after it.
//!
//! ```
//! use understory_ripple::PointerClassifier;
//!
//! let mut c = PointerClassifier::Idle;
//! assert!(c.touch_start());
//! assert!(!c.mouse_down()); // synthetic, suppressed
//! assert!(c.mouse_down()); // independent click
//! ```

/// Two-state classifier for incoming presses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PointerClassifier {
    /// No touch is pending; the next mouse-down is genuine.
    #[default]
    Idle,
    /// A touch-start was seen; the next mouse-down is its synthetic echo.
    RecentTouch,
}

impl PointerClassifier {
    /// Record a touch-start. Touches always trigger.
    pub fn touch_start(&mut self) -> bool {
        *self = Self::RecentTouch;
        true
    }

    /// Record a mouse-down and return whether it should trigger.
    ///
    /// Always leaves the classifier [`Idle`](Self::Idle).
    pub fn mouse_down(&mut self) -> bool {
        let genuine = *self == Self::Idle;
        *self = Self::Idle;
        genuine
    }
}

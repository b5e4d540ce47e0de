// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by the ripple engine.

use alloc::string::String;

/// Errors from attaching a ripple or feeding it malformed input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RippleError {
    /// The configured color cannot be placed in an inline style.
    #[error("invalid ripple color {color:?}")]
    InvalidColor {
        /// The rejected color, as given.
        color: String,
    },
    /// A touch-start event carried no touch points.
    #[error("touch-start event has no touch points")]
    NoTouchPoints,
}

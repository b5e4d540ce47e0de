// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-binding configuration.
//!
//! ## Sources
//!
//! - Construct [`RippleOptions`] directly, or start from [`RippleOptions::default`].
//! - Read it from a host element's attributes with [`RippleOptions::from_attributes`]
//!   (the `ripplecolor` attribute).
//! - With the `serde` feature, deserialize it; `ripplecolor` is accepted as an alias for `color`.
//!   The `demos` crate enables this feature, so `cargo test --workspace` covers it.
//!
//! Options are validated once, when [`RippleBinding::attach`](crate::RippleBinding::attach) runs.

use alloc::string::{String, ToString};

use crate::error::RippleError;

/// Background color used when none is configured.
pub const DEFAULT_COLOR: &str = "#ccc";

/// Attribute name recognized by [`RippleOptions::from_attributes`].
pub const COLOR_ATTRIBUTE: &str = "ripplecolor";

/// Configuration for one [`RippleBinding`](crate::RippleBinding).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RippleOptions {
    /// CSS color for the artifact's background, e.g. `#ccc` or `rgba(0,0,0,.2)`.
    #[cfg_attr(feature = "serde", serde(alias = "ripplecolor"))]
    pub color: String,
}

impl Default for RippleOptions {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl RippleOptions {
    /// Options with the given background color.
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

    /// Build options from `(name, value)` attribute pairs.
    ///
    /// Names match ASCII case-insensitively. The `ripplecolor` value is trimmed of
    /// surrounding whitespace and otherwise kept verbatim; an empty (or all-whitespace)
    /// value is treated as absent. Unrecognized attributes are ignored.
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();
        for (name, value) in attributes {
            if name.eq_ignore_ascii_case(COLOR_ATTRIBUTE) && !value.trim().is_empty() {
                options.color = value.trim().to_string();
            }
        }
        options
    }

    /// Check that the color can be embedded in an inline style declaration.
    pub fn validate(&self) -> Result<(), RippleError> {
        let color = self.color.as_str();
        let bad = color.trim().is_empty()
            || color
                .chars()
                .any(|c| c.is_control() || matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\''));
        if bad {
            return Err(RippleError::InvalidColor {
                color: self.color.clone(),
            });
        }
        Ok(())
    }
}

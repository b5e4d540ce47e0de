// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the style registry: vendor prefixes, block kinds, and errors.

use alloc::format;
use alloc::string::{String, ToString};

/// Errors produced while configuring a [`StyleRegistry`](crate::StyleRegistry).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The vendor prefix contained something other than ASCII alphanumerics.
    #[error("invalid vendor prefix {prefix:?}: expected ASCII alphanumerics")]
    InvalidPrefix {
        /// The rejected prefix, as given.
        prefix: String,
    },
}

/// A rendering engine's prefix for non-standard properties.
///
/// Stored without the surrounding dashes: `webkit`, not `-webkit-`.
/// An empty prefix means the engine needs no prefixed forms; in that case
/// [`VendorPrefix::prefixed`] returns `None` and callers emit only the
/// standard property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VendorPrefix(String);

impl VendorPrefix {
    /// The WebKit/Blink prefix.
    pub const WEBKIT: &'static str = "webkit";
    /// The Gecko prefix.
    pub const MOZ: &'static str = "moz";

    /// Create a prefix, accepting an optional leading/trailing dash (`-webkit-`).
    pub fn new(prefix: &str) -> Result<Self, StyleError> {
        let trimmed = prefix.trim_matches('-');
        if !trimmed.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(StyleError::InvalidPrefix {
                prefix: prefix.to_string(),
            });
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// A prefix that produces no prefixed forms.
    pub fn none() -> Self {
        Self(String::new())
    }

    /// The bare prefix, without dashes.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if no prefixed forms should be emitted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The prefixed form of `name`, e.g. `transform` → `-webkit-transform`.
    pub fn prefixed(&self, name: &str) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(format!("-{}-{name}", self.0))
        }
    }
}

/// Which namespace a registered name lives in.
///
/// A rule selector `.foo` and a keyframes block `foo` never collide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKind {
    /// A selector rule (`.foo { .. }`).
    Rule,
    /// A keyframes block (`@keyframes foo { .. }`).
    Keyframes,
}

/// Key under which the registry remembers an insertion.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleKey {
    /// Namespace of the name.
    pub kind: StyleKind,
    /// Selector or keyframes name.
    pub name: String,
}

impl StyleKey {
    /// Key for a selector rule.
    pub fn rule(selector: &str) -> Self {
        Self {
            kind: StyleKind::Rule,
            name: selector.to_string(),
        }
    }

    /// Key for a keyframes block.
    pub fn keyframes(name: &str) -> Self {
        Self {
            kind: StyleKind::Keyframes,
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_strips_dashes_and_lowercases() {
        let p = VendorPrefix::new("-WebKit-").unwrap();
        assert_eq!(p.as_str(), "webkit");
        assert_eq!(p.prefixed("transform").as_deref(), Some("-webkit-transform"));
    }

    #[test]
    fn empty_prefix_yields_no_prefixed_form() {
        let p = VendorPrefix::new("").unwrap();
        assert!(p.is_empty());
        assert_eq!(p.prefixed("animation"), None);
        assert_eq!(p, VendorPrefix::none());
    }

    #[test]
    fn prefix_rejects_css_punctuation() {
        let err = VendorPrefix::new("web kit;").unwrap_err();
        assert_eq!(
            err,
            StyleError::InvalidPrefix {
                prefix: "web kit;".to_string()
            }
        );
    }

    #[test]
    fn rule_and_keyframes_keys_are_distinct() {
        assert_ne!(StyleKey::rule("ripple"), StyleKey::keyframes("ripple"));
        assert!(StyleKind::Rule < StyleKind::Keyframes);
    }
}

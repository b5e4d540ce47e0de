// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global styles for the ripple artifact.
//!
//! [`register_styles`] installs the base class and the expand-and-fade keyframes
//! into a shared [`StyleRegistry`]. It is called on every attach; the registry
//! makes repeated calls free.

use alloc::string::String;

use understory_style::{StyleRegistry, StyleSink, VendorPrefix};

/// Class carried by the artifact element.
pub const ARTIFACT_CLASS: &str = "ripple-effect";

/// Selector for the base rule.
pub const ARTIFACT_SELECTOR: &str = ".ripple-effect";

/// Name of the keyframes animation referenced by the inline style.
pub const KEYFRAMES_NAME: &str = "ripple-effect";

/// Declarations for [`ARTIFACT_SELECTOR`]: a circle that never intercepts pointer events,
/// positioned against the host.
pub const ARTIFACT_RULE: &str = "border-radius: 50%;pointer-events: none;position: absolute;";

/// Frame text for [`KEYFRAMES_NAME`]: from 75% opacity at zero scale to transparent at full scale.
pub fn keyframes(prefix: &VendorPrefix) -> String {
    let mut frames = String::new();
    for (at, opacity, scale) in [("0%", ".75", 0), ("100%", "0", 1)] {
        frames.push_str(at);
        frames.push_str(" {opacity: ");
        frames.push_str(opacity);
        frames.push(';');
        let transform = alloc::format!("transform: scale({scale});");
        if let Some(prefixed) = prefix.prefixed(&transform) {
            frames.push_str(&prefixed);
        }
        frames.push_str(&transform);
        frames.push('}');
    }
    frames
}

/// Ensure the artifact rule and keyframes exist in `registry`.
///
/// Returns `true` if anything was inserted by this call.
pub fn register_styles<S: StyleSink>(registry: &mut StyleRegistry<S>) -> bool {
    let frames = keyframes(registry.prefix());
    let rule = registry.add_rule(ARTIFACT_SELECTOR, ARTIFACT_RULE);
    let animation = registry.add_keyframes(KEYFRAMES_NAME, &frames);
    rule || animation
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_style::{StyleBlock, StyleSheet};

    #[test]
    fn keyframes_with_prefix() {
        let prefix = VendorPrefix::new("webkit").unwrap();
        assert_eq!(
            keyframes(&prefix),
            "0% {opacity: .75;-webkit-transform: scale(0);transform: scale(0);}\
             100% {opacity: 0;-webkit-transform: scale(1);transform: scale(1);}"
        );
    }

    #[test]
    fn keyframes_without_prefix() {
        assert_eq!(
            keyframes(&VendorPrefix::none()),
            "0% {opacity: .75;transform: scale(0);}100% {opacity: 0;transform: scale(1);}"
        );
    }

    #[test]
    fn registration_is_idempotent() {
        let mut registry = StyleRegistry::new(StyleSheet::new(), VendorPrefix::new("moz").unwrap());
        assert!(register_styles(&mut registry));
        let first = registry.sink().clone();
        for _ in 0..4 {
            assert!(!register_styles(&mut registry));
        }
        assert_eq!(registry.sink(), &first);
        // Base rule, -moz- keyframes, standard keyframes.
        assert_eq!(first.len(), 3);
        assert_eq!(
            first.blocks()[0],
            StyleBlock::Rule {
                selector: ARTIFACT_SELECTOR.into(),
                body: ARTIFACT_RULE.into(),
            }
        );
    }
}

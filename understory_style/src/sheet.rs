// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stylesheet sinks: the [`StyleSink`] trait and an in-memory [`StyleSheet`].
//!
//! ## Overview
//!
//! A sink receives literal rule text and appends it somewhere a renderer can see it:
//! a browser `CSSStyleSheet`, a style engine, or a buffer.
//! Sinks do no deduplication; that is the job of [`StyleRegistry`](crate::StyleRegistry).

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Write as _;

/// Destination for literal style text.
///
/// Implement this for your toolkit's stylesheet handle. Insertions are append-only.
pub trait StyleSink {
    /// Append a selector rule, e.g. `insert_rule(".a", "color: red;")`.
    fn insert_rule(&mut self, selector: &str, body: &str);

    /// Append a keyframes block under the given at-rule keyword.
    ///
    /// `at_rule` is the keyword without `@`: `keyframes` or a prefixed form
    /// such as `-webkit-keyframes`.
    fn insert_keyframes(&mut self, at_rule: &str, name: &str, frames: &str);
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn insert_rule(&mut self, selector: &str, body: &str) {
        (**self).insert_rule(selector, body);
    }

    fn insert_keyframes(&mut self, at_rule: &str, name: &str, frames: &str) {
        (**self).insert_keyframes(at_rule, name, frames);
    }
}

/// One block recorded by a [`StyleSheet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleBlock {
    /// `selector { body }`.
    Rule {
        /// Selector text.
        selector: String,
        /// Declarations, verbatim.
        body: String,
    },
    /// `@at_rule name { frames }`.
    Keyframes {
        /// At-rule keyword without `@`.
        at_rule: String,
        /// Animation name.
        name: String,
        /// Frame text, verbatim.
        frames: String,
    },
}

/// An in-memory, append-only stylesheet.
///
/// Blocks are kept in insertion order and can be rendered with [`StyleSheet::to_css`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    blocks: Vec<StyleBlock>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded blocks in insertion order.
    pub fn blocks(&self) -> &[StyleBlock] {
        &self.blocks
    }

    /// Number of recorded blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True if nothing was inserted.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Render all blocks as CSS text, one block per line.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            // Writing into a String cannot fail.
            let _ = match block {
                StyleBlock::Rule { selector, body } => writeln!(out, "{selector} {{{body}}}"),
                StyleBlock::Keyframes {
                    at_rule,
                    name,
                    frames,
                } => writeln!(out, "@{at_rule} {name} {{{frames}}}"),
            };
        }
        out
    }
}

impl StyleSink for StyleSheet {
    fn insert_rule(&mut self, selector: &str, body: &str) {
        self.blocks.push(StyleBlock::Rule {
            selector: selector.to_string(),
            body: body.to_string(),
        });
    }

    fn insert_keyframes(&mut self, at_rule: &str, name: &str, frames: &str) {
        self.blocks.push(StyleBlock::Keyframes {
            at_rule: at_rule.to_string(),
            name: name.to_string(),
            frames: frames.to_string(),
        });
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry implementation: one-time insertion over a [`StyleSink`].

use alloc::collections::BTreeSet;
use alloc::format;

use tracing::debug;

use crate::sheet::StyleSink;
use crate::types::{StyleKey, VendorPrefix};

/// A shared style registry.
///
/// ## Usage
///
/// - Construct once per document with [`StyleRegistry::new`] and hand it by
///   `&mut` to every component that needs global styles.
/// - Call [`StyleRegistry::add_rule`] / [`StyleRegistry::add_keyframes`] as
///   often as you like; each `(kind, name)` reaches the sink once.
///
/// The registry never removes what it inserted.
pub struct StyleRegistry<S: StyleSink> {
    sink: S,
    prefix: VendorPrefix,
    inserted: BTreeSet<StyleKey>,
}

impl<S: StyleSink> core::fmt::Debug for StyleRegistry<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("prefix", &self.prefix)
            .field("inserted", &self.inserted)
            .finish_non_exhaustive()
    }
}

impl<S: StyleSink> StyleRegistry<S> {
    /// Create a registry over `sink` for an engine using `prefix`.
    pub fn new(sink: S, prefix: VendorPrefix) -> Self {
        Self {
            sink,
            prefix,
            inserted: BTreeSet::new(),
        }
    }

    /// The active engine's vendor prefix.
    pub fn prefix(&self) -> &VendorPrefix {
        &self.prefix
    }

    /// The underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the registry, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// True if a rule for `selector` has been inserted.
    pub fn contains_rule(&self, selector: &str) -> bool {
        self.inserted.contains(&StyleKey::rule(selector))
    }

    /// True if a keyframes block named `name` has been inserted.
    pub fn contains_keyframes(&self, name: &str) -> bool {
        self.inserted.contains(&StyleKey::keyframes(name))
    }

    /// Number of distinct names inserted so far.
    pub fn len(&self) -> usize {
        self.inserted.len()
    }

    /// True if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty()
    }

    /// Insert a selector rule unless one with the same selector already exists.
    ///
    /// Returns `true` if the sink received the rule.
    pub fn add_rule(&mut self, selector: &str, body: &str) -> bool {
        if !self.inserted.insert(StyleKey::rule(selector)) {
            debug!(selector, "style rule already registered");
            return false;
        }
        self.sink.insert_rule(selector, body);
        debug!(selector, "style rule registered");
        true
    }

    /// Insert a keyframes block unless one with the same name already exists.
    ///
    /// With a non-empty prefix the prefixed at-rule (`@-webkit-keyframes`) is
    /// inserted first, followed by the standard `@keyframes`.
    /// Returns `true` if the sink received the block.
    pub fn add_keyframes(&mut self, name: &str, frames: &str) -> bool {
        if !self.inserted.insert(StyleKey::keyframes(name)) {
            debug!(name, "keyframes already registered");
            return false;
        }
        if !self.prefix.is_empty() {
            let at_rule = format!("-{}-keyframes", self.prefix.as_str());
            self.sink.insert_keyframes(&at_rule, name, frames);
        }
        self.sink.insert_keyframes("keyframes", name, frames);
        debug!(name, prefix = self.prefix.as_str(), "keyframes registered");
        true
    }
}

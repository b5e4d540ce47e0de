// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_style --heading-base-level=0

//! Understory Style: a deduplicating registry for document-wide style rules.
//!
//! ## Overview
//!
//! Components that ship their own global CSS (a base class, a keyframes animation) need somewhere to put it.
//! This crate separates *where* the text goes from *whether* it should go there:
//!
//! - [`StyleSink`] is the injectable destination. Implement it for your toolkit's stylesheet handle,
//!   or use the in-memory [`StyleSheet`].
//! - [`StyleRegistry`] owns a sink and the engine's [`VendorPrefix`], and remembers every
//!   rule and keyframes name it has inserted so repeated registration is a no-op.
//!
//! Rules and keyframes live in separate namespaces (see [`StyleKind`]).
//! Keyframes are emitted in both the prefixed and the standard at-rule form when a prefix is set.
//!
//! ## Minimal example
//!
//! ```
//! use understory_style::{StyleRegistry, StyleSheet, VendorPrefix};
//!
//! let prefix = VendorPrefix::new("webkit").unwrap();
//! let mut registry = StyleRegistry::new(StyleSheet::new(), prefix);
//!
//! assert!(registry.add_rule(".badge", "border-radius: 50%;"));
//! // Second registration is skipped.
//! assert!(!registry.add_rule(".badge", "border-radius: 50%;"));
//!
//! registry.add_keyframes("pulse", "0% {opacity: 1;}100% {opacity: 0;}");
//! assert_eq!(
//!     registry.sink().to_css(),
//!     ".badge {border-radius: 50%;}\n\
//!      @-webkit-keyframes pulse {0% {opacity: 1;}100% {opacity: 0;}}\n\
//!      @keyframes pulse {0% {opacity: 1;}100% {opacity: 0;}}\n"
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod registry;
mod sheet;
mod types;

pub use registry::StyleRegistry;
pub use sheet::{StyleBlock, StyleSheet, StyleSink};
pub use types::{StyleError, StyleKey, StyleKind, VendorPrefix};

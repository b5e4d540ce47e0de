// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rapid presses restart the animation instead of layering it.
//!
//! A second press 400 ms into the first clears the style, reapplies it, and
//! pushes cleanup out to 600 ms after the second press.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_ripple_demos --example ripple_retrigger`

use kurbo::{Point, Rect};
use understory_ripple::sim::{ManualScheduler, SimHost};
use understory_ripple::{ARTIFACT_CLASS, RippleBinding, RippleOptions};
use understory_style::{StyleRegistry, StyleSheet, VendorPrefix};

fn main() {
    understory_ripple_demos::init_logging();

    let mut styles = StyleRegistry::new(
        StyleSheet::new(),
        VendorPrefix::new(VendorPrefix::MOZ).expect("static prefix"),
    );
    let host = SimHost::new(Rect::new(10.0, 10.0, 110.0, 110.0));
    let mut ripple = RippleBinding::attach(host, RippleOptions::default(), &mut styles)
        .expect("default options are valid");
    let mut clock = ManualScheduler::new();

    ripple.on_mouse_down(&mut clock, Point::new(60.0, 60.0));
    clock.advance(&mut ripple, 400);
    println!("== t={} ms ==\n  remaining = {} ms", clock.now_ms(), ripple.remaining_ms());

    ripple.on_mouse_down(&mut clock, Point::new(20.0, 100.0));
    println!("== Second press at t={} ms ==", clock.now_ms());
    println!("  remaining = {} ms", ripple.remaining_ms());

    // Where the first press alone would have been cleared.
    clock.advance(&mut ripple, 200);
    let style = ripple.host().style_of_class(ARTIFACT_CLASS).unwrap_or_default();
    println!("== t={} ms ==\n  still styled = {}", clock.now_ms(), !style.is_empty());
    assert!(!style.is_empty());

    clock.advance(&mut ripple, 400);
    println!(
        "== t={} ms ==\n  style = {:?}",
        clock.now_ms(),
        ripple.host().style_of_class(ARTIFACT_CLASS)
    );
    assert_eq!(ripple.host().style_of_class(ARTIFACT_CLASS), Some(""));
}

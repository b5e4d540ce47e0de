// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch followed by the browser's synthetic mouse-down.
//!
//! The touch triggers; the echoed mouse-down is swallowed; a later,
//! independent mouse-down triggers again.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_ripple_demos --example ripple_touch`

use kurbo::{Point, Rect};
use understory_ripple::sim::{ManualScheduler, SimHost};
use understory_ripple::{RippleBinding, RippleOptions};
use understory_style::{StyleRegistry, StyleSheet, VendorPrefix};

fn main() {
    understory_ripple_demos::init_logging();

    let mut styles = StyleRegistry::new(StyleSheet::new(), VendorPrefix::none());
    let host = SimHost::new(Rect::new(0.0, 0.0, 240.0, 48.0));
    let options = RippleOptions::from_attributes([("ripplecolor", "rgba(0, 0, 0, .2)")]);
    let mut ripple =
        RippleBinding::attach(host, options, &mut styles).expect("attribute color is valid");
    let mut clock = ManualScheduler::new();

    let touch = ripple
        .on_touch_start(&mut clock, &[Point::new(200.0, 24.0)])
        .expect("one touch point");
    println!("== Touch ==\n  {:?} ({:?})", touch, ripple.pointer());

    let echo = ripple.on_mouse_down(&mut clock, Point::new(200.0, 24.0));
    println!("== Synthetic mouse-down ==\n  {:?} ({:?})", echo, ripple.pointer());
    assert!(echo.is_none());

    clock.advance(&mut ripple, 1_000);

    let click = ripple.on_mouse_down(&mut clock, Point::new(12.0, 12.0));
    println!("== Later click ==\n  {:?}", click);
    assert!(click.is_some());

    let writes = ripple.host().style_writes();
    println!("== Style writes ({}) ==", writes.len());
    for w in writes {
        println!("  {:?}", w);
    }
}

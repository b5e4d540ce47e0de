// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single press, from trigger to cleanup.
//!
//! Attaches a ripple to a simulated host, presses once, and runs the clock
//! until the artifact's style is cleared.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_ripple_demos --example ripple_basics`

use kurbo::{Point, Rect};
use understory_ripple::sim::{ManualScheduler, SimHost};
use understory_ripple::{ANIMATION_LENGTH_MS, ARTIFACT_CLASS, RippleBinding, RippleOptions};
use understory_style::{StyleRegistry, StyleSheet, VendorPrefix};

fn main() {
    understory_ripple_demos::init_logging();

    let prefix = VendorPrefix::new(VendorPrefix::WEBKIT).expect("static prefix");
    let mut styles = StyleRegistry::new(StyleSheet::new(), prefix);

    // Host at top 100, left 50, 80 wide, 120 tall.
    let host = SimHost::new(Rect::from_origin_size((50.0, 100.0), (80.0, 120.0)));
    // Options as they would arrive from a config file.
    let options: RippleOptions =
        serde_json::from_str(r##"{ "ripplecolor": "#ccc" }"##).expect("valid options JSON");
    assert_eq!(options, RippleOptions::default());
    let mut ripple =
        RippleBinding::attach(host, options, &mut styles).expect("default options are valid");
    let mut clock = ManualScheduler::new();

    println!("== Stylesheet ==\n{}", styles.sink().to_css());

    let g = ripple
        .on_mouse_down(&mut clock, Point::new(130.0, 160.0))
        .expect("plain mouse-down triggers");
    println!("== Geometry ==\n  {:?}", g);
    println!(
        "== Inline style ==\n  {}",
        ripple.host().style_of_class(ARTIFACT_CLASS).unwrap_or_default()
    );
    assert_eq!((g.size, g.top, g.left), (120.0, 0.0, 20.0));

    let ticks = clock.advance(&mut ripple, u64::from(ANIMATION_LENGTH_MS));
    println!("== After {} ms ({} ticks) ==", clock.now_ms(), ticks);
    println!(
        "  style = {:?}, armed = {}",
        ripple.host().style_of_class(ARTIFACT_CLASS),
        ripple.is_armed()
    );
    assert_eq!(ripple.host().style_of_class(ARTIFACT_CLASS), Some(""));
}

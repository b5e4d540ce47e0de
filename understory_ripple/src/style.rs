// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style text for a triggered artifact.

use core::fmt;

use understory_style::VendorPrefix;

use crate::geometry::ArtifactGeometry;
use crate::styles::KEYFRAMES_NAME;

/// Everything that goes into one artifact's inline `style` attribute.
///
/// Render with [`ToString`] or `{}`:
///
/// ```
/// use understory_ripple::{ArtifactGeometry, ArtifactStyle};
/// use understory_style::VendorPrefix;
///
/// let style = ArtifactStyle {
///     color: "#ccc",
///     geometry: ArtifactGeometry { size: 120.0, top: 0.0, left: 20.0 },
///     prefix: &VendorPrefix::none(),
///     duration_ms: 600,
/// };
/// assert_eq!(
///     style.to_string(),
///     "background-color:#ccc;width: 120px;height: 120px;top:0px;left:20px;\
///      animation: ripple-effect ease-out 600ms forwards;"
/// );
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ArtifactStyle<'a> {
    /// Background color, already validated.
    pub color: &'a str,
    /// Placement in host-local coordinates.
    pub geometry: ArtifactGeometry,
    /// Prefix for the non-standard `animation` declaration.
    pub prefix: &'a VendorPrefix,
    /// Animation duration in milliseconds.
    pub duration_ms: u32,
}

/// Pixel length, printed in shortest form without a negative zero.
struct Px(f64);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 + 0.0 == +0.0
        write!(f, "{}px", self.0 + 0.0)
    }
}

impl fmt::Display for ArtifactStyle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = &self.geometry;
        write!(f, "background-color:{};", self.color)?;
        write!(f, "width: {};", Px(g.size))?;
        write!(f, "height: {};", Px(g.size))?;
        write!(f, "top:{};", Px(g.top))?;
        write!(f, "left:{};", Px(g.left))?;
        let animation = Animation(self.duration_ms);
        if !self.prefix.is_empty() {
            write!(f, "-{}-animation: {animation};", self.prefix.as_str())?;
        }
        write!(f, "animation: {animation};")
    }
}

struct Animation(u32);

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KEYFRAMES_NAME} ease-out {}ms forwards", self.0)
    }
}

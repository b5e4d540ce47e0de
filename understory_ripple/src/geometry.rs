// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Artifact geometry from host bounds and an event origin.
//!
//! All inputs are in the same (client/world) space; the output is in host-local space.

use kurbo::{Point, Rect, Size};

/// Square placement of the ripple artifact, relative to the host's top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArtifactGeometry {
    /// Side length: the larger of the host's width and height.
    pub size: f64,
    /// Offset of the artifact's top edge from the host's top edge.
    pub top: f64,
    /// Offset of the artifact's left edge from the host's left edge.
    pub left: f64,
}

impl ArtifactGeometry {
    /// Center a host-covering square on `origin`.
    ///
    /// The side is `max(width, height)` of `host`, so a full-grown circle covers
    /// the host wherever the press lands (given `overflow: hidden` on the host).
    /// `host` is normalized first, so inverted rectangles behave like their
    /// positive-area equivalent.
    pub fn compute(host: Rect, origin: Point) -> Self {
        let host = host.abs();
        let size = host.width().max(host.height());
        let half = size / 2.0;
        Self {
            size,
            top: (origin.y - host.y0) - half,
            left: (origin.x - host.x0) - half,
        }
    }

    /// The artifact's square in host-local coordinates.
    pub fn local_rect(&self) -> Rect {
        Rect::from_origin_size(Point::new(self.left, self.top), Size::new(self.size, self.size))
    }

    /// The event origin in host-local coordinates (the square's center).
    pub fn local_origin(&self) -> Point {
        self.local_rect().center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tall_host_uses_height() {
        // Host at top 100, left 50, 80 wide, 120 tall; press at (130, 160).
        let host = Rect::from_origin_size((50.0, 100.0), (80.0, 120.0));
        let g = ArtifactGeometry::compute(host, Point::new(130.0, 160.0));
        assert_eq!(g.size, 120.0);
        assert_eq!(g.top, 0.0);
        assert_eq!(g.left, 20.0);
    }

    #[test]
    fn wide_host_uses_width() {
        let host = Rect::new(0.0, 0.0, 200.0, 40.0);
        let g = ArtifactGeometry::compute(host, Point::new(10.0, 10.0));
        assert_eq!(g.size, 200.0);
        assert_eq!(g.top, -90.0);
        assert_eq!(g.left, -90.0);
    }

    #[test]
    fn square_is_centered_on_origin() {
        let host = Rect::new(10.0, 20.0, 110.0, 70.0);
        let origin = Point::new(42.5, 33.0);
        let g = ArtifactGeometry::compute(host, origin);
        assert_eq!(g.local_origin(), Point::new(origin.x - host.x0, origin.y - host.y0));
        assert_eq!(g.local_rect().size(), Size::new(100.0, 100.0));
    }

    #[test]
    fn inverted_host_rect_is_normalized() {
        let host = Rect::new(130.0, 220.0, 50.0, 100.0);
        let g = ArtifactGeometry::compute(host, Point::new(130.0, 160.0));
        assert_eq!((g.size, g.top, g.left), (120.0, 0.0, 20.0));
    }

    #[test]
    fn origin_outside_host_still_centers() {
        let host = Rect::new(0.0, 0.0, 50.0, 50.0);
        let g = ArtifactGeometry::compute(host, Point::new(-10.0, 75.0));
        assert_eq!((g.top, g.left), (50.0, -35.0));
    }
}

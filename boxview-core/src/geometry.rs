//! Annotation geometry and display scaling.
//!
//! Boxes arrive in the coordinate space of the original (unscaled) image.
//! The browser may lay the image out at a different size, so every box is
//! mapped through independent per-axis scale factors before it is drawn.

use serde::{Deserialize, Serialize};

/// Point in original-image pixel space. Serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Rectangular annotation region, serialized as `[[x1, y1], [x2, y2]]`.
///
/// Corner ordering is not enforced. A box whose bottom-right corner lies
/// above or left of its top-left corner yields a non-positive width or
/// height when scaled and is drawn as such.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Point; 2]", into = "[Point; 2]")]
pub struct AnnotationBox {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl AnnotationBox {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Build a box from raw corner coordinates.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }

    /// True when `top_left <= bottom_right` on both axes.
    pub fn is_well_formed(&self) -> bool {
        self.top_left.x <= self.bottom_right.x && self.top_left.y <= self.bottom_right.y
    }

    /// Map this box into displayed pixel space.
    pub fn scaled(&self, scale: ScaleFactors) -> OverlayRect {
        OverlayRect {
            left: self.top_left.x * scale.x,
            top: self.top_left.y * scale.y,
            width: self.width() * scale.x,
            height: self.height() * scale.y,
        }
    }
}

impl From<[Point; 2]> for AnnotationBox {
    fn from([top_left, bottom_right]: [Point; 2]) -> Self {
        Self::new(top_left, bottom_right)
    }
}

impl From<AnnotationBox> for [Point; 2] {
    fn from(b: AnnotationBox) -> Self {
        [b.top_left, b.bottom_right]
    }
}

/// Ordered boxes for one image. A box's position is its identity for the
/// lifetime of a render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxSet(Vec<AnnotationBox>);

impl BoxSet {
    pub fn new(boxes: Vec<AnnotationBox>) -> Self {
        Self(boxes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AnnotationBox> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotationBox> {
        self.0.iter()
    }

    /// Number of boxes whose corners are out of order.
    pub fn malformed_count(&self) -> usize {
        self.0.iter().filter(|b| !b.is_well_formed()).count()
    }
}

impl From<Vec<AnnotationBox>> for BoxSet {
    fn from(boxes: Vec<AnnotationBox>) -> Self {
        Self(boxes)
    }
}

impl FromIterator<AnnotationBox> for BoxSet {
    fn from_iter<I: IntoIterator<Item = AnnotationBox>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BoxSet {
    type Item = &'a AnnotationBox;
    type IntoIter = std::slice::Iter<'a, AnnotationBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Width and height of an image in pixels.
///
/// Used both for the displayed (post-layout) size and the intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Display-to-original ratio on each axis.
///
/// The axes are independent: CSS may stretch the image without preserving
/// its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
}

impl ScaleFactors {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale mapping `intrinsic` onto `displayed`.
    ///
    /// A zero intrinsic dimension yields an infinite or NaN factor; callers
    /// render the resulting geometry as-is.
    pub fn between(displayed: ImageSize, intrinsic: ImageSize) -> Self {
        Self {
            x: displayed.width / intrinsic.width,
            y: displayed.height / intrinsic.height,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Overlay geometry in displayed pixels, relative to the image's top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// One overlay to materialize: the box index and where to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPlacement {
    pub index: usize,
    pub rect: OverlayRect,
}

/// Compute placements for every box, in box order.
pub fn layout_overlays(boxes: &BoxSet, scale: ScaleFactors) -> Vec<OverlayPlacement> {
    boxes
        .iter()
        .enumerate()
        .map(|(index, b)| OverlayPlacement {
            index,
            rect: b.scaled(scale),
        })
        .collect()
}

//! Planar geometry shared by the broad and narrow phase.

use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// World placement of a physics-bearing entity.
///
/// Owned by the host's entity; bodies read and write it but never keep a copy.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Transform<F: Float> {
    pub position: Vec2<F>,
    /// Counter-clockwise rotation in radians.
    pub rotation: F,
}

impl<F: Float> Transform<F> {
    /// Transform at `position`, rotated by `rotation` radians.
    pub fn new(position: Vec2<F>, rotation: F) -> Self {
        Transform { position, rotation }
    }

    /// Unrotated transform at `position`.
    pub fn from_position(position: Vec2<F>) -> Self {
        Transform { position, rotation: F::zero() }
    }
}

/// Axis-aligned bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> Aabb<F> {
    /// Box spanning `min..max`.
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Self {
        Aabb { min, max }
    }

    /// Box around `center` reaching `half_extents` each way.
    pub fn from_center(center: Vec2<F>, half_extents: Vec2<F>) -> Self {
        Aabb { min: center - half_extents, max: center + half_extents }
    }

    /// Smallest box containing every point. An empty slice gives a
    /// degenerate box at the origin.
    pub fn from_points(points: &[Vec2<F>]) -> Self {
        let Some(first) = points.first() else {
            return Aabb { min: Vec2::zero(), max: Vec2::zero() };
        };
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        }
        Aabb { min, max }
    }

    /// Strict overlap test: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb<F>) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }

    /// Inclusive point test.
    pub fn contains_point(&self, point: Vec2<F>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Vec2<F> {
        (self.min + self.max).scale(F::half())
    }

    /// Half the width and height.
    pub fn half_extents(&self) -> Vec2<F> {
        (self.max - self.min).scale(F::half())
    }
}

/// Rectangle with a center, full size and rotation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrientedRectangle<F: Float> {
    pub center: Vec2<F>,
    pub size: Vec2<F>,
    pub rotation: F,
}

impl<F: Float> OrientedRectangle<F> {
    /// Rectangle of full `size` around `center`.
    pub fn new(center: Vec2<F>, size: Vec2<F>, rotation: F) -> Self {
        OrientedRectangle { center, size, rotation }
    }

    /// Half the width and height.
    pub fn half_size(&self) -> Vec2<F> {
        self.size.scale(F::half())
    }

    /// Corners in counter-clockwise order, starting bottom-left in local space.
    pub fn corner_vertices(&self) -> [Vec2<F>; 4] {
        let half = self.half_size();
        let one = F::one();
        [
            Vec2::new(-one, -one),
            Vec2::new(one, -one),
            Vec2::new(one, one),
            Vec2::new(-one, one),
        ]
        .map(|dir| self.center + dir.component_mul(half).rotate(self.rotation))
    }

    /// Indices of the previous and next corner in winding order.
    pub fn corner_neighbors(index: usize) -> (usize, usize) {
        ((index + 3) % 4, (index + 1) % 4)
    }

    /// The two distinct face normals; opposite faces share an axis.
    pub fn edge_axes(&self) -> [Vec2<F>; 2] {
        [
            Vec2::right().rotate(self.rotation),
            Vec2::up().rotate(self.rotation),
        ]
    }

    /// Axis-aligned bounds of the rotated corners.
    pub fn aabb(&self) -> Aabb<F> {
        Aabb::from_points(&self.corner_vertices())
    }
}

/// Directed segment between two polygon vertices.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge<F: Float> {
    pub start: Vec2<F>,
    pub end: Vec2<F>,
}

impl<F: Float> Edge<F> {
    /// Edge from `start` to `end`.
    pub fn new(start: Vec2<F>, end: Vec2<F>) -> Self {
        Edge { start, end }
    }

    /// Unit direction from start to end.
    pub fn direction(&self) -> Vec2<F> {
        (self.end - self.start).normalize()
    }

    /// Unit normal, direction rotated a quarter turn counter-clockwise.
    pub fn perp(&self) -> Vec2<F> {
        self.direction().perp()
    }

    /// Projection of `point` onto the edge direction.
    pub fn project(&self, point: Vec2<F>) -> F {
        self.direction().dot(point)
    }
}

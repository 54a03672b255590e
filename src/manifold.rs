//! Narrow-phase output: collision manifolds and contacts.

use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// Up to two contact points, stored inline.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContactPoints<F: Float> {
    points: [Vec2<F>; 2],
    len: usize,
}

impl<F: Float> ContactPoints<F> {
    /// No contact points.
    pub fn new() -> Self {
        ContactPoints { points: [Vec2::zero(); 2], len: 0 }
    }

    /// A single contact point.
    pub fn one(point: Vec2<F>) -> Self {
        ContactPoints { points: [point, Vec2::zero()], len: 1 }
    }

    /// Append a point. Returns `false` once both slots are taken.
    pub fn push(&mut self, point: Vec2<F>) -> bool {
        if self.len == self.points.len() {
            return false;
        }
        self.points[self.len] = point;
        self.len += 1;
        true
    }

    /// The stored points.
    pub fn as_slice(&self) -> &[Vec2<F>] {
        &self.points[..self.len]
    }

    /// Number of stored points.
    pub fn len(&self) -> usize { self.len }
    /// True when no point is stored.
    pub fn is_empty(&self) -> bool { self.len == 0 }
}

impl<F: Float> FromIterator<Vec2<F>> for ContactPoints<F> {
    fn from_iter<I: IntoIterator<Item = Vec2<F>>>(iter: I) -> Self {
        let mut points = ContactPoints::new();
        for p in iter {
            if !points.push(p) {
                break;
            }
        }
        points
    }
}

/// Geometric description of an overlap between two shapes.
///
/// `normal` is unit length and points from the first shape toward the
/// second; `depth` is the penetration along it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionManifold<F: Float> {
    pub normal: Vec2<F>,
    pub depth: F,
    pub contact_points: ContactPoints<F>,
}

impl<F: Float> CollisionManifold<F> {
    /// Manifold from its parts.
    pub fn new(normal: Vec2<F>, depth: F, contact_points: ContactPoints<F>) -> Self {
        CollisionManifold { normal, depth, contact_points }
    }

    /// Same overlap seen from the other shape.
    pub fn flipped(self) -> Self {
        CollisionManifold { normal: -self.normal, ..self }
    }

    /// A manifold with no contact points carries no stable contact.
    pub fn has_contact_points(&self) -> bool {
        !self.contact_points.is_empty()
    }
}

/// A manifold paired with the two bodies it was computed for.
///
/// `first`/`second` index the entity slice of the tick that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact<F: Float> {
    pub first: usize,
    pub second: usize,
    pub manifold: CollisionManifold<F>,
}

impl<F: Float> Contact<F> {
    /// Contact between entities `first` and `second`.
    pub fn new(first: usize, second: usize, manifold: CollisionManifold<F>) -> Self {
        Contact { first, second, manifold }
    }
}

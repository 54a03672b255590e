//! Collision shapes owned by rigid bodies.

use crate::collision::{intersect_circle_rectangle, intersect_circles, intersect_rectangles};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::geometry::{Aabb, OrientedRectangle, Transform};
use crate::manifold::CollisionManifold;
use crate::vec::Vec2;

/// Circle centered on the body position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircleShape<F: Float> {
    radius: F,
}

impl<F: Float> CircleShape<F> {
    /// Circle of `radius`; must be positive and finite.
    pub fn new(radius: F) -> Result<Self, PhysicsError> {
        if !radius.is_finite() || radius <= F::zero() {
            return Err(PhysicsError::InvalidRadius);
        }
        Ok(CircleShape { radius })
    }

    /// Radius.
    pub fn radius(&self) -> F {
        self.radius
    }

    /// `π r²`.
    pub fn area(&self) -> F {
        F::pi() * self.radius.sqr()
    }

    /// Solid disc: `m r^2 / 2`.
    pub fn rotational_inertia(&self, mass: F) -> F {
        mass * self.radius.sqr() * F::half()
    }
}

/// Rectangle centered on the body position, rotated with the body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectangleShape<F: Float> {
    size: Vec2<F>,
}

impl<F: Float> RectangleShape<F> {
    /// Rectangle of full `size`; both sides positive and finite.
    pub fn new(size: Vec2<F>) -> Result<Self, PhysicsError> {
        if !size.is_finite() || size.x <= F::zero() || size.y <= F::zero() {
            return Err(PhysicsError::InvalidSize);
        }
        Ok(RectangleShape { size })
    }

    /// Full width and height.
    pub fn size(&self) -> Vec2<F> {
        self.size
    }

    /// `w h`.
    pub fn area(&self) -> F {
        self.size.x * self.size.y
    }

    /// Solid rectangle: `m (w^2 + h^2) / 12`.
    pub fn rotational_inertia(&self, mass: F) -> F {
        mass * (self.size.x.sqr() + self.size.y.sqr()) / F::from_f32(12.0)
    }

    /// The rectangle placed in the world by `transform`.
    pub fn oriented(&self, transform: &Transform<F>) -> OrientedRectangle<F> {
        OrientedRectangle::new(transform.position, self.size, transform.rotation)
    }
}

/// Discriminant of [`Shape`], for hosts that draw or inspect bodies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

/// A body's collision shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape<F: Float> {
    Circle(CircleShape<F>),
    Rectangle(RectangleShape<F>),
}

impl<F: Float> Shape<F> {
    /// Validated circle.
    pub fn circle(radius: F) -> Result<Self, PhysicsError> {
        CircleShape::new(radius).map(Shape::Circle)
    }

    /// Validated rectangle.
    pub fn rectangle(width: F, height: F) -> Result<Self, PhysicsError> {
        RectangleShape::new(Vec2::new(width, height)).map(Shape::Rectangle)
    }

    /// Which variant this is.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    /// Area ("volume" in 2D), used with density to derive mass.
    pub fn area(&self) -> F {
        match self {
            Shape::Circle(c) => c.area(),
            Shape::Rectangle(r) => r.area(),
        }
    }

    /// Moment of inertia about the center for the given mass.
    pub fn rotational_inertia(&self, mass: F) -> F {
        match self {
            Shape::Circle(c) => c.rotational_inertia(mass),
            Shape::Rectangle(r) => r.rotational_inertia(mass),
        }
    }

    /// World-space bounds at `transform`. Recomputed every tick.
    pub fn aabb(&self, transform: &Transform<F>) -> Aabb<F> {
        match self {
            Shape::Circle(c) => Aabb::from_center(transform.position, Vec2::new(c.radius, c.radius)),
            Shape::Rectangle(r) => r.oriented(transform).aabb(),
        }
    }

    /// Exact overlap test against `other`.
    ///
    /// The returned normal points from `self` toward `other`, so swapping the
    /// arguments gives the same depth with the opposite normal.
    pub fn intersect(
        &self,
        transform: &Transform<F>,
        other: &Shape<F>,
        other_transform: &Transform<F>,
    ) -> Option<CollisionManifold<F>> {
        match (self, other) {
            (Shape::Circle(a), Shape::Circle(b)) => {
                intersect_circles(transform.position, a.radius, other_transform.position, b.radius)
            }
            (Shape::Circle(a), Shape::Rectangle(b)) => {
                intersect_circle_rectangle(transform.position, a.radius, &b.oriented(other_transform))
            }
            (Shape::Rectangle(a), Shape::Circle(b)) => {
                intersect_circle_rectangle(other_transform.position, b.radius, &a.oriented(transform))
                    .map(CollisionManifold::flipped)
            }
            (Shape::Rectangle(a), Shape::Rectangle(b)) => {
                intersect_rectangles(&a.oriented(transform), &b.oriented(other_transform))
            }
        }
    }
}

impl<F: Float> From<CircleShape<F>> for Shape<F> {
    fn from(circle: CircleShape<F>) -> Self {
        Shape::Circle(circle)
    }
}

impl<F: Float> From<RectangleShape<F>> for Shape<F> {
    fn from(rect: RectangleShape<F>) -> Self {
        Shape::Rectangle(rect)
    }
}

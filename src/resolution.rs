//! Collision resolution: turning contacts into velocity changes.

use crate::body::RigidBody;
use crate::float::Float;
use crate::manifold::CollisionManifold;
use crate::material::average_friction;
use crate::vec::{Vec, Vec2};

/// One side of a contact: the body and its current center.
pub struct ContactBody<'a, F: Float> {
    pub position: Vec2<F>,
    pub body: &'a mut RigidBody<F>,
}

impl<'a, F: Float> ContactBody<'a, F> {
    /// Body centered at `position`.
    pub fn new(position: Vec2<F>, body: &'a mut RigidBody<F>) -> Self {
        ContactBody { position, body }
    }
}

/// Strategy that applies collision impulses for one manifold.
pub trait CollisionResolutionMethod<F: Float> {
    fn resolve_collision(
        &self,
        manifold: &CollisionManifold<F>,
        first: ContactBody<'_, F>,
        second: ContactBody<'_, F>,
    );
}

/// Sequential impulses with restitution and Coulomb friction.
///
/// Each contact point gets its own normal impulse, split evenly across the
/// manifold's points, followed by a friction impulse clamped by that
/// point's normal impulse.
#[derive(Copy, Clone, Debug, Default)]
pub struct ImpulseMethod;

/// Lever arm and inverse quantities of one body at a contact point.
#[derive(Copy, Clone, Debug)]
struct ImpulseArgs<F: Float> {
    contact_vector: Vec2<F>,
    inverse_mass: F,
    inverse_inertia: F,
}

impl<F: Float> ImpulseArgs<F> {
    fn new(body: &RigidBody<F>, position: Vec2<F>, contact_point: Vec2<F>) -> Self {
        ImpulseArgs {
            contact_vector: contact_point - position,
            inverse_mass: body.inverse_mass(),
            inverse_inertia: body.inverse_inertia(),
        }
    }
}

/// Effective inverse mass of the pair along `direction`.
fn effective_inverse_mass<F: Float>(direction: Vec2<F>, first: &ImpulseArgs<F>, second: &ImpulseArgs<F>) -> F {
    first.inverse_mass
        + second.inverse_mass
        + first.contact_vector.cross(direction).sqr() * first.inverse_inertia
        + second.contact_vector.cross(direction).sqr() * second.inverse_inertia
}

/// Impulse magnitude along `direction` that changes the relative velocity
/// by `-(1 + elasticity)` of its component along it.
pub fn compute_collision_impulse<F: Float>(
    relative_velocity: Vec2<F>,
    direction: Vec2<F>,
    elasticity: F,
    effective_inverse_mass: F,
) -> F {
    -(F::one() + elasticity) * relative_velocity.dot(direction) / effective_inverse_mass
}

fn relative_velocity<F: Float>(
    first: &RigidBody<F>,
    first_args: &ImpulseArgs<F>,
    second: &RigidBody<F>,
    second_args: &ImpulseArgs<F>,
) -> Vec2<F> {
    second.velocity_at(second_args.contact_vector) - first.velocity_at(first_args.contact_vector)
}

impl<F: Float> CollisionResolutionMethod<F> for ImpulseMethod {
    fn resolve_collision(
        &self,
        manifold: &CollisionManifold<F>,
        first: ContactBody<'_, F>,
        second: ContactBody<'_, F>,
    ) {
        let ContactBody { position: first_position, body: first_body } = first;
        let ContactBody { position: second_position, body: second_body } = second;

        let points = manifold.contact_points.as_slice();
        if points.is_empty() {
            return;
        }
        let count = F::from_usize(points.len());

        for &point in points {
            let first_args = ImpulseArgs::new(first_body, first_position, point);
            let second_args = ImpulseArgs::new(second_body, second_position, point);
            self.apply_impulse_in_point(
                manifold.normal,
                count,
                &mut *first_body,
                &first_args,
                &mut *second_body,
                &second_args,
            );
        }
    }
}

impl ImpulseMethod {
    fn apply_impulse_in_point<F: Float>(
        &self,
        normal: Vec2<F>,
        count: F,
        first: &mut RigidBody<F>,
        first_args: &ImpulseArgs<F>,
        second: &mut RigidBody<F>,
        second_args: &ImpulseArgs<F>,
    ) {
        let epsilon = F::from_f32(1e-12);

        let relative = relative_velocity(first, first_args, second, second_args);
        if relative.dot(normal) > F::zero() {
            return; // already separating
        }

        let normal_mass = effective_inverse_mass(normal, first_args, second_args);
        if normal_mass.is_near_zero(epsilon) {
            return;
        }

        let elasticity = first.material().elasticity.min(second.material().elasticity);
        let impulse_scalar = compute_collision_impulse(relative, normal, elasticity, normal_mass);

        let impulse = normal.scale(impulse_scalar / count);
        first.apply_impulse(-impulse, first_args.contact_vector);
        second.apply_impulse(impulse, second_args.contact_vector);

        // Friction sees the velocities after the normal impulse.
        let relative = relative_velocity(first, first_args, second, second_args);
        let tangent = (relative - normal.scale(relative.dot(normal))).normalize();
        if tangent == Vec2::zero() {
            return;
        }

        let tangent_mass = effective_inverse_mass(tangent, first_args, second_args);
        if tangent_mass.is_near_zero(epsilon) {
            return;
        }
        let tangent_scalar = compute_collision_impulse(relative, tangent, F::zero(), tangent_mass);

        let static_friction =
            average_friction(first.material().static_friction, second.material().static_friction);
        let dynamic_friction =
            average_friction(first.material().dynamic_friction, second.material().dynamic_friction);

        let friction_impulse = if tangent_scalar.abs() < impulse_scalar * static_friction {
            tangent.scale(tangent_scalar)
        } else {
            tangent.scale(-impulse_scalar * dynamic_friction)
        };
        let friction_impulse = friction_impulse.scale(F::one() / count);

        first.apply_impulse(-friction_impulse, first_args.contact_vector);
        second.apply_impulse(friction_impulse, second_args.contact_vector);
    }
}

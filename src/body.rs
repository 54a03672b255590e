//! Rigid body state and integration.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::geometry::Transform;
use crate::layer::Layer;
use crate::material::{compute_mass, PhysicMaterial};
use crate::shape::Shape;
use crate::vec::{Vec, Vec2};

/// Standard gravity in m/s^2.
pub const GRAVITY: f32 = 9.80665;

/// How a body's mass is obtained.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MassMode<F: Float> {
    /// `density * area` of the shape.
    ByShape,
    /// Fixed mass, independent of material density.
    Manually(F),
}

/// Construction options for [`RigidBody`].
///
/// # Builder Pattern
/// ```
/// use rigid2d::body::{BodyDesc, MassMode};
/// use rigid2d::layer::Layer;
///
/// let desc: BodyDesc<f32> = BodyDesc::new()
///     .with_mass_mode(MassMode::Manually(2.0))
///     .with_gravity_scale(0.5)
///     .with_layer(Layer(3));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyDesc<F: Float> {
    pub mass_mode: MassMode<F>,
    pub gravity_scale: F,
    pub is_static: bool,
    pub layer: Layer,
}

impl<F: Float> BodyDesc<F> {
    /// Dynamic, mass from shape, full gravity, default layer.
    pub fn new() -> Self {
        BodyDesc {
            mass_mode: MassMode::ByShape,
            gravity_scale: F::one(),
            is_static: false,
            layer: Layer::DEFAULT,
        }
    }

    /// Set how the mass is obtained.
    pub fn with_mass_mode(mut self, mass_mode: MassMode<F>) -> Self {
        self.mass_mode = mass_mode;
        self
    }

    /// Set the multiplier on world gravity.
    pub fn with_gravity_scale(mut self, gravity_scale: F) -> Self {
        self.gravity_scale = gravity_scale;
        self
    }

    /// Make the body immovable.
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Set the collision layer.
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }
}

impl<F: Float> Default for BodyDesc<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Dynamic state of one physics-bearing entity.
///
/// Position and rotation live in the entity's [`Transform`]; methods that
/// need them take it as an argument.
#[derive(Clone, Debug)]
pub struct RigidBody<F: Float> {
    shape: Shape<F>,
    material: PhysicMaterial<F>,
    layer: Layer,
    is_static: bool,
    pub gravity_scale: F,

    pub linear_velocity: Vec2<F>,
    pub angular_velocity: F,

    mass: F,
    inverse_mass: F,
    inertia: F,
    inverse_inertia: F,

    force: Vec2<F>,
    torque: F,
}

impl<F: Float> RigidBody<F> {
    /// Build a body from a shape and material.
    ///
    /// Dynamic bodies must end up with a positive finite mass. Static bodies
    /// skip that check since their inverse mass and inertia are zero anyway.
    pub fn new(shape: Shape<F>, material: PhysicMaterial<F>, desc: &BodyDesc<F>) -> Result<Self, PhysicsError> {
        material.validate()?;

        let mass = match desc.mass_mode {
            MassMode::ByShape => compute_mass(material.density, shape.area()),
            MassMode::Manually(mass) => mass,
        };
        if !desc.is_static && (!mass.is_finite() || mass <= F::zero()) {
            return Err(PhysicsError::InvalidMass);
        }

        let mut body = RigidBody {
            shape,
            material,
            layer: desc.layer,
            is_static: desc.is_static,
            gravity_scale: desc.gravity_scale,
            linear_velocity: Vec2::zero(),
            angular_velocity: F::zero(),
            mass,
            inverse_mass: F::zero(),
            inertia: shape.rotational_inertia(mass),
            inverse_inertia: F::zero(),
            force: Vec2::zero(),
            torque: F::zero(),
        };
        body.update_inverse_quantities();
        Ok(body)
    }

    /// Dynamic body with mass from density and shape area.
    pub fn dynamic(shape: Shape<F>, material: PhysicMaterial<F>) -> Result<Self, PhysicsError> {
        Self::new(shape, material, &BodyDesc::new())
    }

    /// Immovable body that ignores gravity.
    pub fn fixed(shape: Shape<F>, material: PhysicMaterial<F>) -> Result<Self, PhysicsError> {
        Self::new(
            shape,
            material,
            &BodyDesc::new().with_static(true).with_gravity_scale(F::zero()),
        )
    }

    fn update_inverse_quantities(&mut self) {
        if self.is_static {
            self.inverse_mass = F::zero();
            self.inverse_inertia = F::zero();
            self.linear_velocity = Vec2::zero();
            self.angular_velocity = F::zero();
            return;
        }
        self.inverse_mass = F::one() / self.mass;
        self.inverse_inertia = if self.inertia > F::zero() { F::one() / self.inertia } else { F::zero() };
    }

    /// Switch between static and dynamic.
    ///
    /// Turning a massless static body dynamic is refused.
    pub fn set_static(&mut self, is_static: bool) -> Result<(), PhysicsError> {
        if !is_static && (!self.mass.is_finite() || self.mass <= F::zero()) {
            return Err(PhysicsError::InvalidMass);
        }
        self.is_static = is_static;
        self.update_inverse_quantities();
        Ok(())
    }

    /// Change velocity by `impulse`, applied `contact_vector` away from the center.
    pub fn apply_impulse(&mut self, impulse: Vec2<F>, contact_vector: Vec2<F>) {
        if self.is_static {
            return;
        }
        self.linear_velocity += impulse.scale(self.inverse_mass);
        self.angular_velocity = self.angular_velocity + self.inverse_inertia * contact_vector.cross(impulse);
    }

    /// Accumulate a force acting at `world_point` until the next integration.
    pub fn apply_force(&mut self, force: Vec2<F>, world_point: Vec2<F>, transform: &Transform<F>) {
        if self.is_static {
            return;
        }
        self.force += force;
        self.torque = self.torque + (world_point - transform.position).cross(force);
    }

    /// Force through the center of mass; no torque.
    pub fn apply_central_force(&mut self, force: Vec2<F>) {
        if self.is_static {
            return;
        }
        self.force += force;
    }

    /// Accumulate torque until the next integration.
    pub fn apply_torque(&mut self, torque: F) {
        if self.is_static {
            return;
        }
        self.torque = self.torque + torque;
    }

    /// Semi-implicit Euler step: gravity and accumulated forces update the
    /// velocities, which then move the transform.
    pub fn update_body_physic(&mut self, transform: &mut Transform<F>, gravity: Vec2<F>, dt: F) {
        if self.is_static {
            return;
        }

        self.linear_velocity += gravity.scale(self.gravity_scale * dt);
        self.linear_velocity += self.force.scale(self.inverse_mass * dt);
        self.angular_velocity = self.angular_velocity + self.torque * self.inverse_inertia * dt;

        transform.position += self.linear_velocity.scale(dt);
        transform.rotation = transform.rotation + self.angular_velocity * dt;
    }

    /// Nudge the transform out of penetration; lighter bodies move further.
    pub fn correct_contact_position(&self, transform: &mut Transform<F>, correction: Vec2<F>) {
        if self.is_static {
            return;
        }
        transform.position += correction.scale(self.inverse_mass);
    }

    /// Clear accumulated force and torque.
    pub fn reset_forces(&mut self) {
        self.force = Vec2::zero();
        self.torque = F::zero();
    }

    /// Collision shape.
    pub fn shape(&self) -> &Shape<F> { &self.shape }
    /// Surface and density properties.
    pub fn material(&self) -> &PhysicMaterial<F> { &self.material }
    /// Collision layer.
    pub fn layer(&self) -> Layer { self.layer }
    /// Move the body to another collision layer.
    pub fn set_layer(&mut self, layer: Layer) { self.layer = layer; }
    /// Whether the body ignores forces and impulses.
    pub fn is_static(&self) -> bool { self.is_static }
    /// Mass in kilograms.
    pub fn mass(&self) -> F { self.mass }
    /// `1 / mass`, zero for static bodies.
    pub fn inverse_mass(&self) -> F { self.inverse_mass }
    /// Moment of inertia about the center.
    pub fn inertia(&self) -> F { self.inertia }
    /// `1 / inertia`, zero for static bodies.
    pub fn inverse_inertia(&self) -> F { self.inverse_inertia }
    /// Force accumulated since the last reset.
    pub fn force(&self) -> Vec2<F> { self.force }
    /// Torque accumulated since the last reset.
    pub fn torque(&self) -> F { self.torque }

    /// Velocity of the body's material at `contact_vector` from its center.
    pub fn velocity_at(&self, contact_vector: Vec2<F>) -> Vec2<F> {
        self.linear_velocity + Vec2::cross_scalar(self.angular_velocity, contact_vector)
    }
}

/// `GRAVITY` pointing down in the given precision.
pub fn default_gravity<F: Float>() -> Vec2<F> {
    Vec2::down().scale(F::from_f32(GRAVITY))
}

//! Surface and bulk properties of a body, plus the mass helpers built on them.

use crate::error::PhysicsError;
use crate::float::Float;

/// Immutable description of what a body is made of.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicMaterial<F: Float> {
    pub density: F,
    pub static_friction: F,
    pub dynamic_friction: F,
    /// Restitution in [0, 1]; 1 keeps all relative normal velocity.
    pub elasticity: F,
}

impl<F: Float> PhysicMaterial<F> {
    /// Validated material.
    pub fn new(density: F, static_friction: F, dynamic_friction: F, elasticity: F) -> Result<Self, PhysicsError> {
        let material = PhysicMaterial { density, static_friction, dynamic_friction, elasticity };
        material.validate()?;
        Ok(material)
    }

    /// Check density and frictions are non-negative and elasticity is in `[0, 1]`.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.density.is_finite() || self.density < F::zero() {
            return Err(PhysicsError::InvalidMaterial { field: "density" });
        }
        if !self.static_friction.is_finite() || self.static_friction < F::zero() {
            return Err(PhysicsError::InvalidMaterial { field: "static_friction" });
        }
        if !self.dynamic_friction.is_finite() || self.dynamic_friction < F::zero() {
            return Err(PhysicsError::InvalidMaterial { field: "dynamic_friction" });
        }
        if !self.elasticity.is_finite() || self.elasticity < F::zero() || self.elasticity > F::one() {
            return Err(PhysicsError::InvalidMaterial { field: "elasticity" });
        }
        Ok(())
    }

    /// Cast iron: heavy, slightly bouncy.
    pub fn iron() -> Self {
        PhysicMaterial {
            density: F::from_f32(7874.0),
            static_friction: F::from_f32(0.15),
            dynamic_friction: F::from_f32(0.1),
            elasticity: F::from_f32(0.6),
        }
    }

    /// Light, grippy and slightly bouncy.
    pub fn wood() -> Self {
        PhysicMaterial {
            density: F::from_f32(700.0),
            static_friction: F::from_f32(0.5),
            dynamic_friction: F::from_f32(0.3),
            elasticity: F::from_f32(0.2),
        }
    }

    /// Unit density, no friction, perfectly elastic.
    pub fn frictionless_elastic() -> Self {
        PhysicMaterial {
            density: F::one(),
            static_friction: F::zero(),
            dynamic_friction: F::zero(),
            elasticity: F::one(),
        }
    }
}

impl<F: Float> Default for PhysicMaterial<F> {
    fn default() -> Self {
        PhysicMaterial {
            density: F::one(),
            static_friction: F::from_f32(0.5),
            dynamic_friction: F::from_f32(0.3),
            elasticity: F::zero(),
        }
    }
}

/// `density * area`.
pub fn compute_mass<F: Float>(density: F, area: F) -> F {
    density * area
}

/// `mass / density`.
pub fn compute_volume<F: Float>(mass: F, density: F) -> F {
    mass / density
}

/// `mass / volume`.
pub fn compute_density<F: Float>(mass: F, volume: F) -> F {
    mass / volume
}

/// Combined friction coefficient of two touching surfaces: `sqrt(a^2 + b^2)`.
pub fn average_friction<F: Float>(first: F, second: F) -> F {
    (first.sqr() + second.sqr()).sqrt()
}

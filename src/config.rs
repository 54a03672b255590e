//! Configuration for the physics world.

use crate::body::default_gravity;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// Tuning values for [`PhysicWorld`](crate::world::PhysicWorld).
///
/// # Builder Pattern
/// ```
/// use rigid2d::config::WorldConfig;
/// use rigid2d::vec::Vec2;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_gravity(Vec2::new(0.0, -20.0))
///     .with_allowance_depth(0.01)
///     .with_correct_percent(0.4)
///     .with_fixed_delta_time(1.0 / 60.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig<F: Float> {
    /// Gravity acceleration, scaled per body. Default: 9.80665 down.
    pub gravity: Vec2<F>,
    /// Penetration left alone by positional correction. Default: 0.05.
    pub allowance_depth: F,
    /// Fraction of the remaining penetration removed per tick. Default: 0.5.
    pub correct_percent: F,
    /// Length of one physics tick in seconds. Default: 1/30.
    pub fixed_delta_time: F,
    /// Upper bound on ticks run by one `update` call. Default: 8.
    pub max_steps_per_update: usize,
}

impl<F: Float> WorldConfig<F> {
    /// Create config with default values.
    pub fn new() -> Self {
        WorldConfig {
            gravity: default_gravity(),
            allowance_depth: F::from_f32(0.05),
            correct_percent: F::half(),
            fixed_delta_time: F::one() / F::from_f32(30.0),
            max_steps_per_update: 8,
        }
    }

    /// Set gravity acceleration.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the penetration left alone by correction.
    pub fn with_allowance_depth(mut self, allowance_depth: F) -> Self {
        self.allowance_depth = allowance_depth;
        self
    }

    /// Set the fraction of penetration removed per tick.
    pub fn with_correct_percent(mut self, correct_percent: F) -> Self {
        self.correct_percent = correct_percent;
        self
    }

    /// Set the tick length in seconds.
    pub fn with_fixed_delta_time(mut self, fixed_delta_time: F) -> Self {
        self.fixed_delta_time = fixed_delta_time;
        self
    }

    /// Set the tick cap per `update` call (at least 1).
    pub fn with_max_steps_per_update(mut self, max_steps: usize) -> Self {
        self.max_steps_per_update = max_steps.max(1);
        self
    }

    /// Check every value is finite and in range.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidConfig { field: "gravity" });
        }
        if !self.allowance_depth.is_finite() || self.allowance_depth < F::zero() {
            return Err(PhysicsError::InvalidConfig { field: "allowance_depth" });
        }
        if !self.correct_percent.is_finite()
            || self.correct_percent < F::zero()
            || self.correct_percent > F::one()
        {
            return Err(PhysicsError::InvalidConfig { field: "correct_percent" });
        }
        if !self.fixed_delta_time.is_finite() || self.fixed_delta_time <= F::zero() {
            return Err(PhysicsError::InvalidTimestep);
        }
        Ok(())
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

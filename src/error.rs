//! Error types for physics operations.

/// Errors reported while building shapes, bodies or the world.
///
/// A running tick never fails; everything that could poison the solver with
/// NaNs is rejected here instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite")]
    InvalidMass,
    /// Circle radius must be positive and finite.
    #[error("circle radius must be positive and finite")]
    InvalidRadius,
    /// Rectangle sides must be positive and finite.
    #[error("rectangle size must be positive and finite on both axes")]
    InvalidSize,
    /// A material coefficient is out of range.
    #[error("material {field} is out of range")]
    InvalidMaterial { field: &'static str },
    /// Fixed time step must be positive and finite.
    #[error("fixed time step must be positive and finite")]
    InvalidTimestep,
    /// A world configuration value is out of range.
    #[error("world config {field} is out of range")]
    InvalidConfig { field: &'static str },
}

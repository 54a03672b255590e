//! Hooks into the phases of a physics tick.

use crate::float::Float;
use crate::manifold::Contact;

/// Trait for observing physics ticks.
///
/// Implement this trait for debug overlays, profiling or tests that need to
/// see inside a tick. All methods have default no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after the broad phase with the number of unique candidate pairs.
    fn on_broad_phase(&mut self, _candidates: usize) {}

    /// Called for each contact found by the narrow phase, before resolution.
    fn on_contact(&mut self, _contact: &Contact<F>) {}

    /// Called after every body has been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a tick is fully complete.
    fn on_step_complete(&mut self, _contacts: &[Contact<F>]) {}
}

/// Observer used by [`PhysicWorld::step`](crate::world::PhysicWorld::step).
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

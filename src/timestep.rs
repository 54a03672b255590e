//! Fixed-timestep accumulator that drives physics ticks from frame time.

use crate::error::PhysicsError;
use crate::float::Float;

/// Accrues real elapsed time and hands it out in fixed-size steps.
///
/// ```
/// use rigid2d::timestep::FixedTimestep;
///
/// let mut clock = FixedTimestep::new(0.1f32).unwrap();
/// clock.advance(0.25);
/// let mut ticks = 0;
/// while clock.next_step() {
///     ticks += 1;
/// }
/// assert_eq!(ticks, 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedTimestep<F: Float> {
    step: F,
    lag: F,
    max_steps: Option<usize>,
    // Ticks still due after the lag was capped. Counted rather than read
    // back from `lag`, which drifts below a whole step under subtraction.
    capped_steps: usize,
}

impl<F: Float> FixedTimestep<F> {
    /// Accumulator for ticks of `step` seconds, with no lag cap.
    pub fn new(step: F) -> Result<Self, PhysicsError> {
        if !step.is_finite() || step <= F::zero() {
            return Err(PhysicsError::InvalidTimestep);
        }
        Ok(FixedTimestep { step, lag: F::zero(), max_steps: None, capped_steps: 0 })
    }

    /// Cap the lag at `max_steps` steps; older time is dropped.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps.max(1));
        self
    }

    /// Length of one tick in seconds.
    pub fn step(&self) -> F {
        self.step
    }

    /// Time accrued but not yet handed out as ticks.
    pub fn lag(&self) -> F {
        self.lag
    }

    /// Add real elapsed time. Negative or non-finite input is ignored.
    pub fn advance(&mut self, elapsed: F) {
        if !elapsed.is_finite() || elapsed <= F::zero() {
            return;
        }
        self.lag = self.lag + elapsed;
        if let Some(max_steps) = self.max_steps {
            let max_lag = self.step * F::from_usize(max_steps);
            if self.lag > max_lag {
                log::warn!("physics is falling behind, dropping {:?}s of lag", self.lag - max_lag);
                self.lag = max_lag;
                self.capped_steps = max_steps;
            }
        }
    }

    /// Consume one step if enough lag has built up.
    pub fn next_step(&mut self) -> bool {
        if self.capped_steps > 0 {
            self.capped_steps -= 1;
            self.lag = (self.lag - self.step).max(F::zero());
            return true;
        }
        if self.lag >= self.step {
            self.lag = self.lag - self.step;
            true
        } else {
            false
        }
    }

    /// Fraction of a step left over, for render interpolation.
    pub fn alpha(&self) -> F {
        self.lag / self.step
    }

    /// Drop all accrued time.
    pub fn reset(&mut self) {
        self.lag = F::zero();
        self.capped_steps = 0;
    }
}

//! The physics world: one fixed tick of detection, resolution and integration.

use crate::body::RigidBody;
use crate::config::WorldConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::geometry::{Aabb, Transform};
use crate::layer::PhysicLayerSystem;
use crate::manifold::Contact;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::resolution::{CollisionResolutionMethod, ContactBody, ImpulseMethod};
use crate::timestep::FixedTimestep;
use crate::vec::Vec;
use alloc::collections::BTreeSet;
use alloc::vec::Vec as AllocVec;

/// What the world needs from a host entity.
///
/// Entities without a rigid body are skipped by every phase.
pub trait PhysicEntity<F: Float> {
    fn transform(&self) -> &Transform<F>;

    fn transform_mut(&mut self) -> &mut Transform<F>;

    fn rigid_body(&self) -> Option<&RigidBody<F>>;

    fn rigid_body_mut(&mut self) -> Option<&mut RigidBody<F>>;

    /// Body and transform borrowed together, for phases that move the body.
    fn physics_mut(&mut self) -> Option<(&mut RigidBody<F>, &mut Transform<F>)>;

    fn has_physics(&self) -> bool {
        self.rigid_body().is_some()
    }
}

/// Minimal entity: a transform and an optional body.
#[derive(Clone, Debug)]
pub struct PhysicObject<F: Float> {
    pub transform: Transform<F>,
    pub body: Option<RigidBody<F>>,
}

impl<F: Float> PhysicObject<F> {
    /// Entity carrying `body`.
    pub fn new(transform: Transform<F>, body: RigidBody<F>) -> Self {
        PhysicObject { transform, body: Some(body) }
    }

    /// Entity the world skips.
    pub fn without_body(transform: Transform<F>) -> Self {
        PhysicObject { transform, body: None }
    }
}

impl<F: Float> PhysicEntity<F> for PhysicObject<F> {
    fn transform(&self) -> &Transform<F> {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform<F> {
        &mut self.transform
    }

    fn rigid_body(&self) -> Option<&RigidBody<F>> {
        self.body.as_ref()
    }

    fn rigid_body_mut(&mut self) -> Option<&mut RigidBody<F>> {
        self.body.as_mut()
    }

    fn physics_mut(&mut self) -> Option<(&mut RigidBody<F>, &mut Transform<F>)> {
        let transform = &mut self.transform;
        self.body.as_mut().map(|body| (body, transform))
    }
}

/// Runs physics ticks over a host-owned slice of entities.
///
/// The world keeps no entity state between ticks apart from the contacts of
/// the last tick, which are exposed for debug drawing. Iteration follows the
/// slice order, so identical input gives identical output.
pub struct PhysicWorld<F: Float, R: CollisionResolutionMethod<F> = ImpulseMethod> {
    config: WorldConfig<F>,
    layers: PhysicLayerSystem,
    resolution: R,
    clock: FixedTimestep<F>,

    // Per-tick scratch, cleared at the start of every tick.
    bodies: AllocVec<usize>,
    bounds: AllocVec<Aabb<F>>,
    pair_cache: BTreeSet<(usize, usize)>,
    candidates: AllocVec<(usize, usize)>,
    contacts: AllocVec<Contact<F>>,
}

impl<F: Float> PhysicWorld<F, ImpulseMethod> {
    /// World resolving contacts with [`ImpulseMethod`].
    pub fn new(config: WorldConfig<F>, layers: PhysicLayerSystem) -> Result<Self, PhysicsError> {
        Self::with_resolution_method(config, layers, ImpulseMethod)
    }
}

impl<F: Float, R: CollisionResolutionMethod<F>> PhysicWorld<F, R> {
    /// World resolving contacts with a custom method.
    pub fn with_resolution_method(
        config: WorldConfig<F>,
        layers: PhysicLayerSystem,
        resolution: R,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        let clock = FixedTimestep::new(config.fixed_delta_time)?.with_max_steps(config.max_steps_per_update);
        Ok(PhysicWorld {
            config,
            layers,
            resolution,
            clock,
            bodies: AllocVec::new(),
            bounds: AllocVec::new(),
            pair_cache: BTreeSet::new(),
            candidates: AllocVec::new(),
            contacts: AllocVec::new(),
        })
    }

    /// Feed real elapsed time and run as many fixed ticks as it pays for.
    /// Returns the number of ticks run.
    pub fn update<E: PhysicEntity<F>>(&mut self, entities: &mut [E], elapsed: F) -> usize {
        self.clock.advance(elapsed);
        let mut ticks = 0;
        while self.clock.next_step() {
            self.step(entities);
            ticks += 1;
        }
        ticks
    }

    /// One fixed tick of `config.fixed_delta_time`.
    pub fn step<E: PhysicEntity<F>>(&mut self, entities: &mut [E]) {
        self.step_with_observer(entities, &mut NoOpStepObserver);
    }

    /// One fixed tick, reporting each phase to `observer`.
    pub fn step_with_observer<E: PhysicEntity<F>, O: StepObserver<F>>(
        &mut self,
        entities: &mut [E],
        observer: &mut O,
    ) {
        self.gather(entities);
        self.broad_phase(entities);
        observer.on_broad_phase(self.candidates.len());

        self.narrow_phase(entities, observer);
        self.resolve(entities);

        let dt = self.config.fixed_delta_time;
        let gravity = self.config.gravity;
        for &index in &self.bodies {
            if let Some((body, transform)) = entities[index].physics_mut() {
                body.update_body_physic(transform, gravity, dt);
            }
        }
        observer.on_integrate();

        self.correct_positions(entities);

        for &index in &self.bodies {
            if let Some(body) = entities[index].rigid_body_mut() {
                body.reset_forces();
            }
        }

        log::debug!(
            "physics tick: {} bodies, {} candidate pairs, {} contacts",
            self.bodies.len(),
            self.candidates.len(),
            self.contacts.len()
        );
        observer.on_step_complete(&self.contacts);
    }

    fn gather<E: PhysicEntity<F>>(&mut self, entities: &[E]) {
        self.bodies.clear();
        self.bounds.clear();
        for (index, entity) in entities.iter().enumerate() {
            if let Some(body) = entity.rigid_body() {
                self.bodies.push(index);
                self.bounds.push(body.shape().aabb(entity.transform()));
            }
        }
    }

    /// Ordered pairs with overlapping bounds, at least one dynamic body and
    /// colliding layers. Each unordered pair is kept once, first seen wins.
    fn broad_phase<E: PhysicEntity<F>>(&mut self, entities: &[E]) {
        self.pair_cache.clear();
        self.candidates.clear();

        for (slot_a, &a) in self.bodies.iter().enumerate() {
            for (slot_b, &b) in self.bodies.iter().enumerate() {
                if a == b {
                    continue;
                }
                let (Some(body_a), Some(body_b)) = (entities[a].rigid_body(), entities[b].rigid_body()) else {
                    continue;
                };
                if body_a.is_static() && body_b.is_static() {
                    continue;
                }
                if !self.bounds[slot_a].intersects(&self.bounds[slot_b]) {
                    continue;
                }
                if !self.layers.layers_colliding(body_a.layer(), body_b.layer()) {
                    continue;
                }
                if self.pair_cache.insert((a.min(b), a.max(b))) {
                    self.candidates.push((a, b));
                }
            }
        }
    }

    fn narrow_phase<E: PhysicEntity<F>, O: StepObserver<F>>(&mut self, entities: &[E], observer: &mut O) {
        self.contacts.clear();
        for &(a, b) in &self.candidates {
            let (Some(body_a), Some(body_b)) = (entities[a].rigid_body(), entities[b].rigid_body()) else {
                continue;
            };
            let manifold = body_a
                .shape()
                .intersect(entities[a].transform(), body_b.shape(), entities[b].transform());
            if let Some(manifold) = manifold {
                log::trace!("contact {} -> {}: depth {:?}", a, b, manifold.depth);
                let contact = Contact::new(a, b, manifold);
                observer.on_contact(&contact);
                self.contacts.push(contact);
            }
        }
    }

    fn resolve<E: PhysicEntity<F>>(&mut self, entities: &mut [E]) {
        for contact in &self.contacts {
            let (first, second) = pair_mut(entities, contact.first, contact.second);
            let (Some((first_body, first_tf)), Some((second_body, second_tf))) =
                (first.physics_mut(), second.physics_mut())
            else {
                continue;
            };
            self.resolution.resolve_collision(
                &contact.manifold,
                ContactBody::new(first_tf.position, first_body),
                ContactBody::new(second_tf.position, second_body),
            );
        }
    }

    /// Push penetrating pairs apart along the normal, in proportion to
    /// inverse mass, leaving `allowance_depth` of overlap alone.
    fn correct_positions<E: PhysicEntity<F>>(&mut self, entities: &mut [E]) {
        let allowance = self.config.allowance_depth;
        let percent = self.config.correct_percent;

        for contact in &self.contacts {
            let (first, second) = pair_mut(entities, contact.first, contact.second);
            let (Some((first_body, first_tf)), Some((second_body, second_tf))) =
                (first.physics_mut(), second.physics_mut())
            else {
                continue;
            };

            let inverse_mass_sum = first_body.inverse_mass() + second_body.inverse_mass();
            if inverse_mass_sum <= F::zero() {
                continue;
            }

            let depth = (contact.manifold.depth - allowance).max(F::zero());
            let correction = contact.manifold.normal.scale(depth / inverse_mass_sum * percent);

            first_body.correct_contact_position(first_tf, -correction);
            second_body.correct_contact_position(second_tf, correction);
        }
    }

    /// Contacts found by the last tick.
    pub fn contacts(&self) -> &[Contact<F>] {
        &self.contacts
    }

    /// Unique candidate pairs of the last tick's broad phase.
    pub fn candidate_pairs(&self) -> &[(usize, usize)] {
        &self.candidates
    }

    /// Tuning values in use.
    pub fn config(&self) -> &WorldConfig<F> {
        &self.config
    }

    /// Collision layer table.
    pub fn layers(&self) -> &PhysicLayerSystem {
        &self.layers
    }

    /// Accumulator driving `update`.
    pub fn clock(&self) -> &FixedTimestep<F> {
        &self.clock
    }

    /// Strategy applying collision impulses.
    pub fn resolution_method(&self) -> &R {
        &self.resolution
    }
}

/// Two distinct elements of a slice, borrowed mutably at once.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

//! 2D rigid-body physics for games.
//!
//! `rigid2d` detects and resolves collisions between circles and oriented
//! rectangles. Each fixed tick runs a broad phase over bounding boxes, exact
//! narrow-phase tests that build contact manifolds, sequential impulses with
//! restitution and friction, semi-implicit Euler integration and positional
//! correction.
//!
//! # Features
//!
//! - **Shapes**: circles and oriented rectangles, SAT with edge clipping for
//!   box-box contact points
//! - **Impulse solver**: restitution, static/dynamic Coulomb friction,
//!   angular response; swappable via `CollisionResolutionMethod`
//! - **Layers**: named collision layers with a directional collision table
//! - **Host-owned entities**: the world works on any slice of `PhysicEntity`
//! - **Observable**: Monitor ticks via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! ```
//! use rigid2d::*;
//!
//! let ground = RigidBody::fixed(Shape::rectangle(20.0f32, 1.0).unwrap(), PhysicMaterial::iron()).unwrap();
//! let ball = RigidBody::dynamic(Shape::circle(0.5).unwrap(), PhysicMaterial::wood()).unwrap();
//!
//! let mut entities = vec![
//!     PhysicObject::new(Transform::from_position(Vec2::new(0.0, 0.0)), ground),
//!     PhysicObject::new(Transform::from_position(Vec2::new(0.0, 3.0)), ball),
//! ];
//!
//! let mut world = PhysicWorld::new(WorldConfig::new(), PhysicLayerSystem::default()).unwrap();
//! for _ in 0..30 {
//!     world.step(&mut entities);
//! }
//! assert!(entities[1].transform.position.y < 3.0);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod geometry;
pub mod manifold;
pub mod collision;
pub mod shape;
pub mod material;
pub mod body;
pub mod layer;
pub mod resolution;
pub mod world;
pub mod timestep;
pub mod observer;
pub mod config;
pub mod error;

pub use float::Float;
pub use vec::{Vec, Vec2};
pub use geometry::{Aabb, Edge, OrientedRectangle, Transform};
pub use manifold::{CollisionManifold, Contact, ContactPoints};
pub use shape::{CircleShape, RectangleShape, Shape, ShapeKind};
pub use material::PhysicMaterial;
pub use body::{BodyDesc, MassMode, RigidBody, GRAVITY};
pub use layer::{ConcreteLayer, Layer, LayerCollisionSetting, PhysicLayerSystem};
pub use resolution::{CollisionResolutionMethod, ContactBody, ImpulseMethod};
pub use world::{PhysicEntity, PhysicObject, PhysicWorld};
pub use timestep::FixedTimestep;
pub use config::WorldConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;

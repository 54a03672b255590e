use rigid2d::{FixedTimestep, PhysicLayerSystem, PhysicMaterial, PhysicObject, PhysicWorld, RigidBody, Shape, Transform, WorldConfig};

fn drain(clock: &mut FixedTimestep<f32>) -> usize {
    let mut ticks = 0;
    while clock.next_step() {
        ticks += 1;
    }
    ticks
}

#[test]
fn long_stall_runs_exactly_the_capped_ticks() {
    let mut clock = FixedTimestep::new(0.1f32).unwrap().with_max_steps(8);
    clock.advance(5.0);
    assert!(clock.lag() <= 0.8 + 1e-6, "lag was not capped: {}", clock.lag());

    assert_eq!(drain(&mut clock), 8);
    let alpha = clock.alpha();
    assert!((0.0..0.01).contains(&alpha), "alpha = {}", alpha);
}

#[test]
fn capped_clock_keeps_running_normally_afterwards() {
    let mut clock = FixedTimestep::new(0.1f32).unwrap().with_max_steps(3);
    clock.advance(10.0);
    assert_eq!(drain(&mut clock), 3);

    clock.advance(0.25);
    assert_eq!(drain(&mut clock), 2);
    assert!((clock.alpha() - 0.5).abs() < 1e-3, "alpha = {}", clock.alpha());
}

#[test]
fn alpha_reports_leftover_fraction() {
    let mut clock = FixedTimestep::new(0.25f32).unwrap();
    clock.advance(0.625);
    assert_eq!(drain(&mut clock), 2);
    assert!((clock.alpha() - 0.5).abs() < 1e-6);

    clock.reset();
    assert_eq!(clock.alpha(), 0.0);
    assert!(!clock.next_step());
}

#[test]
fn invalid_steps_and_elapsed_are_rejected() {
    assert!(FixedTimestep::new(0.0f32).is_err());
    assert!(FixedTimestep::new(f32::NAN).is_err());

    let mut clock = FixedTimestep::new(0.1f32).unwrap();
    clock.advance(-1.0);
    clock.advance(f32::INFINITY);
    assert_eq!(clock.lag(), 0.0);
}

#[test]
fn world_update_honors_max_steps_per_update() {
    let ball = RigidBody::dynamic(Shape::circle(0.5f32).unwrap(), PhysicMaterial::default()).unwrap();
    let mut entities = vec![PhysicObject::new(Transform::default(), ball)];
    let config = WorldConfig::new().with_fixed_delta_time(0.1).with_max_steps_per_update(8);
    let mut world = PhysicWorld::new(config, PhysicLayerSystem::default()).unwrap();

    assert_eq!(world.update(&mut entities, 5.0), 8);
    assert!(world.clock().alpha() < 0.01);
    assert_eq!(world.update(&mut entities, 0.1), 1);
}

use rigid2d::{BodyDesc, MassMode, PhysicMaterial, PhysicsError, RigidBody, Shape, Transform, Vec2};

fn material(density: f32) -> PhysicMaterial<f32> {
    PhysicMaterial::new(density, 0.5, 0.3, 0.2).unwrap()
}

#[test]
fn mass_from_density_and_area() {
    let body = RigidBody::dynamic(Shape::rectangle(2.0f32, 3.0).unwrap(), material(4.0)).unwrap();
    assert!((body.mass() - 24.0).abs() < 1e-5);
    assert!((body.inverse_mass() - 1.0 / 24.0).abs() < 1e-7);
    let expected_inertia = 24.0 * (4.0 + 9.0) / 12.0;
    assert!((body.inertia() - expected_inertia).abs() < 1e-4);
    assert!((body.inverse_inertia() - 1.0 / expected_inertia).abs() < 1e-7);
}

#[test]
fn manual_mass_ignores_density() {
    let desc = BodyDesc::new().with_mass_mode(MassMode::Manually(2.0f32));
    let body = RigidBody::new(Shape::circle(1.0).unwrap(), material(1000.0), &desc).unwrap();
    assert_eq!(body.mass(), 2.0);
    assert!((body.inertia() - 1.0).abs() < 1e-6);
}

#[test]
fn non_positive_mass_is_rejected() {
    for mass in [0.0f32, -1.0, f32::NAN, f32::INFINITY] {
        let desc = BodyDesc::new().with_mass_mode(MassMode::Manually(mass));
        let result = RigidBody::new(Shape::circle(1.0).unwrap(), material(1.0), &desc);
        assert_eq!(result.err(), Some(PhysicsError::InvalidMass), "mass {}", mass);
    }

    let weightless = RigidBody::dynamic(Shape::circle(1.0f32).unwrap(), material(0.0));
    assert_eq!(weightless.err(), Some(PhysicsError::InvalidMass));
}

#[test]
fn massless_static_body_is_allowed() {
    let body = RigidBody::fixed(Shape::rectangle(10.0f32, 1.0).unwrap(), material(0.0)).unwrap();
    assert!(body.is_static());
    assert_eq!(body.inverse_mass(), 0.0);
    assert_eq!(body.inverse_inertia(), 0.0);
}

#[test]
fn degenerate_shapes_are_rejected() {
    assert_eq!(Shape::circle(0.0f32).err(), Some(PhysicsError::InvalidRadius));
    assert_eq!(Shape::circle(-2.0f32).err(), Some(PhysicsError::InvalidRadius));
    assert_eq!(Shape::rectangle(0.0f32, 1.0).err(), Some(PhysicsError::InvalidSize));
    assert_eq!(Shape::rectangle(1.0f32, f32::NAN).err(), Some(PhysicsError::InvalidSize));
}

#[test]
fn invalid_material_is_rejected() {
    let err = PhysicMaterial::new(1.0f32, 0.5, 0.3, 1.5).err();
    assert_eq!(err, Some(PhysicsError::InvalidMaterial { field: "elasticity" }));
    let err = PhysicMaterial::new(-1.0f32, 0.5, 0.3, 0.5).err();
    assert_eq!(err, Some(PhysicsError::InvalidMaterial { field: "density" }));
}

#[test]
fn impulse_changes_linear_and_angular_velocity() {
    let desc = BodyDesc::new().with_mass_mode(MassMode::Manually(2.0f32));
    let mut body = RigidBody::new(Shape::circle(1.0).unwrap(), material(1.0), &desc).unwrap();

    body.apply_impulse(Vec2::new(0.0, 4.0), Vec2::new(1.0, 0.0));
    assert!((body.linear_velocity.y - 2.0).abs() < 1e-6);
    // inertia = 2 * 1 / 2 = 1, cross((1,0),(0,4)) = 4
    assert!((body.angular_velocity - 4.0).abs() < 1e-6);
}

#[test]
fn static_body_ignores_forces_and_impulses() {
    let mut body = RigidBody::fixed(Shape::circle(1.0f32).unwrap(), material(1.0)).unwrap();
    let mut transform = Transform::new(Vec2::new(3.0, 4.0), 0.5);
    let before = transform;

    body.apply_impulse(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0));
    body.apply_force(Vec2::new(50.0, 0.0), Vec2::new(3.0, 5.0), &transform);
    body.apply_torque(10.0);
    body.update_body_physic(&mut transform, Vec2::new(0.0, -9.8), 1.0 / 30.0);
    body.correct_contact_position(&mut transform, Vec2::new(1.0, 1.0));

    assert_eq!(transform, before);
    assert_eq!(body.linear_velocity, Vec2::new(0.0, 0.0));
    assert_eq!(body.angular_velocity, 0.0);
}

#[test]
fn force_off_center_accumulates_torque() {
    let desc = BodyDesc::new().with_mass_mode(MassMode::Manually(1.0f32));
    let mut body = RigidBody::new(Shape::circle(1.0).unwrap(), material(1.0), &desc).unwrap();
    let transform = Transform::from_position(Vec2::new(1.0, 1.0));

    body.apply_force(Vec2::new(0.0, 2.0), Vec2::new(2.0, 1.0), &transform);
    body.apply_force(Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), &transform);
    assert_eq!(body.force(), Vec2::new(1.0, 2.0));
    assert!((body.torque() - 2.0).abs() < 1e-6);

    body.reset_forces();
    assert_eq!(body.force(), Vec2::new(0.0, 0.0));
    assert_eq!(body.torque(), 0.0);
}

#[test]
fn semi_implicit_euler_uses_updated_velocity() {
    let desc = BodyDesc::new()
        .with_mass_mode(MassMode::Manually(2.0f32))
        .with_gravity_scale(0.5);
    let mut body = RigidBody::new(Shape::circle(1.0).unwrap(), material(1.0), &desc).unwrap();
    let mut transform = Transform::default();
    let dt = 0.1;

    body.apply_central_force(Vec2::new(4.0, 0.0));
    body.apply_torque(1.0);
    body.update_body_physic(&mut transform, Vec2::new(0.0, -10.0), dt);

    // v.x = 4 / 2 * 0.1, v.y = -10 * 0.5 * 0.1
    assert!((body.linear_velocity.x - 0.2).abs() < 1e-6);
    assert!((body.linear_velocity.y + 0.5).abs() < 1e-6);
    assert!((transform.position.x - 0.02).abs() < 1e-6);
    assert!((transform.position.y + 0.05).abs() < 1e-6);
    // inertia = 1, w = 0.1, rotation = 0.01
    assert!((transform.rotation - 0.01).abs() < 1e-6);
}

#[test]
fn lighter_body_is_corrected_further() {
    let light = RigidBody::new(
        Shape::circle(1.0f32).unwrap(),
        material(1.0),
        &BodyDesc::new().with_mass_mode(MassMode::Manually(1.0)),
    )
    .unwrap();
    let heavy = RigidBody::new(
        Shape::circle(1.0f32).unwrap(),
        material(1.0),
        &BodyDesc::new().with_mass_mode(MassMode::Manually(4.0)),
    )
    .unwrap();

    let mut light_tf = Transform::default();
    let mut heavy_tf = Transform::default();
    light.correct_contact_position(&mut light_tf, Vec2::new(1.0, 0.0));
    heavy.correct_contact_position(&mut heavy_tf, Vec2::new(1.0, 0.0));

    assert!((light_tf.position.x - 1.0).abs() < 1e-6);
    assert!((heavy_tf.position.x - 0.25).abs() < 1e-6);
}

#[test]
fn toggling_static_rederives_inverse_quantities() {
    let mut body = RigidBody::dynamic(Shape::circle(1.0f32).unwrap(), material(1.0)).unwrap();
    body.linear_velocity = Vec2::new(1.0, 1.0);

    body.set_static(true).unwrap();
    assert_eq!(body.inverse_mass(), 0.0);
    assert_eq!(body.linear_velocity, Vec2::new(0.0, 0.0));

    body.set_static(false).unwrap();
    assert!((body.inverse_mass() - 1.0 / std::f32::consts::PI).abs() < 1e-6);

    let mut ground = RigidBody::fixed(Shape::circle(1.0f32).unwrap(), material(0.0)).unwrap();
    assert_eq!(ground.set_static(false).err(), Some(PhysicsError::InvalidMass));
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rigid2d::{Aabb, PhysicLayerSystem, PhysicMaterial, PhysicObject, PhysicWorld, RigidBody, Shape, Transform, Vec2, WorldConfig};

fn random_box(rng: &mut StdRng) -> Aabb<f32> {
    let min = Vec2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
    let size = Vec2::new(rng.gen_range(0.1..5.0), rng.gen_range(0.1..5.0));
    Aabb::new(min, min + size)
}

fn intervals_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_min < b_max && b_min < a_max
}

#[test]
fn aabb_overlap_matches_interval_test() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let a = random_box(&mut rng);
        let b = random_box(&mut rng);
        let expected = intervals_overlap(a.min.x, a.max.x, b.min.x, b.max.x)
            && intervals_overlap(a.min.y, a.max.y, b.min.y, b.max.y);
        assert_eq!(a.intersects(&b), expected, "{:?} vs {:?}", a, b);
        assert_eq!(a.intersects(&b), b.intersects(&a));
    }
}

#[test]
fn touching_boxes_do_not_overlap() {
    let a = Aabb::new(Vec2::new(0.0f32, 0.0), Vec2::new(1.0, 1.0));
    let b = Aabb::new(Vec2::new(1.0f32, 0.0), Vec2::new(2.0, 1.0));
    assert!(!a.intersects(&b));
}

#[test]
fn candidates_are_unique_and_overlapping() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut entities: Vec<PhysicObject<f32>> = (0..40)
        .map(|_| {
            let shape = Shape::circle(rng.gen_range(0.3..1.2)).unwrap();
            let body = RigidBody::dynamic(shape, PhysicMaterial::default()).unwrap();
            PhysicObject::new(
                Transform::from_position(Vec2::new(rng.gen_range(-6.0..6.0), rng.gen_range(-6.0..6.0))),
                body,
            )
        })
        .collect();
    let bounds: Vec<Aabb<f32>> = entities
        .iter()
        .map(|e| e.body.as_ref().unwrap().shape().aabb(&e.transform))
        .collect();

    let config = WorldConfig::new().with_gravity(Vec2::new(0.0, 0.0));
    let mut world = PhysicWorld::new(config, PhysicLayerSystem::default()).unwrap();
    world.step(&mut entities);

    let mut seen = std::collections::BTreeSet::new();
    for &(a, b) in world.candidate_pairs() {
        assert_ne!(a, b);
        assert!(seen.insert((a.min(b), a.max(b))), "pair ({}, {}) listed twice", a, b);
        assert!(bounds[a].intersects(&bounds[b]));
    }

    let mut expected = 0;
    for i in 0..bounds.len() {
        for j in i + 1..bounds.len() {
            if bounds[i].intersects(&bounds[j]) {
                expected += 1;
            }
        }
    }
    assert_eq!(seen.len(), expected);
}

//! Exact intersection tests for each pair of shape kinds.
//!
//! Every test returns a manifold whose normal points from the first argument
//! toward the second.

use crate::float::Float;
use crate::geometry::{Edge, OrientedRectangle};
use crate::manifold::{CollisionManifold, ContactPoints};
use crate::vec::{Vec, Vec2};
use alloc::vec::Vec as AllocVec;

/// Circle against circle.
///
/// Coincident centers have no defined direction; the normal then falls back
/// to `Vec2::up()` so the pair can still be pushed apart.
pub fn intersect_circles<F: Float>(
    first_center: Vec2<F>,
    first_radius: F,
    second_center: Vec2<F>,
    second_radius: F,
) -> Option<CollisionManifold<F>> {
    let distance = first_center.distance(second_center);
    let sum_radius = first_radius + second_radius;
    if distance > sum_radius {
        return None;
    }

    let mut normal = (second_center - first_center).normalize();
    if normal == Vec2::zero() {
        normal = Vec2::up();
    }
    let depth = sum_radius - distance;
    let contact_point = first_center + normal.scale(first_radius - depth * F::half());

    Some(CollisionManifold::new(normal, depth, ContactPoints::one(contact_point)))
}

/// Circle against oriented rectangle, normal from the circle to the rectangle.
pub fn intersect_circle_rectangle<F: Float>(
    circle_center: Vec2<F>,
    circle_radius: F,
    rect: &OrientedRectangle<F>,
) -> Option<CollisionManifold<F>> {
    // Work in the rectangle's unrotated frame, keeping its center as origin.
    let local_center = circle_center.rotate_around(rect.center, -rect.rotation);
    let half = rect.half_size();

    let closest = Vec2::new(
        local_center.x.clamp(rect.center.x - half.x, rect.center.x + half.x),
        local_center.y.clamp(rect.center.y - half.y, rect.center.y + half.y),
    );

    let closest_distance = local_center.distance(closest);
    if closest_distance > circle_radius {
        return None;
    }

    // Center inside the rectangle: aim at the rectangle center instead. A
    // circle centered on the rectangle falls back to the rectangle's up axis.
    let target = if closest_distance == F::zero() { rect.center } else { closest };
    let mut local_normal = (target - local_center).normalize();
    if local_normal == Vec2::zero() {
        local_normal = Vec2::up();
    }
    let normal = local_normal.rotate(rect.rotation);
    let depth = circle_radius - closest_distance;
    let contact_point = closest.rotate_around(rect.center, rect.rotation);

    Some(CollisionManifold::new(normal, depth, ContactPoints::one(contact_point)))
}

/// Rectangle against rectangle via the separating axis theorem, with
/// contact points from reference/incident edge clipping.
pub fn intersect_rectangles<F: Float>(
    first: &OrientedRectangle<F>,
    second: &OrientedRectangle<F>,
) -> Option<CollisionManifold<F>> {
    let first_vertices = first.corner_vertices();
    let second_vertices = second.corner_vertices();

    let (first_overlap, first_axis) =
        min_overlap_on_axes(&first_vertices, &second_vertices, &first.edge_axes())?;
    let (second_overlap, second_axis) =
        min_overlap_on_axes(&first_vertices, &second_vertices, &second.edge_axes())?;

    let (depth, axis) = if first_overlap <= second_overlap {
        (first_overlap, first_axis)
    } else {
        (second_overlap, second_axis)
    };

    let direction = second.center - first.center;
    let normal = if direction.dot(axis) < F::zero() { -axis } else { axis };

    let contact_points = rectangle_contact_points(first, second, normal);
    if contact_points.is_empty() {
        log::warn!("rectangle pair overlaps by {:?} but clipping left no contact points", depth);
    }

    Some(CollisionManifold::new(normal, depth, contact_points))
}

/// Smallest projection overlap over `axes`, or `None` if one of them separates.
fn min_overlap_on_axes<F: Float>(
    first_vertices: &[Vec2<F>; 4],
    second_vertices: &[Vec2<F>; 4],
    axes: &[Vec2<F>; 2],
) -> Option<(F, Vec2<F>)> {
    let mut min_overlap = F::max_value();
    let mut normal = Vec2::zero();

    for &axis in axes {
        let (first_min, first_max) = project_vertices(axis, first_vertices);
        let (second_min, second_max) = project_vertices(axis, second_vertices);

        if first_max < second_min || second_max < first_min {
            return None;
        }

        let overlap = first_max.min(second_max) - first_min.max(second_min);
        if overlap < min_overlap {
            min_overlap = overlap;
            normal = axis;
        }
    }

    Some((min_overlap, normal))
}

fn project_vertices<F: Float>(axis: Vec2<F>, vertices: &[Vec2<F>; 4]) -> (F, F) {
    let mut min = F::max_value();
    let mut max = -F::max_value();
    for &vertex in vertices {
        let projection = axis.dot(vertex);
        min = min.min(projection);
        max = max.max(projection);
    }
    (min, max)
}

/// Contact points between two overlapping rectangles along `normal`.
///
/// Picks the most perpendicular edge of each rectangle, uses the better one
/// as the reference edge, clips the other (incident) edge against the
/// reference side planes and keeps the clipped points that lie behind the
/// reference face.
pub fn rectangle_contact_points<F: Float>(
    first: &OrientedRectangle<F>,
    second: &OrientedRectangle<F>,
    normal: Vec2<F>,
) -> ContactPoints<F> {
    let first_edge = best_edge(first, normal);
    let second_edge = best_edge(second, -normal);

    let (reference, incident, flip) =
        if first_edge.direction().dot(normal).abs() <= second_edge.direction().dot(normal).abs() {
            (first_edge, second_edge, false)
        } else {
            (second_edge, first_edge, true)
        };

    let reference_dir = reference.direction();

    let offset = reference.project(reference.start);
    let clipped = clip_segment(incident.start, incident.end, reference_dir, offset);
    if clipped.len() < 2 {
        return ContactPoints::new();
    }

    let offset = reference.project(reference.end);
    let clipped = clip_segment(clipped[0], clipped[1], -reference_dir, -offset);
    if clipped.len() < 2 {
        return ContactPoints::new();
    }

    // Face normal pointing into the reference body: the collision normal
    // leaves the first body, so it enters the reference when roles flipped.
    let into_reference = if flip { normal } else { -normal };
    let mut face_normal = reference.perp();
    if face_normal.dot(into_reference) < F::zero() {
        face_normal = -face_normal;
    }

    let face_offset = face_normal.dot(reference.start);
    clipped
        .into_iter()
        .filter(|p| face_normal.dot(*p) >= face_offset)
        .collect()
}

/// Edge of `rect` adjacent to its farthest vertex along `normal` that is
/// most perpendicular to `normal`, wound counter-clockwise.
fn best_edge<F: Float>(rect: &OrientedRectangle<F>, normal: Vec2<F>) -> Edge<F> {
    let vertices = rect.corner_vertices();

    let mut index = 0;
    let mut max_projection = -F::max_value();
    for (i, vertex) in vertices.iter().enumerate() {
        let projection = normal.dot(*vertex);
        if projection > max_projection {
            max_projection = projection;
            index = i;
        }
    }

    let (prev, next) = OrientedRectangle::<F>::corner_neighbors(index);
    let farthest = vertices[index];
    let from_prev = (farthest - vertices[prev]).normalize();
    let from_next = (farthest - vertices[next]).normalize();

    if from_prev.dot(normal) <= from_next.dot(normal) {
        Edge::new(vertices[prev], farthest)
    } else {
        Edge::new(farthest, vertices[next])
    }
}

/// Keep the part of segment `start..end` with `axis . p >= offset`.
fn clip_segment<F: Float>(start: Vec2<F>, end: Vec2<F>, axis: Vec2<F>, offset: F) -> AllocVec<Vec2<F>> {
    let start_distance = axis.dot(start) - offset;
    let end_distance = axis.dot(end) - offset;

    let mut points = AllocVec::with_capacity(2);
    if start_distance >= F::zero() {
        points.push(start);
    }
    if end_distance >= F::zero() {
        points.push(end);
    }
    if start_distance * end_distance < F::zero() {
        let t = start_distance / (start_distance - end_distance);
        points.push(start.lerp(end, t));
    }
    points
}

//! Movement domain: ground probing and collider reshaping.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::player::ColliderShape;

/// Returns true if a circle at `point` overlaps any Ground-layer collider.
pub(crate) fn probe_ground(spatial_query: &SpatialQuery, point: Vec2, radius: f32) -> bool {
    // Filter to only hit Ground layer entities (not obstacles, the goal, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    !spatial_query
        .shape_intersections(&Collider::circle(radius), point, 0.0, &ground_filter)
        .is_empty()
}

/// Build the player collider for a shape: a vertical capsule at the offset.
pub(crate) fn collider_for(shape: &ColliderShape) -> Collider {
    let (radius, length) = capsule_dimensions(shape.size);
    Collider::compound(vec![(
        Position::new(shape.offset),
        Rotation::default(),
        Collider::capsule(radius, length),
    )])
}

/// Capsule radius and straight-segment length fitting a width x height box.
/// Boxes wider than tall collapse to a circle.
pub(crate) fn capsule_dimensions(size: Vec2) -> (f32, f32) {
    let radius = size.x.min(size.y) * 0.5;
    let length = (size.y - 2.0 * radius).max(0.0);
    (radius, length)
}

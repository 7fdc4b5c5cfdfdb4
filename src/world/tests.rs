//! World domain: tests for course generation and scrolling.

use super::{CourseLayout, PieceKind, Scroll};
use crate::content::CourseDef;

fn settings() -> CourseDef {
    CourseDef::default()
}

#[test]
fn test_same_seed_same_course() {
    let a = CourseLayout::generate(42, &settings());
    let b = CourseLayout::generate(42, &settings());
    assert_eq!(a, b);
}

#[test]
fn test_course_starts_on_ground() {
    let layout = CourseLayout::generate(3, &settings());
    let first = layout.pieces[0];
    assert_eq!(first.kind, PieceKind::Ground);
    assert_eq!(first.center.x, 0.0);

    let top = first.center.y + first.size.y * 0.5;
    assert_eq!(top, settings().ground_y);
}

#[test]
fn test_course_ends_with_single_goal() {
    let layout = CourseLayout::generate(9, &settings());
    let goals: Vec<_> = layout
        .pieces
        .iter()
        .filter(|piece| piece.kind == PieceKind::Goal)
        .collect();
    assert_eq!(goals.len(), 1);
    assert_eq!(layout.pieces.last().map(|piece| piece.kind), Some(PieceKind::Goal));
}

#[test]
fn test_no_gaps_or_obstacles_without_chance() {
    let course = CourseDef {
        gap_chance: 0.0,
        obstacle_chance: 0.0,
        ..settings()
    };
    let layout = CourseLayout::generate(5, &course);

    assert_eq!(layout.obstacle_count(), 0);
    // One ground piece per segment, plus the ground under the goal, plus the goal
    assert_eq!(layout.pieces.len(), course.segment_count as usize + 2);
}

#[test]
fn test_gaps_never_follow_each_other() {
    let course = CourseDef {
        gap_chance: 1.0,
        obstacle_chance: 0.0,
        ..settings()
    };
    let layout = CourseLayout::generate(11, &course);

    let mut ground_x: Vec<f32> = layout
        .pieces
        .iter()
        .filter(|piece| piece.kind == PieceKind::Ground)
        .map(|piece| piece.center.x)
        .collect();
    ground_x.sort_by(f32::total_cmp);

    for pair in ground_x.windows(2) {
        assert!(pair[1] - pair[0] <= course.segment_length * 2.0 + 1e-3);
    }
}

#[test]
fn test_obstacles_carry_configured_damage() {
    let course = CourseDef {
        obstacle_chance: 1.0,
        obstacle_damage: 2,
        ..settings()
    };
    let layout = CourseLayout::generate(21, &course);

    assert!(layout.obstacle_count() > 0);
    for piece in &layout.pieces {
        if let PieceKind::Obstacle { damage, .. } = piece.kind {
            assert_eq!(damage, 2);
        }
    }
}

#[test]
fn test_scroll_moves_left() {
    let scroll = Scroll { speed: 2.0 };
    assert_eq!(scroll.step(10.0, 0.5), 9.0);
}

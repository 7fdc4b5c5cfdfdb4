//! UI domain: tests for HUD text and banner mapping.

use bevy::prelude::Color;

use super::hud_player::health_color;
use super::outcome::banner_for;
use crate::player::{Health, RunOutcome};

#[test]
fn test_health_color_shifts_with_damage() {
    let full = Health::new(3);
    let mut hurt = full;
    hurt.take_damage(2);

    assert_ne!(health_color(&full), health_color(&hurt));
    assert_eq!(hurt.label(), "HP: 1");
}

#[test]
fn test_empty_health_pool_reads_as_dead() {
    let mut dead = Health::new(3);
    dead.take_damage(5);
    assert_eq!(health_color(&Health::new(0)), health_color(&dead));
}

#[test]
fn test_no_banner_while_playing() {
    assert!(banner_for(RunOutcome::Playing).is_none());
}

#[test]
fn test_banners_differ_by_outcome() {
    let (over_text, over_color) = banner_for(RunOutcome::GameOver).expect("game over banner");
    let (clear_text, clear_color) = banner_for(RunOutcome::Cleared).expect("clear banner");

    assert_eq!(over_text, "GAME OVER");
    assert_eq!(over_color, Color::WHITE);
    assert_eq!(clear_text, "STAGE CLEAR!");
    assert_ne!(clear_color, over_color);
}

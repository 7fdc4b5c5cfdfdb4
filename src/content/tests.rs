//! Content domain: tests for config parsing and validation.

use super::{RunnerConfig, parse_config, validate_config};
use crate::core::PausePolicy;
use crate::player::{JumpBudget, SlideTrigger};

#[test]
fn test_empty_ron_uses_defaults() {
    let config = parse_config("()", "runner.ron").expect("empty config should parse");
    assert_eq!(config, RunnerConfig::default());
}

#[test]
fn test_partial_ron_overrides_fields() {
    let text = r#"(
        max_health: 5,
        fall_y: -10.0,
        jump: (max_jumps: None),
        slide: (trigger: HeldWhileGrounded),
        pause_policy: ScrollOnly,
    )"#;
    let config = parse_config(text, "runner.ron").expect("partial config should parse");

    assert_eq!(config.max_health, 5);
    assert_eq!(config.fall_y, -10.0);
    assert_eq!(config.pause_policy, PausePolicy::ScrollOnly);
    assert_eq!(config.slide.trigger, SlideTrigger::HeldWhileGrounded);
    assert_eq!(config.jump.tuning().max_jumps, JumpBudget::Unlimited);
    assert_eq!(config.jump.jump_force, 12.0);
}

#[test]
fn test_json_config_by_extension() {
    let text = r#"{ "max_health": 4, "ground_probe": null }"#;
    let config = parse_config(text, "runner.json").expect("json config should parse");

    assert_eq!(config.max_health, 4);
    assert!(config.ground_probe.is_none());
    assert!(config.player_tuning().probe.is_none());
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_config("(max_health: \"lots\")", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_player_tuning_from_defaults() {
    let tuning = RunnerConfig::default().player_tuning();
    assert_eq!(tuning.jump.max_jumps, JumpBudget::Limited(2));
    assert_eq!(tuning.max_health, 3);
    assert_eq!(tuning.fall_y, -6.0);
    assert_eq!(tuning.slide.height_ratio, 0.55);
    let probe = tuning.probe.expect("default config has a probe");
    assert_eq!(probe.radius, 0.15);
}

#[test]
fn test_valid_config_has_no_warnings() {
    let mut config = RunnerConfig::default();
    assert!(validate_config(&mut config).is_empty());
    assert_eq!(config, RunnerConfig::default());
}

#[test]
fn test_validation_clamps_bad_values() {
    let mut config = RunnerConfig::default();
    config.slide.height_ratio = 1.5;
    config.max_health = 0;
    if let Some(probe) = config.ground_probe.as_mut() {
        probe.radius = -1.0;
    }

    let warnings = validate_config(&mut config);
    let fields: Vec<_> = warnings.iter().map(|w| w.field).collect();
    assert_eq!(
        fields,
        vec!["slide.height_ratio", "max_health", "ground_probe.radius"]
    );
    assert_eq!(config.slide.height_ratio, 1.0);
    assert_eq!(config.max_health, 3);
    assert_eq!(config.ground_probe.as_ref().map(|p| p.radius), Some(0.15));
}

#[test]
fn test_shipped_config_is_valid() {
    let text = include_str!("../../assets/data/runner.ron");
    let mut config = parse_config(text, "runner.ron").expect("shipped config should parse");

    assert!(validate_config(&mut config).is_empty());
    assert_eq!(config.jump.tuning().max_jumps, JumpBudget::Limited(2));
    assert!(config.ground_probe.is_some());
}

#[test]
fn test_validation_clamps_course_settings() {
    let mut config = RunnerConfig::default();
    config.course.segment_count = 0;
    config.course.gap_chance = 2.0;
    config.scroll.speed = -1.0;

    let warnings = validate_config(&mut config);
    let fields: Vec<_> = warnings.iter().map(|w| w.field).collect();
    assert_eq!(
        fields,
        vec!["course.segment_count", "course.gap_chance", "scroll.speed"]
    );
    assert_eq!(config.course.segment_count, 24);
    assert_eq!(config.course.gap_chance, 1.0);
    assert_eq!(config.scroll.speed, 1.0);
}

#[test]
fn test_omitted_max_jumps_keeps_default_budget() {
    let omitted = parse_config("(jump: (jump_force: 10.0))", "runner.ron")
        .expect("jump section without max_jumps should parse");
    assert_eq!(omitted.jump.tuning().max_jumps, JumpBudget::Limited(2));

    let unlimited = parse_config("(jump: (max_jumps: None))", "runner.ron")
        .expect("explicit None should parse");
    assert_eq!(unlimited.jump.tuning().max_jumps, JumpBudget::Unlimited);
}

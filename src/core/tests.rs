//! Core domain: tests for pause control.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::{GameplayPaused, PausePolicy, RunEndedEvent, handle_run_ended};
use crate::player::{Contact, EndCause, FrameInput, PlayerFrame, PlayerTuning, TickContext};

fn run_end_app(policy: PausePolicy) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<GameplayPaused>()
        .insert_resource(policy)
        .insert_resource(Time::<Physics>::default())
        .add_message::<RunEndedEvent>()
        .add_systems(Update, handle_run_ended);
    app
}

fn is_paused(app: &App) -> bool {
    app.world().resource::<GameplayPaused>().is_paused()
}

fn physics_paused(app: &App) -> bool {
    app.world().resource::<Time<Physics>>().is_paused()
}

#[test]
fn test_gameplay_starts_unpaused() {
    let paused = GameplayPaused::default();
    assert!(!paused.is_paused());
}

#[test]
fn test_pause_is_set_once() {
    let mut paused = GameplayPaused::default();
    assert!(paused.pause("run_ended"));
    assert!(!paused.pause("run_ended"));
    assert!(paused.is_paused());
    assert_eq!(paused.sources.len(), 1);
}

#[test]
fn test_default_pause_policy_freezes_everything() {
    assert_eq!(PausePolicy::default(), PausePolicy::FullSimulation);
}

// -----------------------------------------------------------------------------
// Run end tests
// -----------------------------------------------------------------------------

#[test]
fn test_game_over_pauses_gameplay_and_physics() {
    let mut app = run_end_app(PausePolicy::FullSimulation);

    // Drive a player to zero health and forward the transition it reports
    let mut frame = PlayerFrame::new(PlayerTuning::default(), Vec2::ZERO);
    let hit = [Contact::Obstacle { damage: 3 }];
    let ground = |_: Vec2, _: f32| true;
    let report = frame.tick(&TickContext::running(0.016), &FrameInput::default(), &hit, &ground);
    let cause = report.ended.expect("lethal hit ends the run");
    assert_eq!(cause, EndCause::HealthDepleted);

    app.update();
    assert!(!is_paused(&app));

    app.world_mut().write_message(RunEndedEvent { cause });
    app.update();

    assert!(is_paused(&app));
    assert!(physics_paused(&app));
}

#[test]
fn test_scroll_only_policy_leaves_physics_running() {
    let mut app = run_end_app(PausePolicy::ScrollOnly);

    app.world_mut().write_message(RunEndedEvent {
        cause: EndCause::FellOffWorld,
    });
    app.update();

    assert!(is_paused(&app));
    assert!(!physics_paused(&app));
}

#[test]
fn test_repeated_run_end_pauses_once() {
    let mut app = run_end_app(PausePolicy::FullSimulation);

    app.world_mut().write_message(RunEndedEvent {
        cause: EndCause::GoalReached,
    });
    app.world_mut().write_message(RunEndedEvent {
        cause: EndCause::GoalReached,
    });
    app.update();

    let paused = app.world().resource::<GameplayPaused>();
    assert_eq!(paused.sources.len(), 1);
    assert!(physics_paused(&app));
}

#[test]
fn test_only_full_simulation_freezes_physics() {
    assert!(PausePolicy::FullSimulation.freezes_physics());
    assert!(!PausePolicy::ScrollOnly.freezes_physics());
}

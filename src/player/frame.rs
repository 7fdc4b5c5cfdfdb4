//! Player domain: the per-tick orchestrator over sensing, locomotion,
//! slide, damage and outcome.

use bevy::prelude::*;

use crate::core::PausePolicy;
use crate::player::{
    Body, ColliderShape, DamageOutcome, EndCause, GroundProbe, GroundQuery, GroundSensor, Health,
    JumpState, JumpTuning, OutcomeMachine, OutcomeSignals, RunOutcome, SlideButton, SlideChange,
    SlideState, SlideTuning, integrate_vertical,
};

/// Clock and pause state for one tick, passed in instead of read globally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub delta_secs: f32,
    pub paused: bool,
    pub pause_policy: PausePolicy,
}

impl TickContext {
    pub fn running(delta_secs: f32) -> Self {
        Self {
            delta_secs,
            paused: false,
            pause_policy: PausePolicy::default(),
        }
    }

    pub fn player_should_run(&self) -> bool {
        !self.paused || self.pause_policy == PausePolicy::ScrollOnly
    }
}

/// Button edges and levels sampled for one tick. `Default` means no input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub jump_pressed: bool,
    pub slide: SlideButton,
}

/// Collision events delivered on the tick they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Obstacle { damage: u32 },
    Goal,
}

/// Static configuration for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerTuning {
    pub jump: JumpTuning,
    pub slide: SlideTuning,
    pub probe: Option<GroundProbe>,
    pub shape: ColliderShape,
    pub max_health: u32,
    /// Falling below this height ends the run.
    pub fall_y: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            jump: JumpTuning::default(),
            slide: SlideTuning::default(),
            probe: Some(GroundProbe::default()),
            shape: ColliderShape::new(Vec2::new(0.5, 1.0), Vec2::ZERO),
            max_health: 3,
            fall_y: -6.0,
        }
    }
}

/// Everything a tick decided, for the presentation collaborators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// The tick was skipped because the simulation is paused.
    pub skipped: bool,
    pub grounded: bool,
    pub landed: bool,
    /// A spent jump budget was handed back this tick.
    pub budget_restored: bool,
    pub jumped: bool,
    pub slide_change: Option<SlideChange>,
    /// New collider shape, when the slide step changed it.
    pub shape_change: Option<ColliderShape>,
    /// Visibility must be restored to fully opaque.
    pub restore_opacity: bool,
    /// Health after damage, when any damage landed this tick.
    pub health_changed: Option<u32>,
    pub ended: Option<EndCause>,
    pub airborne: bool,
    pub sliding: bool,
}

/// The player's state for one playthrough.
#[derive(Component, Debug, Clone)]
pub struct PlayerFrame {
    pub body: Body,
    pub grounded: bool,
    tuning: PlayerTuning,
    sensor: GroundSensor,
    jump: JumpState,
    slide: SlideState,
    health: Health,
    outcome: OutcomeMachine,
}

impl PlayerFrame {
    pub fn new(tuning: PlayerTuning, position: Vec2) -> Self {
        Self {
            body: Body {
                position,
                velocity: Vec2::ZERO,
            },
            grounded: false,
            sensor: GroundSensor::new(tuning.probe),
            jump: JumpState::default(),
            slide: SlideState::new(tuning.shape),
            health: Health::new(tuning.max_health),
            outcome: OutcomeMachine::default(),
            tuning,
        }
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    pub fn sensor(&self) -> &GroundSensor {
        &self.sensor
    }

    pub fn jump_count(&self) -> u32 {
        self.jump.jump_count
    }

    pub fn is_sliding(&self) -> bool {
        self.slide.is_sliding()
    }

    pub fn shape(&self) -> ColliderShape {
        self.slide.shape()
    }

    pub fn original_shape(&self) -> ColliderShape {
        self.slide.original()
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn outcome(&self) -> RunOutcome {
        self.outcome.outcome()
    }

    /// Begins a slide outside the regular tick. Idempotent.
    pub fn start_slide(&mut self) -> bool {
        self.slide.start(&self.tuning.slide)
    }

    /// Ends a slide outside the regular tick. Idempotent.
    pub fn end_slide(&mut self) -> bool {
        self.slide.end()
    }

    /// Runs one tick in fixed order: ground, locomotion, slide, damage, outcome.
    pub fn tick(
        &mut self,
        ctx: &TickContext,
        input: &FrameInput,
        contacts: &[Contact],
        ground: &dyn GroundQuery,
    ) -> FrameReport {
        if !ctx.player_should_run() {
            return FrameReport {
                skipped: true,
                grounded: self.grounded,
                airborne: !self.grounded,
                sliding: self.slide.is_sliding(),
                ..default()
            };
        }

        let mut report = FrameReport::default();

        let was_grounded = self.grounded;
        self.grounded = self.sensor.sense(self.body.position, ground);
        report.grounded = self.grounded;
        report.landed = self.grounded && !was_grounded;

        self.step_locomotion(ctx, input, &mut report);
        self.step_slide(input, &mut report);

        let health_depleted = self.step_damage(contacts, &mut report);
        let signals = OutcomeSignals {
            goal_reached: contacts.contains(&Contact::Goal),
            health_depleted,
            fell: self.body.position.y < self.tuning.fall_y,
        };
        report.ended = self.outcome.evaluate(signals);

        report.airborne = !self.grounded;
        report.sliding = self.slide.is_sliding();
        report
    }

    fn step_locomotion(&mut self, ctx: &TickContext, input: &FrameInput, report: &mut FrameReport) {
        let sliding = self.slide.is_sliding();
        let tuning = &self.tuning.jump;

        let vertical_speed = self.body.velocity.y;
        report.budget_restored = self
            .jump
            .refresh(self.grounded, vertical_speed, sliding, tuning);
        integrate_vertical(&mut self.body, tuning, ctx.delta_secs);

        if input.jump_pressed {
            report.jumped = self.jump.try_jump(&mut self.body, sliding, tuning);
        }
    }

    fn step_slide(&mut self, input: &FrameInput, report: &mut FrameReport) {
        let before = self.slide.shape();
        report.slide_change = self
            .slide
            .update(input.slide, self.grounded, &self.tuning.slide);

        if report.slide_change == Some(SlideChange::Started) {
            report.restore_opacity = true;
        }
        let after = self.slide.shape();
        if after != before {
            report.shape_change = Some(after);
        }
    }

    /// Returns true when health hit zero this tick.
    fn step_damage(&mut self, contacts: &[Contact], report: &mut FrameReport) -> bool {
        if self.outcome.outcome().is_terminal() {
            return false;
        }

        let mut depleted = false;
        for contact in contacts {
            let Contact::Obstacle { damage } = contact else {
                continue;
            };
            match self.health.take_damage(*damage) {
                DamageOutcome::Ignored => {}
                DamageOutcome::Hurt { remaining } => report.health_changed = Some(remaining),
                DamageOutcome::Fatal => {
                    report.health_changed = Some(0);
                    depleted = true;
                }
            }
        }
        depleted
    }
}

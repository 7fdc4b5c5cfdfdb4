//! Player domain: the runner's per-tick control core.
//!
//! Everything here is plain data plus pure transitions; the ECS wiring in
//! `movement` feeds it sensor readings, input and contacts once per frame.

mod frame;
mod ground;
mod health;
mod jump;
mod outcome;
mod slide;


pub use frame::{Contact, FrameInput, FrameReport, PlayerFrame, PlayerTuning, TickContext};
pub use ground::{GroundProbe, GroundQuery, GroundSensor};
pub use health::{DamageOutcome, Health};
pub use jump::{Body, JumpBudget, JumpState, JumpTuning, integrate_vertical};
pub use outcome::{EndCause, OutcomeMachine, OutcomeSignals, RunOutcome};
pub use slide::{ColliderShape, SlideButton, SlideChange, SlideState, SlideTrigger, SlideTuning};

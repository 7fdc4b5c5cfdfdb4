//! Player domain: run outcome state machine.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunOutcome {
    #[default]
    Playing,
    GameOver,
    Cleared,
}

impl RunOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunOutcome::Playing)
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    GoalReached,
    HealthDepleted,
    FellOffWorld,
}

impl EndCause {
    pub fn outcome(&self) -> RunOutcome {
        match self {
            EndCause::GoalReached => RunOutcome::Cleared,
            EndCause::HealthDepleted | EndCause::FellOffWorld => RunOutcome::GameOver,
        }
    }
}

/// Signals gathered during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeSignals {
    pub goal_reached: bool,
    pub health_depleted: bool,
    pub fell: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeMachine {
    outcome: RunOutcome,
}

impl OutcomeMachine {
    pub fn outcome(&self) -> RunOutcome {
        self.outcome
    }

    /// Picks the first matching cause: goal, then health, then fall.
    pub fn cause_for(signals: OutcomeSignals) -> Option<EndCause> {
        if signals.goal_reached {
            Some(EndCause::GoalReached)
        } else if signals.health_depleted {
            Some(EndCause::HealthDepleted)
        } else if signals.fell {
            Some(EndCause::FellOffWorld)
        } else {
            None
        }
    }

    /// Returns the cause only on the tick the run leaves `Playing`.
    pub fn evaluate(&mut self, signals: OutcomeSignals) -> Option<EndCause> {
        if self.outcome.is_terminal() {
            return None;
        }
        let cause = Self::cause_for(signals)?;
        self.outcome = cause.outcome();
        Some(cause)
    }
}

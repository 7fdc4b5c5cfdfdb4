//! Player domain: health and damage.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: u32,
    max: u32,
}

/// Result of a single damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Health was already zero; nothing changed.
    Ignored,
    Hurt { remaining: u32 },
    /// This hit brought health to zero.
    Fatal,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }

    pub fn percent(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }

    pub fn take_damage(&mut self, amount: u32) -> DamageOutcome {
        if self.is_dead() {
            return DamageOutcome::Ignored;
        }
        self.current = self.current.saturating_sub(amount);
        if self.is_dead() {
            DamageOutcome::Fatal
        } else {
            DamageOutcome::Hurt {
                remaining: self.current,
            }
        }
    }

    /// HUD representation of the current health.
    pub fn label(&self) -> String {
        format!("HP: {}", self.current)
    }
}

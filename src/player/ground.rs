//! Player domain: ground sensing through a circular probe.

use bevy::prelude::*;

/// Answers whether a circular probe overlaps ground-classified geometry.
///
/// Implementors carry their own ground mask, so callers only pass the probe.
pub trait GroundQuery {
    fn overlaps(&self, point: Vec2, radius: f32) -> bool;
}

impl<F> GroundQuery for F
where
    F: Fn(Vec2, f32) -> bool,
{
    fn overlaps(&self, point: Vec2, radius: f32) -> bool {
        self(point, radius)
    }
}

/// Probe placed relative to the player's position (usually at the feet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundProbe {
    pub offset: Vec2,
    pub radius: f32,
}

impl Default for GroundProbe {
    fn default() -> Self {
        Self {
            offset: Vec2::new(0.0, -0.5),
            radius: 0.15,
        }
    }
}

/// Wraps the optional probe. Without a probe the player is never grounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroundSensor {
    pub probe: Option<GroundProbe>,
}

impl GroundSensor {
    pub fn new(probe: Option<GroundProbe>) -> Self {
        Self { probe }
    }

    /// World-space center of the probe, if one is configured.
    pub fn probe_center(&self, position: Vec2) -> Option<Vec2> {
        self.probe.map(|probe| position + probe.offset)
    }

    pub fn sense(&self, position: Vec2, ground: &dyn GroundQuery) -> bool {
        let Some(probe) = self.probe else {
            return false;
        };
        ground.overlaps(position + probe.offset, probe.radius)
    }
}

//! Activation sensors: when does a press become a drag?
//!
//! A pointer press turns into a drag once it has moved far enough. A touch
//! turns into a drag once it has been held long enough without wandering; a
//! touch that wanders first is a scroll, not a drag. No drag-start is
//! dispatched until a tracker reports [`Activation::Activated`].

use crate::error::{DndError, Result};
use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::trace;

/// Pointer activation constraint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerActivation {
    /// Movement, in pixels, required before the press becomes a drag
    pub distance: f64,
}

impl Default for PointerActivation {
    fn default() -> Self {
        Self { distance: 10.0 }
    }
}

/// Touch activation constraint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchActivation {
    /// How long the touch must be held
    pub delay_ms: u64,
    /// Movement, in pixels, tolerated while holding
    pub tolerance: f64,
}

impl TouchActivation {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for TouchActivation {
    fn default() -> Self {
        Self {
            delay_ms: 250,
            tolerance: 500.0,
        }
    }
}

/// Activation constraints for every input kind
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    pub pointer: PointerActivation,
    pub touch: TouchActivation,
}

impl SensorConfig {
    /// Reject thresholds that could never be met or are meaningless
    pub fn validate(&self) -> Result<()> {
        let distance = self.pointer.distance;
        if !distance.is_finite() || distance < 0.0 {
            return Err(DndError::invalid_value(
                "sensors.pointer.distance",
                format!("must be a non-negative number, got {distance}"),
            ));
        }
        let tolerance = self.touch.tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(DndError::invalid_value(
                "sensors.touch.tolerance",
                format!("must be a non-negative number, got {tolerance}"),
            ));
        }
        Ok(())
    }
}

/// Input device that produced the press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Pointer,
    Touch,
}

/// Where a press stands on its way to becoming a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Pending,
    Activated,
    Cancelled,
}

/// Follows one press from contact to release.
///
/// `Activated` and `Cancelled` are final; further samples do not change them.
#[derive(Debug, Clone)]
pub struct ActivationTracker {
    kind: InputKind,
    origin: Point,
    config: SensorConfig,
    state: Activation,
}

impl ActivationTracker {
    /// Start tracking a press at `origin`
    pub fn press(kind: InputKind, origin: Point, config: SensorConfig) -> Self {
        Self {
            kind,
            origin,
            config,
            state: Activation::Pending,
        }
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn state(&self) -> Activation {
        self.state
    }

    /// Feed a sample taken `elapsed` after the press
    pub fn update(&mut self, position: Point, elapsed: Duration) -> Activation {
        if self.state != Activation::Pending {
            return self.state;
        }

        let moved = self.origin.distance(&position);
        self.state = match self.kind {
            InputKind::Pointer if moved >= self.config.pointer.distance => Activation::Activated,
            InputKind::Pointer => Activation::Pending,
            InputKind::Touch if moved > self.config.touch.tolerance => Activation::Cancelled,
            InputKind::Touch if elapsed >= self.config.touch.delay() => Activation::Activated,
            InputKind::Touch => Activation::Pending,
        };

        if self.state != Activation::Pending {
            trace!(kind = ?self.kind, moved, ?elapsed, state = ?self.state, "press resolved");
        }
        self.state
    }

    /// The press ended. A press that never activated was a tap.
    pub fn release(&mut self) -> Activation {
        if self.state == Activation::Pending {
            self.state = Activation::Cancelled;
        }
        self.state
    }
}

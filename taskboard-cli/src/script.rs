//! Drag scripts: a gesture written down as a list of steps.
//!
//! ```yaml
//! - start: { id: c1 }
//! - over: { active: c1, over: c3 }
//! - over: { active: c1, translated: { left: 545, top: 5, width: 250, height: 40 } }
//! - end: { active: c1, over: z }
//! ```
//!
//! Steps name elements by id only. Snapshots are taken from the board as it
//! stands when the step runs, and rectangles default to the fixed
//! [`BoardLayout`], so a script reads like what a user did rather than what
//! the renderer reported.
//!
//! A `start` may carry the press that led to it. The drag only starts if the
//! press clears the configured activation constraint:
//!
//! ```yaml
//! - start: { id: c1, press: { input: touch, samples: [{ x: 2, y: 1, ms: 300 }] } }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use taskboard_dnd::{
    Activation, ActivationTracker, BoardView, DndError, DragData, DragEnd, DragEvent, DragOver,
    DragStart, InputKind, Point, Rect, SensorConfig,
};
use thiserror::Error;

use crate::layout::BoardLayout;

/// Why a script could not be read or run
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Step {step}: {source}")]
    Step {
        step: usize,
        #[source]
        source: DndError,
    },
}

/// One scripted step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    /// Pick up the element with this id
    Start {
        id: String,
        /// The press that turns into the drag; absent means already activated
        #[serde(default)]
        press: Option<Press>,
    },
    /// Hover the active element over `over`, or over whatever `translated`
    /// lands on
    Over {
        active: String,
        #[serde(default)]
        over: Option<String>,
        /// Rectangle of the hovered element
        #[serde(default)]
        over_rect: Option<Rect>,
        /// Current rectangle of the dragged element
        #[serde(default)]
        translated: Option<Rect>,
    },
    /// Drop the active element on `over`, or outside every droppable
    End {
        active: String,
        #[serde(default)]
        over: Option<String>,
    },
}

/// A press and the samples that followed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Press {
    #[serde(default = "default_input")]
    pub input: InputKind,
    #[serde(default)]
    pub at: Point,
    #[serde(default)]
    pub samples: Vec<Sample>,
}

fn default_input() -> InputKind {
    InputKind::Pointer
}

/// Pointer position `ms` milliseconds after the press
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub ms: u64,
}

impl Press {
    /// Run the samples through an activation tracker
    pub fn activation(&self, sensors: &SensorConfig) -> Activation {
        let mut tracker = ActivationTracker::press(self.input, self.at, *sensors);
        for sample in &self.samples {
            let state = tracker.update(
                Point::new(sample.x, sample.y),
                Duration::from_millis(sample.ms),
            );
            if state != Activation::Pending {
                return state;
            }
        }
        tracker.release()
    }
}

/// What a single step did
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub event: &'static str,
    pub changed: bool,
}

/// Parse a script from YAML (JSON is valid YAML). Each step is a map with a
/// single key naming the step.
pub fn parse_script(content: &str, origin: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);
    let steps = serde_yaml_ng::with::singleton_map_recursive::deserialize(deserializer);
    steps.map_err(|e| ScriptError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

/// Read and parse a script file
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, ScriptError> {
    let origin = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: origin.clone(),
        source,
    })?;
    parse_script(&content, &origin)
}

/// Turn a step into the event a drag library would have emitted
pub fn to_event(view: &BoardView, step: &ScriptStep) -> Result<DragEvent, DndError> {
    let event: DragEvent = match step {
        ScriptStep::Start { id, .. } => DragStart::new(id.as_str(), view.snapshot(id)?).into(),
        ScriptStep::Over {
            active,
            over,
            over_rect,
            translated,
        } => {
            let layout = BoardLayout::of(view.ordered());
            let over = match (over, translated) {
                (Some(over), _) => Some(over.clone()),
                (None, Some(dragged)) => layout.hit(dragged, active),
                (None, None) => None,
            };

            let mut event = DragOver::new(active.as_str(), active_data(view, active)?);
            if let Some(over) = over {
                let rect = over_rect
                    .or_else(|| layout.rect_of(&over))
                    .unwrap_or_default();
                event = event.over(over.as_str(), rect);
            }
            if let Some(rect) = translated {
                event = event.translated(*rect);
            }
            event.into()
        }
        ScriptStep::End { active, over } => match over {
            Some(over) => DragEnd::new(active.as_str(), over.as_str()).into(),
            None => DragEnd::cancelled(active.as_str()).into(),
        },
    };
    Ok(event)
}

/// The session's snapshot when it belongs to `active`, else a fresh one
fn active_data(view: &BoardView, active: &str) -> Result<DragData, DndError> {
    match (view.session().active_id(), view.session().active_data()) {
        (Some(id), Some(data)) if id.as_str() == active => Ok(data.clone()),
        _ => view.snapshot(active),
    }
}

/// Run every step against the view, stopping at the first step that names
/// an element the board does not have
pub fn replay(
    view: &mut BoardView,
    steps: &[ScriptStep],
    sensors: &SensorConfig,
) -> Result<Vec<StepReport>, ScriptError> {
    let mut reports = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        let number = index + 1;

        if let ScriptStep::Start {
            press: Some(press), ..
        } = step
        {
            if press.activation(sensors) != Activation::Activated {
                tracing::debug!(step = number, "press never became a drag");
                reports.push(StepReport {
                    step: number,
                    event: "press-cancelled",
                    changed: false,
                });
                continue;
            }
        }

        let event = to_event(view, step).map_err(|source| ScriptError::Step {
            step: number,
            source,
        })?;
        let changed = view.dispatch(&event);
        tracing::debug!(
            step = number,
            event = event.name(),
            changed,
            "replayed step"
        );
        reports.push(StepReport {
            step: number,
            event: event.name(),
            changed,
        });
    }
    Ok(reports)
}

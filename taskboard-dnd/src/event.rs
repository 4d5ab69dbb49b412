//! Drag lifecycle events.
//!
//! A gesture produces exactly one `Start`, zero or more `Over`, then exactly
//! one `End`. Everything the engine needs is carried by the event itself; the
//! only optional parts are the ones a real pointer can legitimately lack (no
//! drop target under the pointer, no translated rectangle yet).

use crate::session::DragData;
use crate::types::{ElementId, Rect};
use serde::{Deserialize, Serialize};

/// A press crossed its activation threshold and became a drag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragStart {
    pub active_id: ElementId,
    pub data: DragData,
}

impl DragStart {
    pub fn new(active_id: impl Into<ElementId>, data: impl Into<DragData>) -> Self {
        Self {
            active_id: active_id.into(),
            data: data.into(),
        }
    }
}

/// The element being dragged, as seen by a drag-over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveElement {
    pub id: ElementId,
    pub data: DragData,
    /// Current on-screen rectangle of the dragged element, once it has moved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated: Option<Rect>,
}

/// The droppable currently under the dragged element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverTarget {
    pub id: ElementId,
    pub rect: Rect,
}

/// The dragged element moved over a droppable (or off every droppable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragOver {
    pub active: ActiveElement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over: Option<OverTarget>,
}

impl DragOver {
    pub fn new(active_id: impl Into<ElementId>, data: impl Into<DragData>) -> Self {
        Self {
            active: ActiveElement {
                id: active_id.into(),
                data: data.into(),
                translated: None,
            },
            over: None,
        }
    }

    /// Set the droppable under the pointer
    pub fn over(mut self, id: impl Into<ElementId>, rect: Rect) -> Self {
        self.over = Some(OverTarget {
            id: id.into(),
            rect,
        });
        self
    }

    /// Set the dragged element's current rectangle
    pub fn translated(mut self, rect: Rect) -> Self {
        self.active.translated = Some(rect);
        self
    }

    /// Whether the dragged element sits in the lower half of the hovered one.
    ///
    /// Without a translated rectangle or a hovered target this is `false`,
    /// which biases insertion to "before".
    pub fn is_below_over(&self) -> bool {
        match (&self.active.translated, &self.over) {
            (Some(translated), Some(over)) => translated.is_below(&over.rect),
            _ => false,
        }
    }
}

/// The gesture finished, on a droppable or outside every droppable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragEnd {
    pub active_id: ElementId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_id: Option<ElementId>,
}

impl DragEnd {
    /// Dropped onto `over_id`
    pub fn new(active_id: impl Into<ElementId>, over_id: impl Into<ElementId>) -> Self {
        Self {
            active_id: active_id.into(),
            over_id: Some(over_id.into()),
        }
    }

    /// Released outside every droppable
    pub fn cancelled(active_id: impl Into<ElementId>) -> Self {
        Self {
            active_id: active_id.into(),
            over_id: None,
        }
    }
}

/// One step of a drag gesture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragEvent {
    Start(DragStart),
    Over(DragOver),
    End(DragEnd),
}

impl DragEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start(_) => "drag-start",
            Self::Over(_) => "drag-over",
            Self::End(_) => "drag-end",
        }
    }
}

impl From<DragStart> for DragEvent {
    fn from(event: DragStart) -> Self {
        Self::Start(event)
    }
}

impl From<DragOver> for DragEvent {
    fn from(event: DragOver) -> Self {
        Self::Over(event)
    }
}

impl From<DragEnd> for DragEvent {
    fn from(event: DragEnd) -> Self {
        Self::End(event)
    }
}

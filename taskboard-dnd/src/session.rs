//! Drag session state: what is being dragged right now, if anything.

use crate::types::{Card, Column, ElementId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kind of element under drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragItemType {
    #[default]
    None,
    Column,
    Card,
}

/// Snapshot of the dragged element, taken when the drag starts.
///
/// On the wire the two shapes are told apart the same way the board does it:
/// a card carries a `columnId`, a column does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DragData {
    Card(Card),
    Column(Column),
}

impl DragData {
    pub fn item_type(&self) -> DragItemType {
        match self {
            Self::Card(_) => DragItemType::Card,
            Self::Column(_) => DragItemType::Column,
        }
    }

    pub fn as_card(&self) -> Option<&Card> {
        match self {
            Self::Card(card) => Some(card),
            Self::Column(_) => None,
        }
    }

    pub fn as_column(&self) -> Option<&Column> {
        match self {
            Self::Column(column) => Some(column),
            Self::Card(_) => None,
        }
    }

    /// Id of the snapshotted element
    pub fn element_id(&self) -> ElementId {
        match self {
            Self::Card(card) => ElementId::from(&card.id),
            Self::Column(column) => ElementId::from(&column.id),
        }
    }
}

impl From<Card> for DragData {
    fn from(card: Card) -> Self {
        Self::Card(card)
    }
}

impl From<Column> for DragData {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

/// The currently active drag, if any.
///
/// All three fields are written together: `start` fills them, `clear` empties
/// them. There is never more than one session per board view.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DragSession {
    active_id: Option<ElementId>,
    active_type: DragItemType,
    active_data: Option<DragData>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag of `id`, inferring its type from the snapshot
    pub fn start(&mut self, id: ElementId, data: DragData) {
        debug!(id = %id, kind = ?data.item_type(), "drag started");
        self.active_type = data.item_type();
        self.active_id = Some(id);
        self.active_data = Some(data);
    }

    /// Forget the active drag
    pub fn clear(&mut self) {
        self.active_id = None;
        self.active_type = DragItemType::None;
        self.active_data = None;
    }

    pub fn active_id(&self) -> Option<&ElementId> {
        self.active_id.as_ref()
    }

    pub fn active_type(&self) -> DragItemType {
        self.active_type
    }

    pub fn active_data(&self) -> Option<&DragData> {
        self.active_data.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.active_type == DragItemType::None
    }

    pub fn is_dragging_card(&self) -> bool {
        self.active_type == DragItemType::Card
    }

    pub fn is_dragging_column(&self) -> bool {
        self.active_type == DragItemType::Column
    }
}

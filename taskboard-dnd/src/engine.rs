//! Reorder engine: the drag transitions over an [`OrderedBoard`].
//!
//! The engine is a small state machine keyed on the session's
//! [`DragItemType`]:
//!
//! | State      | drag-over                              | drag-end                     |
//! |------------|----------------------------------------|------------------------------|
//! | `None`     | skipped                                | clears session               |
//! | `Column`   | skipped                                | array-move, clears session   |
//! | `Card`     | moves the card across columns          | clears session               |
//!
//! Transitions never mutate the board they are given. A move returns a new
//! board that shares every untouched column with the old one. Anything that
//! cannot be resolved (missing target, unknown id, same column) comes back
//! as [`Outcome::Skipped`] with the reason; nothing here returns an error.

use crate::event::{DragEnd, DragOver, DragStart};
use crate::session::{DragItemType, DragSession};
use crate::types::{Column, OrderedBoard};
use std::sync::Arc;
use tracing::{debug, trace};

/// Why a transition left the board as it was
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// Drag-over outside a card drag (idle, or dragging a column)
    NotDraggingCard,
    /// The event is about a different element than the session's
    NotActive,
    /// Drag-end with no active drag
    Idle,
    /// Card drags are placed by drag-over; drag-end only closes the session
    CardAlreadyPlaced,
    /// The pointer is not over any droppable
    NoTarget,
    /// The event's snapshot is not a card, or is a different card
    SnapshotMismatch,
    /// No column holds the dragged card
    ActiveNotFound,
    /// The hovered id is neither a card nor a column on the board
    OverNotFound,
    /// The hovered card lives in the dragged card's own column
    SameColumn,
    /// A column was dropped back onto itself
    SameElement,
    /// A column id in a drag-end is not on the board
    ColumnNotFound,
}

/// Result of one transition
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Moved(OrderedBoard),
    Skipped(Skip),
}

impl Outcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }

    /// The new board, if the transition produced one
    pub fn board(&self) -> Option<&OrderedBoard> {
        match self {
            Self::Moved(board) => Some(board),
            Self::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<Skip> {
        match self {
            Self::Moved(_) => None,
            Self::Skipped(reason) => Some(*reason),
        }
    }

    /// The board to show after this transition
    pub fn resolve(self, current: &OrderedBoard) -> OrderedBoard {
        match self {
            Self::Moved(board) => board,
            Self::Skipped(_) => current.clone(),
        }
    }
}

fn skipped(event: &'static str, reason: Skip) -> Outcome {
    trace!(event, ?reason, "transition skipped");
    Outcome::Skipped(reason)
}

/// Relocate the item at `from` to `to`, preserving the relative order of
/// everything else. An out-of-range `from` leaves the sequence unchanged; an
/// out-of-range `to` moves the item to the end.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from < moved.len() {
        let item = moved.remove(from);
        let to = to.min(moved.len());
        moved.insert(to, item);
    }
    moved
}

/// Open a drag session for the event's element
pub fn drag_start(session: &mut DragSession, event: &DragStart) {
    session.start(event.active_id.clone(), event.data.clone());
}

/// Live-update the board while a card hovers over another column.
///
/// The dragged card is removed from every column that holds it and inserted
/// into the hovered column: before the hovered card, after it when the
/// dragged rectangle sits in the hovered card's lower half, or at the end
/// when the pointer is over the column itself rather than one of its cards.
/// Repeating the same event is a no-op, since the card then already lives in
/// the hovered column.
///
/// The hovered id may name a card or a column; a column id resolves to that
/// column and the card is appended to it. Events for any element other than
/// the session's active one are skipped.
pub fn drag_over(board: &OrderedBoard, session: &DragSession, event: &DragOver) -> Outcome {
    const EVENT: &str = "drag-over";

    if !session.is_dragging_card() {
        return skipped(EVENT, Skip::NotDraggingCard);
    }
    if session.active_id() != Some(&event.active.id) {
        return skipped(EVENT, Skip::NotActive);
    }
    let Some(over) = &event.over else {
        return skipped(EVENT, Skip::NoTarget);
    };
    let active_id = event.active.id.as_str();
    let Some(card) = event
        .active
        .data
        .as_card()
        .filter(|card| card.id.as_str() == active_id)
    else {
        return skipped(EVENT, Skip::SnapshotMismatch);
    };

    let Some(active_index) = board.column_index_of_card(active_id) else {
        return skipped(EVENT, Skip::ActiveNotFound);
    };
    let over_id = over.id.as_str();
    let Some(over_index) = board
        .column_index_of_card(over_id)
        .or_else(|| board.column_index(over_id))
    else {
        return skipped(EVENT, Skip::OverNotFound);
    };

    let columns = board.columns();
    if columns[active_index].id == columns[over_index].id {
        return skipped(EVENT, Skip::SameColumn);
    }

    let over_column = &columns[over_index];
    let insert_at = match over_column.card_index(over_id) {
        Some(i) => i + usize::from(event.is_below_over()),
        None => over_column.cards.len(),
    };

    let mut source = Column::clone(&columns[active_index]);
    source.cards.retain(|c| c.id.as_str() != active_id);
    source.sync_card_order();

    let mut target = Column::clone(over_column);
    target.cards.retain(|c| c.id.as_str() != active_id);
    let insert_at = insert_at.min(target.cards.len());
    let mut placed = card.clone();
    placed.column_id = target.id.clone();
    target.cards.insert(insert_at, placed);
    target.sync_card_order();

    debug!(
        card = active_id,
        from = %source.id,
        to = %target.id,
        index = insert_at,
        "card moved across columns"
    );

    let mut next = columns.to_vec();
    next[active_index] = Arc::new(source);
    next[over_index] = Arc::new(target);
    Outcome::Moved(OrderedBoard::from_shared(next))
}

/// Finish the drag: settle a column move and close the session.
///
/// The session is cleared whatever the outcome, so a late drag-over that
/// arrives after this resolves against an idle session and is skipped.
pub fn drag_end(board: &OrderedBoard, session: &mut DragSession, event: &DragEnd) -> Outcome {
    let outcome = match session.active_type() {
        DragItemType::None => skipped("drag-end", Skip::Idle),
        DragItemType::Card => skipped("drag-end", Skip::CardAlreadyPlaced),
        DragItemType::Column => move_column(board, event),
    };
    session.clear();
    outcome
}

fn move_column(board: &OrderedBoard, event: &DragEnd) -> Outcome {
    const EVENT: &str = "drag-end";

    let Some(over_id) = &event.over_id else {
        return skipped(EVENT, Skip::NoTarget);
    };
    if over_id == &event.active_id {
        return skipped(EVENT, Skip::SameElement);
    }
    let (Some(old_index), Some(new_index)) = (
        board.column_index(event.active_id.as_str()),
        board.column_index(over_id.as_str()),
    ) else {
        return skipped(EVENT, Skip::ColumnNotFound);
    };

    debug!(
        column = %event.active_id,
        from = old_index,
        to = new_index,
        "column moved"
    );
    Outcome::Moved(OrderedBoard::from_shared(array_move(
        board.columns(),
        old_index,
        new_index,
    )))
}

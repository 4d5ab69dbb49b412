//! Board view session: the loaded board, its ordered view, and the drag
//! session, owned together and driven by drag events.

use crate::engine::{self, Outcome};
use crate::error::{DndError, Result};
use crate::event::{DragEnd, DragEvent, DragOver, DragStart};
use crate::materialize::materialize;
use crate::session::{DragData, DragSession};
use crate::types::{Board, OrderedBoard};
use std::sync::Arc;
use tracing::debug;

/// Everything one board screen needs to render and react to drags.
///
/// Presentation reads [`ordered`](Self::ordered) and
/// [`session`](Self::session) and only ever changes them by dispatching
/// events.
#[derive(Debug, Default)]
pub struct BoardView {
    source: Option<Arc<Board>>,
    ordered: OrderedBoard,
    session: DragSession,
}

impl BoardView {
    /// A view with nothing loaded yet
    pub fn new() -> Self {
        Self::default()
    }

    /// A view over an already loaded board
    pub fn with_board(board: Board) -> Self {
        let mut view = Self::new();
        view.set_board(Some(Arc::new(board)));
        view
    }

    /// Point the view at a (possibly new) board.
    ///
    /// The ordered view is rebuilt only when the board identity changes.
    /// Rebuilding discards any in-flight drag. Returns whether it rebuilt.
    pub fn set_board(&mut self, board: Option<Arc<Board>>) -> bool {
        let same = match (&self.source, &board) {
            (Some(current), Some(next)) => Arc::ptr_eq(current, next),
            (None, None) => true,
            _ => false,
        };
        if same {
            return false;
        }

        if let Some(board) = &board {
            for violation in board.violations() {
                tracing::warn!(board = %board.id, "board invariant broken: {}", violation);
            }
        }

        self.ordered = materialize(board.as_deref());
        self.source = board;
        if !self.session.is_idle() {
            debug!("board reloaded, dropping in-flight drag");
        }
        self.session.clear();
        true
    }

    /// The board the view was built from
    pub fn source(&self) -> Option<&Arc<Board>> {
        self.source.as_ref()
    }

    pub fn ordered(&self) -> &OrderedBoard {
        &self.ordered
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// What to draw under the pointer while dragging
    pub fn overlay(&self) -> Option<&DragData> {
        self.session.active_data()
    }

    /// Snapshot of the column or card with this id, ready for a drag-start
    pub fn snapshot(&self, id: &str) -> Result<DragData> {
        if let Some(card) = self.ordered.card(id) {
            return Ok(DragData::Card(card.clone()));
        }
        self.ordered
            .column(id)
            .map(|column| DragData::Column(column.clone()))
            .ok_or_else(|| DndError::element_not_found(id))
    }

    pub fn drag_start(&mut self, event: &DragStart) {
        engine::drag_start(&mut self.session, event);
    }

    /// Returns whether the ordered board changed
    pub fn drag_over(&mut self, event: &DragOver) -> bool {
        let outcome = engine::drag_over(&self.ordered, &self.session, event);
        self.apply(outcome)
    }

    /// Returns whether the ordered board changed
    pub fn drag_end(&mut self, event: &DragEnd) -> bool {
        let outcome = engine::drag_end(&self.ordered, &mut self.session, event);
        self.apply(outcome)
    }

    /// Route an event to its transition. Returns whether the ordered board
    /// changed.
    pub fn dispatch(&mut self, event: &DragEvent) -> bool {
        match event {
            DragEvent::Start(start) => {
                self.drag_start(start);
                false
            }
            DragEvent::Over(over) => self.drag_over(over),
            DragEvent::End(end) => self.drag_end(end),
        }
    }

    fn apply(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Moved(board) => {
                self.ordered = board;
                true
            }
            Outcome::Skipped(_) => false,
        }
    }
}

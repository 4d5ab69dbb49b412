//! A fixed on-screen layout for boards replayed from the terminal.
//!
//! Columns sit side by side, each with a header followed by one row per
//! card and one spare row to drop into. Scripts that only give the dragged
//! element's rectangle are resolved against this layout.

use taskboard_dnd::{closest_corners, Droppable, OrderedBoard, Rect};

pub const COLUMN_WIDTH: f64 = 250.0;
pub const COLUMN_GAP: f64 = 20.0;
pub const HEADER_HEIGHT: f64 = 50.0;
pub const CARD_HEIGHT: f64 = 40.0;

/// Droppable regions of a board, cards before columns
#[derive(Debug, Clone, Default)]
pub struct BoardLayout {
    droppables: Vec<Droppable>,
}

impl BoardLayout {
    pub fn of(board: &OrderedBoard) -> Self {
        let mut cards = Vec::new();
        let mut columns = Vec::new();

        for (i, column) in board.iter().enumerate() {
            let left = i as f64 * (COLUMN_WIDTH + COLUMN_GAP);
            for (j, card) in column.cards.iter().enumerate() {
                let top = HEADER_HEIGHT + j as f64 * CARD_HEIGHT;
                cards.push(Droppable::new(
                    &card.id,
                    Rect::new(left, top, COLUMN_WIDTH, CARD_HEIGHT),
                ));
            }
            let height = HEADER_HEIGHT + (column.cards.len() + 1) as f64 * CARD_HEIGHT;
            columns.push(Droppable::new(
                &column.id,
                Rect::new(left, 0.0, COLUMN_WIDTH, height),
            ));
        }

        cards.extend(columns);
        Self { droppables: cards }
    }

    pub fn droppables(&self) -> &[Droppable] {
        &self.droppables
    }

    /// Rectangle of the element with this id
    pub fn rect_of(&self, id: &str) -> Option<Rect> {
        self.droppables
            .iter()
            .find(|d| d.id.as_str() == id)
            .map(|d| d.rect)
    }

    /// The droppable nearest to `dragged`, never the dragged element itself
    pub fn hit(&self, dragged: &Rect, active: &str) -> Option<String> {
        let candidates: Vec<Droppable> = self
            .droppables
            .iter()
            .filter(|d| d.id.as_str() != active)
            .cloned()
            .collect();
        closest_corners(dragged, &candidates).map(|id| id.to_string())
    }
}

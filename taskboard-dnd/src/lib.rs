//! Kanban board model and drag-and-drop reorder engine
//!
//! This crate holds the part of a kanban board screen that has real logic in
//! it: turning a loaded board into an ordered view, and keeping that view
//! consistent while the user drags columns and cards around.
//!
//! ## Overview
//!
//! - **Board** - what the loader returns: columns and cards in arbitrary order
//!   plus explicit `columnOrderIds` / `cardOrderIds` arrays
//! - **OrderedBoard** - the render-ready view built by [`materialize`]
//! - **DragSession** - what is being dragged right now, if anything
//! - **Engine** - the drag-start / drag-over / drag-end transitions
//! - **BoardView** - owns all of the above for one board screen
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard_dnd::{Board, BoardView, Card, Column, DragEnd, DragOver, DragStart, Rect};
//!
//! let board = Board::new("b1", "Sprint")
//!     .with_column(Column::new("todo", "To Do").with_card(Card::new("c1", "todo", "Write docs")))
//!     .with_column(Column::new("done", "Done").with_card(Card::new("c2", "done", "Ship")));
//!
//! let mut view = BoardView::with_board(board);
//! let snapshot = view.snapshot("c1").unwrap();
//!
//! view.drag_start(&DragStart::new("c1", snapshot.clone()));
//! view.drag_over(&DragOver::new("c1", snapshot).over("c2", Rect::new(0.0, 0.0, 250.0, 40.0)));
//! view.drag_end(&DragEnd::new("c1", "c2"));
//!
//! let done = view.ordered().column("done").unwrap();
//! assert_eq!(done.cards[0].id.as_str(), "c1");
//! assert!(view.session().is_idle());
//! ```
//!
//! Every transition is total: events that cannot be resolved leave the view
//! untouched and are reported at `trace` level.

pub mod collision;
pub mod engine;
mod error;
pub mod event;
mod logging;
pub mod materialize;
pub mod sensor;
pub mod session;
pub mod types;
mod view;

pub use collision::{closest_corners, Droppable};
pub use engine::{array_move, Outcome, Skip};
pub use error::{DndError, Result};
pub use event::{ActiveElement, DragEnd, DragEvent, DragOver, DragStart, OverTarget};
pub use logging::Pretty;
pub use materialize::{map_order, materialize};
pub use sensor::{
    Activation, ActivationTracker, InputKind, PointerActivation, SensorConfig, TouchActivation,
};
pub use session::{DragData, DragItemType, DragSession};
pub use view::BoardView;

// Re-export commonly used types
pub use types::{
    Board, BoardId, Card, CardId, Column, ColumnId, ElementId, OrderedBoard, Point, Rect,
};

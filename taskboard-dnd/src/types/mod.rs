//! Core types for the board model

mod board;
mod geometry;
mod ids;
mod ordered;

pub use board::{Board, Card, Column};
pub use geometry::{Point, Rect};
pub use ids::{BoardId, CardId, ColumnId, ElementId};
pub use ordered::OrderedBoard;

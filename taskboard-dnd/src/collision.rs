//! Collision detection: which droppable is the dragged element over?

use crate::types::{ElementId, Rect};
use serde::{Deserialize, Serialize};

/// A region that can receive a drop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Droppable {
    pub id: ElementId,
    pub rect: Rect,
}

impl Droppable {
    pub fn new(id: impl Into<ElementId>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
        }
    }
}

/// Mean distance between the matching corners of two rectangles
fn corner_distance(a: &Rect, b: &Rect) -> f64 {
    let total: f64 = a
        .corners()
        .iter()
        .zip(b.corners().iter())
        .map(|(p, q)| p.distance(q))
        .sum();
    total / 4.0
}

/// Droppables ranked by corner distance to `collision`, nearest first.
///
/// Equal distances keep their input order.
pub fn rank_closest_corners<'a>(
    collision: &Rect,
    droppables: &'a [Droppable],
) -> Vec<(&'a Droppable, f64)> {
    let mut ranked: Vec<(&Droppable, f64)> = droppables
        .iter()
        .map(|d| (d, corner_distance(collision, &d.rect)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
}

/// The droppable whose corners sit closest to the dragged rectangle's corners
pub fn closest_corners(collision: &Rect, droppables: &[Droppable]) -> Option<ElementId> {
    rank_closest_corners(collision, droppables)
        .first()
        .map(|(d, _)| d.id.clone())
}

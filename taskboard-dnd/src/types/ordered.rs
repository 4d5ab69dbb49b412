//! The render-ready, ordered view of a board

use super::board::{Card, Column};
use super::ids::ColumnId;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Columns in display order, each holding its cards in display order.
///
/// Columns are shared behind `Arc`. A transition that touches two columns
/// rebuilds exactly those two; every other column keeps its allocation, so
/// `Arc::ptr_eq` tells a renderer which columns changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedBoard {
    columns: Vec<Arc<Column>>,
}

impl OrderedBoard {
    /// The empty board shown before any board has loaded
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from columns that are already in display order
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns: columns.into_iter().map(Arc::new).collect(),
        }
    }

    pub(crate) fn from_shared(columns: Vec<Arc<Column>>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column ids in display order
    pub fn column_order_ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }

    /// Index of the column with this id
    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id.as_str() == id)
    }

    /// Index of the column whose card list currently holds this card
    pub fn column_index_of_card(&self, card_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.contains_card(card_id))
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.column_index(id).map(|i| self.columns[i].as_ref())
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.iter()
            .flat_map(|c| c.cards.iter())
            .find(|card| card.id.as_str() == id)
    }

    /// Every card id on the board, column by column
    pub fn card_ids(&self) -> Vec<&str> {
        self.iter()
            .flat_map(|c| c.cards.iter().map(|card| card.id.as_str()))
            .collect()
    }

    /// Owned copies of the columns, in display order
    pub fn to_columns(&self) -> Vec<Column> {
        self.iter().cloned().collect()
    }
}

impl Serialize for OrderedBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

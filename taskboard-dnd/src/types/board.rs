//! Board-level types: Board, Column, Card
//!
//! These are the shapes the board loader hands over. Columns and cards arrive
//! in arbitrary order; the explicit `column_order_ids` / `card_order_ids`
//! arrays carry the display order.

use super::ids::{BoardId, CardId, ColumnId};
use crate::error::{DndError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A kanban board: columns plus the order they are displayed in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(rename = "_id", alias = "id")]
    pub id: BoardId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Visibility of the board (e.g. "public", "private")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub board_type: Option<String>,
    #[serde(default)]
    pub owner_ids: Vec<String>,
    #[serde(default)]
    pub member_ids: Vec<String>,
    #[serde(default)]
    pub column_order_ids: Vec<ColumnId>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Create an empty board
    pub fn new(id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            board_type: None,
            owner_ids: Vec::new(),
            member_ids: Vec::new(),
            column_order_ids: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a column and its id to the column order
    pub fn with_column(mut self, mut column: Column) -> Self {
        column.board_id = Some(self.id.clone());
        for card in &mut column.cards {
            card.board_id = Some(self.id.clone());
        }
        self.column_order_ids.push(column.id.clone());
        self.columns.push(column);
        self
    }

    /// Find a column by id
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Total number of cards across every column
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// Every invariant the board breaks.
    ///
    /// An empty result means `column_order_ids` is a permutation of the column
    /// ids, each column's `card_order_ids` is a permutation of its card ids,
    /// every card points back at its owning column, and no card id appears in
    /// more than one column.
    pub fn violations(&self) -> Vec<DndError> {
        let mut violations = Vec::new();

        if !is_permutation(
            self.column_order_ids.iter(),
            self.columns.iter().map(|c| &c.id),
        ) {
            violations.push(DndError::ColumnOrderMismatch {
                board: self.id.to_string(),
            });
        }

        let mut seen: HashSet<&CardId> = HashSet::new();
        for column in &self.columns {
            let card_ids = column.cards.iter().map(|c| &c.id);
            if !is_permutation(column.card_order_ids.iter(), card_ids) {
                violations.push(DndError::CardOrderMismatch {
                    column: column.id.to_string(),
                });
            }
            for card in &column.cards {
                if card.column_id != column.id {
                    violations.push(DndError::CardColumnMismatch {
                        card: card.id.to_string(),
                        expected: column.id.to_string(),
                        actual: card.column_id.to_string(),
                    });
                }
                if !seen.insert(&card.id) {
                    violations.push(DndError::DuplicateCard {
                        card: card.id.to_string(),
                    });
                }
            }
        }

        violations
    }

    /// Check the board invariants, returning the first violation
    pub fn validate(&self) -> Result<()> {
        match self.violations().into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }
}

/// A column is an ordered bucket of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(rename = "_id", alias = "id")]
    pub id: ColumnId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_id: Option<BoardId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub card_order_ids: Vec<CardId>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            board_id: None,
            title: title.into(),
            card_order_ids: Vec::new(),
            cards: Vec::new(),
        }
    }

    /// Append a card, claiming it for this column
    pub fn with_card(mut self, mut card: Card) -> Self {
        card.column_id = self.id.clone();
        card.board_id = self.board_id.clone().or(card.board_id);
        self.card_order_ids.push(card.id.clone());
        self.cards.push(card);
        self
    }

    /// Position of a card within `cards`
    pub fn card_index(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id.as_str() == id)
    }

    /// Whether this column currently holds the card
    pub fn contains_card(&self, id: &str) -> bool {
        self.card_index(id).is_some()
    }

    /// Recompute `card_order_ids` from the current card sequence
    pub(crate) fn sync_card_order(&mut self) {
        self.card_order_ids = self.cards.iter().map(|c| c.id.clone()).collect();
    }
}

/// A card is a single task on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "_id", alias = "id")]
    pub id: CardId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_id: Option<BoardId>,
    /// Owning column. Only cards carry this, which is how a drag tells a
    /// card apart from a column.
    pub column_id: ColumnId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default)]
    pub member_ids: Vec<String>,
    #[serde(default)]
    pub comments: Vec<serde_json::Value>,
    #[serde(default)]
    pub attachments: Vec<serde_json::Value>,
}

impl Card {
    /// Create a card in the given column
    pub fn new(
        id: impl Into<CardId>,
        column_id: impl Into<ColumnId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            board_id: None,
            column_id: column_id.into(),
            title: title.into(),
            description: None,
            cover: None,
            member_ids: Vec::new(),
            comments: Vec::new(),
            attachments: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the cover image
    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }
}

fn is_permutation<'a, T, A, B>(order: A, items: B) -> bool
where
    T: Eq + std::hash::Hash + 'a,
    A: Iterator<Item = &'a T>,
    B: Iterator<Item = &'a T>,
{
    let mut listed = HashSet::new();
    for id in order {
        if !listed.insert(id) {
            return false;
        }
    }
    let mut present = HashSet::new();
    for id in items {
        if !present.insert(id) {
            return false;
        }
    }
    listed == present
}

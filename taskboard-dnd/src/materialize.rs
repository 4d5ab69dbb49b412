//! Order materializer: turns a loaded board into its ordered view.

use crate::types::{Board, Column, OrderedBoard};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

/// Sort `items` by the position of their key in `order`.
///
/// The sort is stable. Items whose key is missing from `order` sort ahead of
/// every listed item and keep their relative order. Keys in `order` with no
/// matching item are ignored; a key listed twice ranks at its first position.
pub fn map_order<T, K, F>(items: &[T], order: &[K], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> &K,
{
    let mut rank: HashMap<&K, usize> = HashMap::with_capacity(order.len());
    for (i, k) in order.iter().enumerate() {
        rank.entry(k).or_insert(i);
    }

    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| rank.get(key(item)).copied());
    sorted
}

/// Build the ordered view of a board.
///
/// An absent board (nothing loaded yet) materializes to an empty view. Each
/// column's `card_order_ids` in the result is recomputed from its ordered
/// cards, so the two always agree even if the input did not.
pub fn materialize(board: Option<&Board>) -> OrderedBoard {
    let Some(board) = board else {
        return OrderedBoard::empty();
    };

    let columns: Vec<Column> = map_order(&board.columns, &board.column_order_ids, |c| &c.id)
        .into_iter()
        .map(|mut column| {
            column.cards = map_order(&column.cards, &column.card_order_ids, |c| &c.id);
            column.sync_card_order();
            column
        })
        .collect();

    debug!(
        board = %board.id,
        columns = columns.len(),
        cards = board.card_count(),
        "materialized board"
    );

    OrderedBoard::new(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Card, CardId, ColumnId};

    #[test]
    fn test_map_order_follows_order() {
        let items = vec!["b", "c", "a"];
        let order = vec!["a", "b", "c"];
        assert_eq!(map_order(&items, &order, |s| s), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_map_order_unlisted_items_lead() {
        let items = vec!["b", "z", "a", "y"];
        let order = vec!["a", "b", "missing"];
        assert_eq!(map_order(&items, &order, |s| s), vec!["z", "y", "a", "b"]);
    }

    #[test]
    fn test_materialize_absent_board() {
        assert!(materialize(None).is_empty());
    }

    #[test]
    fn test_materialize_orders_columns_and_cards() {
        let mut board = Board::new("b1", "Board")
            .with_column(
                Column::new("x", "To Do")
                    .with_card(Card::new("c1", "x", "One"))
                    .with_card(Card::new("c2", "x", "Two")),
            )
            .with_column(Column::new("y", "Done"));
        board.column_order_ids = vec![ColumnId::from("y"), ColumnId::from("x")];
        board.columns[0].card_order_ids = vec![CardId::from("c2"), CardId::from("c1")];

        let ordered = materialize(Some(&board));
        assert_eq!(
            ordered.column_order_ids(),
            vec![ColumnId::from("y"), ColumnId::from("x")]
        );
        let x = ordered.column("x").unwrap();
        assert_eq!(x.cards[0].id.as_str(), "c2");
        assert_eq!(
            x.card_order_ids,
            vec![CardId::from("c2"), CardId::from("c1")]
        );
    }

    #[test]
    fn test_materialize_does_not_touch_source() {
        let board = Board::new("b1", "Board").with_column(
            Column::new("x", "To Do")
                .with_card(Card::new("c1", "x", "One"))
                .with_card(Card::new("c2", "x", "Two")),
        );
        let before = board.clone();
        let _ = materialize(Some(&board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_materialize_resyncs_stale_card_order() {
        let mut board = Board::new("b1", "Board").with_column(
            Column::new("x", "To Do")
                .with_card(Card::new("c1", "x", "One"))
                .with_card(Card::new("c2", "x", "Two")),
        );
        board.columns[0].card_order_ids = vec![CardId::from("c2"), CardId::from("gone")];

        let ordered = materialize(Some(&board));
        let x = ordered.column("x").unwrap();
        assert_eq!(
            x.card_order_ids,
            vec![CardId::from("c1"), CardId::from("c2")]
        );
    }
}

//! Property tests: no sequence of drag events can corrupt a board

use proptest::prelude::*;
use std::collections::BTreeSet;
use taskboard_dnd::{
    Board, BoardView, Card, Column, DragEnd, DragEvent, DragOver, DragStart, OrderedBoard, Rect,
};

fn build_board(cards_per_column: &[usize]) -> Board {
    let mut board = Board::new("b1", "Property board");
    let mut next_card = 0;
    for (i, count) in cards_per_column.iter().enumerate() {
        let column_id = format!("col{i}");
        let mut column = Column::new(column_id.as_str(), format!("Column {i}"));
        for _ in 0..*count {
            let card_id = format!("card{next_card}");
            next_card += 1;
            column = column.with_card(Card::new(card_id.as_str(), column_id.as_str(), "Task"));
        }
        board = board.with_column(column);
    }
    board
}

/// One raw step: which kind of event, which elements, where the pointer is
#[derive(Debug, Clone)]
struct Step {
    kind: u8,
    active: usize,
    over: Option<usize>,
    below: bool,
}

fn step() -> impl Strategy<Value = Step> {
    let over = proptest::option::of(any::<usize>());
    (0u8..3, any::<usize>(), over, any::<bool>()).prop_map(|(kind, active, over, below)| Step {
        kind,
        active,
        over,
        below,
    })
}

fn element_ids(board: &OrderedBoard) -> Vec<String> {
    board
        .iter()
        .flat_map(|c| {
            let cards = c.cards.iter().map(|card| card.id.to_string());
            std::iter::once(c.id.to_string()).chain(cards)
        })
        .collect()
}

fn to_event(view: &BoardView, step: &Step) -> DragEvent {
    let ids = element_ids(view.ordered());
    let active = &ids[step.active % ids.len()];
    let over = step.over.map(|i| ids[i % ids.len()].clone());
    let data = view
        .snapshot(active)
        .expect("every listed element has a snapshot");

    match step.kind {
        0 => DragStart::new(active.as_str(), data).into(),
        1 => {
            let hovered = Rect::new(0.0, 100.0, 250.0, 40.0);
            let translated = if step.below {
                Rect::new(0.0, 200.0, 250.0, 40.0)
            } else {
                Rect::new(0.0, 80.0, 250.0, 40.0)
            };
            let mut event = DragOver::new(active.as_str(), data).translated(translated);
            if let Some(over) = over {
                event = event.over(over.as_str(), hovered);
            }
            event.into()
        }
        _ => match over {
            Some(over) => DragEnd::new(active.as_str(), over.as_str()).into(),
            None => DragEnd::cancelled(active.as_str()).into(),
        },
    }
}

fn card_set(board: &OrderedBoard) -> BTreeSet<String> {
    board.card_ids().into_iter().map(str::to_string).collect()
}

fn assert_consistent(board: &OrderedBoard, expected_cards: &BTreeSet<String>, columns: usize) {
    let ids = board.card_ids();
    assert_eq!(ids.len(), expected_cards.len(), "card duplicated or lost");
    assert_eq!(&card_set(board), expected_cards);
    assert_eq!(board.len(), columns);

    for column in board.iter() {
        let derived: Vec<_> = column.cards.iter().map(|c| c.id.clone()).collect();
        assert_eq!(column.card_order_ids, derived, "order ids drifted");
        for card in &column.cards {
            assert_eq!(card.column_id, column.id, "{} points elsewhere", card.id);
        }
    }
}

proptest! {
    /// Property: the card set and per-column order ids survive any event stream
    #[test]
    fn prop_random_gestures_preserve_invariants(
        layout in proptest::collection::vec(0usize..5, 1..5),
        steps in proptest::collection::vec(step(), 0..40),
    ) {
        let board = build_board(&layout);
        let mut view = BoardView::with_board(board);
        let expected = card_set(view.ordered());

        for step in &steps {
            let event = to_event(&view, step);
            view.dispatch(&event);
            assert_consistent(view.ordered(), &expected, layout.len());
        }
    }

    /// Property: the same drag-over twice equals the same drag-over once
    #[test]
    fn prop_drag_over_is_idempotent(
        layout in proptest::collection::vec(1usize..4, 2..5),
        over in step(),
    ) {
        let board = build_board(&layout);
        let mut view = BoardView::with_board(board);
        let ids = element_ids(view.ordered());
        let cards = view.ordered().card_ids();
        let card = cards[over.active % cards.len()].to_string();
        let data = view.snapshot(&card).unwrap();
        view.drag_start(&DragStart::new(card.as_str(), data.clone()));

        let target = ids[over.over.unwrap_or(0) % ids.len()].clone();
        let top = if over.below { 200.0 } else { 80.0 };
        let event = DragOver::new(card.as_str(), data)
            .over(target.as_str(), Rect::new(0.0, 100.0, 250.0, 40.0))
            .translated(Rect::new(0.0, top, 250.0, 40.0));

        view.drag_over(&event);
        let once = view.ordered().clone();
        view.drag_over(&event);
        prop_assert_eq!(&once, view.ordered());
    }

    /// Property: every drag-end leaves an idle session
    #[test]
    fn prop_end_always_clears_session(
        layout in proptest::collection::vec(0usize..4, 1..4),
        steps in proptest::collection::vec(step(), 1..20),
    ) {
        let mut view = BoardView::with_board(build_board(&layout));
        for step in &steps {
            let event = to_event(&view, step);
            view.dispatch(&event);
            if matches!(event, DragEvent::End(_)) {
                prop_assert!(view.session().is_idle());
                prop_assert!(view.overlay().is_none());
            }
        }
    }
}

//! Table rendering for boards.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use taskboard_dnd::{Column, OrderedBoard};

use crate::script::StepReport;

/// Create a table that wraps to the terminal width, or 120 columns when
/// not attached to one
pub fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if table.width().is_none() {
        table.set_width(120);
    }
    table
}

/// Truncate a string to `max` characters, appending "..." if truncated.
///
/// Safe for multi-byte (UTF-8) strings.
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// One heading plus one table per column, in display order
pub fn render_board(title: &str, board: &OrderedBoard) -> String {
    let mut out = format!("{} ({} columns)\n", title, board.len());
    for column in board.iter() {
        out.push('\n');
        out.push_str(&render_column(column));
    }
    out
}

fn render_column(column: &Column) -> String {
    let heading = format!(
        "{} [{}] - {} card{}\n",
        column.title,
        column.id,
        column.cards.len(),
        if column.cards.len() == 1 { "" } else { "s" }
    );
    if column.cards.is_empty() {
        return heading;
    }

    let mut table = new_table();
    table.set_header(vec!["#", "Card", "Title"]);
    for (position, card) in column.cards.iter().enumerate() {
        table.add_row(vec![
            (position + 1).to_string(),
            card.id.to_string(),
            truncate_str(&card.title, 60),
        ]);
    }
    format!("{}{}\n", heading, table)
}

/// Which replayed steps changed the board
pub fn render_steps(reports: &[StepReport]) -> String {
    let mut table = new_table();
    table.set_header(vec!["Step", "Event", "Changed"]);
    for report in reports {
        table.add_row(vec![
            report.step.to_string(),
            report.event.to_string(),
            if report.changed { "yes" } else { "-" }.to_string(),
        ]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_dnd::{materialize, Board, Card};

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 5), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("こんにちは世界テスト", 6), "こんに...");
    }

    #[test]
    fn test_render_board_lists_columns_in_order() {
        let board = Board::new("b1", "Sprint")
            .with_column(
                Column::new("y", "Doing").with_card(Card::new("c1", "y", "Build")),
            )
            .with_column(Column::new("z", "Done"));
        let out = render_board("Sprint", &materialize(Some(&board)));

        assert!(out.starts_with("Sprint (2 columns)"));
        let doing = out.find("Doing [y] - 1 card\n").unwrap();
        let done = out.find("Done [z] - 0 cards").unwrap();
        assert!(doing < done);
        assert!(out.contains("Build"));
    }

    #[test]
    fn test_render_steps() {
        let out = render_steps(&[StepReport {
            step: 1,
            event: "drag-over",
            changed: true,
        }]);
        assert!(out.contains("drag-over"));
        assert!(out.contains("yes"));
    }
}

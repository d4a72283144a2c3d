//! Card grid layout
//!
//! Packs fixed-width cards into rows that fit the terminal and joins each
//! row side by side, top-aligned.

use super::card::Card;

/// How many cards fit across the terminal. Never less than one.
#[must_use]
pub fn cards_per_row(column_width: usize, terminal_width: usize) -> usize {
    if column_width == 0 {
        return 1;
    }
    (terminal_width / column_width).max(1)
}

/// Group items into rows of `per_row`, row-major, keeping input order.
/// The last row may be shorter.
#[must_use]
pub fn pack_rows<T>(items: &[T], per_row: usize) -> Vec<&[T]> {
    items.chunks(per_row.max(1)).collect()
}

/// Join cards horizontally with their top edges aligned. Shorter cards are
/// padded below with blank space of their own width.
#[must_use]
pub fn join_horizontal(cards: &[Card]) -> String {
    let height = cards.iter().map(Card::height).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(height);

    for i in 0..height {
        let line: String = cards
            .iter()
            .map(|card| {
                card.lines
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| " ".repeat(card.width))
            })
            .collect();
        lines.push(line);
    }

    lines.join("\n")
}

/// Lay cards out in rows for a terminal `terminal_width` columns wide.
///
/// Returns one string per row; each may span several lines.
#[must_use]
pub fn layout(cards: &[Card], column_width: usize, terminal_width: usize) -> Vec<String> {
    let per_row = cards_per_row(column_width, terminal_width);
    pack_rows(cards, per_row)
        .into_iter()
        .map(join_horizontal)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(label: &str, height: usize, width: usize) -> Card {
        let mut lines = vec![format!("{label:<width$}")];
        lines.extend((1..height).map(|_| ".".repeat(width)));
        Card { lines, width }
    }

    #[test]
    fn test_cards_per_row() {
        assert_eq!(cards_per_row(24, 80), 3);
        assert_eq!(cards_per_row(24, 72), 3);
        assert_eq!(cards_per_row(24, 71), 2);
    }

    #[test]
    fn test_cards_per_row_narrow_terminal_clamps_to_one() {
        assert_eq!(cards_per_row(24, 10), 1);
        assert_eq!(cards_per_row(24, 0), 1);
        assert_eq!(cards_per_row(0, 80), 1);
    }

    #[test]
    fn test_pack_rows_ten_by_three() {
        let items: Vec<u32> = (0..10).collect();
        let rows = pack_rows(&items, 3);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3], &[9]);
        let flattened: Vec<u32> = rows.concat();
        assert_eq!(flattened, items);
    }

    #[test]
    fn test_pack_rows_empty() {
        let items: Vec<u32> = vec![];
        assert!(pack_rows(&items, 3).is_empty());
    }

    #[test]
    fn test_layout_ten_cards_four_rows() {
        let cards: Vec<Card> = (0..10).map(|i| card(&i.to_string(), 3, 4)).collect();
        let rows = layout(&cards, 4, 12);
        assert_eq!(rows.len(), 4);

        let first_lines: Vec<&str> = rows.iter().map(|r| r.lines().next().unwrap()).collect();
        assert_eq!(first_lines, vec!["0   1   2   ", "3   4   5   ", "6   7   8   ", "9   "]);
    }

    #[test]
    fn test_join_horizontal_top_aligns() {
        let tall = card("a", 3, 2);
        let short = card("b", 1, 2);
        let joined = join_horizontal(&[tall, short]);
        assert_eq!(joined, "a b \n..  \n..  ");
    }

    #[test]
    fn test_join_horizontal_empty() {
        assert_eq!(join_horizontal(&[]), "");
    }

    #[test]
    fn test_layout_narrow_terminal_one_per_row() {
        let cards: Vec<Card> = (0..3).map(|i| card(&i.to_string(), 1, 24)).collect();
        let rows = layout(&cards, 24, 5);
        assert_eq!(rows.len(), 3);
    }
}

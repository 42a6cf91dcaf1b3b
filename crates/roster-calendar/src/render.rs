//! Plain-text table rendering for a month grid.

use crate::grid::MonthGrid;

/// Render a month grid as an aligned terminal table.
///
/// One line per day: zero-padded day number, day name, a `*` marker on
/// weekends, then the entry content. Lines with no content stay blank
/// after the marker column so the grid shape is visible even for an
/// empty month.
pub fn render_table(grid: &MonthGrid) -> String {
    let name_width = grid
        .rows
        .iter()
        .map(|r| r.day_name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(grid.rows.len() + 1);
    lines.push(grid.month.title());

    for row in &grid.rows {
        let marker = if row.weekend { "*" } else { " " };
        let pad = name_width - row.day_name.chars().count();
        let line = format!(
            "{:>2} ({}{}) {} {}",
            row.day,
            row.day_name,
            " ".repeat(pad),
            marker,
            row.content
        );
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use std::collections::HashMap;

    use crate::month::{DayNames, MonthRef};

    use super::*;

    #[test]
    fn test_render_includes_title_and_all_days() {
        let grid = MonthGrid::build(
            MonthRef::new(2024, 2).unwrap(),
            &DayNames::default(),
            &HashMap::new(),
        );
        let rendered = render_table(&grid);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "February 2024");
        assert_eq!(lines.len(), 30); // title + 29 days
    }

    #[test]
    fn test_render_marks_weekends_and_content() {
        let mut entries = HashMap::new();
        entries.insert("2024-03-02".to_string(), "Alice".to_string());

        let grid = MonthGrid::build(
            MonthRef::new(2024, 3).unwrap(),
            &DayNames::default(),
            &entries,
        );
        let rendered = render_table(&grid);
        let lines: Vec<&str> = rendered.lines().collect();

        // Day 1 is a Friday, day 2 a Saturday with content
        assert!(lines[1].starts_with(" 1 (Friday"));
        assert!(!lines[1].contains('*'));
        assert!(lines[2].contains('*'));
        assert!(lines[2].ends_with("Alice"));
    }

    #[test]
    fn test_name_column_aligned() {
        let grid = MonthGrid::build(
            MonthRef::new(2024, 3).unwrap(),
            &DayNames::default(),
            &HashMap::new(),
        );
        let rendered = render_table(&grid);

        // All closing parens line up on the widest name ("Wednesday")
        let positions: Vec<usize> = rendered
            .lines()
            .skip(1)
            .map(|l| l.find(')').unwrap())
            .collect();
        assert!(positions.iter().all(|&p| p == positions[0]));
    }
}

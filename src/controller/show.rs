use chrono::Datelike;
use comfy_table::{Cell, CellAlignment, Table, TableComponent};

use crate::calendar::{date_key, first_of_month, month_grid, parse_date_key};
use crate::config::Config;
use crate::controller::View;
use crate::store::PlannerStore;

/// Longest payment name shown inside a grid cell; the day view shows full text.
const GRID_NAME_CHARS: usize = 15;
const GRID_NOTE_CHARS: usize = 25;

/// Render the month grid: Monday-first day columns plus a week-total column,
/// followed by the month total and a payment-count summary.
pub(crate) fn render_month(store: &PlannerStore, view: &View, config: &Config) {
    let mut table = new_table();
    table.set_header(vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun", "Week"]);

    let mut month_total = 0.0;
    for week in month_grid(view.year, view.month) {
        let mut row: Vec<Cell> = vec![];
        let mut week_total = 0.0;

        for slot in week {
            match slot {
                Some(date) => {
                    let key = date_key(date);
                    let day_total = store.total_for(&key);
                    week_total += day_total;
                    row.push(Cell::new(day_cell(store, date.day(), &key, day_total, config)));
                }
                // Out-of-month placeholder, contributes nothing to totals
                None => row.push(Cell::new("")),
            }
        }
        month_total += week_total;

        row.push(Cell::new(format_amount(week_total, config)).set_alignment(CellAlignment::Right));
        table.add_row(row);
    }

    println!("{}", first_of_month(view.year, view.month).format("%B %Y"));
    println!("{table}");
    println!("Month total: {}", format_amount(month_total, config));

    let count = store.payments_in_month(view.year, view.month).len();
    if count > 0 {
        println!("{count} payments in this month");
    } else {
        println!("No payments yet this month");
    }
}

/// Render one day: numbered payment table with a total row, then the notes.
pub(crate) fn render_day(store: &PlannerStore, date: &str, config: &Config) {
    match parse_date_key(date) {
        Some(day) => println!("{}", day.format("%a, %d %b %Y")),
        None => println!("{date}"),
    }

    let payments = store.payments_on(date);
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Amount"]);
    for p in &payments {
        table.add_row(vec![
            Cell::new(p.id).set_alignment(CellAlignment::Right),
            Cell::new(p.name.as_str()),
            Cell::new(format_amount(p.amount, config)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Total"),
        Cell::new(format_amount(store.total_for(date), config)).set_alignment(CellAlignment::Right),
    ]);
    println!("{table}");

    let notes = store.notes_on(date);
    if !notes.is_empty() {
        let mut table = new_table();
        table.set_header(vec!["ID", "Note"]);
        for n in notes {
            table.add_row(vec![
                Cell::new(n.id).set_alignment(CellAlignment::Right),
                Cell::new(n.text.as_str()),
            ]);
        }
        println!("{table}");
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table
}

fn day_cell(store: &PlannerStore, day_number: u32, key: &str, day_total: f64, config: &Config) -> String {
    let mut lines = vec![day_number.to_string()];

    for p in store.payments_on(key) {
        lines.push(format!("{}: {}", truncate(&p.name, GRID_NAME_CHARS), format_amount(p.amount, config)));
    }
    for n in store.notes_on(key) {
        lines.push(truncate(&n.text, GRID_NOTE_CHARS));
    }
    lines.push(format!("Total {}", format_amount(day_total, config)));

    lines.join("\n")
}

/// Format a display amount with the configured currency prefix
fn format_amount(amount: f64, config: &Config) -> String {
    format!("{} {:.2}", config.currency, amount)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let short: String = text.chars().take(max_chars).collect();
        format!("{short}…")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 15), "short");
        assert_eq!(truncate("a very long payment name", 15), "a very long pay…");
        // Counts chars, not bytes
        assert_eq!(truncate("ééééé", 3), "ééé…");
    }
}


use crate::store::{Note, Payment};

/// Fixed column layout of the planner blob. Any consumer re-parsing this
/// format must tolerate exactly this layout.
pub(crate) const CSV_HEADER: &str = "type,date,name,amount,text";

/// A row parsed from the planner CSV blob. Rows with an unknown type or a
/// missing date are dropped before this enum is ever constructed.
#[derive(Debug, PartialEq)]
pub(crate) enum Row {
    Payment { date: String, name: String, amount: f64 },
    Note { date: String, text: String },
}

/// Serialize the full dataset. One `payment` row per payment with a trailing
/// empty text column, one `note` row per note with empty name/amount columns.
pub(crate) fn build_csv(payments: &[Payment], notes: &[Note]) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];

    for p in payments {
        lines.push(format!(
            "payment,{},{},{},",
            p.date,
            escape_field(&flatten_newlines(&p.name)),
            p.amount
        ));
    }

    for n in notes {
        lines.push(format!(
            "note,{},,,{}",
            n.date,
            quote_field(&flatten_newlines(&n.text))
        ));
    }

    lines.join("\n")
}

/// Parse a blob produced by [`build_csv`]. The header line is skipped, blank
/// lines are ignored and malformed rows are silently dropped.
pub(crate) fn parse_csv(text: &str) -> Vec<Row> {
    let mut rows = vec![];

    for line in text.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cols = split_line(line);
        let row_type = cols.first().map(String::as_str).unwrap_or("");
        let date = cols.get(1).map(String::as_str).unwrap_or("");
        if date.is_empty() {
            continue;
        }

        match row_type {
            "payment" => {
                let name = cols.get(2).map(String::as_str).unwrap_or("").trim().to_string();
                let amount = parse_amount(cols.get(3).map(String::as_str).unwrap_or(""));
                rows.push(Row::Payment { date: date.to_string(), name, amount });
            }
            "note" => {
                let text = cols.get(4).map(String::as_str).unwrap_or("").trim().to_string();
                rows.push(Row::Note { date: date.to_string(), text });
            }
            _ => {}
        }
    }

    rows
}

/// Parse the longest leading numeric prefix of an amount field, so trailing
/// noise like "12abc" still yields 12. No finite prefix means 0.
pub(crate) fn parse_amount(raw: &str) -> f64 {
    let raw = raw.trim();
    let mut amount = 0.0;
    for end in raw.char_indices().map(|(i, _)| i).skip(1).chain([raw.len()]) {
        if let Ok(v) = raw[..end].parse::<f64>() {
            if v.is_finite() {
                amount = v;
            }
        }
    }
    amount
}

/// Split a line on commas, respecting quoted segments. A quote toggles the
/// in-quotes state, a doubled quote inside a quoted segment is a literal
/// quote, commas inside quotes do not split.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = vec![];
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

/// Wrap in double quotes with internal quotes doubled, if and only if the
/// field contains a comma or a double quote.
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        quote_field(value)
    } else {
        value.to_string()
    }
}

/// Unconditionally quoted form, used for the note text column.
fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Multi-line fields are not representable: embedded line breaks become a
/// single space before serialization.
fn flatten_newlines(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

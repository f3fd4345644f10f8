use chrono::Duration;
use log::info;

use crate::calendar::{first_of_month, next_month, parse_date_key};
use crate::csv_format::{self, Row};

/// A scheduled payment on a single calendar day.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Payment {
    pub(crate) id: u32,
    pub(crate) date: String,
    pub(crate) name: String,
    pub(crate) amount: f64,
}

/// A free-text note attached to a single calendar day. Notes can be added and
/// deleted but not edited.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Note {
    pub(crate) id: u32,
    pub(crate) date: String,
    pub(crate) text: String,
}

/// In-memory planner model: ordered payment and note sequences with
/// independent monotonic id counters. Ids are an in-session handle only, a
/// reload from CSV renumbers everything from 1 in file order.
pub(crate) struct PlannerStore {
    payments: Vec<Payment>,
    notes: Vec<Note>,
    payment_id_seed: u32,
    note_id_seed: u32,

    /// Day currently open in the day view. Never persisted.
    pub(crate) selected_date: Option<String>,
}

impl PlannerStore {
    pub(crate) fn new() -> PlannerStore {
        PlannerStore {
            payments: vec![],
            notes: vec![],
            payment_id_seed: 1,
            note_id_seed: 1,
            selected_date: None,
        }
    }

    /// Append a payment with a freshly minted id. The caller validates input
    /// first: `name` is non-empty after trimming and `amount` is finite.
    pub(crate) fn add_payment(&mut self, date: &str, name: &str, amount: f64) -> &Payment {
        let id = self.payment_id_seed;
        self.payment_id_seed += 1;

        self.payments.push(Payment {
            id,
            date: date.to_string(),
            name: name.to_string(),
            amount,
        });
        self.payments.last().unwrap()
    }

    /// Mutate name and amount in place, leaving id and date unchanged.
    /// Returns false when no payment with that id exists.
    pub(crate) fn update_payment(&mut self, id: u32, name: &str, amount: f64) -> bool {
        match self.payments.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.name = name.to_string();
                p.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Remove the payment with the given id. No-op when absent.
    pub(crate) fn delete_payment(&mut self, id: u32) -> Option<Payment> {
        let idx = self.payments.iter().position(|p| p.id == id)?;
        Some(self.payments.remove(idx))
    }

    pub(crate) fn add_note(&mut self, date: &str, text: &str) -> &Note {
        let id = self.note_id_seed;
        self.note_id_seed += 1;

        self.notes.push(Note {
            id,
            date: date.to_string(),
            text: text.to_string(),
        });
        self.notes.last().unwrap()
    }

    pub(crate) fn delete_note(&mut self, id: u32) -> Option<Note> {
        let idx = self.notes.iter().position(|n| n.id == id)?;
        Some(self.notes.remove(idx))
    }

    /// All payments on a day, in insertion order.
    pub(crate) fn payments_on(&self, date: &str) -> Vec<&Payment> {
        self.payments.iter().filter(|p| p.date == date).collect()
    }

    pub(crate) fn notes_on(&self, date: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.date == date).collect()
    }

    /// Sum of payment amounts on a day, 0 when there are none.
    pub(crate) fn total_for(&self, date: &str) -> f64 {
        self.payments_on(date).iter().map(|p| p.amount).sum()
    }

    /// All payments whose parsed date key falls within the month, inclusive.
    /// Payments with an unparsable date key never match.
    pub(crate) fn payments_in_month(&self, year: i32, month: u32) -> Vec<&Payment> {
        let start = first_of_month(year, month);
        let (next_year, next) = next_month(year, month);
        let end = first_of_month(next_year, next) - Duration::days(1);
        self.payments
            .iter()
            .filter(|p| match parse_date_key(&p.date) {
                Some(d) => d >= start && d <= end,
                None => false,
            })
            .collect()
    }

    /// Drop everything and reset both id counters.
    pub(crate) fn clear(&mut self) {
        self.payments.clear();
        self.notes.clear();
        self.payment_id_seed = 1;
        self.note_id_seed = 1;
    }

    /// Serialize the whole model to the planner CSV blob.
    pub(crate) fn to_csv(&self) -> String {
        csv_format::build_csv(&self.payments, &self.notes)
    }

    /// Destructively replace the whole model from a CSV blob. Parsed entities
    /// are renumbered from 1 in file row order, original ids are discarded.
    pub(crate) fn load_csv(&mut self, text: &str) {
        self.clear();

        for row in csv_format::parse_csv(text) {
            match row {
                Row::Payment { date, name, amount } => {
                    self.add_payment(&date, &name, amount);
                }
                Row::Note { date, text } => {
                    self.add_note(&date, &text);
                }
            }
        }

        info!("Loaded {} payments and {} notes", self.payments.len(), self.notes.len());
    }

    pub(crate) fn select_date(&mut self, date: Option<String>) {
        self.selected_date = date;
    }
}

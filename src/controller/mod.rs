pub(crate) mod show;

use std::path::PathBuf;

use chrono::{Datelike, Local};
use log::{info, warn};

use crate::calendar::{date_key, next_month, prev_month};
use crate::config::Config;
use crate::parser;
use crate::parser::Statement::{
    AddNote, AddPayment, Clear, DeleteNote, DeletePayment, Export, Import, Next, Prev, Show,
    ShowDay, ShowMonth, Today, UpdatePayment,
};
use crate::parser::DateArg;
use crate::storage::BlobFile;
use crate::store::PlannerStore;

/// Month currently under the REPL cursor.
pub(crate) struct View {
    pub(crate) year: i32,
    pub(crate) month: u32,
}

impl View {
    pub(crate) fn today() -> View {
        let today = Local::now().date_naive();
        View { year: today.year(), month: today.month() }
    }

    fn shift_next(&mut self) {
        let (year, month) = next_month(self.year, self.month);
        self.year = year;
        self.month = month;
    }

    fn shift_prev(&mut self) {
        let (year, month) = prev_month(self.year, self.month);
        self.year = year;
        self.month = month;
    }
}

pub(crate) fn parse_and_run_command(
    store: &mut PlannerStore,
    view: &mut View,
    blob: &BlobFile,
    config: &Config,
    line: &str,
) -> Result<(), String> {
    let result = parser::parse(line);

    match result {
        Ok((_input, statement)) => {
            match statement {
                AddPayment(date, name, amount) => {
                    let date = resolve_date(date);
                    if name.is_empty() || !amount.is_finite() {
                        warn!("Payment needs a non-empty name and a finite amount, ignore operation.");
                        return Ok(());
                    }
                    let id = store.add_payment(&date, &name, amount).id;
                    info!("Added payment {id} on {date}");
                    persist(store, blob);
                    refresh_day_view(store, config, &date);
                }
                AddNote(date, text) => {
                    let date = resolve_date(date);
                    if text.is_empty() {
                        warn!("Note needs non-empty text, ignore operation.");
                        return Ok(());
                    }
                    let id = store.add_note(&date, &text).id;
                    info!("Added note {id} on {date}");
                    persist(store, blob);
                    refresh_day_view(store, config, &date);
                }
                UpdatePayment(id, name, amount) => {
                    if name.is_empty() || !amount.is_finite() {
                        warn!("Payment needs a non-empty name and a finite amount, ignore operation.");
                        return Ok(());
                    }
                    if store.update_payment(id, &name, amount) {
                        info!("Updated payment {id}");
                        persist(store, blob);
                        if let Some(date) = store.selected_date.clone() {
                            refresh_day_view(store, config, &date);
                        }
                    } else {
                        info!("No payment with id {id}, ignore operation.");
                    }
                }
                DeletePayment(id) => match store.delete_payment(id) {
                    Some(payment) => {
                        info!("Deleted payment {id}");
                        persist(store, blob);
                        refresh_day_view(store, config, &payment.date);
                    }
                    None => info!("No payment with id {id}, ignore operation."),
                },
                DeleteNote(id) => match store.delete_note(id) {
                    Some(note) => {
                        info!("Deleted note {id}");
                        persist(store, blob);
                        refresh_day_view(store, config, &note.date);
                    }
                    None => info!("No note with id {id}, ignore operation."),
                },
                Show => show::render_month(store, view, config),
                ShowMonth(year, month) => {
                    view.year = year;
                    view.month = month;
                    show::render_month(store, view, config);
                }
                ShowDay(date) => {
                    let date = resolve_date(date);
                    store.select_date(Some(date.clone()));
                    show::render_day(store, &date, config);
                }
                Next => {
                    view.shift_next();
                    show::render_month(store, view, config);
                }
                Prev => {
                    view.shift_prev();
                    show::render_month(store, view, config);
                }
                Today => {
                    *view = View::today();
                    show::render_month(store, view, config);
                }
                Export(file_path) => {
                    BlobFile::new(PathBuf::from(&file_path)).save(&store.to_csv());
                    info!("Exported planner to {file_path}");
                }
                Import(file_path) => {
                    match BlobFile::new(PathBuf::from(&file_path)).load() {
                        Some(text) => {
                            // Destructive replace, then persist and re-render
                            store.load_csv(&text);
                            persist(store, blob);
                            show::render_month(store, view, config);
                            if let Some(date) = store.selected_date.clone() {
                                show::render_day(store, &date, config);
                            }
                        }
                        None => warn!("Unable to import from {file_path}"),
                    }
                }
                Clear => {
                    store.clear();
                    blob.remove();
                    info!("Cleared all payments and notes");
                    show::render_month(store, view, config);
                    if let Some(date) = store.selected_date.clone() {
                        show::render_day(store, &date, config);
                    }
                }
            }
        }
        Err(e) => {
            return Err(e.to_string());
        }
    }

    Ok(())
}

fn resolve_date(date: DateArg) -> String {
    match date {
        DateArg::Today => date_key(Local::now().date_naive()),
        DateArg::Day(day) => date_key(day),
    }
}

fn persist(store: &PlannerStore, blob: &BlobFile) {
    blob.save(&store.to_csv());
}

/// Keep the open day view in sync with a mutation, the way the browser app
/// refreshed the day modal only when it showed the affected date.
fn refresh_day_view(store: &PlannerStore, config: &Config, date: &str) {
    if store.selected_date.as_deref() == Some(date) {
        show::render_day(store, date, config);
    }
}

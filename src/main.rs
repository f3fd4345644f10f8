use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::warn;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::Config;
use crate::controller::View;
use crate::storage::BlobFile;
use crate::store::PlannerStore;

mod calendar;
mod config;
mod controller;
mod csv_format;
mod parser;
mod storage;
mod store;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Planner CSV file path. Defaults to ~/.payplan/planner.csv
    file: Option<String>,

    /// Display settings file (toml)
    config_file: Option<String>,
}

static COMMAND_HISTORY_FILE: &str = ".payplan_history";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();

    let blob = BlobFile::new(planner_file(&cli)?);
    let config = match &cli.config_file {
        Some(f) => Config::load_from_file(f),
        None => Config::default(),
    };

    let mut store = PlannerStore::new();
    if let Some(text) = blob.load() {
        store.load_csv(&text);
    }
    let mut view = View::today();
    controller::show::render_month(&store, &view, &config);

    let mut rl = DefaultEditor::new()?;
    if rl.load_history(COMMAND_HISTORY_FILE).is_err() {
        println!("No previous history.");
    }
    let mut command_buffer: Vec<String> = vec![];
    loop {
        let readline = rl.readline("# ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                let is_last = line.ends_with(';');
                if !line.is_empty() {
                    command_buffer.push(line.to_string());
                }
                if is_last {
                    let command = command_buffer.join(" ");
                    let _ = rl.add_history_entry(command.trim());

                    let command = command.trim_end_matches(';');
                    let result = controller::parse_and_run_command(&mut store, &mut view, &blob, &config, command);
                    if let Err(err) = result {
                        println!("{}", err);
                    }

                    command_buffer.clear();
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    if let Err(e) = rl.save_history(COMMAND_HISTORY_FILE) {
        warn!("Unable to save command history: {e}");
    }

    Ok(())
}

fn planner_file(cli: &Cli) -> anyhow::Result<PathBuf> {
    match &cli.file {
        Some(f) => Ok(PathBuf::from(f)),
        None => {
            let home = dirs::home_dir().context("Unable to locate home directory")?;
            Ok(home.join(".payplan").join("planner.csv"))
        }
    }
}

mod cli;
mod commands;
mod controller;
mod field;
mod logging;
mod model;
mod slots;
mod storage;
mod ui;
mod view;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let command = args
        .command
        .unwrap_or(cli::Command::Tui { date: Default::default() });
    if let cli::Command::Init = command {
        return commands::init();
    }

    let settings = commands::Settings {
        data_dir: args.data_dir,
    };
    let location = commands::current_location(&settings)?;
    let level = logging::resolve_level(args.log_level.as_deref());
    let writes_store = !matches!(command, cli::Command::Show { .. });
    if let Some(log_dir) = logging::log_dir_for(&location.dir, writes_store) {
        if let Err(err) = logging::init_logging(&level, log_dir) {
            eprintln!("warning: logging disabled: {}", err);
        }
    }

    match command {
        cli::Command::Init => commands::init(),
        cli::Command::Show { date } => commands::show(&location, date),
        cli::Command::Set { time, task, date } => commands::set(&location, time, task, date),
        cli::Command::Clear { time, date } => commands::clear(&location, time, date),
        cli::Command::Tui { date } => commands::tui(&location, date),
    }
}

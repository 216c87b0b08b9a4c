mod app;
mod definition;
mod error;
mod format;
mod keybinds;
mod logging;
mod paths;
mod settings;
mod terminal;
mod view;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, MouseButton, MouseEventKind};

use datatable_lib::{DataTable, LayoutConfig};

use crate::app::App;
use crate::definition::TableDefinition;
use crate::error::AppError;
use crate::settings::Settings;
use crate::terminal::Terminal;

const TICK: Duration = Duration::from_millis(250);

/// Browse a JSON table definition in the terminal.
#[derive(Debug, Parser)]
#[command(name = "datatable", version, about)]
struct Cli {
    /// Table definition file.
    file: PathBuf,

    /// Print the table once as plain text and exit.
    #[arg(long)]
    print: bool,

    /// Maximum width for `--print` output.
    #[arg(long, value_name = "N")]
    width: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, value_name = "L")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut settings = match paths::settings_file() {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    if let Some(level) = cli.log_level {
        settings.log_level = level;
    }
    if let Err(e) = logging::init(settings.level()) {
        eprintln!("warning: {}", e);
    }

    let mut table = TableDefinition::load(&cli.file)?.into_table()?;
    apply_settings(&mut table, &settings);

    let mut config = LayoutConfig::default().max_column_width(settings.max_column_width);
    if cli.print {
        if let Some(width) = cli.width {
            config = config.max_width(width);
        }
        println!("{}", table.to_text(&config));
        return Ok(());
    }

    interactive(App::new(table, config))
}

/// Settings override the definition's presentation flags.
fn apply_settings(table: &mut DataTable, settings: &Settings) {
    let mut options = table.options().clone();
    if let Some(compact) = settings.compact {
        options.compact = compact;
    }
    if let Some(striped) = settings.striped {
        options.striped = striped;
    }
    table.set_options(options);
}

fn interactive(mut app: App) -> Result<(), AppError> {
    let mut terminal = Terminal::new().map_err(AppError::Terminal)?;
    let mut size = (0, 0);
    let mut dirty = true;

    while !app.should_quit() {
        let current = terminal.size().map_err(AppError::Terminal)?;
        if current != size {
            size = current;
            let height = usize::from(size.1).saturating_sub(view::STATUS_HEIGHT);
            app.resize(usize::from(size.0), height);
            dirty = true;
        }
        if dirty {
            let frame = view::compose(&app, usize::from(size.1));
            terminal.draw(&frame).map_err(AppError::Terminal)?;
            dirty = false;
        }

        for event in terminal.poll(TICK).map_err(AppError::Terminal)? {
            dirty |= handle_event(&mut app, event);
        }
    }

    log::info!("quit");
    Ok(())
}

/// Apply one terminal event. Returns whether a redraw is needed.
fn handle_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => match keybinds::action_for(key, app.mode()) {
            Some(action) => {
                app.apply(action);
                true
            }
            None => false,
        },
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                app.click(usize::from(mouse.column), usize::from(mouse.row));
                true
            }
            MouseEventKind::ScrollUp => {
                app.scroll_by(-1);
                true
            }
            MouseEventKind::ScrollDown => {
                app.scroll_by(1);
                true
            }
            _ => false,
        },
        Event::Resize(..) => true,
        _ => false,
    }
}

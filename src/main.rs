//! Datasnap - a terminal viewer for plot data sources with checkpoint,
//! restore and clear tools.

use anyhow::{bail, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use datasnap::app::App;
use datasnap::data::{sources_to_json, DataReader};
use datasnap::notify::TracingListener;
use datasnap::tools::{ToolKind, Toolbar};
use datasnap::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "datasnap")]
#[command(about = "Checkpoint, restore and clear plot data sources", long_about = None)]
struct Args {
    /// Path to a JSON file with data sources
    file: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Apply tools in order without the viewer and print the result as JSON
    #[arg(long, value_enum, value_delimiter = ',')]
    apply: Vec<ToolKind>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
        tracing::info!("Starting Datasnap");
    }

    // Validate path if provided
    if let Some(ref path) = args.file {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    if !args.apply.is_empty() {
        let Some(ref path) = args.file else {
            bail!("--apply needs a data file");
        };
        return run_headless(path, &args.apply);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.file);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Datasnap exited");

    Ok(())
}

fn run_headless(path: &Path, actions: &[ToolKind]) -> Result<()> {
    let sources = DataReader::read_file(path)?;
    let mut toolbar = Toolbar::with_sources(sources.clone());
    let mut listener = TracingListener;

    for &kind in actions {
        toolbar.activate(kind, &mut listener);
    }

    println!("{}", serde_json::to_string_pretty(&sources_to_json(&sources))?);
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let changed = app.sync_changes();
        if !changed.is_empty() {
            tracing::debug!("redrawing after changes to {} source(s)", changed.len());
        }
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                    // Tools
                    (KeyModifiers::NONE, KeyCode::Char('c')) => app.activate(ToolKind::Checkpoint),
                    (KeyModifiers::NONE, KeyCode::Char('r')) => app.activate(ToolKind::Restore),
                    (KeyModifiers::NONE, KeyCode::Char('x')) => app.activate(ToolKind::Clear),

                    // Edits
                    (KeyModifiers::NONE, KeyCode::Char('a')) => app.append_row(),
                    (KeyModifiers::NONE, KeyCode::Char('d')) => app.drop_row(),

                    // View
                    (KeyModifiers::NONE, KeyCode::Tab) => app.next_source(),
                    (KeyModifiers::NONE, KeyCode::Char('v')) => app.cycle_view_mode(),
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => app.scroll_down(1),
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => app.scroll_up(1),
                    (KeyModifiers::CONTROL, KeyCode::Char('d')) => app.scroll_down(10),
                    (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.scroll_up(10),

                    _ => {},
                }
            }
        }
    }
}

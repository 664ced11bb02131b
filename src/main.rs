//! Folio - a terminal-based academic portfolio viewer.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio::app::App;
use folio::data::{DataProvider, DirProvider, HttpProvider};
use folio::publications::{Filter, View};
use folio::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A terminal-based academic portfolio viewer", long_about = None)]
struct Args {
    /// Directory holding the publication JSON resources
    #[arg(default_value = "data")]
    data: PathBuf,

    /// Fetch resources from this base URL instead of the data directory
    #[arg(long)]
    url: Option<String>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Folio");
    }

    // Pick the data provider
    let provider: Box<dyn DataProvider> = match &args.url {
        Some(url) => Box::new(HttpProvider::new(url.clone())),
        None => {
            if !args.data.is_dir() {
                eprintln!("Error: Data directory not found: {}", args.data.display());
                std::process::exit(1);
            }
            Box::new(DirProvider::new(args.data.clone()))
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app, with the session sized to the terminal width
    let width = terminal.size().map(|s| s.width).unwrap_or(80);
    let app = App::new(provider, width);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Folio exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Lightbox mode - its bindings are exclusive while open,
                    // so the carousel arrows never double-fire.
                    if app.modal.is_open() {
                        match key.code {
                            KeyCode::Esc => app.close_modal(),
                            KeyCode::Left => app.modal_prev(),
                            KeyCode::Right => app.modal_next(),
                            _ => {}
                        }
                        continue;
                    }

                    // Normal mode
                    match (key.modifiers, key.code) {
                        // Quit
                        (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                        // Filter controls
                        (KeyModifiers::NONE, KeyCode::Char('a')) => app.set_filter(Filter::All),
                        (KeyModifiers::NONE, KeyCode::Char('r')) => app.set_filter(Filter::Recent),
                        (KeyModifiers::NONE, KeyCode::Char('i')) => {
                            app.set_filter(Filter::HighImpact)
                        },

                        // View controls
                        (KeyModifiers::NONE, KeyCode::Char('g')) => app.set_view(View::Grid),
                        (KeyModifiers::NONE, KeyCode::Char('l')) => app.set_view(View::List),

                        // Carousel navigation
                        (KeyModifiers::NONE, KeyCode::Left) => app.carousel_prev(),
                        (KeyModifiers::NONE, KeyCode::Right) => app.carousel_next(),
                        (KeyModifiers::NONE, KeyCode::Home) => app.go_to_slide(0),
                        (KeyModifiers::NONE, KeyCode::End) => {
                            let last = app.carousel.max_slides() as isize;
                            app.go_to_slide(last);
                        },
                        (KeyModifiers::NONE, KeyCode::Char(c)) if c.is_ascii_digit() => {
                            app.go_to_slide((c as u8 - b'0') as isize);
                        },

                        // Gallery selection
                        (KeyModifiers::NONE, KeyCode::Tab) => app.select_next(),
                        (KeyModifiers::NONE, KeyCode::Enter) => app.open_modal(),

                        // Publication scrolling
                        (KeyModifiers::NONE, KeyCode::Char('j')) => app.scroll_down(),
                        (KeyModifiers::NONE, KeyCode::Char('k')) => app.scroll_up(),

                        // Clipboard
                        (KeyModifiers::NONE, KeyCode::Char('c')) => app.copy_citations(),

                        // Session
                        (KeyModifiers::SHIFT, KeyCode::Char('R')) => app.reload(),
                        (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
                        (KeyModifiers::SHIFT, KeyCode::Char('?')) => app.show_help(),

                        _ => {},
                    }
                }
                Event::Resize(width, _) => app.handle_resize(width),
                _ => {}
            }
        }
    }
}

//! Festivo - a terminal festival directory.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use festivo::app::App;
use festivo::browser::render_plain;
use festivo::data::{FestivalLoader, FestivalSource, JsonFileSource};
use festivo::dates::DateFormatter;
use festivo::i18n::{BuiltinCatalog, Catalog, Locale, MessageKey};
use festivo::navigation::filter_festivals;
use festivo::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "festivo")]
#[command(about = "A terminal festival directory", long_about = None)]
struct Args {
    /// Festival API response (JSON array), or `-` for stdin
    #[arg(default_value = "festivals.json")]
    source: PathBuf,

    /// Display language (en, de)
    #[arg(long, default_value = "en", value_parser = parse_locale)]
    lang: Locale,

    /// Initial search query
    #[arg(long, short)]
    query: Option<String>,

    /// Print the filtered festivals and exit instead of opening the browser
    #[arg(long)]
    print: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn parse_locale(value: &str) -> std::result::Result<Locale, String> {
    Locale::parse(value).ok_or_else(|| {
        let supported: Vec<_> = Locale::ALL.iter().map(|l| l.code()).collect();
        format!("unsupported language '{}' (expected one of: {})", value, supported.join(", "))
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Festivo");
    }

    let source = JsonFileSource::new(&args.source);

    if args.print {
        return print_festivals(&source, &args);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let mut app = App::new(source.describe(), args.lang).with_loader(FestivalLoader::spawn(source));
    if let Some(query) = &args.query {
        query.chars().for_each(|c| app.search_input(c));
    }
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Festivo exited");
    }

    Ok(())
}

/// Non-interactive mode: fetch, filter and print as plain text.
fn print_festivals(source: &JsonFileSource, args: &Args) -> Result<()> {
    let catalog = BuiltinCatalog::new();
    let formatter = DateFormatter::new(args.lang, &catalog);

    let festivals = match source.fetch() {
        Ok(festivals) => festivals,
        Err(e) => {
            tracing::error!("Error loading festivals: {}", e);
            eprintln!("{}: {}", catalog.message(args.lang, MessageKey::LoadError), e);
            std::process::exit(1);
        },
    };

    let matches = filter_festivals(&festivals, args.query.as_deref().unwrap_or(""));
    let text = render_plain(&matches, &formatter, &catalog);

    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        app.poll_loader();
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if (key.modifiers, key.code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            return Ok(());
        }

        // Detail overlay - handle separately
        if app.detail.is_visible() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_detail(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(),
                KeyCode::Char('y') => app.copy_link(),
                _ => {},
            }
            continue;
        }

        // Search mode - every keystroke refilters
        if app.search.is_active() {
            match key.code {
                KeyCode::Enter => app.submit_search(),
                KeyCode::Esc => app.clear_search(),
                KeyCode::Backspace => app.search_backspace(),
                KeyCode::Char(c) => app.search_input(c),
                _ => {},
            }
            continue;
        }

        // Normal mode
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

            // Navigation
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.cursor_up();
            },
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.cursor_down();
            },
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                app.cursor_left();
            },
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                app.cursor_right();
            },

            // Vim navigation
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                if pending_g {
                    app.goto_first();
                    pending_g = false;
                } else {
                    pending_g = true;
                }
                continue;
            },
            (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                app.goto_last();
            },

            // Details
            (KeyModifiers::NONE, KeyCode::Enter) => {
                app.open_selected();
            },

            // Search
            (KeyModifiers::NONE, KeyCode::Char('/')) => {
                app.start_search();
            },
            (KeyModifiers::NONE, KeyCode::Esc) => {
                app.clear_search();
            },

            // Features
            (KeyModifiers::NONE, KeyCode::Char('y')) => {
                app.copy_link();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                app.cycle_theme();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('L')) => {
                app.cycle_locale();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('?')) | (KeyModifiers::NONE, KeyCode::Char('?')) => {
                app.show_help();
            },

            _ => {},
        }
        pending_g = false;
    }
}

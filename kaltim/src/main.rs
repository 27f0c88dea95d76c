//! East Kalimantan culture explorer TUI.
//!
//! Region browser, quizzes, narrated folk stories, and an audio-clip
//! library for Kalimantan Timur, in a terminal.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a text-based interface suitable for automated
//! drives:
//!
//! ```bash
//! cargo run -p kaltim -- --headless
//! ```

mod app;
mod events;
mod headless;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kaltim_core::headless::HeadlessConfig;
use kaltim_core::session::{GuideSession, SessionConfig};
use kaltim_core::speech::SimulatedSpeech;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--headless") {
        let config = HeadlessConfig::new().with_session(SessionConfig::from_env());
        return headless::run_headless(config).await.map_err(|e| e.into());
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let session = GuideSession::new(Box::new(SimulatedSpeech::new()), SessionConfig::from_env());
    let result = run_app(&mut terminal, App::new(session)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        // Poll for events with a timeout that doubles as the tick source
        // for the quiz countdown and narration status.
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(()),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("Jelajah Kaltim - penjelajah budaya Kalimantan Timur");
    println!();
    println!("USAGE:");
    println!("  kaltim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Run the line-oriented interface (no TUI)");
    println!();
    println!("ENVIRONMENT:");
    println!("  KALTIM_VOICE        Preferred narration voice identifier");
    println!("  KALTIM_SPEECH_RATE  Narration speech rate (default 1.0)");
    println!();
    println!("SCREENS:");
    println!("  Daerah   Region browser with culture, photos, and fun facts");
    println!("  Kuis     Quizzes, including access-code quizzes from teachers");
    println!("  Cerita   Folk stories with paragraph-by-paragraph narration");
    println!("  Audio    Catalogued spoken-language clips");
}

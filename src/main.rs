// algotty: step-through sorting and searching algorithm visualizer

mod input;
mod player;
mod trace;
mod tracer;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ui::{App, Screen};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    let screen = match args.get(1).map(|s| s.as_str()) {
        None => Screen::Home,
        Some("sort") | Some("sorting") => Screen::Sorting,
        Some("search") | Some("searching") => Screen::Searching,
        Some(other) => {
            let program_name = args.first().map(|s| s.as_str()).unwrap_or("algotty");
            eprintln!("Error: Unknown screen '{}'", other);
            eprintln!();
            eprintln!("Usage: {} [sort|search]", program_name);
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {}            # open the home menu", program_name);
            eprintln!(
                "  {} sort       # go straight to the sorting visualizer",
                program_name
            );
            eprintln!(
                "  {} search     # go straight to the searching visualizer",
                program_name
            );
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(screen);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

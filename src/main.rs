use typesphere::config::{load_config, CliArgs};
use typesphere::{actions, event, logging, ui, AppState};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    logging::init(config.log_file.as_deref())?;
    tracing::info!("typesphere v{} starting", env!("CARGO_PKG_VERSION"));
    logging::log_config(&config);

    // Create application state
    let mut app = AppState::new(config)?;

    if args.print_layout {
        println!("{}", app.layout_json(args.columns, args.rows)?);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Clear the terminal
    terminal.clear()?;

    // Run the main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors from the main loop
    if let Err(err) = res {
        tracing::error!("main loop failed: {err}");
        eprintln!("Error: {}", err);
    }

    tracing::info!("typesphere exiting");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    let started = Instant::now();
    let interval = app.frame_interval();

    while app.running {
        // Everything animated derives from the elapsed time
        app.set_time(started.elapsed());

        // Draw the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle events, waiting out the rest of the frame
        if let Some(action) = event::handle_events(app, interval)? {
            actions::execute_action(action, app)?;
        }
    }

    Ok(())
}

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use grid_picker::app::{handle_event, render, App, ScreenLayout};
use grid_picker::{PickerConfig, PickerError, PickerResult};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::OpenOptions,
    io::{self, Stdout},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Instant,
};

fn show_help() {
    println!("grid_picker - pick a number by dragging a marker over a 10x10 grid");
    println!();
    println!("USAGE:");
    println!("  grid_picker [--config <path>] [--write-config <path>]");
    println!();
    println!("OPTIONS:");
    println!("  --config <path>        Load settings from a JSON file");
    println!("  --write-config <path>  Write the effective settings to a JSON file and exit");
    println!("  -h, --help             Show this help");
    println!();
    println!("ENVIRONMENT:");
    println!("  GRID_PICKER_SCREEN_WIDTH, GRID_PICKER_ANIMATION_MS, GRID_PICKER_TICK_MS,");
    println!("  GRID_PICKER_QUESTION, GRID_PICKER_LOG_FILE, RUST_LOG");
}

fn init_logging(config: &PickerConfig) -> PickerResult<()> {
    // The TUI owns stdout/stderr, so without a log file only errors get through
    let mut builder = match &config.logging.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let mut builder = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
            );
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"))
        }
    };
    builder.init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let mut config_path = None;
    let mut write_config = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                show_help();
                return Ok(());
            }
            "--config" => {
                i += 1;
                config_path = args.get(i).cloned();
            }
            "--write-config" => {
                i += 1;
                write_config = args.get(i).cloned();
            }
            unknown => {
                eprintln!("Unknown argument: {}", unknown);
                eprintln!("Run 'grid_picker --help' for usage information");
                return Ok(());
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => PickerConfig::load_from_file(&path)?.with_env(),
        None => PickerConfig::from_env(),
    };
    config.validate()?;

    if let Some(path) = write_config {
        config.save_to_file(&path)?;
        println!("Wrote configuration to {}", path);
        return Ok(());
    }

    init_logging(&config)?;
    info!("starting with screen width {}", config.screen.width);

    // Only catches an external SIGINT (e.g. `kill -INT`). In raw mode Ctrl+C
    // arrives as a key event and is handled in app::events.
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, App::new(config), &running);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("picker stopped: {}", e);
    }
    result.map_err(Into::into)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    running: &AtomicBool,
) -> PickerResult<()> {
    let tick_rate = app.config().tick_rate();
    let mut last_tick = Instant::now();
    let mut layout: Option<ScreenLayout> = None;

    loop {
        let now = Instant::now();
        terminal
            .draw(|f| {
                layout = Some(ScreenLayout::compute(f.area(), &app));
                render(f, &app, now);
            })
            .map_err(|e| PickerError::TerminalError(e.to_string()))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let event = event::read()?;
            if let Some(layout) = &layout {
                handle_event(&mut app, &event, layout, Instant::now());
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick(Instant::now());
            last_tick = Instant::now();
        }

        if app.should_quit || !running.load(Ordering::SeqCst) {
            info!("quitting with {} selected", app.selected());
            return Ok(());
        }
    }
}

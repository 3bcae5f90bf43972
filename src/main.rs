use anyhow::Result;
use clap::{Arg, Command};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io::stdout, panic, path::PathBuf};

use snipw::{
    app::App,
    config::RcConfig,
    input,
    logging::init_logging,
    rendering::Renderer,
    replace::MatchMode,
    tables::{load_tables, sample_tables},
};

fn main() -> Result<()> {
    // Set up panic handler to properly clean up terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = execute!(stdout(), cursor::Show);

        original_hook(panic_info);
    }));

    let matches = Command::new("snipw")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Cheat-sheet of copyable command snippets")
        .arg(
            Arg::new("file")
                .help("JSON file with the tables to show (built-in sample when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the tables with replacements applied instead of starting the UI")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output to file (use '-' for stdout)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("section")
                .long("section")
                .help("Section id to scroll to on start, e.g. docker-commands-2")
                .value_name("ID"),
        )
        .arg(
            Arg::new("regex")
                .long("regex")
                .help("Treat replacement keys as regular expressions")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-copied")
                .long("no-copied")
                .help("Do not highlight copied rows")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_guard = init_logging();

    let mut config = RcConfig::load();
    if matches.get_flag("regex") {
        config.match_mode = MatchMode::Pattern;
    }
    if matches.get_flag("no-copied") {
        config.show_copied = false;
    }

    let file_path = matches.get_one::<String>("file").map(PathBuf::from);
    let tables = match &file_path {
        Some(path) => match load_tables(path) {
            Ok(tables) => tables,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "cannot load tables");
                eprintln!("Error: {:#}", e);
                drop(log_guard);
                std::process::exit(1);
            }
        },
        None => sample_tables(),
    };

    let stdout_mode = matches.get_flag("stdout");
    let output_file = matches.get_one::<String>("output");

    // If stdout mode or output file specified, run in non-interactive mode
    if stdout_mode || output_file.is_some() {
        let output = Renderer::render_plain(&tables, config.match_mode).join("\n");

        match output_file {
            Some(output_path) if output_path != "-" => fs::write(output_path, output)?,
            _ => println!("{}", output),
        }
        return Ok(());
    }

    let mut app = App::with_config(tables, &config);
    app.file_path = file_path;
    if let Some(id) = matches.get_one::<String>("section") {
        app.navigate_to_fragment(id);
    }

    let setup_result = (|| -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        execute!(stdout, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        Ok(Terminal::new(backend)?)
    })();

    let mut terminal = match setup_result {
        Ok(term) => term,
        Err(e) => {
            eprintln!("Failed to initialize terminal: {}", e);
            return Err(e);
        }
    };

    let res = input::run_app(&mut terminal, app);

    // Always clean up, even if there was an error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = execute!(terminal.backend_mut(), cursor::Show);
    let _ = terminal.show_cursor();

    if let Err(err) = res {
        tracing::error!(error = %err, "application error");
        eprintln!("Application error: {}", err);
        // `exit` skips destructors, flush the log writer first
        drop(log_guard);
        std::process::exit(1);
    }

    Ok(())
}

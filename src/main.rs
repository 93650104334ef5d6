// lexscope: lexical analyzer and backtracking syntax checker

use std::fs;
use std::io;
use std::process;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use lexscope::analysis::{Analysis, Verdict, DEMO_SOURCE};
use lexscope::cli::Cli;
use lexscope::report::render_report;
use lexscope::ui::App;

/// Install a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            eprint!("{}", err);
            process::exit(1);
        }
        Err(err) => {
            // --help and --version
            print!("{}", err);
            return Ok(());
        }
    };

    init_tracing();

    let source = match &cli.file {
        Some(path) => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: cannot read '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => DEMO_SOURCE.to_string(),
    };

    let analysis = Analysis::run(source, cli.config());

    if cli.plain {
        print!("{}", render_report(&analysis));
        let code = match analysis.verdict() {
            Verdict::Accepted { .. } => 0,
            Verdict::SyntaxError { .. } => 2,
            Verdict::Fatal(_) => 3,
        };
        process::exit(code);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(analysis);
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

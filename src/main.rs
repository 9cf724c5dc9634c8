// rpncalc: interactive Reverse Polish Notation calculator

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use clap::Parser;
use rpncalc::calculator::Calculator;
use rpncalc::config::{Cli, Config, Mode};
use rpncalc::logging;
use rpncalc::shell::plain;
use rpncalc::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from(Cli::parse());
    logging::init(&config)?;
    let mut calculator = Calculator::new();

    match &config.mode {
        Mode::Batch(path) => {
            let mut stdout = io::stdout().lock();
            let all_ok = match path {
                Some(path) => {
                    let file = match File::open(path) {
                        Ok(file) => file,
                        Err(e) => {
                            eprintln!("Error: Cannot open '{}': {}", path.display(), e);
                            std::process::exit(1);
                        }
                    };
                    plain::run_batch_file(&mut calculator, BufReader::new(file), &mut stdout)?
                }
                None => plain::run_batch_file(&mut calculator, io::stdin().lock(), &mut stdout)?,
            };
            if !all_ok {
                std::process::exit(1);
            }
        }
        Mode::Tui if io::stdout().is_terminal() => run_tui(calculator)?,
        // Without a terminal to draw on, fall back to the line-mode shell
        Mode::Tui | Mode::Plain => {
            plain::run(&mut calculator, io::stdin().lock(), &mut io::stdout().lock())?;
        }
    }

    Ok(())
}

fn run_tui(calculator: Calculator) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(calculator);
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

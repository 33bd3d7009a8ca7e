mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::cli::Cli;
use crate::config::Config;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

static HELP: &str = concat!(
    "Usage: ",
    env!("CARGO_PKG_NAME"),
    " [-c FILE]\n",
    "\n",
    "Steer the snake with the arrow keys, WASD, or a mouse swipe across the\n",
    "board.  Eat to grow; every tenth point earns a shower of confetti.\n",
    "\n",
    "Options:\n",
    "  -c FILE, --config FILE    Read configuration from FILE\n",
    "  -h, --help                Show this help and exit\n",
    "  -V, --version             Show the program version and exit\n",
);

fn main() -> ExitCode {
    let cli = match Cli::from_env() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    let config = match cli {
        Cli::Help => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Cli::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Cli::Run { config } => {
            // A config file named on the command line must exist; the default
            // one need not.
            let r = match config {
                Some(path) => Config::load(&path, false),
                None => Config::default_path().and_then(|path| Config::load(&path, true)),
            };
            match r {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::from(2);
                }
            }
        }
    };
    let terminal = ratatui::init();
    // Mouse capture is best effort; the keyboard still works without it.
    let _ = crossterm::execute!(io::stdout(), EnableMouseCapture);
    let r = App::new(&config).run(terminal);
    let _ = crossterm::execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    io_exit(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

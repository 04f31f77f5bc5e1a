//! Interactive shell for the `ordered-tree` AVL library.
//!
//! # Usage
//!
//! ```bash
//! # Start the interactive menu
//! otree
//!
//! # Run a script of operations and exit
//! otree -c "insert 5; insert 3; show"
//!
//! # Pre-load keys, then open the menu
//! otree --seed 20,10,30
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod menu;
mod session;

use commands::{parse_script, ActionResult};
use menu::Menu;
use session::{Session, SessionConfig};

/// Interactive shell for a self-balancing ordered tree
#[derive(Parser, Debug)]
#[command(name = "otree", version, about)]
struct Args {
    /// Execute a semicolon-separated list of operations and exit,
    /// e.g. "insert 5; insert 3; show"
    #[arg(short = 'c', long)]
    command: Option<String>,

    /// Keys to insert before the session starts
    #[arg(short = 's', long, value_delimiter = ',')]
    seed: Vec<i64>,

    /// Suppress the banner and the diagram echo after mutations
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut session = Session::new(SessionConfig {
        echo_diagram: !args.quiet,
    });
    session.seed(&args.seed);

    if let Some(script) = &args.command {
        run_script(&mut session, script)
    } else {
        let mut menu = Menu::new(session)?;
        if !args.quiet {
            menu.print_banner();
        }
        menu.run()
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("ordered_tree_cli=debug")
    } else {
        EnvFilter::new("ordered_tree_cli=warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn run_script(session: &mut Session, script: &str) -> Result<()> {
    for action in parse_script(script)? {
        match session.apply(&action) {
            ActionResult::Exit => break,
            ActionResult::Output(text) => println!("{text}"),
        }
    }
    Ok(())
}

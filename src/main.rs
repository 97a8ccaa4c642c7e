//! Breadboard - circuit diagram checker
//!
//! Loads a diagram file, presses "run" once and reports what the editor
//! would show: the run state, connected groups and any remediation.
//!
//! # Usage
//!
//! ```bash
//! breadboard lamp.bb --anchors
//! breadboard lamp.bb --prune --strict -v
//! ```

use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};

use breadboard_core::{
    dsl,
    error::Result,
    report::{require_running, run_once, write_report, ReportOptions},
    Editor, EditorConfig,
};

/// Circuit diagram topology checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the diagram description file
    #[arg(value_name = "DIAGRAM_FILE")]
    diagram_file: PathBuf,

    /// Print the resolved anchors of every wire
    #[arg(long)]
    anchors: bool,

    /// Delete unreachable elements and run again
    #[arg(long)]
    prune: bool,

    /// Exit with an error unless the diagram runs
    #[arg(long)]
    strict: bool,

    /// First value of the generated id counters
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Allow at most one power source
    #[arg(long)]
    single_power_source: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still overrides the flag
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Parse the diagram file
    let ast = dsl::parse_file(&args.diagram_file)?;

    // Open an editing session on it
    let config = EditorConfig::new()
        .with_id_seed(args.seed)
        .with_single_power_source(args.single_power_source);
    let mut editor = Editor::from_ast(ast, config)?;

    // Press run
    let outcome = run_once(&mut editor, args.prune);

    write_report(&mut io::stdout().lock(), &editor, ReportOptions { anchors: args.anchors })?;

    if args.strict {
        require_running(&editor)?;
    }
    info!("Finished in state {}", outcome.state);

    Ok(())
}

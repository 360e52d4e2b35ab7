//! graykit - interactive grayscale image toolkit
//!
//! Usage: graykit [--input <PGM>] [--output-dir <DIR>] [-v...]

use clap::Parser;
use graykit::cli::{self, Session};
use log::error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "graykit")]
#[command(about = "Interactive PGM image processing menu", long_about = None)]
#[command(version)]
struct Args {
    /// PGM image to load before showing the menu
    #[arg(short, long, value_name = "PGM")]
    input: Option<PathBuf>,

    /// Directory for output images (created if missing)
    #[arg(short, long, value_name = "DIR", env = "GRAYKIT_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut session = Session::new();
    if let Some(dir) = &args.output_dir {
        if let Err(e) = session.set_output_dir(dir) {
            error!("cannot use output directory {}: {e}", dir.display());
            return ExitCode::FAILURE;
        }
    }
    if let Some(path) = &args.input {
        if let Err(e) = session.load(path) {
            error!("cannot load {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    }

    match cli::run(&mut session, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

//! CLI driver: reads the file named by the sole command-line argument, runs
//! the routing pipeline, and prints either the full composed output or the
//! single contractual error line.
//!
//! This binary owns every bit of I/O and process-exit-status policy; the
//! library crate (`antroute::run`) never touches a file handle or an exit
//! code, so it stays trivially testable.

use std::ffi::OsString;
use std::path::Path;

use anyhow::Context;

fn main() {
    init_tracing();

    let args: Vec<OsString> = std::env::args_os().collect();
    let exit_code = match run(&args) {
        Ok(output) => {
            print!("{output}");
            0
        }
        Err(err) => {
            tracing::debug!(error = ?err, "pipeline failed");
            println!("{}", antroute::DRIVER_ERROR_MESSAGE);
            1
        }
    };
    std::process::exit(exit_code);
}

/// Validate the CLI invocation, read the input file, and run the pipeline.
///
/// Zero or more-than-one argument is itself a failure: this CLI takes
/// exactly one positional argument (the input file path).
fn run(args: &[OsString]) -> anyhow::Result<String> {
    if args.len() != 2 {
        anyhow::bail!(
            "expected exactly one file path argument, got {}",
            args.len().saturating_sub(1)
        );
    }
    let path = Path::new(&args[1]);
    tracing::debug!(path = %path.display(), "reading input file");
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let output = antroute::run(&raw)?;
    Ok(output)
}

/// Initialize a stderr-only tracing subscriber, level controlled by
/// `RUST_LOG` (default `info`). Diagnostics never touch stdout: stdout
/// carries only the contractual pipeline output or the single error line.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#![deny(missing_docs)]

//! Deterministic ant-colony routing: given a map of rooms and tunnels, a
//! start room, an end room, and a number of ants, computes a turn-by-turn
//! schedule that moves every ant from start to end in as few turns as
//! possible, subject to a one-ant-per-room occupancy rule.
//!
//! The pipeline is [`parser::parse`] (raw bytes to a validated
//! [`room::Input`]), [`graph::Graph::from_input`] (the undirected tunnel
//! graph), [`paths::select`] (node-split max-flow and path decomposition),
//! [`simulate::simulate`] (turn-by-turn scheduling), and
//! [`output::compose`] (the final echo-plus-schedule text). [`run`] wires
//! all five stages together; the binary crate in `src/main.rs` is
//! responsible only for the CLI surface (reading the file, printing the
//! result or the single error line, and choosing an exit code).

pub mod error;
pub mod flow;
pub mod graph;
pub mod output;
pub mod parser;
pub mod paths;
pub mod room;
pub mod simulate;

pub use error::{Error, Result};
pub use room::{Input, Room};

/// The single line printed to stdout, and nothing else, whenever any stage
/// of the pipeline fails.
pub const DRIVER_ERROR_MESSAGE: &str = "ERROR: invalid data format";

/// Run the full pipeline over raw input text, returning the final output
/// string (echo, blank line, move lines) or the error that aborted it.
///
/// This is the `M` driver's core: it owns no I/O of its own, so it can be
/// exercised directly in tests without touching the filesystem.
pub fn run(raw: &str) -> Result<String> {
    let input = parser::parse(raw)?;
    let graph = graph::Graph::from_input(&input);
    let paths = paths::select(&graph, &input)?;
    let lines = simulate::simulate(input.ants, &paths, &input.end)?;
    Ok(output::compose(raw, &lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_two_room_end_to_end() {
        let raw = "1\n##start\nstart 0 0\n##end\nend 1 0\nstart-end\n";
        let out = run(raw).unwrap();
        assert_eq!(out, format!("{raw}\nL1-end\n"));
    }

    #[test]
    fn disconnected_rooms_report_no_path() {
        let raw = "1\n##start\na 0 0\n##end\nb 1 0\n";
        assert!(matches!(run(raw), Err(Error::NoPath)));
    }

    #[test]
    fn malformed_input_reports_invalid() {
        let raw = "not a number\n";
        assert!(matches!(run(raw), Err(Error::InvalidInput)));
    }
}

//! The data model shared by the parser, graph, and simulator: [`Room`] and
//! [`Input`].

use indexmap::IndexMap;

/// A single room: a name and a pair of coordinates.
///
/// Coordinates are parsed and stored for fidelity with the source file, but
/// they do not influence routing in any way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    /// The room's unique name.
    pub name: String,
    /// Horizontal coordinate, as given in the source.
    pub x: i64,
    /// Vertical coordinate, as given in the source.
    pub y: i64,
}

/// A fully validated, parsed input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    /// Number of ants initially standing in `start`.
    pub ants: u32,
    /// Name of the start room.
    pub start: String,
    /// Name of the end room.
    pub end: String,
    /// Every declared room, keyed by name, in declaration order.
    pub rooms: IndexMap<String, Room>,
    /// Every tunnel, as an ordered pair, in the order it appeared in the
    /// source.
    pub links: Vec<(String, String)>,
    /// The raw lines of the source file, for verbatim echo in the output.
    pub raw_lines: Vec<String>,
}

//! An undirected graph of rooms connected by tunnels.
//!
//! Keyed by room name rather than a generic hashable node type: the path
//! selector needs to iterate every room's neighbors in a stable order, so
//! adjacency is kept in a [`BTreeSet`] rather than a
//! [`std::collections::HashSet`].

use std::collections::{BTreeMap, BTreeSet};

use crate::room::Input;

/// An undirected graph over room names.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `name` exists as a node, creating an empty neighbor set if
    /// needed. Idempotent.
    pub fn add_node(&mut self, name: &str) {
        self.adjacency.entry(name.to_string()).or_default();
    }

    /// Add an undirected edge between `a` and `b`, creating both nodes if
    /// necessary. Adding the same edge twice is a no-op.
    pub fn add_undirected_edge(&mut self, a: &str, b: &str) {
        self.add_node(a);
        self.add_node(b);
        self.adjacency.get_mut(a).unwrap().insert(b.to_string());
        self.adjacency.get_mut(b).unwrap().insert(a.to_string());
    }

    /// The neighbors of `name`, in ascending order, or an empty slice if
    /// `name` is not a node of the graph.
    #[must_use]
    pub fn neighbors(&self, name: &str) -> &BTreeSet<String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.adjacency.get(name).unwrap_or(&EMPTY)
    }

    /// All room names, in ascending order.
    pub fn rooms(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Number of rooms in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Build the undirected graph implied by a parsed [`Input`]: every
    /// declared room becomes a node, and every tunnel becomes an edge.
    #[must_use]
    pub fn from_input(input: &Input) -> Self {
        let mut graph = Self::new();
        for name in input.rooms.keys() {
            graph.add_node(name);
        }
        for (a, b) in &input.links {
            graph.add_undirected_edge(a, b);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::Graph;
    use crate::room::{Input, Room};
    use indexmap::IndexMap;

    #[test]
    fn undirected_edge_is_symmetric() {
        let mut g = Graph::new();
        g.add_undirected_edge("a", "b");
        assert!(g.neighbors("a").contains("b"));
        assert!(g.neighbors("b").contains("a"));
    }

    #[test]
    fn duplicate_edge_collapses() {
        let mut g = Graph::new();
        g.add_undirected_edge("a", "b");
        g.add_undirected_edge("a", "b");
        assert_eq!(g.neighbors("a").len(), 1);
    }

    #[test]
    fn unknown_room_has_no_neighbors() {
        let g = Graph::new();
        assert!(g.neighbors("ghost").is_empty());
    }

    #[test]
    fn rooms_are_sorted() {
        let mut g = Graph::new();
        g.add_node("z");
        g.add_node("a");
        g.add_node("m");
        assert_eq!(g.rooms().collect::<Vec<_>>(), vec!["a", "m", "z"]);
    }

    #[test]
    fn from_input_builds_nodes_and_edges() {
        let mut rooms = IndexMap::new();
        rooms.insert(
            "a".to_string(),
            Room {
                name: "a".to_string(),
                x: 0,
                y: 0,
            },
        );
        rooms.insert(
            "b".to_string(),
            Room {
                name: "b".to_string(),
                x: 1,
                y: 0,
            },
        );
        let input = Input {
            ants: 1,
            start: "a".to_string(),
            end: "b".to_string(),
            rooms,
            links: vec![("a".to_string(), "b".to_string())],
            raw_lines: Vec::new(),
        };
        let g = Graph::from_input(&input);
        assert!(g.neighbors("a").contains("b"));
        assert_eq!(g.len(), 2);
    }
}

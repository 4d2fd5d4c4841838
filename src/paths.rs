//! Path selection: build the node-split flow graph, run max-flow, decompose
//! it into vertex-disjoint paths, order them deterministically, and choose
//! how many of them to actually use.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::flow::{FlowNetwork, INFINITE_CAPACITY};
use crate::graph::Graph;
use crate::room::Input;

/// A single `start -> end` route, as a sequence of room names.
///
/// Invariants: the first room is always `start`, the last is always `end`,
/// and no room appears twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    /// Rooms visited, in traversal order, including both endpoints.
    pub rooms: Vec<String>,
}

impl Path {
    /// Number of tunnels this path crosses (`rooms.len() - 1`).
    #[must_use]
    pub fn edges(&self) -> usize {
        self.rooms.len() - 1
    }
}

/// Build the node-split flow graph, compute max-flow, decompose it into
/// vertex-disjoint paths, sort them deterministically, and return the
/// prefix that minimizes the estimated makespan.
///
/// Returns [`Error::NoPath`] if `start` and `end` are in different connected
/// components (i.e. max-flow is zero).
pub fn select(graph: &Graph, input: &Input) -> Result<Vec<Path>> {
    let rooms: Vec<String> = graph.rooms().map(str::to_string).collect();
    let index_of: FxHashMap<&str, usize> = rooms
        .iter()
        .enumerate()
        .map(|(i, r)| (r.as_str(), i))
        .collect();

    let in_node = |i: usize| 2 * i;
    let out_node = |i: usize| 2 * i + 1;

    let mut net = FlowNetwork::new(2 * rooms.len());
    for (i, room) in rooms.iter().enumerate() {
        let cap = if *room == input.start || *room == input.end {
            INFINITE_CAPACITY
        } else {
            1
        };
        net.add_edge(in_node(i), out_node(i), cap);
    }
    for (i, room) in rooms.iter().enumerate() {
        for neighbor in graph.neighbors(room) {
            let j = index_of[neighbor.as_str()];
            net.add_edge(out_node(i), in_node(j), 1);
        }
    }

    let Some(&start_i) = index_of.get(input.start.as_str()) else {
        return Err(Error::NoPath);
    };
    let Some(&end_i) = index_of.get(input.end.as_str()) else {
        return Err(Error::NoPath);
    };
    let source = out_node(start_i);
    let sink = in_node(end_i);

    let total_flow = net.edmonds_karp(source, sink);
    if total_flow <= 0 {
        return Err(Error::NoPath);
    }

    let k_max = (total_flow as u64).min(u64::from(input.ants)) as usize;
    let mut paths = Vec::with_capacity(k_max);
    while paths.len() < k_max {
        let Some(order) = extract_one_path(&mut net, source, sink) else {
            break;
        };
        let seq = room_sequence(&order, &rooms);
        if seq.len() < 2 {
            break;
        }
        paths.push(Path { rooms: seq });
    }
    if paths.is_empty() {
        return Err(Error::NoPath);
    }

    sort_paths(&mut paths, input);

    let k = choose_k(input.ants, &paths);
    paths.truncate(k);
    Ok(paths)
}

/// Follow a single depth-first traversal of positive-flow edges from `s` to
/// `t`, then retire one unit of flow along the path found.
///
/// Returns the sequence of node indices from `s` to `t`, or `None` if the
/// residual positive-flow graph no longer connects them.
fn extract_one_path(net: &mut FlowNetwork, s: usize, t: usize) -> Option<Vec<usize>> {
    let mut stack = vec![s];
    let mut visited = FxHashMap::default();
    visited.insert(s, true);
    let mut parent: FxHashMap<usize, (usize, usize)> = FxHashMap::default();
    let mut found = false;

    while let Some(v) = stack.pop() {
        if v == t {
            found = true;
            break;
        }
        for (ei, to) in net.edges_from(v) {
            if net.edge_flow(v, ei) <= 0 || visited.contains_key(&to) {
                continue;
            }
            visited.insert(to, true);
            parent.insert(to, (v, ei));
            stack.push(to);
        }
    }

    if !found {
        return None;
    }

    let mut order = vec![t];
    let mut cur = t;
    while cur != s {
        let &(p, ei) = parent.get(&cur).expect("path reconstruction");
        net.retire_unit(p, ei);
        order.push(p);
        cur = p;
    }
    order.reverse();
    Some(order)
}

/// Translate a sequence of node indices in the node-split graph back into a
/// sequence of room names: the source's room is emitted once up front, then
/// every subsequent `in`-node along the way contributes its room.
/// Accidental consecutive duplicates (which can occur around the split
/// nodes) are collapsed.
fn room_sequence(order: &[usize], rooms: &[String]) -> Vec<String> {
    let mut seq = Vec::with_capacity(order.len() / 2 + 1);
    if let Some(&first) = order.first() {
        seq.push(rooms[first / 2].clone());
    }
    for &node in &order[1..] {
        if node % 2 == 0 {
            seq.push(rooms[node / 2].clone());
        }
    }
    let mut clean: Vec<String> = Vec::with_capacity(seq.len());
    for room in seq {
        if clean.last() != Some(&room) {
            clean.push(room);
        }
    }
    clean
}

/// Sort paths by ascending edge count, then by the start-order of their
/// first-hop room, then lexicographically by room sequence.
fn sort_paths(paths: &mut [Path], input: &Input) {
    let mut start_order: FxHashMap<&str, usize> = FxHashMap::default();
    let mut next_order = 0usize;
    for (a, b) in &input.links {
        if a == &input.start {
            start_order.entry(b.as_str()).or_insert_with(|| {
                let o = next_order;
                next_order += 1;
                o
            });
            continue;
        }
        if b == &input.start {
            start_order.entry(a.as_str()).or_insert_with(|| {
                let o = next_order;
                next_order += 1;
                o
            });
        }
    }

    paths.sort_by(|a, b| {
        a.edges().cmp(&b.edges()).then_with(|| {
            let first_a = a.rooms.get(1).map(String::as_str);
            let first_b = b.rooms.get(1).map(String::as_str);
            let oa = first_a.and_then(|r| start_order.get(r));
            let ob = first_b.and_then(|r| start_order.get(r));
            match (oa, ob) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        })
            .then_with(|| a.rooms.cmp(&b.rooms))
    });
}

/// Choose the smallest prefix length whose estimated makespan strictly
/// improves on the best seen so far while scanning prefixes left to right.
fn choose_k(ants: u32, paths: &[Path]) -> usize {
    let mut best_k = 1;
    let mut best = makespan(ants, &paths[..1]);
    for k in 2..=paths.len() {
        let ms = makespan(ants, &paths[..k]);
        if ms < best {
            best = ms;
            best_k = k;
        }
    }
    best_k
}

/// Greedily assign `ants` ants to `paths`, one at a time, each going to
/// whichever path currently minimizes `edges(p) + load(p)` (ties broken by
/// the lowest path index). Returns the final per-path load and the makespan
/// (the maximum per-ant finish time, `edges(p) - 1 + load(p)`, seen during
/// the assignment).
///
/// Shared verbatim by [`choose_k`]'s makespan estimate and by
/// [`crate::simulate::assign`], so the two can never disagree about which
/// path an ant belongs to.
pub(crate) fn greedy_assign(ants: u32, paths: &[Path]) -> (Vec<u32>, u32) {
    let mut load = vec![0u32; paths.len()];
    let mut max_finish = 0u32;
    for _ in 0..ants {
        let mut best_i = 0;
        let mut best_score = paths[0].edges() as u32 + load[0];
        for (i, path) in paths.iter().enumerate().skip(1) {
            let score = path.edges() as u32 + load[i];
            if score < best_score {
                best_score = score;
                best_i = i;
            }
        }
        load[best_i] += 1;
        let finish = (paths[best_i].edges() as u32 - 1) + load[best_i];
        max_finish = max_finish.max(finish);
    }
    (load, max_finish)
}

fn makespan(ants: u32, paths: &[Path]) -> u32 {
    greedy_assign(ants, paths).1
}

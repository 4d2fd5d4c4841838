//! Turn-by-turn ant scheduling simulation.
//!
//! Ants are assigned to paths with the same greedy rule the path selector
//! uses to estimate makespan (see [`crate::paths::greedy_assign`]), then
//! moved forward one room at a time under occupancy rules: advance
//! existing ants before launching new ones, and scan each path
//! back-to-front so that a room is vacated before its predecessor
//! considers moving into it.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::paths::{greedy_assign, Path};

/// Simulate the turn-by-turn schedule moving `ants` ants from `start` to
/// `end` along `paths`, returning one formatted output line per turn.
///
/// `paths` must be pairwise vertex-disjoint on their intermediate rooms;
/// this is guaranteed by [`crate::paths::select`] but not re-checked here.
pub fn simulate(ants: u32, paths: &[Path], end: &str) -> Result<Vec<String>> {
    if ants == 0 || paths.is_empty() {
        return Err(Error::Stuck);
    }

    let (assigned, _) = greedy_assign(ants, paths);

    let mut next_id = vec![0u32; paths.len()];
    let mut remain = assigned.clone();
    let mut cursor = 1u32;
    for (i, &count) in assigned.iter().enumerate() {
        next_id[i] = cursor;
        cursor += count;
    }

    let mut occupied: FxHashMap<String, u32> = FxHashMap::default();
    let mut finished = 0u32;
    let mut lines = Vec::new();

    while finished < ants {
        let mut moves: Vec<(u32, String)> = Vec::new();

        for path in paths {
            if path.rooms.len() < 3 {
                continue;
            }
            for j in (1..=path.rooms.len() - 2).rev() {
                let room = &path.rooms[j];
                let Some(&ant_id) = occupied.get(room) else {
                    continue;
                };
                let next = &path.rooms[j + 1];
                if next != end && occupied.contains_key(next) {
                    continue;
                }
                occupied.remove(room);
                if next == end {
                    finished += 1;
                } else {
                    occupied.insert(next.clone(), ant_id);
                }
                moves.push((ant_id, next.clone()));
            }
        }

        for (pi, path) in paths.iter().enumerate() {
            if remain[pi] == 0 {
                continue;
            }
            let first = &path.rooms[1];
            if first != end && occupied.contains_key(first) {
                continue;
            }
            let ant_id = next_id[pi];
            next_id[pi] += 1;
            remain[pi] -= 1;
            if first == end {
                finished += 1;
            } else {
                occupied.insert(first.clone(), ant_id);
            }
            moves.push((ant_id, first.clone()));
        }

        if moves.is_empty() {
            return Err(Error::Stuck);
        }

        moves.sort_by_key(|&(id, _)| id);
        let line = moves
            .iter()
            .map(|(id, room)| format!("L{id}-{room}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(line);
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(rooms: &[&str]) -> Path {
        Path {
            rooms: rooms.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn trivial_two_room() {
        let paths = vec![path(&["start", "end"])];
        let lines = simulate(1, &paths, "end").unwrap();
        assert_eq!(lines, vec!["L1-end"]);
    }

    #[test]
    fn two_parallel_paths_two_ants() {
        let paths = vec![path(&["s", "a", "e"]), path(&["s", "b", "e"])];
        let lines = simulate(2, &paths, "e").unwrap();
        assert_eq!(lines, vec!["L1-a L2-b", "L1-e L2-e"]);
    }

    #[test]
    fn single_pipeline_path_three_ants() {
        let paths = vec![path(&["s", "a", "b", "c", "e"])];
        let lines = simulate(3, &paths, "e").unwrap();
        assert_eq!(
            lines,
            vec![
                "L1-a",
                "L1-b L2-a",
                "L1-c L2-b L3-a",
                "L1-e L2-c L3-b",
                "L2-e L3-c",
                "L3-e",
            ]
        );
    }

    #[test]
    fn zero_ants_is_stuck() {
        let paths = vec![path(&["s", "e"])];
        assert!(matches!(simulate(0, &paths, "e"), Err(Error::Stuck)));
    }
}

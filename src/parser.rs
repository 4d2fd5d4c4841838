//! Lexical validation and structural extraction of the input file format.
//!
//! This is the external collaborator at the front of the pipeline: it turns
//! raw text into a validated [`Input`], or fails the whole input with a
//! single [`Error::InvalidInput`]. There is no partial success — any
//! structural violation anywhere in the file invalidates the entire input,
//! matching the "no partial output on error" policy of the driver.

use rustc_hash::FxHashSet;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::room::{Input, Room};

/// Parse a complete input file, as read into memory, into a validated
/// [`Input`].
pub fn parse(raw: &str) -> Result<Input> {
    let mut raw_lines = Vec::new();
    let mut ants: Option<u32> = None;
    let mut start: Option<String> = None;
    let mut end: Option<String> = None;
    let mut rooms: IndexMap<String, Room> = IndexMap::new();
    let mut links: Vec<(String, String)> = Vec::new();
    let mut seen_links: FxHashSet<String> = FxHashSet::default();
    let mut want_start = false;
    let mut want_end = false;

    for line in raw.lines() {
        raw_lines.push(line.to_string());
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('#') {
            if trimmed == "##start" {
                if start.is_some() {
                    return Err(Error::InvalidInput);
                }
                want_start = true;
                want_end = false;
            } else if trimmed == "##end" {
                if end.is_some() {
                    return Err(Error::InvalidInput);
                }
                want_end = true;
                want_start = false;
            }
            continue;
        }

        if ants.is_none() {
            ants = Some(parse_ant_count(trimmed)?);
            continue;
        }

        if is_room_line(trimmed) {
            let room = parse_room(trimmed)?;
            if rooms.contains_key(&room.name) {
                return Err(Error::InvalidInput);
            }
            let name = room.name.clone();
            rooms.insert(name.clone(), room);
            if want_start {
                start = Some(name.clone());
                want_start = false;
            }
            if want_end {
                end = Some(name);
                want_end = false;
            }
            continue;
        }

        if is_link_line(trimmed) {
            let (a, b) = parse_link(trimmed)?;
            if a == b {
                continue;
            }
            if !rooms.contains_key(&a) || !rooms.contains_key(&b) {
                return Err(Error::InvalidInput);
            }
            if !seen_links.insert(normalize_edge(&a, &b)) {
                return Err(Error::InvalidInput);
            }
            links.push((a, b));
            continue;
        }

        return Err(Error::InvalidInput);
    }

    let (Some(ants), Some(start), Some(end)) = (ants, start, end) else {
        return Err(Error::InvalidInput);
    };
    if start == end {
        return Err(Error::InvalidInput);
    }

    Ok(Input {
        ants,
        start,
        end,
        rooms,
        links,
        raw_lines,
    })
}

fn parse_ant_count(s: &str) -> Result<u32> {
    let n: i64 = s.parse().map_err(|_| Error::InvalidInput)?;
    u32::try_from(n).map_err(|_| Error::InvalidInput).and_then(|n| {
        if n == 0 {
            Err(Error::InvalidInput)
        } else {
            Ok(n)
        }
    })
}

fn is_room_line(s: &str) -> bool {
    let parts: Vec<&str> = s.split_whitespace().collect();
    parts.len() == 3 && !parts[0].contains('-')
}

fn parse_room(s: &str) -> Result<Room> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::InvalidInput);
    }
    let name = parts[0];
    if name.is_empty()
        || name.starts_with('L')
        || name.starts_with('#')
        || name.chars().any(char::is_whitespace)
    {
        return Err(Error::InvalidInput);
    }
    let x: i64 = parts[1].parse().map_err(|_| Error::InvalidInput)?;
    let y: i64 = parts[2].parse().map_err(|_| Error::InvalidInput)?;
    Ok(Room {
        name: name.to_string(),
        x,
        y,
    })
}

fn is_link_line(s: &str) -> bool {
    s.matches('-').count() == 1 && !s.chars().any(|c| c == ' ' || c == '\t')
}

fn parse_link(s: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(Error::InvalidInput);
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

fn normalize_edge(a: &str, b: &str) -> String {
    if a < b {
        format!("{a}-{b}")
    } else {
        format!("{b}-{a}")
    }
}

//! Output composition: echoes the raw input verbatim, then a blank line,
//! then one line per simulation turn.
//!
//! This is the external collaborator at the back of the pipeline. It never
//! re-derives the echoed text from the parsed [`crate::room::Input`] — it
//! works directly off the raw bytes the driver read from disk, so the echo
//! is always byte-identical to the source (modulo a trailing newline that
//! gets appended if the source lacked one).

/// Compose the final output: `raw`, ensured to end with a newline, followed
/// by a blank line, followed by `lines` joined with newlines and a final
/// trailing newline (only emitted if `lines` is non-empty).
#[must_use]
pub fn compose(raw: &str, lines: &[String]) -> String {
    let mut out = String::with_capacity(raw.len() + lines.iter().map(|l| l.len() + 1).sum::<usize>() + 2);
    out.push_str(raw);
    if !raw.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    for (i, line) in lines.iter().enumerate() {
        out.push_str(line);
        if i + 1 != lines.len() {
            out.push('\n');
        }
    }
    if !lines.is_empty() {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::compose;

    #[test]
    fn adds_missing_trailing_newline_before_blank_separator() {
        let out = compose("1\nstart-end", &["L1-end".to_string()]);
        assert_eq!(out, "1\nstart-end\n\nL1-end\n");
    }

    #[test]
    fn preserves_existing_trailing_newline() {
        let out = compose("1\nstart-end\n", &["L1-end".to_string()]);
        assert_eq!(out, "1\nstart-end\n\nL1-end\n");
    }

    #[test]
    fn multiple_lines_are_newline_joined_with_trailing_newline() {
        let out = compose("map", &["a".to_string(), "b".to_string()]);
        assert_eq!(out, "map\n\na\nb\n");
    }

    #[test]
    fn no_turns_means_no_trailing_content() {
        let out = compose("map\n", &[]);
        assert_eq!(out, "map\n\n");
    }
}

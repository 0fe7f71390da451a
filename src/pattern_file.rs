//! Parses a pattern-definition file's line grammar (spec §4.B / §6.B):
//! blank lines and `#`-prefixed lines are ignored, everything else is
//! `NAME` followed by whitespace followed by `BODY` running to end of
//! line.

use std::collections::BTreeMap;

/// Parses `text` into an ordered map of pattern name to body. Later
/// definitions of the same name within the file win; this is logged, not
/// treated as an error.
pub fn parse_pattern_file(file_name: &str, text: &str) -> BTreeMap<String, String> {
    let mut definitions = BTreeMap::new();

    for (lineno, line) in text.lines().enumerate() {
        let trimmed_start = line.trim_start();
        if trimmed_start.is_empty() || trimmed_start.starts_with('#') {
            continue;
        }

        let Some((name, body)) = trimmed_start.split_once(char::is_whitespace) else {
            log::warn!(
                "{file_name}:{}: ignoring line with no NAME/BODY separator",
                lineno + 1
            );
            continue;
        };
        let body = body.trim_end();

        if definitions.contains_key(name) {
            log::warn!("{file_name}:{}: duplicate definition of \"{name}\", last one wins", lineno + 1);
        }
        definitions.insert(name.to_string(), body.to_string());
    }

    definitions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_blank_and_comment_lines() {
        let text = "# a comment\n\nUSERNAME [a-zA-Z0-9._-]+\n";
        let defs = parse_pattern_file("test", text);
        assert_eq!(defs.len(), 1);
        assert_eq!(defs["USERNAME"], "[a-zA-Z0-9._-]+");
    }

    #[test]
    fn last_definition_wins_on_duplicate_name() {
        let text = "NAME first\nNAME second\n";
        let defs = parse_pattern_file("test", text);
        assert_eq!(defs["NAME"], "second");
    }

    #[test]
    fn body_runs_to_end_of_line_trimmed_on_the_right() {
        let text = "NAME has spaces inside   \n";
        let defs = parse_pattern_file("test", text);
        assert_eq!(defs["NAME"], "has spaces inside");
    }
}

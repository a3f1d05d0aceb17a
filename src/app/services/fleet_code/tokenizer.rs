//! Line tokenizer for fleet-code bulletins
//!
//! Bulletin lines are made of 5-character groups separated by spaces. Only
//! complete groups survive tokenization; header lines (`ASXX21 EGRR ...`) are
//! the exception and keep every whitespace-separated word.

use crate::constants::{
    BULLETIN_TYPES, CONTINUATION_TOKEN, GROUP_WIDTH, HEADER_PREFIX_WIDTH, groups,
};

/// Split a line into code groups using the default header markers
pub fn tokenize(line: &str) -> Vec<String> {
    tokenize_with(line, BULLETIN_TYPES)
}

/// Split a line into code groups
///
/// A line starting with one of `header_markers` is split on spaces with no
/// width rule. Any other line keeps only `[0-9A-Za-z/]` characters and emits
/// a run when it is exactly [`GROUP_WIDTH`] long at a space or at end of line.
/// A run of another length is not reset at the space and keeps accumulating
/// into the next word.
///
/// A line whose first group is blank gets the [`CONTINUATION_TOKEN`] sentinel
/// prepended.
pub fn tokenize_with<S: AsRef<str>>(line: &str, header_markers: &[S]) -> Vec<String> {
    let mut tokens = Vec::new();
    if line.chars().count() < GROUP_WIDTH {
        return tokens;
    }

    let prefix: String = line.chars().take(HEADER_PREFIX_WIDTH).collect();
    let accept_all = header_markers.iter().any(|m| m.as_ref() == prefix);

    if line.chars().take(GROUP_WIDTH).all(|c| c == ' ') {
        tokens.push(CONTINUATION_TOKEN.to_string());
    }

    let mut run = String::new();
    for c in line.chars() {
        if (accept_all && c != ' ') || is_fleet_char(c) {
            run.push(c);
        } else if c == ' ' && is_complete(&run, accept_all) {
            tokens.push(std::mem::take(&mut run));
        }
    }

    if is_complete(&run, accept_all) {
        tokens.push(run);
    }

    tokens
}

/// Characters that can appear in a fleet-code group
pub fn is_fleet_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '/'
}

fn is_complete(run: &str, accept_all: bool) -> bool {
    !run.is_empty() && (accept_all || run.chars().count() == GROUP_WIDTH)
}

/// Interpret an all-digit group as its numeric code
pub fn group_code(token: &str) -> Option<u32> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Drop a leading ship/buoy count group (`9NNSS`) if present
pub fn skip_count_marker(tokens: &[String]) -> &[String] {
    match tokens.split_first() {
        Some((first, rest)) if first.starts_with(groups::COUNT_MARKER) => rest,
        _ => tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_code() {
        assert_eq!(group_code("99900"), Some(99900));
        assert_eq!(group_code("00011"), Some(11));
        assert_eq!(group_code("8197/"), None);
        assert_eq!(group_code("empty"), None);
        assert_eq!(group_code(""), None);
    }

    #[test]
    fn test_skip_count_marker() {
        let tokens: Vec<String> = vec!["90203".into(), "81978".into(), "55200".into()];
        assert_eq!(skip_count_marker(&tokens), &tokens[1..]);

        let tokens: Vec<String> = vec!["81978".into(), "55200".into()];
        assert_eq!(skip_count_marker(&tokens), &tokens[..]);

        let empty: Vec<String> = Vec::new();
        assert!(skip_count_marker(&empty).is_empty());
    }
}

//! Tests for line tokenization

use super::super::tokenizer::{tokenize, tokenize_with};

#[test]
fn test_short_line_produces_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("9990").is_empty());
}

#[test]
fn test_five_character_groups() {
    assert_eq!(tokenize("99900"), vec!["99900"]);
    assert_eq!(tokenize("81978 55200"), vec!["81978", "55200"]);
    assert_eq!(tokenize("83/// 50100"), vec!["83///", "50100"]);
    assert_eq!(tokenize("99900   "), vec!["99900"]);
}

#[test]
fn test_header_line_accepts_any_width() {
    assert_eq!(
        tokenize("ASXX21 EGRR 151200"),
        vec!["ASXX21", "EGRR", "151200"]
    );
    assert_eq!(
        tokenize("FSXX21 EGRR 151200 RRA"),
        vec!["FSXX21", "EGRR", "151200", "RRA"]
    );
}

#[test]
fn test_unknown_header_uses_group_rule() {
    // Runs of the wrong width never reach five characters at a space
    assert!(tokenize("ASXX22 EGRR 151200").is_empty());

    let markers = ["ASXX22"];
    assert_eq!(
        tokenize_with("ASXX22 EGRR 151200", &markers),
        vec!["ASXX22", "EGRR", "151200"]
    );
}

#[test]
fn test_continuation_sentinel() {
    assert_eq!(
        tokenize("      53050 54000"),
        vec!["empty", "53050", "54000"]
    );
    assert_eq!(tokenize("     "), vec!["empty"]);
    assert_eq!(tokenize("    81978 55200"), vec!["81978", "55200"]);
}

#[test]
fn test_non_fleet_characters_are_skipped() {
    assert_eq!(tokenize("10001 33300 15120="), vec!["10001", "33300", "15120"]);
    assert_eq!(tokenize("81-978 55200"), vec!["81978", "55200"]);
}

#[test]
fn test_incomplete_runs_merge_into_next_word() {
    assert_eq!(tokenize("333 00 12345"), vec!["33300", "12345"]);
    assert_eq!(tokenize("81978 552"), vec!["81978"]);
    assert!(tokenize("123456 81978").is_empty());
}

#[test]
fn test_retokenizing_joined_groups_is_stable() {
    let lines = [
        "66420 50200 51150 52100",
        "90203 81978 55200",
        "44020   40200 41150",
        "      43050 44000",
    ];

    for line in lines {
        let first = tokenize(line);
        let groups: Vec<String> = first.iter().filter(|t| *t != "empty").cloned().collect();
        let second = tokenize(&groups.join(" "));
        assert_eq!(groups, second, "line '{}'", line);
    }
}

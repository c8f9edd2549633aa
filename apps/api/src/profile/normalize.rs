//! Text-to-list normalization for the list-shaped form fields.
//!
//! Users type skills, projects and the like either one per line or as a
//! comma-separated run. Internal spaces are never split on, so entries such as
//! "Data Analytics" stay intact.

use std::sync::LazyLock;

use regex::Regex;

/// One or more consecutive commas and/or line breaks.
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\n]+").expect("separator pattern is valid"));

/// Converts raw form text into an ordered list of short strings.
///
/// - Carriage returns are stripped and the text trimmed.
/// - With `prefer_line_split` and at least one line break, each line is an item.
/// - Otherwise the text is split on runs of commas and line breaks.
/// - Items that are empty or a single character long are dropped.
///
/// Never fails; empty input yields an empty list.
pub fn normalize(raw: &str, prefer_line_split: bool) -> Vec<String> {
    let text = raw.replace('\r', "");
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let parts: Vec<&str> = if prefer_line_split && text.contains('\n') {
        text.split('\n').map(str::trim).collect()
    } else {
        SEPARATOR_RUN.split(text).map(str::trim).collect()
    };

    parts
        .into_iter()
        .filter(|p| p.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commas_split_and_internal_spaces_survive() {
        assert_eq!(
            normalize("Data Analytics, Web Development", false),
            vec!["Data Analytics", "Web Development"]
        );
    }

    #[test]
    fn test_line_split_drops_blank_lines() {
        assert_eq!(
            normalize("Python\nGo\n\nRust", true),
            vec!["Python", "Go", "Rust"]
        );
    }

    #[test]
    fn test_line_split_keeps_commas_inside_a_line() {
        assert_eq!(
            normalize("Built a CLI, in Rust\nShipped a website", true),
            vec!["Built a CLI, in Rust", "Shipped a website"]
        );
    }

    #[test]
    fn test_prefer_line_split_without_newline_falls_back_to_commas() {
        assert_eq!(normalize("SQL, Excel", true), vec!["SQL", "Excel"]);
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(
            normalize("Go,,\n,Rust\n\n,Zig", false),
            vec!["Go", "Rust", "Zig"]
        );
    }

    #[test]
    fn test_carriage_returns_are_stripped() {
        assert_eq!(
            normalize("Docker\r\nKubernetes\r\n", true),
            vec!["Docker", "Kubernetes"]
        );
    }

    #[test]
    fn test_single_character_items_are_dropped() {
        // Preserved behaviour: short language names are lost too.
        assert_eq!(normalize("C, R, Go, .", false), vec!["Go"]);
    }

    #[test]
    fn test_empty_and_whitespace_input_yield_nothing() {
        assert!(normalize("", true).is_empty());
        assert!(normalize("   \r\n  ", false).is_empty());
        assert!(normalize(",,,", false).is_empty());
    }

    #[test]
    fn test_every_item_is_trimmed_and_at_least_two_chars() {
        let inputs = [
            " a , bb ,ccc\n d\t, e e ",
            "\n\n x \n yy \n",
            "é, ü€, 日本",
            ", ,\t,\n",
        ];
        for input in inputs {
            for split in [true, false] {
                for item in normalize(input, split) {
                    assert!(item.chars().count() >= 2, "short item {item:?}");
                    assert_eq!(item, item.trim(), "untrimmed item {item:?}");
                }
            }
        }
    }
}

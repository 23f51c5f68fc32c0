//! Parse LLM output into candidate key point lines

use regex::Regex;
use std::sync::OnceLock;

/// `<digits>.` at the start of a trimmed line, plus any whitespace after it
fn numbered_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| Regex::new(r"^[0-9]+\.\s*").expect("static pattern"))
}

/// Extract the items of a numbered list from free-form completion text
///
/// Keeps, in order, every line whose trimmed content starts with one or more
/// ASCII digits followed by a period, and strips that prefix. Preambles,
/// headings, bullet lists and trailing commentary are dropped. Text without
/// numbered lines yields an empty list.
///
/// # Examples
///
/// ```
/// use quill_extractor::parse_numbered_list;
///
/// let items = parse_numbered_list("Here are the points:\n1. First\n  2.Second\nThanks!");
/// assert_eq!(items, vec!["First", "Second"]);
/// ```
pub fn parse_numbered_list(text: &str) -> Vec<String> {
    let prefix = numbered_prefix();
    text.lines()
        .map(str::trim)
        .filter(|line| prefix.is_match(line))
        .map(|line| prefix.replace(line, "").trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_list() {
        let text = "1. Hiring algorithms showed bias against women. [Transcript]\n2. The EU AI Act is a regulatory milestone. [Source PDF]";
        let items = parse_numbered_list(text);
        assert_eq!(items, vec![
            "Hiring algorithms showed bias against women. [Transcript]",
            "The EU AI Act is a regulatory milestone. [Source PDF]",
        ]);
    }

    #[test]
    fn test_discards_preamble_and_commentary() {
        let text = "Sure! Here are the key points:\n\n1. One\n2. Two\n\nLet me know if you need more.";
        assert_eq!(parse_numbered_list(text), vec!["One", "Two"]);
    }

    #[test]
    fn test_multi_digit_numbers() {
        let text = "9. Nine\n10. Ten\n11.Eleven";
        assert_eq!(parse_numbered_list(text), vec!["Nine", "Ten", "Eleven"]);
    }

    #[test]
    fn test_indented_lines_are_kept() {
        let text = "   3.   Indented point   ";
        assert_eq!(parse_numbered_list(text), vec!["Indented point"]);
    }

    #[test]
    fn test_non_numbered_lines_are_dropped() {
        let text = "- bullet\n* star\n1) paren\nStep 1. not at start\n#1. hash";
        assert!(parse_numbered_list(text).is_empty());
    }

    #[test]
    fn test_bare_number_yields_empty_item() {
        assert_eq!(parse_numbered_list("4."), vec![""]);
    }

    #[test]
    fn test_only_leading_prefix_is_stripped() {
        assert_eq!(parse_numbered_list("1. Version 2. shipped"), vec!["Version 2. shipped"]);
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(parse_numbered_list("1. One\r\n2. Two\r\n"), vec!["One", "Two"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_numbered_list("").is_empty());
    }

    #[test]
    fn test_non_ascii_digits_do_not_count() {
        // Arabic-Indic digit one
        assert!(parse_numbered_list("\u{0661}. Not a list item").is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn is_numbered(line: &str) -> bool {
        let trimmed = line.trim();
        let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
        digits > 0 && trimmed[digits..].starts_with('.')
    }

    proptest! {
        /// Output length equals the number of numbered lines, in order
        #[test]
        fn test_output_matches_numbered_line_count(
            lines in prop::collection::vec(
                prop_oneof![
                    "[0-9]{1,3}\\. [ -~]{0,40}",
                    " {0,3}[0-9]{1,2}\\.[ -~]{0,20}",
                    "[a-zA-Z ,!:-]{0,40}",
                    "- [ -~]{0,20}",
                ],
                0..20,
            )
        ) {
            let text = lines.join("\n");
            let items = parse_numbered_list(&text);
            let expected = text.lines().filter(|l| is_numbered(l)).count();
            prop_assert_eq!(items.len(), expected);
        }

        /// Items never keep their numbering prefix or surrounding whitespace
        #[test]
        fn test_items_are_trimmed(body in "[a-zA-Z][ -~]{0,40}[a-zA-Z]", n in 1u32..200) {
            let text = format!("{}.   {}  ", n, body);
            let items = parse_numbered_list(&text);
            prop_assert_eq!(items, vec![body.trim().to_string()]);
        }
    }
}

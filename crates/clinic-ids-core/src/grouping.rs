//! Separator stripping and digit grouping shared by the identifier modules.

/// Remove every whitespace character.
pub(crate) fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Remove the separators people type inside phone numbers: whitespace, hyphens and parentheses.
pub(crate) fn strip_phone_separators(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

/// Split into groups of three characters joined by single spaces.
pub(crate) fn group_in_threes(compact: &str) -> String {
    let chars: Vec<char> = compact.chars().collect();
    chars
        .chunks(3)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

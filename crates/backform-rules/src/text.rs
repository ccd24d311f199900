//! Character-level helpers shared by every rule.
//!
//! All lengths are counted in `char`s, never bytes: `ä`, `ö` and `ü` are two
//! bytes in UTF-8 and a byte-based cut would either split them or strip one
//! letter too few.

/// Lowercase, mapping `Ü`/`Ä`/`Ö` explicitly before the generic fold.
pub fn fold_case(text: &str) -> String {
    text.replace('Ü', "ü")
        .replace('Ä', "ä")
        .replace('Ö', "ö")
        .to_lowercase()
}

/// `ü→u`, `ä→a`, `ö→o`.
pub fn strip_umlauts(text: &str) -> String {
    text.replace('ü', "u").replace('ä', "a").replace('ö', "o")
}

pub fn has_umlaut(text: &str) -> bool {
    text.contains(['ä', 'ö', 'ü'])
}

/// The unumlauted sibling of `text`, or empty when it has no umlaut and the
/// sibling would only repeat it.
pub fn umlaut_sibling(text: &str) -> String {
    if has_umlaut(text) {
        strip_umlauts(text)
    } else {
        String::new()
    }
}

/// Title-case the first character and lowercase the rest.
///
/// A leading `ß` becomes `Ss`, its titlecase form, rather than the `SS`
/// that `char::to_uppercase` yields.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    let mut out = String::with_capacity(text.len());
    match chars.next() {
        Some('ß') => out.push_str("Ss"),
        Some(first) => out.extend(first.to_uppercase()),
        None => return out,
    }
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

/// `text` without its last `n` characters; empty if it has no more than `n`.
pub fn drop_last(text: &str, n: usize) -> &str {
    if n == 0 {
        return text;
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[..idx],
        None => "",
    }
}

/// `text` without its first `n` characters.
pub fn drop_first(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}

/// The `n`th character counted from the end, `1` being the last.
pub fn char_from_end(text: &str, n: usize) -> Option<char> {
    if n == 0 {
        return None;
    }
    text.chars().rev().nth(n - 1)
}

/// Substring-replace every `(pattern, replacement)` pair in declared order.
///
/// Later pairs see the output of earlier ones.
pub fn replace_irregular(text: &str, table: &[(&str, &str)]) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in table {
        if out.contains(pattern) {
            out = out.replace(pattern, replacement);
        }
    }
    out
}

/// Whole-string lookup in an ordered `(key, value)` table.
pub fn lookup_exact(text: &str, table: &[(&str, &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == text)
        .map(|(_, value)| *value)
}

/// `build()` when `applies`, otherwise the empty candidate.
pub fn when(applies: bool, build: impl FnOnce() -> String) -> String {
    if applies { build() } else { String::new() }
}

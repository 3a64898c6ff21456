//! Literal phonetic rewrites and name tokenization.

/// Letter combinations that are often written or pronounced differently,
/// applied in this order to the output of the previous rewrite.
const COMBINATIONS: [(&str, &str); 3] = [("nt", "d"), ("ch", "ts"), ("mp", "b")];

/// Apply the fixed rewrites (`nt`→`d`, `ch`→`ts`, `mp`→`b`), each over the whole string.
/// Matching is case-sensitive.
pub fn replace_combinations(name: &str) -> String {
    COMBINATIONS
        .iter()
        .fold(name.to_string(), |acc, (pattern, replacement)| {
            acc.replace(pattern, replacement)
        })
}

/// Token separators: ASCII whitespace including vertical tab. Non-breaking and
/// other Unicode spaces stay inside a token.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Rewrite, uppercase and split a full name into whitespace-delimited tokens.
/// A missing or blank name yields no tokens.
pub fn process_name(name: Option<&str>) -> Vec<String> {
    let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
        return Vec::new();
    };
    let rewritten = replace_combinations(name);
    if rewritten.trim().is_empty() {
        return Vec::new();
    }
    rewritten
        .to_uppercase()
        .split(is_separator)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches names that can be written in `.an` files without quotes.
    static ref PLAIN_NAME: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_']*$").unwrap();
}

/// Words with a special meaning in the `.an` grammar.
const KEYWORDS: [&str; 6] = [
    "and",
    "or",
    "not",
    "when",
    "initial_state",
    "initial_context",
];

/// Escape a name so that it can be used as an automaton name in an `.an` file.
///
/// Plain identifiers are kept as they are. Anything else (names starting with a digit,
/// names with dots or other special characters, keywords) is wrapped in double quotes,
/// with `"` and `\` escaped by a backslash.
pub fn pint_protect(name: &str) -> String {
    if PLAIN_NAME.is_match(name) && !KEYWORDS.contains(&name) {
        return name.to_string();
    }
    let mut result = String::with_capacity(name.len() + 2);
    result.push('"');
    for c in name.chars() {
        if c == '"' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }
    result.push('"');
    result
}

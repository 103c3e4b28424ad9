//! Name normalization for tool, argument and integration names.

use std::sync::LazyLock;

use regex::Regex;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-./\\]+").expect("valid separator pattern"));
static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid word pattern"));
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid boundary pattern"));
static ACRONYM_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid acronym pattern"));
static UNDERSCORE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("valid underscore pattern"));
static TRAILING_JUNK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_]+$").expect("valid trailing pattern"));

const UNNAMED: &str = "_unnamed_parameter";

/// Convert `CamelCase`, `PascalCase` and space-separated labels to
/// `snake_case`.
///
/// ```
/// use soar_core::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("Wait For Reply"), "wait_for_reply");
/// assert_eq!(to_snake_case("CiscoAMP"), "cisco_amp");
/// assert_eq!(to_snake_case("Time Frame (minutes)"), "time_frame_minutes");
/// ```
pub fn to_snake_case(name: &str) -> String {
    if name.is_empty() {
        return UNNAMED.to_owned();
    }

    let stripped: String = name
        .replace("->", "to")
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '|' | '\'' | '`' | '"' | '\u{2019}'))
        .collect();

    let name = SEPARATORS.replace_all(&stripped, "_");
    let name = CAPITALIZED_WORD.replace_all(&name, "${1}_${2}");
    let name = LOWER_UPPER.replace_all(&name, "${1}_${2}");
    let name = ACRONYM_WORD.replace_all(&name, "${1}_${2}");
    let name = name.to_lowercase();
    let name = UNDERSCORE_RUNS.replace_all(name.trim_matches('_'), "_");

    let name = match name.chars().next() {
        None => return UNNAMED.to_owned(),
        Some(first) if !first.is_alphabetic() && first != '_' => format!("_{name}"),
        Some(_) => name.into_owned(),
    };

    TRAILING_JUNK.replace(&name, "").into_owned()
}

/// Normalize a user-supplied integration name (e.g. from `--integrations`)
/// so it can be compared with catalog entries.
pub fn normalize_integration_name(name: &str) -> String {
    to_snake_case(name.trim())
}

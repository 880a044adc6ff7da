//! Street name and type canonicalization
//!
//! Names and types arrive in several conventions (count sheet file names,
//! network link attributes), so both sides of every comparison go through
//! the same canonical form first. Fuzzy mode additionally tolerates
//! cardinal-direction prefixes/suffixes, whitespace and punctuation.

use std::sync::LazyLock;

use regex::Regex;

/// Full-string street type abbreviations, applied after uppercasing.
///
/// Deliberately incomplete; extend as new source conventions show up.
const STREET_TYPE_ABBRS: &[(&str, &str)] = &[("AV", "AVE"), ("WAY", "WY")];

/// Whole-word abbreviations in specific street names. Word-boundary
/// anchored so "MTN" and the like stay untouched.
static NAME_ABBRS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"\bMT\b").expect("valid regex"), "MOUNT"),
        (Regex::new(r"\bPT\b").expect("valid regex"), "POINT"),
    ]
});

// One combined pattern: a leading or trailing cardinal token, any space,
// any punctuation. The direction alternatives anchor to the string ends,
// so they have to be consumed in the same pass that removes spaces rather
// than after it.
static FUZZY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<lead>NORTH|SOUTH|EAST|WEST)|(?P<trail>NORTH|SOUTH|EAST|WEST)$| |[^\w\s]")
        .expect("valid regex")
});

/// Canonicalize a street type ("Av" -> "AVE")
pub fn normalize_street_type(street_type: &str) -> String {
    let street_type = street_type.to_uppercase();
    for (abbr, expansion) in STREET_TYPE_ABBRS {
        if street_type == *abbr {
            return (*expansion).to_string();
        }
    }
    street_type
}

/// Canonicalize a specific street name ("Mt Diablo" -> "MOUNT DIABLO")
pub fn normalize_street_name(name: &str) -> String {
    let mut name = name.to_uppercase();
    for (pattern, expansion) in NAME_ABBRS.iter() {
        name = pattern.replace_all(&name, *expansion).into_owned();
    }
    name
}

/// Apply the combined fuzzy substitution pass to a normalized name,
/// returning the reduced core and the direction tokens that were stripped.
fn reduce_for_fuzzy_match(name: &str) -> (String, Vec<String>) {
    let mut stripped = Vec::new();
    let reduced = FUZZY_PATTERN.replace_all(name, |caps: &regex::Captures| {
        if let Some(token) = caps.name("lead").or_else(|| caps.name("trail")) {
            stripped.push(token.as_str().to_string());
        }
        ""
    });
    (reduced.into_owned(), stripped)
}

/// Check whether two specific street names (e.g. "Market" for "Market St")
/// refer to the same street.
///
/// Exact mode compares the canonical forms. Fuzzy mode reduces each name in
/// a single substitution pass (strip one leading/trailing cardinal token,
/// drop spaces and punctuation) and compares the cores; stripping tolerates
/// a missing direction token but does not equate different ones, so
/// "North Market" matches "Market" and not "South Market".
pub fn names_match(name1: &str, name2: &str, fuzzy: bool) -> bool {
    let name1 = normalize_street_name(name1);
    let name2 = normalize_street_name(name2);
    if !fuzzy {
        return name1 == name2;
    }
    let (core1, directions1) = reduce_for_fuzzy_match(&name1);
    let (core2, directions2) = reduce_for_fuzzy_match(&name2);
    if core1 != core2 {
        return false;
    }
    directions1.is_empty() || directions2.is_empty() || directions1 == directions2
}

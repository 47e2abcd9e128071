//! Fuzzy resolution of user queries to installed ids
//!
//! Used by CLI-facing code to map a typed query to a game id or state name:
//! exact match first, then case-insensitive, then unique prefix, and finally
//! an error carrying nearby candidates as suggestions.

use std::fmt;

/// Failed resolution, with optional candidate suggestions for the user.
#[derive(Debug, Clone)]
pub struct ResolutionError {
    pub message: String,
    pub suggestions: Vec<String>,
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ResolutionError {}

/// Maximum edit distance for a candidate to count as a suggestion.
const SUGGESTION_DISTANCE: usize = 3;

/// Maximum number of suggestions attached to an error.
const MAX_SUGGESTIONS: usize = 3;

/// Resolve a query against a set of candidate ids.
///
/// `kind` names what is being resolved ("game", "state") for error messages.
pub fn resolve<'a>(
    query: &str,
    candidates: &'a [String],
    kind: &str,
) -> Result<&'a str, ResolutionError> {
    if query.is_empty() {
        return Err(ResolutionError {
            message: format!("empty {kind} id"),
            suggestions: vec![],
        });
    }

    if let Some(exact) = candidates.iter().find(|c| *c == query) {
        return Ok(exact);
    }

    let lower = query.to_lowercase();

    let folded: Vec<&String> = candidates
        .iter()
        .filter(|c| c.to_lowercase() == lower)
        .collect();
    if let [only] = folded[..] {
        return Ok(only);
    }

    let prefixed: Vec<&String> = candidates
        .iter()
        .filter(|c| c.to_lowercase().starts_with(&lower))
        .collect();
    match prefixed[..] {
        [only] => Ok(only),
        [] => Err(ResolutionError {
            message: format!("{kind} '{query}' not found"),
            suggestions: similar(query, candidates),
        }),
        _ => Err(ResolutionError {
            message: format!("{kind} '{query}' is ambiguous"),
            suggestions: prefixed.iter().map(|c| c.to_string()).collect(),
        }),
    }
}

/// Candidates within edit distance of the query, closest first.
fn similar(query: &str, candidates: &[String]) -> Vec<String> {
    let mut scored: Vec<(usize, &String)> = candidates
        .iter()
        .map(|c| (edit_distance(query, c), c))
        .filter(|(d, _)| *d <= SUGGESTION_DISTANCE)
        .collect();
    scored.sort_by_key(|(d, _)| *d);
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, c)| c.clone())
        .collect()
}

/// Levenshtein distance over chars, two-row formulation.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}

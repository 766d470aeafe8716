//! Pure lookup from a free-form query to at most one roster entry.

use deunicode::deunicode;
use tracing::debug;

use crate::domain::Person;
use crate::roster::Roster;

/// Lower-case and transliterate to plain ASCII, so that accented or
/// non-Latin spellings match their ASCII-typed equivalents.
///
/// Transliteration runs first: `deunicode` can emit uppercase ASCII for
/// some scripts, and lowering last keeps the function idempotent.
pub fn normalize(s: &str) -> String {
    deunicode(s).to_lowercase()
}

/// Resolve a query to exactly one person, or `None`.
///
/// Rules are tried in strict priority order, stopping at the first that
/// yields a result: exact username, exact full name, unique first name,
/// unique name token. Exact identifiers are trusted unconditionally;
/// partial name fragments only when unambiguous, so a first or last name
/// shared between colleagues never silently picks the wrong person.
pub fn resolve<'a>(roster: &'a Roster, query: &str) -> Option<&'a Person> {
    let query = normalize(query.trim());
    if query.is_empty() {
        return None;
    }

    let people = roster.people();

    if let Some(person) = people.iter().find(|p| normalize(&p.username) == query) {
        debug!(username = %person.username, "matched exact username");
        return Some(person);
    }

    if let Some(person) = people.iter().find(|p| normalize(&p.name) == query) {
        debug!(name = %person.name, "matched exact full name");
        return Some(person);
    }

    if let Some(person) = find_unique(people, |p| {
        normalize(&p.name).split_whitespace().next() == Some(query.as_str())
    }) {
        debug!(name = %person.name, "matched unique first name");
        return Some(person);
    }

    if let Some(person) = find_unique(people, |p| {
        normalize(&p.name)
            .split_whitespace()
            .any(|token| token == query)
    }) {
        debug!(name = %person.name, "matched unique name token");
        return Some(person);
    }

    None
}

/// The sole person satisfying the predicate, or `None` when zero or
/// several do. Ambiguity is not an error, just a non-match.
fn find_unique<F>(people: &[Person], pred: F) -> Option<&Person>
where
    F: Fn(&Person) -> bool,
{
    let mut matches = people.iter().filter(|p| pred(p));
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(first)
}

//! Roster loading: a flat CSV of `name, email, username` rows.

use std::collections::HashSet;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::warn;

use crate::domain::Person;
use crate::error::{RbError, Result};
use crate::resolver::normalize;

/// The in-memory roster, loaded once and passed by argument into the
/// resolver. Row order is preserved; lookups that hit duplicated keys
/// resolve to the first row.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub const fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Load the roster from a CSV file with no header row. Whitespace
    /// around fields is trimmed; columns beyond the third are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RbError::RosterNotFound(path.to_path_buf()));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true)
            .from_path(path)?;

        let mut people = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            if record.len() < 3 {
                return Err(RbError::MalformedRow {
                    row: idx + 1,
                    reason: format!(
                        "expected `name, email, username`, got {} field(s)",
                        record.len()
                    ),
                });
            }
            people.push(Person::new(&record[0], &record[1], &record[2]));
        }

        let roster = Self { people };
        roster.warn_duplicates();
        Ok(roster)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    // Duplicated usernames or full names are a roster problem, not a
    // fatal one: resolution stays first-row-wins, but make it visible.
    fn warn_duplicates(&self) {
        let mut usernames = HashSet::new();
        let mut names = HashSet::new();
        for person in &self.people {
            if !usernames.insert(normalize(&person.username)) {
                warn!(username = %person.username, "duplicate username in roster, first row wins");
            }
            if !names.insert(normalize(&person.name)) {
                warn!(name = %person.name, "duplicate full name in roster, first row wins");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_roster(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write roster");
        file
    }

    #[test]
    fn loads_rows_in_order() {
        let file = write_roster(
            "Faith Ekstrand, faith.ekstrand@collabora.com, gfxstrand\n\
             Alyssa Rosenzweig, alyssa@rosenzweig.io, alyssa\n",
        );
        let roster = Roster::load(file.path()).expect("load roster");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.people()[0].username, "gfxstrand");
        assert_eq!(roster.people()[1].email, "alyssa@rosenzweig.io");
    }

    #[test]
    fn trims_field_whitespace() {
        let file = write_roster("  Ivan Briano ,  ivan.briano@intel.com ,briano  \n");
        let roster = Roster::load(file.path()).expect("load roster");
        assert_eq!(roster.people()[0].name, "Ivan Briano");
        assert_eq!(roster.people()[0].email, "ivan.briano@intel.com");
        assert_eq!(roster.people()[0].username, "briano");
    }

    #[test]
    fn ignores_extra_columns() {
        let file = write_roster("Ivan Briano, ivan.briano@intel.com, briano, mesa\n");
        let roster = Roster::load(file.path()).expect("load roster");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.people()[0].username, "briano");
    }

    #[test]
    fn short_row_is_an_error_with_its_row_number() {
        let file = write_roster(
            "Faith Ekstrand, faith.ekstrand@collabora.com, gfxstrand\n\
             Ivan Briano, ivan.briano@intel.com\n",
        );
        let err = Roster::load(file.path()).expect_err("short row must fail");
        match err {
            RbError::MalformedRow { row, .. } => assert_eq!(row, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = Roster::load(&dir.path().join("people.csv")).expect_err("must fail");
        assert!(matches!(err, RbError::RosterNotFound(_)));
    }

    #[test]
    fn empty_file_is_an_empty_roster() {
        let file = write_roster("");
        let roster = Roster::load(file.path()).expect("load roster");
        assert!(roster.is_empty());
    }
}

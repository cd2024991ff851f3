// The enclosure: single source of truth for all primate records
//
// One map keyed by the Group enum replaces the original five parallel
// lists; the "full roster" view is derived by walking the groups in their
// fixed declaration order. Persistence is a semicolon-delimited flat file,
// rewritten wholesale after every staff mutation:
//
//     Chimpanzee;Bubbles;11;40;Loves to climb.;True
//
// Free-text fields are written verbatim - a description containing ';'
// will not survive a reload.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::primate::{Group, Primate};

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised by the store and its persistence.
///
/// Lookups for a missing name deliberately do NOT error: they return
/// `None` or no-op, matching the permissive contract the shell relies on.
#[derive(Debug)]
pub enum EnclosureError {
    /// A selector string that names no known group.
    InvalidGroup(String),
    /// A persisted line that cannot be turned back into a record. Fails
    /// the entire load - no partial store is ever produced.
    MalformedRecord { line: usize, reason: String },
    /// Underlying CSV-layer failure (including a missing file).
    Csv(csv::Error),
    Io(std::io::Error),
}

impl fmt::Display for EnclosureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnclosureError::InvalidGroup(name) => write!(f, "invalid group: {}", name),
            EnclosureError::MalformedRecord { line, reason } => {
                write!(f, "malformed record on line {}: {}", line, reason)
            }
            EnclosureError::Csv(e) => write!(f, "enclosure file error: {}", e),
            EnclosureError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for EnclosureError {}

impl From<csv::Error> for EnclosureError {
    fn from(e: csv::Error) -> Self {
        EnclosureError::Csv(e)
    }
}

impl From<std::io::Error> for EnclosureError {
    fn from(e: std::io::Error) -> Self {
        EnclosureError::Io(e)
    }
}

/// One persisted line, in file field order.
#[derive(Serialize)]
struct PrimateRow<'a> {
    group: &'a str,
    name: &'a str,
    age: u32,
    weight: u32,
    description: &'a str,
    hungry: &'static str,
}

impl<'a> From<&'a Primate> for PrimateRow<'a> {
    fn from(p: &'a Primate) -> Self {
        PrimateRow {
            group: p.group.as_str(),
            name: &p.name,
            age: p.age,
            weight: p.weight,
            description: &p.description,
            hungry: if p.hungry { "True" } else { "False" },
        }
    }
}

/// Number of fields per persisted line.
const RECORD_FIELDS: usize = 6;

// ============================================================================
// ENCLOSURE STORE
// ============================================================================

/// Owns every primate record, grouped by [`Group`].
///
/// Duplicate (group, name) pairs are not rejected; every lookup matches the
/// first occurrence in store order. Known limitation, kept on purpose.
#[derive(Debug, Default)]
pub struct Enclosure {
    groups: HashMap<Group, Vec<Primate>>,
}

impl Enclosure {
    pub fn new() -> Self {
        Enclosure {
            groups: HashMap::new(),
        }
    }

    /// Append a primate to its group's list. The group is taken from the
    /// record's own tag; this never fails.
    pub fn add(&mut self, primate: Primate) {
        self.groups.entry(primate.group).or_default().push(primate);
    }

    /// Remove the first case-insensitive name match in the group. Silently
    /// does nothing when no such record exists; returns whether one did.
    pub fn remove(&mut self, group: Group, name: &str) -> bool {
        if let Some(list) = self.groups.get_mut(&group) {
            if let Some(pos) = list.iter().position(|p| p.is_named(name)) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// First case-insensitive name match in the group, if any. Callers are
    /// expected to have validated existence (e.g. via a names table) first.
    pub fn get(&self, group: Group, name: &str) -> Option<&Primate> {
        self.members(group).iter().find(|p| p.is_named(name))
    }

    pub fn get_mut(&mut self, group: Group, name: &str) -> Option<&mut Primate> {
        self.groups
            .get_mut(&group)?
            .iter_mut()
            .find(|p| p.is_named(name))
    }

    /// Apply a mutation to the first matching record. No validation at this
    /// layer - new field values are assumed pre-validated by the prompts.
    pub fn update<F>(&mut self, group: Group, name: &str, update_fn: F) -> bool
    where
        F: FnOnce(&mut Primate),
    {
        match self.get_mut(group, name) {
            Some(primate) => {
                update_fn(primate);
                true
            }
            None => false,
        }
    }

    /// Records in the given group, in insertion order.
    pub fn members(&self, group: Group) -> &[Primate] {
        self.groups.get(&group).map_or(&[], |list| list.as_slice())
    }

    /// Distinct populated groups, in roster order.
    pub fn groups_present(&self) -> Vec<Group> {
        Group::ALL
            .into_iter()
            .filter(|g| !self.members(*g).is_empty())
            .collect()
    }

    /// Lower-cased names in the given group, in insertion order.
    pub fn names_of(&self, group: Group) -> Vec<String> {
        self.members(group)
            .iter()
            .map(|p| p.name.to_lowercase())
            .collect()
    }

    /// Lower-cased names for a selector: a group name (any case) or "all"
    /// for the whole roster in group order.
    pub fn names_in(&self, selector: &str) -> Result<Vec<String>, EnclosureError> {
        if selector.eq_ignore_ascii_case("all") {
            return Ok(self.iter().map(|p| p.name.to_lowercase()).collect());
        }
        match Group::parse(selector) {
            Some(group) => Ok(self.names_of(group)),
            None => Err(EnclosureError::InvalidGroup(selector.to_string())),
        }
    }

    /// Every record, walking the groups in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Primate> {
        Group::ALL
            .iter()
            .filter_map(|g| self.groups.get(g))
            .flatten()
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ========================================================================
    // PERSISTENCE
    // ========================================================================

    /// Rewrite the whole enclosure file from the current store. Not atomic:
    /// an interrupted write leaves a truncated file.
    pub fn save(&self, path: &Path) -> Result<(), EnclosureError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Never)
            .from_path(path)?;

        for primate in self.iter() {
            writer.serialize(PrimateRow::from(primate))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Rebuild a store from the enclosure file. Any unreadable line aborts
    /// the whole load; a missing file is an error (the shell decides
    /// whether to start empty instead).
    pub fn load(path: &Path) -> Result<Enclosure, EnclosureError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_path(path)?;

        let mut enclosure = Enclosure::new();

        for (index, result) in reader.records().enumerate() {
            let line = index + 1;
            let record = result?;

            if record.len() != RECORD_FIELDS {
                return Err(EnclosureError::MalformedRecord {
                    line,
                    reason: format!(
                        "expected {} fields, found {}",
                        RECORD_FIELDS,
                        record.len()
                    ),
                });
            }

            let group = Group::from_tag(&record[0]).ok_or_else(|| {
                EnclosureError::MalformedRecord {
                    line,
                    reason: format!("unknown group tag '{}'", &record[0]),
                }
            })?;
            let age = parse_number(&record[2], line, "age")?;
            let weight = parse_number(&record[3], line, "weight")?;
            let hungry = match &record[5] {
                "True" => true,
                "False" => false,
                other => {
                    return Err(EnclosureError::MalformedRecord {
                        line,
                        reason: format!("hungry flag must be True or False, found '{}'", other),
                    })
                }
            };

            let mut primate = Primate::new(
                group,
                record[1].to_string(),
                age,
                weight,
                record[4].to_string(),
            );
            primate.hungry = hungry;
            enclosure.add(primate);
        }

        Ok(enclosure)
    }
}

fn parse_number(field: &str, line: usize, what: &str) -> Result<u32, EnclosureError> {
    field
        .parse()
        .map_err(|_| EnclosureError::MalformedRecord {
            line,
            reason: format!("{} must be a number, found '{}'", what, field),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn primate(group: Group, name: &str) -> Primate {
        Primate::new(
            group,
            name.to_string(),
            8,
            35,
            "A test primate.".to_string(),
        )
    }

    fn sample_enclosure() -> Enclosure {
        let mut enclosure = Enclosure::new();
        enclosure.add(primate(Group::Gorilla, "Koko"));
        enclosure.add(primate(Group::Chimpanzee, "Ham"));
        enclosure.add(primate(Group::Chimpanzee, "Bubbles"));
        enclosure.add(primate(Group::Capuchin, "Marcel"));
        enclosure
    }

    // ------------------------------------------------------------------
    // Store operations
    // ------------------------------------------------------------------

    #[test]
    fn add_then_get_returns_current_fields() {
        let enclosure = sample_enclosure();
        let found = enclosure.get(Group::Chimpanzee, "ham").unwrap();
        assert_eq!(found.name, "Ham");
        assert_eq!(found.age, 8);
        assert_eq!(found.weight, 35);
        assert!(found.hungry);
    }

    #[test]
    fn get_misses_other_groups() {
        let enclosure = sample_enclosure();
        assert!(enclosure.get(Group::Bonobo, "Ham").is_none());
    }

    #[test]
    fn remove_then_get_is_none() {
        let mut enclosure = sample_enclosure();
        assert!(enclosure.remove(Group::Chimpanzee, "HAM"));
        assert!(enclosure.get(Group::Chimpanzee, "Ham").is_none());
        // Other members of the group survive.
        assert!(enclosure.get(Group::Chimpanzee, "Bubbles").is_some());
    }

    #[test]
    fn remove_of_missing_name_is_a_silent_noop() {
        let mut enclosure = sample_enclosure();
        assert!(!enclosure.remove(Group::Gorilla, "Harambe"));
        assert_eq!(enclosure.len(), 4);
    }

    #[test]
    fn names_in_all_concatenates_in_group_order() {
        let enclosure = sample_enclosure();
        // Chimpanzees first (insertion order inside the group), then the
        // remaining populated groups in roster order.
        assert_eq!(
            enclosure.names_in("all").unwrap(),
            vec!["ham", "bubbles", "marcel", "koko"]
        );
    }

    #[test]
    fn names_in_accepts_any_case_group() {
        let enclosure = sample_enclosure();
        assert_eq!(
            enclosure.names_in("CHIMPANZEE").unwrap(),
            vec!["ham", "bubbles"]
        );
    }

    #[test]
    fn names_in_rejects_unknown_group() {
        let enclosure = sample_enclosure();
        match enclosure.names_in("lemur") {
            Err(EnclosureError::InvalidGroup(name)) => assert_eq!(name, "lemur"),
            other => panic!("expected InvalidGroup, got {:?}", other),
        }
    }

    #[test]
    fn groups_present_skips_empty_groups() {
        let enclosure = sample_enclosure();
        assert_eq!(
            enclosure.groups_present(),
            vec![Group::Chimpanzee, Group::Capuchin, Group::Gorilla]
        );
    }

    #[test]
    fn ordering_survives_add_and_remove() {
        let mut enclosure = sample_enclosure();
        enclosure.remove(Group::Chimpanzee, "Ham");
        enclosure.add(primate(Group::Chimpanzee, "Washoe"));
        assert_eq!(
            enclosure.names_in("all").unwrap(),
            vec!["bubbles", "washoe", "marcel", "koko"]
        );
    }

    #[test]
    fn duplicate_names_match_first_occurrence() {
        let mut enclosure = Enclosure::new();
        let mut older = primate(Group::Bonobo, "Kanzi");
        older.age = 30;
        enclosure.add(older);
        let mut younger = primate(Group::Bonobo, "Kanzi");
        younger.age = 3;
        enclosure.add(younger);

        // First match wins; the later record is shadowed.
        assert_eq!(enclosure.get(Group::Bonobo, "kanzi").unwrap().age, 30);
        enclosure.remove(Group::Bonobo, "kanzi");
        assert_eq!(enclosure.get(Group::Bonobo, "kanzi").unwrap().age, 3);
    }

    #[test]
    fn update_mutates_in_place() {
        let mut enclosure = sample_enclosure();
        assert!(enclosure.update(Group::Gorilla, "koko", |p| p.weight = 95));
        assert_eq!(enclosure.get(Group::Gorilla, "Koko").unwrap().weight, 95);
        assert!(!enclosure.update(Group::Gorilla, "Harambe", |p| p.weight = 1));
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    #[test]
    fn save_load_roundtrip_preserves_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enclosure.txt");

        let mut enclosure = sample_enclosure();
        // A record with non-default state, to prove fields round-trip.
        enclosure
            .update(Group::Capuchin, "Marcel", |p| {
                p.hungry = false;
                p.description = "Fed and happy.".to_string();
            });
        enclosure.save(&path).unwrap();

        let reloaded = Enclosure::load(&path).unwrap();
        assert_eq!(
            reloaded.names_in("all").unwrap(),
            enclosure.names_in("all").unwrap()
        );

        let marcel = reloaded.get(Group::Capuchin, "Marcel").unwrap();
        assert_eq!(marcel.age, 8);
        assert_eq!(marcel.weight, 35);
        assert_eq!(marcel.description, "Fed and happy.");
        assert!(!marcel.hungry);
    }

    #[test]
    fn camera_state_is_not_persisted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enclosure.txt");

        let mut enclosure = Enclosure::new();
        let mut clyde = primate(Group::Orangutan, "Clyde");
        clyde.has_camera = true;
        enclosure.add(clyde);
        enclosure.save(&path).unwrap();

        let reloaded = Enclosure::load(&path).unwrap();
        assert!(!reloaded.get(Group::Orangutan, "Clyde").unwrap().has_camera);
    }

    #[test]
    fn saved_lines_use_the_flat_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enclosure.txt");

        let mut enclosure = Enclosure::new();
        enclosure.add(primate(Group::Gorilla, "Koko"));
        enclosure.save(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents.lines().next().unwrap(),
            "Gorilla;Koko;8;35;A test primate.;True"
        );
    }

    #[test]
    fn load_fails_on_missing_file() {
        let dir = tempdir().unwrap();
        assert!(Enclosure::load(&dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn load_fails_on_wrong_field_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enclosure.txt");
        fs::write(&path, "Gorilla;Koko;8;35;True\n").unwrap();

        match Enclosure::load(&path) {
            Err(EnclosureError::MalformedRecord { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn load_fails_on_unknown_group_tag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enclosure.txt");
        fs::write(
            &path,
            "Chimpanzee;Ham;8;35;Fine.;True\nLemur;Zoboo;4;2;Not one of ours.;True\n",
        )
        .unwrap();

        match Enclosure::load(&path) {
            Err(EnclosureError::MalformedRecord { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("Lemur"));
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn load_fails_on_non_numeric_age() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enclosure.txt");
        fs::write(&path, "Gorilla;Koko;old;35;Fine.;True\n").unwrap();
        assert!(matches!(
            Enclosure::load(&path),
            Err(EnclosureError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn load_fails_on_bad_hungry_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enclosure.txt");
        fs::write(&path, "Gorilla;Koko;8;35;Fine.;maybe\n").unwrap();
        assert!(matches!(
            Enclosure::load(&path),
            Err(EnclosureError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn semicolon_in_description_corrupts_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("enclosure.txt");

        let mut enclosure = Enclosure::new();
        let mut koko = primate(Group::Gorilla, "Koko");
        koko.description = "Gentle; also strong.".to_string();
        enclosure.add(koko);
        enclosure.save(&path).unwrap();

        // The extra ';' splits the line into seven fields.
        assert!(matches!(
            Enclosure::load(&path),
            Err(EnclosureError::MalformedRecord { line: 1, .. })
        ));
    }
}

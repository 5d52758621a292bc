//! Module to parse `hp.obo` file
//!
//! Only `[Term]` stanzas are used, all other stanzas are ignored.
//! From each term the `id`, `name`, `is_a` and `is_obsolete` tags are read.
//!
//! ```text
//! format-version: 1.2
//! data-version: hp/releases/2023-10-09
//!
//! [Term]
//! id: HP:0000118
//! name: Phenotypic abnormality
//! is_a: HP:0000001 ! All
//! ```
use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::term::internal::HpoTermInternal;
use crate::{HpoError, HpoResult, HpoTermId, Ontology};

/// Tuples of Term - Parent
type Connections = Vec<(HpoTermId, HpoTermId)>;

/// A `[...]` block of an OBO file
struct Stanza<'a> {
    kind: &'a str,
    lines: Vec<&'a str>,
}

/// Reads all terms of an `hp.obo` file into the `ontology`
///
/// Terms are added first, parents are connected once all terms are known.
///
/// # Errors
///
/// - [`HpoError::CannotOpenFile`]: file is missing or not readable
/// - [`HpoError::InvalidInput`]: a term id or `is_a` line is malformed
/// - [`HpoError::DoesNotExist`]: an `is_a` line points to a missing term
pub(crate) fn read_obo_file<P: AsRef<Path>>(filename: P, ontology: &mut Ontology) -> HpoResult<()> {
    let source = filename.as_ref().display().to_string();
    let file_content =
        fs::read_to_string(filename).map_err(|_| HpoError::CannotOpenFile(source.clone()))?;
    read_obo(&file_content, ontology)?;
    debug!("Parsed {} terms from {}", ontology.len(), source);
    Ok(())
}

/// Reads all terms from the content of an OBO file
fn read_obo(content: &str, ontology: &mut Ontology) -> HpoResult<()> {
    let (header, stanzas) = split_stanzas(content);

    if let Some(version) = header
        .iter()
        .find_map(|line| line.strip_prefix("data-version:"))
    {
        ontology.set_hpo_version(version.trim());
    }

    let mut connections: Connections = Vec::new();
    for stanza in stanzas {
        if stanza.kind != "[Term]" {
            trace!("Ignoring: {}", stanza.kind);
            continue;
        }
        if let Some(raw_term) = term_from_obo(&stanza, &mut connections)? {
            let id = *raw_term.id();
            if !ontology.add_term(raw_term) {
                warn!("Duplicate term {}, keeping the last one", id);
            }
        }
    }

    for (child, parent) in connections {
        ontology.add_parent(parent, child)?;
    }
    Ok(())
}

/// Splits the content into the header lines and all stanzas
fn split_stanzas(content: &str) -> (Vec<&str>, Vec<Stanza<'_>>) {
    let mut header = Vec::new();
    let mut stanzas: Vec<Stanza<'_>> = Vec::new();
    for line in content.lines().map(|line| line.trim_end_matches('\r')) {
        if line.starts_with('[') {
            stanzas.push(Stanza {
                kind: line.trim(),
                lines: Vec::new(),
            });
            continue;
        }
        match stanzas.last_mut() {
            Some(stanza) => stanza.lines.push(line),
            None => header.push(line),
        }
    }
    (header, stanzas)
}

/// Builds a term from a `[Term]` stanza and collects its parents
///
/// Returns `None` for stanzas without an `id`
fn term_from_obo(stanza: &Stanza, connections: &mut Connections) -> HpoResult<Option<HpoTermInternal>> {
    let mut id: Option<&str> = None;
    let mut name: Option<&str> = None;
    let mut parents: Vec<HpoTermId> = Vec::new();
    let mut obsolete = false;

    for line in &stanza.lines {
        match parse_line(line) {
            Some(("id", value)) => id = Some(value),
            Some(("name", value)) => name = Some(value),
            Some(("is_a", value)) => parents.push(parent_id(value)?),
            Some(("is_obsolete", value)) => obsolete = value == "true",
            _ => (),
        }
    }

    let Some(id) = id else {
        warn!("Unable to parse term without id: {:?}", stanza.lines);
        return Ok(None);
    };
    let mut term = HpoTermInternal::try_new(id, name.unwrap_or_default())
        .map_err(|_| HpoError::InvalidInput(format!("invalid term id {id}")))?;
    if obsolete {
        trace!("Obsolete term {}", id);
        *term.obsolete_mut() = true;
    }
    connections.extend(parents.into_iter().map(|parent| (*term.id(), parent)));
    Ok(Some(term))
}

/// Parses the value of an `is_a` line, e.g. `HP:0000001 ! All`
fn parent_id(value: &str) -> HpoResult<HpoTermId> {
    value
        .split_whitespace()
        .next()
        .and_then(|id| HpoTermId::try_from(id).ok())
        .ok_or_else(|| HpoError::InvalidInput(format!("invalid is_a: {value}")))
}

/// Splits a `tag: value` line
fn parse_line(line: &str) -> Option<(&str, &str)> {
    line.split_once(": ")
        .map(|(tag, value)| (tag.trim(), value.trim()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::OntologyGraph;

    const SMALL_OBO: &str = "format-version: 1.2\n\
        data-version: hp/releases/2023-10-09\n\
        \n\
        [Term]\n\
        id: HP:0000001\n\
        name: All\n\
        \n\
        [Term]\n\
        id: HP:0000118\n\
        name: Phenotypic abnormality\n\
        is_a: HP:0000001 ! All\n\
        \n\
        [Term]\n\
        id: HP:0000707\n\
        name: Abnormality of the nervous system\n\
        is_a: HP:0000118 ! Phenotypic abnormality\n\
        is_a: HP:0000001 ! All\n\
        \n\
        [Term]\n\
        id: HP:0000489\n\
        name: obsolete Abnormality of globe location or size\n\
        is_obsolete: true\n\
        replaced_by: HP:0100887\n\
        \n\
        [Typedef]\n\
        id: part_of\n\
        name: part of\n";

    #[test]
    fn split_terms() {
        let mut ont = Ontology::default();
        read_obo(SMALL_OBO, &mut ont).unwrap();

        assert_eq!(ont.len(), 4);
        assert_eq!(ont.hpo_version(), Some("hp/releases/2023-10-09"));
        assert_eq!(ont.name(118u32), Some("Phenotypic abnormality"));
        assert_eq!(ont.parents(707u32).unwrap().len(), 2);
        assert_eq!(ont.parents(118u32).unwrap().len(), 1);
        assert!(ont.parents(1u32).unwrap().is_empty());
        assert_eq!(ont.children(1u32).unwrap().len(), 2);
        assert!(!ont.contains(HpoTermId::try_from("HP:0100887").unwrap()));
    }

    #[test]
    fn keeps_file_order() {
        let mut ont = Ontology::default();
        read_obo(SMALL_OBO, &mut ont).unwrap();
        let ids: Vec<String> = ont.hpo_ids().map(|id| id.to_string()).collect();
        assert_eq!(
            ids,
            vec!["HP:0000001", "HP:0000118", "HP:0000707", "HP:0000489"]
        );
    }

    #[test]
    fn obsolete_terms_are_kept() {
        let mut ont = Ontology::default();
        read_obo(SMALL_OBO, &mut ont).unwrap();
        assert!(ont.is_obsolete(489u32));
        assert!(ont.ancestors(489u32.into()).unwrap().is_empty());
    }

    #[test]
    fn windows_line_endings() {
        let content = SMALL_OBO.replace('\n', "\r\n");
        let mut ont = Ontology::default();
        read_obo(&content, &mut ont).unwrap();
        assert_eq!(ont.len(), 4);
        assert_eq!(ont.name(1u32), Some("All"));
        assert_eq!(ont.ancestors(707u32.into()).unwrap().len(), 2);
    }

    #[test]
    fn missing_parent() {
        let content = "[Term]\nid: HP:0000002\nname: Foo\nis_a: HP:0000001 ! All\n";
        let mut ont = Ontology::default();
        assert!(matches!(
            read_obo(content, &mut ont),
            Err(HpoError::DoesNotExist(_))
        ));
    }

    #[test]
    fn invalid_parent() {
        let content = "[Term]\nid: HP:0000001\nname: All\n\n[Term]\nid: HP:0000002\nname: Foo\nis_a: All\n";
        let mut ont = Ontology::default();
        assert!(matches!(
            read_obo(content, &mut ont),
            Err(HpoError::InvalidInput(_))
        ));
    }

    #[test]
    fn invalid_id() {
        let content = "[Term]\nid: HP:00000A1\nname: All\n";
        let mut ont = Ontology::default();
        assert!(read_obo(content, &mut ont).is_err());
    }

    #[test]
    fn term_without_id_is_skipped() {
        let content = "[Term]\nname: Nothing\n\n[Term]\nid: HP:0000001\nname: All\n";
        let mut ont = Ontology::default();
        read_obo(content, &mut ont).unwrap();
        assert_eq!(ont.len(), 1);
    }

    #[test]
    fn parse_tag_value() {
        assert_eq!(parse_line("id: HP:0000001"), Some(("id", "HP:0000001")));
        assert_eq!(
            parse_line("def: \"A: B\" []"),
            Some(("def", "\"A: B\" []"))
        );
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn read_fixture_file() {
        let mut ont = Ontology::default();
        read_obo_file("tests/small.obo", &mut ont).unwrap();
        assert_eq!(ont.len(), 9);
        assert!(read_obo_file("tests/missing.obo", &mut ont).is_err());
    }
}

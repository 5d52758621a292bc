//! Module to parse HPO - `Disease` associations from `phenotype.hpoa`
//!
//! ```text
//! #description: "HPO annotations for rare diseases [8181: OMIM; 47: DECIPHER; 4242 ORPHANET]"
//! #version: 2023-10-09
//! database_id disease_name    qualifier   hpo_id  reference   evidence    onset   frequency   sex modifier    aspect  biocuration
//! OMIM:619340 Developmental and epileptic encephalopathy 96       HP:0011097  PMID:31675180   PCS     1/2         P   HPO:probinson[2021-06-21]
//! OMIM:609153 Pseudohyperkalemia      NOT HP:0001878  PMID:2766660    PCS             P   HPO:lccarmody[2018-10-03]
//! ```
//!
//! Column 1 is the disease and column 4 the HPO term. Comment lines (`#`)
//! and the header line (`database_id ...`) are skipped.
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use super::{at_line, open, unreadable};
use crate::annotations::DiseaseAnnotations;
use crate::{HpoError, HpoResult, HpoTermId};

struct DiseaseComponents<'a> {
    id: &'a str,
    hpo_id: HpoTermId,
}

/// Returns `true` for comment, header and blank lines
fn skip_line(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("database") || line.trim().is_empty()
}

/// Parses a single annotation line
fn parse_line(line: &str) -> HpoResult<DiseaseComponents<'_>> {
    let cols: Vec<&str> = line.trim_end_matches('\r').split('\t').collect();
    if cols.len() < 4 {
        return Err(HpoError::InvalidInput(format!(
            "expected at least 4 columns, found {}",
            cols.len()
        )));
    }

    let id = cols[0].trim();
    if id.is_empty() {
        return Err(HpoError::InvalidInput("missing disease id".to_string()));
    }

    Ok(DiseaseComponents {
        id,
        hpo_id: HpoTermId::try_from(cols[3].trim())?,
    })
}

/// Parse `phenotype.hpoa` file
///
/// # Errors
///
/// - [`HpoError::CannotOpenFile`]: the file is not present or not readable
/// - [`HpoError::InvalidInput`]: a line has fewer than 4 columns or
///   an invalid term id
pub fn parse<P: AsRef<Path>>(file: P) -> HpoResult<DiseaseAnnotations> {
    let (reader, source) = open(file)?;
    let annotations = read(reader, &source)?;
    debug!(
        "Parsed {} diseases on {} terms from {}",
        annotations.universe_size(),
        annotations.annotated_terms(),
        source
    );
    Ok(annotations)
}

/// Reads disease annotations from any buffered reader
///
/// `source` is only used for error messages.
///
/// # Errors
///
/// [`HpoError::InvalidInput`]: a line has fewer than 4 columns or an invalid term id
pub fn read<R: BufRead>(reader: R, source: &str) -> HpoResult<DiseaseAnnotations> {
    let mut annotations = DiseaseAnnotations::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|_| unreadable(source))?;
        if skip_line(&line) {
            continue;
        }
        let disease = parse_line(&line).map_err(|err| at_line(source, idx + 1, err))?;
        annotations.annotate(disease.id, disease.hpo_id);
    }
    Ok(annotations)
}

//! Module to parse the observed terms of a patient
//!
//! The first line is a header. The first tab separated column of every
//! other line is read, only values with the `HP:` prefix are terms.
//!
//! ```text
//! hpo_id  name
//! HP:0001250  Seizure
//! HP:0001263  Global developmental delay
//! ```
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use super::{at_line, open, unreadable};
use crate::{HpoGroup, HpoResult, HpoTermId, HPO_PREFIX};

/// Parses a single line and returns the term, if the line has one
fn parse_line(line: &str) -> HpoResult<Option<HpoTermId>> {
    let token = line.split('\t').next().unwrap_or_default().trim();
    if !token.starts_with(HPO_PREFIX) {
        return Ok(None);
    }
    Ok(Some(HpoTermId::try_from(token)?))
}

/// Parse a patient file into a set of terms
///
/// # Errors
///
/// - [`crate::HpoError::CannotOpenFile`]: the file is not present or not readable
/// - [`crate::HpoError::InvalidInput`]: a `HP:` token is not a valid term id
pub fn parse<P: AsRef<Path>>(file: P) -> HpoResult<HpoGroup> {
    let (reader, source) = open(file)?;
    let terms = read(reader, &source)?;
    debug!("Parsed {} patient terms from {}", terms.len(), source);
    Ok(terms)
}

/// Reads the patient terms from any buffered reader
///
/// Duplicate terms are collapsed. `source` is only used for error messages.
///
/// # Errors
///
/// [`crate::HpoError::InvalidInput`]: a `HP:` token is not a valid term id
pub fn read<R: BufRead>(reader: R, source: &str) -> HpoResult<HpoGroup> {
    let mut terms = HpoGroup::new();
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line.map_err(|_| unreadable(source))?;
        match parse_line(&line).map_err(|err| at_line(source, idx + 1, err))? {
            Some(term) => {
                terms.insert(term);
            }
            None => debug!("Ignoring line {} of {}", idx + 1, source),
        }
    }
    Ok(terms)
}

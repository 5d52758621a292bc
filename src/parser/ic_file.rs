//! Module to parse precomputed information content
//!
//! Two tab separated columns, the term and its information content.
//! There is no header.
//!
//! ```text
//! HP:0000001  0
//! HP:0000118  0.0513
//! HP:0000707  0.9852
//! ```
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use super::{at_line, open, unreadable};
use crate::{HpoError, HpoResult, HpoTermId, IcTable};

/// Parses a single line into the term and its information content
fn parse_line(line: &str) -> HpoResult<(HpoTermId, f64)> {
    let mut cols = line.trim_end_matches('\r').split('\t');

    let (Some(term), Some(ic)) = (cols.next(), cols.next()) else {
        return Err(HpoError::InvalidInput(format!(
            "expected 2 columns: {line}"
        )));
    };

    Ok((HpoTermId::try_from(term.trim())?, ic.trim().parse::<f64>()?))
}

/// Parse an information content file
///
/// # Errors
///
/// - [`HpoError::CannotOpenFile`]: the file is not present or not readable
/// - [`HpoError::InvalidInput`]: a line does not have 2 columns, the term
///   is invalid or the value is not a non-negative, finite number
pub fn parse<P: AsRef<Path>>(file: P) -> HpoResult<IcTable> {
    let (reader, source) = open(file)?;
    let table = read(reader, &source)?;
    debug!("Parsed information content of {} terms from {}", table.len(), source);
    Ok(table)
}

/// Reads the information content from any buffered reader
///
/// Blank lines are skipped. If a term occurs more than once, the
/// last value is used. `source` is only used for error messages.
///
/// # Errors
///
/// [`HpoError::InvalidInput`]: a line does not have 2 columns, the term
/// is invalid or the value is not a non-negative, finite number
pub fn read<R: BufRead>(reader: R, source: &str) -> HpoResult<IcTable> {
    let mut table = IcTable::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|_| unreadable(source))?;
        if line.trim().is_empty() {
            continue;
        }
        let (term, ic) = parse_line(&line).map_err(|err| at_line(source, idx + 1, err))?;
        table
            .insert(term, ic)
            .map_err(|err| at_line(source, idx + 1, err))?;
    }
    Ok(table)
}

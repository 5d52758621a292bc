//! Parsing the HPO master data provided by Jax and the inputs of a ranking run
//!
//! - [`hp_obo`]: the ontology itself (`hp.obo`)
//! - [`phenotype_hpoa`]: disease annotations (`phenotype.hpoa`)
//! - [`gene_to_hpo`]: gene annotations (`genes_to_phenotype.txt`)
//! - [`patient`]: the observed terms of a patient
//! - [`ic_file`]: precomputed information content
//!
//! All parsers fail on malformed lines. Only blank lines and the comment
//! and header lines of the respective format are skipped.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{HpoError, HpoResult};

pub mod gene_to_hpo;
pub mod hp_obo;
pub mod ic_file;
pub mod patient;
pub mod phenotype_hpoa;

/// Opens `file` for buffered reading
///
/// Returns the reader and the display name of the file
fn open<P: AsRef<Path>>(file: P) -> HpoResult<(BufReader<File>, String)> {
    let filename = file.as_ref().display().to_string();
    match File::open(file) {
        Ok(fh) => Ok((BufReader::new(fh), filename)),
        Err(_) => Err(HpoError::CannotOpenFile(filename)),
    }
}

/// Adds the source and line number to errors caused by a malformed line
fn at_line(source: &str, number: usize, err: HpoError) -> HpoError {
    match err {
        HpoError::InvalidInput(msg) => {
            HpoError::InvalidInput(format!("{source}, line {number}: {msg}"))
        }
        HpoError::ParseIntError | HpoError::ParseFloatError => {
            HpoError::InvalidInput(format!("{source}, line {number}: {err}"))
        }
        other => other,
    }
}

/// Error for a line that could not be read at all, e.g. invalid UTF-8
fn unreadable(source: &str) -> HpoError {
    HpoError::InvalidInput(format!("Invalid data in {source}"))
}

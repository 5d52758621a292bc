#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
use core::fmt::Debug;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

pub mod annotations;
pub mod information_content;
pub mod matrix;
pub mod ontology;
pub mod output;
pub mod parser;
pub mod ranking;
pub mod similarity;
pub mod term;

pub use information_content::IcTable;
pub use ontology::{AncestorCache, Ontology, OntologyGraph};
pub use ranking::GeneScore;
pub use similarity::{GroupSimilarity, Mica, Similarity};
pub use term::{HpoGroup, HpoTermId};

const DEFAULT_NUM_PARENTS: usize = 10;
const DEFAULT_NUM_GENES: usize = 5_000;
const DEFAULT_NUM_TERMS: usize = 20_000;

/// Prefix of every HPO term identifier, e.g. `HP:0000118`
pub const HPO_PREFIX: &str = "HP:";

/// Main Error type for this crate
#[derive(Error, Debug)]
pub enum HpoError {
    /// The term is not part of the ontology
    #[error("term does not exist: {0}")]
    DoesNotExist(String),
    /// A numerical identifier could not be parsed
    #[error("unable to parse Integer")]
    ParseIntError,
    /// A numerical value could not be parsed
    #[error("unable to parse Float")]
    ParseFloatError,
    /// The input data is malformed
    #[error("invalid input data: {0}")]
    InvalidInput(String),
    /// The file does not exist or is not readable
    #[error("cannot open file {0}")]
    CannotOpenFile(String),
    /// The output file or its directory is not writable
    #[error("cannot write file {0}")]
    CannotWriteFile(String),
    /// Best-match-average over an empty query set
    #[error("empty query set")]
    EmptyQuerySet,
    /// Best-match-average over an empty reference set
    #[error("empty reference set")]
    EmptyReferenceSet,
}

impl From<ParseIntError> for HpoError {
    fn from(_: ParseIntError) -> Self {
        HpoError::ParseIntError
    }
}

impl From<ParseFloatError> for HpoError {
    fn from(_: ParseFloatError) -> Self {
        HpoError::ParseFloatError
    }
}

/// Shortcut for `Result<T, HpoError>`
pub type HpoResult<T> = Result<T, HpoError>;

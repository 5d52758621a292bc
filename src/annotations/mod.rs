//! Diseases and genes are linked to HPO terms and make up the annotations
//!
//! - [`DiseaseAnnotations`] holds the diseases that are directly annotated to
//!   each term. They are the statistical basis of the information content.
//! - [`GeneToPhenotype`] holds the terms of every gene. Genes are ranked
//!   by comparing these terms to the terms of a patient.

mod disease;
mod gene;

pub use disease::{DiseaseAnnotations, DiseaseId, Diseases};
pub use gene::{Gene, GeneToPhenotype};

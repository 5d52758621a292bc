//! Module to parse HPO - `Gene` associations
//!
//! ```text
//! ncbi_gene_id    gene_symbol hpo_id  hpo_name    frequency   disease_id
//! 10  NAT2    HP:0000007  Autosomal recessive inheritance         -       OMIM:243400
//! 10  NAT2    HP:0001939  Abnormality of metabolism/homeostasis   -       OMIM:243400
//! 16  AARS1   HP:0002460  Distal muscle weakness                  15/15   OMIM:613287
//! ```
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use super::{at_line, open, unreadable};
use crate::annotations::GeneToPhenotype;
use crate::{HpoError, HpoResult, HpoTermId};

struct ParsedGene<'a> {
    symbol: &'a str,
    hpo: HpoTermId,
}

// Removes the first (header) line, whatever it contains
fn remove_header<R: BufRead>(reader: &mut R, source: &str) -> HpoResult<()> {
    let mut trash = String::with_capacity(80);
    reader
        .read_line(&mut trash)
        .map_err(|_| unreadable(source))?;
    Ok(())
}

/// Parses a single line of `genes_to_phenotype.txt`
///
/// and returns a `ParsedGene` struct with gene and HPO info
fn genes_to_phenotype_line(line: &str) -> HpoResult<ParsedGene<'_>> {
    let mut cols = line.split('\t');

    // Column 1 is the NCBI-ID of the gene
    if cols.next().is_none() {
        return Err(HpoError::InvalidInput(line.to_string()));
    };

    // Column 2 is the gene symbol
    let Some(symbol) = cols.next() else {
        return Err(HpoError::InvalidInput(line.to_string()));
    };

    // Column 3 is the Hpo Term ID
    let Some(hpo) = cols.next() else {
        return Err(HpoError::InvalidInput(line.to_string()));
    };

    Ok(ParsedGene {
        symbol: symbol.trim(),
        hpo: HpoTermId::try_from(hpo.trim())?,
    })
}

/// Parse `genes_to_phenotype.txt` file
///
/// Genes keep the order in which they first appear in the file.
///
/// # Errors
///
/// - [`HpoError::CannotOpenFile`]: the file is not present or not readable
/// - [`HpoError::InvalidInput`]: a line has fewer than 3 columns or
///   an invalid term id
pub fn parse<P: AsRef<Path>>(file: P) -> HpoResult<GeneToPhenotype> {
    let (reader, source) = open(file)?;
    let genes = read(reader, &source)?;
    debug!("Parsed {} genes from {}", genes.len(), source);
    Ok(genes)
}

/// Reads gene - term associations from any buffered reader
///
/// The first line is a header and always skipped. `source` is only
/// used for error messages.
///
/// # Errors
///
/// [`HpoError::InvalidInput`]: a line has fewer than 3 columns or an invalid term id
pub fn read<R: BufRead>(mut reader: R, source: &str) -> HpoResult<GeneToPhenotype> {
    remove_header(&mut reader, source)?;

    let mut genes = GeneToPhenotype::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|_| unreadable(source))?;
        if line.trim().is_empty() {
            continue;
        }
        let gene = genes_to_phenotype_line(&line).map_err(|err| at_line(source, idx + 2, err))?;
        genes.add_term(gene.symbol, gene.hpo);
    }
    Ok(genes)
}

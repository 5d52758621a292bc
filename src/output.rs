//! Writing the ranking and the information content to TSV files
//!
//! Output files are first written to a temporary file in the target
//! directory and then renamed. A failed run never leaves a partially
//! written file behind.
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::ranking::GeneScore;
use crate::{HpoError, HpoResult, IcTable};

/// Header line of the ranking output
pub const RANKING_HEADER: &str = "gene\tsim_score";

/// Writes the ranked genes, scores rounded to 4 decimal places
///
/// ```text
/// gene    sim_score
/// SCN1A   0.7136
/// KCNQ2   0.5108
/// ```
///
/// # Errors
///
/// [`HpoError::CannotWriteFile`] if the file or its directory is not writable
pub fn write_ranking<P: AsRef<Path>>(path: P, ranking: &[GeneScore]) -> HpoResult<()> {
    write_atomic(path.as_ref(), |writer| {
        writeln!(writer, "{RANKING_HEADER}")?;
        for gene in ranking {
            writeln!(writer, "{}\t{:.4}", gene.gene(), gene.score())?;
        }
        Ok(())
    })?;
    debug!("Wrote {} genes to {}", ranking.len(), path.as_ref().display());
    Ok(())
}

/// Writes the information content of every term in table order, without header
///
/// ```text
/// HP:0000001  0
/// HP:0000118  0.2231435513142097
/// ```
///
/// # Errors
///
/// [`HpoError::CannotWriteFile`] if the file or its directory is not writable
pub fn write_information_content<P: AsRef<Path>>(path: P, table: &IcTable) -> HpoResult<()> {
    write_atomic(path.as_ref(), |writer| {
        for (term, ic) in table.iter() {
            writeln!(writer, "{term}\t{ic}")?;
        }
        Ok(())
    })?;
    debug!("Wrote {} terms to {}", table.len(), path.as_ref().display());
    Ok(())
}

/// Writes into a temporary file next to `path` and moves it into place
fn write_atomic<F>(path: &Path, content: F) -> HpoResult<()>
where
    F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> std::io::Result<()>,
{
    let error = || HpoError::CannotWriteFile(path.display().to_string());

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|_| error())?;
    trace!("Writing to temporary file {}", tmp.path().display());

    {
        let mut writer = BufWriter::new(&mut tmp);
        content(&mut writer).map_err(|_| error())?;
        writer.flush().map_err(|_| error())?;
    }
    tmp.persist(path).map_err(|_| error())?;
    Ok(())
}

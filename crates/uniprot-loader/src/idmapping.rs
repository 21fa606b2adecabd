//! Streaming parser for UniProt `idmapping.dat` files.
//!
//! A line-oriented, three-column tab-separated format: `accession`,
//! `id_type`, `id`. No headers, no tree structure.

use std::io::BufRead;
use std::path::PathBuf;

use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::debug;

use uniprot_types::IdMapping;

use crate::source;
use crate::types::{UniprotError, UniprotResult};

/// Stream-parses one or more UniProt `idmapping.dat` files, yielding one
/// [`IdMapping`] per well-formed row.
///
/// Accepts plain text or gzip-compressed files (decided by a `.gz` path
/// suffix). Lines that do not split into exactly three tab-separated
/// fields are silently skipped. With `id_type` set, only rows whose second
/// field equals it are yielded; the filter is applied after the split, so
/// filtering is equivalent to parsing unfiltered and selecting matches.
///
/// # Errors
///
/// Returns [`UniprotError::NoInputFiles`] immediately if `paths` is empty.
/// I/O failures surface as erroring items from the iterator.
///
/// # Examples
///
/// ```no_run
/// use uniprot_loader::parse_idmapping;
///
/// for row in parse_idmapping(["idmapping.dat.gz"], Some("RefSeq"))? {
///     let row = row?;
///     println!("{} -> {}", row.accession, row.id);
/// }
/// # Ok::<(), uniprot_loader::UniprotError>(())
/// ```
pub fn parse_idmapping<I, P>(paths: I, id_type: Option<&str>) -> UniprotResult<IdMappings>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
    if paths.is_empty() {
        return Err(UniprotError::NoInputFiles);
    }

    Ok(IdMappings {
        paths: paths.into_iter(),
        id_type: id_type.map(str::to_string),
        current: None,
        done: false,
    })
}

/// Lazy identifier-mapping sequence over an ordered set of input files.
///
/// Created by [`parse_idmapping`].
pub struct IdMappings {
    paths: std::vec::IntoIter<PathBuf>,
    id_type: Option<String>,
    current: Option<Reader<Box<dyn BufRead>>>,
    done: bool,
}

impl Iterator for IdMappings {
    type Item = UniprotResult<IdMapping>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut record = StringRecord::new();
        loop {
            if let Some(reader) = &mut self.current {
                match reader.read_record(&mut record) {
                    Ok(true) => {
                        // Anything but exactly three fields is skipped
                        if record.len() != 3 {
                            continue;
                        }
                        if let Some(filter) = &self.id_type {
                            if record.get(1) != Some(filter.as_str()) {
                                continue;
                            }
                        }
                        return Some(Ok(IdMapping {
                            accession: record[0].to_string(),
                            id_type: record[1].to_string(),
                            id: record[2].to_string(),
                        }));
                    }
                    Ok(false) => self.current = None,
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e.into()));
                    }
                }
            }

            let Some(path) = self.paths.next() else {
                self.done = true;
                return None;
            };
            match source::open(&path) {
                Ok(reader) => {
                    debug!(path = %path.display(), "parsing idmapping file");
                    self.current = Some(tab_reader(reader));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Builds a tab-delimited reader that tolerates ragged rows and treats
/// every byte literally (no quoting, no headers).
fn tab_reader(reader: Box<dyn BufRead>) -> Reader<Box<dyn BufRead>> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader)
}

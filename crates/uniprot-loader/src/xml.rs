//! Multi-file UniProt XML parsing entry point.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use tracing::debug;

use uniprot_types::UniProtEntry;

use crate::namespace::Namespace;
use crate::source;
use crate::types::{UniprotError, UniprotResult};
use crate::walker::EntryReader;

/// Stream-parses one or more UniProt XML files, yielding one
/// [`UniProtEntry`] per `entry` element.
///
/// Accepts plain XML or gzip-compressed files (decided by a `.gz` path
/// suffix). Both namespace variants are handled per file: `http://` for
/// single-entry web downloads, `https://` for bulk FTP dumps. Files are
/// processed strictly in order and each file's handle is closed before the
/// next opens; the concatenated sequence is indistinguishable from one
/// contiguous stream. Memory stays bounded by one entry regardless of
/// file size.
///
/// # Errors
///
/// Returns [`UniprotError::NoInputFiles`] immediately if `paths` is empty.
/// I/O and parse failures surface as erroring items from the iterator; the
/// first one ends the sequence.
///
/// # Examples
///
/// ```no_run
/// use uniprot_loader::parse_xml;
///
/// for entry in parse_xml(["uniprot_sprot.xml.gz"])? {
///     let entry = entry?;
///     println!("{} {:?}", entry.primary_accession, entry.organism.scientific_name);
/// }
/// # Ok::<(), uniprot_loader::UniprotError>(())
/// ```
pub fn parse_xml<I, P>(paths: I) -> UniprotResult<XmlEntries>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
    if paths.is_empty() {
        return Err(UniprotError::NoInputFiles);
    }

    Ok(XmlEntries {
        paths: paths.into_iter(),
        current: None,
        done: false,
    })
}

/// Lazy entry sequence over an ordered set of input files.
///
/// Created by [`parse_xml`]. Single-pass; restart by calling `parse_xml`
/// again.
pub struct XmlEntries {
    paths: std::vec::IntoIter<PathBuf>,
    current: Option<EntryReader<Box<dyn BufRead>>>,
    done: bool,
}

fn open_file(path: &Path) -> UniprotResult<EntryReader<Box<dyn BufRead>>> {
    // Detection uses its own handle; the walker parses from the start
    let namespace = Namespace::detect(path)?;
    let reader = source::open(path)?;
    debug!(path = %path.display(), "parsing UniProt XML file");
    Ok(EntryReader::new(reader, namespace))
}

impl Iterator for XmlEntries {
    type Item = UniprotResult<UniProtEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(reader) = &mut self.current {
                match reader.next() {
                    Some(Ok(entry)) => return Some(Ok(entry)),
                    Some(Err(e)) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                    // File exhausted: drop its handle before the next opens
                    None => self.current = None,
                }
            }

            let Some(path) = self.paths.next() else {
                self.done = true;
                return None;
            };
            match open_file(&path) {
                Ok(reader) => self.current = Some(reader),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

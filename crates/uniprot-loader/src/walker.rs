//! Bounded streaming walker over one UniProt XML document.

use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::reader::NsReader;
use tracing::debug;

use uniprot_types::UniProtEntry;

use crate::element::Element;
use crate::extract;
use crate::namespace::{Namespace, TagTable};
use crate::types::UniprotResult;

/// Streaming reader yielding one [`UniProtEntry`] per top-level `entry`
/// element, in document order.
///
/// The walker is pull-based and strictly lazy: nothing is read beyond the
/// end tag of the entry most recently requested, and each entry's subtree
/// is dropped before the next pull touches the stream. Resident memory is
/// therefore bounded by one materialized entry plus fixed reader
/// bookkeeping, independent of document size.
///
/// The first error (malformed XML, missing required structure) ends the
/// sequence; entries yielded before it remain valid. There is no
/// skip-and-continue: a corrupt bulk dump should stop a pipeline, not
/// silently truncate it.
pub struct EntryReader<B: BufRead> {
    reader: NsReader<B>,
    tags: TagTable,
    buf: Vec<u8>,
    entries_read: usize,
    done: bool,
}

impl<B: BufRead> EntryReader<B> {
    /// Creates a walker over an already-decoded byte stream.
    ///
    /// `namespace` must be the variant the document actually uses (see
    /// [`Namespace::detect`]); entries under the other variant are not
    /// recognized and the sequence ends empty.
    pub fn new(reader: B, namespace: Namespace) -> Self {
        let mut xml = NsReader::from_reader(reader);
        xml.config_mut().trim_text(true);
        Self {
            reader: xml,
            tags: TagTable::new(namespace),
            buf: Vec::new(),
            entries_read: 0,
            done: false,
        }
    }

    /// Returns the number of entries yielded so far.
    pub fn entries_read(&self) -> usize {
        self.entries_read
    }

    fn next_entry(&mut self) -> Option<UniprotResult<UniProtEntry>> {
        loop {
            self.buf.clear();
            let (resolve, event) = match self.reader.read_resolved_event_into(&mut self.buf) {
                Ok(resolved) => resolved,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            };

            match event {
                Event::Start(start) if self.tags.is_entry(&resolve, &start) => {
                    let root = match Element::from_start(&resolve, &start) {
                        Ok(root) => root,
                        Err(e) => {
                            self.done = true;
                            return Some(Err(e));
                        }
                    };

                    let mut subtree_buf = Vec::new();
                    let result = Element::read_subtree(&mut self.reader, root, &mut subtree_buf)
                        .and_then(|subtree| extract::entry(&self.tags, &subtree));
                    // subtree dropped above, before the next pull

                    match result {
                        Ok(entry) => {
                            self.entries_read += 1;
                            return Some(Ok(entry));
                        }
                        Err(e) => {
                            self.done = true;
                            return Some(Err(e));
                        }
                    }
                }
                // A self-closing entry still goes through extraction, which
                // rejects it for lacking a sequence block rather than
                // dropping the record.
                Event::Empty(start) if self.tags.is_entry(&resolve, &start) => {
                    let result = Element::from_start(&resolve, &start)
                        .and_then(|root| extract::entry(&self.tags, &root));
                    match result {
                        Ok(entry) => {
                            self.entries_read += 1;
                            return Some(Ok(entry));
                        }
                        Err(e) => {
                            self.done = true;
                            return Some(Err(e));
                        }
                    }
                }
                Event::Eof => {
                    self.done = true;
                    debug!(entries = self.entries_read, "finished UniProt XML stream");
                    return None;
                }
                _ => {}
            }
        }
    }
}

impl<B: BufRead> Iterator for EntryReader<B> {
    type Item = UniprotResult<UniProtEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.next_entry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UniprotError;
    use std::cell::Cell;
    use std::io::{BufReader, Cursor, Read};
    use std::rc::Rc;

    const NS_HTTP: &str = "http://uniprot.org/uniprot";
    const NS_HTTPS: &str = "https://uniprot.org/uniprot";

    fn entry_fragment(accession: &str, sequence: &str) -> String {
        format!(
            r#"<entry dataset="Swiss-Prot">
                 <accession>{accession}</accession>
                 <name>{accession}_HUMAN</name>
                 <sequence length="{}" mass="0">{sequence}</sequence>
               </entry>"#,
            sequence.len()
        )
    }

    fn document(ns: &str, entries: &[String]) -> String {
        format!(r#"<uniprot xmlns="{ns}">{}</uniprot>"#, entries.concat())
    }

    #[test]
    fn test_yields_entries_in_document_order() {
        let doc = document(
            NS_HTTP,
            &[
                entry_fragment("Q9Y261", "MLGAVKMEG"),
                entry_fragment("Q6GZX4", "MAFSAEDVL"),
            ],
        );

        let mut reader = EntryReader::new(doc.as_bytes(), Namespace::Http);
        let first = reader.next().unwrap().unwrap();
        let second = reader.next().unwrap().unwrap();
        assert!(reader.next().is_none());

        assert_eq!(first.primary_accession, "Q9Y261");
        assert_eq!(second.primary_accession, "Q6GZX4");
        assert_eq!(reader.entries_read(), 2);
    }

    #[test]
    fn test_https_namespace_variant() {
        let doc = document(NS_HTTPS, &[entry_fragment("Q9Y261", "MLGAVKMEG")]);
        let entries: Vec<_> = EntryReader::new(doc.as_bytes(), Namespace::Https)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entry_name, "Q9Y261_HUMAN");
    }

    #[test]
    fn test_wrong_namespace_yields_zero_entries() {
        // Mis-detection is a correctness property, not an error: an http
        // document walked with the https table matches nothing.
        let doc = document(NS_HTTP, &[entry_fragment("Q9Y261", "MLGAVKMEG")]);
        let mut reader = EntryReader::new(doc.as_bytes(), Namespace::Https);
        assert!(reader.next().is_none());
        assert_eq!(reader.entries_read(), 0);
    }

    #[test]
    fn test_error_ends_sequence_after_valid_entries() {
        // Second entry is truncated mid-element; the first must still be
        // yielded, then the sequence terminates with an error.
        let doc = format!(
            r#"<uniprot xmlns="{NS_HTTP}">{}<entry dataset="Swiss-Prot"><accession>BAD"#,
            entry_fragment("Q9Y261", "MLGAVKMEG"),
        );

        let mut reader = EntryReader::new(doc.as_bytes(), Namespace::Http);
        assert_eq!(
            reader.next().unwrap().unwrap().primary_accession,
            "Q9Y261"
        );
        assert!(reader.next().unwrap().is_err());
        // Fused after the failure
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_extraction_error_is_fatal() {
        let doc = document(
            NS_HTTP,
            &[
                entry_fragment("Q9Y261", "MLGAVKMEG"),
                r#"<entry dataset="Swiss-Prot"><accession>Q0</accession></entry>"#.to_string(),
                entry_fragment("Q6GZX4", "MAFSAEDVL"),
            ],
        );

        let mut reader = EntryReader::new(doc.as_bytes(), Namespace::Http);
        assert!(reader.next().unwrap().is_ok());
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err, UniprotError::MissingElement { .. }));
        // No skip-and-continue past a malformed entry
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_self_closing_entry_is_structural_error() {
        // A childless <entry/> has no sequence block; it must terminate
        // the sequence with an error, not disappear from the output.
        let doc = format!(
            r#"<uniprot xmlns="{NS_HTTP}"><entry dataset="Swiss-Prot"/>{}</uniprot>"#,
            entry_fragment("Q9Y261", "MLGAVKMEG"),
        );

        let mut reader = EntryReader::new(doc.as_bytes(), Namespace::Http);
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            UniprotError::MissingElement { element: "sequence" }
        ));
        assert!(reader.next().is_none());
        assert_eq!(reader.entries_read(), 0);
    }

    /// Read adapter counting bytes pulled from the underlying stream.
    struct CountingReader<R> {
        inner: R,
        count: Rc<Cell<usize>>,
    }

    impl<R: Read> Read for CountingReader<R> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = self.inner.read(buf)?;
            self.count.set(self.count.get() + n);
            Ok(n)
        }
    }

    #[test]
    fn test_pull_based_laziness() {
        // 50 entries with 4 KiB sequences: the first pull must not drag
        // the whole document through the reader.
        let residues = "MLGAVKMEGH".repeat(400);
        let entries: Vec<String> = (0..50)
            .map(|i| entry_fragment(&format!("Q{i:05}"), &residues))
            .collect();
        let doc = document(NS_HTTP, &entries);
        let total = doc.len();

        let count = Rc::new(Cell::new(0));
        let counting = CountingReader {
            inner: Cursor::new(doc.into_bytes()),
            count: Rc::clone(&count),
        };
        let mut reader = EntryReader::new(BufReader::new(counting), Namespace::Http);

        let first = reader.next().unwrap().unwrap();
        assert_eq!(first.primary_accession, "Q00000");
        assert!(
            count.get() < total / 4,
            "first pull consumed {} of {} bytes",
            count.get(),
            total
        );

        // Draining the iterator reads the rest
        assert_eq!(reader.count(), 49);
        assert_eq!(count.get(), total);
    }
}

//! # uniprot-loader
//!
//! Streaming parsers for UniProt distribution files.
//!
//! Two formats are covered: the XML knowledgebase dumps (potentially
//! multi-gigabyte, parsed with bounded memory, one entry resident at a
//! time) and the tab-separated `idmapping.dat` identifier-mapping files.
//! Both accept plain or gzip-compressed input, decided by a `.gz` path
//! suffix, and both concatenate lazily across multiple input files.
//!
//! ## Usage
//!
//! ```no_run
//! use uniprot_loader::{parse_idmapping, parse_xml};
//!
//! for entry in parse_xml(["uniprot_sprot.xml.gz", "uniprot_trembl.xml.gz"])? {
//!     let entry = entry?;
//!     println!("{} {}", entry.primary_accession, entry.sequence.length);
//! }
//!
//! for row in parse_idmapping(["idmapping.dat.gz"], Some("GeneID"))? {
//!     let row = row?;
//!     println!("{} -> {}", row.accession, row.id);
//! }
//! # Ok::<(), uniprot_loader::UniprotError>(())
//! ```
//!
//! Parsing is fail-fast: malformed XML or missing required structure ends
//! the sequence with an error at the point of failure. Already-yielded
//! entries remain valid. Data-quality anomalies (unknown `type` attribute
//! values, declared sequence length not matching the residues) are never
//! errors; see [`uniprot_types`] for how they are represented.

#![warn(missing_docs)]

mod element;
mod extract;
mod idmapping;
mod namespace;
mod source;
mod types;
mod walker;
mod xml;

// Re-export uniprot-types for convenience
pub use uniprot_types;

pub use idmapping::{parse_idmapping, IdMappings};
pub use namespace::Namespace;
pub use types::{UniprotError, UniprotResult};
pub use walker::EntryReader;
pub use xml::{parse_xml, XmlEntries};

//! # uniprot-types
//!
//! Type definitions for UniProtKB protein data.
//!
//! This crate provides Rust type definitions for records extracted from the
//! two UniProt distribution formats: the XML knowledgebase dumps
//! (`uniprot_sprot.xml.gz`, `uniprot_trembl.xml.gz`, single-entry web
//! downloads) and the tab-separated `idmapping.dat` files.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use uniprot_types::{Organism, Sequence, UniProtEntry, well_known};
//!
//! let entry = UniProtEntry {
//!     primary_accession: "Q9Y261".to_string(),
//!     accessions: vec!["Q9Y261".to_string(), "Q8WUW4".to_string()],
//!     entry_name: "FOXA2_HUMAN".to_string(),
//!     dataset: well_known::SWISS_PROT.to_string(),
//!     protein_name: Some("Hepatocyte nuclear factor 3-beta".to_string()),
//!     gene: None,
//!     organism: Organism::default(),
//!     sequence: Sequence::default(),
//!     keywords: vec![],
//!     db_references: vec![],
//!     protein_existence: None,
//! };
//!
//! assert!(entry.is_swiss_prot());
//! ```
//!
//! ## Without Serde
//!
//! To use this crate without serde (zero dependencies):
//!
//! ```toml
//! [dependencies]
//! uniprot-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod db_reference;
mod entry;
mod enums;
mod gene;
mod idmapping;
mod organism;
mod sequence;
pub mod well_known;

// Re-export all public types at crate root
pub use db_reference::DbReference;
pub use entry::UniProtEntry;
pub use enums::{GeneNameType, OrganismNameType};
pub use gene::Gene;
pub use idmapping::IdMapping;
pub use organism::Organism;
pub use sequence::Sequence;

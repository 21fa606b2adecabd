//! Well-known UniProt string constants.
//!
//! These are fixed vocabulary values from the UniProtKB XML schema that
//! parsers and consumers match against.

/// Dataset attribute value for reviewed (Swiss-Prot) entries.
pub const SWISS_PROT: &str = "Swiss-Prot";

/// Dataset attribute value for unreviewed (TrEMBL) entries.
pub const TREMBL: &str = "TrEMBL";

/// Database name of the taxonomy cross-reference carried inside the
/// `organism` block.
pub const NCBI_TAXONOMY: &str = "NCBI Taxonomy";

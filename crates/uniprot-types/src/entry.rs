//! UniProtKB entry type.

use crate::{well_known, DbReference, Gene, Organism, Sequence};

/// A single UniProtKB entry extracted from an XML dump.
///
/// Every field has a defined default when its optional substructure is
/// missing from the source; only the `sequence` block is structurally
/// required. Entries are immutable value records, fully constructed by one
/// extraction pass and owned by the caller afterwards.
///
/// # Examples
///
/// ```
/// use uniprot_types::{Organism, Sequence, UniProtEntry};
///
/// let entry = UniProtEntry {
///     primary_accession: "Q9Y261".to_string(),
///     accessions: vec!["Q9Y261".to_string(), "Q8WUW4".to_string()],
///     entry_name: "FOXA2_HUMAN".to_string(),
///     dataset: "Swiss-Prot".to_string(),
///     protein_name: Some("Hepatocyte nuclear factor 3-beta".to_string()),
///     gene: None,
///     organism: Organism::default(),
///     sequence: Sequence::default(),
///     keywords: vec!["Activator".to_string()],
///     db_references: vec![],
///     protein_existence: Some("evidence at protein level".to_string()),
/// };
///
/// assert!(entry.is_swiss_prot());
/// assert_eq!(entry.primary_accession, entry.accessions[0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniProtEntry {
    /// Primary accession, e.g. `"Q9Y261"`. First accession in document
    /// order; empty string for an entry without accessions.
    pub primary_accession: String,
    /// All accessions including primary and secondary, in document order.
    pub accessions: Vec<String>,
    /// Mnemonic entry name, e.g. `"FOXA2_HUMAN"`. Empty string if absent.
    pub entry_name: String,
    /// Dataset classification as found in the `dataset` attribute,
    /// normally `"Swiss-Prot"` or `"TrEMBL"`. Not validated.
    pub dataset: String,
    /// Recommended full protein name. `None` if not annotated.
    pub protein_name: Option<String>,
    /// Gene names. `None` if the entry has no gene annotation.
    pub gene: Option<Gene>,
    /// Source organism with taxonomy. Always present, possibly all-empty.
    pub organism: Organism,
    /// Amino acid sequence with metadata.
    pub sequence: Sequence,
    /// UniProt keywords in document order, e.g. `["Activator", "Nucleus"]`.
    pub keywords: Vec<String>,
    /// Cross-references to external databases, in document order.
    pub db_references: Vec<DbReference>,
    /// Protein existence classification, e.g.
    /// `"evidence at protein level"`. `None` if absent.
    pub protein_existence: Option<String>,
}

impl UniProtEntry {
    /// Returns true if this entry belongs to the reviewed Swiss-Prot
    /// dataset.
    pub fn is_swiss_prot(&self) -> bool {
        self.dataset == well_known::SWISS_PROT
    }

    /// Returns true if this entry belongs to the unreviewed TrEMBL dataset.
    pub fn is_trembl(&self) -> bool {
        self.dataset == well_known::TREMBL
    }

    /// Returns the cross-references pointing at the given database, in
    /// document order.
    pub fn references_to<'a>(&'a self, database: &'a str) -> impl Iterator<Item = &'a DbReference> {
        self.db_references
            .iter()
            .filter(move |r| r.database == database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(dataset: &str) -> UniProtEntry {
        UniProtEntry {
            primary_accession: "P12345".to_string(),
            accessions: vec!["P12345".to_string()],
            entry_name: "TEST_HUMAN".to_string(),
            dataset: dataset.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_dataset_classification() {
        assert!(make_entry("Swiss-Prot").is_swiss_prot());
        assert!(!make_entry("Swiss-Prot").is_trembl());
        assert!(make_entry("TrEMBL").is_trembl());
        assert!(!make_entry("").is_swiss_prot());
    }

    #[test]
    fn test_references_to() {
        let mut entry = make_entry("Swiss-Prot");
        entry.db_references = vec![
            DbReference {
                database: "PDB".to_string(),
                id: "7YZE".to_string(),
                ..Default::default()
            },
            DbReference {
                database: "EMBL".to_string(),
                id: "AB028021".to_string(),
                ..Default::default()
            },
            DbReference {
                database: "PDB".to_string(),
                id: "5X07".to_string(),
                ..Default::default()
            },
        ];

        let pdb: Vec<&str> = entry.references_to("PDB").map(|r| r.id.as_str()).collect();
        assert_eq!(pdb, vec!["7YZE", "5X07"]);
        assert_eq!(entry.references_to("GeneID").count(), 0);
    }
}

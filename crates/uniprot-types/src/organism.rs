//! Source organism annotation.

/// Organism annotation from a UniProt entry.
///
/// All fields are optional in the source schema; an entry without an
/// `organism` block produces an all-empty `Organism`, never a missing one.
///
/// # Examples
///
/// ```
/// use uniprot_types::Organism;
///
/// let organism = Organism {
///     scientific_name: Some("Homo sapiens".to_string()),
///     common_name: Some("Human".to_string()),
///     tax_id: Some("9606".to_string()),
///     lineage: vec!["Eukaryota".to_string(), "Metazoa".to_string()],
/// };
///
/// assert!(organism.has_taxonomy());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Organism {
    /// Binomial name, e.g. `"Homo sapiens"`.
    pub scientific_name: Option<String>,
    /// Vernacular name, e.g. `"Human"`. `None` if not annotated.
    pub common_name: Option<String>,
    /// NCBI Taxonomy identifier as found in the file, e.g. `"9606"`.
    ///
    /// Kept textual; the source does not guarantee a numeric value.
    pub tax_id: Option<String>,
    /// Taxonomic lineage from root to most specific taxon, in document
    /// order, e.g. `["Eukaryota", ..., "Homo"]`.
    pub lineage: Vec<String>,
}

impl Organism {
    /// Returns true if the entry carried an NCBI Taxonomy cross-reference.
    pub fn has_taxonomy(&self) -> bool {
        self.tax_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_empty() {
        let organism = Organism::default();
        assert_eq!(organism.scientific_name, None);
        assert_eq!(organism.common_name, None);
        assert_eq!(organism.tax_id, None);
        assert!(organism.lineage.is_empty());
        assert!(!organism.has_taxonomy());
    }
}

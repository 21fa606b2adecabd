//! Gene name annotation.

/// Gene names associated with a UniProt entry.
///
/// An entry without a `gene` block has no `Gene` at all
/// (`UniProtEntry::gene` is `None`), not an empty one. Name lists keep
/// document order and duplicates.
///
/// # Examples
///
/// ```
/// use uniprot_types::Gene;
///
/// let gene = Gene {
///     primary: Some("FOXA2".to_string()),
///     synonyms: vec!["HNF3B".to_string(), "TCF3B".to_string()],
///     ordered_locus_names: vec![],
///     orf_names: vec![],
/// };
///
/// assert_eq!(gene.primary.as_deref(), Some("FOXA2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gene {
    /// Primary gene name, e.g. `"FOXA2"`. `None` if not annotated.
    ///
    /// If the source repeats the `primary` type, the last occurrence wins.
    pub primary: Option<String>,
    /// Alternative gene names, e.g. `["HNF3B", "TCF3B"]`.
    pub synonyms: Vec<String>,
    /// Systematic locus identifiers, e.g. `["b0001"]`.
    pub ordered_locus_names: Vec<String>,
    /// Open reading frame identifiers.
    pub orf_names: Vec<String>,
}

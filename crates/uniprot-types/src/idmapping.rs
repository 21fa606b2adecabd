//! Identifier-mapping records.

/// Single row from a UniProt `idmapping.dat` file.
///
/// Each row maps a UniProt accession to one identifier in an external
/// database.
///
/// # Examples
///
/// ```
/// use uniprot_types::IdMapping;
///
/// let mapping = IdMapping {
///     accession: "Q6GZX4".to_string(),
///     id_type: "RefSeq".to_string(),
///     id: "YP_031579.1".to_string(),
/// };
///
/// assert_eq!(mapping.id_type, "RefSeq");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdMapping {
    /// UniProtKB accession, e.g. `"Q6GZX4"`.
    pub accession: String,
    /// Database name, e.g. `"GeneID"`, `"RefSeq"`, `"EMBL"`.
    pub id_type: String,
    /// Identifier in that database, e.g. `"YP_031579.1"`.
    pub id: String,
}

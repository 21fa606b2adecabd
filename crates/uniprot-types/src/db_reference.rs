//! Cross-references to external databases.

use std::collections::BTreeMap;

/// Cross-reference from a UniProt entry to a record in another database.
///
/// `database` carries the `type` attribute of the source element (the
/// target database name); `id` is the identifier within that database.
/// Reference order in [`crate::UniProtEntry::db_references`] is document
/// order, with no grouping or deduplication.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use uniprot_types::DbReference;
///
/// let reference = DbReference {
///     database: "PDB".to_string(),
///     id: "7YZE".to_string(),
///     molecule: None,
///     properties: BTreeMap::from([
///         ("method".to_string(), "X-ray".to_string()),
///         ("resolution".to_string(), "1.99 A".to_string()),
///     ]),
/// };
///
/// assert_eq!(reference.property("method"), Some("X-ray"));
/// assert!(!reference.is_isoform_scoped());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DbReference {
    /// Target database name, e.g. `"PDB"`, `"RefSeq"`, `"EMBL"`.
    pub database: String,
    /// Identifier in that database, e.g. `"7YZE"`.
    pub id: String,
    /// Isoform identifier this reference is scoped to, e.g. `"Q9Y261-1"`.
    /// `None` if the reference applies to the whole entry.
    pub molecule: Option<String>,
    /// Additional key-value properties, e.g.
    /// `{"method": "X-ray", "resolution": "1.99 A"}`.
    ///
    /// Keys are unique; if a property type repeats in the source, the last
    /// occurrence wins.
    pub properties: BTreeMap<String, String>,
}

impl DbReference {
    /// Looks up a property value by its type.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Returns true if this reference is scoped to a single isoform.
    pub fn is_isoform_scoped(&self) -> bool {
        self.molecule.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lookup() {
        let reference = DbReference {
            database: "RefSeq".to_string(),
            id: "NP_068556.2".to_string(),
            molecule: Some("Q9Y261-2".to_string()),
            properties: BTreeMap::from([(
                "nucleotide sequence ID".to_string(),
                "NM_021784.5".to_string(),
            )]),
        };

        assert_eq!(
            reference.property("nucleotide sequence ID"),
            Some("NM_021784.5")
        );
        assert_eq!(reference.property("method"), None);
        assert!(reference.is_isoform_scoped());
    }
}

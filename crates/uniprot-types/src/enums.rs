//! UniProt enumeration types.
//!
//! This module provides enum representations for the fixed `type` attribute
//! vocabularies used to classify repeated XML child elements.

/// Classification of a `gene/name` element by its `type` attribute.
///
/// Unrecognized values yield `None` from [`GeneNameType::from_attr`] and
/// are silently dropped by extractors; future schema extensions must not
/// fail a bulk parse.
///
/// # Examples
///
/// ```
/// use uniprot_types::GeneNameType;
///
/// assert_eq!(GeneNameType::from_attr("primary"), Some(GeneNameType::Primary));
/// assert_eq!(GeneNameType::from_attr("ordered locus"), Some(GeneNameType::OrderedLocus));
/// assert_eq!(GeneNameType::from_attr("nickname"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeneNameType {
    /// Primary gene name; at most one is expected per entry.
    Primary,
    /// Alternative gene name.
    Synonym,
    /// Systematic ordered locus name.
    OrderedLocus,
    /// Open reading frame name.
    Orf,
}

impl GeneNameType {
    /// Attribute value for the primary gene name.
    pub const PRIMARY: &'static str = "primary";
    /// Attribute value for synonyms.
    pub const SYNONYM: &'static str = "synonym";
    /// Attribute value for ordered locus names.
    pub const ORDERED_LOCUS: &'static str = "ordered locus";
    /// Attribute value for ORF names.
    pub const ORF: &'static str = "ORF";

    /// Creates a GeneNameType from a `type` attribute value.
    ///
    /// Returns `None` if the value doesn't match a known name type.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            Self::PRIMARY => Some(Self::Primary),
            Self::SYNONYM => Some(Self::Synonym),
            Self::ORDERED_LOCUS => Some(Self::OrderedLocus),
            Self::ORF => Some(Self::Orf),
            _ => None,
        }
    }

    /// Returns the attribute value for this name type.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Primary => Self::PRIMARY,
            Self::Synonym => Self::SYNONYM,
            Self::OrderedLocus => Self::ORDERED_LOCUS,
            Self::Orf => Self::ORF,
        }
    }
}

/// Classification of an `organism/name` element by its `type` attribute.
///
/// # Examples
///
/// ```
/// use uniprot_types::OrganismNameType;
///
/// assert_eq!(
///     OrganismNameType::from_attr("scientific"),
///     Some(OrganismNameType::Scientific)
/// );
/// assert_eq!(OrganismNameType::from_attr("full"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrganismNameType {
    /// Binomial scientific name.
    Scientific,
    /// Vernacular common name.
    Common,
}

impl OrganismNameType {
    /// Attribute value for the scientific name.
    pub const SCIENTIFIC: &'static str = "scientific";
    /// Attribute value for the common name.
    pub const COMMON: &'static str = "common";

    /// Creates an OrganismNameType from a `type` attribute value.
    ///
    /// Returns `None` if the value doesn't match a known name type.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            Self::SCIENTIFIC => Some(Self::Scientific),
            Self::COMMON => Some(Self::Common),
            _ => None,
        }
    }
}

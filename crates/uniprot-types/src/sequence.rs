//! Protein amino acid sequence.

/// Protein amino acid sequence with its metadata attributes.
///
/// `length` and `mass` default to 0 when the source omits the attribute;
/// standard dumps always carry them, but the parser stays lenient. The
/// declared `length` matching the actual residue count is a data-quality
/// expectation of the source file, checked via [`Sequence::is_consistent`],
/// never enforced during parsing.
///
/// # Examples
///
/// ```
/// use uniprot_types::Sequence;
///
/// let sequence = Sequence {
///     value: "MLGAVKMEG".to_string(),
///     length: 9,
///     mass: 934,
///     checksum: "61DDE4C75C70680A".to_string(),
/// };
///
/// assert!(sequence.is_consistent());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence {
    /// Amino acid string with all whitespace stripped, e.g. `"MLGAVKMEG..."`.
    pub value: String,
    /// Declared number of amino acids.
    pub length: u32,
    /// Declared molecular mass in Daltons.
    pub mass: u32,
    /// CRC64 checksum of the sequence. Empty if absent.
    pub checksum: String,
}

impl Sequence {
    /// Returns true if the declared length matches the number of residues
    /// actually present in `value`.
    pub fn is_consistent(&self) -> bool {
        self.value.len() == self.length as usize
    }
}

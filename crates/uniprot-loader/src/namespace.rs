//! XML namespace detection and qualified tag resolution.
//!
//! UniProt publishes the same schema under two namespace URIs: single-entry
//! web downloads use `http://`, bulk FTP dumps use `https://`. Matching
//! elements against the wrong variant silently yields zero entries, so the
//! variant is detected up front from a short prefix of the raw stream.

use std::io::Read;
use std::path::Path;

use quick_xml::events::BytesStart;
use quick_xml::name::{Namespace as XmlNamespace, ResolveResult};
use tracing::debug;

use crate::source;
use crate::types::UniprotResult;

/// Number of bytes inspected when detecting the namespace variant.
///
/// The root element and its `xmlns` declaration sit well inside the first
/// two kilobytes of every known dump.
const PROBE_BYTES: usize = 2048;

/// One of the two known UniProt XML namespace variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Legacy `http://` namespace, used by single-entry web downloads.
    Http,
    /// `https://` namespace, used by bulk FTP dumps.
    Https,
}

impl Namespace {
    /// URI of the legacy single-entry namespace.
    pub const HTTP_URI: &'static str = "http://uniprot.org/uniprot";
    /// URI of the bulk-dump namespace.
    pub const HTTPS_URI: &'static str = "https://uniprot.org/uniprot";

    /// Returns the namespace URI.
    pub fn uri(self) -> &'static str {
        match self {
            Self::Http => Self::HTTP_URI,
            Self::Https => Self::HTTPS_URI,
        }
    }

    /// Detects the namespace variant used by the file at `path`.
    ///
    /// Reads a bounded prefix from an independently opened handle (the
    /// walker re-opens the file from the beginning), decompressing by `.gz`
    /// suffix. Detection cannot fail beyond I/O: an unrecognized prefix
    /// falls back to [`Namespace::Http`], and a mis-detection surfaces as
    /// zero yielded entries rather than an error.
    pub fn detect(path: &Path) -> UniprotResult<Self> {
        let mut reader = source::open(path)?;
        let mut prefix = [0u8; PROBE_BYTES];
        let mut filled = 0;
        while filled < prefix.len() {
            let n = reader.read(&mut prefix[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }

        let namespace = Self::from_prefix(&prefix[..filled]);
        debug!(
            path = %path.display(),
            namespace = namespace.uri(),
            "detected UniProt namespace variant"
        );
        Ok(namespace)
    }

    /// Decides the variant from a raw document prefix.
    pub(crate) fn from_prefix(prefix: &[u8]) -> Self {
        let token = Self::HTTPS_URI.as_bytes();
        if prefix.windows(token.len()).any(|window| window == token) {
            Self::Https
        } else {
            Self::Http
        }
    }
}

/// Qualified element names for one namespace variant, resolved once per
/// file instead of per element.
///
/// Names use Clark notation (`{namespace}local`), matching how
/// [`crate::element::Element`] records element names.
#[derive(Debug, Clone)]
pub(crate) struct TagTable {
    namespace: Namespace,
    pub(crate) accession: String,
    pub(crate) name: String,
    pub(crate) protein: String,
    pub(crate) recommended_name: String,
    pub(crate) full_name: String,
    pub(crate) gene: String,
    pub(crate) organism: String,
    pub(crate) db_reference: String,
    pub(crate) lineage: String,
    pub(crate) taxon: String,
    pub(crate) sequence: String,
    pub(crate) keyword: String,
    pub(crate) molecule: String,
    pub(crate) property: String,
    pub(crate) protein_existence: String,
}

impl TagTable {
    /// Builds the table for one namespace variant.
    pub(crate) fn new(namespace: Namespace) -> Self {
        let ns = namespace.uri();
        Self {
            namespace,
            accession: qualify(ns, "accession"),
            name: qualify(ns, "name"),
            protein: qualify(ns, "protein"),
            recommended_name: qualify(ns, "recommendedName"),
            full_name: qualify(ns, "fullName"),
            gene: qualify(ns, "gene"),
            organism: qualify(ns, "organism"),
            db_reference: qualify(ns, "dbReference"),
            lineage: qualify(ns, "lineage"),
            taxon: qualify(ns, "taxon"),
            sequence: qualify(ns, "sequence"),
            keyword: qualify(ns, "keyword"),
            molecule: qualify(ns, "molecule"),
            property: qualify(ns, "property"),
            protein_existence: qualify(ns, "proteinExistence"),
        }
    }

    /// Returns true if a start tag is a top-level `entry` element in this
    /// table's namespace.
    pub(crate) fn is_entry(&self, resolve: &ResolveResult, start: &BytesStart) -> bool {
        matches!(resolve, ResolveResult::Bound(XmlNamespace(ns)) if *ns == self.namespace.uri().as_bytes())
            && start.local_name().as_ref() == b"entry"
    }
}

/// Qualifies a local name in Clark notation: `{namespace}local`.
fn qualify(ns: &str, local: &str) -> String {
    format!("{{{ns}}}{local}")
}

//! Parser-specific types for UniProt file processing.

use thiserror::Error;

/// Errors that can occur while parsing UniProt distribution files.
#[derive(Error, Debug)]
pub enum UniprotError {
    /// I/O error reading an input file.
    #[error("IO error reading UniProt file: {0}")]
    Io(#[from] std::io::Error),

    /// XML syntax or encoding error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed XML attribute.
    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Tab-delimited parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// No input paths were given.
    #[error("At least one input path is required")]
    NoInputFiles,

    /// Required attribute missing on an always-required element.
    #[error("Missing required attribute '{attribute}' on <{element}> element")]
    MissingAttribute {
        /// The name of the missing attribute.
        attribute: &'static str,
        /// The element the attribute was expected on.
        element: &'static str,
    },

    /// Required element missing from an entry.
    #[error("Missing required <{element}> element in entry")]
    MissingElement {
        /// The local name of the missing element.
        element: &'static str,
    },

    /// Numeric attribute that failed to parse.
    #[error("Invalid integer value: {value}")]
    InvalidInteger {
        /// The invalid value that was encountered.
        value: String,
    },

    /// Document ended inside an open element.
    #[error("Unexpected end of file inside <{element}> element")]
    UnexpectedEof {
        /// The element that was still open.
        element: String,
    },
}

/// Result type for UniProt parsing operations.
pub type UniprotResult<T> = Result<T, UniprotError>;

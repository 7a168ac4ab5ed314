//! Parsing of the SPDX license list JSON export.
//!
//! The input is the `licenses.json` document published in
//! `spdx/license-list-data`:
//!
//! ```json
//! {"licenseListVersion": "3.24", "licenses": [
//!   {"licenseId": "MIT", "name": "MIT License", "detailsUrl": "./MIT.json",
//!    "seeAlso": ["https://opensource.org/license/mit/"]}
//! ]}
//! ```
//!
//! Parsing is all-or-nothing: any malformed JSON or any entry with a missing or
//! mistyped field fails the whole document. Entry order is preserved because
//! catalog construction breaks id-length ties by input order.

use serde_json::error::Category;

use super::models::{LicenseList, RawLicenseEntry};

/// Error type for SPDX license list parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input is not well-formed JSON (or not valid UTF-8)
    MalformedJson {
        line: usize,
        column: usize,
        message: String,
    },

    /// Input is JSON but a required field is missing or has the wrong type
    InvalidShape {
        line: usize,
        column: usize,
        message: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedJson {
                line,
                column,
                message,
            } => write!(
                f,
                "Malformed license list JSON at line {} column {}: {}",
                line, column, message
            ),
            Self::InvalidShape {
                line,
                column,
                message,
            } => write!(
                f,
                "Unexpected license list shape at line {} column {}: {}",
                line, column, message
            ),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();
        let message = err.to_string();
        match err.classify() {
            Category::Data => Self::InvalidShape {
                line,
                column,
                message,
            },
            Category::Syntax | Category::Eof | Category::Io => Self::MalformedJson {
                line,
                column,
                message,
            },
        }
    }
}

/// Parse a license list document into its entries, in document order.
pub fn parse_json(document: impl AsRef<[u8]>) -> Result<Vec<RawLicenseEntry>, ParseError> {
    parse_document(document).map(|list| list.licenses)
}

/// Parse a license list document, keeping the document-level metadata.
pub fn parse_document(document: impl AsRef<[u8]>) -> Result<LicenseList, ParseError> {
    let list: LicenseList = serde_json::from_slice(document.as_ref())?;
    Ok(list)
}

use serde::{Deserialize, Serialize};

/// A canonical SPDX license as returned by catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LicenseRecord {
    /// SPDX short identifier, e.g. `Apache-2.0`.
    pub id: String,

    /// Human readable license name.
    pub name: String,

    /// The single `https` URL representing this license in results: the first
    /// `seeAlso` URL rewritten to `https`, or the SPDX page when the first
    /// `seeAlso` is missing or not a web URL.
    #[serde(rename = "url")]
    pub canonical_url: String,
}

impl LicenseRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        canonical_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            canonical_url: canonical_url.into(),
        }
    }
}

/// One element of the `licenses` array in an SPDX license list export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLicenseEntry {
    pub license_id: String,
    pub name: String,

    /// Relative link to the SPDX detail document. Informational only.
    pub details_url: String,

    /// External reference URLs, in the order the export lists them.
    pub see_also: Vec<String>,
}

/// The whole SPDX license list document.
///
/// Only the fields used for lookup are modelled; everything else in the
/// export (`isOsiApproved`, `reference`, `releaseDate`, ...) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseList {
    #[serde(default)]
    pub license_list_version: Option<String>,

    pub licenses: Vec<RawLicenseEntry>,
}

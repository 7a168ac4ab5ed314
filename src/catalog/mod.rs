//! SPDX license catalog: resolve license reference URLs to SPDX licenses.
//!
//! The catalog is built once from the SPDX license list export and is
//! immutable afterwards. Lookups go through [`url_key::normalize`], the same
//! function used while indexing:
//!
//! - a `seeAlso` URL written with `http` answers both `http` and `https`
//!   queries, since the https form is the record's canonical URL;
//! - a URL written with `https` answers only `https` queries;
//! - any other URL text (ftp, scheme-less, scheme-relative) answers only that
//!   exact text and never shares a key with web URLs;
//! - every license also answers `https://spdx.org/licenses/<id>.html`.
//!
//! When several licenses share a URL (typically a base id and its variants,
//! `GPL-2.0` / `GPL-2.0-only`), the shortest `licenseId` owns it. Equal lengths
//! keep whichever came first in the document.

mod models;
mod parser;
pub mod url_key;


use std::collections::HashMap;

use log::debug;

pub use models::{LicenseList, LicenseRecord, RawLicenseEntry};
pub use parser::{ParseError, parse_document, parse_json};
use url_key::{SchemeClass, UrlKey};

/// Owners of one scheme-stripped web URL key, as indices into `records`.
#[derive(Debug, Clone, Copy, Default)]
struct UrlOwners {
    /// Answers `https` queries
    secure: Option<usize>,

    /// Answers `http` queries
    plain: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct LicenseCatalog {
    license_list_version: Option<String>,
    records: Vec<LicenseRecord>,
    by_url: HashMap<String, UrlOwners>,
    /// Non-web URLs, keyed by their exact trimmed text
    by_opaque_url: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
    by_folded_id: HashMap<String, usize>,
}

impl LicenseCatalog {
    /// Build a catalog from raw entries, in document order.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = RawLicenseEntry>,
    {
        let mut catalog = Self::default();
        for entry in entries {
            catalog.insert(entry);
        }
        debug!(
            "Built SPDX license catalog: {} licenses, {} URL keys",
            catalog.records.len(),
            catalog.by_url.len() + catalog.by_opaque_url.len()
        );
        catalog
    }

    /// Build a catalog from a parsed license list, keeping its version.
    pub fn from_license_list(list: LicenseList) -> Self {
        let mut catalog = Self::build(list.licenses);
        catalog.license_list_version = list.license_list_version;
        catalog
    }

    /// Parse an SPDX license list document and build its catalog.
    pub fn parse_json(document: impl AsRef<[u8]>) -> Result<Self, ParseError> {
        parse_document(document).map(Self::from_license_list)
    }

    /// Resolve a license reference URL. Unknown URLs yield `None`.
    pub fn find_by_url(&self, url: &str) -> Option<&LicenseRecord> {
        let UrlKey { scheme, key } = url_key::normalize(url);
        let index = match scheme {
            SchemeClass::Https => self.by_url.get(key)?.secure?,
            SchemeClass::Http => self.by_url.get(key)?.plain?,
            SchemeClass::Opaque => *self.by_opaque_url.get(key)?,
        };
        self.records.get(index)
    }

    /// Resolve an SPDX identifier. Exact matches win over case-insensitive ones.
    pub fn find_by_identifier(&self, id: &str) -> Option<&LicenseRecord> {
        let index = self
            .by_id
            .get(id)
            .or_else(|| self.by_folded_id.get(&id.to_ascii_lowercase()))?;
        self.records.get(*index)
    }

    /// `licenseListVersion` of the source document, when it declared one.
    pub fn license_list_version(&self) -> Option<&str> {
        self.license_list_version.as_deref()
    }

    /// Records in document order.
    pub fn iter(&self) -> impl Iterator<Item = &LicenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn insert(&mut self, entry: RawLicenseEntry) {
        let spdx_url = url_key::spdx_catalog_url(&entry.license_id);
        let canonical_url = entry
            .see_also
            .first()
            .and_then(|url| url_key::to_https(url))
            .unwrap_or_else(|| spdx_url.clone());

        let index = self.records.len();
        self.records.push(LicenseRecord::new(
            entry.license_id,
            entry.name,
            canonical_url,
        ));

        for url in entry.see_also.iter().map(String::as_str).chain([spdx_url.as_str()]) {
            self.register_url(url, index);
        }
        self.register_id(index);
    }

    fn register_url(&mut self, url: &str, candidate: usize) {
        let UrlKey { scheme, key } = url_key::normalize(url);
        if scheme == SchemeClass::Opaque {
            let mut owner = self.by_opaque_url.get(key).copied();
            self.claim(&mut owner, candidate, url);
            if let Some(owner) = owner {
                self.by_opaque_url.insert(key.to_string(), owner);
            }
            return;
        }

        let mut owners = self.by_url.get(key).copied().unwrap_or_default();
        self.claim(&mut owners.secure, candidate, url);
        if scheme == SchemeClass::Http {
            self.claim(&mut owners.plain, candidate, url);
        }
        self.by_url.insert(key.to_string(), owners);
    }

    /// Give `slot` to `candidate` if it is free or held by a longer id.
    fn claim(&self, slot: &mut Option<usize>, candidate: usize, url: &str) {
        let Some(incumbent) = *slot else {
            *slot = Some(candidate);
            return;
        };
        let incumbent_id = &self.records[incumbent].id;
        let candidate_id = &self.records[candidate].id;
        if candidate_id.len() < incumbent_id.len() {
            debug!(
                "SPDX URL {} reassigned from {} to shorter id {}",
                url, incumbent_id, candidate_id
            );
            *slot = Some(candidate);
        }
    }

    fn register_id(&mut self, index: usize) {
        let id = &self.records[index].id;
        if self.by_id.contains_key(id) {
            debug!("Duplicate SPDX license id {} ignored", id);
            return;
        }
        self.by_id.insert(id.clone(), index);
        self.by_folded_id
            .entry(id.to_ascii_lowercase())
            .or_insert(index);
    }
}

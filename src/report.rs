//! Loading a license list from disk and reporting lookup results.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;

use crate::catalog::{LicenseCatalog, LicenseRecord};

/// Outcome of one query. `license` is `None` when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub query: String,
    pub license: Option<LicenseRecord>,
}

pub fn load_catalog(path: &Path) -> Result<LicenseCatalog> {
    let content = fs::read(path)
        .with_context(|| format!("Failed to read SPDX license list {}", path.display()))?;
    let catalog = LicenseCatalog::parse_json(&content)
        .with_context(|| format!("Failed to parse SPDX license list {}", path.display()))?;
    debug!(
        "Loaded {} SPDX licenses (list version {}) from {}",
        catalog.len(),
        catalog.license_list_version().unwrap_or("unknown"),
        path.display()
    );
    Ok(catalog)
}

/// Resolve identifiers first, then URLs, keeping the order they were given in.
pub fn resolve_all(catalog: &LicenseCatalog, ids: &[String], urls: &[String]) -> Vec<Resolution> {
    let by_id = ids.iter().map(|id| Resolution {
        query: id.clone(),
        license: catalog.find_by_identifier(id).cloned(),
    });
    let by_url = urls.iter().map(|url| Resolution {
        query: url.clone(),
        license: catalog.find_by_url(url).cloned(),
    });
    by_id.chain(by_url).collect()
}

pub fn to_json_line(resolution: &Resolution, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(resolution)?
    } else {
        serde_json::to_string(resolution)?
    };
    Ok(json)
}

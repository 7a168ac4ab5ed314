//! URL normalization shared by catalog insertion and lookup.
//!
//! A URL is reduced to a scheme class plus a lookup key. For `http` and `https`
//! URLs the key is the scheme-stripped remainder (`//host/path`), so both
//! spellings land in the same catalog bucket. Anything else keys on its exact
//! trimmed text, which the catalog keeps apart from web keys: a scheme-relative
//! `//host/path` is opaque and must not reach the bucket of `http://host/path`.

/// Which scheme a URL was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeClass {
    Http,
    Https,
    /// Any other scheme, or no scheme at all
    Opaque,
}

/// A normalized URL: its scheme class and the key it is indexed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlKey<'a> {
    pub scheme: SchemeClass,
    pub key: &'a str,
}

pub fn normalize(url: &str) -> UrlKey<'_> {
    let url = url.trim();
    if let Some(rest) = strip_scheme(url, "https") {
        UrlKey {
            scheme: SchemeClass::Https,
            key: rest,
        }
    } else if let Some(rest) = strip_scheme(url, "http") {
        UrlKey {
            scheme: SchemeClass::Http,
            key: rest,
        }
    } else {
        UrlKey {
            scheme: SchemeClass::Opaque,
            key: url,
        }
    }
}

/// Rewrite an `http` or `https` URL into its `https` form. Other URLs have no
/// `https` form and yield `None`.
pub fn to_https(url: &str) -> Option<String> {
    let normalized = normalize(url);
    match normalized.scheme {
        SchemeClass::Http | SchemeClass::Https => Some(format!("https:{}", normalized.key)),
        SchemeClass::Opaque => None,
    }
}

/// The SPDX website page for a license identifier.
pub fn spdx_catalog_url(license_id: &str) -> String {
    format!("https://spdx.org/licenses/{}.html", license_id)
}

// Returns the `//host/path` remainder when `url` starts with `<scheme>://`.
fn strip_scheme<'a>(url: &'a str, scheme: &str) -> Option<&'a str> {
    let (head, tail) = url.split_at_checked(scheme.len())?;
    if head.eq_ignore_ascii_case(scheme) && tail.starts_with("://") {
        Some(&tail[1..])
    } else {
        None
    }
}

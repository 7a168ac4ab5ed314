use spdx_catalog::{LicenseCatalog, LicenseRecord, load_catalog, resolve_all};
use std::io::Write;
use std::path::Path;

const FIXTURE: &str = "testdata/spdx/licenses.json";

fn load_fixture() -> LicenseCatalog {
    load_catalog(Path::new(FIXTURE)).expect("Fixture should load")
}

#[test]
fn test_fixture_loads_with_version() {
    let catalog = load_fixture();
    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog.license_list_version(), Some("3.24"));
}

#[test]
fn test_shared_urls_resolve_to_shortest_id() {
    let catalog = load_fixture();

    for url in [
        "https://www.gnu.org/licenses/old-licenses/gpl-2.0-standalone.html",
        "https://opensource.org/licenses/GPL-2.0",
    ] {
        let license = catalog.find_by_url(url).expect("GPL URL should resolve");
        assert_eq!(license.id, "GPL-2.0", "{}", url);
    }

    let only = catalog
        .find_by_url("https://spdx.org/licenses/GPL-2.0-only.html")
        .expect("SPDX page should resolve");
    assert_eq!(only.id, "GPL-2.0-only");
}

#[test]
fn test_maven_style_urls() {
    let catalog = load_fixture();

    assert_eq!(
        catalog.find_by_url("https://www.apache.org/licenses/LICENSE-2.0"),
        Some(&LicenseRecord::new(
            "Apache-2.0",
            "Apache License 2.0",
            "https://www.apache.org/licenses/LICENSE-2.0"
        ))
    );
    // Registered only with https, so the http spelling stays unmapped.
    assert_eq!(
        catalog.find_by_url("http://www.apache.org/licenses/LICENSE-2.0"),
        None
    );

    let cc0 = catalog
        .find_by_url("https://creativecommons.org/publicdomain/zero/1.0/legalcode")
        .expect("https form of an http seeAlso should resolve");
    assert_eq!(cc0.id, "CC0-1.0");
    assert_eq!(
        cc0.canonical_url,
        "https://creativecommons.org/publicdomain/zero/1.0/legalcode"
    );
}

#[test]
fn test_every_license_reachable_by_spdx_page() {
    let catalog = load_fixture();
    for record in catalog.iter() {
        let url = format!("https://spdx.org/licenses/{}.html", record.id);
        assert_eq!(catalog.find_by_url(&url), Some(record), "{}", url);
    }
}

#[test]
fn test_license_without_see_also() {
    let catalog = load_fixture();
    let unlicense = catalog.find_by_identifier("unlicense").unwrap();
    assert_eq!(
        unlicense.canonical_url,
        "https://spdx.org/licenses/Unlicense.html"
    );
}

#[test]
fn test_resolve_all_reports_misses() {
    let catalog = load_fixture();
    let ids = vec!["mit".to_string(), "NOPE".to_string()];
    let urls = vec![
        "https://opensource.org/license/mit/".to_string(),
        "https://example.com/unknown".to_string(),
    ];

    let results = resolve_all(&catalog, &ids, &urls);
    let summary: Vec<(&str, Option<&str>)> = results
        .iter()
        .map(|r| (r.query.as_str(), r.license.as_ref().map(|l| l.id.as_str())))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("mit", Some("MIT")),
            ("NOPE", None),
            ("https://opensource.org/license/mit/", Some("MIT")),
            ("https://example.com/unknown", None),
        ]
    );

    let json = serde_json::to_value(&results[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "query": "mit",
            "license": {
                "id": "MIT",
                "name": "MIT License",
                "url": "https://opensource.org/license/mit/"
            }
        })
    );
    let json = serde_json::to_value(&results[1]).unwrap();
    assert_eq!(json, serde_json::json!({"query": "NOPE", "license": null}));
}

#[test]
fn test_load_catalog_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_catalog(&dir.path().join("licenses.json")).unwrap_err();
    assert!(
        err.to_string().contains("Failed to read SPDX license list"),
        "{}",
        err
    );
}

#[test]
fn test_load_catalog_rejects_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"licenses": [{"licenseId": "MIT"}]}"#)
        .unwrap();

    let err = load_catalog(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse SPDX license list"));
    assert!(
        err.downcast_ref::<spdx_catalog::ParseError>().is_some(),
        "Parse error should be preserved as the source: {:?}",
        err
    );
}

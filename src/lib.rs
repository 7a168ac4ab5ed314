pub mod catalog;
pub mod cli;
pub mod report;

pub use catalog::{
    LicenseCatalog, LicenseList, LicenseRecord, ParseError, RawLicenseEntry, parse_document,
    parse_json,
};
pub use report::{Resolution, load_catalog, resolve_all};

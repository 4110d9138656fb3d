use chrono::NaiveDate;

pub const EXPORT_FILE_PREFIX: &str = "rkn_registry_";

/// A registry snapshot ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub contents: Vec<u8>,
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("{}{}.json", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}
